//! Terminal surface.
//!
//! Writes the named regions as plain text with light ANSI styling. Every
//! region exists on a terminal, so all setters return `true`; pagination is
//! suppressed when there is a single page.

use std::io::Write;

use super::{Card, StatSlot, Surface};
use crate::profile::CoauthorRecord;

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// ANSI markers for owner-name highlighting, for use with
/// [`super::Highlighter::with_markers`].
pub const HIGHLIGHT_MARKERS: (&str, &str) = (BOLD, RESET);

/// Surface that renders to any writer, normally stdout.
#[derive(Debug)]
pub struct TermSurface<W: Write> {
    out: W,
}

impl<W: Write> TermSurface<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn line(&mut self, text: &str) {
        // Ignore broken-pipe style failures; the shell is about to exit anyway
        let _ = writeln!(self.out, "{text}");
    }
}

impl<W: Write> Surface for TermSurface<W> {
    fn set_owner_name(&mut self, name: &str) -> bool {
        self.line(&format!("{BOLD}{name}{RESET}"));
        true
    }

    fn set_affiliation(&mut self, text: &str) -> bool {
        self.line(text);
        true
    }

    fn set_stat(&mut self, slot: StatSlot, value: u32) -> bool {
        self.line(&format!("  {:<16} {value}", slot.label()));
        true
    }

    fn set_publications(&mut self, cards: &[Card]) -> bool {
        for card in cards {
            self.line("");
            self.line(&format!("{BOLD}{}{RESET} {DIM}[{}]{RESET}", card.title, card.category.as_str()));
            self.line(&format!("  {}", card.authors));
            self.line(&format!("  {}", card.venue_line));
            self.line(&format!("  {DIM}{}{RESET}", card.citation_line));
            for link in &card.links {
                self.line(&format!("  {}: {}", link.label, link.url));
            }
        }
        true
    }

    fn set_coauthors(&mut self, coauthors: &[CoauthorRecord]) -> bool {
        if coauthors.is_empty() {
            self.line("No coauthors found");
            return true;
        }
        for coauthor in coauthors {
            match coauthor.profile_url() {
                Some(url) => {
                    self.line(&format!("  {} ({}) {DIM}{url}{RESET}", coauthor.name, coauthor.count));
                }
                None => self.line(&format!("  {} ({})", coauthor.name, coauthor.count)),
            }
        }
        true
    }

    fn set_results_count(&mut self, label: &str) -> bool {
        self.line("");
        self.line(label);
        true
    }

    fn set_pagination(&mut self, page: usize, total_pages: usize) -> bool {
        if total_pages > 1 {
            self.line(&format!("{DIM}Page {page} of {total_pages}{RESET}"));
        }
        true
    }
}

//! Render layer.
//!
//! The engine never touches a concrete output; it drives the [`Surface`]
//! trait's named regions. A surface reports a region as absent by returning
//! `false`, in which case the driver tells the observability sink and skips
//! that step without aborting the independent ones.

mod card;
mod memory;
mod term;

pub use card::{Card, CardLink, Highlighter};
pub use memory::PageModel;
pub use term::{HIGHLIGHT_MARKERS, TermSurface};

use crate::observe::EventSink;
use crate::profile::{CitationStats, CoauthorRecord, ProfileSnapshot};
use crate::view::DerivedView;

/// The four labelled statistic slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatSlot {
    /// Total citations across all papers.
    TotalCitations,

    /// h-index.
    HIndex,

    /// Locally computed i10-index.
    I10Index,

    /// Paper count.
    Papers,
}

impl StatSlot {
    /// All slots in display order.
    pub const ALL: [Self; 4] = [Self::TotalCitations, Self::HIndex, Self::I10Index, Self::Papers];

    /// Display label for this slot.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TotalCitations => "Total Citations",
            Self::HIndex => "h-index",
            Self::I10Index => "i10-index",
            Self::Papers => "Papers",
        }
    }

    /// Pick this slot's value out of the stats.
    #[must_use]
    pub const fn value(self, stats: &CitationStats) -> u32 {
        match self {
            Self::TotalCitations => stats.total_citations,
            Self::HIndex => stats.h_index,
            Self::I10Index => stats.i10_index,
            Self::Papers => stats.paper_count,
        }
    }
}

/// Named attachment points the surrounding page exposes.
///
/// Each method returns `false` when the region is missing; the driver logs
/// and moves on. A surface may mirror the owner name into several places.
pub trait Surface {
    /// Owner display name.
    fn set_owner_name(&mut self, name: &str) -> bool;

    /// Affiliation text block.
    fn set_affiliation(&mut self, text: &str) -> bool;

    /// One labelled statistic slot.
    fn set_stat(&mut self, slot: StatSlot, value: u32) -> bool;

    /// The publication-list container: one card per visible record.
    fn set_publications(&mut self, cards: &[Card]) -> bool;

    /// The coauthor-list container.
    fn set_coauthors(&mut self, coauthors: &[CoauthorRecord]) -> bool;

    /// Results-count display slot.
    fn set_results_count(&mut self, label: &str) -> bool;

    /// Current-page / total-pages display slot.
    fn set_pagination(&mut self, page: usize, total_pages: usize) -> bool;
}

/// Render the profile regions (name, affiliation, stats, coauthors).
pub fn render_profile(surface: &mut dyn Surface, snapshot: &ProfileSnapshot, sink: &dyn EventSink) {
    step(surface.set_owner_name(&snapshot.name), "owner-name", sink);
    step(surface.set_affiliation(&snapshot.affiliation), "affiliation", sink);

    for slot in StatSlot::ALL {
        step(surface.set_stat(slot, slot.value(&snapshot.citation_stats)), "stats", sink);
    }

    step(surface.set_coauthors(&snapshot.coauthors), "coauthors", sink);
}

/// Render the view regions (publication cards, results count, pagination).
pub fn render_view(
    surface: &mut dyn Surface,
    derived: &DerivedView<'_>,
    highlighter: &Highlighter,
    sink: &dyn EventSink,
) {
    let cards: Vec<Card> = derived.items.iter().map(|entry| Card::new(entry, highlighter)).collect();

    step(surface.set_publications(&cards), "publications", sink);
    step(surface.set_results_count(&derived.results_label()), "results-count", sink);
    step(surface.set_pagination(derived.page, derived.total_pages), "pagination", sink);
}

fn step(present: bool, region: &str, sink: &dyn EventSink) {
    if !present {
        sink.region_missing(region);
    }
}

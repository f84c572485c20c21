//! Publication card composition.
//!
//! A [`Card`] is the presentation form of one visible record: formatted
//! venue and citation lines, the outbound links, and the authors string
//! with the profile owner's name highlighted.

use chrono::{Datelike, Utc};
use regex::Regex;

use crate::view::{AnnotatedPublication, Category};

/// Wraps occurrences of the owner's name in marker strings.
///
/// Matches the exact name plus "F. Last" and "F Last" initial variants,
/// word-bounded and case-insensitive.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
    prefix: String,
    suffix: String,
}

impl Highlighter {
    /// Highlighter with the default `**` markers.
    #[must_use]
    pub fn new(owner: &str) -> Self {
        Self::with_markers(owner, "**", "**")
    }

    /// Highlighter with explicit markers (e.g. ANSI codes or HTML tags).
    #[must_use]
    pub fn with_markers(owner: &str, prefix: &str, suffix: &str) -> Self {
        let variants = name_variants(owner);
        let pattern = if variants.is_empty() {
            None
        } else {
            let alternation =
                variants.iter().map(|v| regex::escape(v)).collect::<Vec<_>>().join("|");
            Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).ok()
        };

        Self { pattern, prefix: prefix.to_string(), suffix: suffix.to_string() }
    }

    /// Return `text` with every owner-name occurrence wrapped in markers.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        match &self.pattern {
            Some(re) => re
                .replace_all(text, |caps: &regex::Captures<'_>| {
                    format!("{}{}{}", self.prefix, &caps[0], self.suffix)
                })
                .into_owned(),
            None => text.to_string(),
        }
    }
}

/// Exact name plus initial forms, e.g. "Niklas Bubeck" -> also
/// "N. Bubeck" and "N Bubeck". Single-word names have no variants.
fn name_variants(owner: &str) -> Vec<String> {
    let words: Vec<&str> = owner.split_whitespace().collect();
    let Some((first, rest)) = words.split_first() else {
        return Vec::new();
    };

    let mut variants = vec![words.join(" ")];
    if let (Some(initial), false) = (first.chars().next(), rest.is_empty()) {
        let last = rest.join(" ");
        variants.push(format!("{initial}. {last}"));
        variants.push(format!("{initial} {last}"));
    }
    variants
}

/// One outbound link on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLink {
    /// Display label.
    pub label: &'static str,

    /// Target URL.
    pub url: String,
}

/// Presentation form of one visible publication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Stable handle of the underlying roster entry.
    pub handle: usize,

    /// Title, "Untitled" when empty.
    pub title: String,

    /// Authors string with the owner highlighted.
    pub authors: String,

    /// "Venue, Year" or just the venue when the year is unknown.
    pub venue_line: String,

    /// "Cited by N" plus "• K years ago" when the year is known.
    pub citation_line: String,

    /// Derived category tag.
    pub category: Category,

    /// Outbound links in display order.
    pub links: Vec<CardLink>,
}

impl Card {
    /// Build a card for the current year.
    #[must_use]
    pub fn new(entry: &AnnotatedPublication, highlighter: &Highlighter) -> Self {
        Self::with_year(entry, highlighter, Utc::now().year())
    }

    /// Build a card against an explicit current year.
    #[must_use]
    pub fn with_year(entry: &AnnotatedPublication, highlighter: &Highlighter, now_year: i32) -> Self {
        let record = &entry.record;

        let title = if record.title.is_empty() {
            "Untitled".to_string()
        } else {
            record.title.clone()
        };

        let venue_line = match record.year {
            Some(year) => format!("{}, {year}", record.venue),
            None => record.venue.clone(),
        };

        let citation_line = match record.year {
            Some(year) => {
                format!("Cited by {} • {} years ago", record.cited_by, now_year - year)
            }
            None => format!("Cited by {}", record.cited_by),
        };

        let mut links = Vec::new();
        if let Some(url) = &record.link {
            links.push(CardLink { label: "PDF", url: url.clone() });
        }
        if let Some(url) = &record.semantic_scholar_url {
            links.push(CardLink { label: "Semantic Scholar", url: url.clone() });
        }

        Self {
            handle: entry.handle,
            title,
            authors: highlighter.apply(&record.authors),
            venue_line,
            citation_line,
            category: entry.category,
            links,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::PublicationRecord;
    use crate::view::categorize;

    fn entry(record: PublicationRecord) -> AnnotatedPublication {
        AnnotatedPublication { category: categorize(&record.venue), record, handle: 0 }
    }

    fn record() -> PublicationRecord {
        PublicationRecord {
            title: "Deep nets".to_string(),
            authors: "Niklas Bubeck, Ada L.".to_string(),
            venue: "CVPR".to_string(),
            cited_by: 12,
            year: Some(2022),
            link: Some("https://arxiv/p.pdf".to_string()),
            publication_url: Some("https://s2/p".to_string()),
            semantic_scholar_url: Some("https://www.semanticscholar.org/paper/p".to_string()),
        }
    }

    #[test]
    fn test_highlighter_variants() {
        let h = Highlighter::new("Niklas Bubeck");

        assert_eq!(h.apply("Niklas Bubeck, Ada L."), "**Niklas Bubeck**, Ada L.");
        assert_eq!(h.apply("N. Bubeck, Ada L."), "**N. Bubeck**, Ada L.");
        assert_eq!(h.apply("N Bubeck"), "**N Bubeck**");
        // Case-insensitive, other names untouched
        assert_eq!(h.apply("niklas bubeck"), "**niklas bubeck**");
        assert_eq!(h.apply("S. Bubeck"), "S. Bubeck");
    }

    #[test]
    fn test_highlighter_empty_owner_is_noop() {
        let h = Highlighter::new("");
        assert_eq!(h.apply("Anyone"), "Anyone");
    }

    #[test]
    fn test_card_lines() {
        let card = Card::with_year(&entry(record()), &Highlighter::new("Niklas Bubeck"), 2025);

        assert_eq!(card.title, "Deep nets");
        assert_eq!(card.authors, "**Niklas Bubeck**, Ada L.");
        assert_eq!(card.venue_line, "CVPR, 2022");
        assert_eq!(card.citation_line, "Cited by 12 • 3 years ago");
        assert_eq!(card.category, Category::Conference);
        assert_eq!(card.links.len(), 2);
        assert_eq!(card.links[0].label, "PDF");
    }

    #[test]
    fn test_card_fallbacks() {
        let mut bare = record();
        bare.title = String::new();
        bare.year = None;
        bare.link = None;
        bare.semantic_scholar_url = None;

        let card = Card::with_year(&entry(bare), &Highlighter::new("X"), 2025);

        assert_eq!(card.title, "Untitled");
        assert_eq!(card.venue_line, "CVPR");
        assert_eq!(card.citation_line, "Cited by 12");
        assert!(card.links.is_empty());
    }
}

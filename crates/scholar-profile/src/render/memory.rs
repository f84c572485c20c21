//! In-memory page model.
//!
//! A [`Surface`] implementation that records what was written into each
//! named region. Used by the test suites and by embedders that want the
//! rendered state without a terminal. Individual regions can be disabled to
//! exercise the missing-region path.

use std::collections::HashSet;

use super::{Card, StatSlot, Surface};
use crate::profile::CoauthorRecord;

/// Region names accepted by [`PageModel::disable`].
const REGIONS: &[&str] = &[
    "owner-name",
    "affiliation",
    "stats",
    "publications",
    "coauthors",
    "results-count",
    "pagination",
];

/// In-memory named-region surface.
#[derive(Debug, Default)]
pub struct PageModel {
    /// Owner name as mirrored into the page's two name slots.
    pub owner_names: Vec<String>,

    /// Affiliation text.
    pub affiliation: Option<String>,

    /// Labelled statistic values in display order.
    pub stats: Vec<(String, u32)>,

    /// Cards for the visible publications.
    pub publications: Vec<Card>,

    /// Coauthor lines, "Name (count)".
    pub coauthors: Vec<String>,

    /// Results-count label.
    pub results_count: Option<String>,

    /// Current page and total pages.
    pub pagination: Option<(usize, usize)>,

    disabled: HashSet<&'static str>,
}

impl PageModel {
    /// Remove a named region, as a page missing that attachment point would.
    ///
    /// # Panics
    ///
    /// Panics on an unknown region name (test-bug guard).
    pub fn disable(&mut self, region: &str) {
        let known = REGIONS
            .iter()
            .copied()
            .find(|r| *r == region)
            .unwrap_or_else(|| panic!("unknown region: {region}"));
        self.disabled.insert(known);
    }

    fn has(&self, region: &str) -> bool {
        !self.disabled.contains(region)
    }
}

impl Surface for PageModel {
    fn set_owner_name(&mut self, name: &str) -> bool {
        if !self.has("owner-name") {
            return false;
        }
        // The page shows the name in two places (nav logo and hero)
        self.owner_names = vec![name.to_string(), name.to_string()];
        true
    }

    fn set_affiliation(&mut self, text: &str) -> bool {
        if !self.has("affiliation") {
            return false;
        }
        self.affiliation = Some(text.to_string());
        true
    }

    fn set_stat(&mut self, slot: StatSlot, value: u32) -> bool {
        if !self.has("stats") {
            return false;
        }
        self.stats.retain(|(label, _)| label != slot.label());
        self.stats.push((slot.label().to_string(), value));
        true
    }

    fn set_publications(&mut self, cards: &[Card]) -> bool {
        if !self.has("publications") {
            return false;
        }
        self.publications = cards.to_vec();
        true
    }

    fn set_coauthors(&mut self, coauthors: &[CoauthorRecord]) -> bool {
        if !self.has("coauthors") {
            return false;
        }
        self.coauthors =
            coauthors.iter().map(|c| format!("{} ({})", c.name, c.count)).collect();
        true
    }

    fn set_results_count(&mut self, label: &str) -> bool {
        if !self.has("results-count") {
            return false;
        }
        self.results_count = Some(label.to_string());
        true
    }

    fn set_pagination(&mut self, page: usize, total_pages: usize) -> bool {
        if !self.has("pagination") {
            return false;
        }
        self.pagination = Some((page, total_pages));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_stat_replaces_by_label() {
        let mut page = PageModel::default();
        assert!(page.set_stat(StatSlot::HIndex, 5));
        assert!(page.set_stat(StatSlot::HIndex, 6));

        assert_eq!(page.stats, vec![("h-index".to_string(), 6)]);
    }

    #[test]
    fn test_disabled_region_reports_absent() {
        let mut page = PageModel::default();
        page.disable("pagination");

        assert!(!page.set_pagination(1, 2));
        assert!(page.pagination.is_none());
        assert!(page.set_results_count("3 publications"));
    }

    #[test]
    #[should_panic(expected = "unknown region")]
    fn test_disable_unknown_region_panics() {
        PageModel::default().disable("sidebar");
    }
}

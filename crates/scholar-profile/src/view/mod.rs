//! Publication view engine.
//!
//! Owns the roster of annotated records and an explicit [`ViewState`];
//! derives the visible page through the pure [`recompute`] pipeline
//! (filter → search → stable sort → paginate). User input arrives as
//! [`Action`] values through a single dispatch point, so every mutation
//! re-derives the view and the page invariant `1 ≤ page ≤ max(1, pages)`
//! holds at all times.

mod category;
mod sort;

pub use category::{Category, CategoryFilter, UnknownFilter, categorize};
pub use sort::SortOrder;

use serde::{Deserialize, Serialize};

use crate::config::display;
use crate::profile::PublicationRecord;

/// A roster entry: the record plus its derived category and the stable
/// handle the render layer keys presentation elements on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedPublication {
    /// The normalized record.
    pub record: PublicationRecord,

    /// Derived venue category.
    pub category: Category,

    /// Stable presentation handle (roster position at load time).
    pub handle: usize,
}

/// The four user-driven axes of the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Category filter.
    pub filter: CategoryFilter,

    /// Sort order.
    pub sort: SortOrder,

    /// Free-text search query. Matched case-insensitively against title,
    /// authors, and venue.
    pub query: String,

    /// Current page, 1-based.
    pub page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filter: CategoryFilter::All,
            sort: SortOrder::Newest,
            query: String::new(),
            page: 1,
        }
    }
}

/// A named user action. The shell wires input events to these exactly once;
/// each action maps to one state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Set the category filter; resets to page 1.
    SetFilter(CategoryFilter),

    /// Set the sort order; resets to page 1.
    SetSort(SortOrder),

    /// Set the search query; resets to page 1.
    SetSearch(String),

    /// Clear the search query; resets to page 1.
    ClearSearch,

    /// Jump to a page, clamped into range. Touches nothing else.
    SetPage(usize),

    /// Advance one page, clamped.
    NextPage,

    /// Go back one page, clamped.
    PrevPage,
}

/// The derived view: the visible window plus its bookkeeping, produced
/// atomically by one [`recompute`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView<'a> {
    /// Records visible on the current page, in display order.
    pub items: Vec<&'a AnnotatedPublication>,

    /// Records matching the filter and search axes.
    pub matched: usize,

    /// Full roster size.
    pub total: usize,

    /// Current page after clamping.
    pub page: usize,

    /// Total pages, at least 1 even for an empty result set.
    pub total_pages: usize,

    /// Whether a narrowing filter or search is active.
    pub narrowed: bool,
}

impl DerivedView<'_> {
    /// Results-count display rule: just the count when nothing narrows the
    /// roster, "N of M" once a filter or search is active.
    #[must_use]
    pub fn results_label(&self) -> String {
        if self.narrowed {
            format!("{} of {} publications", self.matched, self.total)
        } else {
            format!("{} publications", self.matched)
        }
    }
}

/// Derive the visible subset. Pure and deterministic: filter, then search,
/// then stable sort, then paginate.
#[must_use]
pub fn recompute<'a>(
    roster: &'a [AnnotatedPublication],
    state: &ViewState,
    page_size: usize,
) -> DerivedView<'a> {
    let query = state.query.to_lowercase();

    let mut matched: Vec<&AnnotatedPublication> = roster
        .iter()
        .filter(|entry| state.filter.matches(entry.category))
        .filter(|entry| query.is_empty() || matches_query(&entry.record, &query))
        .collect();

    // Vec::sort_by is stable: ties keep roster order
    matched.sort_by(|a, b| state.sort.compare(&a.record, &b.record));

    let matched_count = matched.len();
    let total_pages = matched_count.div_ceil(page_size).max(1);
    let page = state.page.clamp(1, total_pages);

    let start = (page - 1) * page_size;
    let items = matched.into_iter().skip(start).take(page_size).collect();

    DerivedView {
        items,
        matched: matched_count,
        total: roster.len(),
        page,
        total_pages,
        narrowed: state.filter.is_narrowing() || !state.query.is_empty(),
    }
}

/// Search matches when the lower-cased query is a substring of the
/// lower-cased title, authors, or venue.
fn matches_query(record: &PublicationRecord, query: &str) -> bool {
    record.title.to_lowercase().contains(query)
        || record.authors.to_lowercase().contains(query)
        || record.venue.to_lowercase().contains(query)
}

/// The view engine instance: roster plus the single mutable [`ViewState`].
#[derive(Debug)]
pub struct PublicationView {
    roster: Vec<AnnotatedPublication>,
    state: ViewState,
    page_size: usize,
}

impl Default for PublicationView {
    fn default() -> Self {
        Self::new()
    }
}

impl PublicationView {
    /// Create an empty view with the default page size.
    #[must_use]
    pub fn new() -> Self {
        Self { roster: Vec::new(), state: ViewState::default(), page_size: display::PAGE_SIZE }
    }

    /// Create an empty view with a custom page size.
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be positive");
        Self { roster: Vec::new(), state: ViewState::default(), page_size }
    }

    /// Load a roster, tagging each record with its derived category and a
    /// stable handle. Resets filter, sort, search, and page.
    pub fn load(&mut self, records: impl IntoIterator<Item = PublicationRecord>) {
        self.roster = records
            .into_iter()
            .enumerate()
            .map(|(handle, record)| AnnotatedPublication {
                category: categorize(&record.venue),
                record,
                handle,
            })
            .collect();
        self.state = ViewState::default();
    }

    /// Apply one user action and keep the page invariant.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetFilter(filter) => {
                self.state.filter = filter;
                self.state.page = 1;
            }
            Action::SetSort(sort) => {
                self.state.sort = sort;
                self.state.page = 1;
            }
            Action::SetSearch(query) => {
                self.state.query = query;
                self.state.page = 1;
            }
            Action::ClearSearch => {
                self.state.query.clear();
                self.state.page = 1;
            }
            Action::SetPage(page) => {
                self.state.page = page.clamp(1, self.total_pages());
            }
            Action::NextPage => {
                self.state.page = (self.state.page + 1).min(self.total_pages());
            }
            Action::PrevPage => {
                self.state.page = self.state.page.saturating_sub(1).max(1);
            }
        }
    }

    /// Derive the current visible subset.
    #[must_use]
    pub fn derive(&self) -> DerivedView<'_> {
        recompute(&self.roster, &self.state, self.page_size)
    }

    /// Current view state.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Full roster.
    #[must_use]
    pub fn roster(&self) -> &[AnnotatedPublication] {
        &self.roster
    }

    /// Total pages under the current filter and search axes.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        let matched = self
            .roster
            .iter()
            .filter(|entry| self.state.filter.matches(entry.category))
            .filter(|entry| {
                let query = self.state.query.to_lowercase();
                query.is_empty() || matches_query(&entry.record, &query)
            })
            .count();
        matched.div_ceil(self.page_size).max(1)
    }
}

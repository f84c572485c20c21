//! Normalized profile domain model.
//!
//! A [`ProfileSnapshot`] is the immutable result of one successful
//! fetch-and-normalize cycle: a pure function of the raw API response plus
//! the preconfigured fallback identity. Every field has a defined fallback,
//! so the view layer never sees a hole.

mod normalize;

pub use normalize::normalize;

use serde::{Deserialize, Serialize};

use crate::config::api;

/// Immutable result of one successful fetch-and-normalize cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    /// Profile owner's display name.
    pub name: String,

    /// Affiliation text.
    pub affiliation: String,

    /// Homepage URL (may be empty).
    pub homepage: String,

    /// Derived research interests, at most 3.
    pub interests: Vec<String>,

    /// Aggregate citation statistics.
    pub citation_stats: CitationStats,

    /// Publications in source API order (no order guaranteed upstream).
    pub publications: Vec<PublicationRecord>,

    /// Top coauthors, at most 6, sorted by descending collaboration count.
    pub coauthors: Vec<CoauthorRecord>,
}

/// Aggregate citation statistics. All values are non-negative by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationStats {
    /// Total citations across all papers.
    pub total_citations: u32,

    /// h-index as reported upstream.
    pub h_index: u32,

    /// i10-index: papers with at least 10 citations. Always computed
    /// locally from the paper list, never trusted from upstream.
    pub i10_index: u32,

    /// Total paper count.
    pub paper_count: u32,
}

/// One normalized publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationRecord {
    /// Paper title. May be empty.
    pub title: String,

    /// Author names joined by ", "; "Unknown" if absent.
    pub authors: String,

    /// Venue text; "Unknown Venue" if absent.
    pub venue: String,

    /// Citation count, 0 if absent.
    pub cited_by: u32,

    /// Publication year, if known.
    pub year: Option<i32>,

    /// Preferred link: open-access PDF if present, else the landing page.
    pub link: Option<String>,

    /// Landing page URL.
    pub publication_url: Option<String>,

    /// Semantic Scholar paper page, derived from the paper id.
    pub semantic_scholar_url: Option<String>,
}

impl PublicationRecord {
    /// Whether any outbound link is known for this paper.
    #[must_use]
    pub fn has_link(&self) -> bool {
        self.link.is_some()
    }
}

/// One aggregated coauthor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoauthorRecord {
    /// Exact name string as it appeared in paper author lists.
    pub name: String,

    /// Number of papers co-authored within the fetched set. Always ≥ 1.
    pub count: u32,

    /// Most recently seen author id for this name.
    pub author_id: Option<String>,
}

impl CoauthorRecord {
    /// Semantic Scholar author page, when the id is known.
    #[must_use]
    pub fn profile_url(&self) -> Option<String> {
        self.author_id.as_ref().map(|id| format!("{}/{}", api::AUTHOR_PAGE, id))
    }
}

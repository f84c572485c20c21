//! Venue categorization.
//!
//! Single source of truth for the category tag used by filtering: every
//! path that loads records into the view engine categorizes through
//! [`categorize`], so differently sourced rosters always agree.

use serde::{Deserialize, Serialize};

/// Venue substrings that mark a conference publication.
const CONFERENCE_MARKERS: &[&str] = &[
    "conference",
    "proceedings",
    "workshop",
    "symposium",
    "cvpr",
    "iclr",
    "neurips",
    "icml",
    "iccv",
    "eccv",
];

/// Venue substrings that mark a preprint.
const PREPRINT_MARKERS: &[&str] = &["arxiv", "preprint", "biorxiv", "medrxiv"];

/// Publication category derived from venue text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Conference, workshop, or symposium publication.
    Conference,

    /// Preprint server publication.
    Preprint,

    /// Everything else, including unknown venues.
    Journal,
}

impl Category {
    /// Stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Conference => "conference",
            Self::Preprint => "preprint",
            Self::Journal => "journal",
        }
    }
}

/// Categorize a venue by case-insensitive substring match against the two
/// fixed marker sets. Unknown venues default to journal.
#[must_use]
pub fn categorize(venue: &str) -> Category {
    let venue = venue.to_lowercase();

    if CONFERENCE_MARKERS.iter().any(|marker| venue.contains(marker)) {
        Category::Conference
    } else if PREPRINT_MARKERS.iter().any(|marker| venue.contains(marker)) {
        Category::Preprint
    } else {
        Category::Journal
    }
}

/// Category filter axis of the view state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// No category filtering.
    #[default]
    All,

    /// Only conference publications.
    Conference,

    /// Only preprints.
    Preprint,

    /// Only journal publications.
    Journal,
}

impl CategoryFilter {
    /// Whether a record with the given category passes this filter.
    #[must_use]
    pub const fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Conference => matches!(category, Category::Conference),
            Self::Preprint => matches!(category, Category::Preprint),
            Self::Journal => matches!(category, Category::Journal),
        }
    }

    /// Whether this filter narrows the roster.
    #[must_use]
    pub const fn is_narrowing(self) -> bool {
        !matches!(self, Self::All)
    }

    /// Stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Conference => "conference",
            Self::Preprint => "preprint",
            Self::Journal => "journal",
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "conference" => Ok(Self::Conference),
            "preprint" => Ok(Self::Preprint),
            "journal" => Ok(Self::Journal),
            other => Err(UnknownFilter(other.to_string())),
        }
    }
}

/// Unrecognized filter label.
#[derive(Debug, thiserror::Error)]
#[error("unknown filter: {0} (expected all, conference, journal, or preprint)")]
pub struct UnknownFilter(String);

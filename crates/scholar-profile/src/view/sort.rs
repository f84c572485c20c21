//! Sort orderings for the publication view.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::profile::PublicationRecord;

/// One of the six supported orderings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Year descending.
    #[default]
    Newest,

    /// Year ascending.
    Oldest,

    /// Citation count descending.
    CitationsDesc,

    /// Citation count ascending.
    CitationsAsc,

    /// Title ascending, case-insensitive.
    TitleAsc,

    /// Title descending, case-insensitive.
    TitleDesc,
}

impl SortOrder {
    /// Parse a sort label. Unrecognized values behave as `Newest`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "oldest" => Self::Oldest,
            "citations-desc" => Self::CitationsDesc,
            "citations-asc" => Self::CitationsAsc,
            "title-asc" => Self::TitleAsc,
            "title-desc" => Self::TitleDesc,
            _ => Self::Newest,
        }
    }

    /// Stable kebab-case label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::CitationsDesc => "citations-desc",
            Self::CitationsAsc => "citations-asc",
            Self::TitleAsc => "title-asc",
            Self::TitleDesc => "title-desc",
        }
    }

    /// Compare two records under this ordering. Used with a stable sort, so
    /// equal records keep their relative roster order.
    #[must_use]
    pub fn compare(self, a: &PublicationRecord, b: &PublicationRecord) -> Ordering {
        match self {
            Self::Newest => year_of(b).cmp(&year_of(a)),
            Self::Oldest => year_of(a).cmp(&year_of(b)),
            Self::CitationsDesc => b.cited_by.cmp(&a.cited_by),
            Self::CitationsAsc => a.cited_by.cmp(&b.cited_by),
            Self::TitleAsc => title_key(a).cmp(&title_key(b)),
            Self::TitleDesc => title_key(b).cmp(&title_key(a)),
        }
    }
}

/// Records without a year sort as year 0.
fn year_of(record: &PublicationRecord) -> i32 {
    record.year.unwrap_or(0)
}

/// Case-insensitive title collation key.
fn title_key(record: &PublicationRecord) -> String {
    record.title.to_lowercase()
}

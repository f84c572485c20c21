//! Author profile model matching the Semantic Scholar API schema.

use serde::{Deserialize, Serialize};

use super::Paper;

/// Raw author profile response, including the requested paper subfields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorProfile {
    /// Author name.
    #[serde(default)]
    pub name: Option<String>,

    /// Institutional affiliations.
    #[serde(default)]
    pub affiliations: Vec<Affiliation>,

    /// Homepage URL.
    #[serde(default)]
    pub homepage: Option<String>,

    /// Total number of papers by this author.
    #[serde(default)]
    pub paper_count: Option<i64>,

    /// Total citation count across all papers.
    #[serde(default)]
    pub citation_count: Option<i64>,

    /// h-index metric.
    #[serde(default)]
    pub h_index: Option<i64>,

    /// Papers with the requested per-paper fields.
    #[serde(default)]
    pub papers: Vec<Paper>,
}

impl AuthorProfile {
    /// Get the primary affiliation name if available.
    #[must_use]
    pub fn primary_affiliation(&self) -> Option<&str> {
        self.affiliations.first().and_then(|a| a.name.as_deref())
    }

    /// Get citation count clamped non-negative, 0 if absent.
    #[must_use]
    pub fn citations(&self) -> u32 {
        clamp_count(self.citation_count)
    }

    /// Get h-index clamped non-negative, 0 if absent.
    #[must_use]
    pub fn h_index_value(&self) -> u32 {
        clamp_count(self.h_index)
    }

    /// Get paper count clamped non-negative, 0 if absent.
    #[must_use]
    pub fn papers_value(&self) -> u32 {
        clamp_count(self.paper_count)
    }
}

/// An institutional affiliation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Affiliation {
    /// Institution name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Minimal author reference (used in paper author lists).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRef {
    /// Author ID.
    #[serde(default)]
    pub author_id: Option<String>,

    /// Author name.
    #[serde(default)]
    pub name: Option<String>,
}

impl AuthorRef {
    /// Get the author name or "Unknown".
    #[must_use]
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }
}

pub(crate) fn clamp_count(value: Option<i64>) -> u32 {
    value.unwrap_or(0).max(0).try_into().unwrap_or(u32::MAX)
}

//! Normalization of a raw API response into a [`ProfileSnapshot`].
//!
//! Field-by-field fallback rules plus three local derivations: i10-index,
//! keyword-based research interests, and coauthor aggregation.

use std::collections::HashMap;

use crate::config::{FallbackIdentity, api, display};
use crate::models::{AuthorProfile, Paper};

use super::{CitationStats, CoauthorRecord, ProfileSnapshot, PublicationRecord};

/// Interest vocabulary. Matched case-insensitively as substrings of paper
/// titles and venues; first 3 distinct matches win, in encounter order.
const INTEREST_TERMS: &[&str] = &[
    "machine",
    "learning",
    "neural",
    "deep",
    "artificial",
    "intelligence",
    "computer",
    "vision",
    "algorithm",
    "optimization",
    "data",
];

/// Papers with at least this many citations count toward the i10-index.
const I10_THRESHOLD: u32 = 10;

/// Normalize a raw author profile into an immutable snapshot.
///
/// Pure: the same response and fallback identity always produce the same
/// snapshot. Publication order is preserved from the API response.
#[must_use]
pub fn normalize(raw: &AuthorProfile, fallback: &FallbackIdentity) -> ProfileSnapshot {
    let name = raw
        .name
        .clone()
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| fallback.name.clone());

    let affiliation = raw
        .primary_affiliation()
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| fallback.affiliation.clone());

    let homepage = raw.homepage.clone().unwrap_or_else(|| fallback.homepage.clone());

    let i10_index = raw
        .papers
        .iter()
        .filter(|p| p.citations() >= I10_THRESHOLD)
        .count()
        .try_into()
        .unwrap_or(u32::MAX);

    let citation_stats = CitationStats {
        total_citations: raw.citations(),
        h_index: raw.h_index_value(),
        i10_index,
        paper_count: raw.papers_value(),
    };

    ProfileSnapshot {
        interests: extract_interests(&raw.papers),
        coauthors: extract_coauthors(&raw.papers, &name),
        publications: raw.papers.iter().map(normalize_paper).collect(),
        name,
        affiliation,
        homepage,
        citation_stats,
    }
}

fn normalize_paper(paper: &Paper) -> PublicationRecord {
    let authors = paper.author_names();
    let publication_url = paper.url.clone();

    PublicationRecord {
        title: paper.title.clone().unwrap_or_default(),
        authors: if authors.is_empty() { "Unknown".to_string() } else { authors },
        venue: paper
            .venue
            .clone()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "Unknown Venue".to_string()),
        cited_by: paper.citations(),
        year: paper.year,
        link: paper.pdf_url().map(str::to_string).or_else(|| publication_url.clone()),
        publication_url,
        semantic_scholar_url: paper
            .paper_id
            .as_ref()
            .map(|id| format!("{}/{}", api::PAPER_PAGE, id)),
    }
}

/// Extract research interests from paper titles and venues.
///
/// Case-insensitive substring match against the fixed vocabulary; the first
/// 3 distinct matched terms, capitalized, in the order they were first seen.
fn extract_interests(papers: &[Paper]) -> Vec<String> {
    let mut matched: Vec<String> = Vec::new();

    for paper in papers {
        let title = paper.title.as_deref().unwrap_or("").to_lowercase();
        let venue = paper.venue.as_deref().unwrap_or("").to_lowercase();

        for term in INTEREST_TERMS {
            if title.contains(term) || venue.contains(term) {
                let capitalized = capitalize(term);
                if !matched.contains(&capitalized) {
                    matched.push(capitalized);
                }
            }
        }
    }

    matched.truncate(display::MAX_INTERESTS);
    matched
}

fn capitalize(term: &str) -> String {
    let mut chars = term.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Aggregate coauthors across all papers, excluding the profile owner.
///
/// Counting is by exact name string (two spellings of the same person count
/// separately); the most recently seen author id wins for each name. The
/// top 6 by descending count are kept, ties broken by first-encountered
/// order (stable sort).
fn extract_coauthors(papers: &[Paper], owner_name: &str) -> Vec<CoauthorRecord> {
    let mut records: Vec<CoauthorRecord> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for paper in papers {
        for author in &paper.authors {
            let Some(name) = author.name.as_deref() else { continue };
            if name.is_empty() || name == owner_name {
                continue;
            }

            match index_by_name.get(name) {
                Some(&i) => {
                    records[i].count += 1;
                    if author.author_id.is_some() {
                        records[i].author_id = author.author_id.clone();
                    }
                }
                None => {
                    index_by_name.insert(name.to_string(), records.len());
                    records.push(CoauthorRecord {
                        name: name.to_string(),
                        count: 1,
                        author_id: author.author_id.clone(),
                    });
                }
            }
        }
    }

    records.sort_by(|a, b| b.count.cmp(&a.count));
    records.truncate(display::MAX_COAUTHORS);
    records
}

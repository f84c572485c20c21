//! Data models for the Semantic Scholar API entities this presenter consumes.
//!
//! All models use `#[serde(default)]` for optional fields and
//! `#[serde(rename_all = "camelCase")]` to match API naming. Any field may be
//! absent in a response; absence is not an error.

mod author;
mod paper;

pub use author::{Affiliation, AuthorProfile, AuthorRef};
pub use paper::{OpenAccessPdf, Paper};

//! Scholar Profile
//!
//! An academic-portfolio presenter for Semantic Scholar author profiles:
//! fetches a researcher's publication and citation data, normalizes it into
//! an immutable snapshot behind a 24-hour TTL cache, and drives a
//! filter/sort/search/paginate view engine over named render regions.
//!
//! # Features
//!
//! - **Snapshot provider**: one GET per fetch, field-by-field fallbacks,
//!   local i10-index / interests / coauthor derivations, stale-on-failure
//!   refresh with an injected observability sink
//! - **View engine**: explicit `ViewState` + pure `recompute` pipeline,
//!   action dispatch, clamped pagination
//! - **Render surfaces**: terminal and in-memory page model; missing
//!   regions are skipped, never fatal
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use scholar_profile::{Config, DataProvider, PublicationView, ScholarClient};
//! use scholar_profile::observe::TracingSink;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = ScholarClient::new(&config)?;
//!     let provider = DataProvider::new(client, config, Arc::new(TracingSink));
//!
//!     let snapshot = provider.fetch_profile().await?;
//!     let mut view = PublicationView::new();
//!     view.load(snapshot.publications.iter().cloned());
//!
//!     println!("{}", view.derive().results_label());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod observe;
pub mod profile;
pub mod provider;
pub mod render;
pub mod shell;
pub mod view;

pub use client::ScholarClient;
pub use config::Config;
pub use error::{ClientError, ClientResult};
pub use profile::ProfileSnapshot;
pub use provider::DataProvider;
pub use view::PublicationView;

// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # catalog-fetch
//!
//! Assembles complete result sets from a paginated catalog API.
//!
//! ## Features
//!
//! - **Fetch-all**: read the page count from page 1, fetch the rest concurrently
//! - **Filtered search**: walk `info.next` one page at a time
//! - **Ordered results**: always page order, never arrival order
//! - **All-or-nothing**: a failed page fails the whole fetch
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use catalog_fetch::engine::CatalogEngine;
//! use catalog_fetch::http::HttpClient;
//! use catalog_fetch::query::{FilterCriteria, FilterKey};
//!
//! #[tokio::main]
//! async fn main() -> catalog_fetch::Result<()> {
//!     let engine = CatalogEngine::new(HttpClient::new()?);
//!
//!     let everything = engine.fetch_all().await?;
//!     println!("{} records", everything.len());
//!
//!     let criteria = FilterCriteria::new().with(FilterKey::Name, "rick");
//!     let ricks = engine.fetch_filtered(&criteria).await?;
//!     println!("{} ricks", ricks.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      CatalogEngine                       │
//! │  fetch_all() → Aggregate     fetch_filtered() → Aggregate│
//! │  show_all(sink)              show_filtered(raw, sink)    │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌───────────┬────────────────┴──┬──────────────┬──────────┐
//! │   Query   │   Pagination      │    HTTP      │   Sink   │
//! ├───────────┼───────────────────┼──────────────┼──────────┤
//! │ Criteria  │ Page plan         │ Page URLs    │ present  │
//! │ Encoding  │ Next-link walker  │ 404 / errors │ error    │
//! └───────────┴───────────────────┴──────────────┴──────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Document enum variants and struct fields in types/error

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Catalog records and page envelopes
pub mod types;

/// Filter criteria construction
pub mod query;

/// HTTP client for page requests
pub mod http;

/// Pagination strategies
pub mod pagination;

/// Retrieval engine
pub mod engine;

/// Configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use config::CatalogConfig;
pub use engine::{Aggregate, CatalogEngine, ResultSink};
pub use query::{FilterCriteria, FilterKey, RawFilters};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

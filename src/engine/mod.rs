//! Retrieval engine module
//!
//! Fetches every page of a listing and merges the results in page order.
//!
//! # Overview
//!
//! The engine module provides:
//! - `CatalogEngine` - Runs unfiltered and filtered fetches
//! - `Aggregate` - Ordered records plus fetch statistics
//! - `ResultSink` - Where outcomes are delivered (results or an error, never both)
//!
//! Any failed page aborts the whole fetch. Partial results are never
//! delivered as if they were complete.

mod types;

pub use types::{Aggregate, FetchStats, Operation, ResultSink};

use crate::error::{Error, Result};
use crate::http::{HttpClient, PageResponse};
use crate::pagination::{NextLinkPaginator, PagePlan, FIRST_PAGE};
use crate::query::{FilterCriteria, RawFilters};
use crate::types::PageEnvelope;
use futures::future::try_join_all;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Note shown alongside an empty result set
pub const EMPTY_RESULTS_NOTE: &str = "No characters found";

/// Engine for assembling complete result sets from a paginated catalog
#[derive(Debug, Clone)]
pub struct CatalogEngine {
    /// HTTP client
    client: HttpClient,
}

impl CatalogEngine {
    /// Create a new engine
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Get the HTTP client
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Fetch every page of the unfiltered listing
    ///
    /// Page 1 is requested first to learn the page count, then all other
    /// pages are requested concurrently. The first failure aborts the
    /// fetch; requests already in flight finish in the background and
    /// their results are dropped.
    pub async fn fetch_all(&self) -> Result<Aggregate> {
        let start = Instant::now();
        let unfiltered = FilterCriteria::new();

        let first = fetch_required_page(&self.client, &unfiltered, FIRST_PAGE).await?;
        let plan = PagePlan::from_info(&first.info);
        info!(
            "Catalog reports {} records in {} pages",
            first.info.count, plan.total_pages
        );

        let mut stats = FetchStats::new();
        stats.add_page(first.results.len());
        let mut records = first.results;

        if !plan.is_single_page() {
            debug!("Requesting {} pages concurrently", plan.remaining_count());

            let tasks = plan.remaining().map(|page| {
                let client = self.client.clone();
                let handle = tokio::spawn(async move {
                    fetch_required_page(&client, &FilterCriteria::new(), page).await
                });
                async move {
                    match handle.await {
                        Ok(result) => result,
                        Err(e) => Err(Error::Other(format!("Page {page} task failed: {e}"))),
                    }
                }
            });

            // try_join_all keeps input order, so pages come back ascending
            let pages = try_join_all(tasks).await?;
            for page in pages {
                stats.add_page(page.results.len());
                records.extend(page.results);
            }
        }

        stats.set_duration(start.elapsed().as_millis() as u64);
        info!(
            "Fetched {} records from {} pages in {}ms",
            stats.records_fetched, stats.pages_fetched, stats.duration_ms
        );

        Ok(Aggregate { records, stats })
    }

    /// Fetch every page matching `criteria`, one page at a time
    ///
    /// Empty criteria fail with [`Error::Validation`] before any request.
    /// A 404 on the first page is [`Error::NoMatch`]; a 404 on a later page
    /// ends the listing.
    pub async fn fetch_filtered(&self, criteria: &FilterCriteria) -> Result<Aggregate> {
        criteria.ensure_not_empty()?;

        let start = Instant::now();
        let mut paginator = NextLinkPaginator::new();
        let mut records = Vec::new();

        debug!("Searching with {}", criteria.to_query_string());

        loop {
            let page = paginator.page();
            let next = match self.client.get_page(criteria, page).await? {
                PageResponse::Page(envelope) => {
                    let next = paginator.process_page(&envelope.info, envelope.results.len());
                    records.extend(envelope.results);
                    next
                }
                PageResponse::NotFound { .. } => {
                    let next = paginator.process_not_found()?;
                    debug!("Page {page} not found, ending search");
                    next
                }
            };

            if next.is_done() {
                break;
            }
        }

        let state = paginator.state();
        let mut stats = FetchStats {
            records_fetched: state.total_fetched as usize,
            pages_fetched: state.pages_fetched as usize,
            duration_ms: 0,
        };
        stats.set_duration(start.elapsed().as_millis() as u64);
        info!(
            "Search matched {} records over {} pages in {}ms",
            stats.records_fetched, stats.pages_fetched, stats.duration_ms
        );

        Ok(Aggregate { records, stats })
    }

    /// Fetch everything and deliver the outcome to `sink`
    ///
    /// Returns whether results were presented.
    pub async fn show_all(&self, sink: &dyn ResultSink) -> bool {
        let outcome = self.fetch_all().await;
        deliver(Operation::FetchAll, outcome, sink)
    }

    /// Search with raw user input and deliver the outcome to `sink`
    ///
    /// Blank input is reported through the sink without touching the
    /// network. Returns whether results were presented.
    pub async fn show_filtered(&self, raw: &RawFilters, sink: &dyn ResultSink) -> bool {
        let criteria = FilterCriteria::from_raw(raw);
        let outcome = self.fetch_filtered(&criteria).await;
        deliver(Operation::Search, outcome, sink)
    }
}

/// Route an outcome to exactly one side of `sink`
///
/// Returns whether results were presented.
pub fn deliver(operation: Operation, outcome: Result<Aggregate>, sink: &dyn ResultSink) -> bool {
    match outcome {
        Ok(aggregate) => {
            let note = if aggregate.is_empty() {
                EMPTY_RESULTS_NOTE.to_string()
            } else {
                format!("Loaded {} character(s)", aggregate.len())
            };
            sink.present(&aggregate.records, Some(note.as_str()));
            true
        }
        Err(e) => {
            warn!("{} failed: {e}", operation.failure_prefix());
            sink.report_error(&format!("{}: {e}", operation.failure_prefix()));
            false
        }
    }
}

/// Fetch a page that must exist; a 404 is an ordinary HTTP failure here
async fn fetch_required_page(
    client: &HttpClient,
    criteria: &FilterCriteria,
    page: u32,
) -> Result<PageEnvelope> {
    match client.get_page(criteria, page).await? {
        PageResponse::Page(envelope) => Ok(envelope),
        PageResponse::NotFound { body } => Err(Error::http_status(404, body)),
    }
}

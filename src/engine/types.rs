//! Engine types
//!
//! Aggregate results, statistics and the sink contract for the engine.

use crate::types::Character;

/// Records assembled across all pages of one request
///
/// Page order and intra-page order are preserved exactly as served.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregate {
    /// Records in ascending page order
    pub records: Vec<Character>,
    /// Statistics for the fetch
    pub stats: FetchStats,
}

impl Aggregate {
    /// Number of records collected
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records were collected
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Take the records
    pub fn into_records(self) -> Vec<Character> {
        self.records
    }
}

/// Statistics from a fetch operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchStats {
    /// Total records fetched
    pub records_fetched: usize,
    /// Total pages fetched
    pub pages_fetched: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl FetchStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page holding `records` records
    pub fn add_page(&mut self, records: usize) {
        self.pages_fetched += 1;
        self.records_fetched += records;
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}

/// Which engine operation produced an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Unfiltered listing of every page
    FetchAll,
    /// Filtered search
    Search,
}

impl Operation {
    /// Prefix for failure messages handed to the error sink
    pub fn failure_prefix(self) -> &'static str {
        match self {
            Self::FetchAll => "Failed to fetch characters",
            Self::Search => "Failed to search characters",
        }
    }
}

/// Consumer of engine outcomes
///
/// Exactly one of the two methods is called per delivered outcome.
pub trait ResultSink: Send + Sync {
    /// Receive the ordered records of a successful fetch, possibly empty
    fn present(&self, records: &[Character], note: Option<&str>);

    /// Receive a human-readable failure description
    fn report_error(&self, message: &str);
}

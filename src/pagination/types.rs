//! Pagination types
//!
//! Defines the state and step results shared by the pagination strategies.

/// Number of the first page the catalog serves
pub const FIRST_PAGE: u32 = 1;

/// Result of the next page computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available; request this one next
    Continue {
        /// Page number to request
        page: u32,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone)]
pub struct PaginationState {
    /// Page to request next
    pub page: u32,
    /// Pages successfully fetched so far
    pub pages_fetched: u32,
    /// Records fetched so far
    pub total_fetched: u64,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: FIRST_PAGE,
            pages_fetched: 0,
            total_fetched: 0,
        }
    }
}

impl PaginationState {
    /// Create a new pagination state positioned on the first page
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the next request is for the first page
    pub fn on_first_page(&self) -> bool {
        self.page == FIRST_PAGE
    }

    /// Record a fetched page and move to the following one
    pub fn advance(&mut self, records: usize) {
        self.pages_fetched += 1;
        self.total_fetched += records as u64;
        self.page += 1;
    }
}

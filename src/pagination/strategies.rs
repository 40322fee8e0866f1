//! Pagination strategy implementations
//!
//! Each strategy handles one way the catalog exposes its pages.

use super::types::{NextPage, PaginationState, FIRST_PAGE};
use crate::error::{Error, Result};
use crate::types::PageInfo;
use std::ops::RangeInclusive;

// ============================================================================
// Page Plan
// ============================================================================

/// Pages left to request once the first page has reported the total
///
/// The first page's `info.pages` is authoritative; everything after it can
/// be requested at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePlan {
    /// Total pages reported by the first page
    pub total_pages: u32,
}

impl PagePlan {
    /// Plan from the first page's metadata
    pub fn from_info(info: &PageInfo) -> Self {
        Self {
            total_pages: info.pages,
        }
    }

    /// Page numbers still to request, in ascending order
    pub fn remaining(&self) -> RangeInclusive<u32> {
        (FIRST_PAGE + 1)..=self.total_pages
    }

    /// Number of pages still to request
    pub fn remaining_count(&self) -> usize {
        self.total_pages.saturating_sub(FIRST_PAGE) as usize
    }

    /// Whether the first page was the only one
    pub fn is_single_page(&self) -> bool {
        self.remaining_count() == 0
    }
}

// ============================================================================
// Next Link Pagination
// ============================================================================

/// Sequential pagination driven by the `info.next` link
///
/// The total is unknown up front, so each page decides whether another
/// one is requested.
#[derive(Debug, Clone, Default)]
pub struct NextLinkPaginator {
    state: PaginationState,
}

impl NextLinkPaginator {
    /// Start at the first page
    pub fn new() -> Self {
        Self::default()
    }

    /// Page to request next
    pub fn page(&self) -> u32 {
        self.state.page
    }

    /// Current state
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Handle a successful page
    pub fn process_page(&mut self, info: &PageInfo, records_count: usize) -> NextPage {
        self.state.advance(records_count);

        if info.has_next() {
            NextPage::Continue {
                page: self.state.page,
            }
        } else {
            NextPage::Done
        }
    }

    /// Handle a not-found page
    ///
    /// On the first page nothing matched at all, which is an error. Past the
    /// first page it only means the listing ran out.
    pub fn process_not_found(&mut self) -> Result<NextPage> {
        if self.state.on_first_page() {
            return Err(Error::NoMatch);
        }
        Ok(NextPage::Done)
    }
}

//! Pagination module
//!
//! Supports: page-count fan-out, next-link walking
//!
//! # Overview
//!
//! Unfiltered listings report their total page count on the first page, so
//! every remaining page can be planned up front ([`PagePlan`]). Filtered
//! listings are walked one page at a time, following `info.next` until it
//! disappears ([`NextLinkPaginator`]).

mod strategies;
mod types;

pub use strategies::{NextLinkPaginator, PagePlan};
pub use types::{NextPage, PaginationState, FIRST_PAGE};

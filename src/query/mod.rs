//! Query builder module
//!
//! Turns raw filter input into the criteria sent to the catalog API.
//!
//! # Overview
//!
//! Input arrives as free text per recognized key. Only keys whose trimmed
//! value is non-empty survive; the API treats an empty parameter
//! differently from an absent one, so empty keys are never sent.

mod builder;

pub use builder::{FilterCriteria, FilterKey, RawFilters, EMPTY_FILTERS_MESSAGE};

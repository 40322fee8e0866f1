//! HTTP client module
//!
//! Provides the HTTP client used to request catalog pages.
//!
//! # Features
//!
//! - **Page requests**: `{base}?{filters}&page={n}`, the query assembled by `RequestConfig`
//! - **Status classification**: success, not-found and failure kept apart
//! - **Default headers**: user agent and configured headers on every request

mod client;

pub use client::{
    HttpClient, HttpClientConfig, HttpClientConfigBuilder, PageResponse, RequestConfig,
    DEFAULT_BASE_URL, PAGE_PARAM,
};

//! HTTP client for the catalog API
//!
//! Provides a thin client that handles:
//! - Query assembly for page requests
//! - Default headers and user agent
//! - Response body parsing
//! - Status classification (success, not-found, failure)
//!
//! The client never retries; every failure is returned to the caller as-is.

use crate::error::{Error, Result};
use crate::query::FilterCriteria;
use crate::types::PageEnvelope;
use reqwest::{Client, Response, StatusCode};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Public character endpoint of the reference catalog
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api/character";

/// Query parameter carrying the page number
pub const PAGE_PARAM: &str = "page";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Collection endpoint every page request targets
    pub base_url: String,
    /// Request timeout; `None` leaves the transport default in place
    pub timeout: Option<Duration>,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            default_headers: HashMap::new(),
            user_agent: format!("catalog-fetch/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Configuration for a single request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestConfig {
    /// Query parameters, sent in insertion order
    pub query: Vec<(String, String)>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Query for one page: the criteria pairs followed by `page={n}`
    pub fn for_page(criteria: &FilterCriteria, page: u32) -> Self {
        criteria
            .pairs()
            .fold(Self::new(), |config, (key, value)| config.query(key, value))
            .query(PAGE_PARAM, page.to_string())
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// Classified outcome of a single page request
#[derive(Debug, Clone, PartialEq)]
pub enum PageResponse {
    /// 2xx with a decoded envelope
    Page(PageEnvelope),
    /// 404, the API's way of saying there is nothing here
    NotFound {
        /// Response body as served
        body: String,
    },
}

/// HTTP client for catalog page requests
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        Url::parse(&config.base_url)?;

        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Get the client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Make a GET request, returning the response whatever its status
    pub async fn get_with_config(&self, url: &str, config: RequestConfig) -> Result<Response> {
        let mut req = self.client.get(url);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        let response = req.send().await?;
        debug!("GET {} -> {}", url, response.status().as_u16());
        Ok(response)
    }

    /// Fetch and classify one page: `GET {base}?{criteria}&page={n}`
    ///
    /// 404 becomes [`PageResponse::NotFound`]; any other non-success status
    /// is an [`Error::HttpStatus`]. A body that is not a valid envelope is an
    /// [`Error::Decode`].
    pub async fn get_page(&self, criteria: &FilterCriteria, page: u32) -> Result<PageResponse> {
        let response = self
            .get_with_config(&self.config.base_url, RequestConfig::for_page(criteria, page))
            .await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            debug!("Page {page} not found");
            let body = response.text().await.unwrap_or_default();
            return Ok(PageResponse::NotFound { body });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::decode(format!("Failed to read response body: {e}")))?;
        let envelope: PageEnvelope = serde_json::from_str(&body)
            .map_err(|e| Error::decode(format!("Invalid page {page} body: {e}")))?;

        debug!(
            "Page {page}: {} records (of {} pages)",
            envelope.results.len(),
            envelope.info.pages
        );
        Ok(PageResponse::Page(envelope))
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

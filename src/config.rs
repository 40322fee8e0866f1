//! Configuration
//!
//! Client settings loaded from a YAML file:
//!
//! ```yaml
//! base_url: https://rickandmortyapi.com/api/character
//! timeout_secs: 20
//! user_agent: my-app/1.0
//! headers:
//!   Accept-Language: en
//! ```
//!
//! Every field is optional.

use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Catalog client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Collection endpoint
    pub base_url: String,
    /// Transport timeout in seconds; unset means no engine-imposed limit
    pub timeout_secs: Option<u64>,
    /// User agent override
    pub user_agent: Option<String>,
    /// Extra headers sent with every request
    pub headers: HashMap<String, String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            user_agent: None,
            headers: HashMap::new(),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Check values the client cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::config("base_url must not be empty"));
        }
        url::Url::parse(&self.base_url)
            .map_err(|e| Error::config(format!("Invalid base_url '{}': {e}", self.base_url)))?;
        if self.timeout_secs == Some(0) {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        Ok(())
    }

    /// Build the HTTP client configuration
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder().base_url(&self.base_url);
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }
        for (key, value) in &self.headers {
            builder = builder.header(key, value);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.timeout_secs.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r"
base_url: https://catalog.example.com/api/character
timeout_secs: 15
user_agent: tester/2.0
headers:
  X-Trace: abc
";
        let config = CatalogConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.base_url, "https://catalog.example.com/api/character");
        assert_eq!(config.timeout_secs, Some(15));

        let http = config.http_config();
        assert_eq!(http.base_url, "https://catalog.example.com/api/character");
        assert_eq!(http.timeout, Some(Duration::from_secs(15)));
        assert_eq!(http.user_agent, "tester/2.0");
        assert_eq!(http.default_headers.get("X-Trace"), Some(&"abc".to_string()));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = CatalogConfig::from_yaml_str("timeout_secs: 5\n").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.http_config().user_agent.starts_with("catalog-fetch/"));
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = CatalogConfig::from_yaml_str("  \n").unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = CatalogConfig::from_yaml_str("retries: 3\n").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = CatalogConfig::from_yaml_str("base_url: nowhere\n").unwrap_err();
        assert!(err.to_string().contains("Invalid base_url"));

        let err = CatalogConfig::from_yaml_str("timeout_secs: 0\n").unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url: http://localhost:9999/api/character").unwrap();

        let config = CatalogConfig::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, "http://localhost:9999/api/character");
    }

    #[test]
    fn test_missing_file() {
        let err = CatalogConfig::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("Failed to read config file"));
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }

    #[test]
    fn test_with_base_url_override() {
        let config = CatalogConfig::default().with_base_url("http://127.0.0.1:1/x");
        assert_eq!(config.http_config().base_url, "http://127.0.0.1:1/x");
    }
}

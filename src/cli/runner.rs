//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::cli::console::ConsoleSink;
use crate::config::CatalogConfig;
use crate::engine::CatalogEngine;
use crate::error::Result;
use crate::http::HttpClient;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    ///
    /// `Ok(false)` means the command ran and its failure was already
    /// reported to the user.
    pub async fn run(&self) -> Result<bool> {
        let engine = self.build_engine()?;
        let sink = ConsoleSink::new(self.cli.format);

        let presented = match &self.cli.command {
            Commands::All => engine.show_all(&sink).await,
            Commands::Search(args) => engine.show_filtered(&args.to_raw_filters(), &sink).await,
        };
        Ok(presented)
    }

    /// Load configuration, applying command-line overrides
    pub fn load_config(&self) -> Result<CatalogConfig> {
        let mut config = match &self.cli.config {
            Some(path) => CatalogConfig::from_file(path)?,
            None => CatalogConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config = config.with_base_url(base_url);
            config.validate()?;
        }

        debug!("Using catalog at {}", config.base_url);
        Ok(config)
    }

    fn build_engine(&self) -> Result<CatalogEngine> {
        let config = self.load_config()?;
        let client = HttpClient::with_config(config.http_config())?;
        Ok(CatalogEngine::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use clap::Parser;

    #[test]
    fn test_load_config_defaults() {
        let runner = Runner::new(Cli::try_parse_from(["catalog-fetch", "all"]).unwrap());
        let config = runner.load_config().unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_load_config_base_url_override() {
        let runner = Runner::new(
            Cli::try_parse_from(["catalog-fetch", "--base-url", "not a url", "all"]).unwrap(),
        );
        let err = runner.load_config().unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[tokio::test]
    async fn test_search_without_filters_reports_failure() {
        let runner = Runner::new(
            Cli::try_parse_from([
                "catalog-fetch",
                "--base-url",
                "http://127.0.0.1:9/api/character",
                "search",
                "--name",
                "  ",
            ])
            .unwrap(),
        );
        assert!(!runner.run().await.unwrap());
    }
}

//! Client builder: loads content and initializes the adventure.

use std::path::PathBuf;

use adventure_content::ContentFactory;
use anyhow::{Context, Result};
use client_frontend_cli::CliConfig;

use crate::{Client, ClientConfig};

#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
    cli_config: CliConfig,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.config.data_dir = data_dir.into();
        self
    }

    pub fn cli_config(mut self, cli_config: CliConfig) -> Self {
        self.cli_config = cli_config;
        self
    }

    /// Loads every content file and validates the tables.
    ///
    /// # Errors
    ///
    /// Returns an error if a content file is missing or malformed, or if the
    /// tables reference something that does not exist.
    pub fn build(self) -> Result<Client> {
        let data_dir = &self.config.data_dir;
        tracing::debug!("Loading content from {}", data_dir.display());

        let content = ContentFactory::new(data_dir)
            .load()
            .with_context(|| format!("Failed to load content from {}", data_dir.display()))?;

        let manager = content
            .initialize()
            .context("Failed to initialize the adventure")?;

        Ok(Client {
            manager,
            cli_config: self.cli_config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipped_data() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
    }

    #[test]
    fn builds_from_shipped_content() {
        let client = Client::builder().data_dir(shipped_data()).build().unwrap();
        assert_eq!(client.manager().current_state().as_str(), "splash");
    }

    #[test]
    fn missing_content_dir_is_reported() {
        let err = Client::builder()
            .data_dir("definitely/not/here")
            .build()
            .err()
            .unwrap();
        assert!(format!("{err:#}").contains("definitely/not/here"));
    }
}

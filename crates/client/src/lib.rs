//! Top-level client tying content loading and the terminal frontend together.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ AdventureManager (state machine, built from the content directory)
//!   └─→ CliApp (terminal UI, owns the manager while it runs)
//! ```

mod builder;

pub use builder::ClientBuilder;

use std::env;
use std::path::PathBuf;

use adventure_core::AdventureManager;
use anyhow::Result;
use client_frontend_cli::{CliApp, CliConfig};

/// Where the adventure content lives.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub data_dir: PathBuf,
}

impl ClientConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";

    /// Environment variables:
    /// - `ADVENTURE_DATA_DIR` - Content directory (default: `./data`)
    pub fn from_env() -> Self {
        let data_dir = env::var("ADVENTURE_DATA_DIR")
            .ok()
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_DATA_DIR));
        Self { data_dir }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
        }
    }
}

/// An initialized adventure ready to be played in the terminal.
pub struct Client {
    manager: AdventureManager,
    cli_config: CliConfig,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn manager(&self) -> &AdventureManager {
        &self.manager
    }

    /// Hands control to the terminal UI until the user quits.
    pub async fn run(self) -> Result<()> {
        CliApp::new(self.manager, self.cli_config).run().await
    }
}

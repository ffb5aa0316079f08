//! Sweetfield game client binary.
//!
//! Loads the adventure from `ADVENTURE_DATA_DIR` (default `./data`) and plays
//! it in the terminal.

use adventure_client::{Client, ClientConfig};
use anyhow::Result;
use client_frontend_cli::{CliConfig, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = ClientConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    let log_file = logging::setup_logging(cli_config.session_id.as_deref())?;

    tracing::info!("Starting Sweetfield client");
    tracing::info!("Content directory: {}", config.data_dir.display());

    // 3. Load content and build the client
    let client = match Client::builder().config(config).cli_config(cli_config).build() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("{e:#}\n(log: {})", log_file.display());
            return Err(e);
        }
    };

    // 4. Run
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}

//! Glue code tying the adventure manager and the terminal UI together.
use adventure_core::AdventureManager;
use anyhow::Result;

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal;

/// Terminal front end for one play session.
pub struct CliApp {
    manager: AdventureManager,
    cli_config: CliConfig,
}

impl CliApp {
    pub fn new(manager: AdventureManager, cli_config: CliConfig) -> Self {
        Self {
            manager,
            cli_config,
        }
    }

    pub async fn run(self) -> Result<()> {
        tracing::info!(
            state = %self.manager.current_state(),
            frame_interval_ms = self.cli_config.frame_interval.as_millis() as u64,
            "CLI client starting..."
        );

        let event_loop = EventLoop::new(self.manager, self.cli_config);

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let result = event_loop.run(&mut terminal).await;

        terminal::restore()?;

        let manager = result?;
        tracing::info!(
            state = %manager.current_state(),
            frames = manager.frame(),
            "CLI client exiting"
        );
        Ok(())
    }
}

//! Frame loop orchestrating user input, adventure updates, and rendering.

use std::time::Instant;

use adventure_core::{AdventureManager, Scene};
use anyhow::Result;
use ratatui::layout::Rect as CellRect;
use tokio::time::{self, MissedTickBehavior};

use crate::{
    config::CliConfig,
    input::{HeldKeys, InputHandler},
    presentation::{terminal::Tui, viewport::Viewport},
    state::AppState,
};

/// Event loop owning the adventure manager for the life of the session.
///
/// Every tick it:
/// - Drains pending terminal events into the manager
/// - Samples held arrow keys and advances one frame
/// - Renders the resulting scene
pub struct EventLoop {
    pub(crate) manager: AdventureManager,
    pub(crate) input: InputHandler,
    pub(crate) held: HeldKeys,
    pub(crate) app_state: AppState,
    pub(crate) scene: Scene,
    /// Viewport of the last render, used to map mouse cells onto the canvas.
    pub(crate) viewport: Viewport,
    pub(crate) cli_config: CliConfig,
}

impl EventLoop {
    pub fn new(manager: AdventureManager, cli_config: CliConfig) -> Self {
        let canvas = manager.config().canvas;
        Self {
            manager,
            input: InputHandler::new(),
            held: HeldKeys::new(cli_config.key_hold),
            app_state: AppState::new(),
            scene: Scene::new(),
            viewport: Viewport::new(CellRect::default(), canvas),
            cli_config,
        }
    }

    pub fn manager(&self) -> &AdventureManager {
        &self.manager
    }

    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Runs until the user quits. Returns the manager so callers can log
    /// where the session ended.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<AdventureManager> {
        self.step(Instant::now());
        self.render(terminal)?;

        let mut ticker = time::interval(self.cli_config.frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;

            let now = Instant::now();
            if self.drain_input(now)? {
                break;
            }
            self.step(now);
            self.render(terminal)?;
        }

        tracing::info!(
            frames = self.manager.frame(),
            state = %self.manager.current_state(),
            "Frame loop stopped"
        );
        Ok(self.manager)
    }
}

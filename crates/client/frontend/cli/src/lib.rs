//! Terminal UI frontend for the Sweetfield adventure.
//!
//! This crate paints the [`adventure_core::Scene`] the adventure manager
//! produces every frame and feeds keyboard and mouse input back into it.
//!
//! # Architecture
//!
//! CliApp owns the manager for the life of the session:
//! - A single-threaded frame loop samples input, advances one frame and
//!   renders
//! - Canvas coordinates are mapped onto terminal cells through a viewport
//! - Logging goes to a file, never to the terminal the UI owns

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliApp;
pub use config::{CliConfig, UiConfig};
pub use event::EventLoop;
pub use input::{HeldKeys, InputHandler, KeyAction};
pub use state::AppState;

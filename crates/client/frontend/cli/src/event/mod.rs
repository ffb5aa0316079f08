//! Event handling for the CLI client.
//!
//! The loop samples terminal input, advances the adventure one frame and
//! renders, once per tick.

mod handlers;
mod r#loop;

pub use r#loop::EventLoop;

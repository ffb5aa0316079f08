//! Presentation layer: terminal setup, colours, canvas mapping and drawing.

pub mod terminal;
pub mod theme;
pub mod ui;
pub mod viewport;

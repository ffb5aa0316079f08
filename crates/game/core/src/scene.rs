//! Per-frame display list.
//!
//! Rooms and the manager describe a frame by pushing [`DrawCommand`]s in
//! painter's order; the front end turns the list into pixels or cells.

use crate::asset::Asset;
use crate::clickable::ButtonVisual;
use crate::geometry::{Point, Rect};
use crate::ids::{PropId, RegionId};
use crate::player::{Animation, Facing};
use crate::style::{ButtonStyle, TextStyle};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Full-canvas background, optionally darkened by a grey tint.
    Background { asset: Asset, tint: Option<u8> },
    /// Wrapped text inside a box.
    TextBox {
        rect: Rect,
        text: String,
        style: TextStyle,
    },
    Prop {
        id: PropId,
        rect: Rect,
        asset: Asset,
    },
    Clickable {
        id: RegionId,
        rect: Rect,
        label: String,
        visual: ButtonVisual,
        style: ButtonStyle,
    },
    Player {
        rect: Rect,
        asset: Asset,
        animation: Animation,
        facing: Facing,
    },
    /// Narrative overlay: box art, level label and body text.
    Dialogue {
        rect: Rect,
        asset: Asset,
        label: String,
        label_at: Point,
        label_style: TextStyle,
        text: String,
        text_at: Point,
        text_style: TextStyle,
    },
}

/// Ordered draw commands for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The dialogue command of this frame, if the overlay was visible.
    pub fn dialogue(&self) -> Option<&DrawCommand> {
        self.commands
            .iter()
            .find(|c| matches!(c, DrawCommand::Dialogue { .. }))
    }

    pub fn has_player(&self) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Player { .. }))
    }
}

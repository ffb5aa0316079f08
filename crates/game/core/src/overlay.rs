//! Narrative overlay state and its render step.

use crate::asset::Asset;
use crate::config::DialogueConfig;
use crate::geometry::{Point, Rect, Size};
use crate::scene::DrawCommand;

/// Level label and body text shown in the dialogue box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Narration {
    pub label: String,
    pub text: String,
}

impl Narration {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Whether the dialogue box is up, and what it says.
///
/// Hiding clears the text as well, so a later `show` never reveals a stale
/// narration from another room.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NarrativeOverlay {
    narration: Option<Narration>,
}

impl NarrativeOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, narration: Narration) {
        self.narration = Some(narration);
    }

    pub fn hide(&mut self) {
        self.narration = None;
    }

    pub fn is_visible(&self) -> bool {
        self.narration.is_some()
    }

    pub fn narration(&self) -> Option<&Narration> {
        self.narration.as_ref()
    }

    pub fn label(&self) -> &str {
        self.narration.as_ref().map_or("", |n| n.label.as_str())
    }

    pub fn text(&self) -> &str {
        self.narration.as_ref().map_or("", |n| n.text.as_str())
    }
}

/// Dialogue box centred on the canvas.
pub fn dialogue_rect(config: &DialogueConfig, canvas: Size) -> Rect {
    Rect::around(canvas.center(), config.size)
}

/// Draw command for the overlay, or `None` while it is hidden.
pub fn render_overlay(
    overlay: &NarrativeOverlay,
    config: &DialogueConfig,
    box_asset: &Asset,
    canvas: Size,
) -> Option<DrawCommand> {
    let narration = overlay.narration()?;
    let rect = dialogue_rect(config, canvas);
    let offset = |p: Point| Point::new(rect.x + p.x, rect.y + p.y);

    Some(DrawCommand::Dialogue {
        rect,
        asset: box_asset.clone(),
        label: narration.label.clone(),
        label_at: offset(config.label_offset),
        label_style: config.label_style.clone(),
        text: narration.text.clone(),
        text_at: offset(config.text_offset),
        text_style: config.text_style.clone(),
    })
}

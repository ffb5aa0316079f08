//! Game configuration constants and tunable parameters.

use crate::geometry::{Point, Size};
use crate::ids::{AssetKey, KeySymbol, StateId};
use crate::style::{ButtonStyle, Rgb, TextStyle};

/// Top-level configuration loaded from `config.toml`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Logical canvas size every coordinate in the tables refers to.
    pub canvas: Size,
    /// State entered at start-up. `None` means the first row of the state
    /// table.
    pub start_state: Option<StateId>,
    /// Keys intercepted before the state machine (fullscreen toggle).
    pub reserved_keys: Vec<KeySymbol>,
    pub player: PlayerConfig,
    pub dialogue: DialogueConfig,
    pub buttons: ButtonStyle,
}

impl GameConfig {
    pub const DEFAULT_CANVAS: Size = Size::new(1280.0, 720.0);
    pub const FULLSCREEN_KEY: &'static str = "f";

    pub fn new() -> Self {
        Self {
            canvas: Self::DEFAULT_CANVAS,
            start_state: None,
            reserved_keys: vec![KeySymbol::new(Self::FULLSCREEN_KEY)],
            player: PlayerConfig::default(),
            dialogue: DialogueConfig::default(),
            buttons: ButtonStyle::default(),
        }
    }

    pub fn is_reserved(&self, key: &KeySymbol) -> bool {
        self.reserved_keys.contains(key)
    }

    /// Player start position, defaulting to the canvas centre.
    pub fn player_start(&self) -> Point {
        self.player.start.unwrap_or_else(|| self.canvas.center())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Avatar sprite parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerConfig {
    pub size: Size,
    /// Canvas units per frame while an arrow key is held.
    pub speed: f32,
    pub start: Option<Point>,
    pub idle_asset: AssetKey,
    pub walk_asset: AssetKey,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            size: Size::new(80.0, 80.0),
            speed: 6.0,
            start: None,
            idle_asset: AssetKey::new("avatars/felicity_idle"),
            walk_asset: AssetKey::new("avatars/felicity_walk"),
        }
    }
}

/// Geometry and typography of the narrative dialogue box.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DialogueConfig {
    pub asset: AssetKey,
    pub size: Size,
    /// Label offset from the box's top-left corner.
    pub label_offset: Point,
    /// Body text offset from the box's top-left corner.
    pub text_offset: Point,
    pub label_style: TextStyle,
    pub text_style: TextStyle,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            asset: AssetKey::new("dialogue_box"),
            size: Size::new(960.0, 260.0),
            label_offset: Point::new(150.0, 100.0),
            text_offset: Point::new(150.0, 150.0),
            label_style: TextStyle::new("AtariClassic", 25, Rgb::BLACK),
            text_style: TextStyle::new("Katrinus", 24, Rgb::BLACK),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_canvas() {
        let config = GameConfig::default();
        assert_eq!(config.player_start(), Point::new(640.0, 360.0));
        assert!(config.is_reserved(&KeySymbol::new("F")));
        assert!(!config.is_reserved(&KeySymbol::space()));
    }
}

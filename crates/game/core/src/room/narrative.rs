use crate::asset::Asset;
use crate::geometry::{Point, Rect, Size};
use crate::ids::AssetKey;
use crate::scene::{DrawCommand, Scene};
use crate::style::TextStyle;

use super::{PreloadContext, Room, RoomContext};

/// Background plus an optional fixed block of story or instruction text.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NarrativeSpec {
    pub background: AssetKey,
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: Option<String>,
    /// Top-left corner of the text box. Defaults to (200, 250).
    #[cfg_attr(feature = "serde", serde(default))]
    pub text_origin: Option<Point>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub style: TextStyle,
    /// Grey tint (0 = black, 255 = untouched) applied to the background.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tint: Option<u8>,
}

impl NarrativeSpec {
    pub fn new(background: impl Into<AssetKey>) -> Self {
        Self {
            background: background.into(),
            text: None,
            text_origin: None,
            style: TextStyle::default(),
            tint: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

pub struct NarrativeRoom {
    spec: NarrativeSpec,
    background: Option<Asset>,
    text_box: Rect,
}

impl NarrativeRoom {
    pub const DEFAULT_TEXT_ORIGIN: Point = Point::new(200.0, 250.0);

    pub fn new(spec: NarrativeSpec) -> Self {
        Self {
            spec,
            background: None,
            text_box: Rect::default(),
        }
    }

    /// Text box geometry: two thirds of the canvas in each direction.
    fn layout_text_box(&self, canvas: Size) -> Rect {
        let origin = self.spec.text_origin.unwrap_or(Self::DEFAULT_TEXT_ORIGIN);
        Rect::new(
            origin.x,
            origin.y,
            canvas.width / 6.0 * 4.0,
            canvas.height / 6.0 * 4.0,
        )
    }
}

impl Room for NarrativeRoom {
    fn preload(&mut self, ctx: &PreloadContext<'_>) {
        self.background = Some(ctx.assets.resolve(&self.spec.background));
        self.text_box = self.layout_text_box(ctx.canvas);
    }

    fn draw(&mut self, _ctx: &mut RoomContext<'_>, scene: &mut Scene) {
        let asset = self
            .background
            .clone()
            .unwrap_or_else(|| Asset::placeholder(self.spec.background.clone()));
        scene.push(DrawCommand::Background {
            asset,
            tint: self.spec.tint,
        });

        if let Some(text) = &self.spec.text {
            scene.push(DrawCommand::TextBox {
                rect: self.text_box,
                text: text.clone(),
                style: self.spec.style.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::StaticAssets;
    use crate::config::PlayerConfig;
    use crate::ids::StateId;
    use crate::overlay::NarrativeOverlay;
    use crate::player::Player;
    use crate::tables::InteractionTable;

    #[test]
    fn draws_background_then_text() {
        let canvas = Size::new(1280.0, 720.0);
        let assets = StaticAssets::new().with("intro_bg", "art");
        let mut room = NarrativeRoom::new(NarrativeSpec::new("intro_bg").with_text("Long ago..."));
        room.preload(&PreloadContext {
            assets: &assets,
            canvas,
        });

        let state = StateId::new("intro");
        let player = Player::new(&PlayerConfig::default(), canvas.center());
        let mut overlay = NarrativeOverlay::new();
        let interactions = InteractionTable::default();
        let mut ctx = RoomContext::new(&state, &player, &mut overlay, &interactions, canvas);
        let mut scene = Scene::new();
        room.draw(&mut ctx, &mut scene);

        let commands = scene.commands();
        assert!(matches!(
            &commands[0],
            DrawCommand::Background { asset, .. } if !asset.is_placeholder()
        ));
        let DrawCommand::TextBox { rect, text, .. } = &commands[1] else {
            panic!("expected text box");
        };
        assert_eq!(text, "Long ago...");
        assert_eq!(*rect, Rect::new(200.0, 250.0, 1280.0 / 6.0 * 4.0, 480.0));
    }
}

use crate::asset::Asset;
use crate::geometry::{Point, Rect, Size};
use crate::ids::{AssetKey, PropId};
use crate::overlay::Narration;
use crate::scene::{DrawCommand, Scene};

use super::{PreloadContext, Room, RoomContext};

/// A fixed hit region inside a level, positioned by its centre.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropSpec {
    pub id: PropId,
    pub center: Point,
    pub size: Size,
    pub sprite: AssetKey,
    #[cfg_attr(feature = "serde", serde(default))]
    pub narration: Option<Narration>,
}

impl PropSpec {
    pub fn new(
        id: impl Into<PropId>,
        center: Point,
        size: Size,
        sprite: impl Into<AssetKey>,
    ) -> Self {
        Self {
            id: id.into(),
            center,
            size,
            sprite: sprite.into(),
            narration: None,
        }
    }

    pub fn narrating(mut self, narration: Narration) -> Self {
        self.narration = Some(narration);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelSpec {
    pub background: AssetKey,
    #[cfg_attr(feature = "serde", serde(default))]
    pub props: Vec<PropSpec>,
}

/// A prop that exists while the room is loaded.
#[derive(Clone, Debug)]
struct LiveProp {
    id: PropId,
    rect: Rect,
    sprite: Asset,
    narration: Option<Narration>,
}

/// Playable room: the avatar walks around and trigger props raise the
/// narrative overlay while the avatar overlaps them.
pub struct LevelRoom {
    spec: LevelSpec,
    background: Option<Asset>,
    sprites: Vec<Asset>,
    live: Vec<LiveProp>,
}

impl LevelRoom {
    pub fn new(spec: LevelSpec) -> Self {
        Self {
            spec,
            background: None,
            sprites: Vec::new(),
            live: Vec::new(),
        }
    }

    /// Number of props currently instantiated; zero while unloaded.
    pub fn live_props(&self) -> usize {
        self.live.len()
    }
}

impl Room for LevelRoom {
    fn preload(&mut self, ctx: &PreloadContext<'_>) {
        self.background = Some(ctx.assets.resolve(&self.spec.background));
        self.sprites = self
            .spec
            .props
            .iter()
            .map(|p| ctx.assets.resolve(&p.sprite))
            .collect();
    }

    fn load(&mut self, ctx: &mut RoomContext<'_>) {
        self.live = self
            .spec
            .props
            .iter()
            .enumerate()
            .map(|(i, p)| LiveProp {
                id: p.id.clone(),
                rect: Rect::around(p.center, p.size),
                sprite: self
                    .sprites
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| Asset::placeholder(p.sprite.clone())),
                narration: p.narration.clone(),
            })
            .collect();
        ctx.overlay.hide();
    }

    /// Level-triggered: the overlay is recomputed from scratch every frame.
    /// Props are checked in declaration order and the last overlapping one
    /// with something to say decides the text.
    fn draw(&mut self, ctx: &mut RoomContext<'_>, scene: &mut Scene) {
        let background = self
            .background
            .clone()
            .unwrap_or_else(|| Asset::placeholder(self.spec.background.clone()));
        scene.push(DrawCommand::Background {
            asset: background,
            tint: None,
        });

        for prop in &self.live {
            scene.push(DrawCommand::Prop {
                id: prop.id.clone(),
                rect: prop.rect,
                asset: prop.sprite.clone(),
            });
        }

        if !ctx.player.visible {
            ctx.overlay.hide();
            return;
        }

        let player = ctx.player.bounds();
        let mut shown: Option<Narration> = None;
        for prop in &self.live {
            if !prop.rect.intersects(&player) {
                continue;
            }
            ctx.report_overlap(prop.id.clone());
            if let Some(narration) = ctx
                .narration_override(&prop.id)
                .or(prop.narration.as_ref())
            {
                shown = Some(narration.clone());
            }
        }

        match shown {
            Some(narration) => ctx.overlay.show(narration),
            None => ctx.overlay.hide(),
        }
    }

    fn unload(&mut self, ctx: &mut RoomContext<'_>) {
        self.live.clear();
        ctx.overlay.hide();
    }

    fn trigger_props(&self) -> Vec<PropId> {
        self.spec.props.iter().map(|p| p.id.clone()).collect()
    }
}

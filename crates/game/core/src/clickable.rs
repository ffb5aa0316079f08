//! Clickable region manager: visibility, hit testing and button visuals.

use std::collections::HashMap;

use crate::geometry::Point;
use crate::ids::{RegionId, StateId};
use crate::scene::{DrawCommand, Scene};
use crate::style::ButtonStyle;
use crate::tables::{ClickableLayout, ClickableRegion};

/// Visual state of a button. Nothing persists beyond the pointer's current
/// position and button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ButtonVisual {
    #[default]
    Default,
    Hovered,
    Pressed,
}

pub struct ClickableManager {
    layout: ClickableLayout,
    style: ButtonStyle,
    visuals: HashMap<RegionId, ButtonVisual>,
}

impl ClickableManager {
    pub fn new(layout: ClickableLayout, style: ButtonStyle) -> Self {
        Self {
            layout,
            style,
            visuals: HashMap::new(),
        }
    }

    pub fn region(&self, id: &RegionId) -> Option<&ClickableRegion> {
        self.layout.get(id)
    }

    /// Regions scoped to `state` plus the global ones, in declaration order.
    pub fn regions_for<'a>(
        &'a self,
        state: &'a StateId,
    ) -> impl Iterator<Item = &'a ClickableRegion> + 'a {
        self.layout.iter().filter(move |r| r.is_visible_in(state))
    }

    /// Top-most visible region under `point`. Later declarations are drawn
    /// later, so they win.
    pub fn hit_test<'a>(&'a self, point: Point, state: &'a StateId) -> Option<&'a RegionId> {
        self.regions_for(state)
            .filter(|r| r.rect.contains(point))
            .last()
            .map(|r| &r.id)
    }

    pub fn visual(&self, id: &RegionId) -> ButtonVisual {
        self.visuals.get(id).copied().unwrap_or_default()
    }

    /// Hover tracking: the region under the pointer is hovered (or stays
    /// pressed), everything else reverts to default.
    pub fn pointer_moved(&mut self, point: Point, state: &StateId) {
        let hit = self.hit_test(point, state).cloned();
        self.visuals.retain(|id, visual| {
            Some(id) == hit.as_ref() && *visual == ButtonVisual::Pressed
        });
        if let Some(id) = hit {
            self.visuals.entry(id).or_insert(ButtonVisual::Hovered);
        }
    }

    pub fn pointer_pressed(&mut self, point: Point, state: &StateId) {
        self.visuals.clear();
        if let Some(id) = self.hit_test(point, state).cloned() {
            self.visuals.insert(id, ButtonVisual::Pressed);
        }
    }

    /// Ends a press. Returns the region under the pointer, which is the
    /// click target.
    pub fn pointer_released(&mut self, point: Point, state: &StateId) -> Option<RegionId> {
        self.visuals.clear();
        let hit = self.hit_test(point, state).cloned();
        if let Some(id) = &hit {
            self.visuals.insert(id.clone(), ButtonVisual::Hovered);
        }
        hit
    }

    /// Forgets hover/press state, used when the room changes under the
    /// pointer.
    pub fn reset_visuals(&mut self) {
        self.visuals.clear();
    }

    pub fn draw(&self, state: &StateId, scene: &mut Scene) {
        for region in self.regions_for(state) {
            scene.push(DrawCommand::Clickable {
                id: region.id.clone(),
                rect: region.rect,
                label: region.label.clone(),
                visual: self.visual(&region.id),
                style: self.style.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn manager() -> ClickableManager {
        let layout = ClickableLayout::new(vec![
            ClickableRegion::new("play", Rect::new(100.0, 100.0, 200.0, 50.0), "Play")
                .in_state("splash")
                .leads_to("intro"),
            ClickableRegion::new("help", Rect::new(1100.0, 20.0, 150.0, 40.0), "Help"),
            ClickableRegion::new("overlay", Rect::new(150.0, 110.0, 20.0, 20.0), "!")
                .in_state("splash"),
        ]);
        ClickableManager::new(layout, ButtonStyle::default())
    }

    #[test]
    fn regions_are_state_scoped() {
        let m = manager();
        let splash = StateId::new("splash");
        let other = StateId::new("level_one");
        let ids = |s: &StateId| -> Vec<String> {
            m.regions_for(s).map(|r| r.id.to_string()).collect()
        };
        assert_eq!(ids(&splash), vec!["play", "help", "overlay"]);
        assert_eq!(ids(&other), vec!["help"]);
    }

    #[test]
    fn hit_test_prefers_last_declared() {
        let m = manager();
        let splash = StateId::new("splash");
        assert_eq!(
            m.hit_test(Point::new(155.0, 115.0), &splash).map(|r| r.as_str()),
            Some("overlay")
        );
        assert_eq!(
            m.hit_test(Point::new(110.0, 110.0), &splash).map(|r| r.as_str()),
            Some("play")
        );
        assert_eq!(m.hit_test(Point::new(110.0, 110.0), &StateId::new("x")), None);
    }

    #[test]
    fn hover_reverts_when_pointer_leaves() {
        let mut m = manager();
        let splash = StateId::new("splash");
        let play = RegionId::new("play");

        m.pointer_moved(Point::new(110.0, 110.0), &splash);
        assert_eq!(m.visual(&play), ButtonVisual::Hovered);

        m.pointer_moved(Point::new(5.0, 5.0), &splash);
        assert_eq!(m.visual(&play), ButtonVisual::Default);
    }

    #[test]
    fn press_then_release_reports_click() {
        let mut m = manager();
        let splash = StateId::new("splash");
        let play = RegionId::new("play");

        m.pointer_pressed(Point::new(110.0, 110.0), &splash);
        assert_eq!(m.visual(&play), ButtonVisual::Pressed);
        m.pointer_moved(Point::new(120.0, 110.0), &splash);
        assert_eq!(m.visual(&play), ButtonVisual::Pressed);

        let clicked = m.pointer_released(Point::new(120.0, 110.0), &splash);
        assert_eq!(clicked, Some(play.clone()));
        assert_eq!(m.visual(&play), ButtonVisual::Hovered);
    }
}

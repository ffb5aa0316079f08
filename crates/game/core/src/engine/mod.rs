//! The adventure manager: the state machine that owns every room.
//!
//! [`AdventureManager`] is the single authority over the current state, the
//! player and the narrative overlay. Input arrives synchronously between
//! frames (`on_key`, `on_click`, pointer events) and once per frame
//! (`on_frame`). Every change of room goes through the same transition
//! routine, so the unload → load ordering holds no matter what caused it.

mod transition;
mod validate;

pub use transition::{Transition, TransitionCause};

use crate::asset::{Asset, AssetSource};
use crate::clickable::ClickableManager;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::geometry::Point;
use crate::ids::{KeySymbol, RegionId, StateId};
use crate::overlay::{NarrativeOverlay, render_overlay};
use crate::player::{Animation, MovementInput, Player};
use crate::room::{PreloadContext, RoomContext, RoomRegistry};
use crate::scene::{DrawCommand, Scene};
use crate::tables::{AdventureTables, InteractionTable, StateTable, Trigger};

use validate::TransitionMap;

/// Result of a discrete input event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// The input moved the adventure to another state.
    Transitioned(Transition),
    /// A reserved key the front end handles itself (fullscreen toggle).
    Reserved(KeySymbol),
    /// Nothing matched, or the target was the current state.
    Ignored,
}

impl InputOutcome {
    pub fn transition(&self) -> Option<&Transition> {
        match self {
            InputOutcome::Transitioned(t) => Some(t),
            _ => None,
        }
    }
}

/// What happened during one `on_frame` call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub frame: u64,
    pub transition: Option<Transition>,
    pub overlay_visible: bool,
}

/// Resolved avatar sprites.
struct PlayerSprites {
    idle: Asset,
    walk: Asset,
}

pub struct AdventureManager {
    config: GameConfig,
    states: StateTable,
    interactions: InteractionTable,
    transitions: TransitionMap,
    rooms: RoomRegistry,
    clickables: ClickableManager,
    current: StateId,
    player: Player,
    overlay: NarrativeOverlay,
    dialogue_asset: Asset,
    player_sprites: PlayerSprites,
    frame: u64,
}

impl AdventureManager {
    /// Validates the tables against the registry, preloads every room and
    /// enters the start state.
    ///
    /// Fails without touching any room if a reference does not resolve or a
    /// state has more than one rule for the same input.
    pub fn initialize(
        tables: AdventureTables,
        mut rooms: RoomRegistry,
        config: GameConfig,
        assets: &dyn AssetSource,
    ) -> Result<Self, ConfigError> {
        let validated = validate::validate(&tables, &rooms, &config)?;

        rooms.preload_all(&PreloadContext {
            assets,
            canvas: config.canvas,
        });

        let AdventureTables {
            states,
            interactions,
            clickables,
        } = tables;

        let player = Player::new(&config.player, config.player_start());
        let dialogue_asset = assets.resolve(&config.dialogue.asset);
        let player_sprites = PlayerSprites {
            idle: assets.resolve(&config.player.idle_asset),
            walk: assets.resolve(&config.player.walk_asset),
        };
        let clickables = ClickableManager::new(clickables, config.buttons.clone());

        tracing::info!(
            states = states.len(),
            rooms = rooms.len(),
            rules = validated.transitions.len(),
            start = %validated.start,
            "adventure initialized"
        );

        let mut manager = Self {
            config,
            states,
            interactions,
            transitions: validated.transitions,
            rooms,
            clickables,
            current: validated.start,
            player,
            overlay: NarrativeOverlay::new(),
            dialogue_asset,
            player_sprites,
            frame: 0,
        };
        manager.enter_current();
        Ok(manager)
    }

    pub fn current_state(&self) -> &StateId {
        &self.current
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn overlay(&self) -> &NarrativeOverlay {
        &self.overlay
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn clickables(&self) -> &ClickableManager {
        &self.clickables
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Moves the avatar without animating it.
    pub fn teleport_player(&mut self, position: Point) {
        self.player.position = position;
    }

    /// Key press. Reserved keys never reach the transition table.
    pub fn on_key(&mut self, key: &KeySymbol) -> InputOutcome {
        if self.config.is_reserved(key) {
            return InputOutcome::Reserved(key.clone());
        }
        self.dispatch(Trigger::Key(key.clone()), TransitionCause::Key(key.clone()))
    }

    /// Click on a region, by id. Regions not shown in the current state are
    /// ignored. A rule in the interaction table wins over the region's own
    /// target.
    pub fn on_click(&mut self, region: &RegionId) -> InputOutcome {
        let Some(clicked) = self.clickables.region(region) else {
            tracing::trace!(%region, "click on unknown region ignored");
            return InputOutcome::Ignored;
        };
        if !clicked.is_visible_in(&self.current) {
            return InputOutcome::Ignored;
        }
        let fallback = clicked.target.clone();

        let trigger = Trigger::Click(region.clone());
        let target = self
            .transitions
            .get(&(self.current.clone(), trigger))
            .cloned()
            .or(fallback);

        match target {
            Some(target) => self.go(target, TransitionCause::Click(region.clone())),
            None => InputOutcome::Ignored,
        }
    }

    pub fn on_pointer_move(&mut self, point: Point) {
        self.clickables.pointer_moved(point, &self.current);
    }

    pub fn on_pointer_press(&mut self, point: Point) {
        self.clickables.pointer_pressed(point, &self.current);
    }

    /// Mouse release: clicks the region under the pointer, if any.
    pub fn on_pointer_release(&mut self, point: Point) -> InputOutcome {
        match self.clickables.pointer_released(point, &self.current) {
            Some(region) => self.on_click(&region),
            None => InputOutcome::Ignored,
        }
    }

    /// Advances one frame and describes it in `scene`.
    ///
    /// Order: move the avatar (and follow an edge exit), draw the room,
    /// apply overlap rules, then layer clickables, avatar and overlay on
    /// top.
    pub fn on_frame(&mut self, input: MovementInput, scene: &mut Scene) -> FrameReport {
        self.frame += 1;
        scene.clear();

        let mut transition = self.move_player(input);

        let overlapping = self.draw_room(scene);
        if transition.is_none() {
            // Last overlapping prop in declaration order wins, as for narration.
            let goto = overlapping.into_iter().rev().find_map(|prop| {
                let trigger = Trigger::Overlap(prop.clone());
                self.transitions
                    .get(&(self.current.clone(), trigger))
                    .filter(|target| **target != self.current)
                    .cloned()
                    .map(|target| (prop, target))
            });
            if let Some((prop, target)) = goto {
                transition = Some(self.transition_to(target, TransitionCause::Overlap(prop)));
                scene.clear();
                self.draw_room(scene);
            }
        }

        self.clickables.draw(&self.current, scene);

        if self.player.visible {
            let sprite = match self.player.animation {
                Animation::Idle => &self.player_sprites.idle,
                Animation::Walk => &self.player_sprites.walk,
            };
            scene.push(DrawCommand::Player {
                rect: self.player.bounds(),
                asset: sprite.clone(),
                animation: self.player.animation,
                facing: self.player.facing,
            });
        }

        if let Some(dialogue) = render_overlay(
            &self.overlay,
            &self.config.dialogue,
            &self.dialogue_asset,
            self.config.canvas,
        ) {
            scene.push(dialogue);
        }

        FrameReport {
            frame: self.frame,
            transition,
            overlay_visible: self.overlay.is_visible(),
        }
    }

    fn dispatch(&mut self, trigger: Trigger, cause: TransitionCause) -> InputOutcome {
        match self.transitions.get(&(self.current.clone(), trigger)).cloned() {
            Some(target) => self.go(target, cause),
            None => {
                tracing::trace!(state = %self.current, ?cause, "no rule for input");
                InputOutcome::Ignored
            }
        }
    }

    fn go(&mut self, target: StateId, cause: TransitionCause) -> InputOutcome {
        if target == self.current {
            return InputOutcome::Ignored;
        }
        InputOutcome::Transitioned(self.transition_to(target, cause))
    }

    /// Samples the held keys, steps the avatar and resolves edge exits.
    fn move_player(&mut self, input: MovementInput) -> Option<Transition> {
        if !self.player.visible {
            return None;
        }
        let canvas = self.config.canvas;
        self.player.apply_input(input);
        self.player.step();

        let edge = self.player.crossed_edge(canvas)?;
        let exit = self
            .states
            .get(&self.current)
            .and_then(|s| s.exits.get(edge))
            .filter(|target| **target != self.current)
            .cloned();

        match exit {
            Some(target) => {
                self.player.wrap_from(edge, canvas);
                Some(self.transition_to(target, TransitionCause::Exit(edge)))
            }
            None => {
                self.player.clamp_to(canvas);
                None
            }
        }
    }

    /// Runs the current room's `draw`, returning the props the avatar
    /// overlaps.
    fn draw_room(&mut self, scene: &mut Scene) -> Vec<crate::ids::PropId> {
        let Some(room_id) = self.states.get(&self.current).map(|s| s.room.clone()) else {
            return Vec::new();
        };
        let Some(room) = self.rooms.get_mut(&room_id) else {
            return Vec::new();
        };
        let mut ctx = RoomContext::new(
            &self.current,
            &self.player,
            &mut self.overlay,
            &self.interactions,
            self.config.canvas,
        );
        room.draw(&mut ctx, scene);
        ctx.into_overlapping()
    }
}

impl std::fmt::Debug for AdventureManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdventureManager")
            .field("current", &self.current)
            .field("frame", &self.frame)
            .field("player", &self.player.position)
            .field("overlay", &self.overlay)
            .finish_non_exhaustive()
    }
}

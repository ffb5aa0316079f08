//! Room state machine and data types for Sweetfield-style point-and-click
//! adventures.
//!
//! `adventure-core` has no I/O. Content crates build the tables and rooms,
//! front ends feed input into [`engine::AdventureManager`] and paint the
//! [`scene::Scene`] it fills every frame. All state changes flow through the
//! manager, and supporting crates depend on the types re-exported here.
pub mod asset;
pub mod clickable;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod overlay;
pub mod player;
pub mod room;
pub mod scene;
pub mod style;
pub mod tables;

pub use asset::{Asset, AssetSource, StaticAssets};
pub use clickable::{ButtonVisual, ClickableManager};
pub use config::{DialogueConfig, GameConfig, PlayerConfig};
pub use engine::{AdventureManager, FrameReport, InputOutcome, Transition, TransitionCause};
pub use error::ConfigError;
pub use geometry::{Point, Rect, Size};
pub use ids::{AssetKey, KeySymbol, PropId, RegionId, RoomId, StateId};
pub use overlay::{Narration, NarrativeOverlay};
pub use player::{Animation, Edge, Facing, MovementInput, Player};
pub use room::{
    LevelRoom, LevelSpec, NarrativeRoom, NarrativeSpec, PreloadContext, PropSpec, Room,
    RoomContext, RoomRegistry, RoomSpec,
};
pub use scene::{DrawCommand, Scene};
pub use style::{ButtonStyle, ParseColorError, Rgb, TextAlign, TextStyle};
pub use tables::{
    AdventureTables, ClickableLayout, ClickableRegion, Effect, Exits, InteractionRule,
    InteractionTable, RegionScope, StateDefinition, StateTable, Trigger,
};

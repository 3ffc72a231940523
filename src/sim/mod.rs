//! Deterministic simulation module
//!
//! All world population and interaction logic lives here. This module must be
//! pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, injected by the caller
//! - Stable iteration order (obstacles and hostiles in creation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod field;
pub mod generate;
pub mod interact;
pub mod motion;
pub mod rect;
pub mod scene;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, Contacts, rect_collision, step_bodies};
pub use field::SpatialField;
pub use generate::{ExclusionZone, Placement, generate_obstacles, place_outside};
pub use motion::{DirectionalInput, player_velocity};
pub use rect::{Probe, Rect, WorldBounds};
pub use scene::Scene;
pub use spawn::{SafeSpawnFinder, SpawnOutcome};
pub use state::{
    Entity, EntityKind, Facing, LevelState, Obstacle, Palette, RestartCause, Rgb, SceneContext,
    SceneEvent, ScenePhase,
};
pub use tick::{TickInput, tick};

//! Scene state and core simulation types
//!
//! Everything a running scene owns lives in [`SceneContext`]. The context is
//! rebuilt from scratch on every restart; only [`LevelState`] survives.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::field::SpatialField;
use super::generate::generate_obstacles;
use super::motion::random_velocity;
use super::rect::{Rect, WorldBounds};
use super::spawn::SafeSpawnFinder;
use crate::config::{SceneConfig, SpawnRule};

/// Packed 0xRRGGBB colour
pub type Rgb = u32;

/// Current phase of the scene lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenePhase {
    /// Ticks advance motion and interactions
    Playing,
    /// Waiting for the context to be regenerated
    Restarting(RestartCause),
}

/// Why the scene is being rebuilt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestartCause {
    /// Player touched a hostile; the level has already been advanced
    HostileCollision,
    /// Reset requested by the player; the level is kept
    ManualReset,
}

/// Notifications for the surrounding scene layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SceneEvent {
    /// Context (re)generated and ready for the first tick
    SceneReady { level: u32 },
    /// Player touched a hostile; a restart at `level` follows
    LevelAdvanced { level: u32 },
    /// Manual reset accepted
    ResetRequested,
    /// Collectible picked up: palette randomised and collectible moved
    CollectiblePicked {
        obstacle_color: Rgb,
        background_color: Rgb,
        relocated_to: Vec2,
    },
    /// Player overlaps the goal zone this tick
    GoalReached,
}

/// Which way the player sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Entity kinds. Players and hostiles are solid; collectibles are overlap-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Hostile,
    Collectible,
}

/// A moving or collectible body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    pub pos: Vec2,
    /// Unscaled footprint (sprite size)
    pub footprint: Vec2,
    pub vel: Vec2,
    pub scale: f32,
    #[serde(default)]
    pub facing: Facing,
}

impl Entity {
    pub fn new(id: u32, kind: EntityKind, pos: Vec2, footprint: Vec2, scale: f32) -> Self {
        Self {
            id,
            kind,
            pos,
            footprint,
            vel: Vec2::ZERO,
            scale,
            facing: Facing::default(),
        }
    }

    /// Footprint after scaling
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.footprint * self.scale
    }

    /// Current world-space bounds
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size())
    }

    /// Solid bodies get collision response; collectibles only report overlap
    pub fn is_solid(&self) -> bool {
        !matches!(self.kind, EntityKind::Collectible)
    }
}

/// A wall. Static walls never move; drifting walls translate, spin and bounce
/// off the world edges but are never pushed by other bodies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub rect: Rect,
    pub is_static: bool,
    /// Units per second
    #[serde(default)]
    pub drift_vel: Vec2,
    /// Radians per tick
    #[serde(default)]
    pub rotation_speed: f32,
}

impl Obstacle {
    pub fn fixed(id: u32, rect: Rect) -> Self {
        Self {
            id,
            rect,
            is_static: true,
            drift_vel: Vec2::ZERO,
            rotation_speed: 0.0,
        }
    }

    pub fn drifting(id: u32, rect: Rect, drift_vel: Vec2, rotation_speed: f32) -> Self {
        Self {
            id,
            rect,
            is_static: false,
            drift_vel,
            rotation_speed,
        }
    }
}

/// Level counter. Starts at 1, only ever increases within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelState {
    pub level: u32,
}

impl Default for LevelState {
    fn default() -> Self {
        Self { level: 1 }
    }
}

impl LevelState {
    /// Advance one level, returning the new value
    pub fn advance(&mut self) -> u32 {
        self.level = self.level.saturating_add(1);
        self.level
    }

    /// Hostile scale for this level: `base + (level - 1) * per_level`
    pub fn hostile_scale(&self, base: f32, per_level: f32) -> f32 {
        base + self.level.saturating_sub(1) as f32 * per_level
    }
}

/// Scene colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub obstacle: Rgb,
    pub background: Rgb,
    #[serde(default)]
    pub goal: Rgb,
}

impl Palette {
    /// Draw an independent random colour
    pub fn random_color(rng: &mut impl Rng) -> Rgb {
        let r = rng.random::<u8>() as u32;
        let g = rng.random::<u8>() as u32;
        let b = rng.random::<u8>() as u32;
        (r << 16) | (g << 8) | b
    }
}

/// Monotonic id source for one scene build
#[derive(Debug, Clone, Default)]
pub struct EntityIds {
    next: u32,
}

impl EntityIds {
    pub fn next_id(&mut self) -> u32 {
        self.next += 1;
        self.next
    }
}

/// Everything a running scene owns. Rebuilt, never patched, on restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneContext {
    pub field: SpatialField,
    pub player: Entity,
    pub hostiles: Vec<Entity>,
    pub collectible: Option<Entity>,
    pub goal: Option<Rect>,
    pub palette: Palette,
    /// Ticks since this context was built
    pub time_ticks: u64,
}

impl SceneContext {
    /// Generate obstacles, then place every entity into the finished field
    pub fn build(config: &SceneConfig, level: LevelState, rng: &mut impl Rng) -> Self {
        let mut ids = EntityIds::default();
        let obstacles = generate_obstacles(&config.obstacles, config.world, rng, &mut ids);
        let field = SpatialField::with_obstacles(config.world, obstacles);
        let finder = SafeSpawnFinder::new(config.spawn.margin, config.spawn.max_attempts);

        let player_cfg = &config.player;
        let player_size = player_cfg.size * player_cfg.scale;
        let player_pos = match player_cfg.spawn {
            SpawnRule::Center => config.world.center(),
            SpawnRule::Safe => finder.place(&field, player_size, rng, "player"),
        };
        let player = Entity::new(
            ids.next_id(),
            EntityKind::Player,
            player_pos,
            player_cfg.size,
            player_cfg.scale,
        );

        let hostile_cfg = &config.hostiles;
        let hostile_scale = level.hostile_scale(hostile_cfg.base_scale, hostile_cfg.scale_per_level);
        let hostiles = (0..hostile_cfg.count)
            .map(|_| {
                let pos = finder.place(&field, hostile_cfg.size * hostile_scale, rng, "hostile");
                let mut hostile = Entity::new(
                    ids.next_id(),
                    EntityKind::Hostile,
                    pos,
                    hostile_cfg.size,
                    hostile_scale,
                );
                hostile.vel = random_velocity(rng, hostile_cfg.max_speed);
                hostile
            })
            .collect::<Vec<_>>();

        let collectible = config.collectible.as_ref().map(|c| {
            let pos = finder.place(&field, c.size * c.scale, rng, "collectible");
            Entity::new(ids.next_id(), EntityKind::Collectible, pos, c.size, c.scale)
        });

        log::info!(
            "Built {:?} scene: level={}, obstacles={}, hostiles={}, collectible={}",
            config.variant,
            level.level,
            field.len(),
            hostiles.len(),
            collectible.is_some()
        );

        Self {
            field,
            player,
            hostiles,
            collectible,
            goal: config.goal,
            palette: config.palette,
            time_ticks: 0,
        }
    }

    #[inline]
    pub fn bounds(&self) -> WorldBounds {
        self.field.bounds()
    }
}

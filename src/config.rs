//! Scene configuration and variant presets
//!
//! One struct describes every variant: obstacle policy, entity roster and
//! palette. The built-in presets cover the maze, monster maze and drift field; any
//! of them can be overridden from a JSON file.

use std::path::Path;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::rect::{Rect, WorldBounds};
use crate::sim::state::Palette;

/// Built-in scene variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// Static maze, free roaming
    #[default]
    Maze,
    /// Static maze with bouncing hostiles and a collectible disc
    MonsterMaze,
    /// Drifting, spinning walls and a goal door
    DriftField,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Maze => "maze",
            Variant::MonsterMaze => "monster-maze",
            Variant::DriftField => "drift-field",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "maze" => Some(Variant::Maze),
            "monster-maze" | "monstermaze" | "monsters" => Some(Variant::MonsterMaze),
            "drift-field" | "drift" | "driftfield" => Some(Variant::DriftField),
            _ => None,
        }
    }
}

/// Closed sampling range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub const fn fixed(value: f32) -> Self {
        Self::new(value, value)
    }

    /// Symmetric range `[-limit, limit]`
    pub const fn symmetric(limit: f32) -> Self {
        Self::new(-limit, limit)
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    /// Uniform sample; a degenerate span yields `min`
    pub fn sample(&self, rng: &mut impl Rng) -> f32 {
        if self.min < self.max {
            rng.random_range(self.min..=self.max)
        } else {
            self.min
        }
    }
}

/// How a scene's walls are laid out
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ObstaclePolicy {
    /// Fixed walls anywhere in the world, overlaps between walls allowed
    Static { count: u32, width: Span, height: Span },
    /// Moving, spinning walls kept out of a square zone around the world centre
    Drifting {
        count: u32,
        width: Span,
        height: Span,
        /// Border kept clear of wall centres
        edge_margin: f32,
        /// Half-width of the square exclusion zone
        exclusion_half_extent: f32,
        /// Per-axis drift speed limit (units per second)
        max_speed: f32,
        /// Spin limit (radians per tick)
        max_rotation_speed: f32,
        /// Resampling cap before placing without the exclusion check
        max_attempts: u32,
    },
}

impl ObstaclePolicy {
    pub fn count(&self) -> u32 {
        match *self {
            ObstaclePolicy::Static { count, .. } | ObstaclePolicy::Drifting { count, .. } => count,
        }
    }
}

/// Where the player starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnRule {
    /// World centre, no obstacle check
    Center,
    /// Safe spawn search
    Safe,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Unscaled sprite size
    pub size: Vec2,
    pub scale: f32,
    /// Units per second on each axis
    pub speed: f32,
    pub spawn: SpawnRule,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HostileConfig {
    pub count: u32,
    pub size: Vec2,
    /// Per-axis speed limit for the spawn velocity
    pub max_speed: f32,
    pub base_scale: f32,
    pub scale_per_level: f32,
}

impl HostileConfig {
    pub const NONE: Self = Self {
        count: 0,
        size: Vec2::splat(64.0),
        max_speed: 0.0,
        base_scale: 1.0,
        scale_per_level: 0.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollectibleConfig {
    pub size: Vec2,
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnConfig {
    pub margin: f32,
    pub max_attempts: u32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            margin: SPAWN_MARGIN,
            max_attempts: SPAWN_MAX_ATTEMPTS,
        }
    }
}

/// Complete description of one scene variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub variant: Variant,
    pub world: WorldBounds,
    pub obstacles: ObstaclePolicy,
    pub player: PlayerConfig,
    #[serde(default = "no_hostiles")]
    pub hostiles: HostileConfig,
    #[serde(default)]
    pub collectible: Option<CollectibleConfig>,
    #[serde(default)]
    pub goal: Option<Rect>,
    pub palette: Palette,
    #[serde(default)]
    pub spawn: SpawnConfig,
    /// Camera viewport size
    pub viewport: Vec2,
}

fn no_hostiles() -> HostileConfig {
    HostileConfig::NONE
}

/// Configuration loading errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Values that would make the scene unbuildable
    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::preset(Variant::default())
    }
}

impl SceneConfig {
    /// Built-in configuration for a variant
    pub fn preset(variant: Variant) -> Self {
        let world = WorldBounds::new(WORLD_WIDTH, WORLD_HEIGHT);
        let sprite = Vec2::splat(64.0);
        match variant {
            Variant::Maze => Self {
                variant,
                world,
                obstacles: ObstaclePolicy::Static {
                    count: 200,
                    width: Span::new(100.0, 200.0),
                    height: Span::new(100.0, 600.0),
                },
                player: PlayerConfig {
                    size: sprite,
                    scale: 0.5,
                    speed: PLAYER_SPEED,
                    spawn: SpawnRule::Center,
                },
                hostiles: HostileConfig::NONE,
                collectible: None,
                goal: None,
                palette: Palette {
                    obstacle: 0xffbf00,
                    background: 0x1c1c1c,
                    goal: 0x3a5f5f,
                },
                spawn: SpawnConfig::default(),
                viewport: Vec2::new(1080.0, 720.0),
            },
            Variant::MonsterMaze => Self {
                variant,
                world,
                obstacles: ObstaclePolicy::Static {
                    count: 200,
                    width: Span::fixed(100.0),
                    height: Span::new(100.0, 600.0),
                },
                player: PlayerConfig {
                    size: sprite,
                    scale: 0.5,
                    speed: PLAYER_SPEED,
                    spawn: SpawnRule::Safe,
                },
                hostiles: HostileConfig {
                    count: 20,
                    size: sprite,
                    max_speed: 100.0,
                    base_scale: 0.5,
                    scale_per_level: 0.5,
                },
                collectible: Some(CollectibleConfig {
                    size: sprite,
                    scale: 0.5,
                }),
                goal: None,
                palette: Palette {
                    obstacle: 0xffbf00,
                    background: 0x1c1c1c,
                    goal: 0x3a5f5f,
                },
                spawn: SpawnConfig::default(),
                viewport: Vec2::new(1080.0, 720.0),
            },
            Variant::DriftField => Self {
                variant,
                world,
                obstacles: ObstaclePolicy::Drifting {
                    count: 100,
                    width: Span::new(40.0, 120.0),
                    height: Span::new(40.0, 150.0),
                    edge_margin: 50.0,
                    exclusion_half_extent: 200.0,
                    max_speed: 50.0,
                    max_rotation_speed: 0.01,
                    max_attempts: EXCLUSION_MAX_ATTEMPTS,
                },
                player: PlayerConfig {
                    size: sprite,
                    scale: 1.0,
                    speed: PLAYER_SPEED,
                    spawn: SpawnRule::Center,
                },
                hostiles: HostileConfig::NONE,
                collectible: None,
                goal: Some(Rect::from_xywh(
                    WORLD_WIDTH - 200.0,
                    WORLD_HEIGHT - 200.0,
                    80.0,
                    120.0,
                )),
                palette: Palette {
                    obstacle: 0x2e2e2e,
                    background: 0x1c1c1c,
                    goal: 0x3a5f5f,
                },
                spawn: SpawnConfig::default(),
                viewport: Vec2::new(1000.0, 800.0),
            },
        }
    }

    /// Load a config from a JSON file and validate it
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        log::info!("Loaded {:?} config from {}", config.variant, path.display());
        Ok(config)
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would make generation or placement meaningless.
    ///
    /// Every float must be finite: sampling over an infinite or NaN range
    /// would abort scene building.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));
        let finite = |values: &[f32]| values.iter().all(|v| v.is_finite());
        let non_negative = |values: &[f32]| values.iter().all(|v| v.is_finite() && *v >= 0.0);
        let positive = |values: &[f32]| values.iter().all(|v| v.is_finite() && *v > 0.0);
        let size_ok = |span: Span| span.is_valid() && span.min >= 0.0;

        if !positive(&[self.world.width, self.world.height]) {
            return invalid("world size must be positive and finite");
        }
        match self.obstacles {
            ObstaclePolicy::Static { width, height, .. } => {
                if !size_ok(width) || !size_ok(height) {
                    return invalid("obstacle size spans must be finite, non-negative with min <= max");
                }
            }
            ObstaclePolicy::Drifting {
                width,
                height,
                edge_margin,
                exclusion_half_extent,
                max_speed,
                max_rotation_speed,
                max_attempts,
                ..
            } => {
                if !size_ok(width) || !size_ok(height) {
                    return invalid("obstacle size spans must be finite, non-negative with min <= max");
                }
                if !non_negative(&[edge_margin, exclusion_half_extent, max_speed, max_rotation_speed]) {
                    return invalid("edge margin, exclusion extent and drift limits must be finite and non-negative");
                }
                if max_attempts == 0 {
                    return invalid("exclusion attempt budget must be at least 1");
                }
            }
        }

        if !non_negative(&[self.spawn.margin]) {
            return invalid("spawn margin must be finite and non-negative");
        }
        if self.spawn.max_attempts == 0 {
            return invalid("spawn attempt budget must be at least 1");
        }

        let player = &self.player;
        if !non_negative(&[player.size.x, player.size.y, player.speed]) || !positive(&[player.scale]) {
            return invalid("player size and speed must be finite and non-negative, scale positive");
        }

        let hostiles = &self.hostiles;
        if !non_negative(&[hostiles.size.x, hostiles.size.y]) || !positive(&[hostiles.base_scale]) {
            return invalid("hostile size must be finite and non-negative, base scale positive");
        }
        if !non_negative(&[hostiles.max_speed, hostiles.scale_per_level]) {
            return invalid("hostile speed and per-level scale must be finite and non-negative");
        }

        if let Some(c) = &self.collectible {
            if !non_negative(&[c.size.x, c.size.y]) || !positive(&[c.scale]) {
                return invalid("collectible size must be finite and non-negative, scale positive");
            }
        }
        if let Some(goal) = &self.goal {
            if !finite(&[goal.center.x, goal.center.y, goal.rotation]) || !non_negative(&[goal.size.x, goal.size.y]) {
                return invalid("goal zone must be finite with a non-negative size");
            }
        }
        if !positive(&[self.viewport.x, self.viewport.y]) {
            return invalid("viewport must be positive and finite");
        }
        Ok(())
    }
}

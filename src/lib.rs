//! Maze Drift - world population and spatial interaction for top-down arcade scenes
//!
//! Core modules:
//! - `sim`: Deterministic simulation (obstacle layout, safe spawning, collisions, level state)
//! - `config`: Per-variant scene configuration and presets
//! - `renderer`: CPU-side draw lists and follow camera for an external drawing backend

pub mod config;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, SceneConfig, Variant};
pub use sim::{Scene, SceneEvent, TickInput};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matches the arcade physics step)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// World dimensions shared by every variant
    pub const WORLD_WIDTH: f32 = 4000.0;
    pub const WORLD_HEIGHT: f32 = 4000.0;

    /// Player movement speed (units per second)
    pub const PLAYER_SPEED: f32 = 200.0;

    /// Safe spawn defaults
    pub const SPAWN_MARGIN: f32 = 50.0;
    pub const SPAWN_MAX_ATTEMPTS: u32 = 1000;

    /// Exclusion sampling cap for drifting obstacles
    pub const EXCLUSION_MAX_ATTEMPTS: u32 = 1000;

    /// Camera follow lerp per tick
    pub const CAMERA_LERP: f32 = 0.1;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert a packed 0xRRGGBB colour to linear RGBA floats
#[inline]
pub fn rgb_to_rgba(rgb: u32, alpha: f32) -> [f32; 4] {
    let r = ((rgb >> 16) & 0xff) as f32 / 255.0;
    let g = ((rgb >> 8) & 0xff) as f32 / 255.0;
    let b = (rgb & 0xff) as f32 / 255.0;
    [r, g, b, alpha]
}

/// Rotate a vector by `angle` radians around the origin
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}

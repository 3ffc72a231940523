//! Per-tick motion: player steering, hostile launch velocity, wall spin
//!
//! Player steering is first-match-wins on each axis: left beats right and up
//! beats down when both are held.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::field::SpatialField;
use super::state::{Entity, Facing};
use crate::config::Span;
use crate::normalize_angle;

/// Snapshot of the four direction keys for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionalInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Velocity for a direction snapshot. Screen coordinates: up is -y.
/// Also returns the facing implied by horizontal input, if any.
pub fn player_velocity(input: &DirectionalInput, speed: f32) -> (Vec2, Option<Facing>) {
    let mut vel = Vec2::ZERO;
    let mut facing = None;

    if input.left {
        vel.x = -speed;
        facing = Some(Facing::Left);
    } else if input.right {
        vel.x = speed;
        facing = Some(Facing::Right);
    }

    if input.up {
        vel.y = -speed;
    } else if input.down {
        vel.y = speed;
    }

    (vel, facing)
}

/// Reset the player's velocity and apply this tick's input
pub fn steer_player(player: &mut Entity, input: &DirectionalInput, speed: f32) {
    let (vel, facing) = player_velocity(input, speed);
    player.vel = vel;
    if let Some(facing) = facing {
        player.facing = facing;
    }
}

/// Launch velocity for an autonomous body, each axis in `[-max_speed, max_speed]`
pub fn random_velocity(rng: &mut impl Rng, max_speed: f32) -> Vec2 {
    let span = Span::symmetric(max_speed);
    let x = span.sample(rng);
    let y = span.sample(rng);
    Vec2::new(x, y)
}

/// Advance every wall's rotation by its per-tick spin
pub fn spin_obstacles(field: &mut SpatialField) {
    for obstacle in field.obstacles_mut() {
        if obstacle.rotation_speed != 0.0 {
            obstacle.rect.rotation = normalize_angle(obstacle.rect.rotation + obstacle.rotation_speed);
        }
    }
}

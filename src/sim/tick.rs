//! Fixed timestep simulation tick
//!
//! One tick runs in strict order: input, motion, physics step, interactions.
//! A tick that finds the scene restarting only rebuilds it.

use serde::{Deserialize, Serialize};

use super::collision::step_bodies;
use super::interact::{resolve_collectible, resolve_goal, resolve_hostile_contact};
use super::motion::{DirectionalInput, spin_obstacles, steer_player};
use super::scene::Scene;
use super::state::{RestartCause, SceneEvent, ScenePhase};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Direction keys held this tick
    pub keys: DirectionalInput,
    /// Reset button pressed (restart without advancing the level)
    pub reset: bool,
}

/// Advance the scene by one fixed timestep and return what happened
pub fn tick(scene: &mut Scene, input: &TickInput, dt: f32) -> Vec<SceneEvent> {
    let mut events = Vec::new();

    if let ScenePhase::Restarting(_) = scene.phase {
        events.push(scene.rebuild());
        return events;
    }

    if input.reset {
        if scene.request_reset() {
            events.push(SceneEvent::ResetRequested);
        }
        return events;
    }

    let speed = scene.config().player.speed;
    let finder = scene.spawn_finder();

    let ctx = &mut scene.ctx;
    ctx.time_ticks += 1;
    steer_player(&mut ctx.player, &input.keys, speed);
    spin_obstacles(&mut ctx.field);
    let contacts = step_bodies(ctx, dt);

    if let Some(event) = resolve_hostile_contact(&mut scene.level, &contacts) {
        scene.phase = ScenePhase::Restarting(RestartCause::HostileCollision);
        events.push(event);
        return events;
    }

    events.extend(resolve_collectible(&mut scene.ctx, &finder, &mut scene.rng));
    events.extend(resolve_goal(&scene.ctx));

    events
}

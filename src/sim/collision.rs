//! Arcade physics step: integration, world confinement, push-out and bounce
//!
//! Stands in for the engine's arcade physics. Bodies are axis-aligned boxes;
//! overlaps are resolved along the axis of least penetration and bouncy
//! bodies reflect their velocity about that axis.

use glam::Vec2;

use super::rect::{Rect, WorldBounds};
use super::state::SceneContext;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Separation direction for the moving body (unit axis)
    pub normal: Vec2,
    /// Penetration depth along `normal`
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }

    /// Offset that moves the body out of contact
    #[inline]
    pub fn correction(&self) -> Vec2 {
        self.normal * self.penetration
    }
}

/// Check a moving box against a fixed one.
///
/// The normal points from `fixed` toward `moving` on the axis of least
/// penetration. Exactly coincident centres separate along +x / +y.
pub fn rect_collision(moving: &Rect, fixed: &Rect) -> CollisionResult {
    let Some(depth) = moving.penetration(fixed) else {
        return CollisionResult::miss();
    };
    let d = moving.center - fixed.center;
    let sign = |v: f32| if v < 0.0 { -1.0 } else { 1.0 };

    if depth.x < depth.y {
        CollisionResult {
            hit: true,
            normal: Vec2::new(sign(d.x), 0.0),
            penetration: depth.x,
        }
    } else {
        CollisionResult {
            hit: true,
            normal: Vec2::new(0.0, sign(d.y)),
            penetration: depth.y,
        }
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Keep a body inside the world. Bouncy bodies have the velocity component
/// that points out of the world flipped on every edge they touch.
pub fn confine_to_world(pos: &mut Vec2, vel: &mut Vec2, half: Vec2, bounds: WorldBounds, bounce: bool) {
    let clamped = bounds.clamp_center(*pos, half);
    if bounce {
        if clamped.x > pos.x {
            vel.x = vel.x.abs();
        } else if clamped.x < pos.x {
            vel.x = -vel.x.abs();
        }
        if clamped.y > pos.y {
            vel.y = vel.y.abs();
        } else if clamped.y < pos.y {
            vel.y = -vel.y.abs();
        }
    }
    *pos = clamped;
}

/// Contacts reported by one physics step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contacts {
    /// Id of the first hostile found touching the player
    pub player_hostile: Option<u32>,
    /// Walls the player was pushed out of
    pub player_blocked: u32,
}

/// Advance all bodies by `dt` seconds and report solid contacts
pub fn step_bodies(ctx: &mut SceneContext, dt: f32) -> Contacts {
    let bounds = ctx.bounds();
    let mut contacts = Contacts::default();

    // Drifting walls: immovable by bodies, bounce off the world edges
    for wall in ctx.field.obstacles_mut() {
        if wall.is_static {
            continue;
        }
        let half = wall.rect.half_extents();
        wall.rect.center += wall.drift_vel * dt;
        confine_to_world(&mut wall.rect.center, &mut wall.drift_vel, half, bounds, true);
    }

    // Player: blocked by walls and world edges, no bounce. The world edge
    // wins when a wall pins the player against it.
    {
        let player = &mut ctx.player;
        player.pos += player.vel * dt;
        let half = player.size() * 0.5;
        for wall in ctx.field.obstacles() {
            let hit = rect_collision(&player.bounds(), &wall.rect);
            if hit.hit {
                player.pos += hit.correction();
                contacts.player_blocked += 1;
            }
        }
        confine_to_world(&mut player.pos, &mut player.vel, half, bounds, false);
    }

    // Hostiles: bounce off world edges and walls
    for hostile in &mut ctx.hostiles {
        hostile.pos += hostile.vel * dt;
        let half = hostile.size() * 0.5;
        confine_to_world(&mut hostile.pos, &mut hostile.vel, half, bounds, true);
        for wall in ctx.field.obstacles() {
            let hit = rect_collision(&hostile.bounds(), &wall.rect);
            if hit.hit {
                hostile.pos += hit.correction();
                if hostile.vel.dot(hit.normal) < 0.0 {
                    hostile.vel = reflect_velocity(hostile.vel, hit.normal);
                }
            }
        }
        confine_to_world(&mut hostile.pos, &mut hostile.vel, half, bounds, true);
    }

    // Hostile pairs: equal-mass elastic exchange along the contact axis
    let n = ctx.hostiles.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (head, tail) = ctx.hostiles.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];
            let hit = rect_collision(&a.bounds(), &b.bounds());
            if !hit.hit {
                continue;
            }
            let push = hit.correction() * 0.5;
            a.pos += push;
            b.pos -= push;
            let va = a.vel.dot(hit.normal);
            let vb = b.vel.dot(hit.normal);
            if va - vb < 0.0 {
                a.vel += (vb - va) * hit.normal;
                b.vel += (va - vb) * hit.normal;
            }
            for body in [a, b] {
                let half = body.size() * 0.5;
                confine_to_world(&mut body.pos, &mut body.vel, half, bounds, true);
            }
        }
    }

    let player_bounds = ctx.player.bounds();
    contacts.player_hostile = ctx
        .hostiles
        .iter()
        .find(|h| h.bounds().intersects(&player_bounds))
        .map(|h| h.id);

    contacts
}

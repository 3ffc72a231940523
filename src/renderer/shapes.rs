//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::sim::rect::Rect;
use crate::sim::state::{Entity, EntityKind, Facing};

/// Two triangles for a (possibly rotated) rectangle
pub fn rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let [a, b, c, d] = rect.corners();
    vec![
        Vertex::at(a, color),
        Vertex::at(b, color),
        Vertex::at(c, color),
        Vertex::at(c, color),
        Vertex::at(d, color),
        Vertex::at(a, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::at(center, color));
        vertices.push(Vertex::at(center + radius * Vec2::from_angle(theta1), color));
        vertices.push(Vertex::at(center + radius * Vec2::from_angle(theta2), color));
    }

    vertices
}

/// Stand-in geometry for an entity sprite
///
/// Player and hostiles are boxes, the collectible is a disc. The player gets
/// a thin strip on the side it faces, which is how the mirrored sprite reads.
pub fn entity(entity: &Entity) -> Vec<Vertex> {
    let bounds = entity.bounds();
    match entity.kind {
        EntityKind::Collectible => {
            let radius = bounds.half_extents().min_element();
            circle(bounds.center, radius, colors::COLLECTIBLE, 16)
        }
        EntityKind::Hostile => rect(&bounds, colors::HOSTILE),
        EntityKind::Player => {
            let mut vertices = rect(&bounds, colors::PLAYER);
            let half = bounds.half_extents();
            let side = match entity.facing {
                Facing::Left => -1.0,
                Facing::Right => 1.0,
            };
            let strip = Rect::new(
                bounds.center + Vec2::new(side * half.x * 0.75, 0.0),
                Vec2::new(half.x * 0.5, half.y * 2.0),
            );
            vertices.extend(rect(&strip, colors::FACING_MARK));
            vertices
        }
    }
}

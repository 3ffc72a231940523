//! Vertex types for 2D draw lists

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    #[inline]
    pub fn at(p: Vec2, color: [f32; 4]) -> Self {
        Self::new(p.x, p.y, color)
    }

    /// Size of one vertex in a packed buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Tints for sprite stand-ins
pub mod colors {
    pub const PLAYER: [f32; 4] = [0.35, 0.75, 1.0, 1.0];
    pub const HOSTILE: [f32; 4] = [0.9, 0.25, 0.25, 1.0];
    pub const COLLECTIBLE: [f32; 4] = [1.0, 0.85, 0.3, 1.0];
    /// Darker marker on the side the player faces
    pub const FACING_MARK: [f32; 4] = [0.05, 0.1, 0.2, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_casts_to_bytes() {
        let verts = [Vertex::new(1.0, 2.0, [0.0, 0.5, 1.0, 1.0]); 3];
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), 3 * Vertex::STRIDE);
        assert_eq!(Vertex::STRIDE, 24);
    }
}

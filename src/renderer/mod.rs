//! CPU-side rendering module
//!
//! Turns a scene into a flat triangle list in viewport pixels plus a clear
//! colour. Any backend that can draw coloured triangles can present it.

pub mod camera;
pub mod shapes;
pub mod vertex;

pub use camera::FollowCamera;
pub use vertex::Vertex;

use crate::rgb_to_rgba;
use crate::sim::rect::Rect;
use crate::sim::scene::Scene;

/// One frame's draw list
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
}

impl Frame {
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

/// Build the draw list for everything the camera can see.
///
/// Order is back to front: walls, goal, collectible, hostiles, player.
pub fn build_frame(scene: &Scene, camera: &FollowCamera) -> Frame {
    let ctx = &scene.ctx;
    let view = camera.view_rect();
    let visible = |r: &Rect| {
        // Rotated walls can reach past their unrotated box by up to half the diagonal
        r.inflate(r.size.length() * 0.5).intersects(&view)
    };

    let mut vertices = Vec::new();

    let wall_color = rgb_to_rgba(ctx.palette.obstacle, 1.0);
    for wall in ctx.field.obstacles() {
        if visible(&wall.rect) {
            vertices.extend(shapes::rect(&wall.rect, wall_color));
        }
    }

    if let Some(goal) = ctx.goal.filter(|g| visible(g)) {
        vertices.extend(shapes::rect(&goal, rgb_to_rgba(ctx.palette.goal, 1.0)));
    }

    let bodies = ctx
        .collectible
        .iter()
        .chain(ctx.hostiles.iter())
        .chain(std::iter::once(&ctx.player));
    for body in bodies {
        if visible(&body.bounds()) {
            vertices.extend(shapes::entity(body));
        }
    }

    for v in &mut vertices {
        let screen = camera.world_to_screen(v.position.into());
        v.position = screen.into();
    }

    Frame {
        clear_color: rgb_to_rgba(ctx.palette.background, 1.0),
        vertices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SceneConfig, Variant};
    use crate::sim::SpatialField;

    #[test]
    fn test_frame_uses_palette_background() {
        let scene = Scene::new(SceneConfig::preset(Variant::Maze), 5);
        let camera = FollowCamera::new(scene.config().viewport, scene.ctx.bounds());
        let frame = build_frame(&scene, &camera);
        assert_eq!(frame.clear_color, rgb_to_rgba(0x1c1c1c, 1.0));
        assert_eq!(frame.vertices.len() % 3, 0);
        assert!(frame.triangle_count() >= 2);
    }

    #[test]
    fn test_offscreen_walls_are_culled() {
        let mut scene = Scene::new(SceneConfig::preset(Variant::Maze), 6);
        let bounds = scene.ctx.bounds();
        let mut field = SpatialField::new(bounds);
        field.push(crate::sim::Obstacle::fixed(900, Rect::from_xywh(100.0, 100.0, 50.0, 50.0)));
        scene.ctx.field = field;

        let mut camera = FollowCamera::new(scene.config().viewport, bounds);
        camera.look_at(scene.ctx.player.pos);
        // Only the player is in view at the world centre
        assert_eq!(build_frame(&scene, &camera).vertices.len(), 12);

        camera.look_at(glam::Vec2::ZERO);
        assert_eq!(build_frame(&scene, &camera).vertices.len(), 6);
    }
}

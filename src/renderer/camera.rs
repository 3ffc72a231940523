//! Follow camera
//!
//! Centres the viewport on a target with a fixed per-tick lerp and keeps the
//! view inside the world. When the world is smaller than the viewport on an
//! axis the camera sits on the world centre for that axis.

use glam::Vec2;

use crate::consts::CAMERA_LERP;
use crate::sim::rect::{Rect, WorldBounds};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowCamera {
    /// Camera center position in world space
    pub center: Vec2,
    /// Visible size in world units
    pub viewport: Vec2,
    pub bounds: WorldBounds,
    /// Fraction of the remaining distance covered each tick (1.0 = snap)
    pub lerp: f32,
}

impl FollowCamera {
    pub fn new(viewport: Vec2, bounds: WorldBounds) -> Self {
        Self {
            center: bounds.center(),
            viewport,
            bounds,
            lerp: CAMERA_LERP,
        }
    }

    /// Jump straight to the target
    pub fn look_at(&mut self, target: Vec2) {
        self.center = target;
        self.clamp_to_bounds();
    }

    /// Move toward the target by the lerp factor. Call once per tick.
    pub fn follow(&mut self, target: Vec2) {
        self.center += (target - self.center) * self.lerp.clamp(0.0, 1.0);
        self.clamp_to_bounds();
    }

    /// World-space rectangle currently in view
    pub fn view_rect(&self) -> Rect {
        Rect::new(self.center, self.viewport)
    }

    /// Map a world position to viewport pixels (origin top-left)
    pub fn world_to_screen(&self, p: Vec2) -> Vec2 {
        p - (self.center - self.viewport * 0.5)
    }

    fn clamp_to_bounds(&mut self) {
        self.center = self.bounds.clamp_center(self.center, self.viewport * 0.5);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> FollowCamera {
        FollowCamera::new(Vec2::new(1000.0, 800.0), WorldBounds::new(4000.0, 4000.0))
    }

    #[test]
    fn test_follow_lerps_toward_target() {
        let mut cam = camera();
        cam.follow(Vec2::new(3000.0, 2000.0));
        assert!((cam.center.x - 2100.0).abs() < 1e-3);
        assert!((cam.center.y - 2000.0).abs() < 1e-3);

        for _ in 0..200 {
            cam.follow(Vec2::new(3000.0, 2000.0));
        }
        assert!((cam.center.x - 3000.0).abs() < 0.1);
    }

    #[test]
    fn test_view_stays_inside_world() {
        let mut cam = camera();
        cam.look_at(Vec2::new(10.0, 3990.0));
        assert_eq!(cam.center, Vec2::new(500.0, 3600.0));
        let view = cam.view_rect();
        assert!(view.min().x >= 0.0 && view.max().y <= 4000.0);
        assert_eq!(cam.world_to_screen(Vec2::new(0.0, 4000.0)), Vec2::new(0.0, 800.0));
    }

    #[test]
    fn test_small_world_centres_camera() {
        let mut cam = FollowCamera::new(Vec2::new(1000.0, 800.0), WorldBounds::new(600.0, 600.0));
        cam.look_at(Vec2::new(0.0, 0.0));
        assert_eq!(cam.center, Vec2::new(300.0, 300.0));
    }
}

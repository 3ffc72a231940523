//! Axis-aligned rectangle geometry for walls, bodies and zones
//!
//! A rectangle is stored by centre and full size. Rotation is carried for
//! drawing drifting walls but every overlap query uses the unrotated extents:
//! - intersect iff `|dx| < hw1 + hw2` and `|dy| < hh1 + hh2`
//! - touching edges do not count as overlap

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::rotate;

/// Fixed extent of a scene, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// The whole world as a rectangle
    pub fn as_rect(&self) -> Rect {
        Rect::new(self.center(), self.size())
    }

    /// True if `rect` lies fully inside the world (edges may touch, within
    /// float rounding)
    pub fn contains_rect(&self, rect: &Rect) -> bool {
        const EPS: f32 = 1e-3;
        let min = rect.min();
        let max = rect.max();
        min.x >= -EPS && min.y >= -EPS && max.x <= self.width + EPS && max.y <= self.height + EPS
    }

    /// Clamp a centre so a body with `half` extents stays inside the world.
    /// Bodies larger than the world are centred on that axis.
    pub fn clamp_center(&self, center: Vec2, half: Vec2) -> Vec2 {
        let clamp_axis = |value: f32, half: f32, limit: f32| {
            if half * 2.0 >= limit {
                limit / 2.0
            } else {
                value.clamp(half, limit - half)
            }
        };
        Vec2::new(
            clamp_axis(center.x, half.x, self.width),
            clamp_axis(center.y, half.y, self.height),
        )
    }
}

/// A centred rectangle with an optional visual rotation (radians)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
    #[serde(default)]
    pub rotation: f32,
}

impl Rect {
    pub const fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            size,
            rotation: 0.0,
        }
    }

    pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(width, height))
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents()
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents()
    }

    /// Grow the rectangle by `margin` on every side
    pub fn inflate(&self, margin: f32) -> Rect {
        Rect {
            size: self.size + Vec2::splat(margin * 2.0),
            ..*self
        }
    }

    /// Strict axis-aligned overlap test
    pub fn intersects(&self, other: &Rect) -> bool {
        let d = (self.center - other.center).abs();
        let reach = self.half_extents() + other.half_extents();
        d.x < reach.x && d.y < reach.y
    }

    /// Overlap depth on each axis, `None` when the rectangles do not intersect
    pub fn penetration(&self, other: &Rect) -> Option<Vec2> {
        if !self.intersects(other) {
            return None;
        }
        let d = (self.center - other.center).abs();
        Some(self.half_extents() + other.half_extents() - d)
    }

    /// Corners in drawing order (top-left, top-right, bottom-right, bottom-left),
    /// rotated about the centre
    pub fn corners(&self) -> [Vec2; 4] {
        let h = self.half_extents();
        [
            Vec2::new(-h.x, -h.y),
            Vec2::new(h.x, -h.y),
            Vec2::new(h.x, h.y),
            Vec2::new(-h.x, h.y),
        ]
        .map(|corner| self.center + rotate(corner, self.rotation))
    }
}

/// A candidate shape for field queries.
///
/// Circles are tested by their bounding square, so both variants reduce to
/// independent half-extents per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Probe {
    Rect(Rect),
    Circle { center: Vec2, radius: f32 },
}

impl Probe {
    pub fn bounding_rect(&self) -> Rect {
        match *self {
            Probe::Rect(rect) => rect,
            Probe::Circle { center, radius } => Rect::new(center, Vec2::splat(radius * 2.0)),
        }
    }
}

impl From<Rect> for Probe {
    fn from(rect: Rect) -> Self {
        Probe::Rect(rect)
    }
}

//! Spatial field: world bounds plus the obstacle set
//!
//! Answers overlap queries by a linear scan. Fields hold a few hundred walls at
//! most and are queried once per placement attempt, so no broad phase is kept.

use serde::{Deserialize, Serialize};

use super::rect::{Probe, Rect, WorldBounds};
use super::state::Obstacle;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpatialField {
    bounds: WorldBounds,
    obstacles: Vec<Obstacle>,
}

impl SpatialField {
    pub fn new(bounds: WorldBounds) -> Self {
        Self {
            bounds,
            obstacles: Vec::new(),
        }
    }

    pub fn with_obstacles(bounds: WorldBounds, obstacles: Vec<Obstacle>) -> Self {
        Self { bounds, obstacles }
    }

    #[inline]
    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn obstacles_mut(&mut self) -> &mut [Obstacle] {
        &mut self.obstacles
    }

    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// True if the candidate, grown by `margin` on every side, overlaps any obstacle.
    /// Every obstacle is tested; rotation is ignored.
    pub fn overlaps(&self, candidate: impl Into<Probe>, margin: f32) -> bool {
        let probe = candidate.into().bounding_rect().inflate(margin);
        self.obstacles.iter().any(|o| o.rect.intersects(&probe))
    }

    /// First obstacle overlapping `rect`, if any
    pub fn first_overlap(&self, rect: &Rect) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.rect.intersects(rect))
    }
}

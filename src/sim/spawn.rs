//! Safe spawn search
//!
//! Rejection sampling over the world interior: draw a position, test the
//! footprint against every obstacle, keep the first clear one. The attempt
//! budget is hard; when it runs out the world centre is returned instead.
//! That fallback is best-effort and may well overlap a wall.

use glam::Vec2;
use rand::Rng;

use super::field::SpatialField;
use super::rect::{Rect, WorldBounds};
use crate::consts::{SPAWN_MARGIN, SPAWN_MAX_ATTEMPTS};

/// Result of a spawn search
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnOutcome {
    /// Clear position found on attempt `attempts` (1-based)
    Found { pos: Vec2, attempts: u32 },
    /// Budget exhausted, world centre returned
    Fallback { pos: Vec2 },
}

impl SpawnOutcome {
    pub fn position(&self) -> Vec2 {
        match *self {
            SpawnOutcome::Found { pos, .. } | SpawnOutcome::Fallback { pos } => pos,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, SpawnOutcome::Fallback { .. })
    }
}

/// Finds obstacle-free positions for entity footprints
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafeSpawnFinder {
    /// Border kept clear of samples on every side
    pub margin: f32,
    pub max_attempts: u32,
}

impl Default for SafeSpawnFinder {
    fn default() -> Self {
        Self::new(SPAWN_MARGIN, SPAWN_MAX_ATTEMPTS)
    }
}

impl SafeSpawnFinder {
    pub const fn new(margin: f32, max_attempts: u32) -> Self {
        Self {
            margin,
            max_attempts,
        }
    }

    /// Find a position where `footprint` (full size, centred) overlaps no obstacle
    pub fn find(&self, field: &SpatialField, footprint: Vec2, rng: &mut impl Rng) -> SpawnOutcome {
        self.search(field, footprint, rng, |_| true)
    }

    /// Like [`find`](Self::find), but also rejects candidates overlapping any
    /// rectangle in `avoid`. Used to move a body somewhere it is not already.
    pub fn find_avoiding(
        &self,
        field: &SpatialField,
        footprint: Vec2,
        avoid: &[Rect],
        rng: &mut impl Rng,
    ) -> SpawnOutcome {
        self.search(field, footprint, rng, |candidate| {
            !avoid.iter().any(|r| candidate.intersects(r))
        })
    }

    /// [`find`](Self::find) for scene building: logs the fallback and returns the position
    pub fn place(&self, field: &SpatialField, footprint: Vec2, rng: &mut impl Rng, what: &str) -> Vec2 {
        let outcome = self.find(field, footprint, rng);
        if outcome.is_fallback() {
            log::warn!(
                "No clear spot for {} after {} attempts, using world centre",
                what,
                self.max_attempts
            );
        }
        outcome.position()
    }

    fn search(
        &self,
        field: &SpatialField,
        footprint: Vec2,
        rng: &mut impl Rng,
        accept: impl Fn(&Rect) -> bool,
    ) -> SpawnOutcome {
        let bounds = field.bounds();
        for attempt in 1..=self.max_attempts {
            let pos = self.sample(bounds, rng);
            let candidate = Rect::new(pos, footprint);
            if !field.overlaps(candidate, 0.0) && accept(&candidate) {
                return SpawnOutcome::Found {
                    pos,
                    attempts: attempt,
                };
            }
        }
        SpawnOutcome::Fallback {
            pos: bounds.center(),
        }
    }

    /// Uniform position inside the world minus the border margin
    fn sample(&self, bounds: WorldBounds, rng: &mut impl Rng) -> Vec2 {
        let mut axis = |limit: f32| {
            let lo = self.margin;
            let hi = limit - self.margin;
            if lo < hi {
                rng.random_range(lo..=hi)
            } else {
                limit / 2.0
            }
        };
        let x = axis(bounds.width);
        let y = axis(bounds.height);
        Vec2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Obstacle;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_empty_field_first_attempt() {
        let field = SpatialField::new(WorldBounds::new(4000.0, 4000.0));
        let mut rng = Pcg32::seed_from_u64(1);
        let outcome = SafeSpawnFinder::default().find(&field, Vec2::splat(32.0), &mut rng);

        match outcome {
            SpawnOutcome::Found { pos, attempts } => {
                assert_eq!(attempts, 1);
                assert!((50.0..=3950.0).contains(&pos.x));
                assert!((50.0..=3950.0).contains(&pos.y));
            }
            SpawnOutcome::Fallback { .. } => panic!("empty field must not fall back"),
        }
    }

    #[test]
    fn test_full_field_falls_back_to_centre() {
        let bounds = WorldBounds::new(1000.0, 800.0);
        let wall = Obstacle::fixed(1, bounds.as_rect());
        let field = SpatialField::with_obstacles(bounds, vec![wall]);
        let mut rng = Pcg32::seed_from_u64(2);

        let outcome = SafeSpawnFinder::new(50.0, 25).find(&field, Vec2::splat(32.0), &mut rng);
        assert!(outcome.is_fallback());
        assert_eq!(outcome.position(), Vec2::new(500.0, 400.0));
    }

    #[test]
    fn test_found_position_is_clear() {
        let bounds = WorldBounds::new(1000.0, 1000.0);
        // Left half walled off
        let wall = Obstacle::fixed(1, Rect::from_xywh(250.0, 500.0, 500.0, 1000.0));
        let field = SpatialField::with_obstacles(bounds, vec![wall]);
        let mut rng = Pcg32::seed_from_u64(3);
        let finder = SafeSpawnFinder::default();

        for _ in 0..50 {
            let outcome = finder.find(&field, Vec2::splat(32.0), &mut rng);
            assert!(!outcome.is_fallback());
            let pos = outcome.position();
            assert!(pos.x - 16.0 >= 500.0);
            assert!(!field.overlaps(Rect::new(pos, Vec2::splat(32.0)), 0.0));
        }
    }

    #[test]
    fn test_find_avoiding_leaves_old_footprint() {
        let field = SpatialField::new(WorldBounds::new(400.0, 400.0));
        let mut rng = Pcg32::seed_from_u64(4);
        let old = Rect::from_xywh(200.0, 200.0, 32.0, 32.0);

        for _ in 0..50 {
            let outcome =
                SafeSpawnFinder::default().find_avoiding(&field, old.size, &[old], &mut rng);
            assert!(!outcome.is_fallback());
            assert!(!Rect::new(outcome.position(), old.size).intersects(&old));
        }
    }

    #[test]
    fn test_margin_wider_than_world_uses_centre_axis() {
        let field = SpatialField::new(WorldBounds::new(80.0, 1000.0));
        let mut rng = Pcg32::seed_from_u64(5);
        let pos = SafeSpawnFinder::default()
            .find(&field, Vec2::splat(10.0), &mut rng)
            .position();
        assert_eq!(pos.x, 40.0);
    }
}

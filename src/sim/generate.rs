//! Obstacle layout generation
//!
//! Two policies:
//! - Static maze walls: uniform position and size, overlaps between walls allowed
//! - Drifting walls: resampled until clear of a square zone around the world
//!   centre, then given a drift velocity and a spin
//!
//! Every wall is sized first and its centre drawn so the whole rectangle lies
//! inside the world.

use glam::Vec2;
use rand::Rng;

use super::rect::{Rect, WorldBounds};
use super::state::{EntityIds, Obstacle};
use crate::config::{ObstaclePolicy, Span};

/// Square region that drifting walls are kept out of at generation time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExclusionZone {
    pub center: Vec2,
    pub half_extent: f32,
}

impl ExclusionZone {
    /// Zone centred on the world midpoint (the player's spawn)
    pub fn centered(bounds: WorldBounds, half_extent: f32) -> Self {
        Self {
            center: bounds.center(),
            half_extent,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.center, Vec2::splat(self.half_extent * 2.0))
    }

    /// True if a candidate wall would intrude into the zone
    pub fn rejects(&self, candidate: &Rect) -> bool {
        candidate.intersects(&self.rect())
    }
}

/// How a drifting wall ended up where it is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Clear of the exclusion zone, found on attempt `attempts`
    Clear { attempts: u32 },
    /// Budget exhausted; the last sample was kept without the exclusion check
    Unchecked,
}

/// Build the full wall set for a policy
pub fn generate_obstacles(
    policy: &ObstaclePolicy,
    bounds: WorldBounds,
    rng: &mut impl Rng,
    ids: &mut EntityIds,
) -> Vec<Obstacle> {
    match *policy {
        ObstaclePolicy::Static {
            count,
            width,
            height,
        } => (0..count)
            .map(|_| {
                let size = Vec2::new(width.sample(rng), height.sample(rng));
                let center = sample_center(bounds, size * 0.5, 0.0, rng);
                Obstacle::fixed(ids.next_id(), Rect::new(center, size))
            })
            .collect(),

        ObstaclePolicy::Drifting {
            count,
            width,
            height,
            edge_margin,
            exclusion_half_extent,
            max_speed,
            max_rotation_speed,
            max_attempts,
        } => {
            let zone = ExclusionZone::centered(bounds, exclusion_half_extent);
            let speed = Span::symmetric(max_speed);
            let spin = Span::symmetric(max_rotation_speed);
            let mut unchecked = 0u32;

            let walls: Vec<Obstacle> = (0..count)
                .map(|_| {
                    let size = Vec2::new(width.sample(rng), height.sample(rng));
                    let (rect, placement) =
                        place_outside(&zone, bounds, size, edge_margin, max_attempts, rng);
                    if placement == Placement::Unchecked {
                        unchecked += 1;
                    }
                    let drift = Vec2::new(speed.sample(rng), speed.sample(rng));
                    Obstacle::drifting(ids.next_id(), rect, drift, spin.sample(rng))
                })
                .collect();

            if unchecked > 0 {
                log::warn!(
                    "{} of {} drifting walls placed without the exclusion check after {} attempts each",
                    unchecked,
                    count,
                    max_attempts
                );
            }
            walls
        }
    }
}

/// Resample a wall of `size` until it clears `zone`, up to `max_attempts` draws
pub fn place_outside(
    zone: &ExclusionZone,
    bounds: WorldBounds,
    size: Vec2,
    edge_margin: f32,
    max_attempts: u32,
    rng: &mut impl Rng,
) -> (Rect, Placement) {
    let half = size * 0.5;
    let mut rect = Rect::new(sample_center(bounds, half, edge_margin, rng), size);
    for attempt in 1..=max_attempts {
        if attempt > 1 {
            rect.center = sample_center(bounds, half, edge_margin, rng);
        }
        if !zone.rejects(&rect) {
            return (rect, Placement::Clear { attempts: attempt });
        }
    }
    (rect, Placement::Unchecked)
}

/// Uniform centre keeping a body of `half` extents inside the world and at
/// least `margin` from every edge
fn sample_center(bounds: WorldBounds, half: Vec2, margin: f32, rng: &mut impl Rng) -> Vec2 {
    let mut axis = |half: f32, limit: f32| {
        let lo = half.max(margin);
        let hi = limit - lo;
        if lo < hi {
            rng.random_range(lo..=hi)
        } else {
            limit / 2.0
        }
    };
    let x = axis(half.x, bounds.width);
    let y = axis(half.y, bounds.height);
    Vec2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SceneConfig, Variant};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn world() -> WorldBounds {
        WorldBounds::new(4000.0, 4000.0)
    }

    #[test]
    fn test_exclusion_scenario() {
        let zone = ExclusionZone::centered(world(), 200.0);
        assert_eq!(zone.center, Vec2::new(2000.0, 2000.0));

        let size = Vec2::new(120.0, 150.0);
        assert!(zone.rejects(&Rect::new(Vec2::new(2000.0, 2000.0), size)));
        assert!(!zone.rejects(&Rect::new(Vec2::new(2500.0, 2500.0), size)));
        // A bare point just inside the zone edge is still rejected
        assert!(zone.rejects(&Rect::new(Vec2::new(2199.0, 1801.0), Vec2::ZERO)));
    }

    #[test]
    fn test_static_walls_inside_world() {
        let config = SceneConfig::preset(Variant::Maze);
        let mut rng = Pcg32::seed_from_u64(11);
        let walls = generate_obstacles(&config.obstacles, world(), &mut rng, &mut EntityIds::default());

        assert_eq!(walls.len(), 200);
        for wall in &walls {
            assert!(wall.is_static);
            assert!(world().contains_rect(&wall.rect));
            assert!((100.0..=200.0).contains(&wall.rect.size.x));
            assert!((100.0..=600.0).contains(&wall.rect.size.y));
            assert_eq!(wall.rotation_speed, 0.0);
        }
    }

    #[test]
    fn test_drifting_walls_clear_of_zone() {
        let config = SceneConfig::preset(Variant::DriftField);
        let mut rng = Pcg32::seed_from_u64(12);
        let walls = generate_obstacles(&config.obstacles, world(), &mut rng, &mut EntityIds::default());
        let zone = ExclusionZone::centered(world(), 200.0);

        assert_eq!(walls.len(), 100);
        for wall in &walls {
            assert!(!wall.is_static);
            assert!(!zone.rejects(&wall.rect));
            assert!(world().contains_rect(&wall.rect));
            assert!(wall.drift_vel.x.abs() <= 50.0 && wall.drift_vel.y.abs() <= 50.0);
            assert!(wall.rotation_speed.abs() <= 0.01);
            let c = wall.rect.center;
            assert!((50.0..=3950.0).contains(&c.x) && (50.0..=3950.0).contains(&c.y));
        }
    }

    #[test]
    fn test_zone_covering_world_degrades_without_hanging() {
        let bounds = WorldBounds::new(500.0, 500.0);
        let policy = ObstaclePolicy::Drifting {
            count: 5,
            width: Span::fixed(20.0),
            height: Span::fixed(20.0),
            edge_margin: 0.0,
            exclusion_half_extent: 1000.0,
            max_speed: 10.0,
            max_rotation_speed: 0.0,
            max_attempts: 30,
        };
        let mut rng = Pcg32::seed_from_u64(13);
        let walls = generate_obstacles(&policy, bounds, &mut rng, &mut EntityIds::default());
        assert_eq!(walls.len(), 5);
        assert!(walls.iter().all(|w| bounds.contains_rect(&w.rect)));
    }

    #[test]
    fn test_place_outside_reports_attempts() {
        let zone = ExclusionZone::centered(world(), 200.0);
        let mut rng = Pcg32::seed_from_u64(14);
        let (rect, placement) = place_outside(&zone, world(), Vec2::splat(50.0), 50.0, 1000, &mut rng);
        assert!(matches!(placement, Placement::Clear { attempts } if attempts >= 1));
        assert!(!zone.rejects(&rect));

        let full = ExclusionZone::centered(world(), 5000.0);
        let (_, placement) = place_outside(&full, world(), Vec2::splat(50.0), 50.0, 10, &mut rng);
        assert_eq!(placement, Placement::Unchecked);
    }

    #[test]
    fn test_ids_are_sequential() {
        let config = SceneConfig::preset(Variant::Maze);
        let mut rng = Pcg32::seed_from_u64(15);
        let mut ids = EntityIds::default();
        let walls = generate_obstacles(&config.obstacles, world(), &mut rng, &mut ids);
        let got: Vec<u32> = walls.iter().map(|w| w.id).collect();
        let expected: Vec<u32> = (1..=200).collect();
        assert_eq!(got, expected);
        assert_eq!(ids.next_id(), 201);
    }
}

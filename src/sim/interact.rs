//! Interaction resolution: what touching things means
//!
//! Player-hostile contact advances the level, player-collectible overlap
//! recolours the scene and moves the collectible, player-goal overlap raises a
//! signal. Nothing is destroyed here.

use rand::Rng;

use super::collision::Contacts;
use super::spawn::SafeSpawnFinder;
use super::state::{LevelState, Palette, SceneContext, SceneEvent};

/// Advance the level on the first reported player-hostile contact
pub fn resolve_hostile_contact(level: &mut LevelState, contacts: &Contacts) -> Option<SceneEvent> {
    let hostile = contacts.player_hostile?;
    let level = level.advance();
    log::info!("Player caught by hostile {}, advancing to level {}", hostile, level);
    Some(SceneEvent::LevelAdvanced { level })
}

/// Handle player-collectible overlap.
///
/// Draws two independent colours (walls, background) and moves the
/// collectible to a clear spot away from both its old footprint and the
/// player. Moving it is what stops the overlap from firing again next tick.
pub fn resolve_collectible(
    ctx: &mut SceneContext,
    finder: &SafeSpawnFinder,
    rng: &mut impl Rng,
) -> Option<SceneEvent> {
    let old = ctx.collectible.as_ref()?.bounds();
    let player = ctx.player.bounds();
    if !old.intersects(&player) {
        return None;
    }

    let obstacle_color = Palette::random_color(rng);
    let background_color = Palette::random_color(rng);
    ctx.palette.obstacle = obstacle_color;
    ctx.palette.background = background_color;

    let outcome = finder.find_avoiding(&ctx.field, old.size, &[old, player], rng);
    if outcome.is_fallback() {
        log::warn!("Collectible relocation fell back to the world centre");
    }
    let relocated_to = outcome.position();
    if let Some(collectible) = ctx.collectible.as_mut() {
        collectible.pos = relocated_to;
    }
    log::debug!(
        "Collectible picked: walls #{:06x}, background #{:06x}, moved to ({:.0}, {:.0})",
        obstacle_color,
        background_color,
        relocated_to.x,
        relocated_to.y
    );

    Some(SceneEvent::CollectiblePicked {
        obstacle_color,
        background_color,
        relocated_to,
    })
}

/// Signal every tick the player overlaps the goal zone
pub fn resolve_goal(ctx: &SceneContext) -> Option<SceneEvent> {
    let goal = ctx.goal?;
    if goal.intersects(&ctx.player.bounds()) {
        log::debug!("Goal reached at tick {}", ctx.time_ticks);
        Some(SceneEvent::GoalReached)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SceneConfig, Variant};
    use crate::sim::field::SpatialField;
    use crate::sim::rect::WorldBounds;
    use crate::sim::state::{Entity, EntityKind, Obstacle};
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn monster_scene(seed: u64) -> (SceneContext, Pcg32) {
        let config = SceneConfig::preset(Variant::MonsterMaze);
        let mut rng = Pcg32::seed_from_u64(seed);
        let ctx = SceneContext::build(&config, LevelState::default(), &mut rng);
        (ctx, rng)
    }

    #[test]
    fn test_hostile_contact_advances_level() {
        let mut level = LevelState::default();
        assert_eq!(resolve_hostile_contact(&mut level, &Contacts::default()), None);
        assert_eq!(level.level, 1);

        let contacts = Contacts {
            player_hostile: Some(5),
            player_blocked: 0,
        };
        assert_eq!(
            resolve_hostile_contact(&mut level, &contacts),
            Some(SceneEvent::LevelAdvanced { level: 2 })
        );
        assert_eq!(
            resolve_hostile_contact(&mut level, &contacts),
            Some(SceneEvent::LevelAdvanced { level: 3 })
        );
        assert!((level.hostile_scale(0.5, 0.5) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_collectible_not_touched_is_ignored() {
        let (mut ctx, mut rng) = monster_scene(31);
        let far = ctx.player.pos + Vec2::new(500.0, 0.0);
        ctx.collectible.as_mut().unwrap().pos = far;
        let palette = ctx.palette;

        assert_eq!(resolve_collectible(&mut ctx, &SafeSpawnFinder::default(), &mut rng), None);
        assert_eq!(ctx.palette, palette);
    }

    #[test]
    fn test_collectible_moves_every_pickup() {
        let (mut ctx, mut rng) = monster_scene(32);
        let finder = SafeSpawnFinder::default();
        let mut previous = Vec::new();

        for _ in 0..10 {
            // Drop the collectible onto the player
            let player_pos = ctx.player.pos;
            ctx.collectible.as_mut().unwrap().pos = player_pos;
            let old = ctx.collectible.as_ref().unwrap().bounds();

            let event = resolve_collectible(&mut ctx, &finder, &mut rng).expect("overlap fires");
            let SceneEvent::CollectiblePicked {
                obstacle_color,
                background_color,
                relocated_to,
            } = event
            else {
                panic!("unexpected event {event:?}");
            };

            let moved = ctx.collectible.as_ref().unwrap();
            assert_eq!(moved.pos, relocated_to);
            assert_ne!(moved.pos, player_pos);
            assert!(!moved.bounds().intersects(&old));
            assert!(!ctx.field.overlaps(moved.bounds(), 0.0));
            assert_eq!(ctx.palette.obstacle, obstacle_color);
            assert_eq!(ctx.palette.background, background_color);
            previous.push(relocated_to);
        }
        previous.dedup();
        assert_eq!(previous.len(), 10);
    }

    #[test]
    fn test_collectible_falls_back_to_centre_on_walled_field() {
        let bounds = WorldBounds::new(1000.0, 1000.0);
        let wall = Obstacle::fixed(1, bounds.as_rect());
        let centre = bounds.center();
        let mut ctx = SceneContext {
            field: SpatialField::with_obstacles(bounds, vec![wall]),
            player: Entity::new(2, EntityKind::Player, centre, Vec2::splat(32.0), 1.0),
            hostiles: Vec::new(),
            collectible: Some(Entity::new(3, EntityKind::Collectible, centre + Vec2::new(10.0, 0.0), Vec2::splat(32.0), 1.0)),
            goal: None,
            palette: Palette {
                obstacle: 0,
                background: 0,
                goal: 0,
            },
            time_ticks: 0,
        };
        let mut rng = Pcg32::seed_from_u64(35);
        let finder = SafeSpawnFinder::new(50.0, 20);

        let event = resolve_collectible(&mut ctx, &finder, &mut rng);
        let Some(SceneEvent::CollectiblePicked { relocated_to, .. }) = event else {
            panic!("pickup must still fire, got {event:?}");
        };
        assert_eq!(relocated_to, centre);
        assert_eq!(ctx.collectible.as_ref().unwrap().pos, centre);

        // The fallback lands on the player, so the pickup fires again next call
        assert!(resolve_collectible(&mut ctx, &finder, &mut rng).is_some());
    }

    #[test]
    fn test_goal_overlap_signals() {
        let config = SceneConfig::preset(Variant::DriftField);
        let mut rng = Pcg32::seed_from_u64(33);
        let mut ctx = SceneContext::build(&config, LevelState::default(), &mut rng);
        assert_eq!(resolve_goal(&ctx), None);

        ctx.player.pos = Vec2::new(3800.0, 3800.0);
        assert_eq!(resolve_goal(&ctx), Some(SceneEvent::GoalReached));

        // Edge contact only: no signal
        let goal = ctx.goal.unwrap();
        let half = ctx.player.size() * 0.5;
        ctx.player.pos = Vec2::new(goal.max().x + half.x, goal.center.y);
        assert_eq!(resolve_goal(&ctx), None);
    }

    #[test]
    fn test_no_goal_no_signal() {
        let (mut ctx, _) = monster_scene(34);
        ctx.goal = None;
        ctx.player.pos = Vec2::new(3800.0, 3800.0);
        assert_eq!(resolve_goal(&ctx), None);
    }
}

//! Scene lifecycle: owns the context, the level counter and the RNG
//!
//! Restart always regenerates the whole context from the config. The level
//! counter is the only state carried across a restart.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::spawn::SafeSpawnFinder;
use super::state::{LevelState, RestartCause, SceneContext, SceneEvent, ScenePhase};
use crate::config::SceneConfig;

/// A running scene instance
#[derive(Debug, Clone)]
pub struct Scene {
    config: SceneConfig,
    /// Seed the RNG was created from
    pub seed: u64,
    pub level: LevelState,
    pub phase: ScenePhase,
    pub ctx: SceneContext,
    pub(crate) rng: Pcg32,
}

impl Scene {
    /// Start a new session at level 1
    pub fn new(config: SceneConfig, seed: u64) -> Self {
        Self::with_level(config, seed, LevelState::default())
    }

    /// Start at a given level
    pub fn with_level(config: SceneConfig, seed: u64, level: LevelState) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ctx = SceneContext::build(&config, level, &mut rng);
        Self {
            config,
            seed,
            level,
            phase: ScenePhase::Playing,
            ctx,
            rng,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Current level number, for display
    #[inline]
    pub fn level(&self) -> u32 {
        self.level.level
    }

    pub fn spawn_finder(&self) -> SafeSpawnFinder {
        SafeSpawnFinder::new(self.config.spawn.margin, self.config.spawn.max_attempts)
    }

    /// Queue a restart that keeps the level. Ignored while already restarting.
    pub fn request_reset(&mut self) -> bool {
        if self.phase != ScenePhase::Playing {
            return false;
        }
        log::info!("Manual reset at level {}", self.level.level);
        self.phase = ScenePhase::Restarting(RestartCause::ManualReset);
        true
    }

    /// Regenerate obstacles and entities for the current level and resume play
    pub fn rebuild(&mut self) -> SceneEvent {
        if let ScenePhase::Restarting(cause) = self.phase {
            log::info!("Restarting scene ({:?}) at level {}", cause, self.level.level);
        }
        self.ctx = SceneContext::build(&self.config, self.level, &mut self.rng);
        self.phase = ScenePhase::Playing;
        SceneEvent::SceneReady {
            level: self.level.level,
        }
    }

    /// Drop back to level 1 and rebuild
    pub fn new_session(&mut self) -> SceneEvent {
        self.level = LevelState::default();
        self.rebuild()
    }
}

//! Maze Drift headless runner
//!
//! Builds a scene from a preset or a JSON config, drives it with a scripted
//! wandering input for a fixed number of ticks and logs what happens.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use maze_drift::consts::SIM_DT;
use maze_drift::renderer::{FollowCamera, build_frame};
use maze_drift::sim::{DirectionalInput, tick};
use maze_drift::{Scene, SceneConfig, SceneEvent, TickInput, Variant};

#[derive(Parser, Debug)]
#[command(name = "maze-drift")]
#[command(about = "Run a top-down arcade scene headless and log its events")]
struct Args {
    /// Scene variant: maze, monster-maze or drift-field
    #[arg(long, default_value = "maze", value_parser = parse_variant)]
    variant: Variant,

    /// JSON scene config; overrides --variant
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,

    /// Number of fixed ticks to simulate
    #[arg(long, default_value_t = 600)]
    ticks: u32,

    /// Ticks between direction changes of the scripted input
    #[arg(long, default_value_t = 90)]
    turn_every: u32,

    /// Print the resolved config as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn parse_variant(s: &str) -> Result<Variant, String> {
    Variant::from_str(s).ok_or_else(|| format!("unknown variant '{s}'"))
}

/// Cycle through the eight directions, one leg per `turn_every` ticks
fn scripted_input(t: u32, turn_every: u32) -> TickInput {
    const LEGS: [(bool, bool, bool, bool); 8] = [
        (false, false, false, true),
        (false, true, false, true),
        (false, true, false, false),
        (false, true, true, false),
        (false, false, true, false),
        (true, false, true, false),
        (true, false, false, false),
        (true, false, false, true),
    ];
    let leg = (t / turn_every.max(1)) as usize % LEGS.len();
    let (up, down, left, right) = LEGS[leg];
    TickInput {
        keys: DirectionalInput {
            up,
            down,
            left,
            right,
        },
        reset: false,
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match SceneConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load config {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => SceneConfig::preset(args.variant),
    };
    if let Err(e) = config.validate() {
        log::error!("{}", e);
        return ExitCode::FAILURE;
    }

    if args.dump_config {
        match config.to_json() {
            Ok(json) => {
                println!("{json}");
                return ExitCode::SUCCESS;
            }
            Err(e) => {
                log::error!("Failed to serialize config: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    log::info!(
        "Maze Drift starting: variant {}, seed {}, {} ticks",
        config.variant.as_str(),
        args.seed,
        args.ticks
    );

    let mut scene = Scene::new(config, args.seed);
    let mut camera = FollowCamera::new(scene.config().viewport, scene.ctx.bounds());
    camera.look_at(scene.ctx.player.pos);

    let mut pickups = 0u32;
    let mut goal_ticks = 0u32;
    for t in 0..args.ticks {
        let input = scripted_input(t, args.turn_every);
        for event in tick(&mut scene, &input, SIM_DT) {
            match event {
                SceneEvent::SceneReady { level } => {
                    camera.look_at(scene.ctx.player.pos);
                    log::info!("Scene ready at level {}", level);
                }
                SceneEvent::CollectiblePicked { .. } => pickups += 1,
                SceneEvent::GoalReached => goal_ticks += 1,
                SceneEvent::LevelAdvanced { .. } | SceneEvent::ResetRequested => {}
            }
        }
        camera.follow(scene.ctx.player.pos);
    }

    let frame = build_frame(&scene, &camera);
    log::info!(
        "Done: level {}, player at ({:.0}, {:.0}), {} pickups, {} ticks on goal, {} triangles in view",
        scene.level(),
        scene.ctx.player.pos.x,
        scene.ctx.player.pos.y,
        pickups,
        goal_ticks,
        frame.triangle_count()
    );

    ExitCode::SUCCESS
}

//! Brickfall headless runner
//!
//! Builds an arena (optionally from a JSON config given as the first
//! argument) and plays it with a simple paddle autopilot, logging the
//! result. Rendering and frame pacing are left to a front end.

use brickfall::ArenaConfig;
use brickfall::sim::{Arena, GamePhase, TickInput, tick};

/// Upper bound on simulated frames (two minutes at 60 fps)
const MAX_FRAMES: u64 = 60 * 120;

/// Steer the paddle under the lowest ball
fn autopilot(arena: &Arena) -> TickInput {
    let Some(ball) = arena
        .balls()
        .iter()
        .max_by(|a, b| a.center().y.total_cmp(&b.center().y))
    else {
        return TickInput::default();
    };

    let paddle = arena.paddle().rect();
    let target = ball.center().x;
    let dead_zone = arena.paddle().speed();
    // Never push into a bound: that would wrap the paddle across the arena
    let (min_x, max_x) = arena.paddle().bounds();
    TickInput {
        move_left: target < paddle.center().x - dead_zone && paddle.left() > min_x,
        move_right: target > paddle.center().x + dead_zone && paddle.right() < max_x,
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => ArenaConfig::load(path)?,
        None => ArenaConfig::default(),
    };

    let mut arena = Arena::new(config)?;
    log::info!("Brickfall starting with {} balls", arena.balls().len());

    while arena.phase == GamePhase::Playing && arena.time_ticks < MAX_FRAMES {
        let input = autopilot(&arena);
        tick(&mut arena, &input)?;
    }

    log::info!(
        "Finished after {} ticks: {:?}, score {}, {} blocks left, {} balls left",
        arena.time_ticks,
        arena.phase,
        arena.score(),
        arena.remaining_blocks(),
        arena.remaining_balls()
    );
    println!("{:?} - score {}", arena.phase, arena.score());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

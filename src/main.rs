//! Arena Grow entry point
//!
//! Headless native host: no window, the autopilot supplies input. Runs one
//! round at the configured cadence and prints the final snapshot as JSON.
//!
//! Usage: `arena-grow [settings.json]`

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use arena_grow::sim::{GameEvent, GameState};
use arena_grow::{FrameDriver, FrameOutcome, Settings, autopilot};

/// Wall-clock length of a demo round
const DEMO_DURATION: Duration = Duration::from_secs(30);

fn main() {
    env_logger::init();
    log::info!("Arena Grow (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(&PathBuf::from(path)),
        None => Settings::default(),
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let mut state = GameState::with_settings(seed, &settings);
    let mut driver = FrameDriver::new(&settings);
    log::info!("Game initialized with seed: {}", seed);

    let started = Instant::now();
    loop {
        let frame_start = Instant::now();
        let mut input = autopilot::steer(&state);
        if driver.run_frame(&mut state, &mut input, frame_start) == FrameOutcome::Quit {
            break;
        }

        for event in state.drain_events() {
            report(&event);
        }

        if state.is_game_over() || started.elapsed() >= DEMO_DURATION {
            break;
        }

        if let Some(rest) = driver.cadence().checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    log::info!(
        "Round over: score {}, level {}, {} fps",
        state.score,
        state.level,
        driver.fps()
    );
    match serde_json::to_string_pretty(&state.snapshot().hud) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize HUD: {e}"),
    }
}

fn report(event: &GameEvent) {
    match event {
        GameEvent::EnemyEaten { radius, points, .. } => {
            log::info!("Ate enemy r={radius:.2} (+{points})");
        }
        GameEvent::LevelUp { level } => log::info!("Reached level {level}"),
        GameEvent::GameOver { score } => log::info!("Eaten by a bigger cube at score {score}"),
        other => log::trace!("{other:?}"),
    }
}

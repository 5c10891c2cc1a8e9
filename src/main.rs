//! Missile Dodge headless driver
//!
//! Runs a session on a simulated 16 ms clock with a simple dodging autopilot
//! and prints the final snapshot as JSON.
//!
//! Usage: `missile-dodge [normal|hard] [settings.json]`

use std::process::ExitCode;

use missile_dodge::audio::{AudioManager, LogBackend};
use missile_dodge::sim::{Difficulty, Snapshot};
use missile_dodge::{Game, GameError, Settings};

/// Give up after ten simulated minutes
const MAX_TICKS: u64 = 10 * 60 * 1000 / missile_dodge::consts::TICK_INTERVAL_MS;

/// Horizontal drag that steers away from the closest missile above the plane
fn autopilot(snap: &Snapshot) -> f32 {
    let plane_center = snap.plane_x + snap.plane_size / 2.0;
    let threat = snap
        .missiles
        .iter()
        .filter(|m| m.y < snap.plane_y + snap.plane_size && snap.plane_y - m.y < 120.0)
        .min_by(|a, b| {
            let da = (a.x + a.size / 2.0 - plane_center).abs();
            let db = (b.x + b.size / 2.0 - plane_center).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        });

    match threat {
        Some(m) if (m.x + m.size / 2.0 - plane_center).abs() < 30.0 => {
            if m.x + m.size / 2.0 > plane_center { -4.0 } else { 4.0 }
        }
        _ => 0.0,
    }
}

fn run() -> Result<(), GameError> {
    let mut args = std::env::args().skip(1);
    let difficulty_arg = args.next();
    let settings = match args.next() {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let difficulty: Difficulty = match difficulty_arg {
        Some(key) => key.parse::<Difficulty>()?,
        None => settings.default_difficulty,
    };

    let mut audio = AudioManager::new(LogBackend::default());
    audio.set_master_volume(settings.master_volume);
    audio.set_sfx_volume(settings.sfx_volume);
    audio.set_pitch(difficulty.config().sound_pitch);
    audio.set_muted(!settings.sound_enabled);

    let mut game = Game::new(&settings);
    let mut now = 0;
    game.start(difficulty, now);
    audio.on_start();

    for _ in 0..MAX_TICKS {
        let dx = autopilot(&game.snapshot());
        game.set_plane_delta(dx, 0.0);

        now += game.tick_interval_ms();
        let events = game.tick(now)?;
        audio.on_events(&events);

        if game.snapshot().game_over {
            break;
        }
    }
    game.end();
    audio.dispose();

    let snap = game.snapshot();
    log::info!(
        "Run finished: score {}, level {}, {:.1}s",
        snap.score,
        snap.level,
        snap.stats.play_time_ms as f64 / 1000.0
    );
    println!("{}", serde_json::to_string_pretty(&snap)?);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    env_logger::init();
    log::info!("Missile Dodge (headless) starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Headless driver is native only; embed the library for web builds
}

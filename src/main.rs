//! Sky Hop entry point
//!
//! Native builds run a headless demo: the autopilot plays one seeded run and
//! the result goes on a local leaderboard. The browser build is driven from
//! JavaScript through `sky_hop::web`.

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
use anyhow::{Context, Result};

/// Safety net so a lucky autopilot can't spin forever
#[cfg(not(target_arch = "wasm32"))]
const MAX_DEMO_TICKS: u64 = 200_000;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Sky Hop (native) starting...");

    // Usage: sky-hop [seed] [tuning.json]
    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x5EED);
    let tuning_path = args.next().map(PathBuf::from);

    if let Err(e) = run_demo(seed, tuning_path) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run_demo(seed: u64, tuning_path: Option<PathBuf>) -> Result<()> {
    use sky_hop::sim::{GameEvent, GameState, autopilot_input, start, tick};
    use sky_hop::{HighScores, Tuning, Viewport};

    let tuning = match tuning_path {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read tuning file {}", path.display()))?;
            Tuning::from_json(&json)
                .with_context(|| format!("invalid tuning in {}", path.display()))?
        }
        None => Tuning::default(),
    };

    let scores_path = PathBuf::from("sky_hop_scores.json");
    let mut high_scores = HighScores::load_from(&scores_path);

    let mut state = GameState::new(seed, tuning, Viewport::default())
        .context("invalid game configuration")?
        .with_best_score(high_scores.top_score());
    start(&mut state);

    let mut bounces = 0u32;
    let mut broken = 0u32;
    while state.is_running() && state.stats.ticks < MAX_DEMO_TICKS {
        let input = autopilot_input(&state);
        for event in tick(&mut state, &input) {
            match event {
                GameEvent::Bounce { .. } => bounces += 1,
                GameEvent::PlatformBroken { .. } => broken += 1,
                GameEvent::ScoreChanged { score } if score % 100 == 0 => {
                    log::debug!("Score {}", score);
                }
                GameEvent::GameOver {
                    final_score,
                    new_best,
                } => {
                    println!(
                        "Final score: {}{}",
                        final_score,
                        if new_best { " (new best!)" } else { "" }
                    );
                }
                _ => {}
            }
        }
    }

    log::info!(
        "Demo finished: {} ticks, {} bounces, {} platforms broken, height {:.0}",
        state.stats.ticks,
        bounces,
        broken,
        state.stats.max_height
    );

    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0);
    if let Some(rank) = high_scores.add_score(state.score(), state.stats.max_height, timestamp) {
        println!("Leaderboard rank #{}", rank);
        high_scores
            .save_to(&scores_path)
            .with_context(|| format!("failed to save {}", scores_path.display()))?;
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is sky_hop::web::init, this is just to satisfy the compiler
}

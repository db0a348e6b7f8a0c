//! Browser host bindings
//!
//! The page owns the animation loop and the canvas; it calls `tick()` once per
//! `requestAnimationFrame` while `is_running()` is true and draws from
//! `snapshot_json()`.

use wasm_bindgen::prelude::*;

use crate::HighScores;
use crate::input::InputState;
use crate::sim::{GameEvent, GameState, TickInput, autopilot_input, start, tick};
use crate::tuning::{Tuning, Viewport};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Sky Hop (web) starting...");
}

/// A run context plus the host-side input and leaderboard
#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
    input: InputState,
    high_scores: HighScores,
    /// Let the autopilot play (attract screen)
    demo: bool,
    /// Set when the last run beat the stored best
    new_best: bool,
    /// Leaderboard slot earned by the last finished run
    last_rank: Option<usize>,
}

#[wasm_bindgen]
impl WebGame {
    /// Build a game for the given canvas size, with optional tuning JSON
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, tuning_json: Option<String>) -> Result<WebGame, JsValue> {
        let tuning = match tuning_json {
            Some(json) => Tuning::from_json(&json),
            None => Ok(Tuning::default()),
        }
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let seed = js_sys::Date::now() as u64;
        let high_scores = HighScores::load();
        let state = GameState::new(seed, tuning, Viewport::new(width, height))
            .map_err(|e| JsValue::from_str(&e.to_string()))?
            .with_best_score(high_scores.top_score());

        Ok(WebGame {
            state,
            input: InputState::new(),
            high_scores,
            demo: false,
            new_best: false,
            last_rank: None,
        })
    }

    /// Start or restart a run from scratch
    pub fn start(&mut self) {
        self.new_best = false;
        self.last_rank = None;
        self.input.clear();
        start(&mut self.state);
    }

    /// Advance one frame; returns whether the host should schedule another
    pub fn tick(&mut self) -> bool {
        let input = if self.demo {
            autopilot_input(&self.state)
        } else {
            TickInput::steer(self.input.intent())
        };

        for event in tick(&mut self.state, &input) {
            if let GameEvent::GameOver {
                final_score,
                new_best,
            } = event
            {
                self.new_best = new_best;
                if !self.demo {
                    self.last_rank = self.high_scores.add_score(
                        final_score,
                        self.state.stats.max_height,
                        js_sys::Date::now(),
                    );
                    if self.last_rank.is_some() {
                        self.high_scores.save();
                    }
                }
            }
        }

        self.state.is_running()
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn score(&self) -> f64 {
        self.state.score() as f64
    }

    pub fn best_score(&self) -> f64 {
        self.state.best_score as f64
    }

    /// Whether the run that just ended set a new best
    pub fn new_best(&self) -> bool {
        self.new_best
    }

    /// Leaderboard slot for the HUD: the slot the live score would take while
    /// running, or the slot the last run earned once it is over
    pub fn rank(&self) -> Option<u32> {
        let rank = if self.state.is_running() {
            self.high_scores.potential_rank(self.state.score())
        } else {
            self.last_rank
        };
        rank.map(|r| r as u32)
    }

    /// Returns true if the key is used by the game
    pub fn set_key(&mut self, code: &str, down: bool) -> bool {
        self.input.set_key(code, down)
    }

    pub fn set_touch_direction(&mut self, direction: i32) {
        self.input.set_touch(direction);
    }

    pub fn set_demo(&mut self, demo: bool) {
        self.demo = demo;
    }

    /// New canvas size, applied at the next start
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.state
            .resize(Viewport::new(width, height))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Player, platforms and particles for the renderer
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.state).unwrap_or_default()
    }
}

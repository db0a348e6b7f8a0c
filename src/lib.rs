//! Sky Hop - An endless vertical platform-bouncing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, generation, collisions, scrolling)
//! - `tuning`: Data-driven game balance and viewport geometry
//! - `input`: Held-key / touch resolution into a horizontal intent
//! - `highscores`: Best-score leaderboard (lives outside the simulation)

pub mod error;
pub mod highscores;
pub mod input;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::ConfigError;
pub use highscores::HighScores;
pub use tuning::{Tuning, Viewport};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Default viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 450.0;
    pub const VIEWPORT_HEIGHT: f32 = 700.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    /// Vertical velocity applied on every bounce (negative = up)
    pub const JUMP_VELOCITY: f32 = -15.0;
    /// Horizontal speed per tick while a direction is held
    pub const MOVE_SPEED: f32 = 8.0;
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.6;
    pub const MAX_FALL_SPEED: f32 = 20.0;

    /// Platform defaults
    pub const PLATFORM_WIDTH: f32 = 80.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    /// Hard floor for generated platform width
    pub const MIN_PLATFORM_WIDTH: f32 = 30.0;
    /// Width lost at full difficulty (80 -> 40, floored at 30)
    pub const PLATFORM_WIDTH_SHRINK: f32 = 40.0;
    pub const MIN_GAP: f32 = 50.0;
    pub const MAX_GAP: f32 = 120.0;
    /// Gap growth at full difficulty (50..120 -> 90..160)
    pub const GAP_GROWTH: f32 = 40.0;
    /// Distance kept below the physics jump limit (187.5 - 12.5 = 175)
    pub const GAP_SAFETY_MARGIN: f32 = 12.5;
    /// Smallest allowed spread between capped min and max gap
    pub const MIN_GAP_SPREAD: f32 = 10.0;

    /// Moving platform speed at zero difficulty, and its growth at full difficulty
    pub const MOVING_BASE_SPEED: f32 = 2.0;
    pub const MOVING_SPEED_GROWTH: f32 = 3.0;

    /// Platform type mix (static 0.8 -> 0.3, moving band 0.15 -> 0.5)
    pub const STATIC_CHANCE: f32 = 0.8;
    pub const STATIC_CHANCE_DROP: f32 = 0.5;
    pub const MOVING_BAND: f32 = 0.15;
    pub const MOVING_BAND_GROWTH: f32 = 0.35;

    /// Difficulty starts ramping at this score...
    pub const DIFFICULTY_START_SCORE: u64 = 50;
    /// ...and is maxed out here
    pub const DIFFICULTY_MAX_SCORE: u64 = 5000;

    /// Fraction of viewport height above which the world scrolls instead of the player
    pub const SCROLL_THRESHOLD: f32 = 0.4;
    /// Platforms kept alive at all times
    pub const PLATFORM_COUNT: usize = 10;
    /// Platforms are pruned this far below the viewport
    pub const PRUNE_MARGIN: f32 = 50.0;
    /// Height units per score point
    pub const HEIGHT_PER_POINT: f32 = 10.0;

    /// Player spawn offset from the bottom of the viewport
    pub const START_OFFSET: f32 = 100.0;
    /// Gap between the player's feet and the first platform
    pub const START_PLATFORM_DROP: f32 = 10.0;
}

/// Wrap an x coordinate around the viewport, re-entering from the opposite edge.
///
/// `x` is the left edge of a box `width` wide. Once the box is fully past the
/// left edge it reappears at `viewport_width`; once its left edge passes the
/// right boundary it reappears at `-width`.
#[inline]
pub fn wrap_horizontal(x: f32, width: f32, viewport_width: f32) -> f32 {
    if x + width < 0.0 {
        viewport_width
    } else if x > viewport_width {
        -width
    } else {
        x
    }
}

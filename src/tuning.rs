//! Data-driven game balance
//!
//! Every playtesting constant lives in [`Tuning`]. Missing JSON fields fall back
//! to the defaults in [`crate::consts`], so a tuning file only needs to list
//! the values it overrides.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Viewport geometry for one run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check the viewport can host a run with the given tuning
    pub fn validate(&self, tuning: &Tuning) -> Result<(), ConfigError> {
        let finite = self.width.is_finite() && self.height.is_finite();
        if !finite || self.width <= 0.0 || self.height <= 0.0 {
            return Err(ConfigError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        if self.width <= tuning.platform_width {
            return Err(ConfigError::ViewportTooNarrow {
                width: self.width,
                required: tuning.platform_width,
                what: "platforms",
            });
        }
        if self.width <= tuning.player_width {
            return Err(ConfigError::ViewportTooNarrow {
                width: self.width,
                required: tuning.player_width,
                what: "the player",
            });
        }
        Ok(())
    }

    /// Y coordinate above which the world scrolls
    #[inline]
    pub fn scroll_line(&self, tuning: &Tuning) -> f32 {
        self.height * tuning.scroll_threshold
    }
}

/// Gameplay balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    pub jump_velocity: f32,
    pub move_speed: f32,
    pub gravity: f32,
    pub max_fall_speed: f32,

    // === Platforms ===
    pub platform_width: f32,
    pub platform_height: f32,
    pub min_platform_width: f32,
    pub platform_width_shrink: f32,
    pub min_gap: f32,
    pub max_gap: f32,
    pub gap_growth: f32,
    pub gap_safety_margin: f32,
    pub moving_base_speed: f32,
    pub moving_speed_growth: f32,

    // === Type mix ===
    pub static_chance: f32,
    pub static_chance_drop: f32,
    pub moving_band: f32,
    pub moving_band_growth: f32,

    // === Difficulty curve ===
    pub difficulty_start_score: u64,
    pub difficulty_max_score: u64,

    // === World ===
    pub scroll_threshold: f32,
    pub platform_count: usize,
    pub prune_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            jump_velocity: JUMP_VELOCITY,
            move_speed: MOVE_SPEED,
            gravity: GRAVITY,
            max_fall_speed: MAX_FALL_SPEED,

            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            min_platform_width: MIN_PLATFORM_WIDTH,
            platform_width_shrink: PLATFORM_WIDTH_SHRINK,
            min_gap: MIN_GAP,
            max_gap: MAX_GAP,
            gap_growth: GAP_GROWTH,
            gap_safety_margin: GAP_SAFETY_MARGIN,
            moving_base_speed: MOVING_BASE_SPEED,
            moving_speed_growth: MOVING_SPEED_GROWTH,

            static_chance: STATIC_CHANCE,
            static_chance_drop: STATIC_CHANCE_DROP,
            moving_band: MOVING_BAND,
            moving_band_growth: MOVING_BAND_GROWTH,

            difficulty_start_score: DIFFICULTY_START_SCORE,
            difficulty_max_score: DIFFICULTY_MAX_SCORE,

            scroll_threshold: SCROLL_THRESHOLD,
            platform_count: PLATFORM_COUNT,
            prune_margin: PRUNE_MARGIN,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Peak rise of a single bounce: v² / 2g
    pub fn max_jump_height(&self) -> f32 {
        self.jump_velocity * self.jump_velocity / (2.0 * self.gravity)
    }

    /// Largest gap the generator may ever emit
    pub fn safe_gap_ceiling(&self) -> f32 {
        self.max_jump_height() - self.gap_safety_margin
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.gravity > 0.0) {
            return Err(ConfigError::NonPositiveGravity {
                gravity: self.gravity,
            });
        }
        if !(self.jump_velocity < 0.0) {
            return Err(ConfigError::NonUpwardJump {
                jump_velocity: self.jump_velocity,
            });
        }
        if !(self.max_fall_speed > 0.0) {
            return Err(ConfigError::NonPositiveFallSpeed {
                max_fall_speed: self.max_fall_speed,
            });
        }
        if !(self.move_speed > 0.0) {
            return Err(ConfigError::NonPositiveMoveSpeed {
                move_speed: self.move_speed,
            });
        }
        if self.difficulty_start_score >= self.difficulty_max_score {
            return Err(ConfigError::InvalidDifficultyRange {
                start: self.difficulty_start_score,
                max: self.difficulty_max_score,
            });
        }
        if !(self.min_platform_width > 0.0) || self.min_platform_width > self.platform_width {
            return Err(ConfigError::InvalidWidthRange {
                min: self.min_platform_width,
                base: self.platform_width,
            });
        }
        if !(self.scroll_threshold > 0.0 && self.scroll_threshold < 1.0) {
            return Err(ConfigError::ScrollThresholdOutOfRange {
                threshold: self.scroll_threshold,
            });
        }
        if self.platform_count == 0 {
            return Err(ConfigError::ZeroPlatformCount);
        }
        if !(self.platform_height > 0.0) {
            return Err(ConfigError::NonPositivePlatformHeight {
                platform_height: self.platform_height,
            });
        }
        // Every gap has to move the next platform strictly upward
        if !(self.min_gap > 0.0) {
            return Err(ConfigError::NonPositiveMinGap {
                min_gap: self.min_gap,
            });
        }
        if !(self.max_gap > MIN_GAP_SPREAD) {
            return Err(ConfigError::MaxGapTooSmall {
                max_gap: self.max_gap,
                required: MIN_GAP_SPREAD,
            });
        }
        if !(self.gap_growth >= 0.0) {
            return Err(ConfigError::NegativeGapGrowth {
                gap_growth: self.gap_growth,
            });
        }
        // Capped min is ceiling - spread; it must stay positive
        let ceiling = self.safe_gap_ceiling();
        if !(ceiling > MIN_GAP_SPREAD) {
            return Err(ConfigError::GapCeilingTooLow {
                ceiling,
                required: MIN_GAP_SPREAD,
            });
        }
        Ok(())
    }
}

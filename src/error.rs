//! Startup configuration errors
//!
//! The simulation itself never fails: numeric edge cases are clamped. Anything
//! here is a fatal misconfiguration reported once, before the first tick.

use core::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Viewport dimension is NaN, infinite, or not positive
    InvalidViewport { width: f32, height: f32 },
    /// Viewport is too narrow to hold the named entity
    ViewportTooNarrow { width: f32, required: f32, what: &'static str },
    NonPositiveGravity { gravity: f32 },
    /// Bounces must push the player upward (negative y)
    NonUpwardJump { jump_velocity: f32 },
    NonPositiveFallSpeed { max_fall_speed: f32 },
    NonPositiveMoveSpeed { move_speed: f32 },
    InvalidDifficultyRange { start: u64, max: u64 },
    InvalidWidthRange { min: f32, base: f32 },
    ScrollThresholdOutOfRange { threshold: f32 },
    ZeroPlatformCount,
    NonPositivePlatformHeight { platform_height: f32 },
    /// Smallest gap must keep platforms climbing
    NonPositiveMinGap { min_gap: f32 },
    /// Largest gap must leave room for the min spread
    MaxGapTooSmall { max_gap: f32, required: f32 },
    NegativeGapGrowth { gap_growth: f32 },
    /// The safe gap ceiling leaves no room for a positive gap range
    GapCeilingTooLow { ceiling: f32, required: f32 },
    /// Tuning JSON could not be parsed
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidViewport { width, height } => {
                write!(f, "invalid viewport: {width}x{height}")
            }
            Self::ViewportTooNarrow {
                width,
                required,
                what,
            } => write!(
                f,
                "viewport width {width} too narrow for {what} (need more than {required})"
            ),
            Self::NonPositiveGravity { gravity } => {
                write!(f, "gravity must be positive, got {gravity}")
            }
            Self::NonUpwardJump { jump_velocity } => {
                write!(f, "jump velocity must be negative (upward), got {jump_velocity}")
            }
            Self::NonPositiveFallSpeed { max_fall_speed } => {
                write!(f, "max fall speed must be positive, got {max_fall_speed}")
            }
            Self::NonPositiveMoveSpeed { move_speed } => {
                write!(f, "move speed must be positive, got {move_speed}")
            }
            Self::InvalidDifficultyRange { start, max } => {
                write!(f, "difficulty start score {start} must be below max score {max}")
            }
            Self::InvalidWidthRange { min, base } => write!(
                f,
                "platform width floor {min} must be positive and at most base width {base}"
            ),
            Self::ScrollThresholdOutOfRange { threshold } => {
                write!(f, "scroll threshold must lie in (0, 1), got {threshold}")
            }
            Self::ZeroPlatformCount => write!(f, "platform count must be at least 1"),
            Self::NonPositivePlatformHeight { platform_height } => {
                write!(f, "platform height must be positive, got {platform_height}")
            }
            Self::NonPositiveMinGap { min_gap } => {
                write!(f, "min gap must be positive, got {min_gap}")
            }
            Self::MaxGapTooSmall { max_gap, required } => {
                write!(f, "max gap {max_gap} too small (need more than {required})")
            }
            Self::NegativeGapGrowth { gap_growth } => {
                write!(f, "gap growth must not be negative, got {gap_growth}")
            }
            Self::GapCeilingTooLow { ceiling, required } => write!(
                f,
                "safe gap ceiling {ceiling} too low (need more than {required})"
            ),
            Self::Parse(msg) => write!(f, "failed to parse tuning: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, velocities in units per tick
//! - Seeded RNG only
//! - Stable iteration order (platforms in generation order)
//! - No rendering, storage or input-device dependencies

pub mod autopilot;
pub mod collision;
pub mod generator;
pub mod kinematics;
pub mod scroll;
pub mod state;
pub mod tick;

pub use autopilot::{autopilot_input, target_platform};
pub use collision::{player_lands_on, resolve_collisions};
pub use generator::{
    GapBounds, KindRoll, choose_kind, difficulty_factor, gap_bounds, generate_platforms,
    moving_speed, platform_width,
};
pub use kinematics::{integrate_player, update_particles, update_platform};
pub use scroll::scroll_and_score;
pub use state::{
    GameEvent, GameState, HorizontalIntent, MAX_PARTICLES, Particle, Platform, PlatformKind,
    Player, RunPhase, RunStats,
};
pub use tick::{TickInput, start, tick};

//! Game state and core simulation types
//!
//! Everything a run owns lives in [`GameState`]. There is no global state:
//! independent instances never observe each other.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::tuning::{Tuning, Viewport};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Constructed, waiting for the first start
    Idle,
    /// Active gameplay
    Running,
    /// Player fell out of the viewport; needs a full restart
    Over,
}

/// Horizontal steering requested for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HorizontalIntent {
    Left,
    Right,
    #[default]
    None,
}

impl HorizontalIntent {
    pub fn sign(self) -> f32 {
        match self {
            HorizontalIntent::Left => -1.0,
            HorizontalIntent::Right => 1.0,
            HorizontalIntent::None => 0.0,
        }
    }

    pub fn from_sign(sign: i32) -> Self {
        match sign.signum() {
            -1 => HorizontalIntent::Left,
            1 => HorizontalIntent::Right,
            _ => HorizontalIntent::None,
        }
    }
}

/// The bouncing player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner, y grows downward
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Last non-zero steering direction (-1 left, +1 right)
    pub facing: i8,
}

impl Player {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size: Vec2::new(tuning.player_width, tuning.player_height),
            facing: 1,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Instant upward kick off a platform
    pub fn bounce(&mut self, jump_velocity: f32) {
        self.vel.y = jump_velocity;
    }
}

/// Platform behaviour variants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlatformKind {
    Static,
    /// Oscillates horizontally, reversing at the viewport edges
    Moving { speed: f32, direction: f32 },
    /// Breaks after the first bounce
    Breakable,
}

/// A platform entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub kind: PlatformKind,
    /// Inert once set: no collision, not drawn, pruned when off-screen
    pub broken: bool,
}

impl Platform {
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    #[inline]
    pub fn is_solid(&self) -> bool {
        !self.broken
    }
}

/// A particle for visual feedback (not gameplay-affecting)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// 1 at spawn, dead at or below 0
    pub life: f32,
    /// Life lost per tick
    pub decay: f32,
}

/// Maximum particles
pub const MAX_PARTICLES: usize = 256;

/// Particles spawned per bounce
pub const BOUNCE_PARTICLES: usize = 8;

/// Per-run progress counters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunStats {
    /// floor(max_height / 10), never decreases within a run
    pub score: u64,
    /// Cumulative scroll (negative = world moved up)
    pub camera_y: f32,
    /// Highest upward camera travel so far
    pub max_height: f32,
    /// Simulation tick counter
    pub ticks: u64,
}

/// Things that happened during a tick, for audio/HUD/effects hosts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Bounce { platform_id: u32, x: f32, y: f32 },
    PlatformBroken { platform_id: u32 },
    ScoreChanged { score: u64 },
    GameOver { final_score: u64, new_best: bool },
}

/// Complete run context (deterministic for a given seed and input stream)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Seed for reproducibility
    pub seed: u64,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
    pub tuning: Tuning,
    /// Geometry in force for the current run
    pub viewport: Viewport,
    /// Resize requested mid-run, applied on the next start
    #[serde(skip)]
    pending_viewport: Option<Viewport>,
    pub phase: RunPhase,
    pub stats: RunStats,
    /// Best score known to the host; `GameOver` reports whether it was beaten
    pub best_score: u64,
    pub player: Player,
    /// Active platforms, generation order (last = highest)
    pub platforms: Vec<Platform>,
    pub particles: Vec<Particle>,
    next_id: u32,
}

impl GameState {
    /// Create an idle run context, validating configuration once up front
    pub fn new(seed: u64, tuning: Tuning, viewport: Viewport) -> Result<Self, ConfigError> {
        tuning.validate()?;
        viewport.validate(&tuning)?;

        let player = Player::new(spawn_point(&tuning, &viewport), &tuning);
        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            viewport,
            pending_viewport: None,
            phase: RunPhase::Idle,
            stats: RunStats::default(),
            best_score: 0,
            player,
            platforms: Vec::new(),
            particles: Vec::new(),
            next_id: 1,
        })
    }

    /// Idle context with default tuning and viewport
    pub fn with_defaults(seed: u64) -> Result<Self, ConfigError> {
        Self::new(seed, Tuning::default(), Viewport::default())
    }

    /// Seed the best-known score (e.g. from a persisted leaderboard)
    pub fn with_best_score(mut self, best: u64) -> Self {
        self.best_score = best;
        self
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.stats.score
    }

    /// Request new viewport geometry. Takes effect at the next start so a
    /// running tick never sees the bounds change.
    pub fn resize(&mut self, viewport: Viewport) -> Result<(), ConfigError> {
        viewport.validate(&self.tuning)?;
        if self.is_running() {
            self.pending_viewport = Some(viewport);
        } else {
            self.viewport = viewport;
            self.pending_viewport = None;
        }
        Ok(())
    }

    pub(crate) fn take_pending_viewport(&mut self) -> Option<Viewport> {
        self.pending_viewport.take()
    }

    /// Push a particle unless the pool is full
    pub fn push_particle(&mut self, particle: Particle) {
        if self.particles.len() < MAX_PARTICLES {
            self.particles.push(particle);
        }
    }
}

/// Where the player appears at the start of a run
pub fn spawn_point(tuning: &Tuning, viewport: &Viewport) -> Vec2 {
    Vec2::new(
        viewport.width / 2.0 - tuning.player_width / 2.0,
        viewport.height - START_OFFSET,
    )
}

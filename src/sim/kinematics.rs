//! Discrete-time Euler integration for the player, platforms and particles
//!
//! One call = one tick. Velocities are in units per tick.

use super::state::{HorizontalIntent, Particle, Platform, PlatformKind, Player};
use crate::tuning::Tuning;
use crate::wrap_horizontal;

/// Advance the player by one tick
///
/// Horizontal velocity is set directly from the intent (no inertia) and the
/// player wraps around the viewport edges. Gravity accumulates into the
/// vertical velocity, capped at the maximum fall speed.
pub fn integrate_player(
    player: &mut Player,
    intent: HorizontalIntent,
    tuning: &Tuning,
    viewport_width: f32,
) {
    player.vel.x = intent.sign() * tuning.move_speed;
    if intent != HorizontalIntent::None {
        player.facing = intent.sign() as i8;
    }
    player.pos.x = wrap_horizontal(player.pos.x + player.vel.x, player.size.x, viewport_width);

    // Cap applies to falling only; bounces are never clamped
    player.vel.y = (player.vel.y + tuning.gravity).min(tuning.max_fall_speed);
    player.pos.y += player.vel.y;
}

/// Slide a moving platform, reversing at the viewport edges
pub fn update_platform(platform: &mut Platform, viewport_width: f32) {
    if platform.broken {
        return;
    }
    if let PlatformKind::Moving {
        speed,
        ref mut direction,
    } = platform.kind
    {
        platform.pos.x += speed * *direction;
        if platform.pos.x <= 0.0 || platform.pos.x + platform.width >= viewport_width {
            *direction = -*direction;
        }
    }
}

/// Drift and fade particles, dropping dead ones
pub fn update_particles(particles: &mut Vec<Particle>) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel;
        particle.life -= particle.decay;
    }
    particles.retain(|p| p.life > 0.0);
}

//! Collision detection and response for player-vs-platform landings
//!
//! Landings are one-way: the player only interacts with platforms while
//! falling, so it passes up through them and bounces off their tops.

use glam::Vec2;
use rand::Rng;

use super::state::{
    BOUNCE_PARTICLES, GameEvent, GameState, Particle, Platform, PlatformKind, Player,
};

/// Axis-aligned landing test
///
/// Horizontal extents must overlap and the player's feet must sit strictly
/// inside the platform's vertical band. Falling is checked separately.
pub fn player_lands_on(player: &Player, platform: &Platform) -> bool {
    let bottom = player.bottom();
    player.pos.x < platform.pos.x + platform.width
        && player.pos.x + player.size.x > platform.pos.x
        && bottom > platform.top()
        && bottom < platform.top() + platform.height
}

/// Bounce the player off every qualifying platform
///
/// Only runs while the player is falling. Every solid platform that
/// overlaps in the same pass triggers, breakables become inert.
pub fn resolve_collisions(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.player.vel.y <= 0.0 {
        return events;
    }

    let jump_velocity = state.tuning.jump_velocity;
    let mut bursts: Vec<Vec2> = Vec::new();

    for platform in state.platforms.iter_mut() {
        if !platform.is_solid() || !player_lands_on(&state.player, platform) {
            continue;
        }

        state.player.bounce(jump_velocity);
        let contact = Vec2::new(state.player.center_x(), platform.top());
        bursts.push(contact);
        events.push(GameEvent::Bounce {
            platform_id: platform.id,
            x: contact.x,
            y: contact.y,
        });

        if platform.kind == PlatformKind::Breakable {
            platform.broken = true;
            events.push(GameEvent::PlatformBroken {
                platform_id: platform.id,
            });
        }
    }

    for contact in bursts {
        spawn_burst(state, contact);
    }

    events
}

/// Cosmetic particle burst at a contact point
pub fn spawn_burst(state: &mut GameState, at: Vec2) {
    for _ in 0..BOUNCE_PARTICLES {
        let size = state.rng.random::<f32>() * 4.0 + 2.0;
        let vel = Vec2::new(
            (state.rng.random::<f32>() - 0.5) * 4.0,
            (state.rng.random::<f32>() - 0.5) * 4.0,
        );
        let decay = state.rng.random::<f32>() * 0.02 + 0.01;
        state.push_particle(Particle {
            pos: at,
            vel,
            size,
            life: 1.0,
            decay,
        });
    }
}

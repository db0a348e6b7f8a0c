//! Demo-mode AI
//!
//! Steers toward the platform the player can land on next. Used by the
//! native demo runner and the browser attract mode.

use super::state::{GameState, HorizontalIntent, Platform};
use super::tick::TickInput;

/// Pick a platform to aim for
///
/// While rising, the highest solid platform between the projected apex of
/// the player's feet and their current height. Otherwise (or if none is in
/// reach) the nearest solid platform below the feet.
pub fn target_platform(state: &GameState) -> Option<&Platform> {
    let player = &state.player;
    let feet = player.bottom();

    if player.vel.y < 0.0 {
        let rise = player.vel.y * player.vel.y / (2.0 * state.tuning.gravity);
        let apex_feet = feet - rise;
        let above = state
            .platforms
            .iter()
            .filter(|p| p.is_solid() && p.top() >= apex_feet && p.top() < feet)
            .min_by(|a, b| a.top().total_cmp(&b.top()));
        if above.is_some() {
            return above;
        }
    }

    state
        .platforms
        .iter()
        .filter(|p| p.is_solid() && p.top() >= feet)
        .min_by(|a, b| a.top().total_cmp(&b.top()))
}

/// Input that moves the player toward the current target
pub fn autopilot_input(state: &GameState) -> TickInput {
    let Some(target) = target_platform(state) else {
        return TickInput::default();
    };

    let dead_zone = state.tuning.move_speed / 2.0;
    let dx = target.center_x() - state.player.center_x();
    let intent = if dx > dead_zone {
        HorizontalIntent::Right
    } else if dx < -dead_zone {
        HorizontalIntent::Left
    } else {
        HorizontalIntent::None
    };
    TickInput::steer(intent)
}

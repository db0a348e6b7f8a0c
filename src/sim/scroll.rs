//! Camera scrolling and scoring
//!
//! The player never rises above the scroll line; instead the world is pushed
//! down by the same amount and the camera records the upward travel.

use super::state::{GameEvent, GameState};
use crate::consts::HEIGHT_PER_POINT;

/// Pin the player to the scroll line and shift the world down
///
/// Returns `ScoreChanged` when the new height raised the score.
pub fn scroll_and_score(state: &mut GameState) -> Option<GameEvent> {
    let threshold = state.viewport.scroll_line(&state.tuning);
    if state.player.pos.y >= threshold {
        return None;
    }

    let deficit = threshold - state.player.pos.y;
    state.stats.camera_y -= deficit;
    state.player.pos.y = threshold;
    for platform in &mut state.platforms {
        platform.pos.y += deficit;
    }

    state.stats.max_height = state.stats.max_height.max(-state.stats.camera_y);
    let score = (state.stats.max_height / HEIGHT_PER_POINT).floor() as u64;
    if score > state.stats.score {
        state.stats.score = score;
        Some(GameEvent::ScoreChanged { score })
    } else {
        None
    }
}

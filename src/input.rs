//! Input resolution
//!
//! Tracks held keys and on-screen touch buttons and folds them into the
//! single horizontal intent the simulation consumes.

use crate::sim::HorizontalIntent;

/// Raw input device state, updated from key/touch events
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    /// Touch button direction (-1, 0, +1)
    pub touch: i32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press/release by `KeyboardEvent.code`
    ///
    /// Returns true if the key is one the game uses (so the host can
    /// suppress its default action, e.g. page scrolling).
    pub fn set_key(&mut self, code: &str, down: bool) -> bool {
        match code {
            "ArrowLeft" | "KeyA" => {
                self.left = down;
                true
            }
            "ArrowRight" | "KeyD" => {
                self.right = down;
                true
            }
            "Space" => true,
            _ => false,
        }
    }

    pub fn set_touch(&mut self, direction: i32) {
        self.touch = direction.signum();
    }

    /// Touch wins over keys; with both arrows held, right wins
    pub fn intent(&self) -> HorizontalIntent {
        if self.touch != 0 {
            return HorizontalIntent::from_sign(self.touch);
        }
        if self.right {
            HorizontalIntent::Right
        } else if self.left {
            HorizontalIntent::Left
        } else {
            HorizontalIntent::None
        }
    }

    /// Release everything (e.g. on window blur)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

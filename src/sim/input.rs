//! Per-tick input intent
//!
//! The host translates raw keys and pointer events into a [`TickInput`].
//! Held flags stay set while the key is down; one-shot flags are cleared by
//! the driver after each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::POINTER_DEADZONE;

/// How the player steers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputMode {
    /// Head toward the pointer, relative to screen center
    #[default]
    Pointer,
    /// WASD / arrow keys
    Keys,
}

impl InputMode {
    pub fn toggled(self) -> Self {
        match self {
            InputMode::Pointer => InputMode::Keys,
            InputMode::Keys => InputMode::Pointer,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::Pointer => "Mouse",
            InputMode::Keys => "WASD",
        }
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position in pixels (origin top-left)
    pub pointer: Option<Vec2>,
    /// Viewport size in pixels
    pub viewport: Vec2,

    // Held
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub dash: bool,

    // One-shot
    pub pause: bool,
    pub restart: bool,
    pub toggle_mode: bool,
    pub confirm: bool,
    pub menu_up: bool,
    pub menu_down: bool,
    pub back: bool,
    pub quit: bool,
}

impl TickInput {
    /// Clear edge-triggered actions after they were consumed
    pub fn clear_one_shots(&mut self) {
        self.pause = false;
        self.restart = false;
        self.toggle_mode = false;
        self.confirm = false;
        self.menu_up = false;
        self.menu_down = false;
        self.back = false;
        self.quit = false;
    }

    /// Movement direction on the X/Z plane (x -> X, y -> Z), unit length or zero
    pub fn direction(&self, mode: InputMode) -> Vec2 {
        match mode {
            InputMode::Pointer => {
                let Some(pointer) = self.pointer else {
                    return Vec2::ZERO;
                };
                let offset = pointer - self.viewport * 0.5;
                let len = offset.length();
                if len > POINTER_DEADZONE {
                    offset / len
                } else {
                    Vec2::ZERO
                }
            }
            InputMode::Keys => {
                let mut dir = Vec2::ZERO;
                if self.up {
                    dir.y -= 1.0;
                }
                if self.down {
                    dir.y += 1.0;
                }
                if self.left {
                    dir.x -= 1.0;
                }
                if self.right {
                    dir.x += 1.0;
                }
                dir.normalize_or_zero()
            }
        }
    }
}

//! Input state management
//!
//! Polls keyboard and mouse (macroquad) and gamepad (gilrs) input, combining
//! them into the per-frame `FrameInput` the game loop consumes.

use macroquad::prelude::*;
use crate::game::FrameInput;
use crate::ui::Rect;
use super::{Action, Gamepad, button};

/// Did a click land on the button? `click` is the cursor position if the
/// left mouse button went down this frame.
pub fn click_hits(button: Rect, click: Option<(f32, f32)>) -> bool {
    click.is_some_and(|(x, y)| button.contains(x, y))
}

/// Unified input state that handles both keyboard/mouse and gamepad
pub struct InputState {
    gamepad: Gamepad,
}

impl InputState {
    pub fn new() -> Self {
        Self { gamepad: Gamepad::new() }
    }

    /// Call once per frame before checking actions
    pub fn poll(&mut self) {
        self.gamepad.poll();
    }

    pub fn has_gamepad(&self) -> bool {
        self.gamepad.has_gamepad()
    }

    /// Check if action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        self.keyboard_pressed(action) || self.gamepad_pressed(action)
    }

    fn keyboard_pressed(&self, action: Action) -> bool {
        match action {
            Action::Jump => is_key_pressed(KeyCode::Space),
            Action::Restart => is_key_pressed(KeyCode::Enter),
            Action::Quit => is_key_pressed(KeyCode::Escape),
        }
    }

    fn gamepad_pressed(&self, action: Action) -> bool {
        match action {
            Action::Jump => self.gamepad.is_button_pressed(button::A),
            Action::Restart => self.gamepad.is_button_pressed(button::START),
            Action::Quit => false,
        }
    }

    /// Sample this frame's input. `restart_button` is where the overlay's
    /// restart button sits on screen.
    pub fn frame_input(&self, restart_button: Rect) -> FrameInput {
        let click = is_mouse_button_pressed(MouseButton::Left).then(mouse_position);
        FrameInput {
            delta_time: get_frame_time(),
            jump: self.action_pressed(Action::Jump),
            restart: self.action_pressed(Action::Restart) || click_hits(restart_button, click),
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::restart_button;

    #[test]
    fn test_click_on_restart_button() {
        let button = restart_button(800.0, 600.0);
        assert!(click_hits(button, Some((400.0, 360.0))));
        assert!(!click_hits(button, Some((10.0, 10.0))));
        assert!(!click_hits(button, None));
    }
}

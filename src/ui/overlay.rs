//! End-of-round overlay layout
//!
//! Headline centered on screen with a restart button underneath. Layout is
//! kept separate from drawing so the button's hit area can be computed
//! before the frame is drawn.

use super::Rect;

pub const MESSAGE_FONT_SIZE: u16 = 40;
pub const BUTTON_FONT_SIZE: u16 = 20;
pub const BUTTON_WIDTH: f32 = 140.0;
pub const BUTTON_HEIGHT: f32 = 50.0;
/// Space between the headline and the button
pub const BUTTON_GAP: f32 = 20.0;
pub const RESTART_LABEL: &str = "Restart";

/// Top-left positions of everything on the overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLayout {
    pub message: (f32, f32),
    pub button: Rect,
    pub label: (f32, f32),
}

/// Top of the headline. The font size stands in for the text height.
fn message_top(screen_height: f32) -> f32 {
    (screen_height / 2.0 - MESSAGE_FONT_SIZE as f32 / 2.0).floor()
}

/// Restart button area for a screen of the given size
pub fn restart_button(screen_width: f32, screen_height: f32) -> Rect {
    let y = message_top(screen_height) + MESSAGE_FONT_SIZE as f32 + BUTTON_GAP;
    Rect::new(screen_width / 2.0 - BUTTON_WIDTH / 2.0, y, BUTTON_WIDTH, BUTTON_HEIGHT)
}

impl OverlayLayout {
    /// Lay out the overlay given the measured widths of the headline and the
    /// button label.
    pub fn compute(screen_width: f32, screen_height: f32, message_width: f32, label_width: f32) -> Self {
        let message = ((screen_width / 2.0 - message_width / 2.0).floor(), message_top(screen_height));
        let button = restart_button(screen_width, screen_height);
        let label = (
            (button.x + (button.w - label_width) / 2.0).floor(),
            (button.y + (button.h - BUTTON_FONT_SIZE as f32) / 2.0).floor(),
        );
        Self { message, button, label }
    }
}

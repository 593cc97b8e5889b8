//! Gamepad support
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: No gamepad backend; keyboard and mouse only

// Standard gamepad button indices (Xbox layout, matches the Web Gamepad API)
pub mod button {
    pub const A: u32 = 0;           // ActionDown / South
    pub const START: u32 = 9;       // Start/Options
}

/// Buttons that went down between two polls
pub fn pressed_edges(previous: u32, current: u32) -> u32 {
    current & !previous
}

// ============================================================================
// WASM Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod platform {
    pub struct Gamepad;

    impl Gamepad {
        pub fn new() -> Self {
            Self
        }

        pub fn poll(&mut self) {}

        pub fn has_gamepad(&self) -> bool {
            false
        }

        pub fn is_button_pressed(&self, _button: u32) -> bool {
            false
        }
    }

    impl Default for Gamepad {
        fn default() -> Self {
            Self::new()
        }
    }
}

// ============================================================================
// Native Implementation (gilrs)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use gilrs::{Button as GilrsButton, Gilrs};

    pub struct Gamepad {
        /// None when the platform backend failed to start
        gilrs: Option<Gilrs>,
        buttons: u32,
        pressed: u32,
    }

    impl Gamepad {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(gilrs) => Some(gilrs),
                Err(e) => {
                    tracing::warn!("Gamepad support unavailable: {}", e);
                    None
                }
            };
            Self { gilrs, buttons: 0, pressed: 0 }
        }

        /// Call once per frame before checking buttons
        pub fn poll(&mut self) {
            let Some(gilrs) = self.gilrs.as_mut() else { return };
            // Drain events so gilrs updates its cached button state
            while gilrs.next_event().is_some() {}

            let current = self.button_mask();
            self.pressed = super::pressed_edges(self.buttons, current);
            self.buttons = current;
        }

        pub fn has_gamepad(&self) -> bool {
            self.gilrs.as_ref().is_some_and(|g| g.gamepads().next().is_some())
        }

        fn button_mask(&self) -> u32 {
            let Some(gilrs) = self.gilrs.as_ref() else { return 0 };
            let Some((_, gp)) = gilrs.gamepads().next() else { return 0 };
            let mut mask = 0u32;

            if gp.is_pressed(GilrsButton::South) { mask |= 1 << super::button::A; }
            if gp.is_pressed(GilrsButton::Start) { mask |= 1 << super::button::START; }

            mask
        }

        /// Button went down since the previous poll
        pub fn is_button_pressed(&self, button: u32) -> bool {
            (self.pressed & (1 << button)) != 0
        }
    }

    impl Default for Gamepad {
        fn default() -> Self {
            Self::new()
        }
    }
}

// Re-export the platform-specific implementation
pub use platform::Gamepad;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressed_edges() {
        let a = 1 << button::A;
        let start = 1 << button::START;
        assert_eq!(pressed_edges(0, a), a);
        // Held since last poll: not a new press
        assert_eq!(pressed_edges(a, a), 0);
        assert_eq!(pressed_edges(a, a | start), start);
        assert_eq!(pressed_edges(a | start, 0), 0);
    }
}

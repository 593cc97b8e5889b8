//! Parallax Backdrop
//!
//! Three city layers scaled to the screen height and scrolled left at
//! different speeds. Each layer is drawn twice side by side and snaps back
//! to 0 once it has moved a full scaled width, giving an endless strip.

/// Far buildings (pixels/s)
pub const FAR_SPEED: f32 = 20.0;
/// Back buildings (pixels/s)
pub const MID_SPEED: f32 = 40.0;
/// Foreground (pixels/s)
pub const FORE_SPEED: f32 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxLayer {
    /// Scroll speed (pixels/s, leftward)
    pub speed: f32,
    /// Current offset of the first copy (always in `(-scaled_width, 0]`)
    pub x: f32,
}

impl ParallaxLayer {
    pub const fn new(speed: f32) -> Self {
        Self { speed, x: 0.0 }
    }

    /// Scroll by one tick; wraps once a full `scaled_width` has gone by
    pub fn scroll(&mut self, delta_time: f32, scaled_width: f32) {
        self.x -= self.speed * delta_time;
        if self.x <= -scaled_width {
            self.x = 0.0;
        }
    }

    /// X positions of the two copies covering the screen
    pub fn copies(&self, scaled_width: f32) -> [f32; 2] {
        [self.x, self.x + scaled_width]
    }
}

/// Uniform scale that fits a texture of `texture_height` to the screen height
pub fn fit_scale(screen_height: f32, texture_height: f32) -> f32 {
    if texture_height <= 0.0 {
        return 1.0;
    }
    screen_height / texture_height
}

/// The three layers, back to front
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backdrop {
    pub layers: [ParallaxLayer; 3],
}

impl Backdrop {
    pub const fn new() -> Self {
        Self {
            layers: [
                ParallaxLayer::new(FAR_SPEED),
                ParallaxLayer::new(MID_SPEED),
                ParallaxLayer::new(FORE_SPEED),
            ],
        }
    }

    /// Scroll every layer. `scaled_widths` is back to front like `layers`.
    pub fn scroll(&mut self, delta_time: f32, scaled_widths: [f32; 3]) {
        for (layer, width) in self.layers.iter_mut().zip(scaled_widths) {
            layer.scroll(delta_time, width);
        }
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_moves_left() {
        let mut layer = ParallaxLayer::new(80.0);
        layer.scroll(0.5, 1000.0);
        assert_eq!(layer.x, -40.0);
        assert_eq!(layer.copies(1000.0), [-40.0, 960.0]);
    }

    #[test]
    fn test_wraps_after_full_width() {
        let mut layer = ParallaxLayer::new(100.0);
        layer.scroll(2.0, 250.0);
        assert_eq!(layer.x, -200.0);
        layer.scroll(0.5, 250.0);
        assert_eq!(layer.x, 0.0);
    }

    #[test]
    fn test_layers_move_at_different_speeds() {
        let mut backdrop = Backdrop::new();
        backdrop.scroll(1.0, [10_000.0; 3]);
        let xs: Vec<f32> = backdrop.layers.iter().map(|l| l.x).collect();
        assert_eq!(xs, vec![-20.0, -40.0, -80.0]);
    }

    #[test]
    fn test_fit_scale() {
        assert_eq!(fit_scale(600.0, 192.0), 3.125);
        assert_eq!(fit_scale(600.0, 0.0), 1.0);
    }
}

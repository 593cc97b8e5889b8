//! Obstacle Field
//!
//! A fixed row of nebulae queued up off the right edge of the screen, all
//! drifting left at the same speed, followed by the finish line.

use super::anim::AnimData;
use super::world::WorldDims;

/// Number of nebulae in a round
pub const NEBULA_COUNT: usize = 10;
/// Horizontal gap between consecutive nebula spawns (pixels)
pub const NEBULA_SPACING: f32 = 300.0;
/// Shared scroll velocity (pixels/s)
pub const NEBULA_VELOCITY: f32 = -200.0;
/// Finish line distance past the last nebula (pixels)
pub const FINISH_LINE_OFFSET: f32 = 800.0;
/// Seconds per nebula animation frame
pub const NEBULA_FRAME_INTERVAL: f32 = 1.0 / 16.0;
/// Last frame index used from the nebula sheet row
pub const NEBULA_MAX_FRAME: usize = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleField {
    nebulae: [AnimData; NEBULA_COUNT],
    finish_line: f32,
}

impl ObstacleField {
    /// Lay out the nebulae and finish line for a fresh round
    pub fn spawn(dims: &WorldDims) -> Self {
        let (w, h) = dims.obstacle_frame;
        let y = dims.ground_y(h);
        let nebulae = std::array::from_fn(|i| {
            let x = dims.screen_width + i as f32 * NEBULA_SPACING;
            AnimData::new(w, h, (x, y), NEBULA_FRAME_INTERVAL)
        });
        let finish_line = nebulae[NEBULA_COUNT - 1].position.0 + FINISH_LINE_OFFSET;
        Self { nebulae, finish_line }
    }

    pub fn nebulae(&self) -> &[AnimData] {
        &self.nebulae
    }

    pub fn finish_line(&self) -> f32 {
        self.finish_line
    }

    /// Scroll every nebula and the finish line left by one tick
    pub fn scroll(&mut self, delta_time: f32) {
        let dx = NEBULA_VELOCITY * delta_time;
        for neb in &mut self.nebulae {
            neb.position.0 += dx;
        }
        self.finish_line += dx;
    }

    /// Step every nebula's animation
    pub fn animate(&mut self, delta_time: f32) {
        for neb in &mut self.nebulae {
            *neb = neb.advance(delta_time, NEBULA_MAX_FRAME);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims() -> WorldDims {
        WorldDims::from_sheets(800.0, 600.0, (768.0, 128.0), (800.0, 800.0))
    }

    #[test]
    fn test_spawn_staggered() {
        let field = ObstacleField::spawn(&dims());
        assert_eq!(field.nebulae().len(), NEBULA_COUNT);
        for (i, neb) in field.nebulae().iter().enumerate() {
            assert_eq!(neb.position, (800.0 + i as f32 * 300.0, 500.0));
            assert_eq!(neb.frame, 0);
            assert_eq!(neb.elapsed, 0.0);
        }
        // Last nebula at 800 + 9*300 = 3500
        assert_eq!(field.finish_line(), 4300.0);
    }

    #[test]
    fn test_scroll_moves_everything_together() {
        let mut field = ObstacleField::spawn(&dims());
        field.scroll(0.5);
        assert_eq!(field.nebulae()[0].position.0, 700.0);
        assert_eq!(field.nebulae()[9].position.0, 3400.0);
        assert_eq!(field.finish_line(), 4200.0);
        // Gap to the finish line never changes
        let gap = field.finish_line() - field.nebulae()[NEBULA_COUNT - 1].position.0;
        assert!((gap - FINISH_LINE_OFFSET).abs() < 1e-3);
    }

    #[test]
    fn test_animate_steps_all() {
        let mut field = ObstacleField::spawn(&dims());
        field.animate(NEBULA_FRAME_INTERVAL);
        assert!(field.nebulae().iter().all(|n| n.frame == 1));
    }
}

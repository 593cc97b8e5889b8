//! Sprite Sheet Animation
//!
//! Frame-stepped animation over a horizontal strip of a sprite sheet.
//! Each sprite keeps its own clock and flips to the next frame once the
//! accumulated time reaches its frame interval.

use crate::ui::Rect;

/// Animation and placement data for one sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimData {
    /// Source region of the sprite sheet currently shown
    pub frame_rect: Rect,
    /// Top-left corner on screen
    pub position: (f32, f32),
    /// Index of the frame that will be shown next
    pub frame: usize,
    /// Seconds each frame stays on screen
    pub frame_interval: f32,
    /// Seconds accumulated since the last frame change
    pub elapsed: f32,
}

impl AnimData {
    /// Create a sprite at `position` showing frame 0 of a sheet with
    /// `frame_w` x `frame_h` cells.
    pub fn new(frame_w: f32, frame_h: f32, position: (f32, f32), frame_interval: f32) -> Self {
        debug_assert!(frame_interval > 0.0, "frame interval must be positive");
        Self {
            frame_rect: Rect::new(0.0, 0.0, frame_w, frame_h),
            position,
            frame: 0,
            frame_interval,
            elapsed: 0.0,
        }
    }

    /// Screen-space rectangle covered by the current frame
    pub fn bounds(&self) -> Rect {
        self.frame_rect.at(self.position.0, self.position.1)
    }

    /// Step the animation clock by `delta_time`.
    ///
    /// When the interval elapses the clock restarts, the source rect jumps to
    /// the pending frame and the index moves on, wrapping past `max_frame`.
    pub fn advance(mut self, delta_time: f32, max_frame: usize) -> Self {
        self.elapsed += delta_time;
        if self.elapsed >= self.frame_interval {
            self.elapsed = 0.0;
            self.frame_rect.x = self.frame as f32 * self.frame_rect.w;
            self.frame += 1;
            if self.frame > max_frame {
                self.frame = 0;
            }
        }
        self
    }
}

//! Player Physics
//!
//! Vertical-only motion for the runner: constant gravity while off the
//! ground, an instantaneous jump impulse while on it. The ground is a floor
//! test, not a clamp; a fast fall can end a frame slightly below it and the
//! player simply stays there until the next jump.

use super::anim::AnimData;
use super::world::WorldDims;

/// Downward acceleration (pixels/s^2)
pub const GRAVITY: f32 = 1_000.0;
/// Velocity added by a jump (pixels/s, negative is up)
pub const JUMP_IMPULSE: f32 = -600.0;
/// Seconds per running-animation frame
pub const PLAYER_FRAME_INTERVAL: f32 = 1.0 / 12.0;
/// Last frame index of the running strip
pub const PLAYER_MAX_FRAME: usize = 5;

/// Is a sprite with its top at `position_y` standing on (or below) the ground?
pub fn is_on_ground(position_y: f32, sprite_height: f32, screen_height: f32) -> bool {
    position_y >= screen_height - sprite_height
}

/// The player sprite plus its vertical motion state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub sprite: AnimData,
    /// Vertical velocity (pixels/s)
    pub velocity: f32,
    /// True while gravity, not the ground, drives the velocity
    pub airborne: bool,
}

impl PlayerState {
    /// Standing on the ground, horizontally centered
    pub fn spawn(dims: &WorldDims) -> Self {
        let (w, h) = dims.player_frame;
        let position = (dims.screen_width / 2.0 - w / 2.0, dims.ground_y(h));
        Self {
            sprite: AnimData::new(w, h, position, PLAYER_FRAME_INTERVAL),
            velocity: 0.0,
            airborne: false,
        }
    }

    pub fn x(&self) -> f32 {
        self.sprite.position.0
    }

    pub fn y(&self) -> f32 {
        self.sprite.position.1
    }

    pub fn on_ground(&self, screen_height: f32) -> bool {
        is_on_ground(self.y(), self.sprite.frame_rect.h, screen_height)
    }

    /// Ground check for this tick: zero the velocity on the ground, otherwise
    /// accumulate gravity.
    pub fn apply_gravity(&mut self, delta_time: f32, screen_height: f32) {
        if self.on_ground(screen_height) {
            self.velocity = 0.0;
            self.airborne = false;
        } else {
            self.velocity += GRAVITY * delta_time;
            self.airborne = true;
        }
    }

    /// Add the jump impulse if grounded. Returns whether the jump happened.
    pub fn try_jump(&mut self) -> bool {
        if self.airborne {
            return false;
        }
        self.velocity += JUMP_IMPULSE;
        true
    }

    /// Move by this tick's velocity
    pub fn integrate(&mut self, delta_time: f32) {
        self.sprite.position.1 += self.velocity * delta_time;
    }

    /// Advance the running animation. Frozen mid-air.
    pub fn animate(&mut self, delta_time: f32) {
        if !self.airborne {
            self.sprite = self.sprite.advance(delta_time, PLAYER_MAX_FRAME);
        }
    }
}

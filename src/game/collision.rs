//! Collision System
//!
//! Box overlap between the player and each nebula. The nebula sprite has a
//! lot of transparent margin, so its hitbox is shrunk by a fixed padding on
//! every side. The player's hitbox is its full frame rect.

use crate::ui::Rect;
use super::anim::AnimData;

/// Inset applied to each side of a nebula's frame (pixels)
pub const NEBULA_HITBOX_PAD: f32 = 40.0;

/// Hitbox of a nebula at its current position
pub fn nebula_hitbox(nebula: &AnimData) -> Rect {
    let pad = NEBULA_HITBOX_PAD;
    Rect::new(
        nebula.position.0 + pad,
        nebula.position.1 + pad,
        nebula.frame_rect.w - 2.0 * pad,
        nebula.frame_rect.h - 2.0 * pad,
    )
}

/// Hitbox of the player at its current position
pub fn player_hitbox(player: &AnimData) -> Rect {
    player.bounds()
}

/// Round-level collision bookkeeping
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollisionJudge {
    /// Set on the first contact, cleared only by a reset
    pub collision: bool,
    /// Number of player/nebula overlaps counted this round
    pub collision_count: u32,
}

impl CollisionJudge {
    /// Test the player against every nebula.
    ///
    /// Returns true if this call registered the round's first contact, which
    /// is when the lose signal should fire.
    pub fn check(&mut self, player: &AnimData, nebulae: &[AnimData]) -> bool {
        let player_box = player_hitbox(player);
        let mut first_contact = false;
        for nebula in nebulae {
            if nebula_hitbox(nebula).intersects(&player_box) {
                self.collision = true;
                self.collision_count += 1;
                if self.collision_count <= 1 {
                    first_contact = true;
                }
            }
        }
        first_contact
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(x: f32, y: f32) -> AnimData {
        AnimData::new(128.0, 128.0, (x, y), 0.1)
    }

    fn nebula_at(x: f32, y: f32) -> AnimData {
        AnimData::new(100.0, 100.0, (x, y), 0.1)
    }

    #[test]
    fn test_nebula_hitbox_is_padded() {
        let hb = nebula_hitbox(&nebula_at(500.0, 500.0));
        assert_eq!(hb, Rect::new(540.0, 540.0, 20.0, 20.0));
    }

    #[test]
    fn test_player_hitbox_is_not_padded() {
        let hb = player_hitbox(&player_at(336.0, 472.0));
        assert_eq!(hb, Rect::new(336.0, 472.0, 128.0, 128.0));
    }

    #[test]
    fn test_sprite_overlap_inside_padding_is_not_a_hit() {
        let mut judge = CollisionJudge::default();
        // Frames overlap by 30px horizontally, but that is all transparent margin
        let player = player_at(336.0, 472.0);
        let nebula = nebula_at(336.0 + 128.0 - 30.0, 500.0);
        assert!(player.bounds().intersects(&nebula.bounds()));
        assert!(!judge.check(&player, &[nebula]));
        assert!(!judge.collision);
    }

    #[test]
    fn test_first_contact_fires_once() {
        let mut judge = CollisionJudge::default();
        let player = player_at(336.0, 472.0);
        let nebula = nebula_at(350.0, 500.0);

        assert!(judge.check(&player, &[nebula]));
        assert!(judge.collision);
        assert_eq!(judge.collision_count, 1);

        for _ in 0..5 {
            assert!(!judge.check(&player, &[nebula]));
        }
        assert_eq!(judge.collision_count, 6);
    }

    #[test]
    fn test_two_hits_in_one_tick_fire_once() {
        let mut judge = CollisionJudge::default();
        let player = player_at(336.0, 472.0);
        let nebulae = [nebula_at(300.0, 500.0), nebula_at(380.0, 500.0)];
        assert!(judge.check(&player, &nebulae));
        assert_eq!(judge.collision_count, 2);
    }

    #[test]
    fn test_collision_is_sticky() {
        let mut judge = CollisionJudge::default();
        let player = player_at(336.0, 472.0);
        judge.check(&player, &[nebula_at(350.0, 500.0)]);

        // Nebula gone past the player
        assert!(!judge.check(&player, &[nebula_at(-500.0, 500.0)]));
        assert!(judge.collision);
    }
}

//! Round Runtime
//!
//! Owns everything that changes during a round and steps it once per frame.
//! The loop is plain state in, state out: the caller supplies a `FrameInput`
//! and afterwards drains `events` and draws whatever `GameState` now holds.

use super::collision::CollisionJudge;
use super::event::{EventQueue, GameEvent};
use super::obstacles::ObstacleField;
use super::physics::PlayerState;
use super::world::WorldDims;

/// How the current round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundOutcome {
    #[default]
    Playing,
    /// Hit a nebula
    Lost,
    /// Crossed the finish line cleanly
    Won,
}

impl RoundOutcome {
    pub fn is_ended(self) -> bool {
        self != RoundOutcome::Playing
    }

    /// Overlay headline for an ended round
    pub fn message(self) -> Option<&'static str> {
        match self {
            RoundOutcome::Playing => None,
            RoundOutcome::Lost => Some("Game Over"),
            RoundOutcome::Won => Some("You Win!"),
        }
    }
}

/// Input sampled for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Seconds since the previous frame
    pub delta_time: f32,
    /// Jump was pressed this frame (edge, not held)
    pub jump: bool,
    /// Restart was requested this frame
    pub restart: bool,
}

/// Complete state of one round
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub dims: WorldDims,
    pub player: PlayerState,
    pub obstacles: ObstacleField,
    pub judge: CollisionJudge,
    pub outcome: RoundOutcome,
    /// Win signal already raised this round
    pub win_signal_fired: bool,
    /// Signals raised since the last drain
    pub events: EventQueue<GameEvent>,
}

impl GameState {
    pub fn new(dims: WorldDims) -> Self {
        Self {
            dims,
            player: PlayerState::spawn(&dims),
            obstacles: ObstacleField::spawn(&dims),
            judge: CollisionJudge::default(),
            outcome: RoundOutcome::Playing,
            win_signal_fired: false,
            events: EventQueue::new(),
        }
    }

    /// Run one frame. Simulates while playing; once the round has ended the
    /// world stays frozen and only a restart request is honoured.
    pub fn tick(&mut self, input: &FrameInput) {
        if self.outcome.is_ended() {
            if input.restart {
                self.reset();
            }
            return;
        }
        self.step(input.delta_time, input.jump);
    }

    /// Advance the world by `delta_time` and settle the round outcome
    fn step(&mut self, delta_time: f32, jump: bool) {
        let screen_height = self.dims.screen_height;

        self.player.apply_gravity(delta_time, screen_height);
        if jump && self.player.try_jump() {
            self.events.send(GameEvent::Jumped);
        }

        self.obstacles.scroll(delta_time);
        self.player.integrate(delta_time);

        self.player.animate(delta_time);
        self.obstacles.animate(delta_time);

        if self.judge.check(&self.player.sprite, self.obstacles.nebulae()) {
            self.events.send(GameEvent::Collided);
        }

        self.settle_outcome();
    }

    /// Collision beats the finish line when both happen on the same tick
    fn settle_outcome(&mut self) {
        if self.judge.collision {
            self.outcome = RoundOutcome::Lost;
            tracing::info!(contacts = self.judge.collision_count, "round lost");
        } else if self.player.x() > self.obstacles.finish_line() {
            self.outcome = RoundOutcome::Won;
            if !self.win_signal_fired {
                self.events.send(GameEvent::Won);
                self.win_signal_fired = true;
            }
            tracing::info!(finish_line = self.obstacles.finish_line(), "round won");
        } else {
            tracing::trace!(
                y = self.player.y(),
                velocity = self.player.velocity,
                finish_line = self.obstacles.finish_line(),
                "tick"
            );
        }
    }

    /// Start a new round with everything back at its spawn state
    pub fn reset(&mut self) {
        self.player = PlayerState::spawn(&self.dims);
        self.obstacles = ObstacleField::spawn(&self.dims);
        self.judge = CollisionJudge::default();
        self.win_signal_fired = false;
        self.outcome = RoundOutcome::Playing;
        self.events.clear();
        self.events.send(GameEvent::RoundReset);
        tracing::info!("round reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::obstacles::NEBULA_SPACING;

    const DT: f32 = 1.0 / 60.0;

    fn dims() -> WorldDims {
        WorldDims::from_sheets(800.0, 600.0, (768.0, 128.0), (800.0, 800.0))
    }

    fn frame(jump: bool) -> FrameInput {
        FrameInput { delta_time: DT, jump, restart: false }
    }

    fn restart() -> FrameInput {
        FrameInput { delta_time: DT, jump: false, restart: true }
    }

    fn count(state: &GameState, event: GameEvent) -> usize {
        state.events.iter().filter(|e| **e == event).count()
    }

    /// Run until the round ends or the frame budget runs out
    fn run_until_ended(state: &mut GameState, max_frames: usize) {
        for _ in 0..max_frames {
            state.tick(&frame(false));
            if state.outcome.is_ended() {
                return;
            }
        }
    }

    #[test]
    fn test_new_round_is_playing() {
        let state = GameState::new(dims());
        assert_eq!(state.outcome, RoundOutcome::Playing);
        assert!(!state.judge.collision);
        assert!(state.events.is_empty());
        assert_eq!(state.outcome.message(), None);
    }

    #[test]
    fn test_ground_invariant_holds_every_tick() {
        let mut state = GameState::new(dims());
        for i in 0..300 {
            let was_on_ground = state.player.on_ground(600.0);
            state.tick(&frame(i % 45 == 0));
            if state.outcome.is_ended() {
                break;
            }
            if was_on_ground && !state.events.iter().any(|e| *e == GameEvent::Jumped) {
                assert_eq!(state.player.velocity, 0.0);
            }
            state.events.clear();
        }
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let mut state = GameState::new(dims());
        state.tick(&frame(true));
        assert_eq!(count(&state, GameEvent::Jumped), 1);
        assert!(state.player.y() < 472.0);

        // Airborne presses are ignored
        let before = state.player.velocity;
        state.tick(&frame(true));
        assert_eq!(count(&state, GameEvent::Jumped), 1);
        assert!(state.player.velocity > before);

        // Jump lasts about 1.2s; give it 1.5s to come down
        for _ in 0..90 {
            state.tick(&frame(false));
        }
        assert!(state.player.on_ground(600.0));
        assert!(!state.player.airborne);
    }

    #[test]
    fn test_standing_still_loses() {
        let mut state = GameState::new(dims());
        run_until_ended(&mut state, 2_000);
        assert_eq!(state.outcome, RoundOutcome::Lost);
        assert_eq!(count(&state, GameEvent::Collided), 1);
        assert_eq!(state.outcome.message(), Some("Game Over"));
    }

    #[test]
    fn test_world_frozen_after_end() {
        let mut state = GameState::new(dims());
        run_until_ended(&mut state, 2_000);
        let frozen = state.clone();
        for _ in 0..30 {
            state.tick(&frame(true));
        }
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_collision_sticky_and_signal_once() {
        let mut state = GameState::new(dims());
        run_until_ended(&mut state, 2_000);
        assert!(state.judge.collision);

        // Nebulae moved far away: the round is still lost
        state.outcome = RoundOutcome::Playing;
        state.obstacles = ObstacleField::spawn(&state.dims);
        state.tick(&frame(false));
        assert!(state.judge.collision);
        assert_eq!(state.outcome, RoundOutcome::Lost);
        assert_eq!(count(&state, GameEvent::Collided), 1);
    }

    #[test]
    fn test_crossing_finish_line_wins_once() {
        let mut state = GameState::new(dims());
        // Last nebula at x=200, every hitbox already left of the player
        state.obstacles.scroll(16.5);
        let finish = state.obstacles.finish_line();
        assert!((finish - 1000.0).abs() < 1e-3);
        let frames_needed = ((finish - state.player.x()) / 200.0 / DT) as usize + 2;

        run_until_ended(&mut state, frames_needed);
        assert_eq!(state.outcome, RoundOutcome::Won);
        assert!(state.win_signal_fired);
        assert_eq!(count(&state, GameEvent::Won), 1);
        assert_eq!(count(&state, GameEvent::Collided), 0);
        assert_eq!(state.outcome.message(), Some("You Win!"));

        for _ in 0..10 {
            state.tick(&frame(false));
        }
        assert_eq!(count(&state, GameEvent::Won), 1);
    }

    #[test]
    fn test_collision_beats_finish_line_same_tick() {
        let mut state = GameState::new(dims());
        state.judge.collision = true;
        state.judge.collision_count = 1;
        state.player.sprite.position.0 = state.obstacles.finish_line() + 10.0;

        state.tick(&frame(false));
        assert_eq!(state.outcome, RoundOutcome::Lost);
        assert!(!state.win_signal_fired);
        assert_eq!(count(&state, GameEvent::Won), 0);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut state = GameState::new(dims());
        state.tick(&frame(false));
        let x = state.obstacles.nebulae()[0].position.0;
        state.tick(&restart());
        assert!(state.obstacles.nebulae()[0].position.0 < x);
        assert_eq!(count(&state, GameEvent::RoundReset), 0);
    }

    #[test]
    fn test_reset_matches_fresh_start() {
        let mut state = GameState::new(dims());
        state.tick(&frame(true));
        run_until_ended(&mut state, 2_000);
        assert!(state.outcome.is_ended());

        state.tick(&restart());
        assert_eq!(count(&state, GameEvent::RoundReset), 1);
        state.events.clear();
        assert_eq!(state, GameState::new(dims()));

        // Stays fresh no matter how many times the round is replayed
        run_until_ended(&mut state, 2_000);
        state.tick(&restart());
        state.events.clear();
        assert_eq!(state, GameState::new(dims()));
        assert_eq!(state.obstacles.nebulae()[1].position.0, 800.0 + NEBULA_SPACING);
    }
}

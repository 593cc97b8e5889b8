//! Game Simulation
//!
//! The runner itself: sprite animation, player physics, the scrolling
//! obstacle field, collision and the round state machine. Everything except
//! `renderer` is plain data and runs without a window, which is how the
//! tests drive it.
//!
//! Per-frame order while a round is playing:
//! 1. Gravity/ground check, then jump
//! 2. Scroll nebulae and finish line, integrate the player
//! 3. Advance animations (player only while grounded)
//! 4. Collision test
//! 5. Settle the round outcome

pub mod anim;
pub mod physics;
pub mod obstacles;
pub mod collision;
pub mod event;
pub mod parallax;
pub mod world;
pub mod runtime;
pub mod renderer;

// Re-export main types
pub use event::GameEvent;
pub use parallax::Backdrop;
pub use runtime::{FrameInput, GameState, RoundOutcome};
pub use world::WorldDims;

//! Game action definitions

/// Everything the player can ask the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Space / gamepad A
    Jump,
    /// Enter / gamepad Start / click on the restart button
    Restart,
    /// Escape
    Quit,
}

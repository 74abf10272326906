#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Advance the game by one tick.
    Tick,
    /// The windows were redrawn after a tick.
    WindowsUpdated,
}

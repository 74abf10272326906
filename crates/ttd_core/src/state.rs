/// Ticks between two sync checkpoints; one in-game day.
pub const SYNC_INTERVAL_TICKS: u64 = 74;

const DEFAULT_SEED: u64 = 0x5EED_0F_7EA1;

/// Deterministic stand-in for the simulation state: two instances fed the
/// same messages always end up with the same checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    tick: u64,
    checksum: u64,
    window_updates: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            tick: 0,
            checksum: seed,
            window_updates: 0,
        }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn checksum(&self) -> u64 {
        self.checksum
    }

    pub fn window_updates(&self) -> u64 {
        self.window_updates
    }

    pub(crate) fn advance(&mut self) {
        self.tick += 1;
        self.checksum = (self.checksum ^ self.tick)
            .wrapping_mul(0x9E37_79B9_7F4A_7C15)
            .rotate_left(17);
    }

    pub(crate) fn mark_windows_updated(&mut self) {
        self.window_updates += 1;
    }
}

use ttd_core::{update, Effect, GameState, Msg};
use ttd_debug::{debug, log_desync_msg, TicToc, TicTocState};

use crate::GameLoop;

static GAME_LOOP_PROFILE: TicTocState = TicTocState::new("GameLoop", 1000);

/// Feeds driver callbacks into the game state and carries out the effects.
#[derive(Debug, Default)]
pub struct GameRunner {
    state: GameState,
    checkpoints: Vec<(u64, u64)>,
}

impl GameRunner {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            checkpoints: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// `(tick, checksum)` of every sync checkpoint so far.
    pub fn checkpoints(&self) -> &[(u64, u64)] {
        &self.checkpoints
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::SyncCheckpoint { tick, checksum } => {
                debug!(Desync, 2, "sync: {:08}; {:016x}", tick, checksum);
                log_desync_msg(format!("sync checkpoint {checksum:016x}"));
                self.checkpoints.push((tick, checksum));
            }
        }
    }
}

impl GameLoop for GameRunner {
    fn game_loop(&mut self) {
        let _tt = TicToc::new(&GAME_LOOP_PROFILE);
        self.dispatch(Msg::Tick);
    }

    fn update_windows(&mut self) {
        self.dispatch(Msg::WindowsUpdated);
    }
}

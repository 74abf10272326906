use ttd_debug::{debug, set_sim_tick};

use crate::{Effect, GameState, Msg, SYNC_INTERVAL_TICKS};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: GameState, msg: Msg) -> (GameState, Vec<Effect>) {
    let effects = match msg {
        Msg::Tick => {
            state.advance();
            set_sim_tick(state.tick());
            debug!(Misc, 6, "tick {} checksum {:016x}", state.tick(), state.checksum());
            if state.tick() % SYNC_INTERVAL_TICKS == 0 {
                vec![Effect::SyncCheckpoint {
                    tick: state.tick(),
                    checksum: state.checksum(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::WindowsUpdated => {
            state.mark_windows_updated();
            Vec::new()
        }
    };

    (state, effects)
}

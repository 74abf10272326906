//! Core game types: map geometry, tunnel/bridge helpers and the deterministic
//! tick state driven by the video drivers.
mod effect;
mod msg;
mod state;
mod tile;
mod tunnelbridge;
mod update;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{GameState, SYNC_INTERVAL_TICKS};
pub use tile::{MapSize, MapSizeError, TileIndex, MAX_MAP_SIZE_BITS, MIN_MAP_SIZE_BITS};
pub use tunnelbridge::tunnel_bridge_length;
pub use update::update;

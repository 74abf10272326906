use crate::{MapSize, TileIndex};

/// Length of the middle part of a tunnel or bridge, end tiles excluded.
///
/// `begin` and `end` are expected on one axis; identical tiles give 0.
pub fn tunnel_bridge_length(map: &MapSize, begin: TileIndex, end: TileIndex) -> u32 {
    let start = i64::from(map.tile_x(begin)) + i64::from(map.tile_y(begin));
    let finish = i64::from(map.tile_x(end)) + i64::from(map.tile_y(end));
    let span = (finish - start).unsigned_abs();
    span.saturating_sub(1) as u32
}

use std::fmt;

use thiserror::Error;

/// Smallest supported map edge, as a power of two (64 tiles).
pub const MIN_MAP_SIZE_BITS: u8 = 6;
/// Largest supported map edge, as a power of two (4096 tiles).
pub const MAX_MAP_SIZE_BITS: u8 = 12;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("map size 2^{log_x} x 2^{log_y} out of range")]
pub struct MapSizeError {
    pub log_x: u8,
    pub log_y: u8,
}

/// Index of a tile: `y << log_x | x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileIndex(pub u32);

impl fmt::Display for TileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

/// Map dimensions, both edges powers of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapSize {
    log_x: u8,
    log_y: u8,
}

impl MapSize {
    pub fn new(log_x: u8, log_y: u8) -> Result<Self, MapSizeError> {
        let valid = MIN_MAP_SIZE_BITS..=MAX_MAP_SIZE_BITS;
        if !valid.contains(&log_x) || !valid.contains(&log_y) {
            return Err(MapSizeError { log_x, log_y });
        }
        Ok(Self { log_x, log_y })
    }

    pub fn size_x(&self) -> u32 {
        1 << self.log_x
    }

    pub fn size_y(&self) -> u32 {
        1 << self.log_y
    }

    pub fn tile_x(&self, tile: TileIndex) -> u32 {
        tile.0 & (self.size_x() - 1)
    }

    pub fn tile_y(&self, tile: TileIndex) -> u32 {
        tile.0 >> self.log_x
    }

    /// Tile at `(x, y)`, or `None` outside the map.
    pub fn tile_xy(&self, x: u32, y: u32) -> Option<TileIndex> {
        if x >= self.size_x() || y >= self.size_y() {
            return None;
        }
        Some(TileIndex((y << self.log_x) | x))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// State checksum to record for desync detection.
    SyncCheckpoint { tick: u64, checksum: u64 },
}

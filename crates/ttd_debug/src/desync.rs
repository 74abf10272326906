use std::collections::VecDeque;
use std::fmt::Write;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::{get_sim_tick, BoundedWriter};

/// Number of entries kept before the oldest ones are dropped.
pub const DEFAULT_DESYNC_LOG_CAPACITY: usize = 1024;

const HEADER: &str = "Desync Messages:\n";

/// Breadcrumbs recorded during lockstep ticks, dumped when a desync is found.
///
/// Entries are tagged with the simulation tick of the appending thread. The
/// log keeps at most `capacity` entries and drops the oldest beyond that.
#[derive(Debug)]
pub struct DesyncLog {
    entries: Mutex<VecDeque<String>>,
    capacity: usize,
}

impl Default for DesyncLog {
    fn default() -> Self {
        Self::new()
    }
}

impl DesyncLog {
    /// Empty log holding up to [`DEFAULT_DESYNC_LOG_CAPACITY`] entries.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_DESYNC_LOG_CAPACITY)
    }

    /// `capacity` below 1 is treated as 1.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
            capacity: capacity.max(1),
        }
    }

    /// Maximum number of entries kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Adds `message`, tagged with the current simulation tick. The oldest
    /// entry goes if the log is full.
    pub fn append(&self, message: impl AsRef<str>) {
        let entry = format!("[tick {}] {}", get_sim_tick(), message.as_ref());
        let mut entries = self.lock();
        while entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the log has no entries.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the current entries, oldest first.
    pub fn snapshot(&self) -> Vec<String> {
        self.lock().iter().cloned().collect()
    }

    /// Renders the log into `writer`, cutting it off where the buffer ends.
    /// Nothing is written for an empty log. Returns the write cursor.
    pub fn dump(&self, writer: &mut BoundedWriter<'_>) -> usize {
        let entries = self.snapshot();
        if !entries.is_empty() {
            writer.push_str(HEADER);
            for entry in &entries {
                let _ = writeln!(writer, "{entry}");
            }
            writer.push_str("\n");
        }
        writer.position()
    }

    /// Same output as [`Self::dump`] without a size limit.
    pub fn to_report_string(&self) -> String {
        let entries = self.snapshot();
        let mut out = String::new();
        if !entries.is_empty() {
            out.push_str(HEADER);
            for entry in &entries {
                out.push_str(entry);
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

static DESYNC_LOG: OnceLock<DesyncLog> = OnceLock::new();

/// Process-wide desync log.
pub fn desync_log() -> &'static DesyncLog {
    DESYNC_LOG.get_or_init(DesyncLog::new)
}

use std::fmt::Write;

use chrono::Local;

use crate::BoundedWriter;

/// Capacity of the prefix buffer; `"[YYYY-MM-DD HH:MM:SS] "` needs 22 bytes.
pub const LOG_PREFIX_CAPACITY: usize = 24;

/// Small reusable buffer for the text put in front of every log line.
#[derive(Debug, Clone)]
pub struct LogPrefix {
    buffer: [u8; LOG_PREFIX_CAPACITY],
    len: usize,
}

impl Default for LogPrefix {
    fn default() -> Self {
        Self::new()
    }
}

impl LogPrefix {
    /// Empty prefix buffer.
    pub const fn new() -> Self {
        Self {
            buffer: [0; LOG_PREFIX_CAPACITY],
            len: 0,
        }
    }

    /// Renders the prefix: the local date and time when `show_date` is set,
    /// otherwise an empty string. Never longer than [`LOG_PREFIX_CAPACITY`].
    pub fn get(&mut self, show_date: bool) -> &str {
        let mut writer = BoundedWriter::new(&mut self.buffer);
        if show_date {
            let _ = write!(writer, "[{}] ", Local::now().format("%Y-%m-%d %H:%M:%S"));
        }
        self.len = writer.position();
        std::str::from_utf8(&self.buffer[..self.len]).unwrap_or_default()
    }
}

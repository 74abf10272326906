#![deny(missing_docs)]
//! Debugging and diagnostics facility.
//!
//! Debug messages are filed under a [`Category`] and a level. Level 0 is for
//! errors and severe warnings and is always shown; higher levels are only
//! shown when the category is configured at least that high:
//!
//! * 0 - errors or severe warnings
//! * 1 - other non-fatal, non-severe warnings
//! * 2 - crude progress indicator of functionality
//! * 3 - important debugging messages (function entry)
//! * 4 - debugging messages (crude loop status, etc.)
//! * 5 - detailed debugging information
//! * 6.. - extremely detailed spamming
//!
//! The crate also holds the TicToc profiler, the desync message log and the
//! savegame/loadgame debug tags.

mod bounded;
mod category;
mod config;
mod desync;
mod facility;
mod prefix;
mod tags;
mod tictoc;

use std::cell::Cell;

pub use bounded::BoundedWriter;
pub use category::Category;
pub use config::{parse_debug_string, DebugStringError, LevelAssignment, ParsedDebugString};
pub use desync::{desync_log, DesyncLog, DEFAULT_DESYNC_LOG_CAPACITY};
pub use facility::{
    dump_facility_names, facility, install_facility, show_info, CapturedLine, DebugFacility,
    DebugLevels, DebugSink, DebugStringReport, LogFacadeSink, MemorySink, StderrSink,
};
pub use prefix::{LogPrefix, LOG_PREFIX_CAPACITY};
pub use tags::{debug_tags, DebugTagValues, DebugTags};
pub use tictoc::{TicToc, TicTocReport, TicTocState};

thread_local! {
    /// Thread-local storage for the current simulation tick count.
    static SIM_TICK: Cell<u64> = const { Cell::new(0) };
}

/// Sets the simulation tick count for the current thread.
/// This should be called by the game loop once per tick.
pub fn set_sim_tick(tick: u64) {
    SIM_TICK.with(|v| v.set(tick));
}

/// Retrieves the simulation tick count for the current thread.
/// Returns 0 if the tick has not been set.
pub fn get_sim_tick() -> u64 {
    SIM_TICK.with(|v| v.get())
}

/// Outputs a line of debugging information on the process-wide facility.
///
/// ```
/// ttd_debug::debug!(Net, 2, "connected to {}", "server");
/// ```
///
/// The format arguments are only evaluated when the line is shown.
#[macro_export]
macro_rules! debug {
    ($category:ident, $level:expr, $($arg:tt)*) => {
        $crate::debug_to!($crate::facility(), $category, $level, $($arg)*)
    };
}

/// Same as [`debug!`], on an explicitly given [`DebugFacility`].
#[macro_export]
macro_rules! debug_to {
    ($facility:expr, $category:ident, $level:expr, $($arg:tt)*) => {{
        let facility: &$crate::DebugFacility = $facility;
        let level: u8 = $level;
        if facility.enabled($crate::Category::$category, level) {
            facility.emit($crate::Category::$category, level, format_args!($($arg)*));
        }
    }};
}

/// Appends a message to the process-wide desync log.
pub fn log_desync_msg(message: impl AsRef<str>) {
    desync_log().append(message);
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Debug levels do the filtering; let everything through.
    let level = log::LevelFilter::Trace;

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

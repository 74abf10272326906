use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};

use crate::config::{parse_debug_string, DebugStringError, LevelAssignment};
use crate::{BoundedWriter, Category, LogPrefix};

/// Per-category verbosity table. All levels start at 0.
#[derive(Debug)]
pub struct DebugLevels {
    levels: [AtomicU8; Category::COUNT],
}

impl Default for DebugLevels {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugLevels {
    /// Table with every category at level 0.
    pub const fn new() -> Self {
        Self {
            levels: [const { AtomicU8::new(0) }; Category::COUNT],
        }
    }

    /// Configured level of `category`.
    pub fn get(&self, category: Category) -> u8 {
        self.levels[category.index()].load(Ordering::Relaxed)
    }

    /// Sets the level of one category.
    pub fn set(&self, category: Category, level: u8) {
        self.levels[category.index()].store(level, Ordering::Relaxed);
    }

    /// Sets every category to `level`.
    pub fn set_all(&self, level: u8) {
        for slot in &self.levels {
            slot.store(level, Ordering::Relaxed);
        }
    }

    /// Level 0 is always shown; anything else needs a configured level at
    /// least as high.
    pub fn enabled(&self, category: Category, level: u8) -> bool {
        level == 0 || self.get(category) >= level
    }
}

/// Destination for formatted debug lines.
///
/// Implementations must serialize concurrent calls themselves.
pub trait DebugSink: Send + Sync {
    /// Outputs one fully formatted line.
    fn emit(&self, category: Category, level: u8, line: &str);
}

/// Writes debug lines to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DebugSink for StderrSink {
    fn emit(&self, _category: Category, _level: u8, line: &str) {
        eprintln!("{line}");
    }
}

/// Forwards debug lines to the `log` facade, using the category name as target.
///
/// While no `log` logger is installed the lines go to a fallback sink
/// instead, [`StderrSink`] by default.
pub struct LogFacadeSink {
    fallback: Box<dyn DebugSink>,
}

impl Default for LogFacadeSink {
    fn default() -> Self {
        Self::with_fallback(StderrSink)
    }
}

impl fmt::Debug for LogFacadeSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogFacadeSink").finish_non_exhaustive()
    }
}

impl LogFacadeSink {
    /// Facade sink falling back to stderr.
    pub fn new() -> Self {
        Self::default()
    }

    /// Facade sink that hands lines to `fallback` while no logger is installed.
    pub fn with_fallback(fallback: impl DebugSink + 'static) -> Self {
        Self {
            fallback: Box::new(fallback),
        }
    }

    /// Maps a debug level onto a `log` severity.
    pub fn log_level(level: u8) -> log::Level {
        match level {
            0 => log::Level::Error,
            1 => log::Level::Warn,
            2 => log::Level::Info,
            3 | 4 => log::Level::Debug,
            _ => log::Level::Trace,
        }
    }
}

impl DebugSink for LogFacadeSink {
    fn emit(&self, category: Category, level: u8, line: &str) {
        // The max level stays `Off` until a logger is set.
        if log::max_level() == log::LevelFilter::Off {
            self.fallback.emit(category, level, line);
            return;
        }
        log::log!(target: category.name(), Self::log_level(level), "{}", line);
    }
}

/// A single line captured by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLine {
    /// Category the line was logged under.
    pub category: Category,
    /// Level the line was logged at.
    pub level: u8,
    /// The formatted line, prefix included.
    pub line: String,
}

/// Keeps every emitted line in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<CapturedLine>>,
}

impl MemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything captured so far.
    pub fn take(&self) -> Vec<CapturedLine> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }
}

impl DebugSink for MemorySink {
    fn emit(&self, category: Category, level: u8, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(CapturedLine {
                category,
                level,
                line: line.to_string(),
            });
    }
}

impl<S: DebugSink + ?Sized> DebugSink for std::sync::Arc<S> {
    fn emit(&self, category: Category, level: u8, line: &str) {
        (**self).emit(category, level, line);
    }
}

/// Outcome of [`DebugFacility::configure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugStringReport {
    /// Requested output file, if the string contained `file=...`.
    pub redirect: Option<PathBuf>,
    /// Tokens that were skipped.
    pub errors: Vec<DebugStringError>,
    /// The level table after applying the string, as [`DebugFacility::debug_string`].
    pub effective: String,
}

/// Level table plus output sink: everything needed to decide on and emit a
/// debug line.
pub struct DebugFacility {
    levels: DebugLevels,
    show_date_in_logs: AtomicBool,
    sink: Box<dyn DebugSink>,
}

impl Default for DebugFacility {
    fn default() -> Self {
        Self::new(Box::new(LogFacadeSink::new()))
    }
}

impl fmt::Debug for DebugFacility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebugFacility")
            .field("levels", &self.debug_string())
            .field("show_date_in_logs", &self.show_date_in_logs())
            .finish_non_exhaustive()
    }
}

impl DebugFacility {
    /// Facility with every level at 0 that writes to `sink`.
    pub fn new(sink: Box<dyn DebugSink>) -> Self {
        Self {
            levels: DebugLevels::new(),
            show_date_in_logs: AtomicBool::new(false),
            sink,
        }
    }

    /// The level table.
    pub fn levels(&self) -> &DebugLevels {
        &self.levels
    }

    /// Configured level of `category`.
    pub fn level(&self, category: Category) -> u8 {
        self.levels.get(category)
    }

    /// Sets the level of one category.
    pub fn set_level(&self, category: Category, level: u8) {
        self.levels.set(category, level);
    }

    /// Whether a line at `level` in `category` would be shown.
    pub fn enabled(&self, category: Category, level: u8) -> bool {
        self.levels.enabled(category, level)
    }

    /// Whether lines get a date prefix.
    pub fn show_date_in_logs(&self) -> bool {
        self.show_date_in_logs.load(Ordering::Relaxed)
    }

    /// Turns the date prefix on or off.
    pub fn set_show_date_in_logs(&self, show: bool) {
        self.show_date_in_logs.store(show, Ordering::Relaxed);
    }

    /// Applies a debug string to the level table. Problems are reported back
    /// and logged as `misc` level 0 warnings; they never stop the rest of the
    /// string from being applied.
    pub fn configure(&self, input: &str) -> DebugStringReport {
        let parsed = parse_debug_string(input);

        for assignment in &parsed.assignments {
            match *assignment {
                LevelAssignment::All(level) => self.levels.set_all(level),
                LevelAssignment::One(category, level) => self.levels.set(category, level),
            }
        }
        for error in &parsed.errors {
            crate::debug_to!(self, Misc, 0, "Ignoring debug setting: {}", error);
        }

        DebugStringReport {
            redirect: parsed.redirect,
            errors: parsed.errors,
            effective: self.debug_string(),
        }
    }

    /// Current levels as `"driver=0, grf=0, ..."`, accepted by [`Self::configure`].
    pub fn debug_string(&self) -> String {
        Category::ALL
            .iter()
            .map(|&category| format!("{}={}", category.name(), self.level(category)))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Formats and emits one line. Callers are expected to have checked
    /// [`Self::enabled`] first; the `debug!` macros do.
    pub fn emit(&self, category: Category, level: u8, args: fmt::Arguments<'_>) {
        let mut prefix = LogPrefix::new();
        let prefix = prefix.get(self.show_date_in_logs());
        let line = format!("{prefix}dbg: [{category}:{level}] {args}");
        self.sink.emit(category, level, &line);
    }
}

static FACILITY: OnceLock<DebugFacility> = OnceLock::new();

/// Process-wide facility used by [`debug!`](crate::debug). Created with a
/// [`LogFacadeSink`] on first use unless [`install_facility`] ran earlier.
pub fn facility() -> &'static DebugFacility {
    FACILITY.get_or_init(DebugFacility::default)
}

/// Installs the process-wide facility. Fails, handing the facility back, if
/// one is already in place.
pub fn install_facility(facility: DebugFacility) -> Result<(), DebugFacility> {
    FACILITY.set(facility)
}

/// Writes the list of category names, e.g. for `--help` output. Returns the
/// write cursor.
pub fn dump_facility_names(writer: &mut BoundedWriter<'_>) -> usize {
    for (i, category) in Category::ALL.iter().enumerate() {
        if i == 0 {
            writer.push_str("List of debug facility names:\n");
        } else {
            writer.push_str(", ");
        }
        writer.push_str(category.name());
    }
    if !Category::ALL.is_empty() {
        writer.push_str("\n\n");
    }
    writer.position()
}

/// Shows an informational message to the user regardless of debug levels.
pub fn show_info(text: &str) {
    eprintln!("{text}");
}

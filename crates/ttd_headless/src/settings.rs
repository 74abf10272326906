use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use ttd_debug::{parse_debug_string, show_info};

use crate::{AtomicFileWriter, PersistError};

/// Default settings file name, looked up in the working directory.
pub const SETTINGS_FILENAME: &str = "headless.ron";

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogDestination {
    /// Write to the log file only.
    File,
    /// Write to terminal (stdout).
    #[default]
    Terminal,
    /// Write to both file and terminal.
    Both,
}

/// Settings of a headless run, read from a RON file and overridable from the
/// command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadlessSettings {
    /// Debug string, e.g. `"net=2, misc=1"`.
    pub debug: String,
    /// Video driver selection, e.g. `"null:ticks=1000"`.
    pub video: String,
    pub resolution: (u32, u32),
    pub show_date_in_logs: bool,
    pub log_destination: LogDestination,
    pub log_file: PathBuf,
    /// Separate file for the `desync` category, if any.
    pub desync_log_file: Option<PathBuf>,
    /// Directory that receives the desync report after the run.
    pub report_dir: Option<PathBuf>,
}

impl Default for HeadlessSettings {
    fn default() -> Self {
        Self {
            debug: String::new(),
            video: "null".to_string(),
            resolution: (640, 480),
            show_date_in_logs: false,
            log_destination: LogDestination::Terminal,
            log_file: PathBuf::from("./openttd.log"),
            desync_log_file: None,
            report_dir: None,
        }
    }
}

impl HeadlessSettings {
    /// Where the log goes once a `file=PATH` entry in the debug string is taken
    /// into account. A redirect turns terminal-only logging into file logging
    /// and replaces the configured log file.
    pub fn effective_log_target(&self) -> (LogDestination, PathBuf) {
        match parse_debug_string(&self.debug).redirect {
            Some(path) => {
                let destination = match self.log_destination {
                    LogDestination::Both => LogDestination::Both,
                    LogDestination::File | LogDestination::Terminal => LogDestination::File,
                };
                (destination, path)
            }
            None => (self.log_destination, self.log_file.clone()),
        }
    }
}

/// Reads settings from `path`. A missing file gives the defaults; an unreadable
/// or malformed one is reported and also gives the defaults.
pub fn load_settings(path: &Path) -> HeadlessSettings {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return HeadlessSettings::default();
        }
        Err(err) => {
            show_info(&format!("Failed to read settings from {:?}: {}", path, err));
            return HeadlessSettings::default();
        }
    };

    match ron::from_str(&content) {
        Ok(settings) => settings,
        Err(err) => {
            show_info(&format!("Failed to parse settings from {:?}: {}", path, err));
            HeadlessSettings::default()
        }
    }
}

/// Writes `settings` as pretty RON to `dir/filename`.
pub fn save_settings(
    dir: &Path,
    filename: &str,
    settings: &HeadlessSettings,
) -> Result<PathBuf, PersistError> {
    let pretty = ron::ser::PrettyConfig::new();
    let content =
        ron::ser::to_string_pretty(settings, pretty).map_err(|e| PersistError::Serialize {
            what: "settings",
            reason: e.to_string(),
        })?;
    AtomicFileWriter::new(dir).write(filename, &content)
}

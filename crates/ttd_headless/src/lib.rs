//! Headless runs: the null video driver, its parameters, run settings and the
//! desync report.
mod driver;
mod params;
mod persist;
mod report;
mod runner;
mod settings;

pub use driver::{
    start_video_driver, GameLoop, NullVideoDriver, Screen, VideoDriver, DEFAULT_NULL_TICKS,
};
pub use params::{DriverError, DriverParams};
pub use persist::{ensure_dir, AtomicFileWriter, PersistError};
pub use report::{
    build_desync_report, dump_desync_report, write_desync_report, DESYNC_REPORT_CAPACITY,
    DESYNC_REPORT_FILENAME,
};
pub use runner::GameRunner;
pub use settings::{
    load_settings, save_settings, HeadlessSettings, LogDestination, SETTINGS_FILENAME,
};

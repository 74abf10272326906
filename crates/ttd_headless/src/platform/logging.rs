//! Platform logging initialization for the headless binary.
//!
//! Debug levels decide what gets logged, so every logger here lets all levels
//! through. Lines of the `desync` category can be split off into their own
//! file.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use ttd_debug::Category;
use ttd_headless::LogDestination;

/// Initialize the logger with the specified destination.
///
/// For `LogDestination::File` or `Both`, creates `log_file`; if that fails,
/// `File` falls back to the terminal. When `desync_file` is given, `desync`
/// lines go only there.
pub fn initialize(destination: LogDestination, log_file: &Path, desync_file: Option<&Path>) {
    let level = LevelFilter::Trace;
    let desync_target = Category::Desync.name();

    let config = build_config(desync_file.is_some().then_some(desync_target));

    let mut loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::File => match create_file_logger(level, config.clone(), log_file) {
            Some(file_logger) => vec![file_logger as Box<dyn SharedLogger>],
            // Level-0 lines must still reach someone.
            None => vec![term_logger(level, config) as Box<dyn SharedLogger>],
        },
        LogDestination::Terminal => vec![term_logger(level, config)],
        LogDestination::Both => {
            let mut loggers: Vec<Box<dyn SharedLogger>> =
                vec![term_logger(level, config.clone())];
            if let Some(file_logger) = create_file_logger(level, config, log_file) {
                loggers.push(file_logger);
            }
            loggers
        }
    };

    if let Some(path) = desync_file {
        let mut builder = base_config();
        builder.add_filter_allow_str(desync_target);
        if let Some(desync_logger) = create_file_logger(level, builder.build(), path) {
            loggers.push(desync_logger);
        }
    }

    let _ = CombinedLogger::init(loggers);
}

fn term_logger(level: LevelFilter, config: Config) -> Box<TermLogger> {
    TermLogger::new(level, config, TerminalMode::Mixed, ColorChoice::Auto)
}

fn base_config() -> ConfigBuilder {
    // The debug facility writes its own prefix and category tag.
    let mut builder = ConfigBuilder::new();
    builder
        .set_time_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off);
    builder
}

fn build_config(ignored_target: Option<&'static str>) -> Config {
    let mut builder = base_config();
    if let Some(target) = ignored_target {
        builder.add_filter_ignore_str(target);
    }
    builder.build()
}

fn create_file_logger(
    level: LevelFilter,
    config: Config,
    path: &Path,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}

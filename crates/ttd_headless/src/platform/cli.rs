use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use ttd_headless::{HeadlessSettings, LogDestination, SETTINGS_FILENAME};

#[derive(Parser, Debug)]
#[command(name = "ttd_headless")]
#[command(about = "Run the game without rendering for a fixed number of ticks")]
pub struct Cli {
    /// Debug string, e.g. "net=2, misc=1" or "3" for every category
    #[arg(short, long)]
    pub debug: Option<String>,

    /// Video driver and parameters, e.g. "null:ticks=500"
    #[arg(short, long)]
    pub video: Option<String>,

    /// Screen resolution as WIDTHxHEIGHT
    #[arg(short, long, value_parser = parse_resolution)]
    pub resolution: Option<(u32, u32)>,

    /// Settings file (RON)
    #[arg(long, default_value = SETTINGS_FILENAME)]
    pub settings: PathBuf,

    /// Where log lines go
    #[arg(long, value_enum)]
    pub log: Option<LogTarget>,

    /// Write desync category lines to this file
    #[arg(long)]
    pub desync_log: Option<PathBuf>,

    /// Write a desync report into this directory after the run
    #[arg(long)]
    pub report_dir: Option<PathBuf>,

    /// Prefix log lines with the date and time
    #[arg(long)]
    pub show_date: bool,

    /// Print the debug category names and exit
    #[arg(long)]
    pub list_categories: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogTarget {
    Terminal,
    File,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

impl Cli {
    /// Command-line values win over the settings file.
    pub fn apply_to(&self, settings: &mut HeadlessSettings) {
        if let Some(debug) = &self.debug {
            settings.debug = debug.clone();
        }
        if let Some(video) = &self.video {
            settings.video = video.clone();
        }
        if let Some(resolution) = self.resolution {
            settings.resolution = resolution;
        }
        if let Some(log) = self.log {
            settings.log_destination = log.into();
        }
        if let Some(path) = &self.desync_log {
            settings.desync_log_file = Some(path.clone());
        }
        if let Some(dir) = &self.report_dir {
            settings.report_dir = Some(dir.clone());
        }
        if self.show_date {
            settings.show_date_in_logs = true;
        }
    }
}

fn parse_resolution(value: &str) -> Result<(u32, u32), String> {
    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{value}'"))?;
    let width = w.trim().parse().map_err(|_| format!("invalid width '{w}'"))?;
    let height = h.trim().parse().map_err(|_| format!("invalid height '{h}'"))?;
    Ok((width, height))
}

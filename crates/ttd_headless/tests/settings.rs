use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use ttd_headless::{load_settings, save_settings, HeadlessSettings, LogDestination};

#[test]
fn missing_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let settings = load_settings(&temp.path().join("absent.ron"));
    assert_eq!(settings, HeadlessSettings::default());
    assert_eq!(settings.video, "null");
}

#[test]
fn malformed_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.ron");
    fs::write(&path, "(debug: ").unwrap();
    assert_eq!(load_settings(&path), HeadlessSettings::default());
}

#[test]
fn partial_file_fills_in_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("partial.ron");
    fs::write(&path, r#"(debug: "net=2", log_destination: Both)"#).unwrap();

    let settings = load_settings(&path);
    assert_eq!(settings.debug, "net=2");
    assert_eq!(settings.log_destination, LogDestination::Both);
    assert_eq!(settings.resolution, (640, 480));
}

#[test]
fn saved_settings_load_back() {
    let temp = TempDir::new().unwrap();
    let settings = HeadlessSettings {
        debug: "desync=3".to_string(),
        video: "null:ticks=20".to_string(),
        resolution: (320, 200),
        show_date_in_logs: true,
        log_destination: LogDestination::File,
        log_file: PathBuf::from("run.log"),
        desync_log_file: Some(PathBuf::from("commands-out.log")),
        report_dir: None,
    };

    let path = save_settings(temp.path(), "headless.ron", &settings).unwrap();
    assert_eq!(load_settings(&path), settings);
}

#[test]
fn file_redirect_in_debug_string_turns_on_file_logging() {
    let settings = HeadlessSettings {
        debug: "file=redirected.log misc=1".to_string(),
        ..HeadlessSettings::default()
    };
    assert_eq!(settings.log_destination, LogDestination::Terminal);
    assert_eq!(
        settings.effective_log_target(),
        (LogDestination::File, PathBuf::from("redirected.log"))
    );

    let both = HeadlessSettings {
        log_destination: LogDestination::Both,
        ..settings
    };
    assert_eq!(
        both.effective_log_target(),
        (LogDestination::Both, PathBuf::from("redirected.log"))
    );
}

#[test]
fn without_redirect_the_configured_target_is_kept() {
    let settings = HeadlessSettings {
        debug: "net=2".to_string(),
        log_file: PathBuf::from("run.log"),
        ..HeadlessSettings::default()
    };
    assert_eq!(
        settings.effective_log_target(),
        (LogDestination::Terminal, PathBuf::from("run.log"))
    );
}

use std::sync::Once;

use pretty_assertions::assert_eq;
use ttd_core::GameState;
use ttd_headless::{
    start_video_driver, DriverError, DriverParams, GameLoop, GameRunner, NullVideoDriver,
    VideoDriver, DEFAULT_NULL_TICKS,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(ttd_debug::initialize_for_tests);
}

#[derive(Default)]
struct CountingGame {
    calls: Vec<&'static str>,
}

impl GameLoop for CountingGame {
    fn game_loop(&mut self) {
        self.calls.push("tick");
    }

    fn update_windows(&mut self) {
        self.calls.push("windows");
    }
}

#[test]
fn runs_requested_number_of_ticks() {
    init_logging();
    let mut driver = NullVideoDriver::new((800, 600));
    driver.start(&DriverParams::new(["ticks=3"])).unwrap();

    let mut game = CountingGame::default();
    driver.main_loop(&mut game);

    assert_eq!(
        game.calls,
        vec!["tick", "windows", "tick", "windows", "tick", "windows"]
    );
}

#[test]
fn start_sets_screen_and_null_blitter() {
    init_logging();
    let mut driver = NullVideoDriver::new((1024, 768));
    driver.start(&DriverParams::default()).unwrap();

    assert_eq!(driver.ticks(), DEFAULT_NULL_TICKS);
    let screen = driver.screen();
    assert_eq!(screen.width, 1024);
    assert_eq!(screen.pitch, 1024);
    assert_eq!(screen.height, 768);
    assert_eq!(screen.blitter, "null");
    assert!(!screen.has_dst);
}

#[test]
fn invalid_ticks_fail_to_start() {
    let mut driver = NullVideoDriver::new((640, 480));
    assert!(driver.start(&DriverParams::new(["ticks=-4"])).is_err());
}

#[test]
fn resolution_and_fullscreen_changes_are_refused() {
    let mut driver = NullVideoDriver::new((640, 480));
    assert!(!driver.change_resolution(1920, 1080));
    assert!(!driver.toggle_fullscreen(true));
    driver.make_dirty(0, 0, 10, 10);
    driver.stop();
    assert_eq!(driver.name(), "null");
}

#[test]
fn zero_ticks_never_calls_the_game() {
    let mut driver = NullVideoDriver::new((640, 480));
    driver.start(&DriverParams::new(["ticks=0"])).unwrap();
    let mut game = CountingGame::default();
    driver.main_loop(&mut game);
    assert!(game.calls.is_empty());
}

#[test]
fn selection_starts_null_driver_and_rejects_others() {
    init_logging();
    let driver = start_video_driver("null:ticks=5", (640, 480)).unwrap();
    assert_eq!(driver.name(), "null");

    assert_eq!(
        start_video_driver("sdl", (640, 480)).err(),
        Some(DriverError::UnknownDriver("sdl".to_string()))
    );
}

#[test]
fn runner_advances_game_and_records_checkpoints() {
    init_logging();
    let mut driver = start_video_driver("null:ticks=150", (640, 480)).unwrap();
    let mut runner = GameRunner::new(GameState::new());
    driver.main_loop(&mut runner);

    assert_eq!(runner.state().tick(), 150);
    assert_eq!(runner.state().window_updates(), 150);
    let ticks: Vec<u64> = runner.checkpoints().iter().map(|(tick, _)| *tick).collect();
    assert_eq!(ticks, vec![74, 148]);
    assert!(ttd_debug::desync_log()
        .snapshot()
        .iter()
        .any(|entry| entry.starts_with("[tick 148] sync checkpoint")));
}

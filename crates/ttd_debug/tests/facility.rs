use std::cell::Cell;
use std::sync::{Arc, Once};

use pretty_assertions::assert_eq;
use ttd_debug::{debug_to, Category, DebugFacility, DebugStringError, MemorySink};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(ttd_debug::initialize_for_tests);
}

fn facility_with_sink() -> (DebugFacility, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let facility = DebugFacility::new(Box::new(sink.clone()));
    (facility, sink)
}

#[test]
fn unconfigured_facility_only_shows_level_zero() {
    init_logging();
    let (facility, sink) = facility_with_sink();

    for &category in Category::ALL {
        assert_eq!(facility.level(category), 0);
        assert!(facility.enabled(category, 0));
        assert!(!facility.enabled(category, 1));
    }

    debug_to!(&facility, Map, 0, "severe");
    debug_to!(&facility, Map, 1, "warning");

    let lines = sink.take();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].line, "dbg: [map:0] severe");
}

#[test]
fn configured_net_level_filters_by_level() {
    init_logging();
    let (facility, sink) = facility_with_sink();
    let report = facility.configure("net=2");
    assert!(report.errors.is_empty());

    debug_to!(&facility, Net, 1, "one");
    debug_to!(&facility, Net, 3, "three");
    debug_to!(&facility, Net, 0, "zero");
    debug_to!(&facility, Net, 2, "two");

    let lines: Vec<String> = sink.take().into_iter().map(|l| l.line).collect();
    assert_eq!(
        lines,
        vec![
            "dbg: [net:1] one".to_string(),
            "dbg: [net:0] zero".to_string(),
            "dbg: [net:2] two".to_string(),
        ]
    );
}

#[test]
fn emitted_iff_configured_level_is_high_enough() {
    let (facility, _sink) = facility_with_sink();
    for configured in 0..=6u8 {
        facility.set_level(Category::Yapf, configured);
        for level in 0..=8u8 {
            let expected = level == 0 || configured >= level;
            assert_eq!(facility.enabled(Category::Yapf, level), expected);
        }
    }
}

#[test]
fn filtered_out_lines_do_not_evaluate_arguments() {
    let (facility, sink) = facility_with_sink();
    let evaluated = Cell::new(false);
    let expensive = || {
        evaluated.set(true);
        42
    };

    debug_to!(&facility, Sprite, 5, "value {}", expensive());
    assert!(!evaluated.get());
    assert!(sink.take().is_empty());

    facility.set_level(Category::Sprite, 5);
    debug_to!(&facility, Sprite, 5, "value {}", expensive());
    assert!(evaluated.get());
    assert_eq!(sink.take()[0].line, "dbg: [sprite:5] value 42");
}

#[test]
fn unknown_category_is_reported_and_does_not_stop_configuration() {
    let (facility, sink) = facility_with_sink();
    let report = facility.configure("misc=1, bogus=4, grf=3");

    assert_eq!(
        report.errors,
        vec![DebugStringError::UnknownCategory("bogus".to_string())]
    );
    assert_eq!(facility.level(Category::Misc), 1);
    assert_eq!(facility.level(Category::Grf), 3);
    assert_eq!(facility.level(Category::Net), 0);

    let warnings = sink.take();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].category, Category::Misc);
    assert_eq!(warnings[0].level, 0);
    assert!(warnings[0].line.contains("bogus"));
}

#[test]
fn bare_number_sets_every_category() {
    let (facility, _sink) = facility_with_sink();
    facility.configure("3 net=5");
    for &category in Category::ALL {
        let expected = if category == Category::Net { 5 } else { 3 };
        assert_eq!(facility.level(category), expected);
    }
}

#[test]
fn debug_string_round_trips() {
    let (facility, _sink) = facility_with_sink();
    facility.configure("driver=1 desync:4,linkgraph=2");
    let summary = facility.debug_string();
    assert!(summary.starts_with("driver=1, grf=0, map=0, misc=0"));
    assert!(summary.contains("desync=4"));

    let (copy, _sink) = facility_with_sink();
    let report = copy.configure(&summary);
    assert!(report.errors.is_empty());
    assert_eq!(report.effective, summary);
}

#[test]
fn file_redirect_is_reported() {
    let (facility, _sink) = facility_with_sink();
    let report = facility.configure("file=debug.log net=1");
    assert_eq!(report.redirect, Some(std::path::PathBuf::from("debug.log")));
    assert_eq!(facility.level(Category::Net), 1);
}

#[test]
fn date_prefix_is_prepended_when_enabled() {
    let (facility, sink) = facility_with_sink();
    facility.set_show_date_in_logs(true);
    debug_to!(&facility, Console, 0, "hello");

    let line = sink.take().remove(0).line;
    assert!(line.starts_with('['));
    assert!(line.ends_with("] dbg: [console:0] hello"));
}

#[test]
fn global_macro_is_safe_before_configuration() {
    init_logging();
    ttd_debug::debug!(Misc, 0, "unconfigured global facility {}", 1);
    ttd_debug::debug!(Misc, 9, "never shown");
}

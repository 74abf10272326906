use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use ttd_debug::{
    debug, facility, install_facility, Category, DebugFacility, MemorySink, TicTocState,
};

// Runs as its own test binary so the installed facility is not shared.
#[test]
fn debug_macro_goes_through_the_installed_facility() {
    let sink = Arc::new(MemorySink::new());
    install_facility(DebugFacility::new(Box::new(sink.clone()))).expect("first install");
    assert!(install_facility(DebugFacility::default()).is_err());

    facility().configure("sound=2");
    debug!(Sound, 2, "mixer started at {} Hz", 44100);
    debug!(Sound, 3, "too detailed");
    debug!(Grf, 0, "missing sprite");

    let lines = sink.take();
    assert_eq!(
        lines
            .iter()
            .map(|l| (l.category, l.level, l.line.as_str()))
            .collect::<Vec<_>>(),
        vec![
            (Category::Sound, 2, "dbg: [sound:2] mixer started at 44100 Hz"),
            (Category::Grf, 0, "dbg: [grf:0] missing sprite"),
        ]
    );

    let profile = TicTocState::new("tile loop", 2);
    profile.record(Duration::from_micros(30));
    profile.record(Duration::from_micros(50));
    assert_eq!(
        sink.take()
            .into_iter()
            .map(|l| l.line)
            .collect::<Vec<_>>(),
        vec!["dbg: [misc:0] [tile loop] 80 us [avg: 40.0 us]".to_string()]
    );
}

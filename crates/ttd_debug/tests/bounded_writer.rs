use std::fmt::Write;

use ttd_debug::{dump_facility_names, BoundedWriter, Category, LogPrefix, LOG_PREFIX_CAPACITY};

#[test]
fn stops_at_capacity() {
    let mut buf = [0u8; 5];
    let mut writer = BoundedWriter::new(&mut buf);
    assert!(writer.push_str("abc"));
    assert!(!writer.push_str("defg"));
    assert_eq!(writer.as_str(), "abcde");
    assert!(writer.is_truncated());
    assert!(!writer.push_str("x"));
    assert_eq!(writer.position(), 5);
    assert_eq!(writer.remaining(), 0);
}

#[test]
fn never_splits_a_character() {
    let mut buf = [0u8; 4];
    let mut writer = BoundedWriter::new(&mut buf);
    let _ = write!(writer, "ab\u{e9}\u{e9}");
    assert_eq!(writer.as_str(), "ab\u{e9}");
    assert_eq!(writer.position(), 4);
}

#[test]
fn zero_capacity_accepts_nothing() {
    let mut buf = [0u8; 0];
    let mut writer = BoundedWriter::new(&mut buf);
    assert!(!writer.push_str("a"));
    assert_eq!(writer.position(), 0);
}

#[test]
fn facility_names_are_listed_in_order() {
    let mut buf = [0u8; 1024];
    let mut writer = BoundedWriter::new(&mut buf);
    let pos = dump_facility_names(&mut writer);
    let text = writer.as_str();

    assert_eq!(pos, text.len());
    assert!(text.starts_with("List of debug facility names:\ndriver, grf, map, misc, net"));
    assert!(text.ends_with("command\n\n") || text.ends_with("statecsum\n\n"));
    for category in Category::ALL {
        assert!(text.contains(category.name()));
    }
}

#[test]
fn facility_names_truncate_safely() {
    let mut buf = [0u8; 40];
    let mut writer = BoundedWriter::new(&mut buf);
    assert_eq!(dump_facility_names(&mut writer), 40);
    assert!(writer.is_truncated());
}

#[test]
fn log_prefix_fits_its_buffer() {
    let mut prefix = LogPrefix::new();
    assert_eq!(prefix.get(false), "");
    let dated = prefix.get(true);
    assert_eq!(dated.len(), 22);
    assert!(dated.len() <= LOG_PREFIX_CAPACITY);
    assert!(dated.starts_with('[') && dated.ends_with("] "));
}

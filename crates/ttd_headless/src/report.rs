use std::path::{Path, PathBuf};

use chrono::Utc;
use ttd_debug::{debug_tags, desync_log, facility, BoundedWriter};

use crate::{AtomicFileWriter, PersistError};

pub const DESYNC_REPORT_FILENAME: &str = "desync_report.log";

/// Capacity used when the report has to fit a preallocated buffer.
pub const DESYNC_REPORT_CAPACITY: usize = 64 * 1024;

/// Text of the desync report: header, debug levels, debug tags and the desync
/// message log.
pub fn build_desync_report(generated_utc: &str) -> String {
    let mut report = format!(
        "Desync report\nGenerated: {generated_utc}\n\nDebug levels: {}\n\n{}\n",
        facility().debug_string(),
        debug_tags().to_report_string()
    );
    report.push_str(&desync_log().to_report_string());
    report
}

/// Renders the report into a caller-provided buffer, cut off where the buffer
/// ends. Returns the write cursor.
pub fn dump_desync_report(writer: &mut BoundedWriter<'_>) -> usize {
    let report = build_desync_report(&Utc::now().to_rfc3339());
    writer.push_str(&report);
    writer.position()
}

/// Atomically writes the report to `dir`.
pub fn write_desync_report(dir: &Path) -> Result<PathBuf, PersistError> {
    let report = build_desync_report(&Utc::now().to_rfc3339());
    AtomicFileWriter::new(dir).write(DESYNC_REPORT_FILENAME, &report)
}

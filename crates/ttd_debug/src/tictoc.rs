//! TicToc profiling.
//!
//! ```
//! use ttd_debug::{TicToc, TicTocState};
//!
//! static STATE: TicTocState = TicTocState::new("tile loop", 100);
//!
//! fn tile_loop() {
//!     let _tt = TicToc::new(&STATE);
//!     // measured code
//! }
//! # tile_loop();
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::{debug_to, facility, DebugFacility};

/// Summary emitted each time a probe reaches its sample count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTocReport {
    /// Name of the probe.
    pub name: &'static str,
    /// Number of samples summed up.
    pub samples: u32,
    /// Sum of the samples in microseconds.
    pub total_us: u64,
}

impl TicTocReport {
    /// Mean duration of one sample in microseconds.
    pub fn average_us(&self) -> f64 {
        self.total_us as f64 / f64::from(self.samples.max(1))
    }
}

#[derive(Debug)]
struct Accumulator {
    count: u32,
    sum_us: u64,
    last_report: Option<TicTocReport>,
}

/// Long-lived state of one profiling probe.
#[derive(Debug)]
pub struct TicTocState {
    name: &'static str,
    max_count: u32,
    acc: Mutex<Accumulator>,
}

impl TicTocState {
    /// `max_count` below 1 is treated as 1.
    pub const fn new(name: &'static str, max_count: u32) -> Self {
        Self {
            name,
            max_count: if max_count == 0 { 1 } else { max_count },
            acc: Mutex::new(Accumulator {
                count: 0,
                sum_us: 0,
                last_report: None,
            }),
        }
    }

    /// Name shown in reports.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Samples per report.
    pub fn max_count(&self) -> u32 {
        self.max_count
    }

    /// Samples and microseconds gathered since the last report.
    pub fn pending(&self) -> (u32, u64) {
        let acc = self.lock();
        (acc.count, acc.sum_us)
    }

    /// The most recent report, if any.
    pub fn last_report(&self) -> Option<TicTocReport> {
        self.lock().last_report
    }

    /// Adds one sample. Reports and resets once `max_count` samples are in.
    pub fn record(&self, elapsed: Duration) -> Option<TicTocReport> {
        self.record_to(facility(), elapsed)
    }

    /// Same as [`Self::record`], reporting through `facility`.
    pub fn record_to(&self, facility: &DebugFacility, elapsed: Duration) -> Option<TicTocReport> {
        let elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        let report = {
            let mut acc = self.lock();
            acc.sum_us = acc.sum_us.saturating_add(elapsed_us);
            acc.count += 1;
            if acc.count < self.max_count {
                return None;
            }
            let report = TicTocReport {
                name: self.name,
                samples: acc.count,
                total_us: acc.sum_us,
            };
            acc.count = 0;
            acc.sum_us = 0;
            acc.last_report = Some(report);
            report
        };

        debug_to!(
            facility,
            Misc,
            0,
            "[{}] {} us [avg: {:.1} us]",
            report.name,
            report.total_us,
            report.average_us()
        );
        Some(report)
    }

    // The counters are updated together, so a poisoned lock still holds a
    // consistent value.
    fn lock(&self) -> MutexGuard<'_, Accumulator> {
        self.acc.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Measures the time until it is dropped and records it into its state.
#[must_use = "the measurement ends when the TicToc is dropped"]
pub struct TicToc<'a> {
    state: &'a TicTocState,
    facility: &'a DebugFacility,
    start: Instant,
}

impl<'a> TicToc<'a> {
    /// Starts measuring; reports go to the process-wide facility.
    pub fn new(state: &'a TicTocState) -> Self {
        Self::with_facility(state, facility())
    }

    /// Starts measuring; reports go to `facility`.
    pub fn with_facility(state: &'a TicTocState, facility: &'a DebugFacility) -> Self {
        Self {
            state,
            facility,
            start: Instant::now(),
        }
    }
}

impl Drop for TicToc<'_> {
    fn drop(&mut self) {
        self.state.record_to(self.facility, self.start.elapsed());
    }
}

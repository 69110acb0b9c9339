#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! Wall-clock and resident-memory measurement around a single call

use crate::error::Result;
use crate::format::format_size;
use crate::memory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// An in-flight measurement: opening samples taken, closing samples pending.
///
/// Created by [`Measurement::begin`] immediately before the call under
/// measurement and consumed by [`Measurement::finish`] immediately after it
/// returns. Never outlives the call it brackets.
#[derive(Debug)]
pub struct Measurement {
    /// Resident set size when the measurement began, in bytes
    start_rss: u64,

    /// Monotonic start instant
    started: Instant,
}

impl Measurement {
    /// Open a measurement: sample resident memory, then start the clock.
    ///
    /// Memory is sampled before the clock starts so the sampling cost is not
    /// charged to the measured call.
    ///
    /// # Errors
    ///
    /// Returns error if resident memory cannot be sampled
    pub fn begin() -> Result<Self> {
        let start_rss = memory::resident_bytes()?;
        Ok(Self {
            start_rss,
            started: Instant::now(),
        })
    }

    /// Close the measurement: stop the clock, then sample resident memory.
    ///
    /// # Errors
    ///
    /// Returns error if resident memory cannot be sampled
    pub fn finish(self) -> Result<MeasureReport> {
        let elapsed = self.started.elapsed();
        let end_rss = memory::resident_bytes()?;

        #[allow(clippy::cast_possible_wrap)] // RSS values fit in i64 on any real system
        let rss_delta_bytes = end_rss as i64 - self.start_rss as i64;

        Ok(MeasureReport::new(elapsed, rss_delta_bytes))
    }
}

/// Completed measurement of a single call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureReport {
    /// Wall-clock timestamp when the measurement closed
    taken_at: DateTime<Utc>,

    /// Elapsed wall-clock time of the measured call
    elapsed: Duration,

    /// Resident-memory delta across the call, in bytes (negative when the
    /// process shrank)
    rss_delta_bytes: i64,
}

impl MeasureReport {
    /// Create a report for a just-completed measurement
    #[must_use]
    pub fn new(elapsed: Duration, rss_delta_bytes: i64) -> Self {
        Self {
            taken_at: Utc::now(),
            elapsed,
            rss_delta_bytes,
        }
    }

    /// Get the timestamp at which the measurement closed
    #[must_use]
    pub const fn taken_at(&self) -> &DateTime<Utc> {
        &self.taken_at
    }

    /// Get the elapsed wall-clock time
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Get the resident-memory delta in bytes
    #[must_use]
    pub const fn rss_delta_bytes(&self) -> i64 {
        self.rss_delta_bytes
    }
}

impl fmt::Display for MeasureReport {
    /// Renders the two report lines:
    ///
    /// ```text
    /// Time taken: 0.042 seconds
    /// Memory usage: 1.50 KB
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Time taken: {:.3} seconds", self.elapsed.as_secs_f64())?;

        #[allow(clippy::cast_precision_loss)] // Acceptable precision loss for display purposes
        let delta = self.rss_delta_bytes as f64;

        write!(f, "Memory usage: {}", format_size(delta))
    }
}

/// Wrap a callable so each invocation is measured and reported.
///
/// The returned callable has the same argument and result values as `f`
/// (multiple arguments travel as a tuple), lifted into [`Result`] so
/// measurement failures can surface. Each invocation opens a measurement,
/// invokes `f` with the supplied argument unchanged, closes the measurement,
/// prints the report to stdout, and returns `f`'s result unchanged.
///
/// A panic in `f` unwinds through the wrapper unmodified; nothing is printed
/// for that invocation since the closing samples are never taken. Successive
/// invocations are independent: no state is carried between them.
///
/// # Examples
///
/// ```
/// use callprof::measure;
///
/// let mut doubled = measure(|n: u64| n * 2);
/// let result = doubled(21);
/// assert!(matches!(result, Ok(42)));
/// ```
pub fn measure<A, T, F>(mut f: F) -> impl FnMut(A) -> Result<T>
where
    F: FnMut(A) -> T,
{
    move |args| {
        let (result, report) = measure_call(|| f(args))?;
        println!("{report}");
        Ok(result)
    }
}

/// Measure a single closure invocation, returning its result and the report.
///
/// One-shot form of [`measure`] for callers who want the report as a value
/// instead of on stdout; arguments are captured in the closure.
///
/// # Errors
///
/// Returns error if resident memory cannot be sampled before or after the
/// call
///
/// # Examples
///
/// ```
/// use callprof::measure_call;
///
/// let outcome = measure_call(|| (0..1000_u64).sum::<u64>());
/// assert!(matches!(outcome, Ok((499_500, _))));
/// ```
pub fn measure_call<T>(f: impl FnOnce() -> T) -> Result<(T, MeasureReport)> {
    let measurement = Measurement::begin()?;
    let result = f();
    let report = measurement.finish()?;
    Ok((result, report))
}

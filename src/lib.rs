#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]

//! Ad-hoc measurement of wall-clock time and resident-memory delta around a
//! single call.
//!
//! Wrap a callable with [`measure`] and every invocation prints two lines:
//! elapsed seconds and the resident set size (RSS) delta, formatted through
//! [`format_size`]. Use [`measure_call`] when the report is wanted as a value
//! instead of on stdout.
//!
//! This is an interactive profiling aid, not production telemetry: no
//! aggregation across calls, no storage, no concurrent-measurement
//! guarantees. Measurements in other threads make RSS readings noisy but
//! never unsafe.
//!
//! ```
//! use callprof::measure;
//!
//! let mut load = measure(|n: usize| vec![0_u8; n]);
//! let buffer = load(4096);
//! assert!(matches!(buffer, Ok(ref b) if b.len() == 4096));
//! // stdout:
//! // Time taken: 0.000 seconds
//! // Memory usage: 4.00 KB   (or thereabouts; RSS moves in page granularity)
//! ```

pub mod error;
pub mod format;
pub mod measure;
pub mod memory;

pub use error::{ProfileError, Result};
pub use format::format_size;
pub use measure::{MeasureReport, Measurement, measure, measure_call};
pub use memory::resident_bytes;

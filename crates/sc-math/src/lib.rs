//! # sc-math
//!
//! Spreadsheet math and statistics functions, plus the numerical building
//! blocks the other function groups rely on: rounding conventions,
//! statistics accumulation, and 1D root finding.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `SUM`, `AVERAGE`, `ROUND`, `SQRT`, `POWER`, trig, `MEDIAN`, `STDEV`.
pub mod functions;

/// Rounding conventions.
pub mod rounding;

/// 1D root-finding solvers.
pub mod solvers1d;

/// Statistics accumulators.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use functions::{
    average, cos, median, power, round, sin, sqrt, stdev, stdev_sample, sum, tan,
};
pub use rounding::Rounding;
pub use solvers1d::{SolverConfig, SolverResult};
pub use statistics::Statistics;

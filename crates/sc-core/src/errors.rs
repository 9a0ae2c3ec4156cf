//! Error types for sheetcalc.
//!
//! Every calculation reports failure through the single [`Error`] enum so
//! that a front end can map each variant onto its own display convention
//! (`#NUM!`, `#DIV/0!`, ...). No variant is ever encoded as a `NaN` or an
//! infinity in a successful result.

use crate::Real;
use thiserror::Error;

/// The error type returned by every sheetcalc function.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The rate cannot be used: `0` for PV, `-1` as a discount rate, or a
    /// non-finite value.
    #[error("invalid rate {rate}: {reason}")]
    InvalidRate {
        /// The offending rate.
        rate: Real,
        /// Why the rate cannot be used.
        reason: &'static str,
    },

    /// An iterative solver exhausted its iteration budget.
    #[error("no convergence after {iterations} iterations (residual: {residual:.3e})")]
    NoConvergence {
        /// Number of iterations performed.
        iterations: u32,
        /// `|f(x)|` at the last iterate.
        residual: Real,
    },

    /// The input admits no distinguishable root (flat function, no sign
    /// change, vanishing slope).
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// An argument is outside the function's domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidRate`].
    pub fn invalid_rate(rate: Real, reason: &'static str) -> Self {
        Self::InvalidRate { rate, reason }
    }

    /// Shorthand for [`Error::NoConvergence`].
    pub fn no_convergence(iterations: u32, residual: Real) -> Self {
        Self::NoConvergence {
            iterations,
            residual,
        }
    }
}

/// Shorthand `Result` type used throughout sheetcalc.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use sc_core::{ensure, errors::Error};
/// fn positive(x: f64) -> sc_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::DegenerateInput(...))` immediately.
///
/// # Example
/// ```
/// use sc_core::{fail, errors::Error};
/// fn flat() -> sc_core::errors::Result<f64> {
///     fail!("function is constant");
/// }
/// assert!(matches!(flat(), Err(Error::DegenerateInput(_))));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::DegenerateInput(format!($($msg)*)))
    };
}

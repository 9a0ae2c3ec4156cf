//! Internal rate of return.
//!
//! The root of [`npv`] is found with Newton's method, the slope being a
//! forward difference over a fixed step:
//!
//! `r_{k+1} = r_k - NPV(r_k) / ((NPV(r_k + h) - NPV(r_k)) / h)`
//!
//! starting from `r_0 = 0.10` with `h = 0.01`, stopping once
//! `|NPV(r_k)| < 1e-4`, and failing if 100 updates do not get there.
//!
//! Meeting the tolerance is not enough on its own: far from the root, every
//! flow can be discounted so heavily that `|NPV|` is tiny without any
//! cancellation. A rate is only accepted if the next Newton correction
//! would move it by at most `h`.
//!
//! Every way the iteration can fail is reported as an error:
//!
//! | Situation | Error |
//! |-----------|-------|
//! | empty series, no sign change | [`Error::DegenerateInput`] |
//! | `NPV(r + h) == NPV(r)` | [`Error::DegenerateInput`] |
//! | tolerance met at a rate the slope does not pin down | [`Error::DegenerateInput`] |
//! | NPV overflows at an iterate | [`Error::DegenerateInput`] |
//! | iteration budget exhausted | [`Error::NoConvergence`] |
//! | iterate lands on `-1` | [`Error::InvalidRate`] |

use crate::tvm::npv;
use sc_core::{ensure, fail, Error, Rate, Real, Result};
use sc_math::solvers1d::{fd_newton, SolverConfig};
use tracing::debug;

/// Default starting rate.
pub const DEFAULT_GUESS: Rate = 0.10;

/// Default tolerance on `|NPV|`.
pub const DEFAULT_TOLERANCE: Real = 1.0e-4;

/// Default iteration budget.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Default finite-difference step.
pub const DEFAULT_STEP: Rate = 0.01;

/// Tuning knobs for [`irr_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IrrConfig {
    /// Starting rate.
    pub guess: Rate,
    /// Convergence threshold on `|NPV|`.
    pub tolerance: Real,
    /// Maximum number of Newton updates.
    pub max_iterations: u32,
    /// Step of the forward difference used as the slope.
    pub step: Rate,
}

impl Default for IrrConfig {
    fn default() -> Self {
        Self {
            guess: DEFAULT_GUESS,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            step: DEFAULT_STEP,
        }
    }
}

impl IrrConfig {
    /// Sets the starting rate.
    #[must_use]
    pub fn with_guess(mut self, guess: Rate) -> Self {
        self.guess = guess;
        self
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Real) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the finite-difference step.
    #[must_use]
    pub fn with_step(mut self, step: Rate) -> Self {
        self.step = step;
        self
    }
}

/// A converged internal rate of return.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IrrSolution {
    /// The rate at which the NPV vanishes.
    pub rate: Rate,
    /// Newton updates applied to the guess.
    pub iterations: u32,
    /// `NPV(rate)`; below the tolerance in magnitude.
    pub residual: Real,
}

fn has_sign_change(flows: &[Real]) -> bool {
    flows.iter().any(|&cf| cf > 0.0) && flows.iter().any(|&cf| cf < 0.0)
}

/// Internal rate of return of `flows` with the default [`IrrConfig`].
///
/// # Errors
/// See [`irr_with`].
///
/// # Example
/// ```
/// let r = sc_financial::irr(&[-100.0, 110.0]).unwrap();
/// assert!((r - 0.10).abs() < 1e-4);
/// ```
pub fn irr(flows: &[Real]) -> Result<Rate> {
    irr_with(flows, &IrrConfig::default()).map(|solution| solution.rate)
}

/// NPV as the objective of the iteration. Flows are known to be finite, so
/// a non-finite NPV means the iterate has wandered where the series
/// overflows.
fn objective(rate: Rate, flows: &[Real]) -> Result<Real> {
    npv(rate, flows).map_err(|err| match err {
        Error::InvalidArgument(_) => {
            Error::DegenerateInput(format!("NPV overflows at rate {rate}"))
        }
        other => other,
    })
}

/// Internal rate of return of `flows`, with the iteration statistics.
///
/// # Errors
/// - [`Error::DegenerateInput`] for an empty series, a series without both a
///   positive and a negative flow, a vanishing slope, an NPV that overflows
///   during the iteration, or a rate that meets the tolerance only because
///   the NPV is flat there (the iteration ran off towards large rates).
/// - [`Error::NoConvergence`] when `max_iterations` updates do not bring
///   `|NPV|` under the tolerance.
/// - [`Error::InvalidRate`] when an iterate is exactly `-1`.
/// - [`Error::InvalidArgument`] for a non-finite flow or guess, or a
///   non-positive tolerance.
pub fn irr_with(flows: &[Real], config: &IrrConfig) -> Result<IrrSolution> {
    if flows.is_empty() {
        fail!("IRR of an empty cash-flow series");
    }
    ensure!(
        flows.iter().all(|cf| cf.is_finite()),
        "IRR needs finite cash flows"
    );
    ensure!(
        config.guess.is_finite(),
        "IRR guess must be finite, got {}",
        config.guess
    );
    ensure!(
        config.tolerance > 0.0,
        "IRR tolerance must be positive, got {}",
        config.tolerance
    );
    if !has_sign_change(flows) {
        fail!("IRR needs at least one positive and one negative cash flow");
    }

    let solver = SolverConfig::new(config.tolerance, config.max_iterations);
    let result = fd_newton(
        |r| objective(r, flows),
        config.guess,
        config.step,
        &solver,
    )
    .map_err(|err| {
        debug!(periods = flows.len(), error = %err, "IRR failed");
        err
    })?;

    let slope = (objective(result.root + config.step, flows)? - result.residual) / config.step;
    let correction = (result.residual / slope).abs();
    if correction.is_nan() || correction > config.step.abs() {
        debug!(
            rate = result.root,
            residual = result.residual,
            correction,
            "IRR met the tolerance where the NPV is flat"
        );
        fail!(
            "NPV is within tolerance at rate {} only because it is flat there",
            result.root
        );
    }

    debug!(
        rate = result.root,
        iterations = result.iterations,
        residual = result.residual,
        "IRR converged"
    );
    Ok(IrrSolution {
        rate: result.root,
        iterations: result.iterations,
        residual: result.residual,
    })
}

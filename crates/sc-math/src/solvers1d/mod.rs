//! 1D root-finding solvers.
//!
//! - [`fd_newton`]: Newton iteration with a forward finite-difference slope.
//!   The objective may fail, and its error is propagated unchanged.
//! - [`brent`]: bracketing method combining bisection, secant, and inverse
//!   quadratic interpolation.
//!
//! Both report the iterate, the iteration count, and the final residual in a
//! [`SolverResult`]. Running out of iterations is an
//! [`Error::NoConvergence`], never a silently returned last iterate.

use sc_core::{
    errors::{Error, Result},
    fail, Real,
};
use tracing::{debug, trace};

/// Default maximum number of iterations.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Default accuracy on `|f(x)|`.
pub const DEFAULT_ACCURACY: Real = 1.0e-11;

/// Configuration shared by the solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Convergence threshold. Non-positive values fall back to
    /// [`DEFAULT_ACCURACY`].
    pub accuracy: Real,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            accuracy: DEFAULT_ACCURACY,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new configuration.
    pub fn new(accuracy: Real, max_iterations: u32) -> Self {
        Self {
            accuracy,
            max_iterations,
        }
    }

    /// Sets the accuracy.
    #[must_use]
    pub fn with_accuracy(mut self, accuracy: Real) -> Self {
        self.accuracy = accuracy;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    fn effective_accuracy(&self) -> Real {
        if self.accuracy > 0.0 {
            self.accuracy
        } else {
            DEFAULT_ACCURACY
        }
    }
}

/// Outcome of a successful solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverResult {
    /// The root found.
    pub root: Real,
    /// Number of updates applied to the initial guess.
    pub iterations: u32,
    /// `f(root)`.
    pub residual: Real,
}

// ── Finite-difference Newton ──────────────────────────────────────────────────

/// Newton's method with the slope estimated by a forward difference:
///
/// `x_{k+1} = x_k - f(x_k) / ((f(x_k + step) - f(x_k)) / step)`
///
/// Stops as soon as `|f(x_k)| < accuracy` for some `k < max_iterations`.
/// The iterate produced by the last allowed update is never evaluated: the
/// budget counts tested iterates, not updates.
///
/// # Errors
/// - [`Error::InvalidArgument`] if `step` is zero or not finite, or
///   `max_iterations` is zero.
/// - [`Error::DegenerateInput`] if the difference `f(x + step) - f(x)` is
///   zero or not finite.
/// - [`Error::NoConvergence`] after `max_iterations` updates.
/// - Any error returned by `f`.
pub fn fd_newton<F>(f: F, x0: Real, step: Real, config: &SolverConfig) -> Result<SolverResult>
where
    F: Fn(Real) -> Result<Real>,
{
    sc_core::ensure!(
        step != 0.0 && step.is_finite(),
        "finite-difference step must be finite and non-zero, got {step}"
    );
    sc_core::ensure!(
        config.max_iterations > 0,
        "fd_newton needs at least one iteration"
    );
    let acc = config.effective_accuracy();
    let mut x = x0;
    let mut residual = Real::NAN;

    for iteration in 0..config.max_iterations {
        let fx = f(x)?;
        residual = fx;
        if fx.abs() < acc {
            debug!(root = x, iterations = iteration, residual = fx, "fd_newton converged");
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let rise = f(x + step)? - fx;
        if rise == 0.0 || !rise.is_finite() {
            debug!(x, fx, rise, "fd_newton slope vanished");
            fail!("finite-difference slope vanished at x = {x}");
        }
        let slope = rise / step;
        x -= fx / slope;
        trace!(iteration, x, fx, slope, "fd_newton step");
    }

    debug!(
        iterations = config.max_iterations,
        residual,
        "fd_newton exhausted iterations"
    );
    Err(Error::no_convergence(config.max_iterations, residual.abs()))
}

// ── Brent ─────────────────────────────────────────────────────────────────────

/// Brent's method for finding a root of `f(x)` in `[x_min, x_max]`.
///
/// # Errors
/// - [`Error::DegenerateInput`] if `f(x_min)` and `f(x_max)` share a sign.
/// - [`Error::NoConvergence`] after `max_iterations` iterations.
pub fn brent<F>(f: F, x_min: Real, x_max: Real, config: &SolverConfig) -> Result<SolverResult>
where
    F: Fn(Real) -> Real,
{
    let acc = config.effective_accuracy();
    let mut a = x_min;
    let mut b = x_max;
    let mut fa = f(a);
    let mut fb = f(b);

    if fa * fb > 0.0 || fa.is_nan() || fb.is_nan() {
        fail!("Brent: f({a}) = {fa} and f({b}) = {fb} do not bracket a root");
    }
    if fa == 0.0 {
        return Ok(SolverResult {
            root: a,
            iterations: 0,
            residual: fa,
        });
    }
    if fb == 0.0 {
        return Ok(SolverResult {
            root: b,
            iterations: 0,
            residual: fb,
        });
    }

    let mut c = b;
    let mut fc = fb;
    let mut d = b - a;
    let mut e = d;

    for iteration in 0..config.max_iterations {
        if fb * fc > 0.0 {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }
        let tol = 2.0 * f64::EPSILON * b.abs() + 0.5 * acc;
        let xm = 0.5 * (c - b);
        if xm.abs() <= tol || fb == 0.0 {
            debug!(root = b, iterations = iteration, residual = fb, "brent converged");
            return Ok(SolverResult {
                root: b,
                iterations: iteration,
                residual: fb,
            });
        }
        if e.abs() >= tol && fa.abs() > fb.abs() {
            let s = fb / fa;
            let (p, q) = if a == c {
                (2.0 * xm * s, 1.0 - s)
            } else {
                let q = fa / fc;
                let r = fb / fc;
                let p = s * (2.0 * xm * q * (q - r) - (b - a) * (r - 1.0));
                let q = (q - 1.0) * (r - 1.0) * (s - 1.0);
                (p, q)
            };
            let (p, q) = if p > 0.0 { (p, -q) } else { (-p, q) };
            if 2.0 * p < (3.0 * xm * q - (tol * q).abs()) && 2.0 * p < (e * q).abs() {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }
        a = b;
        fa = fb;
        b += if d.abs() > tol {
            d
        } else if xm > 0.0 {
            tol
        } else {
            -tol
        };
        fb = f(b);
        trace!(iteration, b, fb, "brent step");
    }
    Err(Error::no_convergence(config.max_iterations, fb.abs()))
}

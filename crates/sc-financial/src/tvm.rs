//! Closed-form time-value-of-money functions.
//!
//! - `pv` — present value of an ordinary annuity
//! - `npv` — discounted sum of a cash-flow series
//! - `rate` — closed-form periodic-rate approximation
//! - `annuity_rate` — exact inverse of `pv`, solved with Brent's method
//!
//! Cash flows are end-of-period: entry `i` of a series is discounted by
//! `(1 + rate)^(i + 1)`. There is no period-0 term.

use sc_core::{ensure, Error, Rate, Real, Result};
use sc_math::solvers1d::{brent, SolverConfig};
use tracing::debug;

/// Lower end of the `annuity_rate` search bracket.
const ANNUITY_RATE_MIN: Rate = -0.99;

/// Upper end of the `annuity_rate` search bracket.
const ANNUITY_RATE_MAX: Rate = 10.0;

/// Rates this close to zero use the zero-rate limit of the annuity factor.
const ZERO_RATE: Rate = 1e-10;

/// Rejects rates that make the discount base `1 + rate` unusable.
pub(crate) fn check_discount_rate(rate: Rate) -> Result<()> {
    if !rate.is_finite() {
        return Err(Error::invalid_rate(rate, "rate is not a finite number"));
    }
    if rate == -1.0 {
        return Err(Error::invalid_rate(rate, "discount base 1 + rate is zero"));
    }
    Ok(())
}

/// Present value of an ordinary annuity:
/// `payment * (1 - (1 + rate)^(-periods)) / rate`.
///
/// `periods` need not be an integer; the formula is evaluated with `powf`
/// for any finite value.
///
/// # Errors
/// - [`Error::InvalidRate`] if `rate` is `0`, `-1`, or not finite.
/// - [`Error::InvalidArgument`] if `periods` or `payment` is not finite, or
///   the result overflows.
///
/// # Example
/// ```
/// let value = sc_financial::pv(0.05, 10.0, 100.0).unwrap();
/// assert!((value - 772.17).abs() < 0.01);
/// ```
pub fn pv(rate: Rate, periods: Real, payment: Real) -> Result<Real> {
    check_discount_rate(rate)?;
    if rate == 0.0 {
        return Err(Error::invalid_rate(rate, "PV divides by the rate"));
    }
    ensure!(
        periods.is_finite() && payment.is_finite(),
        "PV needs finite periods and payment, got {periods} and {payment}"
    );
    let value = payment * ((1.0 - (1.0 + rate).powf(-periods)) / rate);
    ensure!(
        value.is_finite(),
        "PV({rate}, {periods}, {payment}) is not a finite number"
    );
    Ok(value)
}

/// Net present value of `flows` at `rate`:
/// `sum(flows[i] / (1 + rate)^(i + 1))`.
///
/// An empty series has an NPV of `0`.
///
/// # Errors
/// - [`Error::InvalidRate`] if `rate` is `-1` or not finite.
/// - [`Error::InvalidArgument`] if the discounted sum is not a finite number
///   (a non-finite flow, or overflow for rates close to `-1`).
///
/// # Example
/// ```
/// let value = sc_financial::npv(0.1, &[100.0, 200.0, 300.0]).unwrap();
/// assert!((value - 481.59).abs() < 0.01);
/// ```
pub fn npv(rate: Rate, flows: &[Real]) -> Result<Real> {
    check_discount_rate(rate)?;
    let base = 1.0 + rate;
    let value = flows
        .iter()
        .enumerate()
        .fold(0.0, |acc, (i, cf)| acc + cf / base.powf((i + 1) as Real));
    ensure!(
        value.is_finite(),
        "NPV at rate {rate} over {} flows is not a finite number",
        flows.len()
    );
    Ok(value)
}

/// Closed-form approximation of the periodic rate implied by a term, a
/// payment, and a present value:
///
/// `(payment / pv) * (1 - (1 + payment / pv)^(-periods))`
///
/// This is **not** the inverse of [`pv`]: it is a single non-iterative
/// estimate and can be far from the exact rate (for 10 payments of 100
/// against a present value of 772.17 it gives about 0.0912, while the exact
/// rate is 0.05). Use [`annuity_rate`] when the exact inverse is needed.
///
/// # Errors
/// [`Error::InvalidArgument`] if `present_value` is zero or the result is
/// not a finite number.
pub fn rate(periods: Real, payment: Real, present_value: Real) -> Result<Rate> {
    ensure!(present_value != 0.0, "RATE needs a non-zero present value");
    let ratio = payment / present_value;
    let value = ratio * (1.0 - (1.0 + ratio).powf(-periods));
    ensure!(
        value.is_finite(),
        "RATE({periods}, {payment}, {present_value}) is not a finite number"
    );
    Ok(value)
}

/// `(1 - (1 + rate)^(-periods)) / rate`, with its limit `periods` at zero.
///
/// Evaluated through `ln_1p`/`exp_m1` so that small rates keep full
/// precision.
fn annuity_factor(rate: Rate, periods: Real) -> Real {
    if rate.abs() <= ZERO_RATE {
        periods
    } else {
        -(-periods * rate.ln_1p()).exp_m1() / rate
    }
}

/// The rate `r` for which `pv(r, periods, payment) == present_value`.
///
/// Solved with Brent's method over `(-0.99, 10]`. A present value equal to
/// `payment * periods` yields a zero rate.
///
/// # Errors
/// - [`Error::InvalidArgument`] if `periods` is not positive, `payment` or
///   `present_value` is zero, any input is not finite, or `payment` and
///   `present_value` have opposite signs.
/// - [`Error::DegenerateInput`] if the implied rate lies outside the search
///   bracket.
/// - [`Error::NoConvergence`] if Brent's method runs out of iterations.
pub fn annuity_rate(periods: Real, payment: Real, present_value: Real) -> Result<Rate> {
    ensure!(
        periods.is_finite() && payment.is_finite() && present_value.is_finite(),
        "annuity rate needs finite arguments"
    );
    ensure!(periods > 0.0, "annuity rate needs positive periods, got {periods}");
    ensure!(
        payment != 0.0 && present_value != 0.0,
        "annuity rate needs a non-zero payment and present value"
    );
    let target = present_value / payment;
    ensure!(
        target > 0.0,
        "payment {payment} and present value {present_value} must share a sign"
    );

    let config = SolverConfig::default();
    let result = brent(
        |r| annuity_factor(r, periods) - target,
        ANNUITY_RATE_MIN,
        ANNUITY_RATE_MAX,
        &config,
    )?;
    debug!(
        rate = result.root,
        iterations = result.iterations,
        "annuity rate solved"
    );
    Ok(result.root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn pv_reference_value() {
        assert_abs_diff_eq!(pv(0.05, 10.0, 100.0).unwrap(), 772.17, epsilon = 0.01);
    }

    #[test]
    fn pv_zero_rate_is_invalid() {
        let err = pv(0.0, 10.0, 100.0).unwrap_err();
        assert!(matches!(err, Error::InvalidRate { rate, .. } if rate == 0.0));
    }

    #[test]
    fn pv_minus_one_rate_is_invalid() {
        assert!(matches!(
            pv(-1.0, 10.0, 100.0),
            Err(Error::InvalidRate { .. })
        ));
    }

    #[test]
    fn pv_fractional_periods() {
        // Half a period at 21 % is a 10 % discount: 1 - 1/1.1 over 0.21.
        let value = pv(0.21, 0.5, 100.0).unwrap();
        assert_abs_diff_eq!(value, 100.0 * (1.0 - 1.0 / 1.1) / 0.21, epsilon = 1e-10);
    }

    #[test]
    fn pv_non_finite_arguments() {
        assert!(matches!(
            pv(Real::NAN, 10.0, 100.0),
            Err(Error::InvalidRate { .. })
        ));
        assert!(matches!(
            pv(0.05, Real::INFINITY, 100.0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn npv_reference_value() {
        let value = npv(0.1, &[100.0, 200.0, 300.0]).unwrap();
        assert_abs_diff_eq!(value, 481.59, epsilon = 0.01);
    }

    #[test]
    fn npv_empty_series_is_zero() {
        for r in [-0.5, 0.0, 0.1, 3.0] {
            assert_eq!(npv(r, &[]).unwrap(), 0.0);
        }
    }

    #[test]
    fn npv_first_flow_is_discounted_one_period() {
        assert_abs_diff_eq!(npv(0.1, &[110.0]).unwrap(), 100.0, epsilon = 1e-12);
    }

    #[test]
    fn npv_minus_one_rate_is_invalid() {
        let err = npv(-1.0, &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            Error::invalid_rate(-1.0, "discount base 1 + rate is zero")
        );
    }

    #[test]
    fn npv_non_finite_sum_is_invalid() {
        assert!(matches!(
            npv(0.1, &[Real::INFINITY, Real::NEG_INFINITY]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            npv(0.1, &[100.0, Real::NAN]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            npv(0.0, &[1e308, 1e308]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn npv_overflow_near_minus_one_is_invalid() {
        // 0.1^-400 does not fit in an f64.
        assert!(matches!(
            npv(-0.9, &[1.0; 400]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(npv(-0.9, &[1.0; 10]).unwrap().is_finite());
    }

    #[test]
    fn rate_is_the_documented_approximation() {
        let approx = rate(10.0, 100.0, 1000.0).unwrap();
        assert_abs_diff_eq!(approx, 0.061_445_671_057_046_86, epsilon = 1e-12);
    }

    #[test]
    fn rate_is_not_the_inverse_of_pv() {
        let present_value = pv(0.05, 10.0, 100.0).unwrap();
        let approx = rate(10.0, 100.0, present_value).unwrap();
        assert!((approx - 0.05).abs() > 0.01, "approx = {approx}");
    }

    #[test]
    fn rate_zero_present_value_is_invalid() {
        assert!(matches!(
            rate(10.0, 100.0, 0.0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn rate_singular_ratio_is_invalid() {
        // payment / pv == -1 puts a zero base under a negative exponent.
        assert!(matches!(
            rate(10.0, -100.0, 100.0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn annuity_rate_inverts_pv() {
        let present_value = pv(0.05, 10.0, 100.0).unwrap();
        let exact = annuity_rate(10.0, 100.0, present_value).unwrap();
        assert_abs_diff_eq!(exact, 0.05, epsilon = 1e-9);
    }

    #[test]
    fn annuity_rate_zero_and_negative_rates() {
        assert_abs_diff_eq!(annuity_rate(10.0, 100.0, 1000.0).unwrap(), 0.0, epsilon = 1e-8);
        let present_value = pv(-0.02, 12.0, 50.0).unwrap();
        assert_abs_diff_eq!(
            annuity_rate(12.0, 50.0, present_value).unwrap(),
            -0.02,
            epsilon = 1e-9
        );
    }

    #[test]
    fn annuity_rate_rejects_mismatched_signs() {
        assert!(matches!(
            annuity_rate(10.0, 100.0, -772.17),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            annuity_rate(0.0, 100.0, 772.17),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn annuity_rate_outside_bracket_is_degenerate() {
        // Ten payments of 100 are worth far less than 1 today only at rates
        // above 1000 %.
        assert!(matches!(
            annuity_rate(10.0, 100.0, 1.0),
            Err(Error::DegenerateInput(_))
        ));
    }
}

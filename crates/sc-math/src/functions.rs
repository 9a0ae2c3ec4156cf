//! Spreadsheet math and statistics functions: `SUM`, `AVERAGE`, `ROUND`,
//! `SQRT`, `POWER`, `SIN`, `COS`, `TAN`, `MEDIAN`, `STDEV`.
//!
//! Inputs are plain slices; the caller's data is never reordered.

use crate::rounding::{self, Rounding};
use crate::statistics::Statistics;
use sc_core::{ensure, Real, Result};

/// `SUM` — total of `values`; `0` for an empty slice.
pub fn sum(values: &[Real]) -> Real {
    values.iter().copied().collect::<Statistics>().sum()
}

/// `AVERAGE` — arithmetic mean.
///
/// # Errors
/// [`sc_core::Error::InvalidArgument`] for an empty slice.
pub fn average(values: &[Real]) -> Result<Real> {
    let stats: Statistics = values.iter().copied().collect();
    match stats.mean() {
        Some(mean) => Ok(mean),
        None => Err(sc_core::Error::InvalidArgument(
            "AVERAGE of an empty list".into(),
        )),
    }
}

/// `ROUND` — round half away from zero to `decimals` places.
pub fn round(value: Real, decimals: i32) -> Real {
    rounding::round(value, decimals, Rounding::Closest)
}

/// `SQRT`.
///
/// # Errors
/// [`sc_core::Error::InvalidArgument`] for a negative or NaN argument.
pub fn sqrt(value: Real) -> Result<Real> {
    ensure!(value >= 0.0, "SQRT of negative value {value}");
    Ok(value.sqrt())
}

/// `POWER` — `base` raised to `exponent`.
///
/// # Errors
/// [`sc_core::Error::InvalidArgument`] when the result is not a finite
/// number (`0^-1`, `(-8)^(1/3)`, overflow).
pub fn power(base: Real, exponent: Real) -> Result<Real> {
    let result = base.powf(exponent);
    ensure!(
        result.is_finite(),
        "POWER({base}, {exponent}) is not a finite number"
    );
    Ok(result)
}

/// `SIN` of an angle in radians.
pub fn sin(angle: Real) -> Real {
    angle.sin()
}

/// `COS` of an angle in radians.
pub fn cos(angle: Real) -> Real {
    angle.cos()
}

/// `TAN` of an angle in radians.
pub fn tan(angle: Real) -> Real {
    angle.tan()
}

/// `MEDIAN` — middle value, or the mean of the two middle values for an
/// even count.
///
/// # Errors
/// [`sc_core::Error::InvalidArgument`] for an empty slice or one containing
/// NaN.
pub fn median(values: &[Real]) -> Result<Real> {
    ensure!(!values.is_empty(), "MEDIAN of an empty list");
    ensure!(
        values.iter().all(|v| !v.is_nan()),
        "MEDIAN of a list containing NaN"
    );
    let mut sorted = values.to_vec();
    sorted.sort_by(Real::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// `STDEV` — population standard deviation (divides by `n`).
///
/// # Errors
/// [`sc_core::Error::InvalidArgument`] for an empty slice.
pub fn stdev(values: &[Real]) -> Result<Real> {
    let stats: Statistics = values.iter().copied().collect();
    stats
        .population_std_dev()
        .ok_or_else(|| sc_core::Error::InvalidArgument("STDEV of an empty list".into()))
}

/// Sample standard deviation (divides by `n - 1`).
///
/// # Errors
/// [`sc_core::Error::InvalidArgument`] for fewer than two values.
pub fn stdev_sample(values: &[Real]) -> Result<Real> {
    let stats: Statistics = values.iter().copied().collect();
    stats.std_dev().ok_or_else(|| {
        sc_core::Error::InvalidArgument(format!(
            "sample STDEV needs at least 2 values, got {}",
            values.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use sc_core::Error;

    #[test]
    fn sum_and_average() {
        assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
        assert_eq!(sum(&[-1.0, -2.0, -3.0]), -6.0);
        assert_eq!(sum(&[]), 0.0);
        assert_eq!(average(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
        assert_eq!(average(&[5.0, 10.0, 15.0]).unwrap(), 10.0);
        assert!(matches!(average(&[]), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn round_half_away_from_zero() {
        assert_eq!(round(1.235, 2), 1.24);
        assert_eq!(round(1.234, 2), 1.23);
        assert_eq!(round(2.5, 0), 3.0);
        assert_eq!(round(-2.5, 0), -3.0);
    }

    #[test]
    fn sqrt_and_power() {
        assert_eq!(sqrt(16.0).unwrap(), 4.0);
        assert!(sqrt(-1.0).is_err());
        assert!(sqrt(Real::NAN).is_err());
        assert_eq!(power(2.0, 10.0).unwrap(), 1024.0);
        assert!(power(0.0, -1.0).is_err());
        assert!(power(-8.0, 1.0 / 3.0).is_err());
    }

    #[test]
    fn trig_passthrough() {
        assert_abs_diff_eq!(sin(std::f64::consts::FRAC_PI_2), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(cos(0.0), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(tan(std::f64::consts::FRAC_PI_4), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn median_does_not_reorder_input() {
        let values = [5.0, 1.0, 4.0, 2.0];
        assert_eq!(median(&values).unwrap(), 3.0);
        assert_eq!(values, [5.0, 1.0, 4.0, 2.0]);
        assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
        assert!(median(&[]).is_err());
        assert!(median(&[1.0, Real::NAN]).is_err());
    }

    #[test]
    fn population_and_sample_stdev() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_abs_diff_eq!(stdev(&values).unwrap(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            stdev_sample(&values).unwrap(),
            (32.0_f64 / 7.0).sqrt(),
            epsilon = 1e-12
        );
        assert!(stdev(&[]).is_err());
        assert!(stdev_sample(&[1.0]).is_err());
    }
}

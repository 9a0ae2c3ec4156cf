//! Rounding conventions.

use sc_core::Real;

/// Rounding convention applied at a given number of decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// No rounding — return the value unchanged.
    None,
    /// Round up (towards positive infinity).
    Up,
    /// Round down (towards negative infinity).
    Down,
    /// Round to nearest, ties away from zero. This is the spreadsheet
    /// `ROUND` convention.
    Closest,
    /// Round towards zero (truncation).
    Floor,
    /// Round away from zero.
    Ceiling,
}

/// Round `value` to `precision` decimal places using the given convention.
///
/// A negative `precision` rounds to the left of the decimal point
/// (`-1` = tens, `-2` = hundreds).
pub fn round(value: Real, precision: i32, convention: Rounding) -> Real {
    if matches!(convention, Rounding::None) {
        return value;
    }
    let mult = 10_f64.powi(precision);
    let scaled = value * mult;
    let rounded = match convention {
        Rounding::None => scaled,
        Rounding::Up => scaled.ceil(),
        Rounding::Down => scaled.floor(),
        Rounding::Closest => scaled.round(),
        Rounding::Floor => scaled.trunc(),
        Rounding::Ceiling => {
            if scaled >= 0.0 {
                scaled.ceil()
            } else {
                scaled.floor()
            }
        }
    };
    rounded / mult
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_rounding() {
        assert!((round(1.2345, 2, Rounding::Closest) - 1.23).abs() < 1e-10);
        assert!((round(1.2355, 2, Rounding::Closest) - 1.24).abs() < 1e-10);
        assert!((round(-2.5, 0, Rounding::Closest) + 3.0).abs() < 1e-10);
    }

    #[test]
    fn directional_rounding() {
        assert!((round(1.2301, 2, Rounding::Up) - 1.24).abs() < 1e-10);
        assert!((round(-1.2301, 2, Rounding::Up) + 1.23).abs() < 1e-10);
        assert!((round(-1.2301, 2, Rounding::Down) + 1.24).abs() < 1e-10);
        assert!((round(-1.2399, 2, Rounding::Floor) + 1.23).abs() < 1e-10);
        assert!((round(-1.2301, 2, Rounding::Ceiling) + 1.24).abs() < 1e-10);
    }

    #[test]
    fn negative_precision() {
        assert!((round(1234.5, -2, Rounding::Closest) - 1200.0).abs() < 1e-9);
        assert!((round(1250.0, -2, Rounding::Closest) - 1300.0).abs() < 1e-9);
    }

    #[test]
    fn none_is_identity() {
        assert_eq!(round(1.23456, 2, Rounding::None), 1.23456);
    }
}

//! `CONVERT` between units of length.

use sc_core::{Error, Real, Result};
use std::fmt;
use std::str::FromStr;

/// A unit of length understood by [`convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    /// `"mm"`
    Millimetre,
    /// `"cm"`
    Centimetre,
    /// `"m"`
    Metre,
    /// `"km"`
    Kilometre,
    /// `"in"`
    Inch,
    /// `"ft"`
    Foot,
    /// `"yd"`
    Yard,
    /// `"mi"`, the international mile.
    Mile,
}

impl LengthUnit {
    /// Length of one unit in metres.
    pub fn metres(self) -> Real {
        match self {
            LengthUnit::Millimetre => 0.001,
            LengthUnit::Centimetre => 0.01,
            LengthUnit::Metre => 1.0,
            LengthUnit::Kilometre => 1000.0,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Yard => 0.9144,
            LengthUnit::Mile => 1609.344,
        }
    }

    /// The spreadsheet symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Millimetre => "mm",
            LengthUnit::Centimetre => "cm",
            LengthUnit::Metre => "m",
            LengthUnit::Kilometre => "km",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
            LengthUnit::Yard => "yd",
            LengthUnit::Mile => "mi",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mm" => Ok(LengthUnit::Millimetre),
            "cm" => Ok(LengthUnit::Centimetre),
            "m" => Ok(LengthUnit::Metre),
            "km" => Ok(LengthUnit::Kilometre),
            "in" => Ok(LengthUnit::Inch),
            "ft" => Ok(LengthUnit::Foot),
            "yd" => Ok(LengthUnit::Yard),
            "mi" => Ok(LengthUnit::Mile),
            other => Err(Error::InvalidArgument(format!(
                "unsupported unit \"{other}\""
            ))),
        }
    }
}

/// `CONVERT` — express `value` given in `from` units in `to` units.
///
/// Unit symbols are case-sensitive, as in spreadsheets.
///
/// # Errors
/// [`Error::InvalidArgument`] if either unit is not a supported length
/// unit.
///
/// ```
/// let cm = sc_engineering::convert(1.0, "in", "cm").unwrap();
/// assert!((cm - 2.54).abs() < 1e-12);
/// ```
pub fn convert(value: Real, from: &str, to: &str) -> Result<Real> {
    let from: LengthUnit = from.parse()?;
    let to: LengthUnit = to.parse()?;
    if from == to {
        return Ok(value);
    }
    Ok(value * from.metres() / to.metres())
}

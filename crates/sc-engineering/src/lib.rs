//! # sc-engineering
//!
//! Engineering functions: unit conversion, radix parsing, and complex
//! numbers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `COMPLEX`.
pub mod complex;

/// `CONVERT` and the supported length units.
pub mod convert;

/// `BIN2DEC` and `HEX2DEC`.
pub mod radix;

pub use complex::{complex, complex_text};
pub use convert::{convert, LengthUnit};
pub use num_complex::Complex64;
pub use radix::{bin2dec, hex2dec};

//! `BIN2DEC` and `HEX2DEC`: unsigned radix strings to integers.

use sc_core::{ensure, Error, Result};

fn parse_radix(text: &str, radix: u32, name: &str) -> Result<i64> {
    ensure!(!text.is_empty(), "{name} of an empty string");
    ensure!(
        text.chars().all(|c| c.is_digit(radix)),
        "{name}: \"{text}\" is not a base-{radix} number"
    );
    i64::from_str_radix(text, radix)
        .map_err(|e| Error::InvalidArgument(format!("{name}: \"{text}\": {e}")))
}

/// `BIN2DEC` — value of a string of binary digits.
///
/// # Errors
/// [`Error::InvalidArgument`] for an empty string, a character other than
/// `0`/`1`, or a value that does not fit in an `i64`.
pub fn bin2dec(text: &str) -> Result<i64> {
    parse_radix(text, 2, "BIN2DEC")
}

/// `HEX2DEC` — value of a string of hexadecimal digits (either case).
///
/// # Errors
/// [`Error::InvalidArgument`] for an empty string, a non-hex character, or a
/// value that does not fit in an `i64`.
pub fn hex2dec(text: &str) -> Result<i64> {
    parse_radix(text, 16, "HEX2DEC")
}

//! `COMPLEX`: complex numbers and their spreadsheet text form.

use num_complex::Complex64;
use sc_core::Real;

/// `COMPLEX` — the number `real + imaginary·i`.
pub fn complex(real: Real, imaginary: Real) -> Complex64 {
    Complex64::new(real, imaginary)
}

/// `COMPLEX` in its text form: `"3 + 4i"`, `"3 - 4i"`.
///
/// ```
/// assert_eq!(sc_engineering::complex_text(3.0, 4.0), "3 + 4i");
/// ```
pub fn complex_text(real: Real, imaginary: Real) -> String {
    if imaginary.is_sign_negative() && imaginary != 0.0 {
        format!("{real} - {}i", -imaginary)
    } else {
        format!("{real} + {imaginary}i")
    }
}

//! # sheetcalc
//!
//! Stateless spreadsheet-style calculation functions.
//!
//! This crate is a **façade** that re-exports the function groups from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `sc-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! sheetcalc = "0.1"
//! ```
//!
//! ```rust
//! use sheetcalc::financial::{irr, npv, pv};
//!
//! let value = pv(0.05, 10.0, 100.0)?;
//! assert!((value - 772.17).abs() < 0.01);
//!
//! let flows = [-1000.0, 300.0, 420.0, 680.0];
//! let r = irr(&flows)?;
//! assert!(npv(r, &flows)?.abs() < 1e-4);
//! # Ok::<(), sheetcalc::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use sc_core as core;

/// Time value of money: `PV`, `NPV`, `IRR`, `RATE`.
pub use sc_financial as financial;

/// Math and statistics functions and the numerical solvers.
pub use sc_math as math;

/// `FIND` and `SEARCH`.
pub use sc_text as text;

/// Business-day calendars and `NETWORKDAYS`.
pub use sc_time as datetime;

/// `CONVERT`, `BIN2DEC`, `HEX2DEC`, `COMPLEX`.
pub use sc_engineering as engineering;

pub use sc_core::{Error, Rate, Real, Result};

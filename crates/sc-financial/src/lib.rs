//! # sc-financial
//!
//! Time-value-of-money functions: present value of an annuity (`PV`), net
//! present value of a cash-flow series (`NPV`), internal rate of return
//! (`IRR`), and the closed-form `RATE` approximation together with its exact
//! counterpart [`annuity_rate`].
//!
//! Every function is pure. Failures are returned as [`sc_core::Error`]
//! values; nothing here panics on bad input.
//!
//! ```rust
//! use sc_financial::{irr, npv};
//!
//! let flows = [-1000.0, 300.0, 420.0, 680.0];
//! let r = irr(&flows).unwrap();
//! assert!(npv(r, &flows).unwrap().abs() < 1e-4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Internal rate of return.
pub mod irr;

/// Present value, net present value, and rate functions.
pub mod tvm;

pub use irr::{irr, irr_with, IrrConfig, IrrSolution};
pub use tvm::{annuity_rate, npv, pv, rate};

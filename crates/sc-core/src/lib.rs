//! # sc-core
//!
//! Core types and error definitions for sheetcalc.
//!
//! This crate provides the building blocks shared by every function group:
//! the floating-point aliases and the error taxonomy with its `ensure!` /
//! `fail!` convenience macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A per-period rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// Alias used for counts and indices.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};

//! # sc-text
//!
//! Substring search in the spreadsheet style: `FIND` is case-sensitive,
//! `SEARCH` is not.
//!
//! Positions are 0-based and counted in `char`s, not bytes, for both the
//! `start` argument and the returned index. A missing match is `None`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `FIND` and `SEARCH`.
pub mod search;

pub use search::{find, search};

//! Command-line command handlers for zmanclock.
//!
//! Each command lives in its own submodule: `today` prints the daily report
//! and `convert` turns a Hebrew date into its Gregorian date.

pub mod convert;
pub mod today;

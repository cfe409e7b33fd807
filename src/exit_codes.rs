//! Exit code policy for scorejoin.
//!
#![allow(dead_code)] // Constants defined for policy documentation, used selectively
//!
//! ## Success (0)
//!
//! A completed run exits `0`, including runs that found zero matches.
//! "Nothing matched" is a result, not a failure.
//!
//! ## Usage Errors (2)
//!
//! Bad flags or arguments are reported by clap with its standard exit
//! code `2`.
//!
//! ## Operational Failures (10+)
//!
//! Operational failures (missing inputs, malformed JSON, write errors)
//! use codes >= 10. This separation allows automation to distinguish:
//! - "The run happened and this is what it found" (0)
//! - "The run could not happen" (10+)

/// Exit code: run completed
pub const SUCCESS: i32 = 0;

/// Exit code: CLI usage error (emitted by clap)
pub const USAGE: i32 = 2;

/// Exit code: general operational failure
pub const OPERATIONAL_FAILURE: i32 = 10;

//! Shared terminal utilities.
//!
//! Box drawing and entropy reporting. Everything here writes to stderr so
//! stdout carries nothing but passwords.

mod output;

pub use output::*;

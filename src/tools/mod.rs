//! The tools module provides helper functions for middle_out.
//!
//! The tools are:
//! - cli: Command line interface.
//! - freq_count: Byte frequency count feeding the entropy model.

pub mod cli;
pub mod freq_count;

//! The lz77 module is the match-finding subsystem for middle_out.
//!
//! The parser walks the input once, greedily replacing repeated runs of
//! three or more bytes with (distance, length) back-references into a
//! 32 KiB sliding window. Whatever it cannot reference survives as a
//! literal for the entropy coder.
//!
//! A suffix array construction lives alongside the parser as an
//! alternative match-finding backend; the compression pipeline does not
//! currently call into it.

pub mod parser;
pub mod suffix_array;

//! The bitstream module is the bit-level I/O subsystem for middle_out.
//!
//! The parser emits one flag bit per item (literal or match), and those
//! bits are packed MSB-first into the flag blob of the container. The
//! writer and reader here mirror each other exactly: the first bit
//! written lands in bit 7 of the first byte, and the reader hands it
//! back first.
//!
//! This subsystem is designed around the needs of the container format.
//! It is not intended as a general-purpose bit I/O library.

pub mod bitreader;
pub mod bitwriter;

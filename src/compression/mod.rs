//! The compression module holds the drivers and the container format.
//!
//! Compression happens in the following steps:
//! - Frequency model: count every byte of the input and normalize to the
//!   12-bit probability scale.
//! - LZ77 parse: greedily replace repeated runs with back-references,
//!   leaving a literal stream, a match stream, and one flag bit per item.
//! - Packing: flags are bit-packed MSB first; matches become three-byte
//!   records; literals run through the rANS coder in reverse order.
//! - Framing: a 24-byte header followed by the rANS, flag, match, and
//!   model blobs.
//!
//! Decompression is the inverse, driven by the flag stream: each 0-bit
//! pops a literal out of the rANS decoder, each 1-bit replays a match
//! record against the output produced so far. The recorded original size
//! is the termination condition.

pub mod compress;
pub mod container;
pub mod decompress;

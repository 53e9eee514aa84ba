//! middle_out: a single-file lossless byte compressor.
//!
//! The pipeline pairs a greedy LZ77 parse over a 32 KiB sliding window
//! with a rANS entropy coder driven by a static order-0 byte model. The
//! parse yields three streams - flags, match records, and literals -
//! which are framed together with the model into one self-contained
//! container. Decompression replays the flag stream against the match
//! and literal streams to rebuild the input byte for byte.
//!
//! Basic usage to compress a file:
//!
//! ```text
//! $> middle_out compress test.txt test.mido
//! ```
//!
//! And to get the original back:
//!
//! ```text
//! $> middle_out decompress test.mido test.txt
//! ```

pub mod bitstream;
pub mod compression;
pub mod error;
pub mod lz77;
pub mod rans_coding;
pub mod tools;

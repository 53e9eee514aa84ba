//! Error types for the compression pipeline.

use thiserror::Error;

/// Everything that can go wrong while compressing or decompressing.
///
/// Decode-side errors abort the whole operation; partial output is never
/// written.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be read.
    #[error("cannot read input: {0}")]
    InputIo(#[source] std::io::Error),

    /// The output file could not be written.
    #[error("cannot write output: {0}")]
    OutputIo(#[source] std::io::Error),

    /// Container magic mismatch.
    #[error("not a middle_out container (bad magic)")]
    BadMagic,

    /// The header or a declared blob extends past the end of the file.
    #[error("container truncated: need {needed} bytes, have {have}")]
    ShortContainer { needed: usize, have: usize },

    /// The model blob has the wrong size, or its frequencies do not sum
    /// to the probability scale.
    #[error("invalid model blob")]
    BadModel,

    /// A match record references bytes before the start of the output.
    #[error("invalid match distance {distance} at output position {position}")]
    BadDistance { distance: u16, position: usize },

    /// The flag stream requests more match records than the match blob holds.
    #[error("match blob exhausted")]
    MatchUnderflow,

    /// The reconstructed output length does not equal the recorded size.
    #[error("size mismatch: expected {expected} bytes, produced {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// A specialized Result type for compression operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for the radix-huff coding library.
//!
//! All operations return structured errors rather than panicking.
//! Computations here are deterministic and pure, so nothing is retried;
//! the surrounding application decides how to present failures.

use thiserror::Error;

/// Top-level error type for all operations in the library.
///
/// Each variant corresponds to a specific failure domain:
/// - Model: constructing a frequency model from a raw distribution
/// - Codec: encoding text or decoding a digit stream
/// - Analysis: computing efficiency statistics
#[derive(Debug, Error)]
pub enum Error {
    /// The supplied distribution or radix is unusable
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// Encode or decode failure against a built code
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Efficiency analysis failure
    #[error("analysis error: {0}")]
    Analysis(#[from] AnalysisError),
}

/// Frequency model construction errors.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Radix outside the supported range (codeword digits are 0-9a-z)
    #[error("invalid radix {0}: must be between 2 and 36")]
    InvalidRadix(u32),

    /// No symbols supplied (cannot build a code)
    #[error("empty alphabet: at least one symbol is required")]
    EmptyAlphabet,

    /// The same symbol appears twice in the distribution
    #[error("duplicate symbol {0:?}")]
    DuplicateSymbol(char),

    /// A probability outside (0, 1]
    #[error("invalid probability {probability} for symbol {symbol:?}: must be in (0, 1]")]
    InvalidProbability { symbol: char, probability: f64 },

    /// Probabilities are grossly unnormalized
    #[error("probabilities sum to {sum}, expected 1 within 1e-6 relative deviation")]
    Unnormalized { sum: f64 },
}

/// Encode/decode errors.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Encode requested for a symbol absent from the code table
    #[error("symbol {0:?} has no codeword")]
    UnknownSymbol(char),

    /// Decode hit a digit outside [0, radix-1] or a branch no codeword occupies
    #[error("invalid digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },

    /// Decode input ended in the middle of a codeword
    #[error("digit stream truncated mid-codeword at position {position}")]
    TruncatedStream { position: usize },
}

/// Efficiency analysis errors.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Average codeword length is zero, so efficiency is undefined
    #[error("degenerate model: average code length is zero")]
    DegenerateModel,
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

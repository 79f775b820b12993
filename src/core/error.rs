//! Error types for SAX configuration, comparison and windowing.

use thiserror::Error;

/// Result type alias for SAX operations.
pub type SaxResult<T> = Result<T, SaxError>;

/// All failures a SAX operation can report.
///
/// Every variant is raised before any partial result is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SaxError {
    /// Alphabet size has no breakpoint table entry.
    #[error("alphabet size {size} not supported: must be in [3, 20]")]
    UnsupportedAlphabetSize { size: usize },

    /// Word size of zero cannot produce any segment.
    #[error("word size must be at least 1")]
    InvalidWordSize,

    /// Compared strings differ in length.
    #[error("strings have different lengths: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A byte in a compared string is not a letter of the configured alphabet.
    #[error("symbol {symbol:?} at position {position} is outside the alphabet")]
    UnknownSymbol { symbol: char, position: usize },

    /// Overlap leaves no forward progress between consecutive windows.
    #[error("overlap {overlap} is not smaller than window size {window_size}")]
    OverlapTooLarge { overlap: usize, window_size: usize },

    /// Zero subsequences requested from the sliding window.
    #[error("number of subsequences must be at least 1")]
    InvalidSubsequenceCount,

    /// A sized sliding window was requested before any window size was set.
    #[error("window size has not been set")]
    WindowSizeUnset,
}

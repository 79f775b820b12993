use crate::core::breakpoints::breakpoints;
use crate::core::error::{SaxError, SaxResult};

/// Base letter; symbol `j` of a word is `LETTER_OFFSET + j`.
pub const LETTER_OFFSET: u8 = b'a';

/// Default near-zero-variance tolerance used by [`SaxConfig::with_defaults`].
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Validated configuration for SAX transforms.
///
/// Construction fails for unsupported alphabet sizes, so every live instance
/// carries a breakpoint table of exactly `alphabet_size - 1` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct SaxConfig {
    word_size: usize,
    alphabet_size: usize,
    epsilon: f64,
    breakpoints: &'static [f64],
}

impl SaxConfig {
    /// Create a configuration producing `word_size` symbols over `alphabet_size` letters.
    ///
    /// `epsilon` is the standard-deviation threshold below which a series is
    /// treated as flat and normalizes to all zeros.
    pub fn new(word_size: usize, alphabet_size: usize, epsilon: f64) -> SaxResult<Self> {
        if word_size == 0 {
            return Err(SaxError::InvalidWordSize);
        }
        let breakpoints = breakpoints(alphabet_size)
            .ok_or(SaxError::UnsupportedAlphabetSize { size: alphabet_size })?;

        Ok(Self {
            word_size,
            alphabet_size,
            epsilon,
            breakpoints,
        })
    }

    /// Same as [`SaxConfig::new`] with `epsilon = DEFAULT_EPSILON`.
    pub fn with_defaults(word_size: usize, alphabet_size: usize) -> SaxResult<Self> {
        Self::new(word_size, alphabet_size, DEFAULT_EPSILON)
    }

    pub fn word_size(&self) -> usize {
        self.word_size
    }

    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Ascending Gaussian cut points for this alphabet.
    pub fn breakpoints(&self) -> &'static [f64] {
        self.breakpoints
    }

    /// Letter for ordinal `index` (0-based), or `None` past the alphabet.
    pub fn letter(&self, index: usize) -> Option<char> {
        (index < self.alphabet_size).then(|| char::from(LETTER_OFFSET + index as u8))
    }

    /// Ordinal of `symbol` in this alphabet, or `None` if it is not a letter of it.
    #[inline]
    pub fn letter_index(&self, symbol: u8) -> Option<usize> {
        let idx = symbol.checked_sub(LETTER_OFFSET)? as usize;
        (idx < self.alphabet_size).then_some(idx)
    }

    /// Multiplier correcting MINDIST for reducing `series_len` points to `word_size` symbols.
    pub fn scaling_factor(&self, series_len: usize) -> f64 {
        (series_len as f64 / self.word_size as f64).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_valid_range() {
        for k in 3..=20 {
            let config = SaxConfig::new(6, k, 1e-6).unwrap();
            assert_eq!(config.alphabet_size(), k);
            assert_eq!(config.breakpoints().len(), k - 1);
        }
    }

    #[test]
    fn test_config_rejects_alphabet_size() {
        assert_eq!(
            SaxConfig::new(6, 2, 1e-6),
            Err(SaxError::UnsupportedAlphabetSize { size: 2 })
        );
        assert_eq!(
            SaxConfig::new(6, 21, 1e-6),
            Err(SaxError::UnsupportedAlphabetSize { size: 21 })
        );
    }

    #[test]
    fn test_config_rejects_zero_word_size() {
        assert_eq!(SaxConfig::new(0, 5, 1e-6), Err(SaxError::InvalidWordSize));
    }

    #[test]
    fn test_letters() {
        let config = SaxConfig::with_defaults(4, 5).unwrap();
        assert_eq!(config.letter(0), Some('a'));
        assert_eq!(config.letter(4), Some('e'));
        assert_eq!(config.letter(5), None);
        assert_eq!(config.letter_index(b'a'), Some(0));
        assert_eq!(config.letter_index(b'e'), Some(4));
        assert_eq!(config.letter_index(b'f'), None);
        assert_eq!(config.letter_index(b'A'), None);
    }

    #[test]
    fn test_scaling_factor() {
        let config = SaxConfig::with_defaults(4, 5).unwrap();
        assert!((config.scaling_factor(16) - 2.0).abs() < 1e-12);
        assert!((config.scaling_factor(4) - 1.0).abs() < 1e-12);
    }
}

use crate::algorithms::alphabetize::alphabetize;
use crate::algorithms::normalize::znormalize;
use crate::algorithms::paa::paa;
use crate::core::config::SaxConfig;

/// A series encoded as a SAX word.
#[derive(Debug, Clone, PartialEq)]
pub struct SaxWord {
    /// One letter per PAA frame.
    pub symbols: String,
    /// Half-open range of the source series behind each letter.
    pub indices: Vec<(usize, usize)>,
    /// `sqrt(n / word_size)` for the encoded series; pass it to a comparison to
    /// scale MINDIST back to the original resolution.
    pub scaling_factor: f64,
}

impl SaxWord {
    pub fn as_bytes(&self) -> &[u8] {
        self.symbols.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Encode `series` as a SAX word: z-normalize, PAA, then alphabetize.
pub fn to_letter_representation(series: &[f64], config: &SaxConfig) -> SaxWord {
    let normalized = znormalize(series, config.epsilon());
    let reduced = paa(&normalized, config.word_size());

    SaxWord {
        symbols: alphabetize(&reduced.values, config.breakpoints()),
        indices: reduced.indices,
        scaling_factor: config.scaling_factor(series.len()),
    }
}

pub mod algorithms;
pub mod core;

pub use crate::algorithms::alphabetize::{alphabetize, symbol_index};
pub use crate::algorithms::compare::{batch_mindist, mindist};
pub use crate::algorithms::normalize::znormalize;
pub use crate::algorithms::paa::{paa, Paa};
pub use crate::algorithms::sliding_window::{
    sliding_window, sliding_window_with_size, SlidingWindow,
};
pub use crate::algorithms::transform::{to_letter_representation, SaxWord};
pub use crate::core::breakpoints::{breakpoints, MAX_ALPHABET_SIZE, MIN_ALPHABET_SIZE};
pub use crate::core::config::{SaxConfig, DEFAULT_EPSILON, LETTER_OFFSET};
pub use crate::core::distance_table::LetterDistanceTable;
pub use crate::core::error::{SaxError, SaxResult};

use tracing::debug;

/// High-level facade for SAX encoding and comparison.
///
/// Transforms take `&self` and report their derived scaling factor and window
/// size in their results. The two pieces of state a `Sax` remembers,
/// the scaling factor applied by [`Sax::compare_strings`] and the window
/// length used by [`Sax::sliding_window_sized`], only change through their
/// setters.
///
/// # Examples
///
/// ```
/// use sax_rs::Sax;
///
/// let mut sax = Sax::with_params(6, 5, 1e-6).unwrap();
/// let word = sax.to_letter_representation(&[7.0, 1.0, 4.0, 4.0, 4.0, 4.0]);
/// assert_eq!(word.symbols, "eacccc");
///
/// sax.set_scaling_factor(word.scaling_factor);
/// let d = sax.compare_strings(word.as_bytes(), b"eacccc").unwrap();
/// assert_eq!(d, 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Sax {
    config: SaxConfig,
    table: LetterDistanceTable,
    scaling_factor: f64,
    window_size: Option<usize>,
}

impl Sax {
    /// Create a facade for a validated configuration, building its distance table.
    pub fn new(config: SaxConfig) -> Self {
        let table = LetterDistanceTable::new(&config);
        debug!(
            word_size = config.word_size(),
            alphabet_size = config.alphabet_size(),
            epsilon = config.epsilon(),
            "SAX configured"
        );
        Self {
            config,
            table,
            scaling_factor: 1.0,
            window_size: None,
        }
    }

    /// Validate parameters and create a facade in one step.
    pub fn with_params(word_size: usize, alphabet_size: usize, epsilon: f64) -> SaxResult<Self> {
        SaxConfig::new(word_size, alphabet_size, epsilon).map(Self::new)
    }

    pub fn config(&self) -> &SaxConfig {
        &self.config
    }

    pub fn distance_table(&self) -> &LetterDistanceTable {
        &self.table
    }

    /// Scaling factor currently applied by [`Sax::compare_strings`]. Starts at 1.
    pub fn scaling_factor(&self) -> f64 {
        self.scaling_factor
    }

    /// Override the scaling factor used by subsequent comparisons.
    pub fn set_scaling_factor(&mut self, scaling_factor: f64) {
        self.scaling_factor = scaling_factor;
    }

    /// Window length used by [`Sax::sliding_window_sized`], if set.
    pub fn window_size(&self) -> Option<usize> {
        self.window_size
    }

    pub fn set_window_size(&mut self, window_size: usize) {
        self.window_size = Some(window_size);
    }

    /// Encode a series as a SAX word.
    pub fn to_letter_representation(&self, series: &[f64]) -> SaxWord {
        to_letter_representation(series, &self.config)
    }

    /// MINDIST between two words, scaled by [`Sax::scaling_factor`].
    pub fn compare_strings(&self, a: &[u8], b: &[u8]) -> SaxResult<f64> {
        mindist(a, b, &self.config, &self.table, self.scaling_factor)
    }

    /// MINDIST between two words with an explicit scale.
    pub fn compare_strings_scaled(&self, a: &[u8], b: &[u8], scale: f64) -> SaxResult<f64> {
        mindist(a, b, &self.config, &self.table, scale)
    }

    /// Compare each candidate against `reference`; see [`batch_mindist`] for the
    /// lenient handling of malformed candidates.
    ///
    /// A candidate containing any byte outside the alphabet scores `0.0` as a
    /// whole; its valid positions are not counted.
    pub fn batch_compare<S, R>(&self, candidates: &[S], reference: &R) -> Vec<f64>
    where
        S: AsRef<[u8]> + Sync,
        R: AsRef<[u8]> + ?Sized,
    {
        batch_mindist(
            candidates,
            reference,
            &self.config,
            &self.table,
            self.scaling_factor,
        )
    }

    /// Distance between two letters, or `None` if either is outside the alphabet.
    pub fn letter_distance(&self, a: u8, b: u8) -> Option<f64> {
        let i = self.config.letter_index(a)?;
        let j = self.config.letter_index(b)?;
        Some(self.table.get(i, j))
    }

    /// Encode overlapping windows, one per subsequence; see [`sliding_window`].
    pub fn sliding_window(
        &self,
        series: &[f64],
        num_subsequences: Option<usize>,
        overlap_fraction: Option<f64>,
    ) -> SaxResult<SlidingWindow> {
        sliding_window(series, &self.config, num_subsequences, overlap_fraction)
    }

    /// Encode overlapping windows of the length set by [`Sax::set_window_size`].
    pub fn sliding_window_sized(
        &self,
        series: &[f64],
        overlap_fraction: Option<f64>,
    ) -> SaxResult<SlidingWindow> {
        let window_size = self.window_size.ok_or(SaxError::WindowSizeUnset)?;
        sliding_window_with_size(series, &self.config, window_size, overlap_fraction)
    }
}

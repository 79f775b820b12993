use crate::core::config::SaxConfig;

/// Minimum distance between every pair of letters of one alphabet.
///
/// Row-major `alphabet_size × alphabet_size` matrix built once from the
/// breakpoints. Letters `i` and `j` whose bins touch (`|i - j| <= 1`) are at
/// distance 0; otherwise the distance is the gap between the nearest edges of
/// their bins, `beta[max(i,j) - 1] - beta[min(i,j)]`. The formula is symmetric in
/// `i, j`, so the table is too.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterDistanceTable {
    alphabet_size: usize,
    cells: Vec<f64>,
}

impl LetterDistanceTable {
    /// Build the table for the alphabet described by `config`.
    pub fn new(config: &SaxConfig) -> Self {
        Self::from_breakpoints(config.breakpoints())
    }

    /// Build the table directly from `alphabet_size - 1` ascending breakpoints.
    pub fn from_breakpoints(beta: &[f64]) -> Self {
        let alphabet_size = beta.len() + 1;
        let mut cells = vec![0.0; alphabet_size * alphabet_size];

        for i in 0..alphabet_size {
            for j in 0..alphabet_size {
                if i.abs_diff(j) > 1 {
                    let hi = i.max(j) - 1;
                    let lo = i.min(j);
                    cells[i * alphabet_size + j] = beta[hi] - beta[lo];
                }
            }
        }

        Self {
            alphabet_size,
            cells,
        }
    }

    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    /// Distance between letters with ordinals `i` and `j`.
    ///
    /// Panics if either ordinal is outside the alphabet.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(
            i < self.alphabet_size && j < self.alphabet_size,
            "letter ordinal out of range"
        );
        self.cells[i * self.alphabet_size + j]
    }
}

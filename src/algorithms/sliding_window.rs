use tracing::{debug, trace};

use crate::algorithms::transform::to_letter_representation;
use crate::core::config::SaxConfig;
use crate::core::error::{SaxError, SaxResult};

/// Number of windows used when the caller does not specify one.
pub const DEFAULT_NUM_SUBSEQUENCES: usize = 20;
/// Fraction of each window shared with the next when the caller does not specify one.
pub const DEFAULT_OVERLAP_FRACTION: f64 = 0.9;

/// SAX words of overlapping sub-windows of a series.
#[derive(Debug, Clone, PartialEq)]
pub struct SlidingWindow {
    /// Words of every window, concatenated in traversal order.
    pub symbols: String,
    /// Half-open `(start, end)` range of each window.
    pub window_indices: Vec<(usize, usize)>,
    /// Length of every window.
    pub window_size: usize,
    /// `sqrt(window_size / word_size)`, shared by all windows.
    pub scaling_factor: f64,
}

/// Encode overlapping windows of `series`, splitting it into `num_subsequences`
/// equal-length windows (`floor(n / num_subsequences)` points each).
///
/// `num_subsequences` defaults to 20. `overlap_fraction` defaults to 0.9 when
/// `None` or negative.
///
/// # Errors
/// `InvalidSubsequenceCount` for zero subsequences, `OverlapTooLarge` when the
/// overlap leaves no forward step (including a series too short to fill one
/// window per subsequence).
pub fn sliding_window(
    series: &[f64],
    config: &SaxConfig,
    num_subsequences: Option<usize>,
    overlap_fraction: Option<f64>,
) -> SaxResult<SlidingWindow> {
    let num_subsequences = num_subsequences.unwrap_or(DEFAULT_NUM_SUBSEQUENCES);
    if num_subsequences == 0 {
        return Err(SaxError::InvalidSubsequenceCount);
    }
    let window_size = series.len() / num_subsequences;
    sliding_window_with_size(series, config, window_size, overlap_fraction)
}

/// Encode overlapping windows of `series` of exactly `window_size` points.
///
/// Consecutive windows share `floor(window_size * overlap_fraction)` points and
/// start `window_size - overlap` apart. Each window is normalized and encoded
/// on its own.
///
/// # Errors
/// `OverlapTooLarge` if the forward step would be zero; nothing is encoded in
/// that case.
pub fn sliding_window_with_size(
    series: &[f64],
    config: &SaxConfig,
    window_size: usize,
    overlap_fraction: Option<f64>,
) -> SaxResult<SlidingWindow> {
    let fraction = overlap_fraction
        .filter(|f| *f >= 0.0)
        .unwrap_or(DEFAULT_OVERLAP_FRACTION);
    let overlap = (window_size as f64 * fraction).floor() as usize;
    if overlap >= window_size {
        return Err(SaxError::OverlapTooLarge {
            overlap,
            window_size,
        });
    }
    let move_step = window_size - overlap;

    let n = series.len();
    let mut symbols = String::new();
    let mut window_indices = Vec::new();

    let mut ptr = 0;
    while ptr + window_size <= n {
        let word = to_letter_representation(&series[ptr..ptr + window_size], config);
        trace!(start = ptr, word = %word.symbols, "encoded window");
        symbols.push_str(&word.symbols);
        window_indices.push((ptr, ptr + window_size));
        ptr += move_step;
    }

    debug!(
        n,
        window_size,
        overlap,
        move_step,
        windows = window_indices.len(),
        "sliding window encoded"
    );

    Ok(SlidingWindow {
        symbols,
        window_indices,
        window_size,
        scaling_factor: config.scaling_factor(window_size),
    })
}

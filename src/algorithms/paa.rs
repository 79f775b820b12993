use crate::algorithms::normalize::mean;

/// Piecewise Aggregate Approximation of a series.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paa {
    /// Mean of each frame.
    pub values: Vec<f64>,
    /// Half-open `(start, end)` range of the original series covered by each frame.
    pub indices: Vec<(usize, usize)>,
}

impl Paa {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Reduce `series` to (at most) `word_size` frame means.
///
/// Every frame is `step = ceil(n / word_size)` points wide. Frame `i` starts at
/// `i * (n / word_size)` truncated, with the ratio taken in `f64`, and frames
/// are emitted while they fit entirely inside the series. The float product
/// can round below the exact quotient (n = 30, w = 22 puts frame 11 at 14, not
/// 15), which reference SAX words depend on. When `step` does not divide `n`
/// consecutive frames overlap by a point (uneven PAA); when `word_size > n`
/// the same start can repeat.
///
/// # Panics
/// Panics if `word_size == 0`.
pub fn paa(series: &[f64], word_size: usize) -> Paa {
    assert!(word_size > 0, "word size must be > 0");

    let n = series.len();
    if n == 0 {
        return Paa::default();
    }

    let step_f = n as f64 / word_size as f64;
    let step = step_f.ceil() as usize;
    let mut values = Vec::with_capacity(word_size);
    let mut indices = Vec::with_capacity(word_size);

    let mut frame_start = 0;
    let mut i = 0;
    while frame_start + step <= n {
        let frame_end = frame_start + step;
        values.push(mean(&series[frame_start..frame_end]));
        indices.push((frame_start, frame_end));
        i += 1;
        frame_start = (i as f64 * step_f) as usize;
    }

    Paa { values, indices }
}

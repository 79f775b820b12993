use tracing::debug;

/// Arithmetic mean of `xs`. NaN for an empty slice.
#[inline]
pub(crate) fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Bessel-corrected sample standard deviation around a precomputed `mean`.
fn sample_std(xs: &[f64], mean: f64) -> f64 {
    let total: f64 = xs
        .iter()
        .map(|&x| {
            let d = x - mean;
            d * d
        })
        .sum();
    (total / (xs.len() - 1) as f64).sqrt()
}

/// Z-normalize a series to zero mean and unit (sample) standard deviation.
///
/// Returns a new vector; `series` is left untouched. Each element becomes
/// `(x - mean) * (1 / std)`.
///
/// A series whose standard deviation is below `epsilon`, or that has fewer
/// than two points, is treated as flat and maps to all zeros instead of
/// amplifying noise. An empty series yields an empty vector.
pub fn znormalize(series: &[f64], epsilon: f64) -> Vec<f64> {
    let n = series.len();
    if n == 0 {
        return Vec::new();
    }
    if n < 2 {
        return vec![0.0; n];
    }

    let mu = mean(series);
    let sigma = sample_std(series, mu);
    if sigma < epsilon {
        debug!(n, sigma, epsilon, "near-flat series normalized to zeros");
        return vec![0.0; n];
    }

    let inv_sigma = 1.0 / sigma;
    series.iter().map(|&x| (x - mu) * inv_sigma).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_znormalize_mean_zero_std_one() {
        let ts = vec![7.0, 1.0, 4.0, 4.0, 4.0, 4.0];
        let z = znormalize(&ts, 1e-6);
        assert_eq!(z.len(), ts.len());

        let mu = mean(&z);
        assert_abs_diff_eq!(mu, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sample_std(&z, mu), 1.0, epsilon = 1e-12);

        // mean 4, sample std sqrt(18/5)
        let expected = 3.0 / (18.0_f64 / 5.0).sqrt();
        assert_abs_diff_eq!(z[0], expected, epsilon = 1e-12);
        assert_abs_diff_eq!(z[1], -expected, epsilon = 1e-12);
        assert_abs_diff_eq!(z[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_znormalize_leaves_input_untouched() {
        let ts = vec![1.0, 2.0, 3.0];
        let copy = ts.clone();
        let _ = znormalize(&ts, 1e-6);
        assert_eq!(ts, copy);
    }

    #[test]
    fn test_znormalize_idempotent() {
        let ts: Vec<f64> = (0..50).map(|i| (i as f64 * 0.3).sin() * 5.0 + 2.0).collect();
        let once = znormalize(&ts, 1e-6);
        let twice = znormalize(&once, 1e-6);
        for (a, b) in once.iter().zip(&twice) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_znormalize_empty() {
        assert!(znormalize(&[], 1e-6).is_empty());
    }

    #[test]
    fn test_znormalize_single_point() {
        assert_eq!(znormalize(&[42.0], 1e-6), vec![0.0]);
    }

    #[test]
    fn test_znormalize_constant_series() {
        assert_eq!(znormalize(&[3.0; 8], 1e-6), vec![0.0; 8]);
    }

    #[test]
    fn test_znormalize_below_epsilon() {
        let ts = vec![1.0, 1.0 + 1e-9, 1.0 - 1e-9, 1.0];
        assert_eq!(znormalize(&ts, 1e-6), vec![0.0; 4]);
        // Same data with a tighter tolerance is rescaled
        let z = znormalize(&ts, 1e-12);
        assert!(z.iter().any(|&v| v.abs() > 0.5));
    }
}

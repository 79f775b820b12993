/// Smallest supported alphabet size.
pub const MIN_ALPHABET_SIZE: usize = 3;
/// Largest supported alphabet size.
pub const MAX_ALPHABET_SIZE: usize = 20;

/// Standard normal quantile cut points for `k` equiprobable bins, indexed by `k`.
///
/// Entry `k` holds `k - 1` ascending values. Entries 0..=2 are empty and never
/// handed out; use [`breakpoints`] for checked access. Values are the
/// two-decimal constants tabulated by Lin et al.
static BREAKPOINTS: [&[f64]; MAX_ALPHABET_SIZE + 1] = [
    &[],
    &[],
    &[],
    &[-0.43, 0.43],
    &[-0.67, 0.0, 0.67],
    &[-0.84, -0.25, 0.25, 0.84],
    &[-0.97, -0.43, 0.0, 0.43, 0.97],
    &[-1.07, -0.57, -0.18, 0.18, 0.57, 1.07],
    &[-1.15, -0.67, -0.32, 0.0, 0.32, 0.67, 1.15],
    &[-1.22, -0.76, -0.43, -0.14, 0.14, 0.43, 0.76, 1.22],
    &[-1.28, -0.84, -0.52, -0.25, 0.0, 0.25, 0.52, 0.84, 1.28],
    &[-1.34, -0.91, -0.6, -0.35, -0.11, 0.11, 0.35, 0.6, 0.91, 1.34],
    &[-1.38, -0.97, -0.67, -0.43, -0.21, 0.0, 0.21, 0.43, 0.67, 0.97, 1.38],
    &[-1.43, -1.02, -0.74, -0.5, -0.29, -0.1, 0.1, 0.29, 0.5, 0.74, 1.02, 1.43],
    &[-1.47, -1.07, -0.79, -0.57, -0.37, -0.18, 0.0, 0.18, 0.37, 0.57, 0.79, 1.07, 1.47],
    &[
        -1.5, -1.11, -0.84, -0.62, -0.43, -0.25, -0.08, 0.08, 0.25, 0.43, 0.62, 0.84, 1.11, 1.5,
    ],
    &[
        -1.53, -1.15, -0.89, -0.67, -0.49, -0.32, -0.16, 0.0, 0.16, 0.32, 0.49, 0.67, 0.89, 1.15,
        1.53,
    ],
    &[
        -1.56, -1.19, -0.93, -0.72, -0.54, -0.38, -0.22, -0.07, 0.07, 0.22, 0.38, 0.54, 0.72,
        0.93, 1.19, 1.56,
    ],
    &[
        -1.59, -1.22, -0.97, -0.76, -0.59, -0.43, -0.28, -0.14, 0.0, 0.14, 0.28, 0.43, 0.59,
        0.76, 0.97, 1.22, 1.59,
    ],
    &[
        -1.62, -1.25, -1.0, -0.8, -0.63, -0.48, -0.34, -0.2, -0.07, 0.07, 0.2, 0.34, 0.48, 0.63,
        0.8, 1.0, 1.25, 1.62,
    ],
    &[
        -1.64, -1.28, -1.04, -0.84, -0.67, -0.52, -0.39, -0.25, -0.13, 0.0, 0.13, 0.25, 0.39,
        0.52, 0.67, 0.84, 1.04, 1.28, 1.64,
    ],
];

/// Look up the Gaussian breakpoints for an alphabet of `alphabet_size` letters.
///
/// Returns `None` outside `[MIN_ALPHABET_SIZE, MAX_ALPHABET_SIZE]`.
pub fn breakpoints(alphabet_size: usize) -> Option<&'static [f64]> {
    if (MIN_ALPHABET_SIZE..=MAX_ALPHABET_SIZE).contains(&alphabet_size) {
        Some(BREAKPOINTS[alphabet_size])
    } else {
        None
    }
}

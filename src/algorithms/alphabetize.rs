use crate::core::config::LETTER_OFFSET;

/// Bin of `value` among ascending `breakpoints`.
///
/// Returns the index of the first breakpoint strictly greater than `value`, or
/// `breakpoints.len()` if there is none. A value equal to a breakpoint falls in
/// the upper bin.
#[inline]
pub fn symbol_index(value: f64, breakpoints: &[f64]) -> usize {
    breakpoints
        .iter()
        .position(|&beta| value < beta)
        .unwrap_or(breakpoints.len())
}

/// Map PAA values to letters, `'a'` for the lowest bin.
pub fn alphabetize(values: &[f64], breakpoints: &[f64]) -> String {
    values
        .iter()
        .map(|&v| char::from(LETTER_OFFSET + symbol_index(v, breakpoints) as u8))
        .collect()
}

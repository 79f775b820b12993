#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::core::config::SaxConfig;
use crate::core::distance_table::LetterDistanceTable;
use crate::core::error::{SaxError, SaxResult};

/// MINDIST between two SAX words of equal length.
///
/// `sqrt(sum_k d(a[k], b[k])^2) * scale`, where `d` is the letter distance from
/// `table`. For words produced from series of length `n` with `scale =
/// sqrt(n / word_size)` this lower-bounds the Euclidean distance between the
/// z-normalized series, so it never prunes a true match.
///
/// # Errors
/// `LengthMismatch` for words of different lengths, `UnknownSymbol` for a byte
/// outside the alphabet of `config`.
pub fn mindist(
    a: &[u8],
    b: &[u8],
    config: &SaxConfig,
    table: &LetterDistanceTable,
    scale: f64,
) -> SaxResult<f64> {
    if a.len() != b.len() {
        return Err(SaxError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut sum_sq = 0.0;
    for (position, (&la, &lb)) in a.iter().zip(b).enumerate() {
        let i = lookup(config, la, position)?;
        let j = lookup(config, lb, position)?;
        let d = table.get(i, j);
        sum_sq += d * d;
    }

    Ok(scale * sum_sq.sqrt())
}

#[inline]
fn lookup(config: &SaxConfig, symbol: u8, position: usize) -> SaxResult<usize> {
    config
        .letter_index(symbol)
        .ok_or(SaxError::UnknownSymbol {
            symbol: char::from(symbol),
            position,
        })
}

/// MINDIST of every candidate against one reference word.
///
/// Lenient: a candidate that cannot be compared (wrong length or foreign
/// symbol) scores `0.0`, indistinguishable from an exact match. Callers that
/// must tell the two apart should use [`mindist`] per candidate. One foreign
/// symbol zeroes the whole candidate, not only its own position.
///
/// Output order follows `candidates`. Runs on the rayon pool with the
/// `parallel` feature.
pub fn batch_mindist<S, R>(
    candidates: &[S],
    reference: &R,
    config: &SaxConfig,
    table: &LetterDistanceTable,
    scale: f64,
) -> Vec<f64>
where
    S: AsRef<[u8]> + Sync,
    R: AsRef<[u8]> + ?Sized,
{
    let reference = reference.as_ref();
    let score = |(idx, candidate): (usize, &S)| {
        mindist(candidate.as_ref(), reference, config, table, scale).unwrap_or_else(|err| {
            debug!(idx, %err, "batch comparison degraded to 0");
            0.0
        })
    };

    #[cfg(feature = "parallel")]
    {
        candidates.par_iter().enumerate().map(score).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        candidates.iter().enumerate().map(score).collect()
    }
}

use crate::brevity::brevity_penalty;
use crate::clip::modified_precision;
use crate::error::{BleuError, Result};
use std::hash::Hash;

fn validate<T>(references: &[Vec<T>], n: usize) -> Result<()> {
    if references.is_empty() {
        return Err(BleuError::EmptyReferences);
    }
    if n == 0 {
        return Err(BleuError::InvalidOrder(0));
    }
    Ok(())
}

/// Geometric mean via averaged logs. Any zero (or no values at all) gives
/// exactly 0 so `ln(0)` is never taken.
pub fn geometric_mean(values: &[f64]) -> f64 {
    if values.is_empty() || values.iter().any(|&v| v == 0.0) {
        return 0.0;
    }

    let log_sum: f64 = values.iter().map(|v| v.ln()).sum();
    (log_sum / values.len() as f64).exp()
}

/// Unigram BLEU; same as `ngram_bleu(references, sentence, 1)`.
pub fn uni_bleu<T: Eq + Hash>(references: &[Vec<T>], sentence: &[T]) -> Result<f64> {
    ngram_bleu(references, sentence, 1)
}

/// BLEU for the single n-gram order `n`: brevity penalty times the clipped
/// precision at that order.
pub fn ngram_bleu<T: Eq + Hash>(references: &[Vec<T>], sentence: &[T], n: usize) -> Result<f64> {
    validate(references, n)?;

    let precision = modified_precision(references, sentence, n);
    let penalty = brevity_penalty(references, sentence.len())?;
    log::debug!(
        "ngram bleu: n={} clipped={} total={} bp={}",
        n,
        precision.clipped,
        precision.total,
        penalty
    );
    Ok(penalty * precision.value())
}

/// Cumulative BLEU over orders `1..=n` with uniform weights.
///
/// Returns exactly 0 as soon as any order has zero precision.
pub fn cumulative_bleu<T: Eq + Hash>(
    references: &[Vec<T>],
    sentence: &[T],
    n: usize,
) -> Result<f64> {
    validate(references, n)?;

    // every order past the candidate length has zero precision, so no more
    // than len + 1 iterations ever run
    let mut precisions: Vec<f64> = Vec::with_capacity(n.min(sentence.len()));
    for order in 1..=n {
        let precision = modified_precision(references, sentence, order);
        log::debug!(
            "cumulative bleu: order={} clipped={} total={}",
            order,
            precision.clipped,
            precision.total
        );
        if precision.clipped == 0 {
            return Ok(0.0);
        }
        precisions.push(precision.value());
    }

    let penalty = brevity_penalty(references, sentence.len())?;
    Ok(penalty * geometric_mean(&precisions))
}

use crate::error::{BleuError, Result};

/// Length of the reference closest to `candidate_len`. On ties the earliest
/// reference wins.
pub fn closest_reference_length<T>(references: &[Vec<T>], candidate_len: usize) -> Result<usize> {
    references
        .iter()
        .map(Vec::len)
        .min_by_key(|&len| len.abs_diff(candidate_len))
        .ok_or(BleuError::EmptyReferences)
}

/// Brevity penalty for a candidate of `candidate_len` tokens.
///
/// Candidates longer than the closest reference are not penalised. An empty
/// candidate scores 0 instead of dividing by zero.
pub fn brevity_penalty<T>(references: &[Vec<T>], candidate_len: usize) -> Result<f64> {
    let reference_len = closest_reference_length(references, candidate_len)?;

    let penalty = if candidate_len > reference_len {
        1.0
    } else if candidate_len == 0 {
        0.0
    } else {
        (1.0 - reference_len as f64 / candidate_len as f64).exp()
    };
    log::trace!(
        "brevity penalty: c={} r={} bp={}",
        candidate_len,
        reference_len,
        penalty
    );
    Ok(penalty)
}

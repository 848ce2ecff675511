use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence count per n-gram. N-grams borrow their tokens from the sentence.
pub type CountMap<'a, T> = HashMap<&'a [T], usize>;

/// Sliding window of width `n` (stride 1) over `tokens`.
///
/// Empty when `n` is 0 or longer than the sentence.
pub fn ngrams<T>(tokens: &[T], n: usize) -> impl Iterator<Item = &[T]> + '_ {
    // windows() panics on 0, so an order of 0 becomes a window that never fits
    let width = if n == 0 { tokens.len() + 1 } else { n };
    tokens.windows(width)
}

/// Number of windows of width `n`, i.e. `max(len - n + 1, 0)`.
pub fn ngram_total(len: usize, n: usize) -> usize {
    if n == 0 || n > len {
        return 0;
    }
    len - n + 1
}

pub fn count_ngrams<T: Eq + Hash>(tokens: &[T], n: usize) -> CountMap<'_, T> {
    let mut counts: CountMap<'_, T> = HashMap::new();
    for gram in ngrams(tokens, n) {
        *counts.entry(gram).or_insert(0) += 1;
    }
    counts
}

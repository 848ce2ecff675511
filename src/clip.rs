use crate::ngram::{count_ngrams, ngram_total, CountMap};
use std::collections::HashMap;
use std::hash::Hash;

/// Clip ceilings for order `n`: the highest count of each n-gram in any
/// single reference. Counts are maxed per reference, never summed.
pub fn max_reference_counts<T: Eq + Hash>(references: &[Vec<T>], n: usize) -> CountMap<'_, T> {
    let mut ceilings: CountMap<'_, T> = HashMap::new();
    for reference in references {
        for (gram, count) in count_ngrams(reference, n) {
            let ceiling = ceilings.entry(gram).or_insert(0);
            *ceiling = (*ceiling).max(count);
        }
    }
    ceilings
}

fn get_matches_clipped<T: Eq + Hash>(
    candidate_counts: &CountMap<'_, T>,
    ceilings: &CountMap<'_, T>,
) -> usize {
    let mut matches: usize = 0;
    for (gram, count) in candidate_counts {
        if let Some(ceiling) = ceilings.get(gram) {
            matches += count.min(ceiling);
        }
    }
    matches
}

/// Clipped n-gram precision of one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    pub clipped: usize,
    pub total: usize,
}

impl Precision {
    /// `clipped / total`, or exactly 0 when the candidate has no n-grams.
    pub fn value(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.clipped as f64 / self.total as f64
    }
}

/// Precision of `sentence` at order `n`, with ceilings rebuilt for that order.
pub fn modified_precision<T: Eq + Hash>(references: &[Vec<T>], sentence: &[T], n: usize) -> Precision {
    let candidate_counts = count_ngrams(sentence, n);
    let ceilings = max_reference_counts(references, n);
    Precision {
        clipped: get_matches_clipped(&candidate_counts, &ceilings),
        total: ngram_total(sentence.len(), n),
    }
}

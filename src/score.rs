use crate::bleu::{cumulative_bleu, ngram_bleu, uni_bleu};
use crate::error::{BleuError, Result};
use once_cell::sync::OnceCell;
use tokio::runtime::Runtime;

pub const DEFAULT_MAX_ORDER: usize = 4;

static RUNTIME: OnceCell<Runtime> = OnceCell::new();

fn runtime() -> Result<&'static Runtime> {
    Ok(RUNTIME.get_or_try_init(Runtime::new)?)
}

/// Cumulative BLEU for every (references, sentence) pair, in input order.
pub async fn score_batch(
    references_batch: Vec<Vec<Vec<String>>>,
    sentences: Vec<Vec<String>>,
    n: usize,
) -> Result<Vec<f64>> {
    if references_batch.len() != sentences.len() {
        return Err(BleuError::BatchLengthMismatch {
            references: references_batch.len(),
            sentences: sentences.len(),
        });
    }

    let contexts = references_batch
        .into_iter()
        .zip(sentences)
        .map(|(references, sentence)| BleuContext::new(references, sentence));
    let tasks = contexts.map(|ctx| async move { ctx.cumulative_bleu(n) });
    futures::future::join_all(tasks)
        .await
        .into_iter()
        .collect()
}

/// Blocking wrapper around `score_batch` on a shared runtime.
pub fn score_batch_blocking(
    references_batch: Vec<Vec<Vec<String>>>,
    sentences: Vec<Vec<String>>,
    n: usize,
) -> Result<Vec<f64>> {
    runtime()?.block_on(score_batch(references_batch, sentences, n))
}

fn str_vec_to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// A candidate sentence together with its reference set.
pub struct BleuContext {
    references: Vec<Vec<String>>,
    sentence: Vec<String>,
}

impl BleuContext {
    pub fn new(references: Vec<Vec<String>>, sentence: Vec<String>) -> Self {
        BleuContext {
            references,
            sentence,
        }
    }

    /// Builds a context from borrowed tokens, copying them.
    ///
    /// ```
    /// use _rust::BleuContext;
    ///
    /// let ctx = BleuContext::from_strs(&[&["the", "cat", "sat"]], &["the", "cat", "sat"]);
    /// assert_eq!(ctx.uni_bleu().unwrap(), 1.0);
    /// ```
    pub fn from_strs(references: &[&[&str]], sentence: &[&str]) -> Self {
        BleuContext {
            references: references.iter().map(|r| str_vec_to_owned(r)).collect(),
            sentence: str_vec_to_owned(sentence),
        }
    }

    pub fn uni_bleu(&self) -> Result<f64> {
        uni_bleu(&self.references, &self.sentence)
    }

    pub fn ngram_bleu(&self, n: usize) -> Result<f64> {
        ngram_bleu(&self.references, &self.sentence, n)
    }

    pub fn cumulative_bleu(&self, n: usize) -> Result<f64> {
        cumulative_bleu(&self.references, &self.sentence, n)
    }

    /// Cumulative BLEU-4.
    pub fn bleu(&self) -> Result<f64> {
        self.cumulative_bleu(DEFAULT_MAX_ORDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_context_matches_free_functions() {
        let ctx = BleuContext::from_strs(&[&["the", "cat", "is", "big"]], &["the", "cat"]);
        let references = vec![vec!["the", "cat", "is", "big"]];
        let sentence = ["the", "cat"];
        assert_eq!(ctx.uni_bleu().unwrap(), uni_bleu(&references, &sentence).unwrap());
        assert_eq!(
            ctx.ngram_bleu(2).unwrap(),
            ngram_bleu(&references, &sentence, 2).unwrap()
        );
        assert_abs_diff_eq!(ctx.cumulative_bleu(2).unwrap(), (-1.0f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_context_bleu_is_order_four() {
        let ctx = BleuContext::from_strs(
            &[&["the", "quick", "brown", "fox", "jumps"]],
            &["the", "quick", "brown", "fox", "jumps"],
        );
        assert_abs_diff_eq!(ctx.bleu().unwrap(), 1.0, epsilon = 1e-12);

        // three tokens cannot produce a 4-gram
        let ctx = BleuContext::from_strs(&[&["the", "quick", "brown"]], &["the", "quick", "brown"]);
        assert_eq!(ctx.bleu().unwrap(), 0.0);
    }

    #[tokio::test]
    async fn test_batch_scorer() {
        let references_batch = vec![
            vec![str_vec_to_owned(&["the", "cat", "sat"])],
            vec![
                str_vec_to_owned(&["the", "dog", "barked", "loudly"]),
                str_vec_to_owned(&["a", "dog", "barked"]),
            ],
        ];
        let sentences = vec![
            str_vec_to_owned(&["the", "cat", "sat"]),
            str_vec_to_owned(&["a", "dog", "barked"]),
        ];

        let scores = score_batch(references_batch, sentences, 2).await.unwrap();

        assert_eq!(scores.len(), 2);
        for s in &scores {
            assert!(*s >= 0.0 && *s <= 1.0 + 1e-12);
        }
        assert_abs_diff_eq!(scores[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(scores[1], 1.0, epsilon = 1e-12);
    }

    #[tokio::test]
    async fn test_batch_length_mismatch() {
        let references_batch = vec![vec![str_vec_to_owned(&["the", "cat"])]];
        let result = score_batch(references_batch, vec![], 1).await;
        assert!(matches!(
            result,
            Err(BleuError::BatchLengthMismatch {
                references: 1,
                sentences: 0
            })
        ));
    }

    #[tokio::test]
    async fn test_batch_propagates_pair_errors() {
        let references_batch = vec![vec![str_vec_to_owned(&["the"])], vec![]];
        let sentences = vec![str_vec_to_owned(&["the"]), str_vec_to_owned(&["the"])];
        let result = score_batch(references_batch, sentences, 1).await;
        assert!(matches!(result, Err(BleuError::EmptyReferences)));
    }

    #[test]
    fn test_blocking_batch_matches_sequential() {
        let references_batch = vec![
            vec![str_vec_to_owned(&["the", "cat", "is", "on", "the", "mat"])],
            vec![str_vec_to_owned(&["there", "is", "a", "cat", "on", "the", "mat"])],
        ];
        let sentences = vec![
            str_vec_to_owned(&["the", "cat", "on", "the", "mat"]),
            str_vec_to_owned(&["there", "is", "a", "cat", "here"]),
        ];
        let expected: Vec<f64> = references_batch
            .iter()
            .zip(&sentences)
            .map(|(references, sentence)| cumulative_bleu(references, sentence, 2).unwrap())
            .collect();

        let scores = score_batch_blocking(references_batch, sentences, 2).unwrap();
        assert_eq!(scores, expected);
    }
}

mod bleu;
mod brevity;
mod clip;
mod error;
mod ngram;
mod score;

// NOTE: Tokens are compared exactly as given. Any lowercasing or punctuation
//       handling belongs to whoever tokenizes the text before it gets here.

pub use crate::bleu::{cumulative_bleu, geometric_mean, ngram_bleu, uni_bleu};
pub use crate::brevity::{brevity_penalty, closest_reference_length};
pub use crate::clip::{max_reference_counts, modified_precision, Precision};
pub use crate::error::{BleuError, Result};
pub use crate::ngram::{count_ngrams, ngrams, CountMap};
pub use crate::score::{score_batch, score_batch_blocking, BleuContext, DEFAULT_MAX_ORDER};

#[cfg(feature = "python")]
mod python {
    use crate::error::BleuError;
    use crate::score::{score_batch_blocking, DEFAULT_MAX_ORDER};
    use numpy::{IntoPyArray, PyArray1};
    use pyo3::prelude::*;

    const DEFAULT_ORDER: i64 = DEFAULT_MAX_ORDER as i64;

    fn to_order(n: i64) -> Result<usize, BleuError> {
        usize::try_from(n).map_err(|_| BleuError::InvalidOrder(n))
    }

    #[pyfunction]
    fn uni_bleu(references: Vec<Vec<String>>, sentence: Vec<String>) -> PyResult<f64> {
        Ok(crate::bleu::uni_bleu(&references, &sentence)?)
    }

    #[pyfunction]
    fn ngram_bleu(references: Vec<Vec<String>>, sentence: Vec<String>, n: i64) -> PyResult<f64> {
        Ok(crate::bleu::ngram_bleu(&references, &sentence, to_order(n)?)?)
    }

    #[pyfunction]
    #[pyo3(signature = (references, sentence, n = DEFAULT_ORDER))]
    fn cumulative_bleu(
        references: Vec<Vec<String>>,
        sentence: Vec<String>,
        n: i64,
    ) -> PyResult<f64> {
        Ok(crate::bleu::cumulative_bleu(&references, &sentence, to_order(n)?)?)
    }

    #[pyfunction]
    #[pyo3(signature = (references_batch, sentences, n = DEFAULT_ORDER))]
    fn score_batch<'py>(
        py: Python<'py>,
        references_batch: Vec<Vec<Vec<String>>>,
        sentences: Vec<Vec<String>>,
        n: i64,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let n = to_order(n)?;
        // The inputs are already copied out of Python, so the GIL can go
        let scores = py.allow_threads(|| score_batch_blocking(references_batch, sentences, n))?;
        Ok(scores.into_pyarray(py))
    }

    #[pymodule]
    fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
        let _ = env_logger::try_init();
        m.add_function(wrap_pyfunction!(uni_bleu, m)?)?;
        m.add_function(wrap_pyfunction!(ngram_bleu, m)?)?;
        m.add_function(wrap_pyfunction!(cumulative_bleu, m)?)?;
        m.add_function(wrap_pyfunction!(score_batch, m)?)?;
        Ok(())
    }
}

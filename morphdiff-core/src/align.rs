//! Positional alignment of reduction results with their input

use crate::error::Result;
use crate::types::{ComparisonRow, ReductionResult, WordList};

/// Zip a word list with its lemma and stem results
///
/// Both results must hold exactly one form per word; otherwise the call
/// fails with `AlignmentMismatch` naming the offending strategy and no rows
/// are produced.
pub fn align_rows(
    words: &WordList,
    lemmas: &ReductionResult,
    stems: &ReductionResult,
) -> Result<Vec<ComparisonRow>> {
    lemmas.ensure_aligned(words)?;
    stems.ensure_aligned(words)?;

    Ok(words
        .iter()
        .zip(lemmas.forms())
        .zip(stems.forms())
        .map(|((word, lemma), stem)| ComparisonRow::new(word, lemma.as_str(), stem.as_str()))
        .collect())
}

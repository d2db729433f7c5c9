//! Batch pairwise alignment over multiple sequence pairs.
//!
//! Pairs are independent, each with its own matrices. With the `parallel`
//! feature they are spread across the rayon thread pool; otherwise they are
//! aligned serially. Results are returned in input order either way.

use crate::penalties::PenaltyModel;
use crate::types::AlignmentResult;
use gapalign_core::Result;

/// Align a batch of `(pattern, text)` pairs under one penalty model.
///
/// # Errors
///
/// Returns the first error encountered, e.g. [`gapalign_core::AlignError::InvalidInput`]
/// for an invalid model.
pub fn align_batch(pairs: &[(&[u8], &[u8])], model: &PenaltyModel) -> Result<Vec<AlignmentResult>> {
    model.validate()?;
    log::debug!("aligning batch of {} pairs ({})", pairs.len(), model.name());

    #[cfg(feature = "parallel")]
    let results = {
        use rayon::prelude::*;
        pairs
            .par_iter()
            .map(|(pattern, text)| crate::align(pattern, text, model))
            .collect()
    };
    #[cfg(not(feature = "parallel"))]
    let results = pairs
        .iter()
        .map(|(pattern, text)| crate::align(pattern, text, model))
        .collect();

    results
}

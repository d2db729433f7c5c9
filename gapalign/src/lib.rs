//! Pairwise global sequence alignment.
//!
//! Aligns a pattern against a text end-to-end under one of three penalty
//! models (unit-cost edit distance, gap-linear, or gap-affine) and reports
//! the optimal score together with a CIGAR edit script. Alignments can be
//! rescored and checked independently of the engine that produced them.
//!
//! # Quick start
//!
//! ```
//! use gapalign::{align, verify, PenaltyModel};
//!
//! let model = PenaltyModel::Edit;
//! let result = align(b"ACGT", b"AGT", &model).unwrap();
//! assert_eq!(result.score, 1);
//! assert_eq!(result.cigar_string(), "1=1D2=");
//! verify(&result, b"ACGT", b"AGT", &model).unwrap();
//! ```
//!
//! `=` is a match, `X` a mismatch, `D` consumes a pattern symbol only and `I`
//! consumes a text symbol only.

pub mod types;
pub mod cigar;
pub mod penalties;
pub mod sequence;
pub mod edit;
pub mod linear;
pub mod affine;
pub mod scorer;
pub mod score_only;
pub mod batch;

mod matrix;
mod traceback;

pub use types::{AlignmentResult, CigarOp, EditOp};
pub use cigar::{parse_cigar, Cigar};
pub use penalties::{AffinePenalties, LinearPenalties, PenaltyModel};
pub use sequence::SequencePair;
pub use edit::edit_align;
pub use linear::linear_align;
pub use affine::affine_align;
pub use scorer::{score_cigar, verify};
pub use score_only::align_score;
pub use batch::align_batch;

pub use gapalign_core::{AlignError, Result};

/// Globally align `pattern` against `text` under `model`.
///
/// Dispatches to [`edit_align`], [`linear_align`] or [`affine_align`]. Under
/// [`PenaltyModel::Edit`] the score is a distance (lower is better); under the
/// other models higher is better.
///
/// # Errors
///
/// Returns [`AlignError::InvalidInput`] for a negative penalty or for
/// penalties whose scores over these lengths could exceed
/// [`penalties::MAX_SCORE`], and [`AlignError::AllocationFailure`] if the DP
/// matrices cannot be allocated.
pub fn align(pattern: &[u8], text: &[u8], model: &PenaltyModel) -> Result<AlignmentResult> {
    model.validate()?;
    log::debug!(
        "aligning {}x{} ({})",
        pattern.len(),
        text.len(),
        model.name()
    );
    match model {
        PenaltyModel::Edit => edit_align(pattern, text),
        PenaltyModel::Linear(p) => linear_align(pattern, text, p),
        PenaltyModel::Affine(p) => affine_align(pattern, text, p),
    }
}

/// Align a [`SequencePair`].
///
/// # Errors
///
/// Same as [`align`].
pub fn align_pair(pair: &SequencePair<'_>, model: &PenaltyModel) -> Result<AlignmentResult> {
    align(pair.pattern(), pair.text(), model)
}

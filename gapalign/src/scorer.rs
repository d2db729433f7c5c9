//! Independent scoring and verification of alignments.
//!
//! [`score_cigar`] recomputes a score from the runs of a CIGAR alone, and
//! [`verify`] checks an [`AlignmentResult`] against the sequences it claims to
//! align. Neither looks at a DP matrix, so they can check any engine.

use crate::cigar::Cigar;
use crate::penalties::PenaltyModel;
use crate::types::{AlignmentResult, CigarOp, EditOp};
use gapalign_core::{AlignError, Result};

/// Recompute the score of `cigar` under `model`.
///
/// - Edit: number of mismatch, insertion and deletion columns.
/// - Linear: `match * =` minus `mismatch * X` minus `indel * (I + D)`.
/// - Affine: as linear for `=`/`X`; every maximal `I` or `D` run of length
///   `L` costs `gap_opening + L * gap_extension`.
///
/// # Errors
///
/// Returns [`AlignError::InvalidInput`] if the score does not fit in an
/// `i32`.
pub fn score_cigar(cigar: &Cigar, model: &PenaltyModel) -> Result<i32> {
    let mut total: i64 = 0;
    for run in cigar.runs() {
        let len = i64::try_from(run.len()).map_err(|_| overflow(model))?;
        let weighted = |per_column: i64| len.checked_mul(per_column);
        let delta = match (model, run) {
            (PenaltyModel::Edit, CigarOp::Match(_)) => Some(0),
            (PenaltyModel::Edit, _) => Some(len),
            (PenaltyModel::Linear(p), CigarOp::Match(_)) => weighted(i64::from(p.match_score)),
            (PenaltyModel::Linear(p), CigarOp::Mismatch(_)) => weighted(-i64::from(p.mismatch)),
            (PenaltyModel::Linear(p), _) => weighted(-i64::from(p.indel)),
            (PenaltyModel::Affine(p), CigarOp::Match(_)) => weighted(i64::from(p.match_score)),
            (PenaltyModel::Affine(p), CigarOp::Mismatch(_)) => weighted(-i64::from(p.mismatch)),
            (PenaltyModel::Affine(p), _) => weighted(-i64::from(p.gap_extension))
                .and_then(|extension| extension.checked_sub(i64::from(p.gap_opening))),
        };
        total = delta
            .and_then(|d| total.checked_add(d))
            .ok_or_else(|| overflow(model))?;
    }
    i32::try_from(total).map_err(|_| overflow(model))
}

fn overflow(model: &PenaltyModel) -> AlignError {
    AlignError::InvalidInput(format!(
        "CIGAR score under the {} model overflows i32",
        model.name()
    ))
}

/// Check that `result` is a valid global alignment of `pattern` and `text`
/// whose reported score matches `model`.
///
/// # Errors
///
/// Returns [`AlignError::CheckFailed`] describing the first problem: the
/// CIGAR does not span both sequences, an `=` column aligns different
/// symbols, an `X` column aligns equal symbols, or the recomputed score
/// differs from `result.score`. A score that overflows `i32` is reported as
/// [`AlignError::InvalidInput`], as by [`score_cigar`].
pub fn verify(
    result: &AlignmentResult,
    pattern: &[u8],
    text: &[u8],
    model: &PenaltyModel,
) -> Result<()> {
    let mut pi = 0usize;
    let mut ti = 0usize;

    for (column, &op) in result.cigar.operations().iter().enumerate() {
        if (op.consumes_pattern() && pi >= pattern.len()) || (op.consumes_text() && ti >= text.len()) {
            return Err(AlignError::CheckFailed(format!(
                "column {} ('{}') runs past the end of the sequences",
                column,
                op.code()
            )));
        }
        match op {
            EditOp::Match | EditOp::Mismatch => {
                let same = pattern[pi] == text[ti];
                if same != (op == EditOp::Match) {
                    return Err(AlignError::CheckFailed(format!(
                        "column {} is '{}' but aligns '{}' with '{}'",
                        column,
                        op.code(),
                        pattern[pi] as char,
                        text[ti] as char
                    )));
                }
                pi += 1;
                ti += 1;
            }
            EditOp::Deletion => pi += 1,
            EditOp::Insertion => ti += 1,
        }
    }

    if pi != pattern.len() || ti != text.len() {
        return Err(AlignError::CheckFailed(format!(
            "alignment covers {}/{} pattern and {}/{} text symbols",
            pi,
            pattern.len(),
            ti,
            text.len()
        )));
    }

    let recomputed = score_cigar(&result.cigar, model)?;
    if recomputed != result.score {
        return Err(AlignError::CheckFailed(format!(
            "reported score {} but the CIGAR scores {} under the {} model",
            result.score,
            recomputed,
            model.name()
        )));
    }

    Ok(())
}

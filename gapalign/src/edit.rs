//! Global edit (Levenshtein) distance with traceback.
//!
//! The classic recurrence
//!
//! ```text
//! D[i][j] = min(D[i-1][j-1] + [P[i] != T[j]], D[i-1][j] + 1, D[i][j-1] + 1)
//! ```
//!
//! is the gap-linear recurrence with match 0, mismatch 1 and indel 1, negated.
//! The edit engine runs the linear fill and traceback with those values, so
//! both models share one tie-break order, and reports the distance as a
//! non-negative score.

use crate::linear;
use crate::penalties::{LinearPenalties, PenaltyModel};
use crate::traceback;
use crate::types::AlignmentResult;
use gapalign_core::Result;

/// Linear penalties whose optimum is the negated edit distance.
pub(crate) const UNIT_COSTS: LinearPenalties = LinearPenalties {
    match_score: 0,
    mismatch: 1,
    indel: 1,
};

/// Compute the edit distance and one optimal edit script.
///
/// Lower scores are better; identical sequences score 0. Either sequence may
/// be empty.
///
/// # Errors
///
/// Returns an error if the sequences are too long for the score range or the
/// matrix or CIGAR buffer cannot be allocated.
pub fn edit_align(pattern: &[u8], text: &[u8]) -> Result<AlignmentResult> {
    PenaltyModel::Edit.check_bounds(pattern.len(), text.len())?;
    let h = linear::fill(pattern, text, &UNIT_COSTS)?;
    let cigar = traceback::trace_linear(&h, pattern, text, &UNIT_COSTS)?;
    Ok(AlignmentResult {
        score: -h.get(pattern.len(), text.len()),
        cigar,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_sequences() {
        let result = edit_align(b"ACGT", b"ACGT").unwrap();
        assert_eq!(result.score, 0);
        assert_eq!(result.cigar_string(), "4=");
    }

    #[test]
    fn one_deletion() {
        let result = edit_align(b"ACGT", b"AGT").unwrap();
        assert_eq!(result.score, 1);
        assert_eq!(result.cigar_string(), "1=1D2=");
        assert_eq!(result.cigar.pattern_consumed(), 4);
        assert_eq!(result.cigar.text_consumed(), 3);
    }

    #[test]
    fn one_insertion() {
        let result = edit_align(b"AGT", b"ACGT").unwrap();
        assert_eq!(result.score, 1);
        assert_eq!(result.insertions(), 1);
    }

    #[test]
    fn disjoint_sequences_all_mismatch() {
        let result = edit_align(b"AAAA", b"TTTT").unwrap();
        assert_eq!(result.score, 4);
        assert_eq!(result.cigar_string(), "4X");
    }

    #[test]
    fn kitten_sitting() {
        let result = edit_align(b"kitten", b"sitting").unwrap();
        assert_eq!(result.score, 3);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(edit_align(b"", b"").unwrap().score, 0);
        let result = edit_align(b"ACG", b"").unwrap();
        assert_eq!(result.score, 3);
        assert_eq!(result.cigar_string(), "3D");
    }
}

//! Needleman-Wunsch global alignment with gap-linear penalties.
//!
//! A single score layer `H`:
//!
//! ```text
//! H[i][j] = max(H[i-1][j-1] + s(P[i], T[j]),   match / mismatch
//!               H[i-1][j]   - indel,           deletion (consumes pattern)
//!               H[i][j-1]   - indel)           insertion (consumes text)
//! ```
//!
//! with borders `H[i][0] = -i * indel` and `H[0][j] = -j * indel`.

use crate::matrix::DpMatrix;
use crate::penalties::{LinearPenalties, PenaltyModel};
use crate::traceback;
use crate::types::AlignmentResult;
use gapalign_core::Result;

/// Perform global alignment with gap-linear penalties.
///
/// Higher scores are better. Either sequence may be empty.
///
/// # Errors
///
/// Returns an error if a penalty is negative, if scores for these lengths
/// could exceed [`MAX_SCORE`](crate::penalties::MAX_SCORE), or if the matrix
/// or CIGAR buffer cannot be allocated.
pub fn linear_align(
    pattern: &[u8],
    text: &[u8],
    penalties: &LinearPenalties,
) -> Result<AlignmentResult> {
    penalties.validate()?;
    PenaltyModel::Linear(*penalties).check_bounds(pattern.len(), text.len())?;
    let h = fill(pattern, text, penalties)?;
    let cigar = traceback::trace_linear(&h, pattern, text, penalties)?;
    Ok(AlignmentResult {
        score: h.get(pattern.len(), text.len()),
        cigar,
    })
}

/// Fill the full `(m + 1) x (n + 1)` score layer.
pub(crate) fn fill(pattern: &[u8], text: &[u8], penalties: &LinearPenalties) -> Result<DpMatrix> {
    let m = pattern.len();
    let n = text.len();
    let indel = penalties.indel;

    let mut h = DpMatrix::try_new(m, n, 0)?;

    // Initialization: pure deletion / insertion runs from the origin
    for i in 1..=m {
        h.set(i, 0, h.get(i - 1, 0) - indel);
    }
    for j in 1..=n {
        h.set(0, j, h.get(0, j - 1) - indel);
    }

    // Fill
    for i in 1..=m {
        let p = pattern[i - 1];
        for j in 1..=n {
            let diag = h.get(i - 1, j - 1) + penalties.substitution(p, text[j - 1]);
            let del = h.get(i - 1, j) - indel;
            let ins = h.get(i, j - 1) - indel;
            h.set(i, j, diag.max(del).max(ins));
        }
    }

    Ok(h)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn penalties() -> LinearPenalties {
        LinearPenalties::new(1, 4, 2).unwrap()
    }

    #[test]
    fn identical_sequences() {
        let result = linear_align(b"ACGT", b"ACGT", &penalties()).unwrap();
        assert_eq!(result.score, 4);
        assert_eq!(result.cigar_string(), "4=");
    }

    #[test]
    fn single_mismatch() {
        let result = linear_align(b"ACGT", b"ACAT", &penalties()).unwrap();
        // 3 matches - 4 for one mismatch
        assert_eq!(result.score, -1);
        assert_eq!(result.cigar_string(), "2=1X1=");
    }

    #[test]
    fn mismatch_replaced_by_gaps_when_cheaper() {
        // mismatch 10 is worse than an insertion plus a deletion (2 + 2)
        let p = LinearPenalties::new(0, 10, 2).unwrap();
        let result = linear_align(b"AXC", b"AYC", &p).unwrap();
        assert_eq!(result.score, -4);
        assert_eq!(result.gaps(), 2);
        assert_eq!(result.cigar_string(), "1=1I1D1=");
    }

    #[test]
    fn deletion_in_text() {
        let result = linear_align(b"ACGT", b"AGT", &penalties()).unwrap();
        assert_eq!(result.score, 3 - 2);
        assert_eq!(result.cigar_string(), "1=1D2=");
    }

    #[test]
    fn empty_pattern_is_all_insertions() {
        let result = linear_align(b"", b"ACG", &penalties()).unwrap();
        assert_eq!(result.score, -6);
        assert_eq!(result.cigar_string(), "3I");
    }

    #[test]
    fn both_empty() {
        let result = linear_align(b"", b"", &penalties()).unwrap();
        assert_eq!(result.score, 0);
        assert!(result.cigar.is_empty());
    }

    #[test]
    fn negative_penalty_rejected() {
        let p = LinearPenalties {
            match_score: 0,
            mismatch: 1,
            indel: -1,
        };
        assert!(linear_align(b"A", b"A", &p).is_err());
    }

    #[test]
    fn out_of_range_indel_is_invalid_input() {
        let p = LinearPenalties::new(0, 0, i32::MAX).unwrap();
        let err = linear_align(b"AAA", b"", &p).unwrap_err();
        assert!(matches!(err, gapalign_core::AlignError::InvalidInput(_)));
    }

    #[test]
    fn fill_borders() {
        let h = fill(b"AC", b"A", &penalties()).unwrap();
        assert_eq!(h.get(0, 0), 0);
        assert_eq!(h.get(1, 0), -2);
        assert_eq!(h.get(2, 0), -4);
        assert_eq!(h.get(0, 1), -2);
        assert_eq!(h.get(1, 1), 1);
        assert_eq!(h.get(2, 1), -1);
    }
}

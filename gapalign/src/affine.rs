//! Global alignment with gap-affine penalties.
//!
//! Three parallel score layers (Gotoh, 1982):
//!
//! - **M**: best score ending in a match/mismatch
//! - **I**: best score ending in an insertion (gap in the pattern, consumes text)
//! - **D**: best score ending in a deletion (gap in the text, consumes pattern)
//!
//! ```text
//! M[i][j] = max(M, I, D)[i-1][j-1] + s(P[i], T[j])
//! I[i][j] = max(H[i][j-1] - go - ge, I[i][j-1] - ge)
//! D[i][j] = max(H[i-1][j] - go - ge, D[i-1][j] - ge)
//! H[i][j] = max(M, I, D)[i][j]
//! ```
//!
//! Gaps open from the best layer of the neighbouring cell, so an insertion
//! may directly follow a deletion (and vice versa), each paying its own
//! opening. Only the origin of M is reachable on the border; I runs along
//! row 0 and D down column 0, each opened once at the origin.

use crate::matrix::{advance, DpMatrix, NEG_INF};
use crate::penalties::{AffinePenalties, PenaltyModel};
use crate::traceback;
use crate::types::AlignmentResult;
use gapalign_core::Result;

/// Layer an affine path is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Layer {
    M,
    I,
    D,
}

/// The three score layers of a filled affine matrix.
#[derive(Debug, Clone)]
pub(crate) struct AffineLayers {
    pub(crate) m: DpMatrix,
    pub(crate) i: DpMatrix,
    pub(crate) d: DpMatrix,
}

impl AffineLayers {
    /// Best score over the three layers at a cell.
    #[inline]
    pub(crate) fn h(&self, i: usize, j: usize) -> i32 {
        self.m.get(i, j).max(self.d.get(i, j)).max(self.i.get(i, j))
    }

    /// Best layer at a cell, preferring M, then D, then I on ties.
    pub(crate) fn best(&self, i: usize, j: usize) -> (i32, Layer) {
        let (m, d, ins) = (self.m.get(i, j), self.d.get(i, j), self.i.get(i, j));
        if m >= d && m >= ins {
            (m, Layer::M)
        } else if d >= ins {
            (d, Layer::D)
        } else {
            (ins, Layer::I)
        }
    }
}

/// Perform global alignment with gap-affine penalties.
///
/// Higher scores are better. Either sequence may be empty.
///
/// # Errors
///
/// Returns an error if a penalty is negative, if scores for these lengths
/// could exceed [`MAX_SCORE`](crate::penalties::MAX_SCORE), or if the
/// matrices or CIGAR buffer cannot be allocated.
pub fn affine_align(
    pattern: &[u8],
    text: &[u8],
    penalties: &AffinePenalties,
) -> Result<AlignmentResult> {
    penalties.validate()?;
    PenaltyModel::Affine(*penalties).check_bounds(pattern.len(), text.len())?;
    let layers = fill(pattern, text, penalties)?;
    let (score, _) = layers.best(pattern.len(), text.len());
    let cigar = traceback::trace_affine(&layers, pattern, text, penalties)?;
    Ok(AlignmentResult { score, cigar })
}

/// Fill all three layers.
pub(crate) fn fill(pattern: &[u8], text: &[u8], penalties: &AffinePenalties) -> Result<AffineLayers> {
    let m = pattern.len();
    let n = text.len();
    let open = -(penalties.gap_opening + penalties.gap_extension);
    let extend = -penalties.gap_extension;

    let mut layers = AffineLayers {
        m: DpMatrix::try_new(m, n, NEG_INF)?,
        i: DpMatrix::try_new(m, n, NEG_INF)?,
        d: DpMatrix::try_new(m, n, NEG_INF)?,
    };

    // Initialization
    layers.m.set(0, 0, 0);
    for j in 1..=n {
        let v = advance(layers.h(0, j - 1), open).max(advance(layers.i.get(0, j - 1), extend));
        layers.i.set(0, j, v);
    }
    for i in 1..=m {
        let v = advance(layers.h(i - 1, 0), open).max(advance(layers.d.get(i - 1, 0), extend));
        layers.d.set(i, 0, v);
    }

    // Fill
    for i in 1..=m {
        let p = pattern[i - 1];
        for j in 1..=n {
            let diag = layers.h(i - 1, j - 1);
            layers.m.set(i, j, advance(diag, penalties.substitution(p, text[j - 1])));

            let v = advance(layers.h(i, j - 1), open).max(advance(layers.i.get(i, j - 1), extend));
            layers.i.set(i, j, v);

            let v = advance(layers.h(i - 1, j), open).max(advance(layers.d.get(i - 1, j), extend));
            layers.d.set(i, j, v);
        }
    }

    Ok(layers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn penalties() -> AffinePenalties {
        AffinePenalties::new(0, 4, 6, 2).unwrap()
    }

    #[test]
    fn identical_sequences() {
        let result = affine_align(b"ACGTACGT", b"ACGTACGT", &penalties()).unwrap();
        assert_eq!(result.score, 0);
        assert_eq!(result.cigar_string(), "8=");
    }

    #[test]
    fn single_gap_of_two() {
        let result = affine_align(b"ACGTTTACGT", b"ACGTACGT", &penalties()).unwrap();
        // one gap of length 2: 6 + 2 * 2
        assert_eq!(result.score, -10);
        assert_eq!(result.deletions(), 2);
        assert_eq!(result.gap_openings(), 1);
    }

    #[test]
    fn prefers_one_long_gap_over_two_short() {
        // two separate 1-gaps cost 16, one 2-gap plus a mismatch costs 14
        let result = affine_align(b"AACCGGTT", b"AACGGT", &penalties()).unwrap();
        assert_eq!(result.gap_openings(), 1);
        assert_eq!(result.score, -14);
    }

    #[test]
    fn mismatch_cheaper_than_gap_pair() {
        let result = affine_align(b"ACGT", b"AGGT", &penalties()).unwrap();
        assert_eq!(result.score, -4);
        assert_eq!(result.cigar_string(), "1=1X2=");
    }

    #[test]
    fn empty_text_is_single_deletion_run() {
        let result = affine_align(b"ACG", b"", &penalties()).unwrap();
        assert_eq!(result.score, -(6 + 3 * 2));
        assert_eq!(result.cigar_string(), "3D");
    }

    #[test]
    fn both_empty() {
        let result = affine_align(b"", b"", &penalties()).unwrap();
        assert_eq!(result.score, 0);
        assert!(result.cigar.is_empty());
    }

    #[test]
    fn match_reward_counts() {
        let p = AffinePenalties::new(2, 4, 6, 2).unwrap();
        let result = affine_align(b"ACGT", b"ACGT", &p).unwrap();
        assert_eq!(result.score, 8);
    }

    #[test]
    fn insertion_next_to_deletion_opens_twice() {
        // with free openings a gap pair (1 + 1) beats a mismatch of 5
        let p = AffinePenalties::new(0, 5, 0, 1).unwrap();
        let result = affine_align(b"A", b"C", &p).unwrap();
        assert_eq!(result.score, -2);
        assert_eq!(result.cigar_string(), "1I1D");

        // with opening costs the same pair pays two openings: 2 * (3 + 1)
        let p = AffinePenalties::new(0, 9, 3, 1).unwrap();
        let result = affine_align(b"A", b"C", &p).unwrap();
        assert_eq!(result.score, -8);
        assert_eq!(result.cigar_string(), "1I1D");
    }

    #[test]
    fn out_of_range_penalties_are_invalid_input() {
        let p = AffinePenalties::new(0, 0, i32::MAX, 1).unwrap();
        let err = affine_align(b"A", b"", &p).unwrap_err();
        assert!(matches!(err, gapalign_core::AlignError::InvalidInput(_)));
    }

    #[test]
    fn border_layers() {
        let layers = fill(b"AC", b"ACG", &penalties()).unwrap();
        assert_eq!(layers.m.get(0, 0), 0);
        assert_eq!(layers.i.get(0, 1), -8);
        assert_eq!(layers.i.get(0, 3), -12);
        assert_eq!(layers.d.get(2, 0), -10);
        assert_eq!(layers.m.get(0, 2), NEG_INF);
        assert_eq!(layers.d.get(0, 2), NEG_INF);
        assert_eq!(layers.i.get(1, 0), NEG_INF);
        assert_eq!(layers.best(2, 3), (-8, Layer::I));
    }
}

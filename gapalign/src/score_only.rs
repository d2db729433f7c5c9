//! Score-only global alignment in linear space.
//!
//! Runs the same recurrences as the full engines but keeps only two rows per
//! layer, so memory is `O(n)` instead of `O(m * n)`. No traceback is possible;
//! the score is identical to the one reported by [`crate::align`].

use crate::edit::UNIT_COSTS;
use crate::matrix::{advance, try_filled, NEG_INF};
use crate::penalties::{AffinePenalties, LinearPenalties, PenaltyModel};
use gapalign_core::Result;

/// Compute only the optimal global alignment score of `pattern` vs `text`.
///
/// # Errors
///
/// Returns an error if the penalties are invalid, if scores for these lengths
/// could exceed [`MAX_SCORE`](crate::penalties::MAX_SCORE), or if the rows
/// cannot be allocated.
pub fn align_score(pattern: &[u8], text: &[u8], model: &PenaltyModel) -> Result<i32> {
    model.validate()?;
    model.check_bounds(pattern.len(), text.len())?;
    match model {
        PenaltyModel::Edit => Ok(-linear_score(pattern, text, &UNIT_COSTS)?),
        PenaltyModel::Linear(p) => linear_score(pattern, text, p),
        PenaltyModel::Affine(p) => affine_score(pattern, text, p),
    }
}

fn linear_score(pattern: &[u8], text: &[u8], penalties: &LinearPenalties) -> Result<i32> {
    let n = text.len();
    let indel = penalties.indel;

    let mut prev = try_filled(n + 1, 0)?;
    let mut curr = try_filled(n + 1, 0)?;

    for j in 1..=n {
        prev[j] = prev[j - 1] - indel;
    }

    for &p in pattern {
        curr[0] = prev[0] - indel;
        for j in 1..=n {
            let diag = prev[j - 1] + penalties.substitution(p, text[j - 1]);
            let del = prev[j] - indel;
            let ins = curr[j - 1] - indel;
            curr[j] = diag.max(del).max(ins);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    Ok(prev[n])
}

fn affine_score(pattern: &[u8], text: &[u8], penalties: &AffinePenalties) -> Result<i32> {
    let n = text.len();
    let open = -(penalties.gap_opening + penalties.gap_extension);
    let extend = -penalties.gap_extension;

    let mut prev_m = try_filled(n + 1, NEG_INF)?;
    let mut prev_i = try_filled(n + 1, NEG_INF)?;
    let mut prev_d = try_filled(n + 1, NEG_INF)?;
    let mut curr_m = try_filled(n + 1, NEG_INF)?;
    let mut curr_i = try_filled(n + 1, NEG_INF)?;
    let mut curr_d = try_filled(n + 1, NEG_INF)?;

    let best = |m: &[i32], i: &[i32], d: &[i32], j: usize| m[j].max(i[j]).max(d[j]);

    // Row 0: only the origin of M and the insertion run along the top
    prev_m[0] = 0;
    for j in 1..=n {
        let h = best(&prev_m, &prev_i, &prev_d, j - 1);
        prev_i[j] = advance(h, open).max(advance(prev_i[j - 1], extend));
    }

    for &p in pattern {
        curr_m[0] = NEG_INF;
        curr_i[0] = NEG_INF;
        let up = best(&prev_m, &prev_i, &prev_d, 0);
        curr_d[0] = advance(up, open).max(advance(prev_d[0], extend));

        for j in 1..=n {
            let diag = best(&prev_m, &prev_i, &prev_d, j - 1);
            curr_m[j] = advance(diag, penalties.substitution(p, text[j - 1]));
            let left = best(&curr_m, &curr_i, &curr_d, j - 1);
            curr_i[j] = advance(left, open).max(advance(curr_i[j - 1], extend));
            let up = best(&prev_m, &prev_i, &prev_d, j);
            curr_d[j] = advance(up, open).max(advance(prev_d[j], extend));
        }

        std::mem::swap(&mut prev_m, &mut curr_m);
        std::mem::swap(&mut prev_i, &mut curr_i);
        std::mem::swap(&mut prev_d, &mut curr_d);
    }

    Ok(prev_m[n].max(prev_d[n]).max(prev_i[n]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{affine, edit, linear};
    use gapalign_core::AlignError;

    const PAIRS: &[(&[u8], &[u8])] = &[
        (b"", b""),
        (b"ACGT", b""),
        (b"", b"ACGT"),
        (b"ACGT", b"ACGT"),
        (b"ACGT", b"AGT"),
        (b"AACCGGTT", b"AACGGT"),
        (b"kitten", b"sitting"),
        (b"GATTACA", b"GCATGCU"),
        (b"ACGTTTACGT", b"ACGTACGT"),
    ];

    #[test]
    fn edit_matches_full_engine() {
        for (p, t) in PAIRS {
            let full = edit::edit_align(p, t).unwrap();
            assert_eq!(align_score(p, t, &PenaltyModel::Edit).unwrap(), full.score);
        }
    }

    #[test]
    fn linear_matches_full_engine() {
        let penalties = LinearPenalties::new(1, 4, 2).unwrap();
        for (p, t) in PAIRS {
            let full = linear::linear_align(p, t, &penalties).unwrap();
            let score = align_score(p, t, &PenaltyModel::Linear(penalties)).unwrap();
            assert_eq!(score, full.score);
        }
    }

    #[test]
    fn affine_matches_full_engine() {
        let penalties = AffinePenalties::default();
        for (p, t) in PAIRS {
            let full = affine::affine_align(p, t, &penalties).unwrap();
            let score = align_score(p, t, &PenaltyModel::Affine(penalties)).unwrap();
            assert_eq!(score, full.score);
        }
    }

    #[test]
    fn edit_distance_values() {
        assert_eq!(align_score(b"kitten", b"sitting", &PenaltyModel::Edit).unwrap(), 3);
        assert_eq!(align_score(b"", b"ACG", &PenaltyModel::Edit).unwrap(), 3);
    }

    #[test]
    fn invalid_penalties_rejected() {
        let model = PenaltyModel::affine(0, 4, -6, 2);
        assert!(align_score(b"A", b"A", &model).is_err());
    }

    #[test]
    fn out_of_range_penalties_are_invalid_input() {
        let err = align_score(b"AAAA", b"", &PenaltyModel::linear(0, 0, 1 << 30)).unwrap_err();
        assert!(matches!(err, AlignError::InvalidInput(_)));
        let err = align_score(b"A", b"", &PenaltyModel::affine(0, 0, i32::MAX, 1)).unwrap_err();
        assert!(matches!(err, AlignError::InvalidInput(_)));
    }

    #[test]
    fn affine_gaps_may_switch_sides() {
        // an insertion next to a deletion beats a costly mismatch
        let model = PenaltyModel::affine(0, 5, 0, 1);
        assert_eq!(align_score(b"A", b"C", &model).unwrap(), -2);
    }
}

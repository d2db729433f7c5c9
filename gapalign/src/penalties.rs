//! Penalty models for pairwise global alignment.
//!
//! Three models are supported: plain edit distance ([`PenaltyModel::Edit`]),
//! gap-linear scoring ([`LinearPenalties`]) and gap-affine scoring
//! ([`AffinePenalties`]).
//!
//! # Sign convention
//!
//! For the linear and affine models a higher score is better. `match_score`
//! is a reward added for every matching column; `mismatch`, `indel`,
//! `gap_opening` and `gap_extension` are non-negative penalties that are
//! subtracted. The edit model is a distance: its score is the number of
//! edits and lower is better.

use gapalign_core::{AlignError, Result};

// ---------------------------------------------------------------------------
// Gap-linear
// ---------------------------------------------------------------------------

/// Match reward plus mismatch and per-symbol indel penalties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearPenalties {
    pub match_score: i32,
    pub mismatch: i32,
    pub indel: i32,
}

impl LinearPenalties {
    /// Create validated gap-linear penalties.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is negative.
    pub fn new(match_score: i32, mismatch: i32, indel: i32) -> Result<Self> {
        let penalties = Self {
            match_score,
            mismatch,
            indel,
        };
        penalties.validate()?;
        Ok(penalties)
    }

    /// Check that every value is non-negative.
    pub fn validate(&self) -> Result<()> {
        non_negative("match_score", self.match_score)?;
        non_negative("mismatch", self.mismatch)?;
        non_negative("indel", self.indel)
    }

    /// Substitution score for a pair of symbols.
    #[inline]
    pub fn substitution(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            -self.mismatch
        }
    }
}

impl Default for LinearPenalties {
    /// 0 match, 4 mismatch, 2 indel.
    fn default() -> Self {
        Self {
            match_score: 0,
            mismatch: 4,
            indel: 2,
        }
    }
}

// ---------------------------------------------------------------------------
// Gap-affine
// ---------------------------------------------------------------------------

/// Match reward plus mismatch, gap-opening and gap-extension penalties.
///
/// A gap of length `L` costs `gap_opening + L * gap_extension`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffinePenalties {
    pub match_score: i32,
    pub mismatch: i32,
    pub gap_opening: i32,
    pub gap_extension: i32,
}

impl AffinePenalties {
    /// Create validated gap-affine penalties.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is negative.
    pub fn new(match_score: i32, mismatch: i32, gap_opening: i32, gap_extension: i32) -> Result<Self> {
        let penalties = Self {
            match_score,
            mismatch,
            gap_opening,
            gap_extension,
        };
        penalties.validate()?;
        Ok(penalties)
    }

    /// Check that every value is non-negative.
    pub fn validate(&self) -> Result<()> {
        non_negative("match_score", self.match_score)?;
        non_negative("mismatch", self.mismatch)?;
        non_negative("gap_opening", self.gap_opening)?;
        non_negative("gap_extension", self.gap_extension)
    }

    /// Substitution score for a pair of symbols.
    #[inline]
    pub fn substitution(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            -self.mismatch
        }
    }

    /// Total penalty of a single gap of `len` symbols.
    pub fn gap_cost(&self, len: usize) -> i32 {
        if len == 0 {
            0
        } else {
            self.gap_opening + len as i32 * self.gap_extension
        }
    }
}

impl Default for AffinePenalties {
    /// 0 match, 4 mismatch, 6 gap opening, 2 gap extension.
    fn default() -> Self {
        Self {
            match_score: 0,
            mismatch: 4,
            gap_opening: 6,
            gap_extension: 2,
        }
    }
}

// ---------------------------------------------------------------------------
// Unified model
// ---------------------------------------------------------------------------

/// The penalty model an alignment is computed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PenaltyModel {
    /// Unit-cost edit (Levenshtein) distance.
    #[default]
    Edit,
    /// Gap-linear scoring.
    Linear(LinearPenalties),
    /// Gap-affine scoring.
    Affine(AffinePenalties),
}

impl PenaltyModel {
    /// Gap-linear model from raw values (validated at alignment time).
    pub fn linear(match_score: i32, mismatch: i32, indel: i32) -> Self {
        PenaltyModel::Linear(LinearPenalties {
            match_score,
            mismatch,
            indel,
        })
    }

    /// Gap-affine model from raw values (validated at alignment time).
    pub fn affine(match_score: i32, mismatch: i32, gap_opening: i32, gap_extension: i32) -> Self {
        PenaltyModel::Affine(AffinePenalties {
            match_score,
            mismatch,
            gap_opening,
            gap_extension,
        })
    }

    /// Check the model's values.
    ///
    /// # Errors
    ///
    /// Returns [`AlignError::InvalidInput`] naming the first negative field.
    pub fn validate(&self) -> Result<()> {
        match self {
            PenaltyModel::Edit => Ok(()),
            PenaltyModel::Linear(p) => p.validate(),
            PenaltyModel::Affine(p) => p.validate(),
        }
    }

    /// Whether lower scores are better under this model.
    pub fn is_distance(&self) -> bool {
        matches!(self, PenaltyModel::Edit)
    }

    /// Short lowercase model name, used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            PenaltyModel::Edit => "edit",
            PenaltyModel::Linear(_) => "gap-linear",
            PenaltyModel::Affine(_) => "gap-affine",
        }
    }

    /// Largest score change a single alignment column can make. An affine
    /// gap column may also pay for opening its gap.
    fn max_column_cost(&self) -> u128 {
        let cost = match self {
            PenaltyModel::Edit => 1,
            PenaltyModel::Linear(p) => i64::from(p.match_score)
                .max(i64::from(p.mismatch))
                .max(i64::from(p.indel)),
            PenaltyModel::Affine(p) => i64::from(p.match_score)
                .max(i64::from(p.mismatch))
                .max(i64::from(p.gap_opening) + i64::from(p.gap_extension)),
        };
        cost.max(0) as u128
    }

    /// Check that every score of a global alignment of a `pattern_len` by
    /// `text_len` pair stays within [`MAX_SCORE`] in magnitude.
    ///
    /// Every alignment has at most `pattern_len + text_len` columns, each
    /// changing the score by at most the largest penalty (or match reward).
    /// A pair of empty sequences is checked as a single column.
    ///
    /// # Errors
    ///
    /// Returns [`AlignError::InvalidInput`] if the bound exceeds
    /// [`MAX_SCORE`].
    pub fn check_bounds(&self, pattern_len: usize, text_len: usize) -> Result<()> {
        let columns = (pattern_len as u128 + text_len as u128).max(1);
        let bound = columns * self.max_column_cost();
        if bound > MAX_SCORE as u128 {
            return Err(AlignError::InvalidInput(format!(
                "{} scores for a {}x{} alignment can reach {}, beyond the supported {}",
                self.name(),
                pattern_len,
                text_len,
                bound,
                MAX_SCORE
            )));
        }
        Ok(())
    }
}

/// Largest score magnitude an alignment may reach. Kept well clear of the
/// unreachable-cell sentinel (`i32::MIN / 2`) so that no reachable score is
/// mistaken for it and no intermediate sum wraps.
pub const MAX_SCORE: i32 = i32::MAX / 4;

fn non_negative(field: &str, value: i32) -> Result<()> {
    if value < 0 {
        return Err(AlignError::InvalidInput(format!(
            "{} must be non-negative, got {}",
            field, value
        )));
    }
    Ok(())
}

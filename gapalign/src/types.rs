//! Core types for alignment results.

use core::fmt;

use crate::cigar::Cigar;

/// One alignment column.
///
/// `Insertion` consumes a text symbol (gap in the pattern); `Deletion`
/// consumes a pattern symbol (gap in the text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EditOp {
    /// Identical symbols. CIGAR op `=`.
    Match,
    /// Differing symbols. CIGAR op `X`.
    Mismatch,
    /// Text symbol aligned to a gap. CIGAR op `I`.
    Insertion,
    /// Pattern symbol aligned to a gap. CIGAR op `D`.
    Deletion,
}

impl EditOp {
    /// Single-character CIGAR code.
    pub fn code(self) -> char {
        match self {
            EditOp::Match => '=',
            EditOp::Mismatch => 'X',
            EditOp::Insertion => 'I',
            EditOp::Deletion => 'D',
        }
    }

    /// Inverse of [`EditOp::code`]. `M` is not accepted: every column must
    /// say whether it matches.
    pub fn from_code(c: char) -> Option<Self> {
        match c {
            '=' => Some(EditOp::Match),
            'X' => Some(EditOp::Mismatch),
            'I' => Some(EditOp::Insertion),
            'D' => Some(EditOp::Deletion),
            _ => None,
        }
    }

    /// Whether this column consumes a pattern symbol.
    pub fn consumes_pattern(self) -> bool {
        matches!(self, EditOp::Match | EditOp::Mismatch | EditOp::Deletion)
    }

    /// Whether this column consumes a text symbol.
    pub fn consumes_text(self) -> bool {
        matches!(self, EditOp::Match | EditOp::Mismatch | EditOp::Insertion)
    }

    /// Whether this column is a gap.
    pub fn is_gap(self) -> bool {
        matches!(self, EditOp::Insertion | EditOp::Deletion)
    }

    /// The same column seen with pattern and text exchanged.
    pub fn swapped(self) -> Self {
        match self {
            EditOp::Insertion => EditOp::Deletion,
            EditOp::Deletion => EditOp::Insertion,
            other => other,
        }
    }

    /// A run of `len` copies of this operation.
    pub fn run(self, len: usize) -> CigarOp {
        match self {
            EditOp::Match => CigarOp::Match(len),
            EditOp::Mismatch => CigarOp::Mismatch(len),
            EditOp::Insertion => CigarOp::Insertion(len),
            EditOp::Deletion => CigarOp::Deletion(len),
        }
    }
}

/// A run-length encoded CIGAR operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CigarOp {
    /// Matching symbols. CIGAR op `=`.
    Match(usize),
    /// Mismatching symbols. CIGAR op `X`.
    Mismatch(usize),
    /// Text symbols against a gap in the pattern. CIGAR op `I`.
    Insertion(usize),
    /// Pattern symbols against a gap in the text. CIGAR op `D`.
    Deletion(usize),
}

impl CigarOp {
    /// The per-column operation this run repeats.
    pub fn op(&self) -> EditOp {
        match self {
            CigarOp::Match(_) => EditOp::Match,
            CigarOp::Mismatch(_) => EditOp::Mismatch,
            CigarOp::Insertion(_) => EditOp::Insertion,
            CigarOp::Deletion(_) => EditOp::Deletion,
        }
    }

    /// Single-character CIGAR code.
    pub fn code(&self) -> char {
        self.op().code()
    }

    /// Number of columns in the run.
    pub fn len(&self) -> usize {
        match self {
            CigarOp::Match(n) | CigarOp::Mismatch(n) | CigarOp::Insertion(n) | CigarOp::Deletion(n) => *n,
        }
    }

    /// Whether this run has zero length.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for CigarOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.len(), self.code())
    }
}

/// The result of a global pairwise alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignmentResult {
    /// Alignment score under the model it was computed with.
    pub score: i32,
    /// Operations spanning both sequences end-to-end.
    pub cigar: Cigar,
}

impl AlignmentResult {
    /// Format the CIGAR as a compact string, e.g. `"4=1I3="`.
    pub fn cigar_string(&self) -> String {
        self.cigar.to_string()
    }

    /// Number of matching columns.
    pub fn matches(&self) -> usize {
        self.cigar.count(EditOp::Match)
    }

    /// Number of mismatching columns.
    pub fn mismatches(&self) -> usize {
        self.cigar.count(EditOp::Mismatch)
    }

    /// Number of insertion columns.
    pub fn insertions(&self) -> usize {
        self.cigar.count(EditOp::Insertion)
    }

    /// Number of deletion columns.
    pub fn deletions(&self) -> usize {
        self.cigar.count(EditOp::Deletion)
    }

    /// Number of gap columns (insertions + deletions).
    pub fn gaps(&self) -> usize {
        self.insertions() + self.deletions()
    }

    /// Number of maximal gap runs.
    pub fn gap_openings(&self) -> usize {
        self.cigar.runs().filter(|run| run.op().is_gap()).count()
    }

    /// Total number of alignment columns.
    pub fn length(&self) -> usize {
        self.cigar.len()
    }

    /// Fraction of columns that are exact matches, in `[0.0, 1.0]`.
    ///
    /// Returns 0.0 if the alignment is empty.
    pub fn identity(&self) -> f64 {
        let total = self.length();
        if total == 0 {
            return 0.0;
        }
        self.matches() as f64 / total as f64
    }
}

impl gapalign_core::Scored for AlignmentResult {
    fn score(&self) -> i32 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(score: i32, cigar: &str) -> AlignmentResult {
        AlignmentResult {
            score,
            cigar: cigar.parse().unwrap(),
        }
    }

    #[test]
    fn cigar_string_formatting() {
        assert_eq!(result(0, "4=").cigar_string(), "4=");
        assert_eq!(result(0, "3=1I2=1D1X").cigar_string(), "3=1I2=1D1X");
    }

    #[test]
    fn counters() {
        let r = result(0, "2=3I1=2D1X");
        assert_eq!(r.matches(), 3);
        assert_eq!(r.mismatches(), 1);
        assert_eq!(r.insertions(), 3);
        assert_eq!(r.deletions(), 2);
        assert_eq!(r.gaps(), 5);
        assert_eq!(r.gap_openings(), 2);
        assert_eq!(r.length(), 9);
    }

    #[test]
    fn identity_values() {
        assert!((result(0, "4=").identity() - 1.0).abs() < f64::EPSILON);
        assert!((result(0, "3=1X1I").identity() - 0.6).abs() < f64::EPSILON);
        assert!((result(0, "*").identity() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn scored_trait() {
        use gapalign_core::Scored;
        assert_eq!(result(-42, "*").score(), -42);
    }

    #[test]
    fn cigar_op_display() {
        assert_eq!(format!("{}", CigarOp::Match(5)), "5=");
        assert_eq!(format!("{}", CigarOp::Mismatch(2)), "2X");
        assert_eq!(format!("{}", CigarOp::Insertion(1)), "1I");
        assert_eq!(format!("{}", CigarOp::Deletion(3)), "3D");
    }

    #[test]
    fn edit_op_consumption() {
        assert!(EditOp::Match.consumes_pattern() && EditOp::Match.consumes_text());
        assert!(EditOp::Mismatch.consumes_pattern() && EditOp::Mismatch.consumes_text());
        assert!(!EditOp::Insertion.consumes_pattern() && EditOp::Insertion.consumes_text());
        assert!(EditOp::Deletion.consumes_pattern() && !EditOp::Deletion.consumes_text());
        assert_eq!(EditOp::Insertion.swapped(), EditOp::Deletion);
        assert_eq!(EditOp::Match.swapped(), EditOp::Match);
    }

    #[test]
    fn edit_op_codes_round_trip() {
        for op in [EditOp::Match, EditOp::Mismatch, EditOp::Insertion, EditOp::Deletion] {
            assert_eq!(EditOp::from_code(op.code()), Some(op));
            assert_eq!(op.run(7).op(), op);
        }
        assert_eq!(EditOp::from_code('M'), None);
    }
}

//! CIGAR buffer, run-length view, parsing and formatting.
//!
//! A [`Cigar`] stores one [`EditOp`] per alignment column in a buffer that is
//! reserved up front for the worst case (`pattern_len + text_len` columns).
//! `begin_offset..end_offset` delimits the live operations; `begin_offset`
//! is always 0 for alignments produced by this crate. Runs are decoded lazily
//! by [`Cigar::runs`].
//!
//! # Examples
//!
//! ```
//! use gapalign::cigar::Cigar;
//! use gapalign::CigarOp;
//!
//! let cigar: Cigar = "3=1X2D".parse().unwrap();
//! assert_eq!(cigar.len(), 6);
//! assert_eq!(cigar.pattern_consumed(), 6);
//! assert_eq!(cigar.text_consumed(), 4);
//! assert_eq!(cigar.runs().collect::<Vec<_>>(),
//!            vec![CigarOp::Match(3), CigarOp::Mismatch(1), CigarOp::Deletion(2)]);
//! assert_eq!(cigar.to_string(), "3=1X2D");
//! ```

use core::fmt;
use core::str::FromStr;

use crate::types::{CigarOp, EditOp};
use gapalign_core::{AlignError, Result};

// ---------------------------------------------------------------------------
// Buffer
// ---------------------------------------------------------------------------

/// Per-column edit script with begin/end offsets into its buffer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cigar {
    operations: Vec<EditOp>,
    begin_offset: usize,
    end_offset: usize,
}

impl Cigar {
    /// An empty CIGAR with no reserved storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty CIGAR whose buffer can hold `max_len` operations without
    /// reallocating.
    ///
    /// # Errors
    ///
    /// Returns [`AlignError::AllocationFailure`] if the buffer cannot be
    /// reserved.
    pub fn with_capacity(max_len: usize) -> Result<Self> {
        let mut operations = Vec::new();
        operations
            .try_reserve_exact(max_len)
            .map_err(|_| AlignError::AllocationFailure { requested: max_len })?;
        Ok(Self {
            operations,
            begin_offset: 0,
            end_offset: 0,
        })
    }

    /// Build a CIGAR from run-length operations.
    ///
    /// Adjacent runs of the same operation are allowed; they decode as one run.
    ///
    /// # Errors
    ///
    /// Returns an error if the total length overflows or cannot be reserved.
    pub fn from_runs(runs: &[CigarOp]) -> Result<Self> {
        let total = runs
            .iter()
            .try_fold(0usize, |acc, run| acc.checked_add(run.len()))
            .ok_or(AlignError::AllocationFailure { requested: usize::MAX })?;
        let mut cigar = Self::with_capacity(total)?;
        for run in runs {
            for _ in 0..run.len() {
                cigar.push(run.op());
            }
        }
        Ok(cigar)
    }

    /// Append one operation.
    pub fn push(&mut self, op: EditOp) {
        self.operations.push(op);
        self.end_offset = self.operations.len();
    }

    /// Reverse the live operations in place.
    pub(crate) fn reverse(&mut self) {
        self.operations[self.begin_offset..self.end_offset].reverse();
    }

    /// Offset of the first live operation.
    pub fn begin_offset(&self) -> usize {
        self.begin_offset
    }

    /// Number of operations written to the buffer.
    pub fn end_offset(&self) -> usize {
        self.end_offset
    }

    /// Reserved buffer size.
    pub fn capacity(&self) -> usize {
        self.operations.capacity()
    }

    /// The live operations, one per column.
    pub fn operations(&self) -> &[EditOp] {
        &self.operations[self.begin_offset..self.end_offset]
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.end_offset - self.begin_offset
    }

    /// Whether the CIGAR has no columns.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lazily decode maximal runs.
    pub fn runs(&self) -> Runs<'_> {
        Runs {
            ops: self.operations(),
        }
    }

    /// Number of columns equal to `op`.
    pub fn count(&self, op: EditOp) -> usize {
        self.operations().iter().filter(|&&o| o == op).count()
    }

    /// Number of pattern symbols consumed (`=`, `X`, `D`).
    pub fn pattern_consumed(&self) -> usize {
        self.operations()
            .iter()
            .filter(|op| op.consumes_pattern())
            .count()
    }

    /// Number of text symbols consumed (`=`, `X`, `I`).
    pub fn text_consumed(&self) -> usize {
        self.operations()
            .iter()
            .filter(|op| op.consumes_text())
            .count()
    }

    /// The same alignment with pattern and text exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            operations: self.operations().iter().map(|op| op.swapped()).collect(),
            begin_offset: 0,
            end_offset: self.len(),
        }
    }
}

impl fmt::Display for Cigar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("*");
        }
        for run in self.runs() {
            write!(f, "{}", run)?;
        }
        Ok(())
    }
}

impl FromStr for Cigar {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self> {
        Cigar::from_runs(&parse_cigar(s)?)
    }
}

// ---------------------------------------------------------------------------
// Run-length view
// ---------------------------------------------------------------------------

/// Iterator over the maximal runs of a [`Cigar`].
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    ops: &'a [EditOp],
}

impl Iterator for Runs<'_> {
    type Item = CigarOp;

    fn next(&mut self) -> Option<CigarOp> {
        let (&first, rest) = self.ops.split_first()?;
        let len = 1 + rest.iter().take_while(|&&op| op == first).count();
        self.ops = &self.ops[len..];
        Some(first.run(len))
    }
}

// ---------------------------------------------------------------------------
// Parsing & formatting
// ---------------------------------------------------------------------------

/// Parse a compact CIGAR string (`=`, `X`, `I`, `D`) into runs.
///
/// The special CIGAR `*` returns an empty vector.
///
/// # Errors
///
/// Returns [`AlignError::Parse`] on unknown operation characters, missing or
/// zero counts, or trailing digits.
pub fn parse_cigar(s: &str) -> Result<Vec<CigarOp>> {
    if s == "*" {
        return Ok(Vec::new());
    }
    if s.is_empty() {
        return Err(AlignError::Parse("empty CIGAR string".into()));
    }

    let mut ops = Vec::new();
    let mut num_start: Option<usize> = None;

    for (i, c) in s.char_indices() {
        if c.is_ascii_digit() {
            if num_start.is_none() {
                num_start = Some(i);
            }
            continue;
        }
        let start = num_start.ok_or_else(|| {
            AlignError::Parse(format!("CIGAR op '{}' at position {} has no count", c, i))
        })?;
        let n: usize = s[start..i]
            .parse()
            .map_err(|e| AlignError::Parse(format!("invalid CIGAR count: {}", e)))?;
        if n == 0 {
            return Err(AlignError::Parse(format!(
                "zero-length CIGAR op '{}' at position {}",
                c, i
            )));
        }
        let op = EditOp::from_code(c)
            .ok_or_else(|| AlignError::Parse(format!("invalid CIGAR op character '{}'", c)))?;
        ops.push(op.run(n));
        num_start = None;
    }

    if num_start.is_some() {
        return Err(AlignError::Parse(
            "CIGAR string ends with digits but no op character".into(),
        ));
    }

    Ok(ops)
}

/// Format runs as a compact string (e.g. `"10=3I4D"`).
///
/// Returns `"*"` for an empty slice. Adjacent runs of the same operation are
/// written as they are, not merged.
pub fn cigar_string(ops: &[CigarOp]) -> String {
    if ops.is_empty() {
        return "*".into();
    }
    ops.iter().map(|op| op.to_string()).collect()
}

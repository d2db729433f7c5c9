//! Borrowed pattern/text input pair.

use gapalign_core::{AlignError, Result, Sequence};

/// An immutable pattern and text to be aligned end-to-end.
///
/// The pattern plays the role of the query: [`EditOp::Deletion`] consumes a
/// pattern symbol, [`EditOp::Insertion`] consumes a text symbol.
///
/// [`EditOp::Deletion`]: crate::types::EditOp::Deletion
/// [`EditOp::Insertion`]: crate::types::EditOp::Insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequencePair<'a> {
    pattern: &'a [u8],
    text: &'a [u8],
}

impl<'a> SequencePair<'a> {
    /// Pair up any two sequences.
    pub fn new<P, T>(pattern: &'a P, text: &'a T) -> Self
    where
        P: Sequence + ?Sized,
        T: Sequence + ?Sized,
    {
        Self {
            pattern: pattern.as_bytes(),
            text: text.as_bytes(),
        }
    }

    /// Pair up two buffers whose lengths are supplied separately.
    ///
    /// # Errors
    ///
    /// Returns [`AlignError::InvalidInput`] if a declared length differs from
    /// the length of its buffer.
    pub fn with_lengths(
        pattern: &'a [u8],
        pattern_length: usize,
        text: &'a [u8],
        text_length: usize,
    ) -> Result<Self> {
        if pattern.len() != pattern_length {
            return Err(AlignError::InvalidInput(format!(
                "pattern length {} does not match declared length {}",
                pattern.len(),
                pattern_length
            )));
        }
        if text.len() != text_length {
            return Err(AlignError::InvalidInput(format!(
                "text length {} does not match declared length {}",
                text.len(),
                text_length
            )));
        }
        Ok(Self { pattern, text })
    }

    /// The sequence walked down the rows of the DP matrix.
    pub fn pattern(&self) -> &'a [u8] {
        self.pattern
    }

    /// The sequence walked across the columns of the DP matrix.
    pub fn text(&self) -> &'a [u8] {
        self.text
    }

    /// The same pair with pattern and text exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            pattern: self.text,
            text: self.pattern,
        }
    }

    /// Upper bound on the number of columns of any global alignment.
    pub fn max_cigar_len(&self) -> usize {
        self.pattern.len() + self.text.len()
    }
}

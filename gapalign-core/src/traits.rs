//! Core trait definitions shared by the gapalign crates.

/// A read-only symbol sequence (DNA, protein, or arbitrary bytes).
pub trait Sequence {
    /// The raw byte representation of the sequence.
    fn as_bytes(&self) -> &[u8];

    /// Length in symbols.
    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the sequence is empty.
    fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

impl Sequence for [u8] {
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

impl Sequence for Vec<u8> {
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

impl Sequence for str {
    fn as_bytes(&self) -> &[u8] {
        str::as_bytes(self)
    }
}

impl<const N: usize> Sequence for [u8; N] {
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

/// A type that carries an integer score (alignment score, edit distance, ...).
pub trait Scored {
    /// The score value.
    fn score(&self) -> i32;
}

//! Traceback from the terminal cell to the origin.
//!
//! No pointers are stored during the fill. Each step re-derives its
//! predecessor by recomputing the recurrence terms and taking the first one
//! that reproduces the cell's score, in the order match/mismatch, deletion,
//! insertion (and gap open before gap extend inside the affine gap layers).
//! An affine gap opens from the best layer of its neighbour, resolved with
//! the same M, D, I order as the terminal cell.
//! Operations are pushed backwards into a CIGAR reserved for `m + n` columns
//! and reversed once at the end.

use crate::affine::{AffineLayers, Layer};
use crate::cigar::Cigar;
use crate::matrix::{advance, DpMatrix};
use crate::penalties::{AffinePenalties, LinearPenalties};
use crate::types::EditOp;
use gapalign_core::{AlignError, Result};

/// Collects operations in reverse and produces the final [`Cigar`].
struct CigarBuilder {
    cigar: Cigar,
}

impl CigarBuilder {
    fn new(m: usize, n: usize) -> Result<Self> {
        let max_len = m
            .checked_add(n)
            .ok_or(AlignError::AllocationFailure { requested: usize::MAX })?;
        Ok(Self {
            cigar: Cigar::with_capacity(max_len)?,
        })
    }

    #[inline]
    fn push(&mut self, op: EditOp) {
        self.cigar.push(op);
    }

    /// Push the column for aligning `a` against `b`.
    #[inline]
    fn push_substitution(&mut self, a: u8, b: u8) {
        self.push(if a == b { EditOp::Match } else { EditOp::Mismatch });
    }

    fn finish(mut self) -> Cigar {
        self.cigar.reverse();
        log::trace!("traceback produced {} columns: {}", self.cigar.len(), self.cigar);
        self.cigar
    }
}

/// Trace back through a gap-linear (or edit) score layer.
pub(crate) fn trace_linear(
    h: &DpMatrix,
    pattern: &[u8],
    text: &[u8],
    penalties: &LinearPenalties,
) -> Result<Cigar> {
    let mut builder = CigarBuilder::new(pattern.len(), text.len())?;
    let indel = penalties.indel;

    let mut i = pattern.len();
    let mut j = text.len();

    while i > 0 || j > 0 {
        let score = h.get(i, j);
        if i > 0
            && j > 0
            && score == h.get(i - 1, j - 1) + penalties.substitution(pattern[i - 1], text[j - 1])
        {
            builder.push_substitution(pattern[i - 1], text[j - 1]);
            i -= 1;
            j -= 1;
        } else if i > 0 && score == h.get(i - 1, j) - indel {
            builder.push(EditOp::Deletion);
            i -= 1;
        } else if j > 0 && score == h.get(i, j - 1) - indel {
            builder.push(EditOp::Insertion);
            j -= 1;
        } else {
            return Err(AlignError::InternalInconsistency { i, j });
        }
    }

    Ok(builder.finish())
}

/// Trace back through the three gap-affine layers, starting from the best
/// layer at `(m, n)`.
pub(crate) fn trace_affine(
    layers: &AffineLayers,
    pattern: &[u8],
    text: &[u8],
    penalties: &AffinePenalties,
) -> Result<Cigar> {
    let mut builder = CigarBuilder::new(pattern.len(), text.len())?;
    let open = -(penalties.gap_opening + penalties.gap_extension);
    let extend = -penalties.gap_extension;

    let mut i = pattern.len();
    let mut j = text.len();
    let (_, mut layer) = layers.best(i, j);

    while i > 0 || j > 0 {
        match layer {
            Layer::M => {
                if i == 0 || j == 0 {
                    return Err(AlignError::InternalInconsistency { i, j });
                }
                let (a, b) = (pattern[i - 1], text[j - 1]);
                let prev = layers.m.get(i, j) - penalties.substitution(a, b);
                layer = if layers.m.get(i - 1, j - 1) == prev {
                    Layer::M
                } else if layers.d.get(i - 1, j - 1) == prev {
                    Layer::D
                } else if layers.i.get(i - 1, j - 1) == prev {
                    Layer::I
                } else {
                    return Err(AlignError::InternalInconsistency { i, j });
                };
                builder.push_substitution(a, b);
                i -= 1;
                j -= 1;
            }
            Layer::D => {
                if i == 0 {
                    return Err(AlignError::InternalInconsistency { i, j });
                }
                let score = layers.d.get(i, j);
                layer = if score == advance(layers.h(i - 1, j), open) {
                    layers.best(i - 1, j).1
                } else if score == advance(layers.d.get(i - 1, j), extend) {
                    Layer::D
                } else {
                    return Err(AlignError::InternalInconsistency { i, j });
                };
                builder.push(EditOp::Deletion);
                i -= 1;
            }
            Layer::I => {
                if j == 0 {
                    return Err(AlignError::InternalInconsistency { i, j });
                }
                let score = layers.i.get(i, j);
                layer = if score == advance(layers.h(i, j - 1), open) {
                    layers.best(i, j - 1).1
                } else if score == advance(layers.i.get(i, j - 1), extend) {
                    Layer::I
                } else {
                    return Err(AlignError::InternalInconsistency { i, j });
                };
                builder.push(EditOp::Insertion);
                j -= 1;
            }
        }
    }

    Ok(builder.finish())
}

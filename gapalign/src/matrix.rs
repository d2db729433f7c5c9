//! Score storage for the dynamic programming engines.
//!
//! Each layer is a flat row-major `Vec<i32>` of `(m + 1) * (n + 1)` cells.
//! Allocation is fallible: a size that overflows `usize` or cannot be reserved
//! is reported as [`AlignError::AllocationFailure`] instead of aborting.

use gapalign_core::{AlignError, Result};

/// Sentinel for unreachable cells. Half of `i32::MIN` so that subtracting a
/// penalty cannot wrap.
pub(crate) const NEG_INF: i32 = i32::MIN / 2;

/// Add a (usually negative) score delta, keeping unreachable cells pinned at
/// [`NEG_INF`].
#[inline]
pub(crate) fn advance(score: i32, delta: i32) -> i32 {
    if score <= NEG_INF {
        NEG_INF
    } else {
        score + delta
    }
}

/// Reserve a vector of `len` copies of `value`.
pub(crate) fn try_filled(len: usize, value: i32) -> Result<Vec<i32>> {
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|_| AlignError::AllocationFailure { requested: len })?;
    cells.resize(len, value);
    Ok(cells)
}

/// One DP layer over a `(m + 1) x (n + 1)` grid.
#[derive(Debug, Clone)]
pub(crate) struct DpMatrix {
    cols: usize,
    cells: Vec<i32>,
}

impl DpMatrix {
    /// Allocate a layer for a pattern of length `m` and a text of length `n`.
    pub(crate) fn try_new(m: usize, n: usize, value: i32) -> Result<Self> {
        let rows = m.checked_add(1);
        let cols = n.checked_add(1);
        let len = rows
            .zip(cols)
            .and_then(|(r, c)| r.checked_mul(c))
            .ok_or(AlignError::AllocationFailure { requested: usize::MAX })?;
        Ok(Self {
            cols: n + 1,
            cells: try_filled(len, value)?,
        })
    }

    #[inline]
    fn idx(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }

    #[inline]
    pub(crate) fn get(&self, i: usize, j: usize) -> i32 {
        self.cells[self.idx(i, j)]
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, j: usize, value: i32) {
        let k = self.idx(i, j);
        self.cells[k] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_row_major() {
        let mut m = DpMatrix::try_new(2, 3, 0).unwrap();
        m.set(1, 2, 7);
        m.set(2, 3, -4);
        assert_eq!(m.get(1, 2), 7);
        assert_eq!(m.get(2, 3), -4);
        assert_eq!(m.get(0, 0), 0);
        assert_eq!(m.cells.len(), 12);
    }

    #[test]
    fn oversized_matrix_is_allocation_failure() {
        let err = DpMatrix::try_new(usize::MAX, 2, 0).unwrap_err();
        assert!(matches!(err, AlignError::AllocationFailure { .. }));
        let err = DpMatrix::try_new(usize::MAX / 4, 8, 0).unwrap_err();
        assert!(matches!(err, AlignError::AllocationFailure { .. }));
    }

    #[test]
    fn advance_saturates_at_sentinel() {
        assert_eq!(advance(10, -3), 7);
        assert_eq!(advance(10, 2), 12);
        assert_eq!(advance(NEG_INF, -3), NEG_INF);
        assert_eq!(advance(NEG_INF, 5), NEG_INF);
        assert_eq!(advance(NEG_INF - 5, -3), NEG_INF);
    }
}

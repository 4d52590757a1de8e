//! Parametric row/column slice of a matrix.

use crate::types::{AlgoError, AlgoResult, MAX_SLICE_SIZE};

use super::Matrix;

/// Which axis a slice runs along. The discriminant is the selector `d`
/// in the index formula of [`slice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceDirection {
    Column = 0,
    Row = 1,
}

/// Elements `i` of slice `index`, taken from `a[r][c]` with
/// `r = d * index + (1 - d) * i` and `c = (1 - d) * index + d * i`.
///
/// A `Row` slice walks the columns of one row; a `Column` slice walks the
/// rows of one column.
pub fn slice(matrix: &Matrix, index: usize, direction: SliceDirection) -> AlgoResult<Vec<i64>> {
    let d = direction as usize;
    let (bound, len) = match direction {
        SliceDirection::Row => (matrix.rows(), matrix.cols()),
        SliceDirection::Column => (matrix.cols(), matrix.rows()),
    };
    if index >= bound {
        return Err(AlgoError::InvalidInput(format!(
            "{:?} slice {} out of range 0..{}",
            direction, index, bound
        )));
    }
    (0..len)
        .map(|i| {
            let r = d * index + (1 - d) * i;
            let c = (1 - d) * index + d * i;
            matrix.get(r, c).ok_or_else(|| {
                AlgoError::InvalidInput(format!("cell ({}, {}) outside matrix", r, c))
            })
        })
        .collect()
}

/// `size x size` matrix with `a[i][j] = (i + 1) * 100 + j`.
pub fn demo_matrix(size: usize) -> AlgoResult<Matrix> {
    if size > MAX_SLICE_SIZE {
        return Err(AlgoError::InvalidInput(format!(
            "demo matrix size {} exceeds {}",
            size, MAX_SLICE_SIZE
        )));
    }
    Matrix::from_fn(size, size, |i, j| (i as i64 + 1) * 100 + j as i64)
}

//! Row-major dense matrix.

use crate::input::TokenReader;
use crate::types::{AlgoError, AlgoResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

/// `rows * cols`, rejected when the cell buffer could not be addressed.
fn cell_count(rows: usize, cols: usize) -> AlgoResult<usize> {
    rows.checked_mul(cols)
        .filter(|&cells| {
            cells
                .checked_mul(std::mem::size_of::<i64>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or_else(|| {
            AlgoError::InvalidInput(format!("matrix of {} x {} is too large", rows, cols))
        })
}

impl Matrix {
    /// All-zero matrix.
    pub fn zeros(rows: usize, cols: usize) -> AlgoResult<Self> {
        Ok(Self {
            rows,
            cols,
            data: vec![0; cell_count(rows, cols)?],
        })
    }

    pub fn from_rows(rows: &[Vec<i64>]) -> AlgoResult<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        let mut data = Vec::new();
        for row in rows {
            if row.len() != cols {
                return Err(AlgoError::DimensionMismatch {
                    expected: cols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Build from a cell function `f(row, col)`.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> i64,
    ) -> AlgoResult<Self> {
        let mut data = Vec::with_capacity(cell_count(rows, cols)?);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Ok(Self { rows, cols, data })
    }

    /// Read `size * size` values row by row.
    pub fn read_square(reader: &mut TokenReader, size: usize) -> AlgoResult<Self> {
        let data = reader.values(cell_count(size, size)?, "matrix entry")?;
        Ok(Self {
            rows: size,
            cols: size,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Unchecked-by-contract accessors for the multiplication kernels.
    pub(crate) fn at(&self, row: usize, col: usize) -> i64 {
        self.data[row * self.cols + col]
    }

    pub(crate) fn at_mut(&mut self, row: usize, col: usize) -> &mut i64 {
        &mut self.data[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[i64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Rows as vectors, for JSON output.
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }

    /// One line per row, values followed by a space.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for r in 0..self.rows {
            for v in self.row(r) {
                out.push_str(&v.to_string());
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

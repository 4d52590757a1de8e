//! `C = A * B` with three loop orders.
//!
//! All orders compute the same product; they differ only in memory access
//! pattern:
//!
//! - `Ijk`: one dot product per output cell, walking a column of `B`.
//! - `Kij`: broadcast `a[i][k]` across row `k` of `B` (row-major friendly).
//! - `Jki`: broadcast `b[k][j]` down column `i` of `A` and `C`.

use std::fmt;
use std::str::FromStr;

use crate::types::{AlgoError, AlgoResult};

use super::Matrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopOrder {
    #[default]
    Ijk,
    Kij,
    Jki,
}

impl LoopOrder {
    pub const ALL: [LoopOrder; 3] = [LoopOrder::Ijk, LoopOrder::Kij, LoopOrder::Jki];

    pub fn name(&self) -> &'static str {
        match self {
            LoopOrder::Ijk => "ijk",
            LoopOrder::Kij => "kij",
            LoopOrder::Jki => "jki",
        }
    }
}

impl fmt::Display for LoopOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LoopOrder {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ijk" => Ok(LoopOrder::Ijk),
            "kij" => Ok(LoopOrder::Kij),
            "jki" => Ok(LoopOrder::Jki),
            other => Err(AlgoError::InvalidInput(format!("unknown loop order: {}", other))),
        }
    }
}

/// Multiply `a` (`n x m`) by `b` (`m x p`).
pub fn multiply(a: &Matrix, b: &Matrix, order: LoopOrder) -> AlgoResult<Matrix> {
    if a.cols() != b.rows() {
        return Err(AlgoError::DimensionMismatch {
            expected: a.cols(),
            got: b.rows(),
        });
    }
    let mut c = Matrix::zeros(a.rows(), b.cols())?;
    match order {
        LoopOrder::Ijk => multiply_ijk(a, b, &mut c)?,
        LoopOrder::Kij => multiply_kij(a, b, &mut c)?,
        LoopOrder::Jki => multiply_jki(a, b, &mut c)?,
    }
    Ok(c)
}

/// `acc + x * y`, or `InvalidInput` when it leaves the `i64` range.
///
/// Every order accumulates a cell over ascending `k`, so all orders fail
/// on the same inputs.
fn mul_add(acc: i64, x: i64, y: i64) -> AlgoResult<i64> {
    x.checked_mul(y)
        .and_then(|p| acc.checked_add(p))
        .ok_or_else(|| AlgoError::InvalidInput("matrix product overflows i64".to_string()))
}

fn multiply_ijk(a: &Matrix, b: &Matrix, c: &mut Matrix) -> AlgoResult<()> {
    for i in 0..a.rows() {
        for j in 0..b.cols() {
            let mut sum = 0;
            for k in 0..a.cols() {
                sum = mul_add(sum, a.at(i, k), b.at(k, j))?;
            }
            *c.at_mut(i, j) = sum;
        }
    }
    Ok(())
}

fn multiply_kij(a: &Matrix, b: &Matrix, c: &mut Matrix) -> AlgoResult<()> {
    for k in 0..a.cols() {
        for i in 0..a.rows() {
            let r = a.at(i, k);
            for j in 0..b.cols() {
                let cell = c.at_mut(i, j);
                *cell = mul_add(*cell, r, b.at(k, j))?;
            }
        }
    }
    Ok(())
}

fn multiply_jki(a: &Matrix, b: &Matrix, c: &mut Matrix) -> AlgoResult<()> {
    for j in 0..b.cols() {
        for k in 0..a.cols() {
            let r = b.at(k, j);
            for i in 0..a.rows() {
                let cell = c.at_mut(i, j);
                *cell = mul_add(*cell, a.at(i, k), r)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_by_two() {
        let a = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        let b = Matrix::from_rows(&[vec![5, 6], vec![7, 8]]).unwrap();
        let expected = Matrix::from_rows(&[vec![19, 22], vec![43, 50]]).unwrap();
        for order in LoopOrder::ALL {
            assert_eq!(multiply(&a, &b, order).unwrap(), expected, "order {}", order);
        }
    }

    #[test]
    fn test_rectangular_and_mismatch() {
        let a = Matrix::from_rows(&[vec![1, 2, 3]]).unwrap();
        let b = Matrix::from_rows(&[vec![1], vec![1], vec![1]]).unwrap();
        assert_eq!(multiply(&a, &b, LoopOrder::Jki).unwrap().get(0, 0), Some(6));
        assert!(matches!(
            multiply(&a, &a, LoopOrder::Ijk),
            Err(AlgoError::DimensionMismatch { expected: 3, got: 1 })
        ));
    }

    #[test]
    fn test_overflow_is_invalid_input() {
        let big = Matrix::from_rows(&[vec![9_999_999_999]]).unwrap();
        for order in LoopOrder::ALL {
            assert!(matches!(
                multiply(&big, &big, order),
                Err(AlgoError::InvalidInput(_))
            ));
        }
        // Each product fits; only the sum overflows.
        let a = Matrix::from_rows(&[vec![i64::MAX, 1]]).unwrap();
        let b = Matrix::from_rows(&[vec![1], vec![1]]).unwrap();
        for order in LoopOrder::ALL {
            assert!(multiply(&a, &b, order).is_err());
        }
    }

    #[test]
    fn test_loop_order_parse() {
        assert_eq!("KIJ".parse::<LoopOrder>().unwrap(), LoopOrder::Kij);
        assert!("ikj".parse::<LoopOrder>().is_err());
    }
}

//! Dense matrix with bounds-checked access
//!
//! Storage is a single row-major `Vec<f64>` whose shape is fixed at
//! construction. Products with many rows are computed in parallel; each
//! output cell is accumulated in the same order either way, so the result
//! does not depend on the path taken.

use rayon::prelude::*;

use crate::errors::{Error, Result};

/// Row count at which `dot` switches to parallel row evaluation
const PARALLEL_ROW_THRESHOLD: usize = 256;

/// A rows x cols grid of `f64`
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a zero-filled matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Create a matrix from row vectors. All rows must have the same length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(Error::Dimension {
                    op: "from_rows",
                    lhs: (rows.len(), cols),
                    rhs: (1, row.len()),
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

    /// Create an N x 1 column vector
    pub fn column(values: Vec<f64>) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            data: values,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::Index {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Read the element at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        let idx = self.offset(row, col)?;
        Ok(self.data[idx])
    }

    /// Overwrite the element at `(row, col)`
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let idx = self.offset(row, col)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Read entry `i` of a column vector
    pub fn get_entry(&self, i: usize) -> Result<f64> {
        if self.cols != 1 {
            return Err(Error::Dimension {
                op: "get_entry",
                lhs: self.shape(),
                rhs: (i, 1),
            });
        }
        self.get(i, 0)
    }

    /// Sum of column `col`
    pub fn column_sum(&self, col: usize) -> Result<f64> {
        if col >= self.cols {
            return Err(Error::Index {
                row: 0,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok((0..self.rows).map(|r| self.data[r * self.cols + col]).sum())
    }

    /// Row-major view of all elements
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consume the matrix and return its row-major elements
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Matrix product `self * other`.
    ///
    /// Fails with [`Error::Dimension`] unless `self.cols == other.rows`. The
    /// result has shape `(self.rows, other.cols)`.
    pub fn dot(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(Error::Dimension {
                op: "dot",
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }

        let mut out = Matrix::new(self.rows, other.cols);
        if other.cols == 0 {
            return Ok(out);
        }

        let fill_row = |(r, out_row): (usize, &mut [f64])| {
            let lhs_row = &self.data[r * self.cols..(r + 1) * self.cols];
            for (c, cell) in out_row.iter_mut().enumerate() {
                let mut acc = 0.0;
                for (k, &a) in lhs_row.iter().enumerate() {
                    acc += a * other.data[k * other.cols + c];
                }
                *cell = acc;
            }
        };

        if self.rows >= PARALLEL_ROW_THRESHOLD {
            out.data
                .par_chunks_mut(other.cols)
                .enumerate()
                .for_each(fill_row);
        } else {
            out.data.chunks_mut(other.cols).enumerate().for_each(fill_row);
        }

        Ok(out)
    }
}

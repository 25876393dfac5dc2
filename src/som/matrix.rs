//! Dense row-major matrix used for both samples and node weights.

use crate::error::{Result, TracerError};
use std::ops::Range;

/// An owned, row-major matrix of `f64` values.
///
/// Rows are stored back to back in a single buffer with a fixed stride of
/// `cols`. The shape is fixed at construction: there is no way to add or
/// remove rows or columns afterwards, which keeps a weight matrix at exactly
/// `num_out x num_features` for the whole training run.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a matrix filled with zeros.
    ///
    /// # Panics
    ///
    /// Panics if `cols` is zero.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(cols > 0, "Matrix must have at least one column");
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates a matrix from a flat row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if cols == 0 {
            return Err(TracerError::InvalidShape(
                "Matrix must have at least one column".to_string(),
            ));
        }
        if data.len() != rows * cols {
            return Err(TracerError::InvalidShape(format!(
                "Buffer of length {} cannot hold {}x{} values",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix from a list of rows, which must all have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let cols = rows.first().map(Vec::len).ok_or_else(|| {
            TracerError::InvalidShape("Cannot infer column count from zero rows".to_string())
        })?;

        let num_rows = rows.len();
        let mut data = Vec::with_capacity(num_rows * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(TracerError::InvalidShape(format!(
                    "Row {} has {} values, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            data.extend(row);
        }

        Self::from_vec(num_rows, cols, data)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the matrix has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Gets a single value, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Sets a single value. Returns false (and changes nothing) when out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> bool {
        if row < self.rows && col < self.cols {
            self.data[row * self.cols + col] = value;
            true
        } else {
            false
        }
    }

    /// Gets a row by index.
    #[inline]
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index < self.rows {
            let offset = index * self.cols;
            Some(&self.data[offset..offset + self.cols])
        } else {
            None
        }
    }

    /// Gets a mutable row by index.
    #[inline]
    pub fn row_mut(&mut self, index: usize) -> Option<&mut [f64]> {
        if index < self.rows {
            let offset = index * self.cols;
            Some(&mut self.data[offset..offset + self.cols])
        } else {
            None
        }
    }

    /// Iterates over the rows in order.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.cols)
    }

    /// Mutable flat view of a contiguous range of rows.
    ///
    /// The range is clamped to the matrix; an empty slice is returned for an
    /// empty or out-of-bounds range.
    pub(crate) fn rows_range_mut(&mut self, range: Range<usize>) -> &mut [f64] {
        let end = range.end.min(self.rows);
        let start = range.start.min(end);
        &mut self.data[start * self.cols..end * self.cols]
    }

    /// The underlying row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Converts the matrix into a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.iter_rows().map(<[f64]>::to_vec).collect()
    }
}

//! Borrowed column-major matrix view.
//!
//! ## Purpose
//!
//! Design matrices, covariates and the projection matrix `dzr` are all passed
//! around as flat, column-major buffers. This module wraps such a buffer with
//! its dimensions so that a column can be borrowed as a contiguous slice.
//!
//! ## Invariants
//!
//! * `data.len() == nrows * ncols` (checked on construction).
//! * Column `j` occupies `data[j * nrows..(j + 1) * nrows]`.
//!
//! ## Non-goals
//!
//! * This module does not own or copy matrix data.
//! * This module does not provide row-major access.

// Internal dependencies
use crate::primitives::errors::VarbvsError;

/// An immutable n x p column-major matrix view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnMatrix<'a, T> {
    data: &'a [T],
    nrows: usize,
    ncols: usize,
}

impl<'a, T> ColumnMatrix<'a, T> {
    /// Wrap a column-major buffer of `nrows * ncols` elements.
    pub fn new(data: &'a [T], nrows: usize, ncols: usize) -> Result<Self, VarbvsError> {
        let expected = nrows
            .checked_mul(ncols)
            .ok_or(VarbvsError::DimensionOverflow { nrows, ncols })?;
        if data.len() != expected {
            return Err(VarbvsError::MismatchedLength {
                what: "matrix",
                expected,
                got: data.len(),
            });
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Number of rows (samples).
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns (variables).
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Borrow column `j` as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `j >= ncols`.
    #[inline]
    pub fn column(&self, j: usize) -> &'a [T] {
        &self.data[j * self.nrows..(j + 1) * self.nrows]
    }

    /// Iterate over all columns in order.
    pub fn columns(self) -> impl Iterator<Item = &'a [T]> {
        (0..self.ncols).map(move |j| self.column(j))
    }

    /// The underlying column-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }
}

//! Scratch buffers for the covariate-adjusted update.
//!
//! ## Purpose
//!
//! The covariate update projects both the predictor column and the fitted
//! vector onto the m-dimensional covariate space. The two projections need
//! scratch storage of length m, which this module provides so that a sweep
//! over thousands of variables allocates it once.
//!
//! ## Design notes
//!
//! * **Lazy Expansion**: Buffers are grown on demand via `ensure_len` but never
//!   shrunk, stabilizing at the largest m seen.
//! * **Explicit ownership**: The buffer is passed into each sweep, so callers
//!   running independent fits on separate threads hold one buffer each.
//!
//! ## Invariants
//!
//! * After `prepare(m)`, both `a` and `b` have length exactly m.
//! * Capacity is monotonically increasing.

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Deref, DerefMut};
use num_traits::Float;

// ============================================================================
// Slot - Reusable Vector
// ============================================================================

/// A reusable vector slot with automatic capacity management.
#[derive(Debug, Clone)]
pub struct Slot<T>(Vec<T>);

impl<T> Slot<T> {
    /// Create a new slot with the given initial capacity.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Current capacity of the underlying vector.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }
}

impl<T: Float> Slot<T> {
    /// Resize to exactly `len` zeroed elements, reusing capacity.
    #[inline]
    pub fn ensure_len(&mut self, len: usize) {
        self.0.clear();
        self.0.resize(len, T::zero());
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// ============================================================================
// UpdateBuffer
// ============================================================================

/// Scratch space for the covariate projections `a = dzr'x` and `b = dzr'Xr`.
#[derive(Debug, Clone, Default)]
pub struct UpdateBuffer<T> {
    /// Projection of the predictor column.
    pub a: Slot<T>,
    /// Projection of the fitted vector.
    pub b: Slot<T>,
}

impl<T: Float> UpdateBuffer<T> {
    /// Create a buffer sized for `m` covariates.
    pub fn new(m: usize) -> Self {
        let mut buffer = Self {
            a: Slot::new(m),
            b: Slot::new(m),
        };
        buffer.prepare(m);
        buffer
    }

    /// Size both projections for `m` covariates.
    #[inline]
    pub fn prepare(&mut self, m: usize) {
        self.a.ensure_len(m);
        self.b.ensure_len(m);
    }

    /// Borrow both projections mutably at once.
    #[inline]
    pub fn split_mut(&mut self) -> (&mut [T], &mut [T]) {
        (self.a.as_mut_slice(), self.b.as_mut_slice())
    }
}

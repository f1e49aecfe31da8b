//! Variational fit state shared across coordinate updates.
//!
//! The state owns the per-variable variational parameters `alpha` (inclusion
//! probabilities) and `mu` (conditional posterior means), together with the
//! fitted vector `Xr = X * (alpha .* mu)` that every update reads and shifts.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::vector::add;
use crate::primitives::errors::VarbvsError;
use crate::primitives::matrix::ColumnMatrix;

/// Variational parameters and the fitted vector they imply.
#[derive(Debug, Clone, PartialEq)]
pub struct FitState<T> {
    pub(crate) alpha: Vec<T>,
    pub(crate) mu: Vec<T>,
    pub(crate) xr: Vec<T>,
}

impl<T: Float> FitState<T> {
    /// Build a state from explicit parameters and a fitted vector.
    ///
    /// `xr` is taken as given; it is the caller's job that it equals
    /// `X * (alpha .* mu)` for the design used in later sweeps.
    pub fn new(alpha: Vec<T>, mu: Vec<T>, xr: Vec<T>) -> Result<Self, VarbvsError> {
        Validator::validate_len(&mu, alpha.len(), "mu")?;
        Validator::validate_probabilities(&alpha)?;
        Validator::validate_finite(&mu, "mu")?;
        Validator::validate_finite(&xr, "Xr")?;
        Ok(Self { alpha, mu, xr })
    }

    /// Build a state and compute `Xr = X * (alpha .* mu)` from scratch.
    pub fn from_design(
        x: &ColumnMatrix<'_, T>,
        alpha: Vec<T>,
        mu: Vec<T>,
    ) -> Result<Self, VarbvsError> {
        Validator::validate_len(&alpha, x.ncols(), "alpha")?;
        let mut xr = Vec::with_capacity(x.nrows());
        xr.resize(x.nrows(), T::zero());
        let mut state = Self::new(alpha, mu, xr)?;
        state.accumulate_fitted(x);
        Ok(state)
    }

    /// All variables excluded: `alpha = 0`, `mu = 0`, `Xr = 0`.
    pub fn zeros(nsamples: usize, nvars: usize) -> Self {
        let mut alpha = Vec::with_capacity(nvars);
        alpha.resize(nvars, T::zero());
        let mut xr = Vec::with_capacity(nsamples);
        xr.resize(nsamples, T::zero());
        Self {
            mu: alpha.clone(),
            alpha,
            xr,
        }
    }

    /// Recompute `Xr` from scratch, discarding drift from incremental updates.
    pub fn recompute_fitted(&mut self, x: &ColumnMatrix<'_, T>) -> Result<(), VarbvsError> {
        Validator::validate_len(&self.alpha, x.ncols(), "alpha")?;
        Validator::validate_len(&self.xr, x.nrows(), "Xr")?;
        self.xr.iter_mut().for_each(|v| *v = T::zero());
        self.accumulate_fitted(x);
        Ok(())
    }

    fn accumulate_fitted(&mut self, x: &ColumnMatrix<'_, T>) {
        for (j, col) in x.columns().enumerate() {
            let r = self.alpha[j] * self.mu[j];
            if r != T::zero() {
                add(&mut self.xr, r, col);
            }
        }
    }

    /// Posterior inclusion probabilities.
    #[inline]
    pub fn alpha(&self) -> &[T] {
        &self.alpha
    }

    /// Posterior means conditional on inclusion.
    #[inline]
    pub fn mu(&self) -> &[T] {
        &self.mu
    }

    /// Fitted vector `X * (alpha .* mu)`.
    #[inline]
    pub fn xr(&self) -> &[T] {
        &self.xr
    }

    /// Number of variables.
    #[inline]
    pub fn nvars(&self) -> usize {
        self.alpha.len()
    }

    /// Posterior mean coefficients `alpha .* mu`.
    pub fn coefficients(&self) -> Vec<T> {
        self.alpha
            .iter()
            .zip(&self.mu)
            .map(|(&a, &m)| a * m)
            .collect()
    }

    /// Consume the state, returning `(alpha, mu, xr)`.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>, Vec<T>) {
        (self.alpha, self.mu, self.xr)
    }
}

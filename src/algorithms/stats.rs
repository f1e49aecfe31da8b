//! Summary statistics consumed by the coordinate-ascent update.
//!
//! ## Purpose
//!
//! The update never touches the response directly. It works from per-sample
//! weights `d` and per-variable scalars `xy`, `xd`, `xdx` (plus the projection
//! `dzr` when covariates are present), all derived from the design matrix, the
//! binary labels and the current variational parameters `eta` of the logistic
//! bound. This module derives them.
//!
//! ## Key concepts
//!
//! * **Weights**: `d = slope(eta)`, the curvature of the quadratic bound.
//! * **Centred response**: `yhat = y - 1/2 - beta0 * d` with
//!   `beta0 = sum(y - 1/2) / sum(d)`; with covariates the intercept term becomes
//!   the weighted projection `DZ(Z'DZ)^-1 Z'(y - 1/2)`.
//! * **xdx**: `sum_i d[i] x[i]^2` minus the part explained by the intercept or
//!   the covariates.
//! * **dzr**: `D Z L` with `LL' = (Z'DZ)^-1`, stored n x m column-major.
//!
//! ## Invariants
//!
//! * `xdx[j] >= 0` up to round-off (it is a weighted residual sum of squares).
//! * A single intercept column as Z reproduces the statistics without covariates.
//!
//! ## Non-goals
//!
//! * This module does not validate its inputs (see `engine::validator`).
//! * This module does not update `eta`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::linalg::FloatLinalg;
use crate::math::sigmoid::slope;
use crate::math::vector::{dot, dotscaled, matrixvec, sum, SimdKernel};
use crate::primitives::errors::VarbvsError;
use crate::primitives::matrix::ColumnMatrix;

// ============================================================================
// SummaryStats
// ============================================================================

/// Per-sample weights and per-variable statistics for one pass of updates.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats<T> {
    /// Sample weights (n).
    pub d: Vec<T>,
    /// `X' yhat` (p).
    pub xy: Vec<T>,
    /// `X' d` (p).
    pub xd: Vec<T>,
    /// Diagonal of the adjusted weighted cross-product (p).
    pub xdx: Vec<T>,
    /// Covariate projection `dzr`, n x m column-major, if covariates are used.
    pub dzr: Option<Vec<T>>,
    /// Number of covariate columns m (0 without covariates).
    pub ncov: usize,
}

impl<T: Float> SummaryStats<T> {
    /// Assemble statistics computed elsewhere (no covariates).
    pub fn new(d: Vec<T>, xy: Vec<T>, xd: Vec<T>, xdx: Vec<T>) -> Self {
        Self {
            d,
            xy,
            xd,
            xdx,
            dzr: None,
            ncov: 0,
        }
    }

    /// Attach a covariate projection `dzr` with `ncov` columns.
    pub fn with_covariates(mut self, dzr: Vec<T>, ncov: usize) -> Self {
        self.dzr = Some(dzr);
        self.ncov = ncov;
        self
    }

    /// Number of samples.
    #[inline]
    pub fn nsamples(&self) -> usize {
        self.d.len()
    }

    /// Number of variables.
    #[inline]
    pub fn nvars(&self) -> usize {
        self.xy.len()
    }

    /// Whether the covariate-adjusted update applies.
    #[inline]
    pub fn has_covariates(&self) -> bool {
        self.dzr.is_some()
    }
}

// ============================================================================
// Computation
// ============================================================================

/// Compute summary statistics from the design matrix, labels and `eta`.
///
/// Inputs are assumed validated: `y` and `eta` have `x.nrows()` elements and `z`,
/// when present, has `x.nrows()` rows.
pub fn compute_stats<T: SimdKernel + FloatLinalg>(
    x: &ColumnMatrix<'_, T>,
    y: &[T],
    eta: &[T],
    z: Option<&ColumnMatrix<'_, T>>,
) -> Result<SummaryStats<T>, VarbvsError> {
    let half = T::from(0.5).unwrap_or_else(T::zero);

    let d: Vec<T> = eta.iter().map(|&e| slope(e)).collect();
    let sd = sum(&d);
    if sd <= T::zero() {
        return Err(VarbvsError::ZeroWeightSum);
    }
    let u: Vec<T> = y.iter().map(|&yi| yi - half).collect();

    let (yhat, projection) = match z {
        None => {
            let beta0 = sum(&u) / sd;
            let yhat: Vec<T> = u.iter().zip(&d).map(|(&ui, &di)| ui - beta0 * di).collect();
            (yhat, None)
        }
        Some(z) => {
            let (yhat, dzr) = covariate_projection(z, &d, &u)?;
            (yhat, Some(dzr))
        }
    };

    let p = x.ncols();
    let mut xy = Vec::with_capacity(p);
    let mut xd = Vec::with_capacity(p);
    let mut xdx = Vec::with_capacity(p);
    let ncov = z.map_or(0, |z| z.ncols());
    let mut scratch = Vec::with_capacity(ncov);
    scratch.resize(ncov, T::zero());

    for col in x.columns() {
        let xdj = dot(col, &d);
        let weighted_ss = dotscaled(col, col, &d);
        let explained = match &projection {
            None => xdj * xdj / sd,
            Some(dzr) => {
                matrixvec(dzr, col, &mut scratch);
                dot(&scratch, &scratch)
            }
        };
        xy.push(dot(col, &yhat));
        xd.push(xdj);
        xdx.push(weighted_ss - explained);
    }

    Ok(SummaryStats {
        d,
        xy,
        xd,
        xdx,
        dzr: projection,
        ncov,
    })
}

/// Centred response and `dzr` for covariates `z`.
fn covariate_projection<T: SimdKernel + FloatLinalg>(
    z: &ColumnMatrix<'_, T>,
    d: &[T],
    u: &[T],
) -> Result<(Vec<T>, Vec<T>), VarbvsError> {
    let n = z.nrows();
    let m = z.ncols();

    // Z'DZ, symmetric, column-major.
    let mut ztdz = Vec::with_capacity(m * m);
    for l in 0..m {
        for k in 0..m {
            ztdz.push(dotscaled(z.column(k), z.column(l), d));
        }
    }
    let factor = T::factor_covariates(&ztdz, m).ok_or(VarbvsError::SingularCovariates)?;

    // yhat = u - D Z S Z'u
    let ztu: Vec<T> = z.columns().map(|zk| dot(zk, u)).collect();
    let mut yhat = u.to_vec();
    for k in 0..m {
        let wk = (0..m).fold(T::zero(), |acc, l| acc + factor.inverse[l * m + k] * ztu[l]);
        for (i, yi) in yhat.iter_mut().enumerate() {
            *yi = *yi - d[i] * z.column(k)[i] * wk;
        }
    }

    // dzr[:, l] = d .* (Z L[:, l]); L is lower so only k >= l contribute.
    let mut dzr = Vec::with_capacity(n * m);
    dzr.resize(n * m, T::zero());
    for (l, out) in dzr.chunks_exact_mut(n.max(1)).take(m).enumerate() {
        for k in l..m {
            let lkl = factor.lower[l * m + k];
            for (o, &zik) in out.iter_mut().zip(z.column(k)) {
                *o = *o + zik * lkl;
            }
        }
        for (o, &di) in out.iter_mut().zip(d) {
            *o = *o * di;
        }
    }

    Ok((yhat, dzr))
}

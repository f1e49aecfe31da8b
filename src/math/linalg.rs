//! Linear algebra backend for covariate adjustment.
//!
//! ## Purpose
//!
//! Adjusting for covariates Z needs the inverse of the weighted cross-product
//! `S = (Z'DZ)^-1` and a lower Cholesky factor `L` with `S = LL'`. This module
//! bridges generic `Float` types to nalgebra for those two factorizations.
//!
//! ## Design notes
//!
//! * `Z'DZ` is symmetric positive definite whenever Z has full column rank and
//!   the weights are positive, so Cholesky is used for both steps. Failure of
//!   either factorization is reported as `None`.
//! * The inverse is symmetrized before its own factorization to remove
//!   round-off asymmetry.
//! * Matrices cross the boundary as flat column-major slices.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Factorizations of the weighted covariate cross-product.
pub struct CovariateFactor<T> {
    /// `S = (Z'DZ)^-1`, m x m column-major.
    pub inverse: Vec<T>,
    /// Lower-triangular `L` with `S = LL'`, m x m column-major.
    pub lower: Vec<T>,
}

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + 'static {
    /// Invert the symmetric positive definite `Z'DZ` and factor the inverse.
    fn factor_covariates(ztdz: &[Self], m: usize) -> Option<CovariateFactor<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn factor_covariates(ztdz: &[Self], m: usize) -> Option<CovariateFactor<Self>> {
        nalgebra_backend::factor_covariates(ztdz, m)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn factor_covariates(ztdz: &[Self], m: usize) -> Option<CovariateFactor<Self>> {
        nalgebra_backend::factor_covariates(ztdz, m)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based factorizations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{ComplexField, DMatrix, RealField};

    /// Compute `S = (Z'DZ)^-1` and its lower Cholesky factor.
    pub fn factor_covariates<T: RealField + Copy>(
        ztdz: &[T],
        m: usize,
    ) -> Option<CovariateFactor<T>> {
        let matrix = DMatrix::from_column_slice(m, m, ztdz);
        let chol = matrix.cholesky()?;
        // A zero pivot passes the factorization but leaves no usable inverse.
        if chol.l_dirty().diagonal().iter().any(|v| !(*v > nalgebra::zero::<T>())) {
            return None;
        }
        let inverse = chol.inverse();
        if inverse.iter().any(|v| !ComplexField::is_finite(v)) {
            return None;
        }
        let half = nalgebra::convert::<f64, T>(0.5);
        let symmetric = (&inverse + inverse.transpose()) * half;
        let lower = symmetric.clone().cholesky()?.l();

        Some(CovariateFactor {
            inverse: symmetric.as_slice().to_vec(),
            lower: lower.as_slice().to_vec(),
        })
    }
}

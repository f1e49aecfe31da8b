//! # varbvs-rs — Variational Bayesian Variable Selection Updates for Rust
//!
//! A small, fast implementation of the coordinate-ascent update at the heart of
//! variational Bayesian variable selection for logistic regression (varbvs).
//!
//! ## What is varbvs?
//!
//! Bayesian variable selection places a spike-and-slab prior on every
//! regression coefficient: with prior probability `sigmoid(logodds)` the
//! variable is included and its coefficient is drawn from `N(0, sa)`. The
//! variational approximation summarizes the posterior of variable `j` by
//!
//! - `alpha[j]`, the posterior inclusion probability, and
//! - `mu[j]`, the posterior mean of the coefficient given inclusion.
//!
//! These are refined one variable at a time. Each refinement is a closed-form
//! step that reads the current fitted vector `Xr = X * (alpha .* mu)` and shifts
//! it by the change in the variable's contribution.
//!
//! **How one update works:**
//!
//! 1. Posterior variance `s = sa / (sa * xdx + 1)`
//! 2. Posterior mean from the weighted residual correlation
//! 3. Inclusion probability `alpha = sigmoid(logodds + (ln(s / sa) + mu^2 / s) / 2)`
//! 4. `Xr += (alpha * mu - r_old) * x`
//!
//! ## Quick Start
//!
//! ### Direct kernel call
//!
//! ```rust
//! use varbvs_rs::prelude::*;
//!
//! let x = [1.0_f64, 0.0, 1.0];
//! let d = [1.0_f64, 1.0, 1.0];
//! let mut xr = [0.0_f64; 3];
//! let (mut alpha, mut mu) = (0.0_f64, 0.0_f64);
//!
//! update(&x, 2.0, 2.0, 2.0, &d, 1.0, 0.0, &mut alpha, &mut mu, &mut xr);
//!
//! assert!((mu - 2.0 / 3.0).abs() < 1e-12);
//! assert!(alpha > 0.0 && alpha < 1.0);
//! assert!((xr[0] - alpha * mu).abs() < 1e-12);
//! ```
//!
//! ### Sweeping a design matrix
//!
//! ```rust
//! use varbvs_rs::prelude::*;
//!
//! // 4 samples, 2 variables, column-major.
//! let data = vec![1.0, -1.0, 2.0, 0.5, 0.0, 1.0, -1.0, 1.0];
//! let x = ColumnMatrix::new(&data, 4, 2)?;
//! let y = vec![1.0, 0.0, 1.0, 1.0];
//! let eta = vec![1.0; 4];
//!
//! let model = Varbvs::new()
//!     .prior_variance(1.0)
//!     .log_odds(-1.0)
//!     .build()?;
//!
//! let stats = model.summary_stats(&x, &y, &eta, None)?;
//! let mut state = FitState::zeros(4, 2);
//! let mut buffer = UpdateBuffer::new(0);
//!
//! model.sweep(&x, &stats, &mut state, &[0, 1], &mut buffer)?;
//! assert_eq!(state.alpha().len(), 2);
//! # Result::<(), VarbvsError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! The kernel functions (`update`, `update_with_covariates`, `dot`, ...) never
//! fail: they assume matching lengths, `sa > 0` and non-negative weights.
//! Everything above them returns `Result<_, VarbvsError>` and validates once,
//! before the first kernel call.
//!
//! ## Covariates
//!
//! With covariates Z the intercept adjustment is replaced by a projection
//! `dzr` (n x m, column-major) satisfying `dzr * dzr' = DZ(Z'DZ)^-1 Z'D`.
//! [`summary_stats`](prelude::summary_stats) computes it when given `Some(&z)`,
//! and sweeps then dispatch to the covariate-adjusted update automatically.
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to drop the standard library dependency; an
//! allocator is still required.
//!
//! ```toml
//! [dependencies]
//! varbvs-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## Logging
//!
//! Sweeps and statistic preparation log through the `log` facade at `debug`
//! level, and per-variable results at `trace`. The kernel itself never logs.
//!
//! ## References
//!
//! - Carbonetto, P. & Stephens, M. (2012). "Scalable variational inference for
//!   Bayesian variable selection in regression, and its accuracy in genetic
//!   association studies"
//! - Jaakkola, T. S. & Jordan, M. I. (2000). "Bayesian parameter estimation via
//!   variational methods"

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - errors, matrix views and scratch buffers.
mod primitives;

// Layer 2: Math - vector kernel, sigmoid, nalgebra bridge.
mod math;

// Layer 3: Algorithms - the coordinate-ascent update and summary statistics.
mod algorithms;

// Layer 4: Engine - validation, fit state and sweeps.
mod engine;

// High-level fluent API.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard varbvs prelude.
///
/// ```
/// use varbvs_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        add, dot, dotscaled, logsigmoid, matrixvec, sigmoid, slope, sum, summary_stats, update,
        update_with_covariates, ColumnMatrix, CoordinateAscent, FitState, FloatLinalg, LogOdds,
        SimdKernel, SummaryStats, UpdateBuffer, VarbvsBuilder as Varbvs, VarbvsError,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// Only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}

//! High-level API for varbvs coordinate ascent.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point: a fluent builder that
//! configures the prior and produces a validated [`CoordinateAscent`] updater.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults (`sa = 1`, `logodds = 0`).
//! * **Validated**: Hyperparameters are checked when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`VarbvsBuilder`] via `Varbvs::new()`.
//! 2. Chain `.prior_variance()` and `.log_odds()` / `.log_odds_per_variable()`.
//! 3. Call `.build()` to obtain the updater.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::Debug;

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::stats::SummaryStats;
pub use crate::algorithms::update::{update, update_with_covariates};
pub use crate::engine::executor::{summary_stats, CoordinateAscent, LogOdds};
pub use crate::engine::state::FitState;
pub use crate::math::linalg::FloatLinalg;
pub use crate::math::sigmoid::{logsigmoid, sigmoid, slope};
pub use crate::math::vector::{add, dot, dotscaled, matrixvec, sum, SimdKernel};
pub use crate::primitives::buffer::UpdateBuffer;
pub use crate::primitives::errors::VarbvsError;
pub use crate::primitives::matrix::ColumnMatrix;

/// Fluent builder for the coordinate-ascent updater.
#[derive(Debug, Clone)]
pub struct VarbvsBuilder<T> {
    /// Prior variance scale `sa`.
    pub prior_variance: Option<T>,

    /// Prior log-odds of inclusion.
    pub log_odds: Option<LogOdds<T>>,
}

impl<T: SimdKernel + FloatLinalg + Debug> Default for VarbvsBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SimdKernel + FloatLinalg + Debug> VarbvsBuilder<T> {
    /// Create a new builder with default parameters.
    pub fn new() -> Self {
        Self {
            prior_variance: None,
            log_odds: None,
        }
    }

    /// Set the prior variance scale `sa` (must be > 0).
    pub fn prior_variance(mut self, sa: T) -> Self {
        self.prior_variance = Some(sa);
        self
    }

    /// Set one prior log-odds shared by all variables.
    pub fn log_odds(mut self, logodds: T) -> Self {
        self.log_odds = Some(LogOdds::Shared(logodds));
        self
    }

    /// Set one prior log-odds per variable.
    pub fn log_odds_per_variable(mut self, logodds: Vec<T>) -> Self {
        self.log_odds = Some(LogOdds::PerVariable(logodds));
        self
    }

    /// Validate the configuration and build the updater.
    pub fn build(self) -> Result<CoordinateAscent<T>, VarbvsError> {
        let sa = self.prior_variance.unwrap_or_else(T::one);
        Validator::validate_prior_variance(sa)?;

        let logodds = self.log_odds.unwrap_or(LogOdds::Shared(T::zero()));
        match &logodds {
            LogOdds::Shared(t) => Validator::validate_scalar(*t, "logodds")?,
            LogOdds::PerVariable(v) => Validator::validate_finite(v, "logodds")?,
        }

        Ok(CoordinateAscent { sa, logodds })
    }
}

//! Coordinate-ascent execution engine.
//!
//! ## Purpose
//!
//! This module drives the single-variable update over a design matrix. A sweep
//! validates every precondition once, then applies the update to each variable
//! in the caller's order, threading the shared fit state through the calls.
//!
//! ## Design notes
//!
//! * **Validate once**: All length, weight and index checks happen before the
//!   first update so the inner loop runs the unchecked kernel.
//! * **Variant dispatch**: Statistics carrying a covariate projection select the
//!   covariate-adjusted update; otherwise the plain update runs.
//! * **Sequential**: The state is borrowed mutably for the whole sweep, so no two
//!   updates can touch `Xr` concurrently.
//!
//! ## Key concepts
//!
//! * **Sweep**: One update per entry of `order`, in order. Entries may repeat.
//! * **Prior**: Shared `sa`, and log-odds shared or per variable.
//!
//! ## Non-goals
//!
//! * This module does not iterate to convergence or update `eta`.
//! * This module does not estimate hyperparameters.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;

// Internal dependencies
use crate::algorithms::stats::{compute_stats, SummaryStats};
use crate::algorithms::update::{update, update_with_covariates};
use crate::engine::state::FitState;
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;
use crate::math::vector::SimdKernel;
use crate::primitives::buffer::UpdateBuffer;
use crate::primitives::errors::VarbvsError;
use crate::primitives::matrix::ColumnMatrix;

// ============================================================================
// Prior
// ============================================================================

/// Prior log-odds of inclusion.
#[derive(Debug, Clone, PartialEq)]
pub enum LogOdds<T> {
    /// One value for every variable.
    Shared(T),
    /// One value per variable.
    PerVariable(Vec<T>),
}

impl<T: Copy> LogOdds<T> {
    /// Log-odds for variable `j`.
    #[inline]
    pub fn get(&self, j: usize) -> T {
        match self {
            Self::Shared(t) => *t,
            Self::PerVariable(v) => v[j],
        }
    }
}

// ============================================================================
// CoordinateAscent
// ============================================================================

/// A configured coordinate-ascent updater.
///
/// Construct through [`crate::api::VarbvsBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateAscent<T> {
    pub(crate) sa: T,
    pub(crate) logodds: LogOdds<T>,
}

impl<T: SimdKernel + FloatLinalg + Debug> CoordinateAscent<T> {
    /// Prior variance scale `sa`.
    #[inline]
    pub fn prior_variance(&self) -> T {
        self.sa
    }

    /// Prior log-odds configuration.
    #[inline]
    pub fn log_odds(&self) -> &LogOdds<T> {
        &self.logodds
    }

    /// Compute validated summary statistics for the current `eta`.
    pub fn summary_stats(
        &self,
        x: &ColumnMatrix<'_, T>,
        y: &[T],
        eta: &[T],
        z: Option<&ColumnMatrix<'_, T>>,
    ) -> Result<SummaryStats<T>, VarbvsError> {
        summary_stats(x, y, eta, z)
    }

    /// Update every variable once, in index order.
    pub fn sweep_all(
        &self,
        x: &ColumnMatrix<'_, T>,
        stats: &SummaryStats<T>,
        state: &mut FitState<T>,
        buffer: &mut UpdateBuffer<T>,
    ) -> Result<(), VarbvsError> {
        let order: Vec<usize> = (0..x.ncols()).collect();
        self.sweep(x, stats, state, &order, buffer)
    }

    /// Update one variable.
    pub fn update_variable(
        &self,
        x: &ColumnMatrix<'_, T>,
        stats: &SummaryStats<T>,
        state: &mut FitState<T>,
        j: usize,
        buffer: &mut UpdateBuffer<T>,
    ) -> Result<(), VarbvsError> {
        self.sweep(x, stats, state, &[j], buffer)
    }

    /// Update the variables in `order`, one at a time.
    pub fn sweep(
        &self,
        x: &ColumnMatrix<'_, T>,
        stats: &SummaryStats<T>,
        state: &mut FitState<T>,
        order: &[usize],
        buffer: &mut UpdateBuffer<T>,
    ) -> Result<(), VarbvsError> {
        Validator::validate_sweep(x, stats, state.xr.len(), state.nvars(), order)?;
        if let LogOdds::PerVariable(v) = &self.logodds {
            Validator::validate_len(v, x.ncols(), "logodds")?;
        }

        log::debug!(
            "varbvs sweep: {} updates over n={} samples, p={} variables, m={} covariates",
            order.len(),
            x.nrows(),
            x.ncols(),
            stats.ncov
        );

        buffer.prepare(stats.ncov);
        for &j in order {
            self.apply(x.column(j), stats, state, j, buffer);
            log::trace!("variable {}: alpha={:?} mu={:?}", j, state.alpha[j], state.mu[j]);
        }

        log::debug!("varbvs sweep finished");
        Ok(())
    }

    /// Run the update for variable `j` without any checks.
    #[inline]
    fn apply(
        &self,
        col: &[T],
        stats: &SummaryStats<T>,
        state: &mut FitState<T>,
        j: usize,
        buffer: &mut UpdateBuffer<T>,
    ) {
        let FitState { alpha, mu, xr } = state;
        let logodds = self.logodds.get(j);
        match &stats.dzr {
            None => update(
                col,
                stats.xy[j],
                stats.xd[j],
                stats.xdx[j],
                &stats.d,
                self.sa,
                logodds,
                &mut alpha[j],
                &mut mu[j],
                xr,
            ),
            Some(dzr) => {
                let (a, b) = buffer.split_mut();
                update_with_covariates(
                    col,
                    stats.xy[j],
                    stats.xdx[j],
                    &stats.d,
                    dzr,
                    self.sa,
                    logodds,
                    &mut alpha[j],
                    &mut mu[j],
                    xr,
                    a,
                    b,
                );
            }
        }
    }
}

/// Compute summary statistics after validating the inputs.
///
/// `y` must hold 0/1 labels; `eta` holds the current variational parameters of
/// the logistic bound, one per sample.
pub fn summary_stats<T: SimdKernel + FloatLinalg>(
    x: &ColumnMatrix<'_, T>,
    y: &[T],
    eta: &[T],
    z: Option<&ColumnMatrix<'_, T>>,
) -> Result<SummaryStats<T>, VarbvsError> {
    Validator::validate_stats_inputs(x, y, eta, z)?;
    let stats = compute_stats(x, y, eta, z)?;
    log::debug!(
        "summary statistics ready: n={}, p={}, m={}",
        stats.nsamples(),
        stats.nvars(),
        stats.ncov
    );
    Ok(stats)
}

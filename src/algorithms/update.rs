//! Single-variable coordinate-ascent update.
//!
//! ## Purpose
//!
//! This module implements one closed-form coordinate-ascent step on the
//! variational lower bound for Bayesian variable selection in logistic
//! regression. One call refits one variable: it recomputes the posterior
//! variance, posterior mean and inclusion probability, then moves the shared
//! fitted vector `Xr` from the old contribution of that variable to the new one.
//!
//! ## Design notes
//!
//! * **No validation**: Both functions are the innermost loop of a fit and are
//!   called once per variable per pass. Lengths, `sa > 0` and `d >= 0` are
//!   preconditions checked by the engine before a sweep.
//! * **Incremental**: `Xr` is updated by `(r_new - r_old) * x`, never rebuilt, so
//!   round-off accumulates across calls.
//! * **Read-then-write**: `alpha` and `mu` are read as the previous estimate and
//!   overwritten with the new one.
//!
//! ## Key concepts
//!
//! * **Posterior variance**: `s = sa / (sa * xdx + 1)`.
//! * **Posterior mean**: `mu = s * (xy + xdx * r + adjustment - dotscaled(x, Xr, d))`
//!   where the adjustment removes the weighted mean (plain) or the covariate
//!   projection (covariate variant).
//! * **Inclusion probability**: `alpha = sigmoid(logodds + (ln(s / sa) + mu^2 / s) / 2)`.
//!
//! ## Invariants
//!
//! * On return `Xr` differs from its input by exactly `(alpha * mu - r) * x`.
//! * Calls are deterministic; nothing is retained between calls.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::sigmoid::sigmoid;
use crate::math::vector::{add, dot, dotscaled, matrixvec, sum, SimdKernel};

// ============================================================================
// Shared Steps
// ============================================================================

/// Posterior variance of the coefficient given inclusion.
#[inline]
fn posterior_variance<T: Float>(sa: T, xdx: T) -> T {
    sa / (sa * xdx + T::one())
}

/// Inclusion probability from the refitted mean, then propagate into `Xr`.
#[inline]
#[allow(clippy::too_many_arguments)]
fn finish_update<T: Float>(
    x: &[T],
    s: T,
    sa: T,
    logodds: T,
    r: T,
    mu_new: T,
    alpha: &mut T,
    mu: &mut T,
    xr: &mut [T],
) {
    let two = T::one() + T::one();
    let ssr = mu_new * mu_new / s;
    let alpha_new = sigmoid(logodds + ((s / sa).ln() + ssr) / two);

    let rnew = alpha_new * mu_new;
    add(xr, rnew - r, x);

    *alpha = alpha_new;
    *mu = mu_new;
}

// ============================================================================
// Update Variants
// ============================================================================

/// Coordinate-ascent update for one variable.
///
/// # Arguments
///
/// * `x` - predictor column (n).
/// * `xy`, `xd`, `xdx` - summary statistics of `x` against the centred
///   response and the weights.
/// * `d` - non-negative sample weights (n).
/// * `sa` - prior variance scale, `sa > 0`.
/// * `logodds` - prior log-odds of inclusion.
/// * `alpha`, `mu` - current estimates, overwritten with the new ones.
/// * `xr` - fitted vector `X * (alpha .* mu)` (n), updated in place.
#[allow(clippy::too_many_arguments)]
pub fn update<T: SimdKernel>(
    x: &[T],
    xy: T,
    xd: T,
    xdx: T,
    d: &[T],
    sa: T,
    logodds: T,
    alpha: &mut T,
    mu: &mut T,
    xr: &mut [T],
) {
    let s = posterior_variance(sa, xdx);

    let r = *alpha * *mu;
    let mean_adjustment = xd * dot(d, xr) / sum(d);
    let mu_new = s * (xy + xdx * r + mean_adjustment - dotscaled(x, xr, d));

    finish_update(x, s, sa, logodds, r, mu_new, alpha, mu, xr);
}

/// Coordinate-ascent update for one variable, adjusting for covariates.
///
/// `dzr` is the n x m column-major projection with `dzr * dzr' = DZ(Z'DZ)^-1Z'D`.
/// `a` and `b` (m each) receive `dzr' * x` and `dzr' * xr`; their contents on
/// return are scratch. With m = 0 this reduces to [`update`] with `xd = 0`.
#[allow(clippy::too_many_arguments)]
pub fn update_with_covariates<T: SimdKernel>(
    x: &[T],
    xy: T,
    xdx: T,
    d: &[T],
    dzr: &[T],
    sa: T,
    logodds: T,
    alpha: &mut T,
    mu: &mut T,
    xr: &mut [T],
    a: &mut [T],
    b: &mut [T],
) {
    debug_assert_eq!(a.len(), b.len(), "scratch buffers differ in length");
    let s = posterior_variance(sa, xdx);

    let r = *alpha * *mu;
    matrixvec(dzr, x, a);
    matrixvec(dzr, xr, b);
    let mu_new = s * (xy + xdx * r + dot(a, b) - dotscaled(x, xr, d));

    finish_update(x, s, sa, logodds, r, mu_new, alpha, mu, xr);
}

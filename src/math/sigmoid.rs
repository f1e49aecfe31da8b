//! Logistic function and the Jaakkola-Jordan bound curvature.
//!
//! ## Purpose
//!
//! The update maps a log-odds value to an inclusion probability through the
//! logistic sigmoid. Preparing the summary statistics needs the slope of the
//! quadratic lower bound on the logistic log-likelihood.
//!
//! ## Key concepts
//!
//! * **sigmoid**: `1 / (1 + exp(-x))`, range (0, 1) for moderate `x`.
//! * **logsigmoid**: `-ln(1 + exp(-x))`, evaluated without overflow.
//! * **slope**: `(sigmoid(x) - 1/2) / x`, with limit 1/4 at zero.
//!
//! ## Non-goals
//!
//! * This module does not clamp probabilities away from 0 or 1.

// External dependencies
use num_traits::Float;

/// Logistic function `1 / (1 + exp(-x))`.
#[inline]
pub fn sigmoid<T: Float>(x: T) -> T {
    T::one() / (T::one() + (-x).exp())
}

/// Logarithm of the logistic function.
///
/// Uses `-ln(1 + exp(-x))` for `x >= 0` and `x - ln(1 + exp(x))` otherwise so
/// that `exp` never overflows.
#[inline]
pub fn logsigmoid<T: Float>(x: T) -> T {
    if x >= T::zero() {
        -(-x).exp().ln_1p()
    } else {
        x - x.exp().ln_1p()
    }
}

/// Slope of the conjugate bound, `(sigmoid(x) - 1/2) / x`.
///
/// This is the per-sample weight `d` of the quadratic approximation. It is
/// even in `x`, strictly positive, and tends to 1/4 as `x -> 0`.
#[inline]
pub fn slope<T: Float>(x: T) -> T {
    let half = T::from(0.5).unwrap_or_else(T::zero);
    let quarter = T::from(0.25).unwrap_or_else(T::zero);
    // Below this the cancellation in sigmoid(x) - 1/2 dominates; the series
    // 1/4 - x^2/48 is exact to working precision there.
    let small = T::epsilon().sqrt();
    if x.abs() < small {
        quarter - x * x / T::from(48.0).unwrap_or_else(T::one)
    } else {
        (sigmoid(x) - half) / x
    }
}

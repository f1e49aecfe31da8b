//! Tests for the single-variable coordinate-ascent update.
//!
//! These tests verify:
//! - The closed-form posterior variance, mean and inclusion probability
//! - Exact incremental propagation into the fitted vector
//! - Agreement between the plain and covariate-adjusted variants
//!
//! ## Test Organization
//!
//! 1. **Worked Example** - Three samples, computed by hand
//! 2. **Invariants** - Determinism, null variables, probability range
//! 3. **Variant Agreement** - Covariate update vs plain update

use approx::assert_relative_eq;
use proptest::prelude::*;

use varbvs_rs::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn expected_alpha(logodds: f64, s: f64, sa: f64, mu: f64) -> f64 {
    sigmoid(logodds + ((s / sa).ln() + mu * mu / s) / 2.0)
}

// ============================================================================
// Worked Example
// ============================================================================

/// Test the three-sample example from first principles.
#[test]
fn test_update_worked_example() {
    let x = [1.0, 0.0, 1.0];
    let d = [1.0, 1.0, 1.0];
    let mut xr = [0.0, 0.0, 0.0];
    let mut alpha = 0.0;
    let mut mu = 0.0;

    update(&x, 2.0, 2.0, 2.0, &d, 1.0, 0.0, &mut alpha, &mut mu, &mut xr);

    // s = 1 / (1 * 2 + 1) = 1/3, mu = s * 2 = 2/3, SSR = 4/3
    let s = 1.0 / 3.0;
    assert_relative_eq!(mu, 2.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(alpha, expected_alpha(0.0, s, 1.0, 2.0 / 3.0), epsilon = 1e-12);
    assert_relative_eq!(alpha, 0.5293065, epsilon = 1e-7);

    let rnew = alpha * mu;
    assert_relative_eq!(xr[0], rnew, epsilon = 1e-12);
    assert_eq!(xr[1], 0.0);
    assert_relative_eq!(xr[2], rnew, epsilon = 1e-12);
}

/// Test the weighted-mean and residual terms with a non-zero fitted vector.
#[test]
fn test_update_uses_previous_estimate() {
    let x = [1.0, 2.0, -1.0, 0.5];
    let d = [0.2, 0.25, 0.1, 0.3];
    let xr_start = [0.4, -0.2, 0.1, 0.3];
    let (xy, xdx, sa, logodds) = (0.7, 0.9, 0.5, -1.5);
    let xd = dot(&x, &d);
    let (alpha0, mu0) = (0.3, 0.8);

    let mut xr = xr_start;
    let mut alpha = alpha0;
    let mut mu = mu0;
    update(&x, xy, xd, xdx, &d, sa, logodds, &mut alpha, &mut mu, &mut xr);

    let s = sa / (sa * xdx + 1.0);
    let r = alpha0 * mu0;
    let mean_term = xd * dot(&d, &xr_start) / sum(&d);
    let mu_expected = s * (xy + xdx * r + mean_term - dotscaled(&x, &xr_start, &d));
    assert_relative_eq!(mu, mu_expected, epsilon = 1e-12);
    assert_relative_eq!(alpha, expected_alpha(logodds, s, sa, mu_expected), epsilon = 1e-12);

    let shift = alpha * mu - r;
    for i in 0..4 {
        assert_relative_eq!(xr[i], xr_start[i] + shift * x[i], epsilon = 1e-12);
    }
}

// ============================================================================
// Invariants
// ============================================================================

/// Test repeated calls on identical inputs produce identical outputs.
#[test]
fn test_update_is_deterministic() {
    let x = [0.3, -1.2, 2.2, 0.0, 1.1];
    let d = [0.24, 0.2, 0.18, 0.25, 0.21];

    let run = || {
        let mut xr = [0.1, 0.0, -0.3, 0.2, 0.05];
        let mut alpha = 0.4;
        let mut mu = -0.2;
        update(&x, 0.35, 0.6, 1.3, &d, 2.0, -2.0, &mut alpha, &mut mu, &mut xr);
        (alpha, mu, xr)
    };

    assert_eq!(run(), run());
}

/// Test a variable with no signal leaves the fitted vector untouched.
#[test]
fn test_null_variable_does_not_move_fitted() {
    let x = [1.0, -1.0, 0.5];
    let d = [0.25, 0.25, 0.25];
    let mut xr = [0.0; 3];
    let mut alpha = 0.0;
    let mut mu = 0.0;

    update(&x, 0.0, 0.0, 0.5, &d, 1.0, -3.0, &mut alpha, &mut mu, &mut xr);

    assert_eq!(mu, 0.0);
    assert_eq!(xr, [0.0; 3]);
    assert!(alpha > 0.0 && alpha < 1.0);
}

/// Test a negative correlation gives a negative posterior mean.
#[test]
fn test_negative_signal() {
    let x = [1.0, 1.0];
    let d = [0.25, 0.25];
    let mut xr = [0.0; 2];
    let (mut alpha, mut mu) = (0.0, 0.0);
    update(&x, -3.0, 0.5, 0.5, &d, 1.0, 0.0, &mut alpha, &mut mu, &mut xr);
    assert!(mu < 0.0);
    assert!(xr.iter().all(|&v| v < 0.0));
}

/// Test f32 precision follows the same arithmetic.
#[test]
fn test_update_f32() {
    let x = [1.0_f32, 0.0, 1.0];
    let d = [1.0_f32; 3];
    let mut xr = [0.0_f32; 3];
    let (mut alpha, mut mu) = (0.0_f32, 0.0_f32);
    update(&x, 2.0, 2.0, 2.0, &d, 1.0, 0.0, &mut alpha, &mut mu, &mut xr);
    assert_relative_eq!(mu, 2.0 / 3.0, epsilon = 1e-6);
    assert_relative_eq!(alpha, 0.5293065, epsilon = 1e-5);
}

proptest! {
    /// The inclusion probability stays strictly inside (0, 1) for moderate inputs.
    #[test]
    fn prop_alpha_in_open_unit_interval(
        xy in -2.0..2.0_f64,
        xdx in 0.0..2.0_f64,
        sa in 0.01..1.0_f64,
        logodds in -5.0..5.0_f64,
        alpha0 in 0.0..1.0_f64,
        mu0 in -1.0..1.0_f64,
    ) {
        let x = [1.0, -0.5, 0.25];
        let d = [0.25, 0.2, 0.15];
        let mut xr = [0.1, -0.1, 0.05];
        let (mut alpha, mut mu) = (alpha0, mu0);
        update(&x, xy, 0.3, xdx, &d, sa, logodds, &mut alpha, &mut mu, &mut xr);
        prop_assert!(alpha > 0.0 && alpha < 1.0);
        prop_assert!(mu.is_finite());
    }
}

// ============================================================================
// Variant Agreement
// ============================================================================

/// Test the covariate update with no covariates equals the plain update with xd = 0.
#[test]
fn test_covariates_with_no_columns_match_plain() {
    let x = [1.0, 2.0, -1.0];
    let d = [0.2, 0.25, 0.1];
    let xr0 = [0.3_f64, -0.1, 0.2];

    let mut xr_plain = xr0;
    let (mut alpha_plain, mut mu_plain) = (0.5, 0.4);
    update(&x, 0.8, 0.0, 1.1, &d, 1.0, -1.0, &mut alpha_plain, &mut mu_plain, &mut xr_plain);

    let mut xr_cov = xr0;
    let (mut alpha_cov, mut mu_cov) = (0.5, 0.4);
    let mut a: [f64; 0] = [];
    let mut b: [f64; 0] = [];
    update_with_covariates(
        &x, 0.8, 1.1, &d, &[], 1.0, -1.0, &mut alpha_cov, &mut mu_cov, &mut xr_cov, &mut a,
        &mut b,
    );

    assert_relative_eq!(mu_cov, mu_plain, epsilon = 1e-14);
    assert_relative_eq!(alpha_cov, alpha_plain, epsilon = 1e-14);
    for i in 0..3 {
        assert_relative_eq!(xr_cov[i], xr_plain[i], epsilon = 1e-14);
    }
}

/// Test an intercept-only projection `dzr = d / sqrt(sum(d))` reproduces the plain update.
#[test]
fn test_intercept_projection_matches_plain() {
    let x = [1.0_f64, 2.0, -1.0, 0.0, 3.0];
    let d = [0.2_f64, 0.25, 0.1, 0.22, 0.15];
    let xr0 = [0.3_f64, -0.1, 0.2, 0.0, -0.4];
    let xd = dot(&x, &d);
    let root = sum(&d).sqrt();
    let dzr: Vec<f64> = d.iter().map(|&v| v / root).collect();

    let mut xr_plain = xr0;
    let (mut alpha_plain, mut mu_plain) = (0.2, -0.6);
    update(&x, 0.45, xd, 0.7, &d, 0.8, -0.5, &mut alpha_plain, &mut mu_plain, &mut xr_plain);

    let mut xr_cov = xr0;
    let (mut alpha_cov, mut mu_cov) = (0.2, -0.6);
    let mut a = [0.0];
    let mut b = [0.0];
    update_with_covariates(
        &x, 0.45, 0.7, &d, &dzr, 0.8, -0.5, &mut alpha_cov, &mut mu_cov, &mut xr_cov, &mut a,
        &mut b,
    );

    assert_relative_eq!(mu_cov, mu_plain, epsilon = 1e-12);
    assert_relative_eq!(alpha_cov, alpha_plain, epsilon = 1e-12);
    for i in 0..5 {
        assert_relative_eq!(xr_cov[i], xr_plain[i], epsilon = 1e-12);
    }

    // Scratch holds the two projections.
    assert_relative_eq!(a[0], xd / root, epsilon = 1e-12);
    assert_relative_eq!(b[0], dot(&d, &xr0) / root, epsilon = 1e-12);
}

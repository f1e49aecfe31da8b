//! Tests for summary-statistic preparation.
//!
//! These tests verify:
//! - Weights, centred response and per-variable statistics without covariates
//! - The covariate projection and its intercept-only special case
//! - Input errors raised before any computation
//!
//! ## Test Organization
//!
//! 1. **Without Covariates** - Direct formulas
//! 2. **With Covariates** - Projection properties
//! 3. **Errors** - Invalid inputs

use approx::assert_relative_eq;

use varbvs_rs::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

/// 6 samples x 3 variables, column-major.
fn design() -> Vec<f64> {
    vec![
        1.0, 0.0, 2.0, -1.0, 0.5, 1.5, // x0
        0.0, 1.0, 1.0, 0.0, -2.0, 1.0, // x1
        0.3, -0.7, 0.2, 1.1, 0.0, -0.4, // x2
    ]
}

fn labels() -> Vec<f64> {
    vec![1.0, 0.0, 1.0, 0.0, 0.0, 1.0]
}

fn eta() -> Vec<f64> {
    vec![0.5, 1.0, 1.5, 0.2, 2.0, 0.8]
}

// ============================================================================
// Without Covariates
// ============================================================================

/// Test each statistic against its defining formula.
#[test]
fn test_stats_without_covariates() {
    let data = design();
    let x = ColumnMatrix::new(&data, 6, 3).unwrap();
    let y = labels();
    let eta = eta();

    let stats = summary_stats(&x, &y, &eta, None).unwrap();
    assert!(!stats.has_covariates());
    assert_eq!(stats.nsamples(), 6);
    assert_eq!(stats.nvars(), 3);

    let d: Vec<f64> = eta.iter().map(|&e| slope(e)).collect();
    let sd: f64 = d.iter().sum();
    let beta0 = y.iter().map(|&v| v - 0.5).sum::<f64>() / sd;
    let yhat: Vec<f64> = y
        .iter()
        .zip(&d)
        .map(|(&v, &w)| v - 0.5 - beta0 * w)
        .collect();

    for i in 0..6 {
        assert_relative_eq!(stats.d[i], d[i], epsilon = 1e-15);
    }
    for j in 0..3 {
        let col = x.column(j);
        let xd: f64 = col.iter().zip(&d).map(|(a, b)| a * b).sum();
        let xy: f64 = col.iter().zip(&yhat).map(|(a, b)| a * b).sum();
        let xdx: f64 = col.iter().zip(&d).map(|(a, b)| a * a * b).sum::<f64>() - xd * xd / sd;
        assert_relative_eq!(stats.xd[j], xd, epsilon = 1e-12);
        assert_relative_eq!(stats.xy[j], xy, epsilon = 1e-12);
        assert_relative_eq!(stats.xdx[j], xdx, epsilon = 1e-12);
        assert!(stats.xdx[j] >= 0.0);
    }
}

/// Test the centred response is orthogonal to the weights.
#[test]
fn test_constant_column_has_no_signal() {
    let data = vec![1.0; 6];
    let x = ColumnMatrix::new(&data, 6, 1).unwrap();
    let stats = summary_stats(&x, &labels(), &eta(), None).unwrap();
    assert_relative_eq!(stats.xy[0], 0.0, epsilon = 1e-12);
    assert_relative_eq!(stats.xdx[0], 0.0, epsilon = 1e-12);
}

// ============================================================================
// With Covariates
// ============================================================================

/// Test an intercept column as Z reproduces the plain statistics.
#[test]
fn test_intercept_covariate_matches_plain() {
    let data = design();
    let x = ColumnMatrix::new(&data, 6, 3).unwrap();
    let ones = vec![1.0; 6];
    let z = ColumnMatrix::new(&ones, 6, 1).unwrap();

    let plain = summary_stats(&x, &labels(), &eta(), None).unwrap();
    let cov = summary_stats(&x, &labels(), &eta(), Some(&z)).unwrap();

    assert!(cov.has_covariates());
    assert_eq!(cov.ncov, 1);
    for j in 0..3 {
        assert_relative_eq!(cov.xy[j], plain.xy[j], epsilon = 1e-12);
        assert_relative_eq!(cov.xd[j], plain.xd[j], epsilon = 1e-12);
        assert_relative_eq!(cov.xdx[j], plain.xdx[j], epsilon = 1e-12);
    }

    let dzr = cov.dzr.as_ref().unwrap();
    let root = plain.d.iter().sum::<f64>().sqrt();
    for i in 0..6 {
        assert_relative_eq!(dzr[i], plain.d[i] / root, epsilon = 1e-12);
    }
}

/// Test a variable lying in the covariate span is fully explained.
#[test]
fn test_variable_in_covariate_span() {
    let data = design();
    // Z = [1, x1]
    let mut zdata = vec![1.0; 6];
    zdata.extend_from_slice(&data[6..12]);
    let x = ColumnMatrix::new(&data, 6, 3).unwrap();
    let z = ColumnMatrix::new(&zdata, 6, 2).unwrap();

    let stats = summary_stats(&x, &labels(), &eta(), Some(&z)).unwrap();
    assert_eq!(stats.dzr.as_ref().unwrap().len(), 12);

    assert_relative_eq!(stats.xdx[1], 0.0, epsilon = 1e-10);
    assert_relative_eq!(stats.xy[1], 0.0, epsilon = 1e-10);
    assert!(stats.xdx[0] > 0.0);
    assert!(stats.xdx[2] > 0.0);
}

// ============================================================================
// Errors
// ============================================================================

/// Test non-binary labels are rejected.
#[test]
fn test_invalid_label() {
    let data = design();
    let x = ColumnMatrix::new(&data, 6, 3).unwrap();
    let mut y = labels();
    y[3] = 2.0;
    let err = summary_stats(&x, &y, &eta(), None).unwrap_err();
    assert_eq!(err, VarbvsError::InvalidLabel { index: 3, value: 2.0 });
}

/// Test mismatched eta length is rejected.
#[test]
fn test_eta_length_mismatch() {
    let data = design();
    let x = ColumnMatrix::new(&data, 6, 3).unwrap();
    let err = summary_stats(&x, &labels(), &[0.1; 5], None).unwrap_err();
    assert_eq!(
        err,
        VarbvsError::MismatchedLength {
            what: "eta",
            expected: 6,
            got: 5
        }
    );
}

/// Test a zero covariate column is reported as singular.
#[test]
fn test_singular_covariates() {
    let data = design();
    let x = ColumnMatrix::new(&data, 6, 3).unwrap();
    let zeros = vec![0.0; 6];
    let z = ColumnMatrix::new(&zeros, 6, 1).unwrap();
    let err = summary_stats(&x, &labels(), &eta(), Some(&z)).unwrap_err();
    assert_eq!(err, VarbvsError::SingularCovariates);
}

/// Test a non-finite design entry is rejected.
#[test]
fn test_non_finite_design() {
    let mut data = design();
    data[4] = f64::NAN;
    let x = ColumnMatrix::new(&data, 6, 3).unwrap();
    let err = summary_stats(&x, &labels(), &eta(), None).unwrap_err();
    assert!(matches!(err, VarbvsError::InvalidNumericValue(_)));
}

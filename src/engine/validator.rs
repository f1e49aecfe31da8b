//! Input validation for varbvs configuration and data.
//!
//! ## Purpose
//!
//! The update kernel trusts its inputs completely. This module is where that
//! trust is earned: it checks prior hyperparameters, data dimensions, weights,
//! labels and variational parameters once, before any kernel call.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap (lengths) to expensive
//!   (element scans).
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or repair invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::stats::SummaryStats;
use crate::primitives::errors::VarbvsError;
use crate::primitives::matrix::ColumnMatrix;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for varbvs configuration and input data.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Scalars
    // ========================================================================

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), VarbvsError> {
        if !val.is_finite() {
            return Err(VarbvsError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate the prior variance scale `sa`.
    pub fn validate_prior_variance<T: Float>(sa: T) -> Result<(), VarbvsError> {
        if !sa.is_finite() || sa <= T::zero() {
            return Err(VarbvsError::InvalidPriorVariance(
                sa.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    // ========================================================================
    // Slices
    // ========================================================================

    /// Validate that a slice has the expected length.
    pub fn validate_len<T>(
        values: &[T],
        expected: usize,
        what: &'static str,
    ) -> Result<(), VarbvsError> {
        if values.len() != expected {
            return Err(VarbvsError::MismatchedLength {
                what,
                expected,
                got: values.len(),
            });
        }
        Ok(())
    }

    /// Validate that every element is finite.
    pub fn validate_finite<T: Float>(values: &[T], what: &str) -> Result<(), VarbvsError> {
        for (i, &val) in values.iter().enumerate() {
            if !val.is_finite() {
                return Err(VarbvsError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    what,
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate sample weights: finite, non-negative, and with positive sum
    /// when `require_positive_sum` is set.
    pub fn validate_weights<T: Float>(
        d: &[T],
        require_positive_sum: bool,
    ) -> Result<(), VarbvsError> {
        Self::validate_finite(d, "d")?;
        let mut total = T::zero();
        for (index, &value) in d.iter().enumerate() {
            if value < T::zero() {
                return Err(VarbvsError::NegativeWeight {
                    index,
                    value: value.to_f64().unwrap_or(f64::NAN),
                });
            }
            total = total + value;
        }
        if require_positive_sum && total <= T::zero() {
            return Err(VarbvsError::ZeroWeightSum);
        }
        Ok(())
    }

    /// Validate binary labels.
    pub fn validate_labels<T: Float>(y: &[T]) -> Result<(), VarbvsError> {
        for (index, &value) in y.iter().enumerate() {
            if value != T::zero() && value != T::one() {
                return Err(VarbvsError::InvalidLabel {
                    index,
                    value: value.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(())
    }

    /// Validate inclusion probabilities lie in [0, 1].
    pub fn validate_probabilities<T: Float>(alpha: &[T]) -> Result<(), VarbvsError> {
        for (index, &value) in alpha.iter().enumerate() {
            if !(value >= T::zero() && value <= T::one()) {
                return Err(VarbvsError::InvalidProbability {
                    index,
                    value: value.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(())
    }

    /// Validate a list of variable indices against the number of variables.
    pub fn validate_order(order: &[usize], nvars: usize) -> Result<(), VarbvsError> {
        if let Some(&index) = order.iter().find(|&&j| j >= nvars) {
            return Err(VarbvsError::VariableOutOfRange { index, nvars });
        }
        Ok(())
    }

    // ========================================================================
    // Composite Checks
    // ========================================================================

    /// Validate inputs for computing summary statistics.
    pub fn validate_stats_inputs<T: Float>(
        x: &ColumnMatrix<'_, T>,
        y: &[T],
        eta: &[T],
        z: Option<&ColumnMatrix<'_, T>>,
    ) -> Result<(), VarbvsError> {
        let n = x.nrows();
        if n == 0 {
            return Err(VarbvsError::EmptyInput);
        }
        Self::validate_len(y, n, "y")?;
        Self::validate_len(eta, n, "eta")?;
        if let Some(z) = z {
            if z.nrows() != n {
                return Err(VarbvsError::MismatchedLength {
                    what: "Z rows",
                    expected: n,
                    got: z.nrows(),
                });
            }
            Self::validate_finite(z.as_slice(), "Z")?;
        }

        Self::validate_labels(y)?;
        Self::validate_finite(eta, "eta")?;
        Self::validate_finite(x.as_slice(), "X")
    }

    /// Validate everything a sweep relies on.
    ///
    /// `xr_len` and `nvars_state` come from the fit state being updated.
    pub fn validate_sweep<T: Float>(
        x: &ColumnMatrix<'_, T>,
        stats: &SummaryStats<T>,
        xr_len: usize,
        nvars_state: usize,
        order: &[usize],
    ) -> Result<(), VarbvsError> {
        let n = x.nrows();
        let p = x.ncols();

        // Check 1: Dimensions
        Self::validate_len(&stats.d, n, "d")?;
        Self::validate_len(&stats.xy, p, "xy")?;
        Self::validate_len(&stats.xd, p, "xd")?;
        Self::validate_len(&stats.xdx, p, "xdx")?;
        if xr_len != n {
            return Err(VarbvsError::MismatchedLength {
                what: "Xr",
                expected: n,
                got: xr_len,
            });
        }
        if nvars_state != p {
            return Err(VarbvsError::MismatchedLength {
                what: "alpha",
                expected: p,
                got: nvars_state,
            });
        }
        if let Some(dzr) = &stats.dzr {
            Self::validate_len(dzr, n * stats.ncov, "dzr")?;
        }
        Self::validate_order(order, p)?;

        // Check 2: Weights (the plain update divides by their sum)
        Self::validate_weights(&stats.d, !stats.has_covariates())?;

        // Check 3: Statistics
        Self::validate_finite(&stats.xy, "xy")?;
        Self::validate_finite(&stats.xd, "xd")?;
        Self::validate_finite(&stats.xdx, "xdx")
    }
}

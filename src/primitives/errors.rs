//! Error types for varbvs operations.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every fallible
//! entry point of the crate: configuration, summary-statistic preparation,
//! fit-state construction and coordinate-ascent sweeps.
//!
//! ## Design notes
//!
//! * **Boundary only**: The vector kernel and the per-variable update never
//!   return errors. Their preconditions are checked once, here, at the engine
//!   boundary.
//! * **no_std**: Implements `Display` unconditionally and `std::error::Error`
//!   only with the `std` feature.
//! * **Owned payloads**: Numeric payloads are stored as `f64` so the error type
//!   is not generic.
//!
//! ## Non-goals
//!
//! * This module does not perform validation itself (see `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt;

// ============================================================================
// VarbvsError
// ============================================================================

/// Errors raised at the validation boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum VarbvsError {
    /// An input that must contain at least one sample or variable is empty.
    EmptyInput,

    /// Two inputs that must agree in length do not.
    MismatchedLength {
        /// Name of the offending input.
        what: &'static str,
        /// Length implied by the other inputs.
        expected: usize,
        /// Length actually supplied.
        got: usize,
    },

    /// Matrix dimensions whose element count does not fit in `usize`.
    DimensionOverflow {
        /// Requested number of rows.
        nrows: usize,
        /// Requested number of columns.
        ncols: usize,
    },

    /// Prior variance is not a finite, strictly positive number.
    InvalidPriorVariance(f64),

    /// A value is NaN or infinite.
    InvalidNumericValue(String),

    /// A sample weight is negative.
    NegativeWeight {
        /// Sample index.
        index: usize,
        /// Offending weight.
        value: f64,
    },

    /// Sample weights sum to zero, so the weighted mean is undefined.
    ZeroWeightSum,

    /// An inclusion probability lies outside [0, 1].
    InvalidProbability {
        /// Variable index.
        index: usize,
        /// Offending probability.
        value: f64,
    },

    /// A response label is neither 0 nor 1.
    InvalidLabel {
        /// Sample index.
        index: usize,
        /// Offending label.
        value: f64,
    },

    /// A variable index is not below the number of variables.
    VariableOutOfRange {
        /// Requested variable.
        index: usize,
        /// Number of variables.
        nvars: usize,
    },

    /// The weighted covariate cross-product Z'DZ is not positive definite.
    SingularCovariates,
}

impl fmt::Display for VarbvsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedLength {
                what,
                expected,
                got,
            } => write!(
                f,
                "Length mismatch: {} has {} elements, expected {}",
                what, got, expected
            ),
            Self::DimensionOverflow { nrows, ncols } => write!(
                f,
                "Matrix dimensions overflow: {} x {} elements exceed the address space",
                nrows, ncols
            ),
            Self::InvalidPriorVariance(sa) => {
                write!(f, "Invalid prior variance: {} (must be > 0 and finite)", sa)
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {}", s),
            Self::NegativeWeight { index, value } => {
                write!(f, "Negative weight: d[{}]={} (must be >= 0)", index, value)
            }
            Self::ZeroWeightSum => write!(f, "Sample weights sum to zero"),
            Self::InvalidProbability { index, value } => write!(
                f,
                "Invalid inclusion probability: alpha[{}]={} (must be in [0, 1])",
                index, value
            ),
            Self::InvalidLabel { index, value } => {
                write!(f, "Invalid label: y[{}]={} (must be 0 or 1)", index, value)
            }
            Self::VariableOutOfRange { index, nvars } => write!(
                f,
                "Variable index {} out of range (model has {} variables)",
                index, nvars
            ),
            Self::SingularCovariates => {
                write!(f, "Covariate matrix Z'DZ is not positive definite")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for VarbvsError {}

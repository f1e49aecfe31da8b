//! Layer 2: Math
//!
//! # Purpose
//!
//! Pure numerical building blocks with no varbvs-specific logic:
//! - The dense vector kernel (sum, inner products, scaled add, projection)
//! - The logistic sigmoid and the bound slope
//! - Cholesky-based factorizations for covariate adjustment
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Vector kernel.
pub mod vector;

/// Logistic sigmoid and bound slope.
pub mod sigmoid;

/// Nalgebra linear algebra bridge.
pub mod linalg;

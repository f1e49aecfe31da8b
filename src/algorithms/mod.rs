//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! The varbvs numerics proper: the single-variable coordinate-ascent update in
//! its plain and covariate-adjusted forms, and the summary statistics it
//! consumes.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Coordinate-ascent update step.
pub mod update;

/// Summary statistics for the update.
pub mod stats;

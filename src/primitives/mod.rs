//! Layer 1: Primitives
//!
//! # Purpose
//!
//! Fundamental data structures shared by every other layer: the error type,
//! the column-major matrix view and reusable scratch buffers.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types.
pub mod errors;

/// Column-major matrix view.
pub mod matrix;

/// Reusable scratch buffers.
pub mod buffer;

//! Layer 4: Engine
//!
//! # Purpose
//!
//! Orchestration around the update kernel: input validation, the explicit fit
//! state, and sweeps that apply the update across variables.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation.
pub mod validator;

/// Fit state.
pub mod state;

/// Sweep execution.
pub mod executor;

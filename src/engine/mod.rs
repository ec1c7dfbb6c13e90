//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a computation: it validates the sample set,
//! gathers log moments from the math layer and assembles the result record.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sample validation.
pub mod validator;

/// Statistics computation.
pub mod estimator;

/// Result record.
pub mod output;

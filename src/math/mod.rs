//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numerical building blocks of the engine:
//! - Compensated summation
//! - Moments of log-transformed samples
//!
//! These functions perform no validation and carry no statistics-specific
//! policy beyond the choice of divisor.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Neumaier compensated summation.
pub mod summation;

/// Mean and spread of log-transformed samples.
pub mod log_moments;

//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer holds the types every other layer depends on. Today that is
//! the error taxonomy of the statistics engine.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types.
pub mod errors;

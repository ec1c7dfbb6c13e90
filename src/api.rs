//! High-level API for geometric statistics.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the one-call
//! [`compute_gsd`] function and a fluent builder for non-default
//! configurations.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Defaults need no configuration; `compute_gsd` is enough.
//! * **Explicit**: Every option is a builder call; there is no global state.
//! * **Type-Safe**: Generic over `Float` types.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`GsdBuilder`] via `Gsd::new()`.
//! 2. Chain configuration methods (`.deviation()`).
//! 3. Call `.build()` and `.compute(&samples)`.

// External dependencies
use num_traits::Float;

// Publicly re-exported types
pub use crate::engine::estimator::GsdEstimator;
pub use crate::engine::output::GsdStatistics;
pub use crate::math::log_moments::Deviation;
pub use crate::primitives::errors::ValidationError;

/// Compute geometric mean, GSD and GCV of strictly positive samples.
///
/// Uses the sample (`n - 1`) standard deviation of the log values.
///
/// # Errors
///
/// * [`ValidationError::EmptyInput`] when `samples` is empty.
/// * [`ValidationError::NonPositiveValue`] for a zero or negative sample.
/// * [`ValidationError::NonFiniteValue`] for a NaN or infinite sample.
/// * [`ValidationError::NumericOverflow`] when the GSD is not representable.
///
/// A GCV that overflows is returned as `+inf` rather than as an error.
pub fn compute_gsd<T: Float>(samples: &[T]) -> Result<GsdStatistics<T>, ValidationError> {
    GsdEstimator::default().compute(samples)
}

/// Fluent builder for configuring geometric statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GsdBuilder {
    /// Divisor convention (default: `Sample`).
    pub deviation: Option<Deviation>,
}

impl GsdBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self { deviation: None }
    }

    /// Select the divisor of the log-space standard deviation.
    pub fn deviation(mut self, deviation: Deviation) -> Self {
        self.deviation = Some(deviation);
        self
    }

    /// Finish configuration.
    pub fn build(self) -> GsdEstimator {
        GsdEstimator::new(self.deviation.unwrap_or_default())
    }
}

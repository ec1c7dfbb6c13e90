//! Result record of a geometric statistics computation.
//!
//! ## Purpose
//!
//! This module defines [`GsdStatistics`], the immutable value returned by the
//! engine, and its human-readable report format.
//!
//! ## Invariants
//!
//! * `geometric_mean > 0`.
//! * `geometric_standard_deviation >= 1`, equal to 1 iff all samples match.
//! * `geometric_coefficient_of_variation >= 0`.
//! * `sample_size >= 1`.

use core::fmt;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::estimator::GsdEstimator;
use crate::primitives::errors::ValidationError;

// ============================================================================
// GsdStatistics
// ============================================================================

/// Geometric summary statistics of a sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GsdStatistics<T> {
    /// `exp(mean(ln x_i))`.
    pub geometric_mean: T,

    /// `exp(s)`, where `s` is the standard deviation of `ln x_i`.
    pub geometric_standard_deviation: T,

    /// `sqrt(exp(s^2) - 1)`, as a fraction (not a percentage).
    pub geometric_coefficient_of_variation: T,

    /// Number of samples summarised.
    pub sample_size: usize,
}

impl<T: Float> GsdStatistics<T> {
    /// Compute statistics with the default (sample) deviation.
    ///
    /// Equivalent to [`compute_gsd`](crate::api::compute_gsd).
    pub fn from_samples(samples: &[T]) -> Result<Self, ValidationError> {
        GsdEstimator::default().compute(samples)
    }

    /// Geometric coefficient of variation expressed in percent.
    pub fn gcv_percent(&self) -> T {
        let hundred = T::from(100.0).unwrap_or_else(T::nan);
        self.geometric_coefficient_of_variation * hundred
    }
}

impl<T: Float + fmt::Display> fmt::Display for GsdStatistics<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sample size: {}", self.sample_size)?;
        writeln!(f, "Geometric mean: {:.5}", self.geometric_mean)?;
        writeln!(f, "Geometric SD: {:.5}", self.geometric_standard_deviation)?;
        write!(f, "Geometric CV (%): {:.2}", self.gcv_percent())
    }
}

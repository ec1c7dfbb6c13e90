//! First and second moments of log-transformed samples.
//!
//! ## Purpose
//!
//! This module computes the mean and the spread of `ln(x_i)` for a set of
//! strictly positive samples. These two moments are all the engine needs to
//! derive the geometric mean, GSD and GCV.
//!
//! ## Design notes
//!
//! * **Pivot**: Logs are taken relative to the smallest sample,
//!   `d_i = ln(x_i) - ln(min)`. Every offset is non-negative and identical
//!   samples produce offsets of exactly zero.
//! * **Two-pass variance**: Squared deviations are summed about the mean
//!   computed in the first pass. The one-pass `E[d²] - E[d]²` form is never
//!   used.
//! * **Summation**: Both passes use compensated summation.
//! * **Allocation**: None; logs are recomputed on the second pass.
//!
//! ## Key concepts
//!
//! * **Deviation**: Sample (`n - 1`) or population (`n`) divisor.
//!
//! ## Invariants
//!
//! * `variance >= 0` and `std_dev >= 0`.
//! * A single sample has zero spread under either divisor.
//!
//! ## Non-goals
//!
//! * This module does not validate samples (see `engine::validator`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::summation::compensated_sum;

// ============================================================================
// Deviation Convention
// ============================================================================

/// Divisor used for the standard deviation of the log values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Deviation {
    /// Bessel-corrected estimate, divisor `n - 1`.
    #[default]
    Sample,

    /// Population formula, divisor `n`.
    Population,
}

impl Deviation {
    /// Degrees of freedom removed from the sample count.
    #[inline]
    pub fn ddof(self) -> usize {
        match self {
            Deviation::Sample => 1,
            Deviation::Population => 0,
        }
    }
}

// ============================================================================
// Log Moments
// ============================================================================

/// Mean and sum of squared deviations of `ln(x_i)`, taken about a pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogMoments<T: Float> {
    /// Number of samples.
    pub count: usize,

    /// Smallest sample; offsets are measured from its logarithm.
    pub pivot: T,

    /// Mean of `ln(x_i) - ln(pivot)`.
    pub mean_offset: T,

    /// Sum of squared deviations of the log values about their mean.
    pub sum_sq_dev: T,
}

impl<T: Float> LogMoments<T> {
    /// Compute log moments of already validated samples.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_samples(samples: &[T]) -> Option<Self> {
        let pivot = samples.iter().copied().reduce(T::min)?;
        let count = samples.len();
        let n = T::from(count)?;
        let ln_pivot = pivot.ln();

        // Pass 1: mean offset
        let mean_offset = compensated_sum(samples.iter().map(|&x| x.ln() - ln_pivot)) / n;

        // Pass 2: squared deviations about the mean
        let sum_sq_dev = compensated_sum(samples.iter().map(|&x| {
            let dev = (x.ln() - ln_pivot) - mean_offset;
            dev * dev
        }));

        Some(Self {
            count,
            pivot,
            mean_offset,
            sum_sq_dev,
        })
    }

    /// Mean of `ln(x_i)`.
    #[inline]
    pub fn log_mean(&self) -> T {
        self.pivot.ln() + self.mean_offset
    }

    /// `exp(log_mean)`, exact when all samples are equal.
    pub fn exp_mean(&self) -> T {
        if self.mean_offset == T::zero() {
            self.pivot
        } else {
            self.log_mean().exp()
        }
    }

    /// Variance of the log values under the given divisor.
    ///
    /// Zero when the count does not exceed the removed degrees of freedom.
    pub fn variance(&self, deviation: Deviation) -> T {
        let ddof = deviation.ddof();
        if self.count <= ddof {
            return T::zero();
        }
        match T::from(self.count - ddof) {
            Some(divisor) => (self.sum_sq_dev / divisor).max(T::zero()),
            None => T::zero(),
        }
    }

    /// Standard deviation of the log values under the given divisor.
    #[inline]
    pub fn std_dev(&self, deviation: Deviation) -> T {
        self.variance(deviation).sqrt()
    }
}

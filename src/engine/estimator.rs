//! Execution engine for geometric statistics.
//!
//! ## Purpose
//!
//! This module turns a validated sample set into a [`GsdStatistics`]
//! record: validate, accumulate log moments, then derive the geometric
//! mean, GSD and GCV from a single standard deviation `s`.
//!
//! ## Design notes
//!
//! * **Validation first**: No statistic is computed until the whole set
//!   has passed [`Validator::validate_samples`].
//! * **Consistency**: GSD and GCV are both derived from the same unrounded
//!   `s`. GCV uses `exp_m1` so that small spreads keep full precision.
//! * **Overflow**: A GSD beyond the `f64` range is reported as
//!   [`ValidationError::NumericOverflow`]. A GCV beyond the range (log-space
//!   spread above ~26.6 while the GSD is still finite) is returned as `+inf`
//!   with a `warn!` record.
//! * **Purity**: No allocation and no state between calls.
//!
//! ## Invariants
//!
//! * The result is independent of sample order up to rounding.
//! * Scaling every sample by `k` scales the mean by `k` and leaves GSD and
//!   GCV unchanged up to rounding.
//!
//! ## Non-goals
//!
//! * This module does not read data or format output.

// External dependencies
use log::{debug, trace, warn};
use num_traits::Float;

// Internal dependencies
use crate::engine::output::GsdStatistics;
use crate::engine::validator::Validator;
use crate::math::log_moments::{Deviation, LogMoments};
use crate::primitives::errors::ValidationError;

/// Log-space spread above which GCV is large and loses relative precision.
const WIDE_SPREAD_LOG_SD: f64 = 6.0;

// ============================================================================
// Estimator
// ============================================================================

/// Configured geometric statistics estimator.
///
/// Built by [`GsdBuilder::build`](crate::api::GsdBuilder::build); the
/// default uses the sample deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GsdEstimator {
    /// Divisor convention for the log-space standard deviation.
    pub deviation: Deviation,
}

impl GsdEstimator {
    /// Create an estimator with the given deviation convention.
    pub fn new(deviation: Deviation) -> Self {
        Self { deviation }
    }

    /// Compute geometric statistics for `samples`.
    ///
    /// For extremely skewed data the GCV may be `+inf`; the mean and GSD
    /// are still exact to within rounding.
    pub fn compute<T: Float>(&self, samples: &[T]) -> Result<GsdStatistics<T>, ValidationError> {
        Validator::validate_samples(samples)?;

        let moments = LogMoments::from_samples(samples).ok_or(ValidationError::EmptyInput)?;
        let s = moments.std_dev(self.deviation);
        trace!(
            "log moments: n={} log_mean={:?} sum_sq_dev={:?} s={:?}",
            moments.count,
            moments.log_mean().to_f64(),
            moments.sum_sq_dev.to_f64(),
            s.to_f64()
        );

        let geometric_mean = moments.exp_mean();
        let geometric_standard_deviation = s.exp();
        if !geometric_standard_deviation.is_finite() {
            return Err(ValidationError::NumericOverflow {
                statistic: "geometric standard deviation",
            });
        }

        // exp(s^2) overflows long before exp(s); GCV saturates to +inf.
        let geometric_coefficient_of_variation = (s * s).exp_m1().sqrt();
        if !geometric_coefficient_of_variation.is_finite() {
            warn!(
                "log-space standard deviation {:?} is too large; geometric CV saturates to +inf",
                s.to_f64()
            );
        } else if s.to_f64().is_some_and(|s| s > WIDE_SPREAD_LOG_SD) {
            warn!(
                "log-space standard deviation {:?} is very large; geometric CV loses precision",
                s.to_f64()
            );
        }

        debug!(
            "geometric statistics over {} samples ({:?}): mean={:?} gsd={:?} gcv={:?}",
            moments.count,
            self.deviation,
            geometric_mean.to_f64(),
            geometric_standard_deviation.to_f64(),
            geometric_coefficient_of_variation.to_f64()
        );

        Ok(GsdStatistics {
            geometric_mean,
            geometric_standard_deviation,
            geometric_coefficient_of_variation,
            sample_size: moments.count,
        })
    }
}

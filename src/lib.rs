//! # gsd_estimate — Geometric statistics for strictly positive samples
//!
//! Computes the geometric mean, the geometric standard deviation (GSD) and
//! the geometric coefficient of variation (GCV) of a set of strictly
//! positive samples, with strict validation and numerically careful
//! aggregation in log space.
//!
//! ## What are geometric statistics?
//!
//! For data that are (approximately) log-normally distributed, such as
//! particle sizes, concentrations, exposure measurements or incomes, the
//! natural summary lives in log space:
//!
//! ```text
//! geometric mean  = exp(mean(ln x_i))
//! GSD             = exp(s),                s = stddev(ln x_i)
//! GCV             = sqrt(exp(s^2) - 1)
//! ```
//!
//! The GSD is a multiplicative factor: roughly two thirds of a log-normal
//! population lies within `[mean / GSD, mean * GSD]`. It is always `>= 1`
//! and equals `1` only when every sample is identical.
//!
//! ## Quick Start
//!
//! ```rust
//! use gsd_estimate::prelude::*;
//!
//! let stats = compute_gsd::<f64>(&[1.0, 2.0, 4.0])?;
//!
//! assert!((stats.geometric_mean - 2.0).abs() < 1e-12);
//! assert!((stats.geometric_standard_deviation - 2.0).abs() < 1e-12);
//! assert_eq!(stats.sample_size, 3);
//!
//! println!("{}", stats);
//! # Result::<(), ValidationError>::Ok(())
//! ```
//!
//! ```text
//! Sample size: 3
//! Geometric mean: 2.00000
//! Geometric SD: 2.00000
//! Geometric CV (%): 78.54
//! ```
//!
//! ## Builder
//!
//! The standard deviation of the log values uses the sample (`n - 1`)
//! divisor by default. The population divisor is available through the
//! builder:
//!
//! ```rust
//! use gsd_estimate::prelude::*;
//!
//! let estimator = Gsd::new().deviation(Population).build();
//! let stats = estimator.compute(&[1.0, 2.0, 4.0])?;
//!
//! assert!(stats.geometric_standard_deviation < 2.0);
//! # Result::<(), ValidationError>::Ok(())
//! ```
//!
//! ## Validation
//!
//! Validation is all-or-nothing and happens before anything is computed:
//!
//! | Input                         | Error                                |
//! |-------------------------------|--------------------------------------|
//! | empty slice                   | `ValidationError::EmptyInput`        |
//! | zero or negative sample       | `ValidationError::NonPositiveValue`  |
//! | NaN or infinite sample        | `ValidationError::NonFiniteValue`    |
//! | GSD beyond `f64` range        | `ValidationError::NumericOverflow`   |
//!
//! Errors that name a sample carry its zero-based index:
//!
//! ```rust
//! use gsd_estimate::prelude::*;
//!
//! let err = compute_gsd(&[1.0, -2.0]).unwrap_err();
//! assert_eq!(err.position(), Some(1));
//! ```
//!
//! A single sample is valid: its geometric mean is the sample itself, the
//! GSD is `1` and the GCV is `0`.
//!
//! ## Numerical notes
//!
//! Logs are taken relative to the smallest sample and accumulated with
//! Neumaier compensated summation; the variance uses the two-pass formula.
//! Extremely skewed inputs (ratio of largest to smallest sample far beyond
//! `1e16`) lose precision in the GCV; once it overflows it is returned as
//! `+inf` with a `warn!` record. Only a GSD beyond the `f64` range is an
//! error.
//!
//! ## Loading CSV data
//!
//! With the `std` feature (default), [`loader`] reads one column of a CSV
//! file with a header row:
//!
//! ```rust,no_run
//! use gsd_estimate::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let series = load_numeric_series("samples.csv", &ColumnSelector::Name("dose".into()))?;
//! let stats = compute_gsd(series.values())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Effect                                                     |
//! |---------|---------|------------------------------------------------------------|
//! | `std`   | yes     | CSV loader, `std::error::Error` impls                      |
//! | `cli`   | yes     | `gsd-estimate` binary                                      |
//! | `serde` | no      | `Serialize`/`Deserialize` for `GsdStatistics`, `Deviation` |
//! | `dev`   | no      | `internals` module for tests                               |
//!
//! Without `std` the engine is `no_std` and allocation-free.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error taxonomy.
mod primitives;

// Layer 2: Math - compensated summation and log moments.
mod math;

// Layer 3: Engine - validation, computation and the result record.
mod engine;

// High-level API: `compute_gsd` and the `Gsd` builder.
mod api;

/// CSV column loading.
#[cfg(feature = "std")]
pub mod loader;

// ============================================================================
// Public API
// ============================================================================

pub use crate::api::{
    compute_gsd, Deviation, GsdBuilder, GsdEstimator, GsdStatistics, ValidationError,
};

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// ```
/// use gsd_estimate::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        compute_gsd,
        Deviation::{Population, Sample},
        Deviation, GsdBuilder as Gsd, GsdEstimator, GsdStatistics, ValidationError,
    };

    #[cfg(feature = "std")]
    pub use crate::loader::{
        load_numeric_series, read_numeric_series, ColumnSelector, LoadError, NumericSeries,
    };
}

// ============================================================================
// Internals
// ============================================================================

/// Internal modules for development and testing.
///
/// Only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}

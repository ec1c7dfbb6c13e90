//! Input validation for geometric statistics.
//!
//! ## Purpose
//!
//! This module checks that a sample set lies in the domain of geometric
//! statistics before anything is computed: it must be non-empty and every
//! sample must be finite and strictly positive.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **All-or-nothing**: Nothing is skipped or clamped; one bad sample
//!   rejects the whole set.
//! * **Ordering**: Non-finite is checked before positivity, so NaN and
//!   `-inf` are reported as non-finite.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * A set that passes has `ln(x_i)` finite for every sample.
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not parse text (see `loader`).
//! * This module does not compute statistics.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ValidationError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sample sets.
pub struct Validator;

impl Validator {
    /// Validate a sample set for geometric statistics.
    pub fn validate_samples<T: Float>(samples: &[T]) -> Result<(), ValidationError> {
        // Check 1: Non-empty
        if samples.is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        // Check 2: Every sample finite and > 0
        for (i, &value) in samples.iter().enumerate() {
            Self::validate_sample(value, Some(i))?;
        }

        Ok(())
    }

    /// Validate a single sample.
    pub fn validate_sample<T: Float>(
        value: T,
        position: Option<usize>,
    ) -> Result<(), ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteValue {
                value: value.to_f64().unwrap_or(f64::NAN),
                position,
            });
        }
        if value <= T::zero() {
            return Err(ValidationError::NonPositiveValue {
                value: value.to_f64().unwrap_or(f64::NAN),
                position,
            });
        }
        Ok(())
    }
}

//! Error types for geometric statistics.
//!
//! ## Purpose
//!
//! This module defines [`ValidationError`], the single error type returned
//! by the statistics engine. Every variant describes one way a sample set
//! can violate the domain of geometric statistics.
//!
//! ## Design notes
//!
//! * **no_std**: The type carries only `f64`, `usize` and `&'static str`
//!   payloads so it needs neither `std` nor `alloc`.
//! * **Display**: Messages are hand-written and stable; tests pin them.
//! * **Positions**: Offending samples carry their zero-based index so that
//!   callers holding provenance (e.g. a CSV line table) can map it back.
//!
//! ## Invariants
//!
//! * A `ValidationError` is never produced alongside a partial result.
//!
//! ## Non-goals
//!
//! * This module does not describe I/O or parsing failures (see `loader`).

use core::fmt;

/// Reasons a sample set cannot be summarised with geometric statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    /// The sample set is empty.
    EmptyInput,

    /// A sample is zero or negative.
    NonPositiveValue {
        /// The offending sample.
        value: f64,
        /// Zero-based index of the sample, when known.
        position: Option<usize>,
    },

    /// A sample is NaN or infinite.
    NonFiniteValue {
        /// The offending sample.
        value: f64,
        /// Zero-based index of the sample, when known.
        position: Option<usize>,
    },

    /// The geometric standard deviation does not fit in the floating-point range.
    NumericOverflow {
        /// Name of the statistic that overflowed.
        statistic: &'static str,
    },
}

impl ValidationError {
    /// Zero-based index of the offending sample, if the error names one.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::NonPositiveValue { position, .. } | Self::NonFiniteValue { position, .. } => {
                *position
            }
            Self::EmptyInput | Self::NumericOverflow { .. } => None,
        }
    }

    /// Short machine-friendly name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty input",
            Self::NonPositiveValue { .. } => "non-positive value",
            Self::NonFiniteValue { .. } => "non-finite value",
            Self::NumericOverflow { .. } => "numeric overflow",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Empty input: no samples"),
            Self::NonPositiveValue { value, position } => {
                write!(f, "Non-positive value: {}", value)?;
                if let Some(i) = position {
                    write!(f, " at sample {}", i)?;
                }
                write!(f, " (geometric statistics require samples > 0)")
            }
            Self::NonFiniteValue { value, position } => {
                write!(f, "Non-finite value: {}", value)?;
                if let Some(i) = position {
                    write!(f, " at sample {}", i)?;
                }
                Ok(())
            }
            Self::NumericOverflow { statistic } => {
                write!(f, "Numeric overflow: {} exceeds the floating-point range", statistic)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}

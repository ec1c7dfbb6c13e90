//! Compensated floating-point summation.
//!
//! ## Purpose
//!
//! This module provides Neumaier's variant of Kahan summation, used to
//! accumulate log-transformed samples and squared deviations without the
//! error growth of a naive running sum.
//!
//! ## Design notes
//!
//! * **Algorithm**: Neumaier (1974). Unlike plain Kahan summation it stays
//!   accurate when an addend is larger in magnitude than the running sum.
//! * **Memory**: O(1); the accumulator is two floats.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Summing finite values yields the exactly rounded sum up to O(ε) error,
//!   independent of the number of terms.
//!
//! ## Non-goals
//!
//! * This module does not handle non-finite addends specially.

// External dependencies
use num_traits::Float;

// ============================================================================
// Compensated Sum
// ============================================================================

/// Running sum with a separate compensation term for lost low-order bits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompensatedSum<T: Float> {
    sum: T,
    compensation: T,
}

impl<T: Float> Default for CompensatedSum<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> CompensatedSum<T> {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self {
            sum: T::zero(),
            compensation: T::zero(),
        }
    }

    /// Add one term.
    #[inline]
    pub fn add(&mut self, value: T) {
        let t = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.compensation = self.compensation + ((self.sum - t) + value);
        } else {
            self.compensation = self.compensation + ((value - t) + self.sum);
        }
        self.sum = t;
    }

    /// Current value of the sum, compensation applied.
    #[inline]
    pub fn value(&self) -> T {
        self.sum + self.compensation
    }
}

impl<T: Float> Extend<T> for CompensatedSum<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

/// Sum an iterator of floats with Neumaier compensation.
#[inline]
pub fn compensated_sum<T: Float, I: IntoIterator<Item = T>>(values: I) -> T {
    let mut acc = CompensatedSum::new();
    acc.extend(values);
    acc.value()
}

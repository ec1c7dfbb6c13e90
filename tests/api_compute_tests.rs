//! Tests for the public statistics API.
//!
//! ## Test Organization
//!
//! 1. **Reference Values** - Known inputs with closed-form results
//! 2. **Degenerate Inputs** - Single and identical samples
//! 3. **Failures** - Empty, non-positive, non-finite and overflowing inputs,
//!    plus the saturating GCV
//! 4. **Builder** - Deviation convention
//! 5. **Output** - Report formatting and percentages

use approx::assert_relative_eq;

use gsd_estimate::prelude::*;

/// Reference: log-space sample stddev with ddof=1, computed independently.
fn reference(samples: &[f64], ddof: usize) -> (f64, f64, f64) {
    let n = samples.len() as f64;
    let logs: Vec<f64> = samples.iter().map(|x| x.ln()).collect();
    let mean = logs.iter().sum::<f64>() / n;
    let ss: f64 = logs.iter().map(|l| (l - mean).powi(2)).sum();
    let s = (ss / (n - ddof as f64)).sqrt();
    (mean.exp(), s.exp(), ((s * s).exp() - 1.0).sqrt())
}

// ============================================================================
// Reference Values
// ============================================================================

#[test]
fn test_powers_of_two() {
    let stats = compute_gsd(&[1.0, 2.0, 4.0]).unwrap();

    assert_eq!(stats.sample_size, 3);
    assert_relative_eq!(stats.geometric_mean, 2.0, max_relative = 1e-9);

    // exp(stddev([0, ln2, ln4], ddof=1)) = exp(ln2)
    assert_relative_eq!(
        stats.geometric_standard_deviation,
        2.0_f64.ln().exp(),
        max_relative = 1e-9
    );
    assert_relative_eq!(
        stats.geometric_coefficient_of_variation,
        0.785_370_404_485_472_5,
        max_relative = 1e-9
    );
}

#[test]
fn test_matches_reference_formula() {
    let samples = [2.5, 3.1, 4.7, 1.9, 8.2];
    let (gm, gsd, gcv) = reference(&samples, 1);
    let stats = compute_gsd::<f64>(&samples).unwrap();

    assert_relative_eq!(stats.geometric_mean, gm, max_relative = 1e-9);
    assert_relative_eq!(stats.geometric_standard_deviation, gsd, max_relative = 1e-9);
    assert_relative_eq!(stats.geometric_coefficient_of_variation, gcv, max_relative = 1e-9);

    assert_relative_eq!(stats.geometric_mean, 3.554_621_822_328_746, max_relative = 1e-9);
    assert_relative_eq!(
        stats.geometric_standard_deviation,
        1.772_951_614_896_146,
        max_relative = 1e-9
    );
}

/// GCV is derived from the same s as GSD: GCV^2 = exp(ln(GSD)^2) - 1.
#[test]
fn test_gcv_consistent_with_gsd() {
    let stats = compute_gsd::<f64>(&[0.3, 12.0, 5.5, 0.9, 41.0, 2.2]).unwrap();
    let s = stats.geometric_standard_deviation.ln();
    assert_relative_eq!(
        stats.geometric_coefficient_of_variation,
        (s * s).exp_m1().sqrt(),
        max_relative = 1e-12
    );
}

#[test]
fn test_f32_samples() {
    let stats = compute_gsd(&[1.0_f32, 2.0, 4.0]).unwrap();
    assert_relative_eq!(stats.geometric_mean, 2.0_f32, max_relative = 1e-5);
    assert_relative_eq!(stats.geometric_standard_deviation, 2.0_f32, max_relative = 1e-5);
}

/// Values near the ends of the f64 range keep a finite, correct mean.
#[test]
fn test_extreme_magnitudes() {
    let stats = compute_gsd(&[1e-200, 1e-200, 1e-199]).unwrap();
    assert!(stats.geometric_mean > 0.0);
    assert_relative_eq!(
        stats.geometric_mean,
        1e-200 * 10f64.powf(1.0 / 3.0),
        max_relative = 1e-9
    );
}

// ============================================================================
// Degenerate Inputs
// ============================================================================

#[test]
fn test_single_sample() {
    for &c in &[7.0, 0.1, 1e-300, 1e300, 1.0] {
        let stats = compute_gsd(&[c]).unwrap();
        assert_eq!(stats.geometric_mean, c);
        assert_eq!(stats.geometric_standard_deviation, 1.0);
        assert_eq!(stats.geometric_coefficient_of_variation, 0.0);
        assert_eq!(stats.sample_size, 1);
    }
}

#[test]
fn test_identical_samples() {
    let stats = compute_gsd(&[10.0; 5]).unwrap();
    assert_eq!(stats.geometric_mean, 10.0);
    assert_eq!(stats.geometric_standard_deviation, 1.0);
    assert_eq!(stats.geometric_coefficient_of_variation, 0.0);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_empty_input() {
    let empty: [f64; 0] = [];
    assert_eq!(compute_gsd(&empty), Err(ValidationError::EmptyInput));
}

#[test]
fn test_negative_sample() {
    let err = compute_gsd(&[1.0, -2.0]).unwrap_err();
    assert!(matches!(err, ValidationError::NonPositiveValue { .. }));
    assert_eq!(err.position(), Some(1));
}

#[test]
fn test_zero_sample() {
    let err = compute_gsd(&[1.0, 0.0]).unwrap_err();
    assert_eq!(
        err,
        ValidationError::NonPositiveValue {
            value: 0.0,
            position: Some(1)
        }
    );
}

#[test]
fn test_non_finite_sample() {
    let err = compute_gsd(&[f64::NAN, 1.0]).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::NonFiniteValue {
            position: Some(0),
            ..
        }
    ));

    let err = compute_gsd(&[1.0, f64::INFINITY]).unwrap_err();
    assert_eq!(err.kind(), "non-finite value");
}

/// s = ln(1e600) / sqrt(2) > 709, so exp(s) overflows.
#[test]
fn test_gsd_overflow() {
    assert_eq!(
        compute_gsd(&[1e-300, 1e300]),
        Err(ValidationError::NumericOverflow {
            statistic: "geometric standard deviation"
        })
    );
}

/// s ~= 32.6 and s ~= 65: GSD is finite but exp(s^2) is not, so GCV saturates.
#[test]
fn test_gcv_saturates_to_infinity() {
    for samples in [[1e-10, 1e10], [1e-20, 1e20]] {
        let stats = compute_gsd::<f64>(&samples).unwrap();
        assert_relative_eq!(stats.geometric_mean, 1.0, max_relative = 1e-9);
        assert!(stats.geometric_standard_deviation.is_finite());
        assert!(stats.geometric_coefficient_of_variation.is_infinite());
        assert!(stats.geometric_coefficient_of_variation > 0.0);
        assert_eq!(stats.sample_size, 2);
    }
}

/// s ~= 26.05: the widest spread whose GCV still fits.
#[test]
fn test_gcv_finite_near_range_limit() {
    let stats = compute_gsd(&[1e-8, 1e8]).unwrap();
    let s = (1e16_f64).ln() / 2.0_f64.sqrt();
    assert_relative_eq!(stats.geometric_standard_deviation, s.exp(), max_relative = 1e-9);
    assert!(stats.geometric_coefficient_of_variation.is_finite());
}

// ============================================================================
// Builder
// ============================================================================

#[test]
fn test_builder_default_is_sample() {
    let a = Gsd::new().build().compute(&[1.0, 2.0, 4.0]).unwrap();
    let b = compute_gsd(&[1.0, 2.0, 4.0]).unwrap();
    assert_eq!(a, b);
    assert_eq!(Gsd::new().build().deviation, Sample);
}

#[test]
fn test_builder_population() {
    let samples = [2.5, 3.1, 4.7, 1.9, 8.2];
    let (gm, gsd, gcv) = reference(&samples, 0);
    let stats = Gsd::new()
        .deviation(Population)
        .build()
        .compute(&samples)
        .unwrap();

    assert_relative_eq!(stats.geometric_mean, gm, max_relative = 1e-9);
    assert_relative_eq!(stats.geometric_standard_deviation, gsd, max_relative = 1e-9);
    assert_relative_eq!(stats.geometric_coefficient_of_variation, gcv, max_relative = 1e-9);
    assert_relative_eq!(
        stats.geometric_standard_deviation,
        1.668_942_041_786_8,
        max_relative = 1e-9
    );
}

#[test]
fn test_population_single_sample() {
    let stats = Gsd::new()
        .deviation(Population)
        .build()
        .compute(&[3.0])
        .unwrap();
    assert_eq!(stats.geometric_standard_deviation, 1.0);
}

#[test]
fn test_from_samples_matches_compute() {
    let samples = [0.5, 1.5, 4.5];
    assert_eq!(
        GsdStatistics::from_samples(&samples),
        compute_gsd(&samples)
    );
}

// ============================================================================
// Output
// ============================================================================

#[test]
fn test_gcv_percent() {
    let stats = compute_gsd(&[1.0, 2.0, 4.0]).unwrap();
    assert_relative_eq!(stats.gcv_percent(), 78.537_040_448_547_25, max_relative = 1e-9);
}

#[test]
fn test_display_report() {
    let stats = compute_gsd(&[1.0, 2.0, 4.0]).unwrap();
    assert_eq!(
        stats.to_string(),
        "Sample size: 3\n\
         Geometric mean: 2.00000\n\
         Geometric SD: 2.00000\n\
         Geometric CV (%): 78.54"
    );
}

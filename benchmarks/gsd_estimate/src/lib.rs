//! Reproducible data generators for the benchmarks.

use rand::prelude::*;
use rand_distr::LogNormal;
use std::fmt::Write;

/// Generate log-normal samples with the given log-space mean and sigma.
pub fn generate_lognormal(size: usize, mu: f64, sigma: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = LogNormal::new(mu, sigma).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Generate a two-column CSV document with a header row.
pub fn generate_csv(size: usize, seed: u64) -> String {
    let samples = generate_lognormal(size, 1.0, 0.8, seed);
    let mut csv = String::from("id,concentration\n");
    for (i, v) in samples.iter().enumerate() {
        writeln!(csv, "{},{}", i, v).unwrap();
    }
    csv
}

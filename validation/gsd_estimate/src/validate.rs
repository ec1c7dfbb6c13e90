use gsd_estimate::prelude::*;
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

const TOLERANCE: f64 = 1e-9;

#[derive(Debug, Deserialize)]
struct ReferenceFile {
    source: String,
    cases: Vec<ReferenceCase>,
}

#[derive(Debug, Deserialize)]
struct ReferenceCase {
    name: String,
    notes: String,
    samples: Vec<f64>,
    expected: Expected,
}

#[derive(Debug, Deserialize)]
struct Expected {
    sample: ExpectedStatistics,
    population: ExpectedStatistics,
}

#[derive(Debug, Deserialize)]
struct ExpectedStatistics {
    geometric_mean: f64,
    geometric_standard_deviation: f64,
    geometric_coefficient_of_variation: f64,
}

fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected == 0.0 {
        actual.abs()
    } else {
        ((actual - expected) / expected).abs()
    }
}

fn max_relative_error(
    samples: &[f64],
    deviation: Deviation,
    expected: &ExpectedStatistics,
) -> Result<f64, ValidationError> {
    let actual = Gsd::new().deviation(deviation).build().compute(samples)?;

    Ok([
        relative_error(actual.geometric_mean, expected.geometric_mean),
        relative_error(
            actual.geometric_standard_deviation,
            expected.geometric_standard_deviation,
        ),
        relative_error(
            actual.geometric_coefficient_of_variation,
            expected.geometric_coefficient_of_variation,
        ),
    ]
    .into_iter()
    .fold(0.0, f64::max))
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data/reference.json")
        });

    let reference: ReferenceFile = serde_json::from_str(&fs::read_to_string(&path)?)?;
    println!("Reference: {}", reference.source);
    println!("{:<16} {:<11} {:>12}  notes", "case", "deviation", "max rel err");

    let mut failures = 0;
    for case in &reference.cases {
        for (deviation, expected) in [
            (Sample, &case.expected.sample),
            (Population, &case.expected.population),
        ] {
            let err = max_relative_error(&case.samples, deviation, expected)?;
            let flag = if err > TOLERANCE {
                failures += 1;
                "  FAIL"
            } else {
                ""
            };
            println!(
                "{:<16} {:<11} {:>12.3e}  {}{}",
                case.name,
                format!("{:?}", deviation),
                err,
                case.notes,
                flag
            );
        }
    }

    if failures > 0 {
        eprintln!("{} comparison(s) exceeded tolerance {:e}", failures, TOLERANCE);
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use log::{info, LevelFilter};

use gsd_estimate::prelude::*;

/// How to print the statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Labelled lines.
    #[default]
    Text,
    /// A JSON object.
    Json,
}

/// Compute geometric statistics (mean, deviation) for a column of numeric data.
#[derive(Parser, Debug, Clone)]
#[command(name = "gsd-estimate", version)]
struct Args {
    /// Path to a CSV file with a header row.
    path: PathBuf,

    /// Column name or zero-based index to read. Defaults to the first column.
    #[arg(long)]
    column: Option<ColumnSelector>,

    /// Use the population (n) instead of the sample (n - 1) standard deviation.
    #[arg(long, default_value_t = false)]
    population: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: &Args) -> Result<()> {
    let column = args.column.clone().unwrap_or_default();
    let series = load_numeric_series(&args.path, &column)
        .with_context(|| format!("failed to load {}", args.path.display()))?;
    info!(
        "loaded {} values from column '{}' of {}",
        series.len(),
        series.column,
        args.path.display()
    );

    let deviation = if args.population { Population } else { Sample };
    let stats = Gsd::new()
        .deviation(deviation)
        .build()
        .compute(series.values())
        .map_err(|err| match err.position().and_then(|p| series.row_of(p)) {
            Some(row) => anyhow::Error::new(err)
                .context(format!("column '{}', line {}", series.column, row)),
            None => anyhow::Error::new(err),
        })?;

    match args.format {
        OutputFormat::Text => println!("{}", stats),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(2)
        }
    }
}

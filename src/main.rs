use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{error, info};
use rayon::prelude::*;

use mlfold::core::domain::{GateKind, DEFAULT_THRESHOLD_FRACTION};
use mlfold::data::loader::load_phase_configs_from_path;
use mlfold::engine::classifier::{process_batch, BatchOutcome};
use mlfold::interface::report;

// --- CLI Definitions ---

#[derive(Parser, Debug)]
#[command(author, version, about = "ML-FOLD: phase configuration analysis for photonic logic gates", long_about = None)]
struct Args {
    /// Batch to analyse, as GATE=PATH (e.g. nor=data/nor_preds.csv). Repeatable.
    #[arg(short = 'j', long = "job", value_parser = parse_job, required = true)]
    jobs: Vec<JobSpec>,

    /// Fraction of the best score used as the classification threshold
    #[arg(short = 'f', long, default_value_t = DEFAULT_THRESHOLD_FRACTION)]
    threshold_fraction: f64,

    /// Output format: table or json (json prints one document per job)
    #[arg(long, default_value = "table")]
    format: String,

    /// Maximum table rows per batch (0 = unlimited)
    #[arg(short, long, default_value_t = 20)]
    limit: usize,
}

/// One unit of work: a gate kind plus the CSV holding its predictions.
#[derive(Debug, Clone)]
struct JobSpec {
    gate: GateKind,
    path: PathBuf,
}

fn parse_job(s: &str) -> Result<JobSpec, String> {
    let (gate_str, path_str) = s
        .split_once('=')
        .ok_or_else(|| format!("expected GATE=PATH, got '{}'", s))?;

    let gate = gate_str.parse::<GateKind>().map_err(|e| e.to_string())?;

    let path_str = path_str.trim();
    if path_str.is_empty() {
        return Err(format!("empty path in '{}'", s));
    }

    Ok(JobSpec {
        gate,
        path: PathBuf::from(path_str),
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum OutputFormat {
    Table,
    Json,
}

// --- Job Execution ---

fn run_job(job: &JobSpec, threshold_fraction: f64) -> Result<BatchOutcome> {
    let configs = load_phase_configs_from_path(&job.path)
        .with_context(|| format!("loading {}", job.path.display()))?;

    let outcome = process_batch(&configs, job.gate, threshold_fraction)
        .with_context(|| format!("processing {} batch", job.gate))?;

    Ok(outcome)
}

fn print_outcome(
    job: &JobSpec,
    outcome: &BatchOutcome,
    format: OutputFormat,
    limit: usize,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("=== {} gate ({}) ===", job.gate, job.path.display());
            print!("{}", report::render_table(outcome, limit));
            println!();
            print!("{}", report::render_summary(&outcome.summary));
            println!();
        }
        OutputFormat::Json => {
            let json = report::render_json(outcome)
                .with_context(|| format!("serializing {} outcome", job.gate))?;
            println!("{}", json);
        }
    }
    Ok(())
}

// --- Main ---

fn main() -> Result<()> {
    // 1. Logging & Parsing
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
    let args = Args::parse();

    let format = match args.format.to_lowercase().as_str() {
        "table" => OutputFormat::Table,
        "json" => OutputFormat::Json,
        other => bail!("unknown output format '{}' (expected table or json)", other),
    };

    // 2. Run Jobs (independent batches, results kept in input order)
    info!("analysing {} job(s)", args.jobs.len());
    let results: Vec<Result<BatchOutcome>> = args
        .jobs
        .par_iter()
        .map(|job| run_job(job, args.threshold_fraction))
        .collect();

    // 3. Report
    let mut failures = 0;
    for (job, result) in args.jobs.iter().zip(results) {
        match result {
            Ok(outcome) => print_outcome(job, &outcome, format, args.limit)?,
            Err(e) => {
                error!("{} job ({}) failed: {:#}", job.gate, job.path.display(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        eprintln!("{} of {} job(s) failed", failures, args.jobs.len());
        process::exit(1);
    }

    Ok(())
}

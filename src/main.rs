use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod exit_codes;
mod index;
mod matcher;
mod normalize;
mod output;
mod records;
mod report;
mod store;

use config::Config;
use index::BenchmarkIndex;
use output::Output;

/// Version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "scorejoin")]
#[command(version = VERSION)]
#[command(
    about = "Backfill MMLU-Pro benchmark scores onto an API model roster",
    long_about = None
)]
struct Cli {
    /// Benchmark score table: JSON object with a `data` list (default: models.json)
    #[arg(long, value_name = "FILE")]
    benchmarks: Option<PathBuf>,

    /// Model roster to enrich in place: JSON list (default: model-scores.json)
    #[arg(long, value_name = "FILE")]
    roster: Option<PathBuf>,

    /// Match detail report output (default: matches_detailed.json)
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Path to config file (default: ./scorejoin.toml)
    #[arg(long = "config")]
    config_path: Option<PathBuf>,

    /// Match and summarize without writing any files
    #[arg(long)]
    dry_run: bool,

    /// Minimal output (errors only)
    #[arg(long)]
    quiet: bool,

    /// Show per-match decisions
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new(cli.quiet, cli.verbose);

    if let Err(e) = run(cli, &output) {
        eprintln!("Error: {e:#}");
        std::process::exit(exit_codes::OPERATIONAL_FAILURE);
    }
}

fn run(cli: Cli, output: &Output) -> Result<()> {
    let config = Config::load(cli.config_path.as_deref())?;

    // Resolution order for each document: CLI flag > config file > default
    let benchmarks_path = cli
        .benchmarks
        .unwrap_or_else(|| PathBuf::from(config.benchmarks_path()));
    let roster_path = cli
        .roster
        .unwrap_or_else(|| PathBuf::from(config.roster_path()));
    let report_path = cli
        .report
        .unwrap_or_else(|| PathBuf::from(config.report_path()));

    let benchmarks = store::load_benchmarks(&benchmarks_path)?;
    output.info(&format!(
        "Loaded {} benchmark models from {}",
        benchmarks.len(),
        benchmarks_path.display()
    ));

    let mut roster = store::load_roster(&roster_path)?;
    output.info(&format!(
        "Loaded {} API models from {}",
        roster.len(),
        roster_path.display()
    ));
    if roster.is_empty() {
        output.warn("Roster is empty; nothing to match");
    }

    let index = BenchmarkIndex::build(&benchmarks);
    output.verbose(&format!(
        "Benchmark index holds {} normalized names",
        index.len()
    ));

    let matches = matcher::reconcile(&mut roster, &index);
    for m in &matches {
        output.verbose(&format!(
            "match: \"{}\" -> \"{}\" (MMLU-Pro: {})",
            m.original_short_name, m.matched_permutation, m.mmlu_score
        ));
    }

    if cli.dry_run {
        output.info("Dry run: no files written");
    } else {
        store::save_roster(&roster_path, &roster)?;
        output.info(&format!("Updated {}", roster_path.display()));
        store::save_match_report(&report_path, &matches)?;
        output.info(&format!("Wrote match details to {}", report_path.display()));
    }

    report::print_human(&matches, roster.len());

    Ok(())
}

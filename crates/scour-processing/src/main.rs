//! CLI entry point for the CSV analysis and cleaning pipeline.

use anyhow::{Result, anyhow};
use clap::Parser;
use dotenv::dotenv;
use scour_processing::{AnalysisReport, DataAnalyzer, DataCleaner, PipelineReport};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "CSV analysis, cleaning, and quality scoring",
    long_about = "Analyzes a CSV file, removes exact duplicate rows, fills missing\n\
                  values (text columns with 'Unknown', numeric columns with the\n\
                  column mean), writes a cleaned copy next to the input, and\n\
                  reports a bounded data quality score.\n\n\
                  EXAMPLES:\n  \
                  # Analyze and clean, human-readable summary\n  \
                  scour-processing -i data.csv\n\n  \
                  # Analysis only, no cleaned file written\n  \
                  scour-processing -i data.csv --analyze-only\n\n  \
                  # Machine-readable output for piping\n  \
                  scour-processing -i data.csv --json | jq .cleaning_summary"
)]
struct Args {
    /// Path to the CSV file to process
    #[arg(short, long)]
    input: String,

    /// Only analyze the file; skip cleaning and write nothing
    #[arg(long)]
    analyze_only: bool,

    /// Output JSON to stdout instead of a human-readable summary
    ///
    /// Disables all progress logs; only the final report is printed.
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// stdout only contains the report.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);
    dotenv().ok();

    if !std::path::Path::new(&args.input).exists() {
        return Err(anyhow!("Input file not found: {}", args.input));
    }

    info!("Analyzing {}", args.input);
    let analysis = DataAnalyzer::analyze(&args.input)?;

    if args.analyze_only {
        return emit_analysis(&analysis, &args);
    }

    info!("Cleaning {}", args.input);
    let cleaning = DataCleaner::clean(&args.input)?;
    let report = PipelineReport::new(analysis, cleaning);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_summary(&report);
    Ok(())
}

fn emit_analysis(analysis: &AnalysisReport, args: &Args) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(analysis)?);
        return Ok(());
    }

    println!("\n{}", "=".repeat(60));
    println!("ANALYSIS: {}", args.input);
    println!("{}", "=".repeat(60));
    println!("  Rows:       {}", analysis.total_rows);
    println!("  Columns:    {}", analysis.total_columns);
    println!("  Duplicates: {}", analysis.duplicate_rows);
    println!();
    println!("{:<24} {:<10} {:<10}", "Column", "Type", "Missing");
    println!("{}", "-".repeat(46));
    for (name, dtype) in &analysis.columns {
        let missing = analysis.missing_values.get(name).copied().unwrap_or(0);
        println!("{:<24} {:<10} {:<10}", name, dtype, missing);
    }
    println!("{}", "=".repeat(60));
    Ok(())
}

/// Print a human-readable summary of the full pipeline run.
///
/// Uses `println!` intentionally: this is the primary CLI output and should
/// be visible regardless of log level.
fn print_summary(report: &PipelineReport) {
    let cleaning = &report.cleaning_summary;

    println!("\n{}", "=".repeat(60));
    println!("CLEANING COMPLETE");
    println!("{}", "=".repeat(60));
    println!(
        "  Rows: {} -> {} ({} duplicates removed)",
        cleaning.rows_before, cleaning.rows_after, cleaning.duplicates_removed
    );
    println!("  Missing values fixed: {}", cleaning.missing_values_fixed);
    println!("  Data quality score:   {}", cleaning.data_quality_score);

    if let Some(ref path) = cleaning.cleaned_file_path {
        println!("  Cleaned file:         {}", path);
    } else {
        println!("  Cleaned file:         (input was empty, nothing written)");
    }

    if cleaning.steps.is_empty() {
        println!("\nNo cleaning steps were necessary.");
    } else {
        println!("\nSteps applied:");
        for step in &cleaning.steps {
            println!("  - {}", step);
        }
    }

    println!("\nUse --json for machine-readable output");
    println!("{}", "=".repeat(60));
}

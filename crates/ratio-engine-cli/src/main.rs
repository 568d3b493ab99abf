mod commands;
mod input;
mod logging;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::analyze::AnalyzeArgs;
use commands::diagnose::DiagnoseArgs;
use commands::growth::GrowthArgs;
use commands::interest::InterestArgs;
use commands::ratio::RatioArgs;
use commands::report::ReportArgs;

/// Financial statement ratio analysis
#[derive(Parser)]
#[command(
    name = "ratios",
    version,
    about = "Financial statement ratio analysis",
    long_about = "A CLI for two-period financial statement analysis with decimal precision. \
                  Computes balance structure, liquidity, solvency, profitability, DuPont \
                  and leverage figures, diagnoses them, and exports a text or Markdown report."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full ratio analysis over two periods
    Analyze(AnalyzeArgs),
    /// Build and export the analysis report
    Report(ReportArgs),
    /// Comparative matrix, diagnostic flags and optimal-band readings
    Diagnose(DiagnoseArgs),
    /// Compute a single catalog ratio
    Ratio(RatioArgs),
    /// Period-over-period growth between two figures
    Growth(GrowthArgs),
    /// Simple, compound and tiered interest calculations
    Interest(InterestArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Analyze(args) => commands::analyze::run_analyze(args),
        Commands::Report(args) => commands::report::run_report(args),
        Commands::Diagnose(args) => commands::diagnose::run_diagnose(args),
        Commands::Ratio(args) => commands::ratio::run_ratio(args),
        Commands::Growth(args) => commands::growth::run_growth(args),
        Commands::Interest(args) => commands::interest::run_interest(args),
        Commands::Version => {
            println!("ratios {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}

pub mod analyze;
pub mod diagnose;
pub mod growth;
pub mod interest;
pub mod ratio;
pub mod report;

use clap::Args;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use ratio_engine_core::{AnalysisConfig, FinancialPeriodInput};

use crate::input;

/// Where the two-period figures come from, shared by analyze, report and
/// diagnose.
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct StatementArgs {
    /// Path to a JSON or YAML input file
    #[arg(long)]
    pub input: Option<String>,

    /// Use the built-in sample company
    #[arg(long, conflicts_with = "input")]
    pub sample: bool,

    /// Set one figure, e.g. --field current.revenue=112000 (repeatable)
    #[arg(long = "field", value_name = "KEY=VALUE")]
    pub fields: Vec<String>,

    /// Reject unknown --field keys instead of ignoring them
    #[arg(long)]
    pub strict: bool,

    /// Path to a JSON or YAML analysis config
    #[arg(long)]
    pub config: Option<String>,

    /// Revenue shock for the stress scenario (-0.30 = -30%)
    #[arg(long)]
    pub shock: Option<Decimal>,

    /// Refinanced share of current liabilities (0.30 = 30%)
    #[arg(long)]
    pub refinance_share: Option<Decimal>,

    /// Share of admin expenses cut (0.10 = 10%)
    #[arg(long)]
    pub admin_cut_share: Option<Decimal>,
}

pub struct LoadedStatements {
    pub input: FinancialPeriodInput,
    pub config: AnalysisConfig,
    /// Coercion warnings raised while reading --field values
    pub warnings: Vec<String>,
}

pub fn load_statements(
    args: &StatementArgs,
) -> Result<LoadedStatements, Box<dyn std::error::Error>> {
    let mut statements: FinancialPeriodInput = if args.sample {
        FinancialPeriodInput::sample()
    } else if let Some(ref path) = args.input {
        input::file::read_structured(path)?
    } else if !args.fields.is_empty() {
        FinancialPeriodInput::default()
    } else if let Some(piped) = input::stdin::read_stdin()? {
        piped
    } else {
        return Err("--input <file>, --sample, --field key=value or stdin required".into());
    };

    let pairs = input::fields::parse_pairs(&args.fields)?;
    let warnings = statements.apply_fields(
        pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        args.strict,
    )?;
    for w in &warnings {
        warn!("{w}");
    }

    let mut config: AnalysisConfig = match args.config {
        Some(ref path) => input::file::read_structured(path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(shock) = args.shock {
        config.shock_factor = shock;
    }
    if let Some(share) = args.refinance_share {
        config.refinance_share = share;
    }
    if let Some(share) = args.admin_cut_share {
        config.admin_cut_share = share;
    }
    config.validate()?;
    debug!(shock = %config.shock_factor, "loaded analysis config");

    Ok(LoadedStatements {
        input: statements,
        config,
        warnings,
    })
}

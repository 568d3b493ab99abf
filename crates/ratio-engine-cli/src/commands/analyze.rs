use clap::Args;
use serde_json::Value;

use ratio_engine_core::analyze_statements;

use super::{load_statements, StatementArgs};

/// Arguments for the full ratio analysis
#[derive(Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub statements: StatementArgs,

    /// Emit the flat metric-name map instead of the nested result
    #[arg(long)]
    pub flat: bool,
}

pub fn run_analyze(args: AnalyzeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loaded = load_statements(&args.statements)?;
    let mut output = analyze_statements(&loaded.input, &loaded.config)?;

    let mut warnings = loaded.warnings;
    warnings.append(&mut output.warnings);
    output.warnings = warnings;

    if args.flat {
        let flat = output.result.to_flat_map();
        let mut value = serde_json::to_value(&output)?;
        value["result"] = serde_json::to_value(flat)?;
        return Ok(value);
    }
    Ok(serde_json::to_value(output)?)
}

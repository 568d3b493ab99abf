use clap::Args;
use serde_json::{json, Value};

use ratio_engine_core::analyze_statements;
use ratio_engine_core::diagnostics::diagnose;

use super::{load_statements, StatementArgs};

/// Arguments for the diagnostics summary
#[derive(Args)]
pub struct DiagnoseArgs {
    #[command(flatten)]
    pub statements: StatementArgs,
}

pub fn run_diagnose(args: DiagnoseArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loaded = load_statements(&args.statements)?;
    let output = analyze_statements(&loaded.input, &loaded.config)?;
    let diagnostics = diagnose(&output.result);

    let mut warnings = loaded.warnings;
    warnings.extend(output.warnings);

    Ok(json!({
        "result": diagnostics,
        "methodology": "Comparative matrix, diagnostic flags and optimal-band readings",
        "warnings": warnings,
        "metadata": output.metadata,
    }))
}

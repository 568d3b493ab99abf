use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use ratio_engine_core::balance::HorizontalLine;

/// Arguments for the growth helper
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct GrowthArgs {
    /// Prior-period figure
    #[arg(long)]
    pub old: Decimal,

    /// Current-period figure
    #[arg(long)]
    pub new: Decimal,
}

pub fn run_growth(args: GrowthArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let line = HorizontalLine::between(args.old, args.new);
    Ok(json!({ "result": line }))
}

use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::BTreeMap;

use ratio_engine_core::catalog::{self, CatalogInput, RatioKind};
use ratio_engine_core::statement::coerce_figure;

use crate::input;

/// Arguments for a single catalog ratio
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct RatioArgs {
    /// Ratio to compute, e.g. current-ratio, acid-test, collection-period, roe
    #[arg(required_unless_present = "list")]
    pub kind: Option<String>,

    /// Figure the ratio needs, e.g. --field current_assets=3800 (repeatable)
    #[arg(long = "field", value_name = "NAME=VALUE")]
    pub fields: Vec<String>,

    /// List every catalog ratio with the figures it needs
    #[arg(long)]
    pub list: bool,
}

pub fn run_ratio(args: RatioArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if args.list {
        let listing: Vec<Value> = RatioKind::ALL
            .into_iter()
            .map(|k| {
                serde_json::json!({
                    "ratio": k.slug(),
                    "name": k.name(),
                    "category": k.category(),
                    "inputs": k.inputs().iter().map(|i| i.key()).collect::<Vec<_>>(),
                })
            })
            .collect();
        return Ok(Value::Array(listing));
    }

    let kind: RatioKind = args
        .kind
        .as_deref()
        .ok_or("ratio kind is required")?
        .parse()?;

    let mut warnings = Vec::new();
    let mut figures: BTreeMap<String, Decimal> = BTreeMap::new();
    for (key, raw) in input::fields::parse_pairs(&args.fields)? {
        if CatalogInput::from_key(&key).is_none() {
            let accepted: Vec<&str> = kind.inputs().iter().map(|i| i.key()).collect();
            let message = format!(
                "Unknown figure '{key}'; {} takes {}",
                kind.slug(),
                accepted.join(", ")
            );
            return Err(message.into());
        }
        let value = coerce_figure(&key, &raw, &mut warnings);
        figures.insert(key, value);
    }

    let mut output = catalog::compute_ratio(kind, &figures)?;
    warnings.append(&mut output.warnings);
    output.warnings = warnings;
    Ok(serde_json::to_value(output)?)
}

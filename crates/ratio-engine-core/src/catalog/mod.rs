//! Single-ratio calculator: pick one ratio, supply only the figures it
//! needs, and get the value, the worked formula and a reading.
//!
//! Unlike the full engine, a zero denominator here yields
//! [`Metric::NotANumber`], and day periods use a 360-day commercial year.

mod interpret;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use crate::guard::ratio_or_nan;
use crate::types::{fixed, with_metadata, ComputationOutput, Metric};
use crate::{RatioEngineError, RatioEngineResult};

pub use interpret::interpret;

const COMMERCIAL_YEAR_DAYS: Decimal = dec!(360);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatioCategory {
    Liquidity,
    Activity,
    Indebtedness,
    Profitability,
}

impl fmt::Display for RatioCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Figures the catalog ratios draw on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogInput {
    CurrentAssets,
    CurrentLiabilities,
    AverageInventory,
    CostOfSales,
    NetSales,
    AverageReceivables,
    TotalAssets,
    TotalLiabilities,
    Equity,
    OperatingIncome,
    InterestExpense,
    NetIncome,
}

impl CatalogInput {
    pub const ALL: [CatalogInput; 12] = [
        CatalogInput::CurrentAssets,
        CatalogInput::CurrentLiabilities,
        CatalogInput::AverageInventory,
        CatalogInput::CostOfSales,
        CatalogInput::NetSales,
        CatalogInput::AverageReceivables,
        CatalogInput::TotalAssets,
        CatalogInput::TotalLiabilities,
        CatalogInput::Equity,
        CatalogInput::OperatingIncome,
        CatalogInput::InterestExpense,
        CatalogInput::NetIncome,
    ];

    pub fn key(self) -> &'static str {
        match self {
            CatalogInput::CurrentAssets => "current_assets",
            CatalogInput::CurrentLiabilities => "current_liabilities",
            CatalogInput::AverageInventory => "average_inventory",
            CatalogInput::CostOfSales => "cost_of_sales",
            CatalogInput::NetSales => "net_sales",
            CatalogInput::AverageReceivables => "average_receivables",
            CatalogInput::TotalAssets => "total_assets",
            CatalogInput::TotalLiabilities => "total_liabilities",
            CatalogInput::Equity => "equity",
            CatalogInput::OperatingIncome => "operating_income",
            CatalogInput::InterestExpense => "interest_expense",
            CatalogInput::NetIncome => "net_income",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.key() == key)
    }
}

/// How a ratio value reads: a multiple, a money amount, a day count or a
/// fraction shown as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioUnit {
    Multiple,
    Money,
    Days,
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioKind {
    CurrentRatio,
    AcidTest,
    WorkingCapital,
    InventoryTurnover,
    InventoryPeriod,
    ReceivablesTurnover,
    CollectionPeriod,
    AssetTurnover,
    LiabilitiesToAssets,
    DebtToEquity,
    InterestCoverage,
    NetMargin,
    ReturnOnAssets,
    ReturnOnEquity,
}

impl RatioKind {
    pub const ALL: [RatioKind; 14] = [
        RatioKind::CurrentRatio,
        RatioKind::AcidTest,
        RatioKind::WorkingCapital,
        RatioKind::InventoryTurnover,
        RatioKind::InventoryPeriod,
        RatioKind::ReceivablesTurnover,
        RatioKind::CollectionPeriod,
        RatioKind::AssetTurnover,
        RatioKind::LiabilitiesToAssets,
        RatioKind::DebtToEquity,
        RatioKind::InterestCoverage,
        RatioKind::NetMargin,
        RatioKind::ReturnOnAssets,
        RatioKind::ReturnOnEquity,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            RatioKind::CurrentRatio => "current-ratio",
            RatioKind::AcidTest => "acid-test",
            RatioKind::WorkingCapital => "working-capital",
            RatioKind::InventoryTurnover => "inventory-turnover",
            RatioKind::InventoryPeriod => "inventory-period",
            RatioKind::ReceivablesTurnover => "receivables-turnover",
            RatioKind::CollectionPeriod => "collection-period",
            RatioKind::AssetTurnover => "asset-turnover",
            RatioKind::LiabilitiesToAssets => "liabilities-to-assets",
            RatioKind::DebtToEquity => "debt-to-equity",
            RatioKind::InterestCoverage => "interest-coverage",
            RatioKind::NetMargin => "net-margin",
            RatioKind::ReturnOnAssets => "roa",
            RatioKind::ReturnOnEquity => "roe",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RatioKind::CurrentRatio => "Current ratio",
            RatioKind::AcidTest => "Acid test",
            RatioKind::WorkingCapital => "Working capital",
            RatioKind::InventoryTurnover => "Inventory turnover",
            RatioKind::InventoryPeriod => "Average inventory period",
            RatioKind::ReceivablesTurnover => "Receivables turnover",
            RatioKind::CollectionPeriod => "Average collection period",
            RatioKind::AssetTurnover => "Asset turnover",
            RatioKind::LiabilitiesToAssets => "Liabilities / assets",
            RatioKind::DebtToEquity => "Debt / equity",
            RatioKind::InterestCoverage => "Interest coverage",
            RatioKind::NetMargin => "Net margin",
            RatioKind::ReturnOnAssets => "ROA",
            RatioKind::ReturnOnEquity => "ROE",
        }
    }

    pub fn category(self) -> RatioCategory {
        match self {
            RatioKind::CurrentRatio | RatioKind::AcidTest | RatioKind::WorkingCapital => {
                RatioCategory::Liquidity
            }
            RatioKind::InventoryTurnover
            | RatioKind::InventoryPeriod
            | RatioKind::ReceivablesTurnover
            | RatioKind::CollectionPeriod
            | RatioKind::AssetTurnover => RatioCategory::Activity,
            RatioKind::LiabilitiesToAssets
            | RatioKind::DebtToEquity
            | RatioKind::InterestCoverage => {
                RatioCategory::Indebtedness
            }
            RatioKind::NetMargin | RatioKind::ReturnOnAssets | RatioKind::ReturnOnEquity => {
                RatioCategory::Profitability
            }
        }
    }

    pub fn unit(self) -> RatioUnit {
        match self {
            RatioKind::WorkingCapital => RatioUnit::Money,
            RatioKind::InventoryPeriod | RatioKind::CollectionPeriod => RatioUnit::Days,
            RatioKind::LiabilitiesToAssets
            | RatioKind::NetMargin
            | RatioKind::ReturnOnAssets
            | RatioKind::ReturnOnEquity => RatioUnit::Percent,
            _ => RatioUnit::Multiple,
        }
    }

    pub fn inputs(self) -> &'static [CatalogInput] {
        use CatalogInput::*;
        match self {
            RatioKind::CurrentRatio | RatioKind::WorkingCapital => {
                &[CurrentAssets, CurrentLiabilities]
            }
            RatioKind::AcidTest => &[CurrentAssets, AverageInventory, CurrentLiabilities],
            RatioKind::InventoryTurnover | RatioKind::InventoryPeriod => {
                &[CostOfSales, AverageInventory]
            }
            RatioKind::ReceivablesTurnover | RatioKind::CollectionPeriod => {
                &[NetSales, AverageReceivables]
            }
            RatioKind::AssetTurnover => &[NetSales, TotalAssets],
            RatioKind::LiabilitiesToAssets => &[TotalLiabilities, TotalAssets],
            RatioKind::DebtToEquity => &[TotalLiabilities, Equity],
            RatioKind::InterestCoverage => &[OperatingIncome, InterestExpense],
            RatioKind::NetMargin => &[NetIncome, NetSales],
            RatioKind::ReturnOnAssets => &[NetIncome, TotalAssets],
            RatioKind::ReturnOnEquity => &[NetIncome, Equity],
        }
    }

    pub fn in_category(category: RatioCategory) -> impl Iterator<Item = RatioKind> {
        Self::ALL.into_iter().filter(move |k| k.category() == category)
    }
}

impl fmt::Display for RatioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RatioKind {
    type Err = RatioEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|k| k.slug() == wanted)
            .ok_or_else(|| RatioEngineError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioOutcome {
    pub ratio: RatioKind,
    pub category: RatioCategory,
    pub unit: RatioUnit,
    /// Raw value; fractions are not scaled by 100
    pub value: Metric,
    pub explanation: String,
    pub interpretation: String,
}

/// Renders a value in the ratio's unit: "N/A" when undefined.
pub fn format_value(value: Metric, unit: RatioUnit) -> String {
    match (value, unit) {
        (Metric::Value(v), RatioUnit::Percent) => format!("{}%", fixed(v * dec!(100), 2)),
        (Metric::Value(v), RatioUnit::Days) => format!("{} days", fixed(v, 2)),
        (other, _) => format!("{:.2}", other),
    }
}

fn num(d: Decimal) -> String {
    fixed(d, 2)
}

fn evaluate(kind: RatioKind, get: impl Fn(CatalogInput) -> Decimal) -> (Metric, String) {
    use CatalogInput::*;
    let unit = kind.unit();
    let quotient = |a: CatalogInput, b: CatalogInput| {
        let v = ratio_or_nan(get(a), get(b));
        (v, format!("{} / {} = {}", num(get(a)), num(get(b)), format_value(v, unit)))
    };
    let period = |a: CatalogInput, b: CatalogInput| {
        let turnover = ratio_or_nan(get(a), get(b));
        let days = match turnover {
            Metric::Value(t) => ratio_or_nan(COMMERCIAL_YEAR_DAYS, t),
            _ => Metric::NotANumber,
        };
        let explanation = format!(
            "{COMMERCIAL_YEAR_DAYS} / {} = {}",
            format_value(turnover, RatioUnit::Multiple),
            format_value(days, unit)
        );
        (days, explanation)
    };

    match kind {
        RatioKind::CurrentRatio => quotient(CurrentAssets, CurrentLiabilities),
        RatioKind::AcidTest => {
            let (ca, inv, cl) = (
                get(CurrentAssets),
                get(AverageInventory),
                get(CurrentLiabilities),
            );
            let v = ratio_or_nan(ca - inv, cl);
            (v, format!("({} - {}) / {} = {}", num(ca), num(inv), num(cl), format_value(v, unit)))
        }
        RatioKind::WorkingCapital => {
            let (ca, cl) = (get(CurrentAssets), get(CurrentLiabilities));
            let v = Metric::Value(ca - cl);
            (v, format!("{} - {} = {}", num(ca), num(cl), format_value(v, unit)))
        }
        RatioKind::InventoryTurnover => quotient(CostOfSales, AverageInventory),
        RatioKind::InventoryPeriod => period(CostOfSales, AverageInventory),
        RatioKind::ReceivablesTurnover => quotient(NetSales, AverageReceivables),
        RatioKind::CollectionPeriod => period(NetSales, AverageReceivables),
        RatioKind::AssetTurnover => quotient(NetSales, TotalAssets),
        RatioKind::LiabilitiesToAssets => quotient(TotalLiabilities, TotalAssets),
        RatioKind::DebtToEquity => quotient(TotalLiabilities, Equity),
        RatioKind::InterestCoverage => quotient(OperatingIncome, InterestExpense),
        RatioKind::NetMargin => quotient(NetIncome, NetSales),
        RatioKind::ReturnOnAssets => quotient(NetIncome, TotalAssets),
        RatioKind::ReturnOnEquity => quotient(NetIncome, Equity),
    }
}

/// Compute one catalog ratio from named figures.
///
/// Keys are [`CatalogInput::key`] names. Unknown keys are rejected; inputs
/// the ratio needs but that are absent count as 0 and produce a warning.
pub fn compute_ratio(
    kind: RatioKind,
    figures: &BTreeMap<String, Decimal>,
) -> RatioEngineResult<ComputationOutput<RatioOutcome>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let mut values: BTreeMap<CatalogInput, Decimal> = BTreeMap::new();
    for (key, value) in figures {
        let input = CatalogInput::from_key(key)
            .ok_or_else(|| RatioEngineError::UnknownField(key.clone()))?;
        values.insert(input, *value);
    }
    for input in kind.inputs() {
        if !values.contains_key(input) {
            warnings.push(format!("'{}' not provided; 0 used.", input.key()));
        }
    }

    let (value, explanation) = evaluate(kind, |i| values.get(&i).copied().unwrap_or(Decimal::ZERO));
    if value.is_nan() {
        warnings.push(format!("{} is undefined: denominator is zero.", kind.name()));
    }

    let outcome = RatioOutcome {
        ratio: kind,
        category: kind.category(),
        unit: kind.unit(),
        value,
        interpretation: interpret(kind, value).to_string(),
        explanation,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "zero_denominator": "NaN",
        "commercial_year_days": COMMERCIAL_YEAR_DAYS.to_string(),
        "inputs": kind.inputs().iter().map(|i| i.key()).collect::<Vec<_>>(),
    });

    Ok(with_metadata(
        &format!("Catalog ratio: {}", kind.name()),
        &assumptions,
        warnings,
        elapsed,
        outcome,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn figures(pairs: &[(&str, Decimal)]) -> BTreeMap<String, Decimal> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_every_category_is_populated() {
        assert_eq!(RatioKind::in_category(RatioCategory::Liquidity).count(), 3);
        assert_eq!(RatioKind::in_category(RatioCategory::Activity).count(), 5);
        assert_eq!(RatioKind::in_category(RatioCategory::Indebtedness).count(), 3);
        assert_eq!(RatioKind::in_category(RatioCategory::Profitability).count(), 3);
    }

    #[test]
    fn test_parse_kind_from_slug() {
        assert_eq!("acid_test".parse::<RatioKind>().unwrap(), RatioKind::AcidTest);
        assert_eq!("ROE".parse::<RatioKind>().unwrap(), RatioKind::ReturnOnEquity);
        assert!("quick-ratio".parse::<RatioKind>().is_err());
    }

    #[test]
    fn test_acid_test() {
        let out = compute_ratio(
            RatioKind::AcidTest,
            &figures(&[
                ("current_assets", dec!(3800)),
                ("average_inventory", dec!(800)),
                ("current_liabilities", dec!(1000)),
            ]),
        )
        .unwrap();
        assert_eq!(out.result.value, Metric::Value(dec!(3)));
        assert_eq!(out.result.explanation, "(3800.00 - 800.00) / 1000.00 = 3.00");
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_collection_period_uses_commercial_year() {
        let out = compute_ratio(
            RatioKind::CollectionPeriod,
            &figures(&[("net_sales", dec!(12000)), ("average_receivables", dec!(2000))]),
        )
        .unwrap();
        assert_eq!(out.result.value, Metric::Value(dec!(60)));
        assert_eq!(out.result.unit, RatioUnit::Days);
        assert!(out.result.explanation.ends_with("= 60.00 days"));
    }

    #[test]
    fn test_zero_denominator_is_nan_not_guarded() {
        let out = compute_ratio(
            RatioKind::CurrentRatio,
            &figures(&[("current_assets", dec!(500)), ("current_liabilities", dec!(0))]),
        )
        .unwrap();
        assert!(out.result.value.is_nan());
        assert_eq!(out.result.interpretation, "Not available.");
        assert!(out.warnings.iter().any(|w| w.contains("undefined")));
    }

    #[test]
    fn test_missing_input_defaults_to_zero_with_warning() {
        let out = compute_ratio(
            RatioKind::WorkingCapital,
            &figures(&[("current_assets", dec!(500))]),
        )
        .unwrap();
        assert_eq!(out.result.value, Metric::Value(dec!(500)));
        assert!(out.warnings[0].contains("current_liabilities"));
    }

    #[test]
    fn test_unknown_figure_rejected() {
        let err = compute_ratio(RatioKind::ReturnOnEquity, &figures(&[("ebitda", dec!(1))]));
        assert!(matches!(err, Err(RatioEngineError::UnknownField(k)) if k == "ebitda"));
    }

    #[test]
    fn test_inventory_period_explanation_rounds() {
        // 360 / (1000 / 300) = 108
        let out = compute_ratio(
            RatioKind::InventoryPeriod,
            &figures(&[("cost_of_sales", dec!(1000)), ("average_inventory", dec!(300))]),
        )
        .unwrap();
        assert_eq!(out.result.explanation, "360 / 3.33 = 108.00 days");

        let out = compute_ratio(
            RatioKind::NetMargin,
            &figures(&[("net_income", dec!(2)), ("net_sales", dec!(3))]),
        )
        .unwrap();
        assert_eq!(out.result.explanation, "2.00 / 3.00 = 66.67%");
    }

    #[test]
    fn test_percent_unit_formatting() {
        assert_eq!(format_value(Metric::Value(dec!(0.125)), RatioUnit::Percent), "12.50%");
        assert_eq!(format_value(Metric::NotANumber, RatioUnit::Percent), "N/A");
    }
}

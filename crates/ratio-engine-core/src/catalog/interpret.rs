use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::RatioKind;
use crate::types::Metric;

/// Threshold reading of a catalog ratio value.
pub fn interpret(kind: RatioKind, value: Metric) -> &'static str {
    let v = match value {
        Metric::Value(v) => v,
        Metric::NotANumber => return "Not available.",
        Metric::PosInfinity => return "Unbounded: denominator is zero.",
    };

    match kind {
        RatioKind::CurrentRatio => {
            if v < dec!(1) {
                "Insufficient: short-term illiquidity risk."
            } else if v <= dec!(2) {
                "Acceptable."
            } else {
                "High liquidity; resources possibly used inefficiently."
            }
        }
        RatioKind::AcidTest => {
            if v >= dec!(1) {
                "Good liquidity without relying on inventory."
            } else {
                "Risk: depends on selling inventory."
            }
        }
        RatioKind::WorkingCapital => {
            if v >= Decimal::ZERO {
                "Positive."
            } else {
                "Negative: operating risk."
            }
        }
        RatioKind::InventoryTurnover => {
            if v < dec!(3) {
                "Low turnover: excess inventory."
            } else if v <= dec!(6) {
                "Adequate turnover."
            } else {
                "High turnover."
            }
        }
        RatioKind::InventoryPeriod => {
            if v <= dec!(120) {
                "Inventory managed adequately."
            } else {
                "Slow-moving inventory."
            }
        }
        RatioKind::ReceivablesTurnover => {
            if v >= dec!(4) {
                "Efficient collection."
            } else {
                "Slow collection."
            }
        }
        RatioKind::CollectionPeriod => {
            if v <= dec!(90) {
                "Healthy collection period."
            } else {
                "Slow collection; review credit policy."
            }
        }
        RatioKind::AssetTurnover => {
            if v >= dec!(1) {
                "Assets well used."
            } else {
                "Assets under-used."
            }
        }
        RatioKind::LiabilitiesToAssets => {
            if v > dec!(0.6) {
                "High indebtedness."
            } else if v >= dec!(0.4) {
                "Moderate indebtedness."
            } else {
                "Low indebtedness."
            }
        }
        RatioKind::DebtToEquity => {
            if v > dec!(1) {
                "High risk: debt exceeds equity."
            } else {
                "Balanced structure."
            }
        }
        RatioKind::InterestCoverage => {
            if v >= dec!(2) {
                "Adequate coverage."
            } else {
                "Insufficient coverage."
            }
        }
        RatioKind::NetMargin => {
            if v < dec!(0.05) {
                "Low margin."
            } else if v <= dec!(0.15) {
                "Adequate margin."
            } else {
                "High margin."
            }
        }
        RatioKind::ReturnOnAssets => {
            if v >= dec!(0.05) {
                "Acceptable ROA."
            } else {
                "Low ROA."
            }
        }
        RatioKind::ReturnOnEquity => {
            if v < dec!(0.10) {
                "Low ROE."
            } else if v <= dec!(0.20) {
                "Adequate ROE."
            } else {
                "High ROE."
            }
        }
    }
}

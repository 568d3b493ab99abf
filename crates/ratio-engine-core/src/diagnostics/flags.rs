use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::engine::RatioResult;
use crate::types::fixed;

const EXCESS_CURRENT_RATIO: Decimal = dec!(2.0);
const EXCESS_TREASURY_RATIO: Decimal = dec!(1.0);
const MIN_LIQUIDITY: Decimal = dec!(1.0);
const MIN_ASSET_COVERAGE: Decimal = dec!(1.0);
const LONG_CASH_CYCLE_DAYS: Decimal = dec!(90);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagKind {
    ExcessLiquidity,
    LiquidityShortfall,
    NegativeWorkingCapital,
    OverIndebted,
    PositiveLeverage,
    NegativeLeverage,
    StressLoss,
    LongCashCycle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticFlag {
    pub kind: FlagKind,
    pub severity: Severity,
    pub message: String,
}

impl DiagnosticFlag {
    fn new(kind: FlagKind, severity: Severity, message: String) -> Self {
        Self {
            kind,
            severity,
            message,
        }
    }
}

/// Flags raised on the current period, most severe first.
pub fn raise_flags(result: &RatioResult) -> Vec<DiagnosticFlag> {
    let mut flags = Vec::new();
    let liquidity = &result.financial.liquidity_current;
    let solvency = &result.financial.solvency_current;
    let leverage = &result.economic.leverage;
    let stress = &result.financial.stress;
    let roa = result.economic.profitability_current.roa_pct;

    if liquidity.current_ratio > EXCESS_CURRENT_RATIO
        || liquidity.treasury_ratio > EXCESS_TREASURY_RATIO
    {
        flags.push(DiagnosticFlag::new(
            FlagKind::ExcessLiquidity,
            Severity::Warning,
            format!(
                "Current ratio {} / treasury ratio {} above the optimum: idle current assets.",
                fixed(liquidity.current_ratio, 2),
                fixed(liquidity.treasury_ratio, 2)
            ),
        ));
    }

    if liquidity.current_ratio < MIN_LIQUIDITY || liquidity.treasury_ratio < MIN_LIQUIDITY {
        flags.push(DiagnosticFlag::new(
            FlagKind::LiquidityShortfall,
            Severity::Warning,
            format!(
                "Current ratio {} / treasury ratio {} below 1.0: \
                 short-term debt not fully covered.",
                fixed(liquidity.current_ratio, 2),
                fixed(liquidity.treasury_ratio, 2)
            ),
        ));
    }

    let working_capital = result.balance.working_capital.current;
    if working_capital < Decimal::ZERO {
        flags.push(DiagnosticFlag::new(
            FlagKind::NegativeWorkingCapital,
            Severity::Critical,
            format!(
                "Working capital is negative ({}): current liabilities exceed current assets.",
                fixed(working_capital, 2)
            ),
        ));
    }

    if solvency.asset_coverage < MIN_ASSET_COVERAGE {
        flags.push(DiagnosticFlag::new(
            FlagKind::OverIndebted,
            Severity::Critical,
            format!(
                "Asset coverage {} below 1.0: total assets do not cover total liabilities.",
                fixed(solvency.asset_coverage, 2)
            ),
        ));
    }

    if leverage.favourable {
        flags.push(DiagnosticFlag::new(
            FlagKind::PositiveLeverage,
            Severity::Info,
            format!(
                "ROA ({}%) exceeds the cost of debt ({}%): borrowing lifts ROE.",
                fixed(roa, 2),
                fixed(leverage.cost_of_debt_pct, 2)
            ),
        ));
    } else {
        flags.push(DiagnosticFlag::new(
            FlagKind::NegativeLeverage,
            Severity::Warning,
            format!(
                "ROA ({}%) does not exceed the cost of debt ({}%): borrowing erodes ROE.",
                fixed(roa, 2),
                fixed(leverage.cost_of_debt_pct, 2)
            ),
        ));
    }

    if stress.below_break_even || stress.stressed_net_income < Decimal::ZERO {
        flags.push(DiagnosticFlag::new(
            FlagKind::StressLoss,
            Severity::Critical,
            format!(
                "A {}% revenue shock brings revenue to {} against a break-even of {:.2}; \
                 net income {}.",
                fixed(stress.shock_factor * dec!(100), 0),
                fixed(stress.stressed_revenue, 2),
                stress.break_even_revenue,
                fixed(stress.stressed_net_income, 2)
            ),
        ));
    }

    let cycle = result.balance.cash_conversion.cycle_days;
    if cycle > LONG_CASH_CYCLE_DAYS {
        flags.push(DiagnosticFlag::new(
            FlagKind::LongCashCycle,
            Severity::Warning,
            format!(
                "Cash conversion cycle of {} days exceeds {LONG_CASH_CYCLE_DAYS} days.",
                fixed(cycle, 0)
            ),
        ));
    }

    flags.sort_by(|a, b| b.severity.cmp(&a.severity));
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compute_ratios, AnalysisConfig, FinancialPeriodInput};

    fn kinds(flags: &[DiagnosticFlag]) -> Vec<FlagKind> {
        flags.iter().map(|f| f.kind).collect()
    }

    #[test]
    fn test_sample_flags() {
        let result = compute_ratios(&FinancialPeriodInput::sample(), &AnalysisConfig::default());
        let found = kinds(&raise_flags(&result));
        assert!(found.contains(&FlagKind::ExcessLiquidity));
        // treasury 2_850 / 12_000
        assert!(found.contains(&FlagKind::LiquidityShortfall));
        assert!(found.contains(&FlagKind::PositiveLeverage));
        assert!(!found.contains(&FlagKind::StressLoss));
        assert!(!found.contains(&FlagKind::LongCashCycle));
    }

    #[test]
    fn test_distressed_company_flags() {
        let mut input = FinancialPeriodInput::sample();
        input.current.current_liabilities = dec!(30000);
        input.current.non_current_liabilities = dec!(20000);
        input.current.financial_expenses = dec!(50000);
        input.cycle.receivable_days = dec!(120);
        let result = compute_ratios(&input, &AnalysisConfig::default());
        let flags = raise_flags(&result);
        let found = kinds(&flags);

        assert!(found.contains(&FlagKind::NegativeWorkingCapital));
        assert!(found.contains(&FlagKind::OverIndebted));
        assert!(found.contains(&FlagKind::NegativeLeverage));
        assert!(found.contains(&FlagKind::StressLoss));
        assert!(found.contains(&FlagKind::LongCashCycle));
        assert_eq!(flags[0].severity, Severity::Critical);
    }

    #[test]
    fn test_flag_messages_round_figures() {
        let mut input = FinancialPeriodInput::sample();
        // 71 / 12000 = 0.0059...
        input.current.current_assets = dec!(71);
        input.current.cash = dec!(71);
        input.current.receivables = Decimal::ZERO;
        input.current.short_term_investments = Decimal::ZERO;
        let result = compute_ratios(&input, &AnalysisConfig::default());
        let flags = raise_flags(&result);
        let shortfall = flags
            .iter()
            .find(|f| f.kind == FlagKind::LiquidityShortfall)
            .unwrap();
        assert!(shortfall.message.starts_with("Current ratio 0.01 / treasury ratio 0.01"));

        let negative = flags
            .iter()
            .find(|f| f.kind == FlagKind::NegativeWorkingCapital)
            .unwrap();
        assert!(negative.message.contains("(-11929.00)"));
    }
}

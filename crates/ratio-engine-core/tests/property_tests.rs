//! Property-based tests for the algebraic identities of the ratio engine.

use proptest::prelude::*;
use ratio_engine_core::balance::growth_pct;
use ratio_engine_core::{compute_ratios, AnalysisConfig, FinancialPeriodInput, PeriodFigures};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Strategy for non-negative amounts with cents
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for strictly positive amounts with cents
fn positive_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for signed amounts with cents
fn signed_strategy() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

fn current_only(current: PeriodFigures) -> FinancialPeriodInput {
    FinancialPeriodInput {
        current,
        ..FinancialPeriodInput::default()
    }
}

fn approx_eq(a: Decimal, b: Decimal) -> bool {
    let scale = b.abs().max(Decimal::ONE);
    (a - b).abs() <= dec!(0.000001) * scale
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Both sides of a balanced sheet sum to 100% of total assets.
    #[test]
    fn prop_vertical_sides_sum_to_hundred(
        current_assets in positive_strategy(),
        non_current_assets in amount_strategy(),
        cl_share in 0u32..=100,
        pnc_share in 0u32..=100,
    ) {
        let total = current_assets + non_current_assets;
        let current_liabilities = total * Decimal::from(cl_share) / dec!(200);
        let non_current_liabilities = total * Decimal::from(pnc_share) / dec!(200);
        let period = PeriodFigures {
            current_assets,
            non_current_assets,
            current_liabilities,
            non_current_liabilities,
            equity: total - current_liabilities - non_current_liabilities,
            ..PeriodFigures::default()
        };
        let result = compute_ratios(&current_only(period), &AnalysisConfig::default());
        let v = &result.balance.vertical_current;

        prop_assert!(approx_eq(v.asset_side_pct(), dec!(100)));
        prop_assert!(approx_eq(v.financing_side_pct(), dec!(100)));
    }

    /// net margin × asset turnover × equity multiplier reproduces ROE.
    #[test]
    fn prop_dupont_matches_roe(
        current_assets in positive_strategy(),
        equity in positive_strategy(),
        revenue in positive_strategy(),
        net_income in signed_strategy(),
    ) {
        let period = PeriodFigures {
            current_assets,
            equity,
            revenue,
            net_income,
            ..PeriodFigures::default()
        };
        let result = compute_ratios(&current_only(period), &AnalysisConfig::default());
        let roe = result.economic.profitability_current.roe_pct;

        prop_assert!(approx_eq(result.economic.dupont.roe_check_pct, roe));
    }

    /// ROE = ROA + D/E × (ROA − k) on a balanced sheet with no taxes.
    #[test]
    fn prop_leverage_effect_matches_roe(
        current_liabilities in amount_strategy(),
        non_current_liabilities in positive_strategy(),
        equity in positive_strategy(),
        operating_income in signed_strategy(),
        financial_expenses in amount_strategy(),
    ) {
        let total_liabilities = current_liabilities + non_current_liabilities;
        let period = PeriodFigures {
            current_assets: total_liabilities + equity,
            current_liabilities,
            non_current_liabilities,
            equity,
            operating_income,
            financial_expenses,
            net_income: operating_income - financial_expenses,
            ..PeriodFigures::default()
        };
        let result = compute_ratios(&current_only(period), &AnalysisConfig::default());
        let roe = result.economic.profitability_current.roe_pct;

        prop_assert!(approx_eq(result.economic.leverage.leverage_effect_pct, roe));
    }

    /// No change means no growth.
    #[test]
    fn prop_growth_of_identical_values_is_zero(x in signed_strategy()) {
        prop_assert_eq!(growth_pct(x, x), Decimal::ZERO);
    }

    /// Break-even is unreachable once variable costs consume all revenue.
    #[test]
    fn prop_break_even_infinite_without_margin(
        revenue in amount_strategy(),
        excess in amount_strategy(),
        admin_expenses in amount_strategy(),
    ) {
        let period = PeriodFigures {
            revenue,
            cost_of_sales: revenue + excess,
            admin_expenses,
            ..PeriodFigures::default()
        };
        let result = compute_ratios(&current_only(period), &AnalysisConfig::default());

        prop_assert!(result.financial.break_even.break_even_revenue.is_infinite());
    }

    /// Zero current liabilities leave the current ratio equal to current assets.
    #[test]
    fn prop_zero_guard_current_ratio(current_assets in signed_strategy()) {
        let period = PeriodFigures {
            current_assets,
            ..PeriodFigures::default()
        };
        let result = compute_ratios(&current_only(period), &AnalysisConfig::default());

        prop_assert_eq!(result.financial.liquidity_current.current_ratio, current_assets);
    }
}

#[test]
fn test_growth_special_cases() {
    assert_eq!(growth_pct(dec!(0), dec!(0)), dec!(0));
    assert_eq!(growth_pct(dec!(5), dec!(0)), dec!(100));
    assert_eq!(growth_pct(dec!(-5), dec!(0)), dec!(-100));
}

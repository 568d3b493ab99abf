use pretty_assertions::assert_eq;
use ratio_engine_core::diagnostics::{diagnose, FlagKind, Trend};
use ratio_engine_core::report::{MarkdownRenderer, PlainTextRenderer, ReportBuilder, ReportRenderer};
use ratio_engine_core::{
    analyze_statements, compute_ratios, AnalysisConfig, FinancialPeriodInput, Metric, PeriodFigures,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Reference company
// ===========================================================================

fn reference_period() -> PeriodFigures {
    // Total liabilities 2_000 split evenly between short and long term
    PeriodFigures {
        current_assets: dec!(3800),
        non_current_assets: dec!(1850),
        current_liabilities: dec!(1000),
        non_current_liabilities: dec!(1000),
        equity: dec!(3650),
        revenue: dec!(11200),
        operating_income: dec!(2600),
        net_income: dec!(1912),
        ..PeriodFigures::default()
    }
}

fn reference_input() -> FinancialPeriodInput {
    FinancialPeriodInput {
        prior: reference_period(),
        current: reference_period(),
        ..FinancialPeriodInput::default()
    }
}

#[test]
fn test_reference_company_end_to_end() {
    let output = analyze_statements(&reference_input(), &AnalysisConfig::default()).unwrap();
    let r = &output.result;

    assert_eq!(r.balance.working_capital.current, dec!(2800));
    assert_eq!(r.balance.total_assets_current, dec!(5650));
    assert_eq!(r.economic.profitability_current.roa_pct.round_dp(2), dec!(46.02));
    assert_eq!(r.economic.profitability_current.roe_pct.round_dp(2), dec!(52.38));
    assert_eq!(r.financial.solvency_current.asset_coverage, dec!(2.825));
    assert_eq!(r.financial.liquidity_current.current_ratio, dec!(3.8));
}

#[test]
fn test_flat_map_matches_nested_result() {
    let result = compute_ratios(&reference_input(), &AnalysisConfig::default());
    let flat = result.to_flat_map();

    assert_eq!(flat["working_capital_current"], Metric::Value(dec!(2800)));
    assert_eq!(flat["total_assets_prior"], Metric::Value(dec!(5650)));
    assert_eq!(flat["asset_coverage_current"], Metric::Value(dec!(2.825)));
    assert_eq!(flat["growth_total_assets_pct"], Metric::ZERO);
    // No cost of sales: the whole revenue is contribution margin
    assert_eq!(flat["contribution_margin_ratio"], Metric::Value(Decimal::ONE));
}

#[test]
fn test_identical_periods_are_unchanged_in_matrix() {
    let result = compute_ratios(&reference_input(), &AnalysisConfig::default());
    let diagnostics = diagnose(&result);
    assert!(diagnostics.matrix.iter().all(|row| row.trend == Trend::Unchanged));
}

#[test]
fn test_result_round_trips_through_json() {
    let output =
        analyze_statements(&FinancialPeriodInput::sample(), &AnalysisConfig::default()).unwrap();
    let json = serde_json::to_string(&output.result).unwrap();
    let back: ratio_engine_core::RatioResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, output.result);
}

// ===========================================================================
// Degenerate input
// ===========================================================================

#[test]
fn test_all_zero_input_never_fails() {
    let output =
        analyze_statements(&FinancialPeriodInput::default(), &AnalysisConfig::default()).unwrap();
    let r = &output.result;

    assert_eq!(r.balance.vertical_current.current_assets_pct, Decimal::ZERO);
    assert_eq!(r.financial.liquidity_current.current_ratio, Decimal::ZERO);
    assert!(r.financial.break_even.break_even_revenue.is_infinite());
    assert!(r.economic.dupont.attribution.net_margin_share_pct.is_nan());
    assert!(!output.warnings.is_empty());
}

#[test]
fn test_negative_figures_are_computed_as_is() {
    let mut input = reference_input();
    input.current.net_income = dec!(-730);
    let result = compute_ratios(&input, &AnalysisConfig::default());
    assert_eq!(result.economic.profitability_current.roe_pct, dec!(-20));
    assert_eq!(result.balance.horizontal.net_income.growth_pct.round_dp(4), dec!(-138.1799));
}

#[test]
fn test_shock_factor_from_config_drives_stress() {
    let config = AnalysisConfig {
        shock_factor: dec!(-0.5),
        ..AnalysisConfig::default()
    };
    let result = compute_ratios(&reference_input(), &config);
    assert_eq!(result.financial.stress.stressed_revenue, dec!(5600));
    assert_eq!(result.financial.stress.stressed_current_assets, dec!(1900));
}

// ===========================================================================
// Diagnostics and report
// ===========================================================================

#[test]
fn test_reference_company_flags() {
    let result = compute_ratios(&reference_input(), &AnalysisConfig::default());
    let diagnostics = diagnose(&result);
    let kinds: Vec<FlagKind> = diagnostics.flags.iter().map(|f| f.kind).collect();
    assert!(kinds.contains(&FlagKind::ExcessLiquidity));
    assert!(kinds.contains(&FlagKind::PositiveLeverage));
    // No cost of sales, so the 3_360 of lost revenue comes straight off EBIT
    assert!(kinds.contains(&FlagKind::StressLoss));
    assert!(diagnostics.has_critical());
}

#[test]
fn test_report_renders_in_both_formats() {
    let input = FinancialPeriodInput::sample();
    let result = compute_ratios(&input, &AnalysisConfig::default());
    let diagnostics = diagnose(&result);
    let report = ReportBuilder::new().build(&input, &result, &diagnostics);

    let text = PlainTextRenderer.render(&report);
    let markdown = MarkdownRenderer.render(&report);
    assert!(text.starts_with(&"=".repeat(72)));
    assert!(markdown.starts_with("# Financial Statement Ratio Analysis"));
    assert_eq!(PlainTextRenderer.extension(), "txt");
    assert_eq!(MarkdownRenderer.extension(), "md");
}

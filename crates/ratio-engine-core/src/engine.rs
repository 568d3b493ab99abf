//! Single entry point that runs every analysis over one input.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::debug;

use crate::balance::{self, BalanceAnalysis};
use crate::config::AnalysisConfig;
use crate::economic::{self, EconomicAnalysis};
use crate::financial::{self, FinancialAnalysis};
use crate::guard::GuardLog;
use crate::recommendations::{self, Recommendations};
use crate::statement::FinancialPeriodInput;
use crate::types::{with_metadata, ComputationOutput, Metric};
use crate::RatioEngineResult;

/// Every figure derived from one [`FinancialPeriodInput`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioResult {
    pub balance: BalanceAnalysis,
    pub financial: FinancialAnalysis,
    pub economic: EconomicAnalysis,
    pub recommendations: Recommendations,
}

impl RatioResult {
    /// Flat `metric name -> value` view, suffixed `_prior` / `_current`
    /// where a figure exists for both periods.
    pub fn to_flat_map(&self) -> BTreeMap<String, Metric> {
        let mut map = BTreeMap::new();
        let mut put = |name: &str, value: Metric| {
            map.insert(name.to_string(), value);
        };

        let b = &self.balance;
        put("total_assets_prior", b.total_assets_prior.into());
        put("total_assets_current", b.total_assets_current.into());
        put("working_capital_prior", b.working_capital.prior.into());
        put("working_capital_current", b.working_capital.current.into());
        put("working_capital_change", b.working_capital.change.into());
        for (suffix, v) in [("prior", &b.vertical_prior), ("current", &b.vertical_current)] {
            put(&format!("vertical_current_assets_pct_{suffix}"), v.current_assets_pct.into());
            put(
                &format!("vertical_non_current_assets_pct_{suffix}"),
                v.non_current_assets_pct.into(),
            );
            put(
                &format!("vertical_current_liabilities_pct_{suffix}"),
                v.current_liabilities_pct.into(),
            );
            put(
                &format!("vertical_non_current_liabilities_pct_{suffix}"),
                v.non_current_liabilities_pct.into(),
            );
            put(&format!("vertical_equity_pct_{suffix}"), v.equity_pct.into());
        }
        for (suffix, v) in [
            ("prior", &b.income_vertical_prior),
            ("current", &b.income_vertical_current),
        ] {
            for (name, value) in [
                ("cost_of_sales", v.cost_of_sales_pct),
                ("gross_profit", v.gross_profit_pct),
                ("admin_expenses", v.admin_expenses_pct),
                ("selling_expenses", v.selling_expenses_pct),
                ("operating_income", v.operating_income_pct),
                ("financial_expenses", v.financial_expenses_pct),
                ("net_income", v.net_income_pct),
            ] {
                put(&format!("vertical_{name}_pct_{suffix}"), value.into());
            }
        }
        let h = &b.horizontal;
        for (name, line) in [
            ("current_assets", &h.current_assets),
            ("non_current_assets", &h.non_current_assets),
            ("current_liabilities", &h.current_liabilities),
            ("non_current_liabilities", &h.non_current_liabilities),
            ("equity", &h.equity),
            ("total_liabilities", &h.total_liabilities),
            ("total_assets", &h.total_assets),
            ("revenue", &h.revenue),
            ("net_income", &h.net_income),
        ] {
            put(&format!("growth_{name}_pct"), line.growth_pct.into());
        }
        put("cash_conversion_cycle", b.cash_conversion.cycle_days.into());

        let f = &self.financial;
        for (suffix, l, s) in [
            ("prior", &f.liquidity_prior, &f.solvency_prior),
            ("current", &f.liquidity_current, &f.solvency_current),
        ] {
            put(&format!("current_ratio_{suffix}"), l.current_ratio.into());
            put(&format!("treasury_ratio_{suffix}"), l.treasury_ratio.into());
            put(&format!("cash_ratio_{suffix}"), l.cash_ratio.into());
            put(&format!("asset_coverage_{suffix}"), s.asset_coverage.into());
            put(&format!("equity_autonomy_{suffix}"), s.equity_autonomy.into());
            put(&format!("debt_quality_{suffix}"), s.debt_quality.into());
        }
        put("short_term_debt_pct", f.debt_structure.short_term_debt_pct.into());
        put("long_term_debt_pct", f.debt_structure.long_term_debt_pct.into());
        put("own_funds_pct", f.debt_structure.own_funds_pct.into());
        put("fixed_costs", f.break_even.fixed_costs.into());
        put("contribution_margin_ratio", f.break_even.contribution_margin_ratio.into());
        put("break_even_revenue", f.break_even.break_even_revenue);
        put("stressed_revenue", f.stress.stressed_revenue.into());
        put("stressed_operating_income", f.stress.stressed_operating_income.into());
        put("stressed_net_income", f.stress.stressed_net_income.into());
        put("stressed_current_assets", f.stress.stressed_current_assets.into());
        put("stressed_working_capital", f.stress.stressed_working_capital.into());
        put("stressed_current_ratio", f.stress.stressed_current_ratio.into());

        let e = &self.economic;
        put("roa_pct_prior", e.profitability_prior.roa_pct.into());
        put("roa_pct_current", e.profitability_current.roa_pct.into());
        put("roe_pct_prior", e.profitability_prior.roe_pct.into());
        put("roe_pct_current", e.profitability_current.roe_pct.into());
        put("roa_growth_pct", e.roa_growth_pct.into());
        put("gross_margin_pct", e.margins.gross_margin_pct.into());
        put("operating_margin_pct", e.margins.operating_margin_pct.into());
        put("net_margin_pct", e.margins.net_margin_pct.into());
        put("dupont_net_margin", e.dupont.net_margin.into());
        put("dupont_asset_turnover", e.dupont.asset_turnover.into());
        put("dupont_equity_multiplier", e.dupont.equity_multiplier.into());
        put("dupont_roe_check_pct", e.dupont.roe_check_pct.into());
        put("dupont_net_margin_share_pct", e.dupont.attribution.net_margin_share_pct);
        put("dupont_asset_turnover_share_pct", e.dupont.attribution.asset_turnover_share_pct);
        put(
            "dupont_equity_multiplier_share_pct",
            e.dupont.attribution.equity_multiplier_share_pct,
        );
        put("cost_of_debt_pct", e.leverage.cost_of_debt_pct.into());
        put("debt_to_equity", e.leverage.debt_to_equity.into());
        put("leverage_spread_pct", e.leverage.spread_pct.into());
        put("leverage_effect_pct", e.leverage.leverage_effect_pct.into());

        let r = &self.recommendations;
        put("refinance_transferred", r.refinancing.transferred.into());
        put("refinance_working_capital_after", r.refinancing.working_capital_after.into());
        put("admin_cut_savings", r.admin_cost_cut.savings.into());
        put("admin_cut_operating_income_after", r.admin_cost_cut.operating_income_after.into());

        map
    }
}

/// Compute every figure, discarding the zero-guard log.
pub fn compute_ratios(input: &FinancialPeriodInput, config: &AnalysisConfig) -> RatioResult {
    let mut log = GuardLog::new();
    compute_with_log(input, config, &mut log)
}

/// Compute every figure, recording each zero-denominator substitution.
pub fn compute_with_log(
    input: &FinancialPeriodInput,
    config: &AnalysisConfig,
    log: &mut GuardLog,
) -> RatioResult {
    debug!("computing balance structure");
    let balance = balance::analyze_balance(input);
    debug!("computing liquidity, solvency and stress scenario");
    let financial = financial::analyze_financial(input, config, log);
    debug!("computing profitability");
    let economic = economic::analyze_economic(input, log);
    let recommendations = recommendations::recommendations(&input.current, config);

    RatioResult {
        balance,
        financial,
        economic,
        recommendations,
    }
}

/// Run the full analysis and wrap it in the standard output envelope.
///
/// Fails only when the configuration is invalid; degenerate figures are
/// zero-guarded and reported as warnings.
pub fn analyze_statements(
    input: &FinancialPeriodInput,
    config: &AnalysisConfig,
) -> RatioEngineResult<ComputationOutput<RatioResult>> {
    let start = Instant::now();
    config.validate()?;

    let mut warnings: Vec<String> = Vec::new();
    for (label, period) in [("prior", &input.prior), ("current", &input.current)] {
        if period.total_assets().is_zero() {
            warnings.push(format!(
                "Total assets for the {label} period are zero; vertical analysis reports 0%."
            ));
        }
    }

    let mut log = GuardLog::new();
    let result = compute_with_log(input, config, &mut log);
    warnings.extend(log.into_warnings());

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "zero_denominator": "replaced by 1",
        "total_liabilities": "current + non-current liabilities",
        "variable_costs": "cost of sales",
        "fixed_costs": "admin + selling + financial expenses",
        "shock_factor": config.shock_factor.to_string(),
        "refinance_share": config.refinance_share.to_string(),
        "admin_cut_share": config.admin_cut_share.to_string(),
    });

    Ok(with_metadata(
        "Two-period financial statement ratio analysis",
        &assumptions,
        warnings,
        elapsed,
        result,
    ))
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::financial::liquidity;
use crate::guard::GuardLog;
use crate::statement::PeriodFigures;
use crate::types::{Metric, Money, Multiple, Rate};

// ---------------------------------------------------------------------------
// Break-even
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEven {
    /// admin + selling + financial expenses
    pub fixed_costs: Money,
    /// cost of sales
    pub variable_costs: Money,
    /// (revenue - variable costs) / revenue
    pub contribution_margin_ratio: Rate,
    /// fixed costs / contribution margin ratio; infinite when the ratio is
    /// zero or negative
    pub break_even_revenue: Metric,
}

pub fn break_even(period: &PeriodFigures, log: &mut GuardLog) -> BreakEven {
    let fixed_costs = period.fixed_costs();
    let variable_costs = period.cost_of_sales;
    let contribution_margin_ratio = log.divide(
        period.revenue.saturating_sub(variable_costs),
        period.revenue,
        "current revenue",
    );

    let break_even_revenue = if contribution_margin_ratio <= Decimal::ZERO {
        Metric::PosInfinity
    } else {
        Metric::Value(log.divide(fixed_costs, contribution_margin_ratio, "contribution margin"))
    };

    BreakEven {
        fixed_costs,
        variable_costs,
        contribution_margin_ratio,
        break_even_revenue,
    }
}

// ---------------------------------------------------------------------------
// Stress scenario
// ---------------------------------------------------------------------------

/// Current period re-run with revenue scaled by `1 + shock_factor`.
///
/// Lost revenue takes its contribution margin with it; fixed costs and
/// current liabilities stay put while current assets shrink with the shock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressScenario {
    pub shock_factor: Rate,
    pub stressed_revenue: Money,
    pub revenue_change: Money,
    pub stressed_operating_income: Money,
    /// stressed operating income - financial expenses
    pub stressed_net_income: Money,
    pub stressed_current_assets: Money,
    pub stressed_working_capital: Money,
    pub stressed_current_ratio: Multiple,
    pub break_even_revenue: Metric,
    /// Stressed revenue falls short of break-even
    pub below_break_even: bool,
}

pub fn stress_scenario(
    period: &PeriodFigures,
    shock_factor: Rate,
    break_even: &BreakEven,
    log: &mut GuardLog,
) -> StressScenario {
    let scale = Decimal::ONE + shock_factor;
    let stressed_revenue = log.multiply(period.revenue, scale, "stressed revenue");
    let revenue_change = stressed_revenue.saturating_sub(period.revenue);

    let lost_margin = log.multiply(
        revenue_change,
        break_even.contribution_margin_ratio,
        "stressed operating income",
    );
    let stressed_operating_income = period.operating_income.saturating_add(lost_margin);
    let stressed_net_income = stressed_operating_income.saturating_sub(period.financial_expenses);

    let stressed = PeriodFigures {
        current_assets: log.multiply(period.current_assets, scale, "stressed current assets"),
        ..period.clone()
    };
    let stressed_current_ratio =
        liquidity::liquidity_ratios(&stressed, "current", log).current_ratio;

    let below_break_even = Metric::Value(stressed_revenue) < break_even.break_even_revenue;

    StressScenario {
        shock_factor,
        stressed_revenue,
        revenue_change,
        stressed_operating_income,
        stressed_net_income,
        stressed_current_assets: stressed.current_assets,
        stressed_working_capital: stressed
            .current_assets
            .saturating_sub(stressed.current_liabilities),
        stressed_current_ratio,
        break_even_revenue: break_even.break_even_revenue,
        below_break_even,
    }
}

//! What-if levers applied to the current period.

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::statement::PeriodFigures;
use crate::types::{Money, Rate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refinancing {
    pub share: Rate,
    /// Current liabilities moved into long-term debt
    pub transferred: Money,
    pub working_capital_before: Money,
    pub working_capital_after: Money,
    pub working_capital_gain: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminCostCut {
    pub share: Rate,
    pub savings: Money,
    pub operating_income_before: Money,
    pub operating_income_after: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub refinancing: Refinancing,
    pub admin_cost_cut: AdminCostCut,
}

pub fn refinance_short_term_debt(period: &PeriodFigures, share: Rate) -> Refinancing {
    let transferred = period.current_liabilities.saturating_mul(share);
    let working_capital_before = period.current_assets.saturating_sub(period.current_liabilities);
    let working_capital_after = working_capital_before.saturating_add(transferred);
    Refinancing {
        share,
        transferred,
        working_capital_before,
        working_capital_after,
        working_capital_gain: transferred,
    }
}

pub fn cut_admin_costs(period: &PeriodFigures, share: Rate) -> AdminCostCut {
    let savings = period.admin_expenses.saturating_mul(share);
    AdminCostCut {
        share,
        savings,
        operating_income_before: period.operating_income,
        operating_income_after: period.operating_income.saturating_add(savings),
    }
}

pub fn recommendations(period: &PeriodFigures, config: &AnalysisConfig) -> Recommendations {
    Recommendations {
        refinancing: refinance_short_term_debt(period, config.refinance_share),
        admin_cost_cut: cut_admin_costs(period, config.admin_cut_share),
    }
}

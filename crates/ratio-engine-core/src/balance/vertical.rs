use serde::{Deserialize, Serialize};

use crate::guard::pct_of;
use crate::statement::PeriodFigures;
use crate::types::{Money, Percent};

/// Balance-sheet components as a percentage of total assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerticalAnalysis {
    pub total_assets: Money,
    pub current_assets_pct: Percent,
    pub non_current_assets_pct: Percent,
    pub current_liabilities_pct: Percent,
    pub non_current_liabilities_pct: Percent,
    pub equity_pct: Percent,
}

impl VerticalAnalysis {
    /// Current plus non-current assets. 100 unless total assets are zero.
    pub fn asset_side_pct(&self) -> Percent {
        self.current_assets_pct + self.non_current_assets_pct
    }

    /// Liabilities plus equity. 100 when the balance sheet balances.
    pub fn financing_side_pct(&self) -> Percent {
        self.current_liabilities_pct + self.non_current_liabilities_pct + self.equity_pct
    }
}

/// All percentages are zero when total assets are zero.
pub fn vertical_analysis(period: &PeriodFigures) -> VerticalAnalysis {
    let total = period.total_assets();
    VerticalAnalysis {
        total_assets: total,
        current_assets_pct: pct_of(period.current_assets, total),
        non_current_assets_pct: pct_of(period.non_current_assets, total),
        current_liabilities_pct: pct_of(period.current_liabilities, total),
        non_current_liabilities_pct: pct_of(period.non_current_liabilities, total),
        equity_pct: pct_of(period.equity, total),
    }
}

/// Income-statement lines as a percentage of revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeVerticalAnalysis {
    pub revenue: Money,
    pub cost_of_sales_pct: Percent,
    pub gross_profit_pct: Percent,
    pub admin_expenses_pct: Percent,
    pub selling_expenses_pct: Percent,
    pub operating_income_pct: Percent,
    pub financial_expenses_pct: Percent,
    pub net_income_pct: Percent,
}

/// All percentages are zero when revenue is zero.
pub fn income_vertical_analysis(period: &PeriodFigures) -> IncomeVerticalAnalysis {
    let revenue = period.revenue;
    IncomeVerticalAnalysis {
        revenue,
        cost_of_sales_pct: pct_of(period.cost_of_sales, revenue),
        gross_profit_pct: pct_of(period.gross_profit, revenue),
        admin_expenses_pct: pct_of(period.admin_expenses, revenue),
        selling_expenses_pct: pct_of(period.selling_expenses, revenue),
        operating_income_pct: pct_of(period.operating_income, revenue),
        financial_expenses_pct: pct_of(period.financial_expenses, revenue),
        net_income_pct: pct_of(period.net_income, revenue),
    }
}

//! Balance-sheet structure: working capital, vertical and horizontal
//! analysis, and the cash conversion cycle. Vertical analysis also covers
//! the income statement against revenue.

pub mod horizontal;
pub mod vertical;
pub mod working_capital;

use serde::{Deserialize, Serialize};

use crate::statement::FinancialPeriodInput;
use crate::types::Money;

pub use horizontal::{growth_pct, HorizontalAnalysis, HorizontalLine};
pub use vertical::{IncomeVerticalAnalysis, VerticalAnalysis};
pub use working_capital::{CashConversionCycle, WorkingCapital};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceAnalysis {
    pub total_assets_prior: Money,
    pub total_assets_current: Money,
    pub working_capital: WorkingCapital,
    pub vertical_prior: VerticalAnalysis,
    pub vertical_current: VerticalAnalysis,
    pub income_vertical_prior: IncomeVerticalAnalysis,
    pub income_vertical_current: IncomeVerticalAnalysis,
    pub horizontal: HorizontalAnalysis,
    pub cash_conversion: CashConversionCycle,
}

pub fn analyze_balance(input: &FinancialPeriodInput) -> BalanceAnalysis {
    BalanceAnalysis {
        total_assets_prior: input.prior.total_assets(),
        total_assets_current: input.current.total_assets(),
        working_capital: working_capital::working_capital_evolution(input),
        vertical_prior: vertical::vertical_analysis(&input.prior),
        vertical_current: vertical::vertical_analysis(&input.current),
        income_vertical_prior: vertical::income_vertical_analysis(&input.prior),
        income_vertical_current: vertical::income_vertical_analysis(&input.current),
        horizontal: horizontal::horizontal_analysis(&input.prior, &input.current),
        cash_conversion: working_capital::cash_conversion_cycle(&input.cycle),
    }
}

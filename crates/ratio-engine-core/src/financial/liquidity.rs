use serde::{Deserialize, Serialize};

use crate::guard::GuardLog;
use crate::statement::PeriodFigures;
use crate::types::Multiple;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidityRatios {
    /// current assets / current liabilities
    pub current_ratio: Multiple,
    /// (cash + receivables + short-term investments) / current liabilities
    pub treasury_ratio: Multiple,
    /// cash / current liabilities
    pub cash_ratio: Multiple,
}

/// Zero current liabilities are replaced by 1, so each ratio degrades to
/// its numerator.
pub fn liquidity_ratios(
    period: &PeriodFigures,
    label: &str,
    log: &mut GuardLog,
) -> LiquidityRatios {
    let context = format!("{label} current liabilities");
    let pc = period.current_liabilities;
    LiquidityRatios {
        current_ratio: log.divide(period.current_assets, pc, &context),
        treasury_ratio: log.divide(period.quick_assets(), pc, &context),
        cash_ratio: log.divide(period.cash, pc, &context),
    }
}

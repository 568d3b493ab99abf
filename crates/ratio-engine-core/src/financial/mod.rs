//! Liquidity, solvency, break-even and the revenue stress scenario.

pub mod liquidity;
pub mod solvency;
pub mod stress;

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::guard::GuardLog;
use crate::statement::FinancialPeriodInput;

pub use liquidity::LiquidityRatios;
pub use solvency::{DebtStructure, SolvencyRatios};
pub use stress::{BreakEven, StressScenario};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialAnalysis {
    pub liquidity_prior: LiquidityRatios,
    pub liquidity_current: LiquidityRatios,
    pub solvency_prior: SolvencyRatios,
    pub solvency_current: SolvencyRatios,
    pub debt_structure: DebtStructure,
    pub break_even: BreakEven,
    pub stress: StressScenario,
}

pub fn analyze_financial(
    input: &FinancialPeriodInput,
    config: &AnalysisConfig,
    log: &mut GuardLog,
) -> FinancialAnalysis {
    let break_even = stress::break_even(&input.current, log);
    let stress = stress::stress_scenario(&input.current, config.shock_factor, &break_even, log);

    FinancialAnalysis {
        liquidity_prior: liquidity::liquidity_ratios(&input.prior, "prior", log),
        liquidity_current: liquidity::liquidity_ratios(&input.current, "current", log),
        solvency_prior: solvency::solvency_ratios(&input.prior, "prior", log),
        solvency_current: solvency::solvency_ratios(&input.current, "current", log),
        debt_structure: solvency::debt_structure(&input.current, log),
        break_even,
        stress,
    }
}

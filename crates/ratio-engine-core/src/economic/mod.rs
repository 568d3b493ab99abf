//! Returns, margins, DuPont decomposition and financial leverage.

pub mod dupont;
pub mod leverage;
pub mod profitability;

use serde::{Deserialize, Serialize};

use crate::balance::growth_pct;
use crate::guard::GuardLog;
use crate::statement::FinancialPeriodInput;
use crate::types::Percent;

pub use dupont::{DupontAttribution, DupontDecomposition, DupontFactor};
pub use leverage::LeverageEffect;
pub use profitability::{Margins, Profitability};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicAnalysis {
    pub profitability_prior: Profitability,
    pub profitability_current: Profitability,
    /// Growth of ROA between periods, itself in percent
    pub roa_growth_pct: Percent,
    pub margins: Margins,
    pub dupont: DupontDecomposition,
    pub leverage: LeverageEffect,
}

pub fn analyze_economic(input: &FinancialPeriodInput, log: &mut GuardLog) -> EconomicAnalysis {
    let profitability_prior = profitability::profitability(&input.prior, "prior", log);
    let profitability_current = profitability::profitability(&input.current, "current", log);
    let roa_growth_pct = growth_pct(profitability_current.roa_pct, profitability_prior.roa_pct);
    let leverage = leverage::leverage_effect(&input.current, profitability_current.roa_pct, log);

    EconomicAnalysis {
        profitability_prior,
        profitability_current,
        roa_growth_pct,
        margins: profitability::margins(&input.current, log),
        dupont: dupont::dupont(&input.current, log),
        leverage,
    }
}

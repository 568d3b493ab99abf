use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::engine::RatioResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Improved,
    Worsened,
    Unchanged,
}

impl Trend {
    /// Every matrix row reads higher-is-better.
    pub fn between(prior: Decimal, current: Decimal) -> Self {
        match current.cmp(&prior) {
            std::cmp::Ordering::Greater => Trend::Improved,
            std::cmp::Ordering::Less => Trend::Worsened,
            std::cmp::Ordering::Equal => Trend::Unchanged,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Trend::Improved => "Improved",
            Trend::Worsened => "Worsened",
            Trend::Unchanged => "Unchanged",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixRow {
    pub indicator: String,
    pub prior: Decimal,
    pub current: Decimal,
    pub trend: Trend,
    pub note: String,
}

impl MatrixRow {
    fn new(indicator: &str, prior: Decimal, current: Decimal, note: &str) -> Self {
        Self {
            indicator: indicator.to_string(),
            prior,
            current,
            trend: Trend::between(prior, current),
            note: note.to_string(),
        }
    }
}

pub fn comparative_matrix(result: &RatioResult) -> Vec<MatrixRow> {
    let wc = &result.balance.working_capital;
    let lp = &result.financial.liquidity_prior;
    let lc = &result.financial.liquidity_current;
    let pp = &result.economic.profitability_prior;
    let pc = &result.economic.profitability_current;

    vec![
        MatrixRow::new(
            "Working capital",
            wc.prior,
            wc.current,
            "Cushion of current assets over short-term obligations.",
        ),
        MatrixRow::new(
            "Current ratio",
            lp.current_ratio,
            lc.current_ratio,
            "Ability to cover short-term debt with current assets.",
        ),
        MatrixRow::new(
            "Treasury ratio",
            lp.treasury_ratio,
            lc.treasury_ratio,
            "Coverage of short-term debt from quick assets.",
        ),
        MatrixRow::new(
            "ROA (%)",
            pp.roa_pct,
            pc.roa_pct,
            "Operating return generated by total assets.",
        ),
        MatrixRow::new(
            "ROE (%)",
            pp.roe_pct,
            pc.roe_pct,
            "Net return to shareholders on equity.",
        ),
    ]
}

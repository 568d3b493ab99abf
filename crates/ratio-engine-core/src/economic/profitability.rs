use serde::{Deserialize, Serialize};

use crate::guard::GuardLog;
use crate::statement::PeriodFigures;
use crate::types::Percent;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profitability {
    /// Economic return: operating income / total assets × 100
    pub roa_pct: Percent,
    /// Financial return: net income / equity × 100
    pub roe_pct: Percent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub gross_margin_pct: Percent,
    pub operating_margin_pct: Percent,
    pub net_margin_pct: Percent,
}

pub fn profitability(period: &PeriodFigures, label: &str, log: &mut GuardLog) -> Profitability {
    let assets = format!("{label} total assets");
    let equity = format!("{label} equity");
    Profitability {
        roa_pct: log.percent(period.operating_income, period.total_assets(), &assets),
        roe_pct: log.percent(period.net_income, period.equity, &equity),
    }
}

pub fn margins(period: &PeriodFigures, log: &mut GuardLog) -> Margins {
    let context = "current revenue";
    Margins {
        gross_margin_pct: log.percent(period.gross_profit, period.revenue, context),
        operating_margin_pct: log.percent(period.operating_income, period.revenue, context),
        net_margin_pct: log.percent(period.net_income, period.revenue, context),
    }
}

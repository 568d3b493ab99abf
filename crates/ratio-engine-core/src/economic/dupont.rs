use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::guard::{GuardLog, HUNDRED};
use crate::statement::PeriodFigures;
use crate::types::{Metric, Multiple, Percent, Rate};

// ln() is a series approximation; a sum this close to 0 means ROE == 1
const LOG_SUM_EPSILON: Decimal = dec!(0.0000000001);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DupontFactor {
    NetMargin,
    AssetTurnover,
    EquityMultiplier,
}

impl std::fmt::Display for DupontFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DupontFactor::NetMargin => "net margin",
            DupontFactor::AssetTurnover => "asset turnover",
            DupontFactor::EquityMultiplier => "equity multiplier",
        };
        f.write_str(name)
    }
}

/// Share of ln(ROE) contributed by each factor. Only defined when every
/// factor is strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DupontAttribution {
    pub net_margin_share_pct: Metric,
    pub asset_turnover_share_pct: Metric,
    pub equity_multiplier_share_pct: Metric,
    pub primary_driver: Option<DupontFactor>,
}

impl DupontAttribution {
    fn undefined() -> Self {
        Self {
            net_margin_share_pct: Metric::NotANumber,
            asset_turnover_share_pct: Metric::NotANumber,
            equity_multiplier_share_pct: Metric::NotANumber,
            primary_driver: None,
        }
    }
}

/// ROE = net margin × asset turnover × equity multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DupontDecomposition {
    pub net_margin: Rate,
    pub asset_turnover: Multiple,
    pub equity_multiplier: Multiple,
    /// Product of the three factors × 100; reconciles with ROE
    pub roe_check_pct: Percent,
    pub attribution: DupontAttribution,
}

pub fn dupont(period: &PeriodFigures, log: &mut GuardLog) -> DupontDecomposition {
    let total_assets = period.total_assets();
    let net_margin = log.divide(period.net_income, period.revenue, "current revenue");
    let asset_turnover = log.divide(period.revenue, total_assets, "current total assets");
    let equity_multiplier = log.divide(total_assets, period.equity, "current equity");

    DupontDecomposition {
        net_margin,
        asset_turnover,
        equity_multiplier,
        roe_check_pct: {
            let margin_turnover = log.multiply(net_margin, asset_turnover, "current total assets");
            let roe = log.multiply(margin_turnover, equity_multiplier, "current equity");
            log.multiply(roe, HUNDRED, "current equity")
        },
        attribution: log_attribution(net_margin, asset_turnover, equity_multiplier),
    }
}

pub fn log_attribution(
    net_margin: Decimal,
    asset_turnover: Decimal,
    equity_multiplier: Decimal,
) -> DupontAttribution {
    let logs = [net_margin, asset_turnover, equity_multiplier]
        .map(|f| if f > Decimal::ZERO { f.checked_ln() } else { None });
    let [Some(ln_m), Some(ln_t), Some(ln_e)] = logs else {
        return DupontAttribution::undefined();
    };

    let total = ln_m + ln_t + ln_e;
    if total.abs() < LOG_SUM_EPSILON {
        return DupontAttribution::undefined();
    }

    let shares = [
        (DupontFactor::NetMargin, ln_m / total * HUNDRED),
        (DupontFactor::AssetTurnover, ln_t / total * HUNDRED),
        (DupontFactor::EquityMultiplier, ln_e / total * HUNDRED),
    ];
    let primary_driver = shares
        .iter()
        .max_by(|a, b| a.1.abs().cmp(&b.1.abs()))
        .map(|(factor, _)| *factor);

    DupontAttribution {
        net_margin_share_pct: Metric::Value(shares[0].1),
        asset_turnover_share_pct: Metric::Value(shares[1].1),
        equity_multiplier_share_pct: Metric::Value(shares[2].1),
        primary_driver,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dupont_reconciles_with_roe() {
        let period = crate::FinancialPeriodInput::sample().current;
        let mut log = GuardLog::new();
        let d = dupont(&period, &mut log);
        let roe = period.net_income / period.equity * HUNDRED;
        assert!((d.roe_check_pct - roe).abs() < dec!(0.000001));
        assert!(log.is_empty());
    }

    #[test]
    fn test_attribution_undefined_for_non_positive_factor() {
        let a = log_attribution(dec!(-0.1), dec!(2), dec!(1.5));
        assert!(a.net_margin_share_pct.is_nan());
        assert!(a.equity_multiplier_share_pct.is_nan());
        assert_eq!(a.primary_driver, None);

        let zero = log_attribution(dec!(0), dec!(2), dec!(1.5));
        assert!(zero.asset_turnover_share_pct.is_nan());
    }

    #[test]
    fn test_attribution_undefined_when_log_sum_is_zero() {
        let a = log_attribution(dec!(1), dec!(1), dec!(1));
        assert!(a.net_margin_share_pct.is_nan());
    }

    #[test]
    fn test_attribution_shares_sum_to_hundred() {
        let a = log_attribution(dec!(0.2), dec!(0.5), dec!(2.5));
        let sum = a.net_margin_share_pct.unwrap_or(Decimal::ZERO)
            + a.asset_turnover_share_pct.unwrap_or(Decimal::ZERO)
            + a.equity_multiplier_share_pct.unwrap_or(Decimal::ZERO);
        assert!((sum - dec!(100)).abs() < dec!(0.0001));
        // ln(0.2) dominates the other two factors
        assert_eq!(a.primary_driver, Some(DupontFactor::NetMargin));
    }
}

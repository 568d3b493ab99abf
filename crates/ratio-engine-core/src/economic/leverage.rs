use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::guard::GuardLog;
use crate::statement::PeriodFigures;
use crate::types::{Multiple, Percent};

/// Financial leverage identity: `ROE = ROA + D/E × (ROA − k)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeverageEffect {
    /// k: financial expenses / total liabilities × 100
    pub cost_of_debt_pct: Percent,
    /// total liabilities / equity
    pub debt_to_equity: Multiple,
    /// ROA − k
    pub spread_pct: Percent,
    pub leverage_effect_pct: Percent,
    /// ROA exceeds the cost of debt, so borrowing lifts ROE
    pub favourable: bool,
}

pub fn leverage_effect(
    period: &PeriodFigures,
    roa_pct: Percent,
    log: &mut GuardLog,
) -> LeverageEffect {
    let debt = period.total_liabilities();
    let cost_of_debt_pct =
        log.percent(period.financial_expenses, debt, "current total liabilities");
    let debt_to_equity = log.divide(debt, period.equity, "current equity");
    let spread_pct = roa_pct.saturating_sub(cost_of_debt_pct);
    let leveraged_spread = log.multiply(debt_to_equity, spread_pct, "current equity");

    LeverageEffect {
        cost_of_debt_pct,
        debt_to_equity,
        spread_pct,
        leverage_effect_pct: roa_pct.saturating_add(leveraged_spread),
        favourable: spread_pct > Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_leverage_identity_matches_roe() {
        // EBIT 1000, interest 200, no tax: NI 800. TA 10_000 = 4_000 debt + 6_000 equity
        let period = PeriodFigures {
            current_assets: dec!(6000),
            non_current_assets: dec!(4000),
            current_liabilities: dec!(1500),
            non_current_liabilities: dec!(2500),
            equity: dec!(6000),
            operating_income: dec!(1000),
            financial_expenses: dec!(200),
            net_income: dec!(800),
            ..PeriodFigures::default()
        };
        let mut log = GuardLog::new();
        let roa = dec!(10);
        let l = leverage_effect(&period, roa, &mut log);
        assert_eq!(l.cost_of_debt_pct, dec!(5));
        assert_eq!(l.spread_pct, dec!(5));
        let roe = dec!(800) / dec!(6000) * dec!(100);
        assert!((l.leverage_effect_pct - roe).abs() < dec!(0.0000001));
        assert!(l.favourable);
    }

    #[test]
    fn test_negative_leverage() {
        let period = PeriodFigures {
            current_liabilities: dec!(1000),
            equity: dec!(1000),
            financial_expenses: dec!(150),
            ..PeriodFigures::default()
        };
        let mut log = GuardLog::new();
        let l = leverage_effect(&period, dec!(8), &mut log);
        assert_eq!(l.cost_of_debt_pct, dec!(15));
        assert!(!l.favourable);
        assert_eq!(l.leverage_effect_pct, dec!(1));
    }
}

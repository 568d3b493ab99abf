use serde::{Deserialize, Serialize};

use crate::guard::{pct_of, GuardLog};
use crate::statement::PeriodFigures;
use crate::types::{Multiple, Percent};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolvencyRatios {
    /// total assets / total liabilities
    pub asset_coverage: Multiple,
    /// equity / total liabilities
    pub equity_autonomy: Multiple,
    /// current liabilities / total liabilities
    pub debt_quality: Multiple,
}

/// Composition of the financing side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtStructure {
    /// Current liabilities as % of total liabilities
    pub short_term_debt_pct: Percent,
    /// Non-current liabilities as % of total liabilities
    pub long_term_debt_pct: Percent,
    /// Equity as % of equity plus liabilities
    pub own_funds_pct: Percent,
}

pub fn solvency_ratios(period: &PeriodFigures, label: &str, log: &mut GuardLog) -> SolvencyRatios {
    let context = format!("{label} total liabilities");
    let debt = period.total_liabilities();
    SolvencyRatios {
        asset_coverage: log.divide(period.total_assets(), debt, &context),
        equity_autonomy: log.divide(period.equity, debt, &context),
        debt_quality: log.divide(period.current_liabilities, debt, &context),
    }
}

pub fn debt_structure(period: &PeriodFigures, log: &mut GuardLog) -> DebtStructure {
    let debt = period.total_liabilities();
    let context = "current total liabilities";
    DebtStructure {
        short_term_debt_pct: log.percent(period.current_liabilities, debt, context),
        long_term_debt_pct: log.percent(period.non_current_liabilities, debt, context),
        own_funds_pct: pct_of(period.equity, period.total_financing()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn period() -> PeriodFigures {
        PeriodFigures {
            current_assets: dec!(3800),
            non_current_assets: dec!(1850),
            current_liabilities: dec!(1000),
            non_current_liabilities: dec!(1000),
            equity: dec!(3650),
            ..PeriodFigures::default()
        }
    }

    #[test]
    fn test_solvency_ratios() {
        let mut log = GuardLog::new();
        let s = solvency_ratios(&period(), "current", &mut log);
        assert_eq!(s.asset_coverage, dec!(2.825));
        assert_eq!(s.equity_autonomy, dec!(1.825));
        assert_eq!(s.debt_quality, dec!(0.5));
    }

    #[test]
    fn test_debt_structure() {
        let mut log = GuardLog::new();
        let d = debt_structure(&period(), &mut log);
        assert_eq!(d.short_term_debt_pct, dec!(50));
        assert_eq!(d.long_term_debt_pct, dec!(50));
        // 3650 / 5650
        let expected = dec!(3650) / dec!(5650) * dec!(100);
        assert_eq!(d.own_funds_pct, expected);
    }

    #[test]
    fn test_debt_free_company_uses_unit_denominator() {
        let p = PeriodFigures {
            current_assets: dec!(500),
            equity: dec!(500),
            ..PeriodFigures::default()
        };
        let mut log = GuardLog::new();
        let s = solvency_ratios(&p, "prior", &mut log);
        assert_eq!(s.asset_coverage, dec!(500));
        assert_eq!(s.debt_quality, Decimal::ZERO);
        assert!(!log.is_empty());
        let d = debt_structure(&p, &mut log);
        assert_eq!(d.own_funds_pct, dec!(100));
    }
}

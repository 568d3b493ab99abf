use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::guard::{saturating_div, HUNDRED};
use crate::statement::PeriodFigures;
use crate::types::{Money, Percent};

/// Period-over-period growth in percent.
///
/// `(new - old) / old × 100`, except:
/// - `old == 0`: 0 when `new == 0`, otherwise ±100 following the sign of `new`
/// - `old < 0`: divides by `|old|` so an improvement reads as positive growth
pub fn growth_pct(new: Decimal, old: Decimal) -> Percent {
    if old.is_zero() {
        return if new.is_zero() {
            Decimal::ZERO
        } else if new.is_sign_negative() {
            -HUNDRED
        } else {
            HUNDRED
        };
    }
    saturating_div(new.saturating_sub(old), old.abs()).saturating_mul(HUNDRED)
}

/// One line of the horizontal analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizontalLine {
    pub prior: Money,
    pub current: Money,
    pub absolute_change: Money,
    pub growth_pct: Percent,
}

impl HorizontalLine {
    pub fn between(prior: Money, current: Money) -> Self {
        Self {
            prior,
            current,
            absolute_change: current.saturating_sub(prior),
            growth_pct: growth_pct(current, prior),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizontalAnalysis {
    pub current_assets: HorizontalLine,
    pub non_current_assets: HorizontalLine,
    pub current_liabilities: HorizontalLine,
    pub non_current_liabilities: HorizontalLine,
    pub equity: HorizontalLine,
    pub total_liabilities: HorizontalLine,
    pub total_assets: HorizontalLine,
    pub revenue: HorizontalLine,
    pub net_income: HorizontalLine,
}

pub fn horizontal_analysis(prior: &PeriodFigures, current: &PeriodFigures) -> HorizontalAnalysis {
    HorizontalAnalysis {
        current_assets: HorizontalLine::between(prior.current_assets, current.current_assets),
        non_current_assets: HorizontalLine::between(
            prior.non_current_assets,
            current.non_current_assets,
        ),
        current_liabilities: HorizontalLine::between(
            prior.current_liabilities,
            current.current_liabilities,
        ),
        non_current_liabilities: HorizontalLine::between(
            prior.non_current_liabilities,
            current.non_current_liabilities,
        ),
        equity: HorizontalLine::between(prior.equity, current.equity),
        total_liabilities: HorizontalLine::between(
            prior.total_liabilities(),
            current.total_liabilities(),
        ),
        total_assets: HorizontalLine::between(prior.total_assets(), current.total_assets()),
        revenue: HorizontalLine::between(prior.revenue, current.revenue),
        net_income: HorizontalLine::between(prior.net_income, current.net_income),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_growth_zero_base_special_cases() {
        assert_eq!(growth_pct(Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
        assert_eq!(growth_pct(dec!(5), Decimal::ZERO), dec!(100));
        assert_eq!(growth_pct(dec!(-5), Decimal::ZERO), dec!(-100));
    }

    #[test]
    fn test_growth_identical_values_is_zero() {
        for x in [dec!(1), dec!(-3.5), dec!(123456.78)] {
            assert_eq!(growth_pct(x, x), Decimal::ZERO);
        }
    }

    #[test]
    fn test_growth_regular() {
        assert_eq!(growth_pct(dec!(28000), dec!(25000)), dec!(12));
        assert_eq!(growth_pct(dec!(50), dec!(100)), dec!(-50));
    }

    #[test]
    fn test_growth_negative_base_uses_absolute_denominator() {
        // Loss of 200 shrinking to a loss of 100 is +50%, not -50%
        assert_eq!(growth_pct(dec!(-100), dec!(-200)), dec!(50));
        // Loss turning into profit
        assert_eq!(growth_pct(dec!(100), dec!(-100)), dec!(200));
    }

    #[test]
    fn test_horizontal_line() {
        let line = HorizontalLine::between(dec!(10000), dec!(12000));
        assert_eq!(line.absolute_change, dec!(2000));
        assert_eq!(line.growth_pct, dec!(20));
    }

    #[test]
    fn test_horizontal_analysis_totals() {
        let sample = crate::FinancialPeriodInput::sample();
        let h = horizontal_analysis(&sample.prior, &sample.current);
        assert_eq!(h.total_liabilities.prior, dec!(20000));
        assert_eq!(h.total_liabilities.current, dec!(23000));
        assert_eq!(h.total_liabilities.growth_pct, dec!(15));
        assert_eq!(h.total_assets.absolute_change, dec!(5000));
    }
}

use serde::{Deserialize, Serialize};

use crate::statement::{FinancialPeriodInput, OperatingCycle, PeriodFigures};
use crate::types::{Days, Money};

/// Working capital in both periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingCapital {
    pub prior: Money,
    pub current: Money,
    /// current - prior
    pub change: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashConversionCycle {
    pub inventory_days: Days,
    pub receivable_days: Days,
    pub payable_days: Days,
    /// inventory + receivable - payable days
    pub cycle_days: Days,
}

/// Current assets minus current liabilities.
pub fn working_capital(period: &PeriodFigures) -> Money {
    period.current_assets.saturating_sub(period.current_liabilities)
}

pub fn working_capital_evolution(input: &FinancialPeriodInput) -> WorkingCapital {
    let prior = working_capital(&input.prior);
    let current = working_capital(&input.current);
    WorkingCapital {
        prior,
        current,
        change: current.saturating_sub(prior),
    }
}

/// Simple unweighted sum of the three day counts.
pub fn cash_conversion_cycle(cycle: &OperatingCycle) -> CashConversionCycle {
    CashConversionCycle {
        inventory_days: cycle.inventory_days,
        receivable_days: cycle.receivable_days,
        payable_days: cycle.payable_days,
        cycle_days: cycle
            .inventory_days
            .saturating_add(cycle.receivable_days)
            .saturating_sub(cycle.payable_days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_working_capital_evolution() {
        let input = FinancialPeriodInput::sample();
        let wc = working_capital_evolution(&input);
        assert_eq!(wc.prior, dec!(15000));
        assert_eq!(wc.current, dec!(16000));
        assert_eq!(wc.change, dec!(1000));
    }

    #[test]
    fn test_negative_working_capital_passes_through() {
        let period = PeriodFigures {
            current_assets: dec!(500),
            current_liabilities: dec!(800),
            ..PeriodFigures::default()
        };
        assert_eq!(working_capital(&period), dec!(-300));
    }

    #[test]
    fn test_cash_conversion_cycle() {
        let cycle = OperatingCycle {
            inventory_days: dec!(45),
            receivable_days: dec!(60),
            payable_days: dec!(30),
        };
        assert_eq!(cash_conversion_cycle(&cycle).cycle_days, dec!(75));
    }

    #[test]
    fn test_cash_conversion_cycle_can_be_negative() {
        let cycle = OperatingCycle {
            inventory_days: dec!(10),
            receivable_days: dec!(5),
            payable_days: dec!(40),
        };
        assert_eq!(cash_conversion_cycle(&cycle).cycle_days, dec!(-25));
    }
}

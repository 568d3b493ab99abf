use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::RatioEngineError;
use crate::types::{Days, Money, Percent, Rate};
use crate::RatioEngineResult;

const COMMERCIAL_YEAR_DAYS: Decimal = dec!(360);
const COMMERCIAL_MONTH_DAYS: u32 = 30;

/// Elapsed time on the 360-day commercial calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommercialTime {
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
}

impl CommercialTime {
    pub fn total_days(&self) -> u64 {
        u64::from(self.years) * 360
            + u64::from(self.months) * u64::from(COMMERCIAL_MONTH_DAYS)
            + u64::from(self.weeks) * 7
            + u64::from(self.days)
    }

    /// Elapsed time in years.
    pub fn in_years(&self) -> Decimal {
        Decimal::from(self.total_days()) / COMMERCIAL_YEAR_DAYS
    }
}

fn rate_above_minus_one(rate: Rate) -> RatioEngineResult<()> {
    if rate <= dec!(-1) {
        return Err(RatioEngineError::InvalidInput {
            field: "rate".into(),
            reason: "Interest rate must be greater than -100%".into(),
        });
    }
    Ok(())
}

fn overflow(context: &str) -> RatioEngineError {
    RatioEngineError::InvalidInput {
        field: context.into(),
        reason: "Result exceeds the representable decimal range".into(),
    }
}

/// `base^exponent`, or an error when the power leaves the decimal range.
fn checked_power(base: Decimal, exponent: Decimal, context: &str) -> RatioEngineResult<Decimal> {
    base.checked_powd(exponent).ok_or_else(|| overflow(context))
}

// ---------------------------------------------------------------------------
// Simple interest
// ---------------------------------------------------------------------------

/// FV = P × (1 + i·t)
pub fn simple_future_value(principal: Money, rate: Rate, years: Decimal) -> Money {
    principal * (Decimal::ONE + rate * years)
}

/// P = FV / (1 + i·t)
pub fn simple_present_value(
    future_value: Money,
    rate: Rate,
    years: Decimal,
) -> RatioEngineResult<Money> {
    let factor = Decimal::ONE + rate * years;
    if factor.is_zero() {
        return Err(RatioEngineError::DivisionByZero {
            context: "simple interest discount factor".into(),
        });
    }
    Ok(future_value / factor)
}

/// I = P × i × t
pub fn simple_interest(principal: Money, rate: Rate, years: Decimal) -> Money {
    principal * rate * years
}

/// i = I / (P × t)
pub fn simple_rate(interest: Money, principal: Money, years: Decimal) -> RatioEngineResult<Rate> {
    let base = principal * years;
    if base.is_zero() {
        return Err(RatioEngineError::DivisionByZero {
            context: "principal x time".into(),
        });
    }
    Ok(interest / base)
}

/// t = I / (P × i), in years
pub fn simple_time(interest: Money, principal: Money, rate: Rate) -> RatioEngineResult<Decimal> {
    let base = principal * rate;
    if base.is_zero() {
        return Err(RatioEngineError::DivisionByZero {
            context: "principal x rate".into(),
        });
    }
    Ok(interest / base)
}

// ---------------------------------------------------------------------------
// Compound interest
// ---------------------------------------------------------------------------

/// FV = P × (1 + i)^t
pub fn compound_future_value(
    principal: Money,
    rate: Rate,
    years: Decimal,
) -> RatioEngineResult<Money> {
    rate_above_minus_one(rate)?;
    let factor = checked_power(Decimal::ONE + rate, years, "years")?;
    principal.checked_mul(factor).ok_or_else(|| overflow("future_value"))
}

/// P = FV / (1 + i)^t
pub fn compound_present_value(
    future_value: Money,
    rate: Rate,
    years: Decimal,
) -> RatioEngineResult<Money> {
    rate_above_minus_one(rate)?;
    let factor = checked_power(Decimal::ONE + rate, years, "years")?;
    if factor.is_zero() {
        return Err(RatioEngineError::DivisionByZero {
            context: "compound discount factor".into(),
        });
    }
    Ok(future_value / factor)
}

fn growth_multiple(future_value: Money, present_value: Money) -> RatioEngineResult<Decimal> {
    if present_value.is_zero() {
        return Err(RatioEngineError::DivisionByZero {
            context: "present value".into(),
        });
    }
    let multiple = future_value / present_value;
    if multiple <= Decimal::ZERO {
        return Err(RatioEngineError::InvalidInput {
            field: "future_value".into(),
            reason: "Future and present value must share the same sign".into(),
        });
    }
    Ok(multiple)
}

/// i = (FV / P)^(1/t) − 1
pub fn compound_rate(
    future_value: Money,
    present_value: Money,
    years: Decimal,
) -> RatioEngineResult<Rate> {
    if years.is_zero() {
        return Err(RatioEngineError::DivisionByZero {
            context: "time".into(),
        });
    }
    let multiple = growth_multiple(future_value, present_value)?;
    let annual = checked_power(multiple, Decimal::ONE / years, "years")?;
    Ok(annual - Decimal::ONE)
}

/// t = ln(FV / P) / ln(1 + i), in years
pub fn compound_time(
    future_value: Money,
    present_value: Money,
    rate: Rate,
) -> RatioEngineResult<Decimal> {
    rate_above_minus_one(rate)?;
    if rate.is_zero() {
        return Err(RatioEngineError::DivisionByZero {
            context: "ln(1 + rate)".into(),
        });
    }
    let multiple = growth_multiple(future_value, present_value)?;
    Ok(multiple.ln() / (Decimal::ONE + rate).ln())
}

// ---------------------------------------------------------------------------
// Tiered simple interest
// ---------------------------------------------------------------------------

/// One stretch of time at a fixed annual rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tranche {
    /// Annual rate in percent (12 = 12%)
    pub annual_rate_pct: Percent,
    pub days: Days,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrancheInterest {
    pub tranche: Tranche,
    pub interest: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TieredInterest {
    pub principal: Money,
    pub tranches: Vec<TrancheInterest>,
    pub total_interest: Money,
    pub future_value: Money,
}

/// Simple interest on a constant principal whose rate changes over time.
pub fn tiered_simple_interest(
    principal: Money,
    tranches: &[Tranche],
) -> RatioEngineResult<TieredInterest> {
    if tranches.is_empty() {
        return Err(RatioEngineError::InvalidInput {
            field: "tranches".into(),
            reason: "At least one rate tranche is required".into(),
        });
    }

    let mut total_interest = Decimal::ZERO;
    let mut lines = Vec::with_capacity(tranches.len());
    for (i, tranche) in tranches.iter().enumerate() {
        if tranche.days < Decimal::ZERO {
            return Err(RatioEngineError::InvalidInput {
                field: format!("tranches[{i}].days"),
                reason: "Tranche length cannot be negative".into(),
            });
        }
        let rate = tranche.annual_rate_pct / dec!(100);
        let interest = simple_interest(principal, rate, tranche.days / COMMERCIAL_YEAR_DAYS);
        total_interest += interest;
        lines.push(TrancheInterest {
            tranche: *tranche,
            interest,
        });
    }

    Ok(TieredInterest {
        principal,
        tranches: lines,
        total_interest,
        future_value: principal + total_interest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Decimal, b: Decimal) -> bool {
        (a - b).abs() < dec!(0.0001)
    }

    #[test]
    fn test_commercial_time_conversion() {
        let t = CommercialTime {
            years: 1,
            months: 6,
            weeks: 1,
            days: 3,
        };
        assert_eq!(t.total_days(), 550);
        let half = CommercialTime {
            months: 6,
            ..CommercialTime::default()
        };
        assert_eq!(half.in_years(), dec!(0.5));
    }

    #[test]
    fn test_simple_interest_family() {
        assert_eq!(simple_future_value(dec!(1000), dec!(0.24), dec!(0.5)), dec!(1120));
        assert_eq!(simple_interest(dec!(1000), dec!(0.24), dec!(0.5)), dec!(120));
        assert_eq!(simple_present_value(dec!(1120), dec!(0.24), dec!(0.5)).unwrap(), dec!(1000));
        assert_eq!(simple_rate(dec!(120), dec!(1000), dec!(0.5)).unwrap(), dec!(0.24));
        assert_eq!(simple_time(dec!(120), dec!(1000), dec!(0.24)).unwrap(), dec!(0.5));
    }

    #[test]
    fn test_simple_degenerate_inputs() {
        assert!(matches!(
            simple_rate(dec!(120), dec!(1000), Decimal::ZERO),
            Err(RatioEngineError::DivisionByZero { .. })
        ));
        assert!(matches!(
            simple_time(dec!(120), dec!(1000), Decimal::ZERO),
            Err(RatioEngineError::DivisionByZero { .. })
        ));
        assert!(simple_present_value(dec!(100), dec!(-1), dec!(1)).is_err());
    }

    #[test]
    fn test_compound_interest_family() {
        let fv = compound_future_value(dec!(1000), dec!(0.10), dec!(2)).unwrap();
        assert!(close(fv, dec!(1210)));
        let pv = compound_present_value(dec!(1210), dec!(0.10), dec!(2)).unwrap();
        assert!(close(pv, dec!(1000)));
        let rate = compound_rate(dec!(1210), dec!(1000), dec!(2)).unwrap();
        assert!(close(rate, dec!(0.10)));
        let time = compound_time(dec!(1210), dec!(1000), dec!(0.10)).unwrap();
        assert!(close(time, dec!(2)));
    }

    #[test]
    fn test_compound_degenerate_inputs() {
        assert!(compound_rate(dec!(1210), dec!(1000), Decimal::ZERO).is_err());
        assert!(compound_time(dec!(1210), dec!(1000), Decimal::ZERO).is_err());
        assert!(matches!(
            compound_time(dec!(-5), dec!(1000), dec!(0.1)),
            Err(RatioEngineError::InvalidInput { .. })
        ));
        assert!(compound_future_value(dec!(1000), dec!(-1.5), dec!(1)).is_err());
    }

    #[test]
    fn test_tiered_interest() {
        let result = tiered_simple_interest(
            dec!(10000),
            &[
                Tranche {
                    annual_rate_pct: dec!(12),
                    days: dec!(90),
                },
                Tranche {
                    annual_rate_pct: dec!(18),
                    days: dec!(180),
                },
            ],
        )
        .unwrap();
        assert_eq!(result.tranches[0].interest, dec!(300));
        assert_eq!(result.tranches[1].interest, dec!(900));
        assert_eq!(result.total_interest, dec!(1200));
        assert_eq!(result.future_value, dec!(11200));
    }

    #[test]
    fn test_tiered_requires_tranches() {
        assert!(tiered_simple_interest(dec!(100), &[]).is_err());
    }

    #[test]
    fn test_compound_overflow_is_an_error_not_a_panic() {
        // FV/PV = 1.3 over a single commercial day annualises to 1.3^360
        let one_day = CommercialTime {
            days: 1,
            ..CommercialTime::default()
        }
        .in_years();
        let err = compound_rate(dec!(1300), dec!(1000), one_day).unwrap_err();
        assert!(matches!(err, RatioEngineError::InvalidInput { .. }));

        let err = compound_future_value(dec!(1000), dec!(0.10), dec!(1000)).unwrap_err();
        assert!(matches!(err, RatioEngineError::InvalidInput { .. }));
        assert!(compound_present_value(dec!(1000), dec!(0.10), dec!(1000)).is_err());
    }
}

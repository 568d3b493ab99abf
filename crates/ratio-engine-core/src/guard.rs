//! Zero-guarded arithmetic shared by every ratio.
//!
//! The engine never fails on degenerate figures. A zero denominator is
//! replaced by 1 and the substitution is recorded so callers can surface it
//! as a warning. Quotients and products that leave the decimal range are
//! clamped to `±Decimal::MAX` and recorded the same way.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::types::{Metric, Percent};

pub const HUNDRED: Decimal = dec!(100);

fn clamped(negative: bool) -> Decimal {
    if negative {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

fn checked_quotient(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    numerator.checked_div(denominator)
}

/// `numerator / denominator` for a nonzero denominator, clamped to the
/// decimal range.
pub fn saturating_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    checked_quotient(numerator, denominator).unwrap_or_else(|| {
        clamped(numerator.is_sign_negative() != denominator.is_sign_negative())
    })
}

/// `part / total × 100`, or 0 when the total is 0.
pub fn pct_of(part: Decimal, total: Decimal) -> Percent {
    if total.is_zero() {
        Decimal::ZERO
    } else {
        saturating_div(part, total).saturating_mul(HUNDRED)
    }
}

/// Plain quotient with an explicit NaN sentinel for a zero denominator.
/// A quotient beyond the decimal range reads as +∞ when positive.
pub fn ratio_or_nan(numerator: Decimal, denominator: Decimal) -> Metric {
    if denominator.is_zero() {
        return Metric::NotANumber;
    }
    match checked_quotient(numerator, denominator) {
        Some(q) => Metric::Value(q),
        None if numerator.is_sign_negative() == denominator.is_sign_negative() => {
            Metric::PosInfinity
        }
        None => Metric::Value(Decimal::MIN),
    }
}

/// Collects every zero-denominator substitution and every clamped overflow
/// made during one computation.
#[derive(Debug, Default, Clone)]
pub struct GuardLog {
    substitutions: Vec<String>,
    overflows: Vec<String>,
}

impl GuardLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the denominator to divide by, substituting 1 for zero.
    pub fn denominator(&mut self, value: Decimal, context: &str) -> Decimal {
        if value.is_zero() {
            debug!(context = %context, "zero denominator replaced by 1");
            if !self.substitutions.iter().any(|s| s == context) {
                self.substitutions.push(context.to_string());
            }
            Decimal::ONE
        } else {
            value
        }
    }

    /// `numerator / guarded(denominator)`, clamped on overflow.
    pub fn divide(&mut self, numerator: Decimal, denominator: Decimal, context: &str) -> Decimal {
        let denominator = self.denominator(denominator, context);
        match checked_quotient(numerator, denominator) {
            Some(q) => q,
            None => {
                self.record_overflow(context);
                clamped(numerator.is_sign_negative() != denominator.is_sign_negative())
            }
        }
    }

    /// `numerator / guarded(denominator) × 100`, clamped on overflow.
    pub fn percent(&mut self, numerator: Decimal, denominator: Decimal, context: &str) -> Percent {
        let quotient = self.divide(numerator, denominator, context);
        self.multiply(quotient, HUNDRED, context)
    }

    /// `a × b`, clamped on overflow.
    pub fn multiply(&mut self, a: Decimal, b: Decimal, context: &str) -> Decimal {
        match a.checked_mul(b) {
            Some(p) => p,
            None => {
                self.record_overflow(context);
                clamped(a.is_sign_negative() != b.is_sign_negative())
            }
        }
    }

    fn record_overflow(&mut self, context: &str) {
        debug!(context = %context, "result clamped to the decimal range");
        if !self.overflows.iter().any(|s| s == context) {
            self.overflows.push(context.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.substitutions.is_empty() && self.overflows.is_empty()
    }

    pub fn contexts(&self) -> &[String] {
        &self.substitutions
    }

    pub fn into_warnings(self) -> Vec<String> {
        let substituted = self
            .substitutions
            .into_iter()
            .map(|c| format!("{c} is zero; denominator replaced by 1."));
        let clamped = self
            .overflows
            .into_iter()
            .map(|c| format!("Figure over {c} exceeds the decimal range; value clamped."));
        substituted.chain(clamped).collect()
    }
}

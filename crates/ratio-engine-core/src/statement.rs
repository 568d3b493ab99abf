//! Typed balance-sheet and income-statement input for two fiscal periods.
//!
//! Every recognised figure is an explicit field defaulting to zero, so a
//! misspelt key is caught at the boundary instead of silently reading 0.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

use crate::types::{Days, Money};
use crate::{RatioEngineError, RatioEngineResult};

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Figures for one fiscal period. Absent fields deserialise as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodFigures {
    // Balance sheet
    pub current_assets: Money,
    pub non_current_assets: Money,
    pub current_liabilities: Money,
    pub non_current_liabilities: Money,
    pub equity: Money,
    pub cash: Money,
    pub receivables: Money,
    pub short_term_investments: Money,
    pub inventory: Money,
    // Income statement
    pub revenue: Money,
    /// Treated as the variable cost base for break-even and stress.
    pub cost_of_sales: Money,
    pub gross_profit: Money,
    pub admin_expenses: Money,
    pub selling_expenses: Money,
    /// Operating expenses not broken out as admin or selling.
    pub operating_expenses: Money,
    /// EBIT
    pub operating_income: Money,
    pub financial_expenses: Money,
    pub net_income: Money,
}

/// Working-capital day counts for the current period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatingCycle {
    pub inventory_days: Days,
    pub receivable_days: Days,
    pub payable_days: Days,
}

/// Complete engine input: prior and current period plus the operating cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialPeriodInput {
    pub prior: PeriodFigures,
    pub current: PeriodFigures,
    pub cycle: OperatingCycle,
}

impl PeriodFigures {
    pub const FIELDS: &'static [&'static str] = &[
        "current_assets",
        "non_current_assets",
        "current_liabilities",
        "non_current_liabilities",
        "equity",
        "cash",
        "receivables",
        "short_term_investments",
        "inventory",
        "revenue",
        "cost_of_sales",
        "gross_profit",
        "admin_expenses",
        "selling_expenses",
        "operating_expenses",
        "operating_income",
        "financial_expenses",
        "net_income",
    ];

    pub fn total_assets(&self) -> Money {
        self.current_assets.saturating_add(self.non_current_assets)
    }

    pub fn total_liabilities(&self) -> Money {
        self.current_liabilities.saturating_add(self.non_current_liabilities)
    }

    /// Liabilities plus equity: the financing side of the balance sheet.
    pub fn total_financing(&self) -> Money {
        self.total_liabilities().saturating_add(self.equity)
    }

    /// Admin, selling and financial expenses.
    pub fn fixed_costs(&self) -> Money {
        self.admin_expenses
            .saturating_add(self.selling_expenses)
            .saturating_add(self.financial_expenses)
    }

    /// Cash, receivables and short-term investments.
    pub fn quick_assets(&self) -> Money {
        self.cash
            .saturating_add(self.receivables)
            .saturating_add(self.short_term_investments)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut Money> {
        let slot = match name {
            "current_assets" => &mut self.current_assets,
            "non_current_assets" => &mut self.non_current_assets,
            "current_liabilities" => &mut self.current_liabilities,
            "non_current_liabilities" => &mut self.non_current_liabilities,
            "equity" => &mut self.equity,
            "cash" => &mut self.cash,
            "receivables" => &mut self.receivables,
            "short_term_investments" => &mut self.short_term_investments,
            "inventory" => &mut self.inventory,
            "revenue" => &mut self.revenue,
            "cost_of_sales" => &mut self.cost_of_sales,
            "gross_profit" => &mut self.gross_profit,
            "admin_expenses" => &mut self.admin_expenses,
            "selling_expenses" => &mut self.selling_expenses,
            "operating_expenses" => &mut self.operating_expenses,
            "operating_income" => &mut self.operating_income,
            "financial_expenses" => &mut self.financial_expenses,
            "net_income" => &mut self.net_income,
            _ => return None,
        };
        Some(slot)
    }
}

impl OperatingCycle {
    pub const FIELDS: &'static [&'static str] =
        &["inventory_days", "receivable_days", "payable_days"];

    fn field_mut(&mut self, name: &str) -> Option<&mut Days> {
        match name {
            "inventory_days" => Some(&mut self.inventory_days),
            "receivable_days" => Some(&mut self.receivable_days),
            "payable_days" => Some(&mut self.payable_days),
            _ => None,
        }
    }
}

impl FinancialPeriodInput {
    /// Set one figure by its dotted key (`prior.cash`, `current.revenue`,
    /// `cycle.payable_days`).
    pub fn set_field(&mut self, key: &str, value: Decimal) -> RatioEngineResult<()> {
        let slot = match key.trim().split_once('.') {
            Some(("prior", field)) => self.prior.field_mut(field),
            Some(("current", field)) => self.current.field_mut(field),
            Some(("cycle", field)) => self.cycle.field_mut(field),
            _ => None,
        };
        match slot {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(RatioEngineError::UnknownField(key.to_string())),
        }
    }

    /// Build an input from raw `key = text` pairs as typed into a form.
    ///
    /// Unparseable text becomes 0 with a warning. Unknown keys are warnings
    /// unless `strict` is set, in which case they are rejected.
    pub fn from_fields<'a, I>(fields: I, strict: bool) -> RatioEngineResult<(Self, Vec<String>)>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut input = Self::default();
        let warnings = input.apply_fields(fields, strict)?;
        Ok((input, warnings))
    }

    /// Overlay raw `key = text` pairs on the figures already present.
    pub fn apply_fields<'a, I>(&mut self, fields: I, strict: bool) -> RatioEngineResult<Vec<String>>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut warnings = Vec::new();
        for (key, raw) in fields {
            let value = coerce_figure(key, raw, &mut warnings);
            match self.set_field(key, value) {
                Ok(()) => {}
                Err(err) if strict => return Err(err),
                Err(_) => {
                    warn!(key = %key, "ignoring unknown field");
                    warnings.push(format!("Unknown field '{key}' ignored."));
                }
            }
        }
        Ok(warnings)
    }

    /// Default figures pre-filled in the analysis form.
    pub fn sample() -> Self {
        Self {
            prior: PeriodFigures {
                current_assets: dec!(25000),
                non_current_assets: dec!(10000),
                current_liabilities: dec!(10000),
                non_current_liabilities: dec!(10000),
                equity: dec!(15000),
                cash: dec!(1000),
                receivables: dec!(1500),
                short_term_investments: dec!(100),
                revenue: dec!(85000),
                operating_income: dec!(12000),
                net_income: dec!(8000),
                ..PeriodFigures::default()
            },
            current: PeriodFigures {
                current_assets: dec!(28000),
                non_current_assets: dec!(12000),
                current_liabilities: dec!(12000),
                non_current_liabilities: dec!(11000),
                equity: dec!(17000),
                cash: dec!(1100),
                receivables: dec!(1600),
                short_term_investments: dec!(150),
                revenue: dec!(112000),
                cost_of_sales: dec!(41000),
                gross_profit: dec!(71000),
                admin_expenses: dec!(26000),
                selling_expenses: dec!(14000),
                operating_income: dec!(31000),
                financial_expenses: dec!(2000),
                net_income: dec!(20000),
                ..PeriodFigures::default()
            },
            cycle: OperatingCycle {
                inventory_days: dec!(45),
                receivable_days: dec!(60),
                payable_days: dec!(30),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Numeric coercion
// ---------------------------------------------------------------------------

/// Parse user-entered text. Empty text is zero and a comma decimal
/// separator is read as a point. Returns `None` for anything else that
/// does not parse.
pub fn parse_figure(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(Decimal::ZERO);
    }
    let normalised = trimmed.replace(',', ".");
    Decimal::from_str(&normalised)
        .or_else(|_| Decimal::from_scientific(&normalised))
        .ok()
}

/// Parse a figure, substituting 0 and recording a warning when it is not a
/// valid number.
pub fn coerce_figure(field: &str, raw: &str, warnings: &mut Vec<String>) -> Decimal {
    match parse_figure(raw) {
        Some(value) => value,
        None => {
            warn!(field = %field, raw = %raw, "non-numeric figure replaced by 0");
            warnings.push(format!(
                "Value '{raw}' for '{field}' is not a valid number; 0.0 will be used."
            ));
            Decimal::ZERO
        }
    }
}

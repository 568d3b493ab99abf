use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{Report, Section};
use crate::balance::HorizontalLine;
use crate::diagnostics::Diagnostics;
use crate::engine::RatioResult;
use crate::statement::FinancialPeriodInput;
use crate::types::{fixed, Metric};

fn money(d: Decimal) -> String {
    fixed(d, 2)
}

fn pct(d: Decimal) -> String {
    format!("{}%", fixed(d, 2))
}

fn factor(d: Decimal) -> String {
    fixed(d, 4)
}

fn metric(m: Metric) -> String {
    format!("{:.2}", m)
}

/// Maps one analysis run to a [`Report`].
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    title: String,
    generated_on: Option<NaiveDate>,
    prior_label: String,
    current_label: String,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self {
            title: "Financial Statement Ratio Analysis".to_string(),
            generated_on: None,
            prior_label: "Prior".to_string(),
            current_label: "Current".to_string(),
        }
    }
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn generated_on(mut self, date: NaiveDate) -> Self {
        self.generated_on = Some(date);
        self
    }

    /// Column labels for the two periods, e.g. "2023" and "2024".
    pub fn period_labels(mut self, prior: impl Into<String>, current: impl Into<String>) -> Self {
        self.prior_label = prior.into();
        self.current_label = current.into();
        self
    }

    pub fn build(
        &self,
        input: &FinancialPeriodInput,
        result: &RatioResult,
        diagnostics: &Diagnostics,
    ) -> Report {
        Report {
            title: self.title.clone(),
            generated_on: self.generated_on,
            sections: vec![
                self.balance_section(input, result),
                self.liquidity_section(result, diagnostics),
                self.profitability_section(result),
                self.diagnosis_section(result, diagnostics),
            ],
        }
    }

    fn balance_section(&self, input: &FinancialPeriodInput, result: &RatioResult) -> Section {
        let b = &result.balance;
        let (p, c) = (&b.vertical_prior, &b.vertical_current);
        let vertical_rows = [
            ("Current assets", p.current_assets_pct, c.current_assets_pct),
            ("Non-current assets", p.non_current_assets_pct, c.non_current_assets_pct),
            ("Current liabilities", p.current_liabilities_pct, c.current_liabilities_pct),
            (
                "Non-current liabilities",
                p.non_current_liabilities_pct,
                c.non_current_liabilities_pct,
            ),
            ("Equity", p.equity_pct, c.equity_pct),
        ]
        .into_iter()
        .map(|(name, prior, current)| vec![name.to_string(), pct(prior), pct(current)])
        .collect();

        let (ip, ic) = (&b.income_vertical_prior, &b.income_vertical_current);
        let income_rows = [
            ("Cost of sales", ip.cost_of_sales_pct, ic.cost_of_sales_pct),
            ("Gross profit", ip.gross_profit_pct, ic.gross_profit_pct),
            ("Admin expenses", ip.admin_expenses_pct, ic.admin_expenses_pct),
            ("Selling expenses", ip.selling_expenses_pct, ic.selling_expenses_pct),
            ("Operating income", ip.operating_income_pct, ic.operating_income_pct),
            ("Financial expenses", ip.financial_expenses_pct, ic.financial_expenses_pct),
            ("Net income", ip.net_income_pct, ic.net_income_pct),
        ]
        .into_iter()
        .map(|(name, prior, current)| vec![name.to_string(), pct(prior), pct(current)])
        .collect();

        let h = &b.horizontal;
        let horizontal_row = |name: &str, line: &HorizontalLine| {
            vec![
                name.to_string(),
                money(line.prior),
                money(line.current),
                money(line.absolute_change),
                pct(line.growth_pct),
            ]
        };
        let horizontal_rows = vec![
            horizontal_row("Current assets", &h.current_assets),
            horizontal_row("Non-current assets", &h.non_current_assets),
            horizontal_row("Total assets", &h.total_assets),
            horizontal_row("Current liabilities", &h.current_liabilities),
            horizontal_row("Non-current liabilities", &h.non_current_liabilities),
            horizontal_row("Total liabilities", &h.total_liabilities),
            horizontal_row("Equity", &h.equity),
            horizontal_row("Revenue", &h.revenue),
            horizontal_row("Net income", &h.net_income),
        ];

        let wc = &b.working_capital;
        let cycle = &input.cycle;
        Section::new("Balance structure")
            .key_values([
                (format!("Total assets ({})", self.prior_label), money(b.total_assets_prior)),
                (format!("Total assets ({})", self.current_label), money(b.total_assets_current)),
                (format!("Working capital ({})", self.prior_label), money(wc.prior)),
                (format!("Working capital ({})", self.current_label), money(wc.current)),
                ("Working capital change".to_string(), money(wc.change)),
            ])
            .table(
                &["Vertical analysis", self.prior_label.as_str(), self.current_label.as_str()],
                vertical_rows,
            )
            .table(
                &["Share of revenue", self.prior_label.as_str(), self.current_label.as_str()],
                income_rows,
            )
            .table(
                &[
                    "Horizontal analysis",
                    self.prior_label.as_str(),
                    self.current_label.as_str(),
                    "Change",
                    "Growth",
                ],
                horizontal_rows,
            )
            .paragraph(format!(
                "Cash conversion cycle: {} inventory days + {} receivable days \
                 - {} payable days = {} days.",
                cycle.inventory_days,
                cycle.receivable_days,
                cycle.payable_days,
                b.cash_conversion.cycle_days
            ))
    }

    fn liquidity_section(&self, result: &RatioResult, diagnostics: &Diagnostics) -> Section {
        let f = &result.financial;
        let (lp, lc) = (&f.liquidity_prior, &f.liquidity_current);
        let (sp, sc) = (&f.solvency_prior, &f.solvency_current);
        let rows = [
            ("Current ratio", lp.current_ratio, lc.current_ratio),
            ("Treasury ratio", lp.treasury_ratio, lc.treasury_ratio),
            ("Cash ratio", lp.cash_ratio, lc.cash_ratio),
            ("Asset coverage", sp.asset_coverage, sc.asset_coverage),
            ("Equity autonomy", sp.equity_autonomy, sc.equity_autonomy),
            ("Debt quality", sp.debt_quality, sc.debt_quality),
        ]
        .into_iter()
        .map(|(name, prior, current)| vec![name.to_string(), money(prior), money(current)])
        .collect();

        let bands = diagnostics
            .bands
            .iter()
            .map(|b| {
                format!(
                    "{} {} (optimal {}-{}): {}",
                    b.ratio,
                    money(b.value),
                    b.lower,
                    b.upper,
                    b.reading
                )
            })
            .collect();

        let s = &f.stress;
        let outcome = if s.below_break_even {
            "falls below break-even and the company would operate at a loss"
        } else {
            "stays above break-even and the company remains profitable"
        };

        Section::new("Liquidity and solvency")
            .table(&["Ratio", self.prior_label.as_str(), self.current_label.as_str()], rows)
            .bullets(bands)
            .key_values([
                ("Short-term debt share", pct(f.debt_structure.short_term_debt_pct)),
                ("Long-term debt share", pct(f.debt_structure.long_term_debt_pct)),
                ("Own funds share", pct(f.debt_structure.own_funds_pct)),
            ])
            .key_values([
                ("Fixed costs", money(f.break_even.fixed_costs)),
                ("Variable costs", money(f.break_even.variable_costs)),
                ("Contribution margin ratio", factor(f.break_even.contribution_margin_ratio)),
                ("Break-even revenue", metric(f.break_even.break_even_revenue)),
            ])
            .paragraph(format!(
                "Stress scenario ({}% revenue): revenue {}, operating income {}, net income {}, \
                 working capital {}, current ratio {}. Stressed revenue {outcome}.",
                fixed(s.shock_factor * Decimal::ONE_HUNDRED, 0),
                money(s.stressed_revenue),
                money(s.stressed_operating_income),
                money(s.stressed_net_income),
                money(s.stressed_working_capital),
                money(s.stressed_current_ratio),
            ))
    }

    fn profitability_section(&self, result: &RatioResult) -> Section {
        let e = &result.economic;
        let d = &e.dupont;
        let l = &e.leverage;
        let rows = vec![
            vec![
                "ROA".to_string(),
                pct(e.profitability_prior.roa_pct),
                pct(e.profitability_current.roa_pct),
            ],
            vec![
                "ROE".to_string(),
                pct(e.profitability_prior.roe_pct),
                pct(e.profitability_current.roe_pct),
            ],
        ];

        let driver = d
            .attribution
            .primary_driver
            .map(|f| format!("The main driver of ROE is {f}."))
            .unwrap_or_else(|| {
                "ROE attribution is undefined for non-positive factors.".to_string()
            });

        let reading = if l.favourable {
            "Leverage is positive: ROA exceeds the cost of debt, so debt lifts ROE."
        } else {
            "Leverage is negative: the cost of debt exceeds ROA, so debt erodes ROE."
        };

        Section::new("Profitability")
            .table(&["Return", self.prior_label.as_str(), self.current_label.as_str()], rows)
            .key_values([
                ("ROA growth", pct(e.roa_growth_pct)),
                ("Gross margin", pct(e.margins.gross_margin_pct)),
                ("Operating margin", pct(e.margins.operating_margin_pct)),
                ("Net margin", pct(e.margins.net_margin_pct)),
            ])
            .key_values([
                ("DuPont net margin", factor(d.net_margin)),
                ("DuPont asset turnover", factor(d.asset_turnover)),
                ("DuPont equity multiplier", factor(d.equity_multiplier)),
                ("DuPont ROE check", pct(d.roe_check_pct)),
                ("Net margin share", format!("{}%", metric(d.attribution.net_margin_share_pct))),
                (
                    "Asset turnover share",
                    format!("{}%", metric(d.attribution.asset_turnover_share_pct)),
                ),
                (
                    "Equity multiplier share",
                    format!("{}%", metric(d.attribution.equity_multiplier_share_pct)),
                ),
            ])
            .paragraph(driver)
            .key_values([
                ("Cost of debt (k)", pct(l.cost_of_debt_pct)),
                ("Debt / equity", factor(l.debt_to_equity)),
                ("ROA - k", pct(l.spread_pct)),
                ("ROE by leverage effect", pct(l.leverage_effect_pct)),
            ])
            .paragraph(reading)
    }

    fn diagnosis_section(&self, result: &RatioResult, diagnostics: &Diagnostics) -> Section {
        let matrix = diagnostics
            .matrix
            .iter()
            .map(|row| {
                vec![
                    row.indicator.clone(),
                    money(row.prior),
                    money(row.current),
                    row.trend.label().to_string(),
                    row.note.clone(),
                ]
            })
            .collect();

        let flags = diagnostics
            .flags
            .iter()
            .map(|f| format!("[{:?}] {}", f.severity, f.message))
            .collect();

        let r = &result.recommendations;
        let recommendations = vec![
            format!(
                "Refinance {} of current liabilities into long-term debt: {} transferred, \
                 working capital rises from {} to {}.",
                pct(r.refinancing.share * Decimal::ONE_HUNDRED),
                money(r.refinancing.transferred),
                money(r.refinancing.working_capital_before),
                money(r.refinancing.working_capital_after),
            ),
            format!(
                "Cut {} of admin expenses: {} saved, operating income rises from {} to {}.",
                pct(r.admin_cost_cut.share * Decimal::ONE_HUNDRED),
                money(r.admin_cost_cut.savings),
                money(r.admin_cost_cut.operating_income_before),
                money(r.admin_cost_cut.operating_income_after),
            ),
            format!(
                "Shorten the {} day cash conversion cycle to reduce short-term financing needs.",
                result.balance.cash_conversion.cycle_days
            ),
        ];

        Section::new("Integrated diagnosis")
            .table(
                &[
                    "Indicator",
                    self.prior_label.as_str(),
                    self.current_label.as_str(),
                    "Trend",
                    "Note",
                ],
                matrix,
            )
            .bullets(flags)
            .bullets(recommendations)
    }
}

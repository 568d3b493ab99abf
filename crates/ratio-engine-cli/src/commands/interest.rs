use clap::{Args, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use serde_json::{json, Value};

use ratio_engine_core::time_value::{self, CommercialTime, Tranche};

/// Arguments for the interest calculator
#[derive(Args)]
pub struct InterestArgs {
    #[command(subcommand)]
    pub mode: InterestMode,
}

#[derive(Subcommand)]
pub enum InterestMode {
    /// Simple interest: FV = P(1 + i·t)
    Simple(SimpleArgs),
    /// Compound interest: FV = P(1 + i)^t
    Compound(CompoundArgs),
    /// Simple interest over tranches at different annual rates
    Tiered(TieredArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SimpleSolve {
    FutureValue,
    PresentValue,
    Interest,
    Rate,
    Time,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompoundSolve {
    FutureValue,
    PresentValue,
    Rate,
    Time,
}

/// Elapsed time on the 360-day commercial calendar
#[derive(Args)]
pub struct TimeArgs {
    #[arg(long, default_value_t = 0)]
    pub years: u32,
    #[arg(long, default_value_t = 0)]
    pub months: u32,
    #[arg(long, default_value_t = 0)]
    pub weeks: u32,
    #[arg(long, default_value_t = 0)]
    pub days: u32,
}

impl TimeArgs {
    fn commercial(&self) -> CommercialTime {
        CommercialTime {
            years: self.years,
            months: self.months,
            weeks: self.weeks,
            days: self.days,
        }
    }
}

#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct SimpleArgs {
    /// Quantity to solve for
    #[arg(long)]
    pub solve: SimpleSolve,
    /// Principal (present value)
    #[arg(long)]
    pub principal: Option<Decimal>,
    /// Future value (principal plus interest)
    #[arg(long)]
    pub future_value: Option<Decimal>,
    /// Interest earned
    #[arg(long)]
    pub interest: Option<Decimal>,
    /// Annual rate as a decimal (0.24 = 24%)
    #[arg(long)]
    pub rate: Option<Decimal>,
    #[command(flatten)]
    pub time: TimeArgs,
}

#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct CompoundArgs {
    /// Quantity to solve for
    #[arg(long)]
    pub solve: CompoundSolve,
    /// Principal (present value)
    #[arg(long)]
    pub principal: Option<Decimal>,
    /// Future value
    #[arg(long)]
    pub future_value: Option<Decimal>,
    /// Annual rate as a decimal (0.10 = 10%)
    #[arg(long)]
    pub rate: Option<Decimal>,
    #[command(flatten)]
    pub time: TimeArgs,
}

#[derive(Args)]
pub struct TieredArgs {
    /// Principal
    #[arg(long)]
    pub principal: Decimal,
    /// Tranche as RATE_PCT:DAYS, e.g. --tranche 12:90 (repeatable)
    #[arg(long = "tranche", value_name = "RATE_PCT:DAYS", required = true)]
    pub tranches: Vec<String>,
}

fn required(value: Option<Decimal>, flag: &str) -> Result<Decimal, Box<dyn std::error::Error>> {
    value.ok_or_else(|| format!("--{flag} is required for this calculation").into())
}

fn parse_tranche(raw: &str) -> Result<Tranche, Box<dyn std::error::Error>> {
    let (rate, days) = raw
        .split_once(':')
        .ok_or_else(|| format!("Expected RATE_PCT:DAYS, got '{raw}'"))?;
    Ok(Tranche {
        annual_rate_pct: rate.trim().parse()?,
        days: days.trim().parse()?,
    })
}

pub fn run_interest(args: InterestArgs) -> Result<Value, Box<dyn std::error::Error>> {
    match args.mode {
        InterestMode::Simple(a) => run_simple(a),
        InterestMode::Compound(a) => run_compound(a),
        InterestMode::Tiered(a) => run_tiered(a),
    }
}

fn run_simple(a: SimpleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let time = a.time.commercial();
    let years = time.in_years();
    let answer = match a.solve {
        SimpleSolve::FutureValue => time_value::simple_future_value(
            required(a.principal, "principal")?,
            required(a.rate, "rate")?,
            years,
        ),
        SimpleSolve::PresentValue => time_value::simple_present_value(
            required(a.future_value, "future-value")?,
            required(a.rate, "rate")?,
            years,
        )?,
        SimpleSolve::Interest => time_value::simple_interest(
            required(a.principal, "principal")?,
            required(a.rate, "rate")?,
            years,
        ),
        SimpleSolve::Rate => time_value::simple_rate(
            required(a.interest, "interest")?,
            required(a.principal, "principal")?,
            years,
        )?,
        SimpleSolve::Time => time_value::simple_time(
            required(a.interest, "interest")?,
            required(a.principal, "principal")?,
            required(a.rate, "rate")?,
        )?,
    };
    Ok(json!({
        "result": {
            "solve": format!("{:?}", a.solve),
            "value": answer,
            "commercial_days": time.total_days(),
            "years": years,
        }
    }))
}

fn run_compound(a: CompoundArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let time = a.time.commercial();
    let years = time.in_years();
    let answer = match a.solve {
        CompoundSolve::FutureValue => time_value::compound_future_value(
            required(a.principal, "principal")?,
            required(a.rate, "rate")?,
            years,
        )?,
        CompoundSolve::PresentValue => time_value::compound_present_value(
            required(a.future_value, "future-value")?,
            required(a.rate, "rate")?,
            years,
        )?,
        CompoundSolve::Rate => time_value::compound_rate(
            required(a.future_value, "future-value")?,
            required(a.principal, "principal")?,
            years,
        )?,
        CompoundSolve::Time => time_value::compound_time(
            required(a.future_value, "future-value")?,
            required(a.principal, "principal")?,
            required(a.rate, "rate")?,
        )?,
    };
    Ok(json!({
        "result": {
            "solve": format!("{:?}", a.solve),
            "value": answer,
            "commercial_days": time.total_days(),
            "years": years,
        }
    }))
}

fn run_tiered(a: TieredArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let tranches = a
        .tranches
        .iter()
        .map(|t| parse_tranche(t))
        .collect::<Result<Vec<_>, _>>()?;
    let result = time_value::tiered_simple_interest(a.principal, &tranches)?;
    Ok(json!({ "result": result }))
}

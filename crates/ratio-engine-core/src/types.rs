use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%).
pub type Rate = Decimal;

/// Values already scaled by 100 (46.02 = 46.02%).
pub type Percent = Decimal;

/// Multiples (e.g., 2.8x current ratio)
pub type Multiple = Decimal;

/// Day counts
pub type Days = Decimal;

/// Renders `d` with exactly `dp` decimals, rounding half away from zero.
///
/// `Decimal`'s own precision formatting truncates, so every fixed-point
/// figure shown to a reader goes through here.
pub fn fixed(d: Decimal, dp: u32) -> String {
    let rounded = d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", dp as usize, rounded)
}

/// A computed figure that may degenerate.
///
/// Decimal has no NaN or infinity, so outputs that can be undefined carry
/// the sentinel explicitly instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Value(Decimal),
    NotANumber,
    PosInfinity,
}

impl Metric {
    pub const ZERO: Metric = Metric::Value(Decimal::ZERO);

    pub fn value(self) -> Option<Decimal> {
        match self {
            Metric::Value(d) => Some(d),
            _ => None,
        }
    }

    pub fn is_nan(self) -> bool {
        matches!(self, Metric::NotANumber)
    }

    pub fn is_infinite(self) -> bool {
        matches!(self, Metric::PosInfinity)
    }

    pub fn unwrap_or(self, fallback: Decimal) -> Decimal {
        self.value().unwrap_or(fallback)
    }

    pub fn map(self, f: impl FnOnce(Decimal) -> Decimal) -> Metric {
        match self {
            Metric::Value(d) => Metric::Value(f(d)),
            other => other,
        }
    }

    pub fn round_dp(self, dp: u32) -> Metric {
        self.map(|d| d.round_dp(dp))
    }
}

impl Default for Metric {
    fn default() -> Self {
        Metric::ZERO
    }
}

impl From<Decimal> for Metric {
    fn from(d: Decimal) -> Self {
        Metric::Value(d)
    }
}

impl PartialOrd for Metric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Metric::NotANumber, _) | (_, Metric::NotANumber) => None,
            (Metric::PosInfinity, Metric::PosInfinity) => Some(Ordering::Equal),
            (Metric::PosInfinity, Metric::Value(_)) => Some(Ordering::Greater),
            (Metric::Value(_), Metric::PosInfinity) => Some(Ordering::Less),
            (Metric::Value(a), Metric::Value(b)) => a.partial_cmp(b),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Value(d) => match f.precision() {
                Some(p) => f.write_str(&fixed(*d, p as u32)),
                None => write!(f, "{}", d),
            },
            Metric::NotANumber => f.write_str("N/A"),
            Metric::PosInfinity => f.write_str("∞"),
        }
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Metric::Value(d) => Serialize::serialize(d, serializer),
            Metric::NotANumber => serializer.serialize_str("NaN"),
            Metric::PosInfinity => serializer.serialize_str("Infinity"),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMetric {
    Number(Decimal),
    Text(String),
}

impl<'de> Deserialize<'de> for Metric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawMetric::deserialize(deserializer)? {
            RawMetric::Number(d) => Ok(Metric::Value(d)),
            RawMetric::Text(s) => match s.trim() {
                "NaN" | "nan" | "N/A" => Ok(Metric::NotANumber),
                "Infinity" | "+Infinity" | "inf" | "∞" => Ok(Metric::PosInfinity),
                other => Err(de::Error::custom(format!("invalid metric value '{other}'"))),
            },
        }
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_metric_serialises_sentinels_as_strings() {
        let json = serde_json::to_string(&vec![
            Metric::Value(dec!(2.5)),
            Metric::NotANumber,
            Metric::PosInfinity,
        ])
        .unwrap();
        assert_eq!(json, r#"["2.5","NaN","Infinity"]"#);
    }

    #[test]
    fn test_metric_deserialises_numbers_and_sentinels() {
        let parsed: Vec<Metric> =
            serde_json::from_str(r#"[1.25, "3", "NaN", "Infinity"]"#).unwrap();
        assert_eq!(parsed[0], Metric::Value(dec!(1.25)));
        assert_eq!(parsed[1], Metric::Value(dec!(3)));
        assert!(parsed[2].is_nan());
        assert!(parsed[3].is_infinite());
    }

    #[test]
    fn test_metric_rejects_garbage_text() {
        let parsed: Result<Metric, _> = serde_json::from_str(r#""lots""#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_metric_ordering() {
        assert!(Metric::Value(dec!(1_000_000)) < Metric::PosInfinity);
        assert!(Metric::Value(dec!(1)) < Metric::Value(dec!(2)));
        assert_eq!(Metric::NotANumber.partial_cmp(&Metric::ZERO), None);
    }

    #[test]
    fn test_metric_display_precision() {
        assert_eq!(format!("{:.2}", Metric::Value(dec!(46.017699))), "46.02");
        assert_eq!(format!("{:.2}", Metric::NotANumber), "N/A");
        assert_eq!(format!("{}", Metric::PosInfinity), "∞");
        assert_eq!(format!("{:.2}", Metric::Value(dec!(46.015))), "46.02");
    }

    #[test]
    fn test_fixed_rounds_instead_of_truncating() {
        assert_eq!(fixed(dec!(46.0176991), 2), "46.02");
        assert_eq!(fixed(dec!(52.3835616), 2), "52.38");
        assert_eq!(fixed(dec!(-0.125), 2), "-0.13");
        assert_eq!(fixed(dec!(7), 2), "7.00");
        assert_eq!(fixed(dec!(0.63392857), 4), "0.6339");
        assert_eq!(fixed(dec!(-29.6), 0), "-30");
    }

    #[test]
    fn test_metric_value_serialises_as_decimal_string() {
        let json = serde_json::to_string(&Metric::Value(dec!(46.0177))).unwrap();
        assert_eq!(json, r#""46.0177""#);
    }
}

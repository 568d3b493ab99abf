use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::engine::RatioResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandPosition {
    Below,
    Within,
    Above,
}

/// A ratio read against its optimal range, bounds inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandAssessment {
    pub ratio: String,
    pub value: Decimal,
    pub lower: Decimal,
    pub upper: Decimal,
    pub position: BandPosition,
    pub reading: String,
}

struct Band {
    ratio: &'static str,
    lower: Decimal,
    upper: Decimal,
    below: &'static str,
    within: &'static str,
    above: &'static str,
}

const BANDS: [Band; 4] = [
    Band {
        ratio: "Current ratio",
        lower: dec!(1.5),
        upper: dec!(2.0),
        below: "Risk of failing to meet short-term obligations.",
        within: "Efficient level of working capital.",
        above: "Excess liquidity: unproductive current assets.",
    },
    Band {
        ratio: "Treasury ratio",
        lower: dec!(0.7),
        upper: dec!(1.0),
        below: "Depends on selling inventory to pay short-term debt.",
        within: "Quick assets cover short-term debt adequately.",
        above: "Idle treasury that could be invested.",
    },
    Band {
        ratio: "Cash ratio",
        lower: dec!(0.2),
        upper: dec!(0.3),
        below: "Thin cash buffer for immediate payments.",
        within: "Adequate cash on hand.",
        above: "Cash held beyond operating needs.",
    },
    Band {
        ratio: "Asset coverage",
        lower: dec!(1.5),
        upper: dec!(2.5),
        below: "Limited guarantee offered to creditors.",
        within: "Sound guarantee for creditors.",
        above: "Under-used borrowing capacity.",
    },
];

impl Band {
    fn assess(&self, value: Decimal) -> BandAssessment {
        let (position, reading) = if value < self.lower {
            (BandPosition::Below, self.below)
        } else if value > self.upper {
            (BandPosition::Above, self.above)
        } else {
            (BandPosition::Within, self.within)
        };
        BandAssessment {
            ratio: self.ratio.to_string(),
            value,
            lower: self.lower,
            upper: self.upper,
            position,
            reading: reading.to_string(),
        }
    }
}

pub fn assess_bands(result: &RatioResult) -> Vec<BandAssessment> {
    let liquidity = &result.financial.liquidity_current;
    let values = [
        liquidity.current_ratio,
        liquidity.treasury_ratio,
        liquidity.cash_ratio,
        result.financial.solvency_current.asset_coverage,
    ];
    BANDS.iter().zip(values).map(|(band, v)| band.assess(v)).collect()
}

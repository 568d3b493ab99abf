use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Rate;
use crate::{RatioEngineError, RatioEngineResult};

/// Tunable assumptions of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Relative revenue change applied in the stress scenario (-0.30 = -30%).
    pub shock_factor: Rate,
    /// Share of current liabilities moved to long-term debt in the
    /// refinancing recommendation.
    pub refinance_share: Rate,
    /// Share of admin expenses cut in the cost recommendation.
    pub admin_cut_share: Rate,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            shock_factor: dec!(-0.30),
            refinance_share: dec!(0.30),
            admin_cut_share: dec!(0.10),
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> RatioEngineResult<()> {
        if self.shock_factor <= dec!(-1) {
            return Err(RatioEngineError::InvalidInput {
                field: "shock_factor".into(),
                reason: "Shock must leave revenue above zero (greater than -100%).".into(),
            });
        }
        for (field, share) in [
            ("refinance_share", self.refinance_share),
            ("admin_cut_share", self.admin_cut_share),
        ] {
            if share < Decimal::ZERO || share > Decimal::ONE {
                return Err(RatioEngineError::InvalidInput {
                    field: field.into(),
                    reason: "Share must lie between 0 and 1.".into(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AnalysisConfig::default();
        assert_eq!(config.shock_factor, dec!(-0.30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: AnalysisConfig = serde_json::from_str(r#"{"shock_factor": "-0.5"}"#).unwrap();
        assert_eq!(config.shock_factor, dec!(-0.5));
        assert_eq!(config.refinance_share, dec!(0.30));
    }

    #[test]
    fn test_total_revenue_wipeout_rejected() {
        let config = AnalysisConfig {
            shock_factor: dec!(-1),
            ..AnalysisConfig::default()
        };
        match config.validate().unwrap_err() {
            RatioEngineError::InvalidInput { field, .. } => assert_eq!(field, "shock_factor"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_share_above_one_rejected() {
        let config = AnalysisConfig {
            admin_cut_share: dec!(1.5),
            ..AnalysisConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

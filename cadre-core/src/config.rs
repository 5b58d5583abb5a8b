//! Configuration types

use crate::{CadreResult, ConfigError, PerformanceScores};
use serde::{Deserialize, Serialize};

/// Engine configuration.
///
/// These values are policy, not invariants: the state machine shape is fixed,
/// but the baseline scores and scoring weights can be tuned per deployment.
/// `Default` yields the canonical values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CadreConfig {
    /// Performance assigned when onboarding completes
    pub onboarding_baseline: PerformanceScores,
    /// Highest reachable level; promotions at this level are no-ops
    pub max_level: u8,
    /// Compliance score never drops below this floor
    pub compliance_floor: u32,
    /// Score penalty per high-risk agent
    pub high_risk_penalty: u32,
    /// Score penalty per agent holding a compliance override
    pub override_penalty: u32,
    /// Model identifier assigned to newly created agents
    pub default_model: String,
}

impl Default for CadreConfig {
    fn default() -> Self {
        Self {
            onboarding_baseline: PerformanceScores::new(70, 75, 80),
            max_level: 5,
            compliance_floor: 60,
            high_risk_penalty: 5,
            override_penalty: 10,
            default_model: "gpt-4o-mini".to_string(),
        }
    }
}

impl CadreConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> CadreResult<()> {
        if self.onboarding_baseline.validate().is_err() {
            return Err(ConfigError::InvalidValue {
                field: "onboarding_baseline",
                value: format!("{:?}", self.onboarding_baseline),
                reason: "scores must be within 0-100",
            }
            .into());
        }

        if self.max_level == 0 || self.max_level > 5 {
            return Err(ConfigError::InvalidValue {
                field: "max_level",
                value: self.max_level.to_string(),
                reason: "max_level must be between 1 and 5",
            }
            .into());
        }

        if self.compliance_floor > 100 {
            return Err(ConfigError::InvalidValue {
                field: "compliance_floor",
                value: self.compliance_floor.to_string(),
                reason: "compliance_floor must be at most 100",
            }
            .into());
        }

        if self.default_model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "default_model",
                value: self.default_model.clone(),
                reason: "default_model must not be empty",
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(CadreConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_baseline_matches_onboarding_contract() {
        let config = CadreConfig::default();
        assert_eq!(config.onboarding_baseline, PerformanceScores::new(70, 75, 80));
        assert_eq!(config.max_level, 5);
        assert_eq!(config.compliance_floor, 60);
    }

    #[test]
    fn test_invalid_max_level_rejected() {
        let config = CadreConfig {
            max_level: 0,
            ..CadreConfig::default()
        };
        assert!(config.validate().is_err());

        let config = CadreConfig {
            max_level: 9,
            ..CadreConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_floor_rejected() {
        let config = CadreConfig {
            compliance_floor: 101,
            ..CadreConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

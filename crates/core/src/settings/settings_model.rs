use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    COMMIT_DECIMAL_PRECISION, MAX_DECIMAL_PRECISION, RATIO_BUDGET, TYPING_DECIMAL_PRECISION,
};
use crate::errors::{Error, Result};

/// Tunables for the allocation engine.
///
/// Missing fields fall back to the defaults when deserialized, so a host can
/// override a single value (e.g. `{"commitScale": 2}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AllocationSettings {
    /// Total percentage available per asset
    pub ratio_budget: Decimal,
    /// Decimal places kept for committed edits
    pub commit_scale: u32,
    /// Decimal places kept while typing
    pub typing_scale: u32,
}

impl Default for AllocationSettings {
    fn default() -> Self {
        Self {
            ratio_budget: RATIO_BUDGET,
            commit_scale: COMMIT_DECIMAL_PRECISION,
            typing_scale: TYPING_DECIMAL_PRECISION,
        }
    }
}

impl AllocationSettings {
    /// Parses settings from JSON and validates them.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: AllocationSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.ratio_budget <= Decimal::ZERO {
            return Err(self.reject(format!(
                "ratioBudget must be positive, got {}",
                self.ratio_budget
            )));
        }
        if self.typing_scale > MAX_DECIMAL_PRECISION {
            return Err(self.reject(format!(
                "typingScale must be at most {}, got {}",
                MAX_DECIMAL_PRECISION, self.typing_scale
            )));
        }
        if self.commit_scale > self.typing_scale {
            return Err(self.reject(format!(
                "commitScale ({}) must not exceed typingScale ({})",
                self.commit_scale, self.typing_scale
            )));
        }
        Ok(())
    }

    fn reject(&self, reason: String) -> Error {
        warn!("Rejecting allocation settings {:?}: {}", self, reason);
        Error::InvalidConfigValue(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_are_valid() {
        let settings = AllocationSettings::default();
        assert_eq!(settings.ratio_budget, dec!(100));
        assert_eq!(settings.commit_scale, 1);
        assert_eq!(settings.typing_scale, 20);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = AllocationSettings::from_json(r#"{"commitScale": 2}"#).unwrap();
        assert_eq!(settings.commit_scale, 2);
        assert_eq!(settings.typing_scale, 20);
        assert_eq!(settings.ratio_budget, dec!(100));
    }

    #[test]
    fn test_rejects_non_positive_budget() {
        let settings = AllocationSettings {
            ratio_budget: Decimal::ZERO,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(Error::InvalidConfigValue(_))
        ));
    }

    #[test]
    fn test_rejects_commit_scale_above_typing_scale() {
        let result = AllocationSettings::from_json(r#"{"commitScale": 5, "typingScale": 3}"#);
        assert!(matches!(result, Err(Error::InvalidConfigValue(_))));
    }

    #[test]
    fn test_rejects_scale_beyond_decimal_precision() {
        let result = AllocationSettings::from_json(r#"{"typingScale": 29}"#);
        assert!(matches!(result, Err(Error::InvalidConfigValue(_))));
    }

    #[test]
    fn test_malformed_json_is_validation_error() {
        let result = AllocationSettings::from_json("{not json");
        assert!(matches!(result, Err(Error::Validation(_))));
    }
}

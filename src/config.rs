use serde::Deserialize;

use crate::error::{LedgerError, Result};

pub const DEFAULT_EXCESS_MULTIPLIER: u64 = 2;

/// Tunables for an [`crate::Engine`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// A debit above `excess_multiplier` times the prior average is scored.
    #[serde(default = "default_excess_multiplier")]
    pub excess_multiplier: u64,
}

fn default_excess_multiplier() -> u64 {
    DEFAULT_EXCESS_MULTIPLIER
}

impl EngineConfig {
    pub fn with_multiplier(excess_multiplier: u64) -> Self {
        EngineConfig { excess_multiplier }
    }

    pub fn validate(&self) -> Result<()> {
        if self.excess_multiplier == 0 {
            return Err(LedgerError::InvalidConfig(
                "excess_multiplier must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            excess_multiplier: DEFAULT_EXCESS_MULTIPLIER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_doubles_the_average() {
        let config = EngineConfig::default();
        assert_eq!(config.excess_multiplier, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_multiplier_is_rejected() {
        assert!(matches!(
            EngineConfig::with_multiplier(0).validate(),
            Err(LedgerError::InvalidConfig(_))
        ));
    }
}

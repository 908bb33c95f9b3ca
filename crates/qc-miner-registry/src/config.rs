//! Configuration for the Miner Registry

use crate::domain::errors::ConfigError;
use crate::domain::value_objects::{Address, Amount};
use serde::{Deserialize, Serialize};

/// 1 ether in base units.
const DEFAULT_BOND_WEI: u128 = 1_000_000_000_000_000_000;

/// Registry configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Fixed bond ("ticket") required to join, in base units
    pub bond: Amount,
    /// Genesis committee allowed to evict miners
    #[serde(default)]
    pub committee: Vec<Address>,
}

impl RegistryConfig {
    /// Config with the given bond and genesis committee.
    pub fn new(bond: Amount, committee: Vec<Address>) -> Self {
        Self { bond, committee }
    }

    /// Parse and validate a JSON config document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the registry cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bond.is_zero() {
            return Err(ConfigError::ZeroBond);
        }
        Ok(())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            bond: Amount::from(DEFAULT_BOND_WEI),
            committee: Vec::new(),
        }
    }
}

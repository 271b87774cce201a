use netgen_core::constants::REWARD_ALLOCATION_INDEX;
use netgen_core::error::NetgenError;

use crate::config::GenesisConfig;

/// Genesis template of the built-in local network.
pub const LOCAL_GENESIS_JSON: &str = include_str!("../templates/local.json");

/// A genesis document that generated stakers can be folded into.
///
/// Construction checks that the reward allocation exists, so assembly never
/// has to.
#[derive(Clone, Debug, PartialEq)]
pub struct GenesisTemplate {
    config: GenesisConfig,
}

impl GenesisTemplate {
    /// The compiled-in local network template.
    pub fn local() -> Result<Self, NetgenError> {
        Self::from_json(LOCAL_GENESIS_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, NetgenError> {
        let config: GenesisConfig =
            serde_json::from_str(json).map_err(NetgenError::TemplateParse)?;
        Self::try_from(config)
    }

    pub fn config(&self) -> &GenesisConfig {
        &self.config
    }

    /// Address credited with staking rewards of every generated staker.
    pub fn reward_address(&self) -> &str {
        // Index checked in `try_from`.
        &self.config.allocations[REWARD_ALLOCATION_INDEX].avax_addr
    }
}

impl TryFrom<GenesisConfig> for GenesisTemplate {
    type Error = NetgenError;

    fn try_from(config: GenesisConfig) -> Result<Self, Self::Error> {
        if config.allocations.len() <= REWARD_ALLOCATION_INDEX {
            return Err(NetgenError::MissingRewardAllocation {
                index: REWARD_ALLOCATION_INDEX,
                found: config.allocations.len(),
            });
        }
        Ok(Self { config })
    }
}

use netgen_core::types::NodeId;
use serde::{Deserialize, Serialize};

/// Genesis document of a local test network.
///
/// Only `allocations` and `initial_stakers` are touched by assembly; every
/// other field passes through unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenesisConfig {
    #[serde(rename = "networkID")]
    pub network_id: u32,
    #[serde(default)]
    pub allocations: Vec<Allocation>,
    pub start_time: u64,
    pub initial_stake_duration: u64,
    pub initial_stake_duration_offset: u64,
    #[serde(default)]
    pub initial_staked_funds: Vec<String>,
    #[serde(default)]
    pub initial_stakers: Vec<Staker>,
    #[serde(default)]
    pub c_chain_genesis: String,
    #[serde(default)]
    pub message: String,
}

/// Funds assigned at genesis to an address pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub eth_addr: String,
    pub avax_addr: String,
    pub initial_amount: u64,
    #[serde(default)]
    pub unlock_schedule: Vec<LockedAmount>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LockedAmount {
    pub amount: u64,
    #[serde(default)]
    pub locktime: u64,
}

/// An initial validator registered in genesis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staker {
    #[serde(rename = "nodeID")]
    pub node_id: NodeId,
    pub reward_address: String,
    /// Basis points charged to delegators.
    pub delegation_fee: u32,
}

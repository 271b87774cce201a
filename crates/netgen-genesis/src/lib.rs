//! netgen-genesis
//!
//! Assembles a local test network: one staking identity per node, each
//! registered as an initial staker in a copy of the genesis template.
//!
//! Identities are generated independently (in parallel by default). The
//! fold into the genesis document is serial and follows node order, so
//! `key_pairs()[i]` always corresponds to the i-th generated staker.

pub mod config;
pub mod template;

pub use config::{Allocation, GenesisConfig, LockedAmount, Staker};
pub use template::{GenesisTemplate, LOCAL_GENESIS_JSON};

use netgen_core::constants::DELEGATION_FEE;
use netgen_core::error::NetgenError;
use netgen_crypto::{IdentityGenerator, KeyPair, RsaIdentityGenerator};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

/// How identities are produced during assembly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AssemblyMode {
    /// Generate identities on the rayon thread pool.
    #[default]
    Parallel,
    /// Generate identities one after another on the calling thread.
    Sequential,
}

/// Bootstrap material of a test network: the genesis document and the
/// staking identity of every node it registers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    genesis: String,
    key_pairs: Vec<KeyPair>,
}

impl Network {
    /// Serialized genesis JSON.
    pub fn genesis(&self) -> &str {
        &self.genesis
    }

    pub fn key_pairs(&self) -> &[KeyPair] {
        &self.key_pairs
    }

    /// Parse the genesis document back into its schema.
    pub fn genesis_config(&self) -> Result<GenesisConfig, NetgenError> {
        serde_json::from_str(&self.genesis).map_err(NetgenError::TemplateParse)
    }
}

/// Build a network of `size` nodes from the built-in local template using
/// 4096-bit RSA staking keys.
pub fn new_network(size: usize) -> Result<Network, NetgenError> {
    let template = GenesisTemplate::local()?;
    assemble_network(
        &template,
        size,
        &RsaIdentityGenerator::default(),
        AssemblyMode::default(),
    )
}

/// Generate `size` identities and register each one as a staker in a copy of
/// `template`.
///
/// Fails on the first identity that cannot be generated; no partial network
/// is ever returned.
pub fn assemble_network<G>(
    template: &GenesisTemplate,
    size: usize,
    generator: &G,
    mode: AssemblyMode,
) -> Result<Network, NetgenError>
where
    G: IdentityGenerator + ?Sized,
{
    info!(size, ?mode, "assembling test network");

    let key_pairs = generate_identities(generator, size, mode)?;

    let mut config = template.config().clone();
    let reward_address = template.reward_address();
    config.initial_stakers.reserve(key_pairs.len());
    for key_pair in &key_pairs {
        config.initial_stakers.push(Staker {
            node_id: key_pair.node_id(),
            reward_address: reward_address.to_string(),
            delegation_fee: DELEGATION_FEE,
        });
    }

    let genesis = serde_json::to_string(&config).map_err(NetgenError::TemplateSerialize)?;
    info!(
        stakers = config.initial_stakers.len(),
        reward_address, "genesis document assembled"
    );

    Ok(Network { genesis, key_pairs })
}

fn generate_identities<G>(
    generator: &G,
    size: usize,
    mode: AssemblyMode,
) -> Result<Vec<KeyPair>, NetgenError>
where
    G: IdentityGenerator + ?Sized,
{
    let generate_one = |index: usize| -> Result<KeyPair, NetgenError> {
        let key_pair = generator
            .generate()
            .map_err(|source| NetgenError::Identity { index, source })?;
        debug!(index, node_id = %key_pair.node_id(), "node identity ready");
        Ok(key_pair)
    };

    match mode {
        AssemblyMode::Sequential => (0..size).map(generate_one).collect(),
        // Indexed collect keeps node order.
        AssemblyMode::Parallel => (0..size).into_par_iter().map(generate_one).collect(),
    }
}

//! End-to-end network assembly with real RSA staking identities.
//!
//! Keys are 2048-bit here to keep the suite fast, except for the single
//! node built through `new_network`, which uses the 4096-bit default.
//!
//! Run with:
//!   cargo test -p netgen-genesis --test network

use std::collections::HashSet;

use netgen_core::constants::{DELEGATION_FEE, KEY_PEM_LABEL, STAKING_KEY_BITS};
use netgen_core::types::{NodeId, ShortId};
use netgen_core::NetgenError;
use netgen_crypto::{node_id_from_cert_der, RsaIdentityGenerator};
use netgen_genesis::{
    assemble_network, new_network, AssemblyMode, GenesisTemplate, Network, Staker,
};
use rsa::pkcs8::DecodePrivateKey;
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Sign, RsaPrivateKey};
use sha2::{Digest, Sha256};
use x509_parser::parse_x509_certificate;

fn generator() -> RsaIdentityGenerator {
    RsaIdentityGenerator::with_key_bits(2048)
}

fn build(template: &GenesisTemplate, size: usize) -> Network {
    assemble_network(template, size, &generator(), AssemblyMode::Parallel)
        .expect("network assembly must succeed")
}

/// Local template with one pre-registered staker, so growth is measured
/// against a non-empty baseline.
fn template_with_existing_staker() -> GenesisTemplate {
    let mut config = GenesisTemplate::local().unwrap().config().clone();
    config.initial_stakers.push(Staker {
        node_id: NodeId::from(ShortId::from_bytes([0xab; 20])),
        reward_address: "X-local1g65uqn6t77p656w64023nh8nd9updzmxyymev2".into(),
        delegation_fee: 20_000,
    });
    GenesisTemplate::try_from(config).unwrap()
}

#[test]
fn every_node_becomes_a_staker() {
    let template = template_with_existing_staker();
    let network = build(&template, 3);
    let genesis = network.genesis_config().unwrap();

    assert_eq!(network.key_pairs().len(), 3);
    assert_eq!(genesis.initial_stakers.len(), 1 + 3);
    assert_eq!(genesis.initial_stakers[0], template.config().initial_stakers[0]);

    let generated = &genesis.initial_stakers[1..];
    for (staker, key_pair) in generated.iter().zip(network.key_pairs()) {
        assert_eq!(staker.node_id, key_pair.node_id());
        assert_eq!(staker.reward_address, template.reward_address());
        assert_eq!(staker.delegation_fee, DELEGATION_FEE);
    }

    // Each node ID shows up exactly once in the document text.
    for key_pair in network.key_pairs() {
        let id = key_pair.node_id().to_string();
        assert_eq!(network.genesis().matches(&id).count(), 1, "{id}");
    }
}

#[test]
fn node_ids_are_distinct() {
    let network = build(&GenesisTemplate::local().unwrap(), 4);
    let ids: HashSet<_> = network.key_pairs().iter().map(|k| k.node_id()).collect();
    assert_eq!(ids.len(), 4);
}

#[test]
fn certificates_verify_and_ids_rederive() {
    let network = build(&GenesisTemplate::local().unwrap(), 2);

    for key_pair in network.key_pairs() {
        let der = key_pair.certificate_der().unwrap();
        let (_, cert) = parse_x509_certificate(&der).unwrap();

        let key_block = pem::parse(key_pair.private_key_pem()).unwrap();
        assert_eq!(key_block.tag(), KEY_PEM_LABEL);
        let public = RsaPrivateKey::from_pkcs8_der(key_block.contents())
            .unwrap()
            .to_public_key();
        let digest = Sha256::digest(cert.tbs_certificate.as_ref());
        public
            .verify(
                Pkcs1v15Sign::new::<Sha256>(),
                &digest,
                &cert.signature_value.data,
            )
            .expect("self-signature");

        assert_eq!(node_id_from_cert_der(&der).unwrap(), key_pair.node_id());
        assert_eq!(
            key_pair
                .node_id()
                .to_string()
                .parse::<NodeId>()
                .unwrap(),
            key_pair.node_id()
        );
    }

    // Shared serial number 0 across certificates is expected: none of them
    // chain to a common issuer.
    let serials: Vec<Vec<u8>> = network
        .key_pairs()
        .iter()
        .map(|k| {
            let der = k.certificate_der().unwrap();
            let (_, cert) = parse_x509_certificate(&der).unwrap();
            cert.raw_serial().to_vec()
        })
        .collect();
    assert!(serials.iter().all(|s| s == &[0u8]));
}

#[test]
fn sequential_and_parallel_produce_the_same_shape() {
    let template = GenesisTemplate::local().unwrap();
    let network = assemble_network(&template, 2, &generator(), AssemblyMode::Sequential).unwrap();
    let genesis = network.genesis_config().unwrap();
    assert_eq!(genesis.initial_stakers.len(), 2);
    assert_eq!(genesis.initial_stakers[0].node_id, network.key_pairs()[0].node_id());
    assert_eq!(genesis.initial_stakers[1].node_id, network.key_pairs()[1].node_id());
}

#[test]
fn empty_network_keeps_baseline_stakers() {
    let template = template_with_existing_staker();
    let network = build(&template, 0);
    assert!(network.key_pairs().is_empty());
    assert_eq!(
        network.genesis_config().unwrap().initial_stakers,
        template.config().initial_stakers
    );
}

#[test]
fn custom_template_needs_reward_allocation() {
    let json = r#"{
        "networkID": 1337,
        "allocations": [
            { "ethAddr": "0x00", "avaxAddr": "X-custom1only", "initialAmount": 1 }
        ],
        "startTime": 0,
        "initialStakeDuration": 0,
        "initialStakeDurationOffset": 0
    }"#;
    assert!(matches!(
        GenesisTemplate::from_json(json),
        Err(NetgenError::MissingRewardAllocation { index: 1, found: 1 })
    ));
}

#[test]
fn default_network_uses_local_template_and_full_size_keys() {
    let network = new_network(1).unwrap();
    let local = GenesisTemplate::local().unwrap();
    let genesis = network.genesis_config().unwrap();

    assert_eq!(network.key_pairs().len(), 1);
    assert_eq!(genesis.initial_stakers.len(), 1);
    assert_eq!(genesis.network_id, local.config().network_id);

    let key_pair = &network.key_pairs()[0];
    let staker = &genesis.initial_stakers[0];
    assert_eq!(staker.node_id, key_pair.node_id());
    assert_eq!(staker.reward_address, local.reward_address());
    assert_eq!(staker.delegation_fee, DELEGATION_FEE);
    assert_eq!(key_pair.derive_node_id().unwrap(), key_pair.node_id());

    let key_block = pem::parse(key_pair.private_key_pem()).unwrap();
    let key = RsaPrivateKey::from_pkcs8_der(key_block.contents()).unwrap();
    assert_eq!(key.size() * 8, STAKING_KEY_BITS);
}

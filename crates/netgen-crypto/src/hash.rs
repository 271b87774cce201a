use netgen_core::error::IdentityError;
use netgen_core::types::{NodeId, ShortId};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Compute SHA-256 of arbitrary bytes → 32-byte array.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// RIPEMD-160(SHA-256(bytes)): the address of a piece of public key material.
pub fn pubkey_bytes_to_address(bytes: &[u8]) -> Vec<u8> {
    Ripemd160::digest(sha256(bytes)).to_vec()
}

/// Derive a NodeId from the DER encoding of a staking certificate.
///
/// The hash covers the whole certificate, not just its public key.
pub fn node_id_from_cert_der(cert_der: &[u8]) -> Result<NodeId, IdentityError> {
    let address = pubkey_bytes_to_address(cert_der);
    let short = ShortId::try_from(address.as_slice()).map_err(|_| {
        IdentityError::IdentifierDerivation(format!(
            "expected a {}-byte address, got {}",
            netgen_core::SHORT_ID_LEN,
            address.len()
        ))
    })?;
    Ok(NodeId::from(short))
}

use netgen_core::error::IdentityError;
use netgen_core::types::NodeId;
use serde::Serialize;
use zeroize::Zeroize;

use crate::hash::node_id_from_cert_der;

/// A staking identity: self-signed certificate, its private key, and the
/// NodeId derived from the certificate.
///
/// Immutable once built. The private key PEM is wiped from memory on drop.
#[derive(Clone, Serialize)]
pub struct KeyPair {
    #[serde(rename = "cert")]
    certificate_pem: String,
    #[serde(rename = "key")]
    private_key_pem: String,
    #[serde(rename = "id")]
    node_id: NodeId,
}

impl KeyPair {
    pub fn new(certificate_pem: String, private_key_pem: String, node_id: NodeId) -> Self {
        Self {
            certificate_pem,
            private_key_pem,
            node_id,
        }
    }

    pub fn certificate_pem(&self) -> &str {
        &self.certificate_pem
    }

    pub fn private_key_pem(&self) -> &str {
        &self.private_key_pem
    }

    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    /// Decode the certificate back to its DER bytes.
    pub fn certificate_der(&self) -> Result<Vec<u8>, IdentityError> {
        let block = pem::parse(&self.certificate_pem)
            .map_err(|e| IdentityError::Encoding(e.to_string()))?;
        Ok(block.into_contents())
    }

    /// Recompute the NodeId from the certificate encoding.
    pub fn derive_node_id(&self) -> Result<NodeId, IdentityError> {
        node_id_from_cert_der(&self.certificate_der()?)
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.private_key_pem.zeroize();
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KeyPair {{ node_id: {} }}", self.node_id)
    }
}

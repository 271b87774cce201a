//! Staking identity generation.
//!
//! Each identity is a fresh RSA key, a self-signed X.509 certificate for it,
//! and a NodeId hashed from the certificate's DER encoding.

use chrono::{DateTime, Months, Utc};
use netgen_core::constants::{
    CERT_NOT_BEFORE_TIMESTAMP, CERT_VALIDITY_YEARS, KEY_PEM_LABEL, STAKING_KEY_BITS,
};
use netgen_core::error::IdentityError;
use pem::{EncodeConfig, LineEnding, Pem};
use rand::rngs::OsRng;
use rcgen::{
    CertificateParams, DistinguishedName, IsCa, KeyUsagePurpose, SerialNumber, PKCS_RSA_SHA256,
};
use rsa::pkcs8::EncodePrivateKey;
use rsa::RsaPrivateKey;
use time::OffsetDateTime;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use crate::hash::node_id_from_cert_der;
use crate::keypair::KeyPair;

/// Source of staking identities.
///
/// Implementations must be callable from several threads at once; every call
/// yields an independent identity.
pub trait IdentityGenerator: Send + Sync {
    fn generate(&self) -> Result<KeyPair, IdentityError>;
}

/// Generates RSA staking keys with self-signed certificates.
#[derive(Clone, Debug)]
pub struct RsaIdentityGenerator {
    key_bits: usize,
}

impl Default for RsaIdentityGenerator {
    fn default() -> Self {
        Self {
            key_bits: STAKING_KEY_BITS,
        }
    }
}

impl RsaIdentityGenerator {
    /// A generator with a non-standard modulus size. Only tests should need this.
    pub fn with_key_bits(key_bits: usize) -> Self {
        Self { key_bits }
    }

    pub fn key_bits(&self) -> usize {
        self.key_bits
    }
}

impl IdentityGenerator for RsaIdentityGenerator {
    fn generate(&self) -> Result<KeyPair, IdentityError> {
        // ── 1. Key ───────────────────────────────────────────────────────────
        let key = RsaPrivateKey::new(&mut OsRng, self.key_bits)
            .map_err(|e| IdentityError::KeyGeneration(e.to_string()))?;

        // ── 2. PKCS#8 PEM ────────────────────────────────────────────────────
        let key_der = key
            .to_pkcs8_der()
            .map_err(|e| IdentityError::Encoding(format!("couldn't marshal private key: {e}")))?;
        let key_pem = encode_key_pem(key_der.as_bytes());

        // ── 3. Self-signed certificate ───────────────────────────────────────
        let signing_key = rcgen::KeyPair::from_pem_and_sign_algo(&key_pem, &PKCS_RSA_SHA256)
            .map_err(|e| IdentityError::CertificateCreation(e.to_string()))?;
        let params = certificate_params(Utc::now())?;
        let cert = params
            .self_signed(&signing_key)
            .map_err(|e| IdentityError::CertificateCreation(e.to_string()))?;

        // ── 4. NodeId ────────────────────────────────────────────────────────
        let node_id = node_id_from_cert_der(cert.der())?;
        debug!(node_id = %node_id, key_bits = self.key_bits, "generated staking identity");

        Ok(KeyPair::new(cert.pem(), key_pem.to_string(), node_id))
    }
}

/// PEM-wrap a PKCS#8 key. The intermediate copy of the DER is wiped.
fn encode_key_pem(key_der: &[u8]) -> Zeroizing<String> {
    let block = Pem::new(KEY_PEM_LABEL, key_der);
    let key_pem = Zeroizing::new(pem::encode_config(
        &block,
        EncodeConfig::new().set_line_ending(LineEnding::LF),
    ));
    block.into_contents().zeroize();
    key_pem
}

/// Certificate template for a staking identity generated at `now`.
///
/// Every certificate carries serial number 0. They are all self-signed and
/// never chained under a shared issuer, so the collision is harmless.
fn certificate_params(now: DateTime<Utc>) -> Result<CertificateParams, IdentityError> {
    let (not_before, not_after) = validity_window(now)?;

    let mut params = CertificateParams::default();
    params.distinguished_name = DistinguishedName::new();
    params.serial_number = Some(SerialNumber::from_slice(&[0]));
    params.not_before = not_before;
    params.not_after = not_after;
    params.key_usages = vec![
        KeyUsagePurpose::DigitalSignature,
        KeyUsagePurpose::KeyEncipherment,
        KeyUsagePurpose::DataEncipherment,
    ];
    params.is_ca = IsCa::ExplicitNoCa;
    Ok(params)
}

/// Fixed historical start, end `CERT_VALIDITY_YEARS` after `now`.
fn validity_window(now: DateTime<Utc>) -> Result<(OffsetDateTime, OffsetDateTime), IdentityError> {
    let expiry = now
        .checked_add_months(Months::new(CERT_VALIDITY_YEARS * 12))
        .ok_or_else(|| {
            IdentityError::CertificateCreation("certificate expiry out of range".into())
        })?;
    let to_offset = |ts: i64| {
        OffsetDateTime::from_unix_timestamp(ts)
            .map_err(|e| IdentityError::CertificateCreation(e.to_string()))
    };
    Ok((
        to_offset(CERT_NOT_BEFORE_TIMESTAMP)?,
        to_offset(expiry.timestamp())?,
    ))
}

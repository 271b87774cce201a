use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use crate::constants::{CB58_CHECKSUM_LEN, NODE_ID_PREFIX, SHORT_ID_LEN};
use crate::error::NetgenError;

// ── CB58 ─────────────────────────────────────────────────────────────────────

/// Base-58 with a 4-byte checksum: the last four bytes of SHA-256(payload).
pub fn cb58_encode(payload: &[u8]) -> String {
    let checksum = Sha256::digest(payload);
    let mut buf = Vec::with_capacity(payload.len() + CB58_CHECKSUM_LEN);
    buf.extend_from_slice(payload);
    buf.extend_from_slice(&checksum[checksum.len() - CB58_CHECKSUM_LEN..]);
    bs58::encode(buf).into_string()
}

/// Decode a CB58 string, returning the payload if the checksum matches.
pub fn cb58_decode(s: &str) -> Result<Vec<u8>, &'static str> {
    let mut bytes = bs58::decode(s)
        .into_vec()
        .map_err(|_| "not valid base-58")?;
    if bytes.len() < CB58_CHECKSUM_LEN {
        return Err("missing checksum");
    }
    let split = bytes.len() - CB58_CHECKSUM_LEN;
    let checksum = Sha256::digest(&bytes[..split]);
    if bytes[split..] != checksum[checksum.len() - CB58_CHECKSUM_LEN..] {
        return Err("checksum mismatch");
    }
    bytes.truncate(split);
    Ok(bytes)
}

// ── ShortId ──────────────────────────────────────────────────────────────────

/// 20-byte identifier: RIPEMD-160(SHA-256(bytes)) of some public material.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShortId(pub [u8; SHORT_ID_LEN]);

impl ShortId {
    pub fn from_bytes(b: [u8; SHORT_ID_LEN]) -> Self {
        Self(b)
    }

    pub fn as_bytes(&self) -> &[u8; SHORT_ID_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// CB58 rendering with `prefix` prepended.
    pub fn prefixed_string(&self, prefix: &str) -> String {
        format!("{prefix}{}", cb58_encode(&self.0))
    }
}

impl TryFrom<&[u8]> for ShortId {
    type Error = std::array::TryFromSliceError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Ok(Self(<[u8; SHORT_ID_LEN]>::try_from(bytes)?))
    }
}

impl fmt::Display for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", cb58_encode(&self.0))
    }
}

impl fmt::Debug for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShortId({})", self.to_hex())
    }
}

// ── NodeId ───────────────────────────────────────────────────────────────────

/// Node identifier: a `ShortId` rendered as `NodeID-<cb58>`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub ShortId);

impl NodeId {
    pub fn short_id(&self) -> &ShortId {
        &self.0
    }
}

impl From<ShortId> for NodeId {
    fn from(id: ShortId) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.prefixed_string(NODE_ID_PREFIX))
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({self})")
    }
}

impl FromStr for NodeId {
    type Err = NetgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| NetgenError::InvalidNodeId {
            input: s.to_string(),
            reason,
        };
        let encoded = s
            .strip_prefix(NODE_ID_PREFIX)
            .ok_or_else(|| invalid("missing NodeID- prefix"))?;
        let payload = cb58_decode(encoded).map_err(invalid)?;
        let short = ShortId::try_from(payload.as_slice())
            .map_err(|_| invalid("expected a 20-byte identifier"))?;
        Ok(Self(short))
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

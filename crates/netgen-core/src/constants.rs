/// ─── Test Network Bootstrap Constants ───────────────────────────────────────
///
/// Fixed conventions shared by identity generation and genesis assembly.

// ── Identifiers ──────────────────────────────────────────────────────────────

/// Textual namespace prepended to every rendered node identifier.
pub const NODE_ID_PREFIX: &str = "NodeID-";

/// Width of a short identifier: RIPEMD-160 output.
pub const SHORT_ID_LEN: usize = 20;

/// Trailing SHA-256 bytes appended by CB58 encoding.
pub const CB58_CHECKSUM_LEN: usize = 4;

// ── Staking identity ─────────────────────────────────────────────────────────

/// RSA modulus size for staking keys.
pub const STAKING_KEY_BITS: usize = 4096;

/// Start of every staking certificate's validity window: 2019-12-31 00:00:00 UTC.
pub const CERT_NOT_BEFORE_TIMESTAMP: i64 = 1_577_750_400;

/// Staking certificates expire this many years after generation.
pub const CERT_VALIDITY_YEARS: u32 = 100;

/// PEM label of the staking certificate.
pub const CERT_PEM_LABEL: &str = "CERTIFICATE";

/// PEM label wrapping the PKCS#8-encoded staking key.
pub const KEY_PEM_LABEL: &str = "RSA PRIVATE KEY";

// ── Genesis ──────────────────────────────────────────────────────────────────

/// Delegation fee for every generated staker, in basis points (50.00%).
pub const DELEGATION_FEE: u32 = 5_000;

/// Allocation whose address receives staking rewards for generated stakers.
pub const REWARD_ALLOCATION_INDEX: usize = 1;

/// Default number of nodes produced by the CLI.
pub const DEFAULT_NETWORK_SIZE: usize = 5;

use thiserror::Error;

/// Failure while generating a single staking identity.
///
/// Each variant names the stage that failed. None of them are retried.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("couldn't generate rsa key: {0}")]
    KeyGeneration(String),

    #[error("couldn't create certificate: {0}")]
    CertificateCreation(String),

    #[error("couldn't encode identity: {0}")]
    Encoding(String),

    #[error("problem deriving node ID from certificate: {0}")]
    IdentifierDerivation(String),
}

#[derive(Debug, Error)]
pub enum NetgenError {
    // ── Assembly errors ──────────────────────────────────────────────────────
    #[error("identity generation failed for node {index}")]
    Identity {
        index: usize,
        #[source]
        source: IdentityError,
    },

    // ── Template errors ──────────────────────────────────────────────────────
    #[error("malformed genesis template")]
    TemplateParse(#[source] serde_json::Error),

    #[error("couldn't serialize genesis document")]
    TemplateSerialize(#[source] serde_json::Error),

    #[error("genesis template needs an allocation at index {index} for rewards, found {found} allocations")]
    MissingRewardAllocation { index: usize, found: usize },

    // ── Identifier errors ────────────────────────────────────────────────────
    #[error("invalid node ID {input:?}: {reason}")]
    InvalidNodeId { input: String, reason: &'static str },
}

impl NetgenError {
    /// The identity stage that failed, if this error came from identity generation.
    pub fn identity_error(&self) -> Option<&IdentityError> {
        match self {
            NetgenError::Identity { source, .. } => Some(source),
            _ => None,
        }
    }
}

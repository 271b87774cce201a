pub mod hash;
pub mod identity;
pub mod keypair;

pub use hash::{node_id_from_cert_der, pubkey_bytes_to_address, sha256};
pub use identity::{IdentityGenerator, RsaIdentityGenerator};
pub use keypair::KeyPair;

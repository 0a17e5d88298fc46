//! Content-derived storage keys

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Hex characters of the digest kept in a key (64 bits)
pub const KEY_HASH_LEN: usize = 16;

/// Content address of a partition blob
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derive the storage key of a serialized partition
///
/// SHA-256 over `bytes`, truncated to [`KEY_HASH_LEN`] hex characters and
/// prefixed with `namespace`.
pub fn digest(namespace: &str, bytes: &[u8]) -> StorageKey {
    let hash = hex::encode(Sha256::digest(bytes));
    StorageKey(format!("{}-{}", namespace, &hash[..KEY_HASH_LEN]))
}

//! Composite identity for records built from other records.

use sha2::{Digest, Sha256};

/// Compute a deterministic SHA-256 hex digest over ordered component ids.
///
/// Components are NUL-separated so `["ab", "c"]` and `["a", "bc"]` differ.
pub fn hash_composite_id<S: AsRef<str>>(keys: &[S]) -> String {
    let mut hasher = Sha256::new();
    for key in keys {
        hasher.update(key.as_ref().as_bytes());
        hasher.update(b"\0");
    }
    hex::encode(hasher.finalize())
}

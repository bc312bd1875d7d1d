//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose};
use sha2::{Digest, Sha256};

/// Length of the printable fingerprint returned by [`fingerprint`]
pub const FINGERPRINT_LEN: usize = 12;

/// Compute SHA-256 hash
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Short, non-reversible identifier for a secret
///
/// URL-safe base64 of the SHA-256 digest, truncated to [`FINGERPRINT_LEN`]
/// characters. Safe to put in logs where the secret itself must not appear.
pub fn fingerprint(secret: &[u8]) -> String {
    let mut encoded = general_purpose::URL_SAFE_NO_PAD.encode(sha256(secret));
    encoded.truncate(FINGERPRINT_LEN);
    encoded
}

/// Constant-time comparison to prevent timing attacks
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

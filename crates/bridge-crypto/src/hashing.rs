//! # Keccak-256 Hashing
//!
//! One-shot helpers over the digest function every certificate and address
//! derivation in the bridge uses.

use bridge_types::Digest;
use sha3::{Digest as _, Keccak256};

/// Hash data with Keccak-256 (one-shot).
pub fn keccak256(data: &[u8]) -> Digest {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash multiple inputs as one stream.
pub fn keccak256_many(inputs: &[&[u8]]) -> Digest {
    let mut hasher = Keccak256::new();
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize().into()
}

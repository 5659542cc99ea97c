//! Error types for cryptographic operations.

use thiserror::Error;

/// Failures raised while parsing or recovering signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// R or S is zero or not below the curve order.
    #[error("signature scalar out of range")]
    InvalidScalar,

    /// S is in the upper half of the curve order (malleable form).
    #[error("signature S not normalized to the lower half order")]
    HighS,

    /// Recovery id is not 0, 1, 27, or 28.
    #[error("invalid recovery id: {0}")]
    InvalidRecoveryId(u8),

    /// Public key recovery failed for the given digest and signature.
    #[error("public key recovery failed")]
    RecoveryFailed,

    /// Secret key bytes do not encode a valid scalar.
    #[error("invalid private key")]
    InvalidPrivateKey,
}

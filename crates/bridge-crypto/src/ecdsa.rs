//! # Recoverable ECDSA (secp256k1)
//!
//! Signature recovery for quorum certificates.
//!
//! ## Security Notes
//!
//! - **Scalar Range Validation**: R and S must be in [1, n-1]
//! - **Malleability Prevention (EIP-2)**: S must be in the lower half order
//! - **Recovery Id**: 0/1 accepted, legacy 27/28 normalized
//!
//! A correct signature recovers exactly the signing identity's address
//! (trailing 20 bytes of the Keccak-256 of the uncompressed public key).

use crate::errors::CryptoError;
use crate::hashing::keccak256;
use bridge_types::{Address, Digest, RecoverableSignature};
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};

/// secp256k1 curve order n.
/// n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// Half of the secp256k1 curve order (for the malleability check).
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

/// Scalar is in [1, n-1]. Big-endian byte order makes the lexicographic
/// comparison a numeric one.
fn is_valid_scalar(scalar: &[u8; 32]) -> bool {
    *scalar != [0u8; 32] && scalar[..] < SECP256K1_ORDER[..]
}

/// S is in the lower half order (EIP-2).
fn is_low_s(s: &[u8; 32]) -> bool {
    s[..] <= SECP256K1_HALF_ORDER[..]
}

/// Derive the Ethereum-style address of a public key.
fn address_of(key: &VerifyingKey) -> Address {
    let point = key.to_encoded_point(false);
    // Uncompressed SEC1 encoding: 0x04 || x || y. The address hashes x || y.
    let hash = keccak256(&point.as_bytes()[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// Recover the signing address from a certificate digest and signature.
///
/// # Errors
///
/// - [`CryptoError::InvalidScalar`] if R or S is zero or not below n
/// - [`CryptoError::HighS`] if S is in the malleable upper half
/// - [`CryptoError::InvalidRecoveryId`] if v is not 0, 1, 27, or 28
/// - [`CryptoError::RecoveryFailed`] if no public key recovers
pub fn recover_address(
    digest: &Digest,
    signature: &RecoverableSignature,
) -> Result<Address, CryptoError> {
    if !is_valid_scalar(&signature.r) || !is_valid_scalar(&signature.s) {
        return Err(CryptoError::InvalidScalar);
    }
    if !is_low_s(&signature.s) {
        return Err(CryptoError::HighS);
    }
    if !matches!(signature.v, 0 | 1 | 27 | 28) {
        return Err(CryptoError::InvalidRecoveryId(signature.v));
    }

    let sig = Signature::from_scalars(signature.r, signature.s)
        .map_err(|_| CryptoError::InvalidScalar)?;
    let recovery_id =
        RecoveryId::from_byte(signature.recovery_id()).ok_or(CryptoError::RecoveryFailed)?;

    let key = VerifyingKey::recover_from_prehash(digest, &sig, recovery_id)
        .map_err(|_| CryptoError::RecoveryFailed)?;

    Ok(address_of(&key))
}

/// A secp256k1 keypair producing recoverable certificate signatures.
///
/// Lives on the relayer/validator side; the bridge itself never holds
/// secret key material.
pub struct SignerKeypair {
    signing_key: SigningKey,
}

impl SignerKeypair {
    /// Generate a random keypair.
    pub fn random() -> Self {
        Self {
            signing_key: SigningKey::random(&mut rand::thread_rng()),
        }
    }

    /// Create from secret key bytes (32 bytes).
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        let signing_key =
            SigningKey::from_bytes((&bytes).into()).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// Address this keypair signs as.
    pub fn address(&self) -> Address {
        address_of(self.signing_key.verifying_key())
    }

    /// Sign a certificate digest, producing a low-S recoverable signature.
    pub fn sign_digest(&self, digest: &Digest) -> Result<RecoverableSignature, CryptoError> {
        let (sig, recovery_id) = self
            .signing_key
            .sign_prehash_recoverable(digest)
            .map_err(|_| CryptoError::RecoveryFailed)?;
        let bytes = sig.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[0..32]);
        s.copy_from_slice(&bytes[32..64]);
        Ok(RecoverableSignature::new(r, s, recovery_id.to_byte()))
    }
}

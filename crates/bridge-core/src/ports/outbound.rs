//! Outbound ports: external collaborators.
//!
//! Both collaborators are pure and bounded-time; the traits exist so the
//! verification pipeline and the admission record can be exercised against
//! stubs without touching real curve math or a real host chain.

use bridge_crypto::CryptoError;
use bridge_types::{Address, Digest, RecoverableSignature};

/// Maps `(certificate digest, signature)` to the signing identity.
///
/// A correct signature recovers exactly the signer's address; any parse or
/// recovery failure is an error, never a wrong address.
pub trait SignerRecovery: Send + Sync {
    /// Recover the signer of `signature` over `digest`.
    fn recover(
        &self,
        digest: &Digest,
        signature: &RecoverableSignature,
    ) -> Result<Address, CryptoError>;
}

/// Supplies the host chain's current block height.
///
/// Admission records this height so off-chain consumers can locate the
/// submitting transaction and reconstruct payload data from it.
pub trait HostChainContext: Send + Sync {
    /// Host chain height observed for the current call.
    fn host_height(&self) -> u64;
}

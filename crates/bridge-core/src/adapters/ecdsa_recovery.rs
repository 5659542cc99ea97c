//! Recoverable-ECDSA implementation of the [`SignerRecovery`] port.

use crate::ports::outbound::SignerRecovery;
use bridge_crypto::CryptoError;
use bridge_types::{Address, Digest, RecoverableSignature};

/// Signer recovery over secp256k1 with Ethereum-style addresses.
#[derive(Clone, Copy, Debug, Default)]
pub struct EcdsaRecovery;

impl EcdsaRecovery {
    /// Create the recovery adapter.
    pub fn new() -> Self {
        Self
    }
}

impl SignerRecovery for EcdsaRecovery {
    fn recover(
        &self,
        digest: &Digest,
        signature: &RecoverableSignature,
    ) -> Result<Address, CryptoError> {
        bridge_crypto::recover_address(digest, signature)
    }
}

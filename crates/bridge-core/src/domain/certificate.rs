//! # Quorum-Certificate Verification
//!
//! Recomputes the canonical certificate digest, recovers every signer, and
//! checks committee supermajority. Verification is a pure function of
//! `(header, signatures, committee)`: replaying the same inputs always
//! yields the same outcome, independent of submission order or time.

use crate::domain::committee::CommitteeSnapshot;
use crate::error::{BridgeError, BridgeResult};
use crate::ports::outbound::SignerRecovery;
use bridge_crypto::certificate_digest;
use bridge_types::{Address, Digest, RecoverableSignature, SubnetHeader};
use std::collections::HashSet;

/// Outcome of a successful certificate verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedCertificate {
    /// The certificate digest; keys the header in the DAG.
    pub digest: Digest,
    /// Distinct committee members that signed, in first-seen order.
    pub signers: Vec<Address>,
}

/// Quorum rule: strictly more than two thirds of the committee signed.
///
/// Tolerates up to `(n - 1) / 3` non-signing or faulty validators.
pub fn has_quorum(signer_count: usize, committee_size: usize) -> bool {
    signer_count * 3 > committee_size * 2
}

/// Verify a header's certificate against the committee in force.
///
/// All signatures are recovered before any acceptance decision; a single
/// recovery failure rejects the whole submission.
///
/// # Errors
/// - [`BridgeError::MalformedSignature`] on any recovery failure
/// - [`BridgeError::QuorumNotMet`] if distinct committee signers do not
///   exceed two thirds of the committee
pub fn verify_certificate<R: SignerRecovery>(
    recovery: &R,
    header: &SubnetHeader,
    signatures: &[RecoverableSignature],
    committee: &CommitteeSnapshot,
) -> BridgeResult<VerifiedCertificate> {
    let digest = certificate_digest(header);

    let mut recovered = Vec::with_capacity(signatures.len());
    for (index, signature) in signatures.iter().enumerate() {
        let address = recovery
            .recover(&digest, signature)
            .map_err(|source| BridgeError::MalformedSignature { index, source })?;
        recovered.push(address);
    }

    let mut seen = HashSet::with_capacity(recovered.len());
    let mut signers = Vec::new();
    for address in recovered {
        if seen.insert(address) && committee.contains(&address) {
            signers.push(address);
        }
    }

    let committee_size = committee.len();
    if !has_quorum(signers.len(), committee_size) {
        return Err(BridgeError::QuorumNotMet {
            have: signers.len(),
            need: committee_size * 2 / 3,
            committee_size,
        });
    }

    Ok(VerifiedCertificate { digest, signers })
}

//! Error types for the bridge module.
//!
//! Every failure is rejected synchronously at the call that triggers it; no
//! partial state mutation precedes the failure point, and no error leaves
//! the module unusable for subsequent calls.

use bridge_crypto::CryptoError;
use bridge_types::{Address, Digest};
use thiserror::Error;

/// Bridge module errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// Caller is not the admin identity.
    #[error("unauthorized caller: {caller:?}")]
    Unauthorized { caller: Address },

    /// The committee registry was already bootstrapped.
    #[error("committee registry already initialized")]
    AlreadyInitialized,

    /// A committee entry must contain at least one identity.
    #[error("empty committee")]
    EmptyCommittee,

    /// An address repeats within one committee entry.
    #[error("duplicate identity in committee: {address:?}")]
    DuplicateIdentity { address: Address },

    /// No committee entry exists at or below the given height.
    #[error("no committee for height {height}")]
    NoCommittee { height: u64 },

    /// A signature in the submitted set failed recovery. The whole
    /// submission is rejected; there is no partial acceptance.
    #[error("malformed signature at index {index}: {source}")]
    MalformedSignature {
        index: usize,
        source: CryptoError,
    },

    /// Distinct committee signers did not exceed two thirds of the
    /// committee.
    #[error("quorum not met: {have} of {committee_size} signers, need more than {need}")]
    QuorumNotMet {
        have: usize,
        need: usize,
        committee_size: usize,
    },

    /// The header's parent was never admitted.
    #[error("unknown parent header: {parent:?}")]
    UnknownParent { parent: Digest },

    /// A node with the same digest is already admitted. Resubmission is a
    /// reported no-op; the existing node and the finalized pointer are
    /// untouched.
    #[error("duplicate header: {digest:?}")]
    DuplicateHeader { digest: Digest },

    /// Subnet height decreases along the parent link.
    #[error("height {number} below parent height {parent_number}")]
    NonMonotonicHeight { parent_number: u64, number: u64 },

    /// The header's parent chain does not pass through the latest finalized
    /// header, so admitting it would fork below the finalized pointer.
    #[error("header forks below the finalized chain at height {finalized_number}")]
    ForksFinalizedChain { finalized_number: u64 },

    /// No admitted header has the given digest.
    #[error("header not found: {digest:?}")]
    NotFound { digest: Digest },
}

/// Result type for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

//! # Core Domain Entities
//!
//! The subnet header, its DAG node, and the recoverable signature format
//! submitted alongside headers.
//!
//! ## Clusters
//!
//! - **Chain**: `SubnetHeader`, `HeaderNode`
//! - **Certificates**: `RecoverableSignature`

use serde::{Deserialize, Serialize};

/// A 32-byte Keccak-256 digest.
pub type Digest = [u8; 32];

/// A 20-byte Ethereum-style address recovered from a secp256k1 public key.
pub type Address = [u8; 20];

/// Parent digest carried by the genesis header. No real header hashes to
/// all-zero, so this value can never collide with an admitted node.
pub const GENESIS_PARENT: Digest = [0u8; 32];

/// A subnet block header as submitted by relayers.
///
/// `number` is the subnet height; `round_num` disambiguates competing
/// proposals at one height; `gap_num` counts headers since the last
/// committee-revision checkpoint and binds the certificate to one epoch
/// window; `payload_digest` identifies the block body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubnetHeader {
    /// Subnet block height.
    pub number: u64,
    /// Consensus round/view at that height.
    pub round_num: u64,
    /// Headers since the last committee-revision checkpoint.
    pub gap_num: u64,
    /// Digest of the parent header.
    pub parent_digest: Digest,
    /// Digest of the block body.
    pub payload_digest: Digest,
}

impl SubnetHeader {
    /// Create a new header.
    pub fn new(
        number: u64,
        round_num: u64,
        gap_num: u64,
        parent_digest: Digest,
        payload_digest: Digest,
    ) -> Self {
        Self {
            number,
            round_num,
            gap_num,
            parent_digest,
            payload_digest,
        }
    }

    /// Create a genesis header at height 0.
    pub fn genesis(payload_digest: Digest) -> Self {
        Self {
            number: 0,
            round_num: 0,
            gap_num: 0,
            parent_digest: GENESIS_PARENT,
            payload_digest,
        }
    }

    /// Whether this header carries the genesis parent sentinel.
    pub fn has_genesis_parent(&self) -> bool {
        self.parent_digest == GENESIS_PARENT
    }
}

/// A header admitted into the DAG.
///
/// `admitted_at_host_height` records the host chain's block number at
/// admission time so off-chain consumers can locate the submitting
/// transaction and reconstruct payload data that is not retained here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderNode {
    /// The admitted header. Immutable after admission.
    pub header: SubnetHeader,
    /// Certificate digest of the header; the DAG key.
    pub digest: Digest,
    /// Host chain height at admission time.
    pub admitted_at_host_height: u64,
}

impl HeaderNode {
    /// Create a node for an admitted header.
    pub fn new(header: SubnetHeader, digest: Digest, admitted_at_host_height: u64) -> Self {
        Self {
            header,
            digest,
            admitted_at_host_height,
        }
    }

    /// Subnet height of the admitted header.
    pub fn number(&self) -> u64 {
        self.header.number
    }

    /// Parent digest of the admitted header.
    pub fn parent(&self) -> Digest {
        self.header.parent_digest
    }
}

/// A recoverable ECDSA signature over a certificate digest.
///
/// Wire format is the 65-byte `r || s || v` layout relayers submit, with
/// `v` either a raw recovery id (0/1) or the legacy 27/28 form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoverableSignature {
    /// R component (32 bytes).
    pub r: [u8; 32],
    /// S component (32 bytes).
    pub s: [u8; 32],
    /// Recovery id (0, 1, 27, or 28).
    pub v: u8,
}

impl RecoverableSignature {
    /// Create from components.
    pub fn new(r: [u8; 32], s: [u8; 32], v: u8) -> Self {
        Self { r, s, v }
    }

    /// Parse the 65-byte `r || s || v` wire layout.
    pub fn from_bytes(bytes: &[u8; 65]) -> Self {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[0..32]);
        s.copy_from_slice(&bytes[32..64]);
        Self {
            r,
            s,
            v: bytes[64],
        }
    }

    /// Serialize to the 65-byte `r || s || v` wire layout.
    pub fn to_bytes(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out[0..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }

    /// Recovery id normalized to 0/1 (legacy 27/28 accepted).
    pub fn recovery_id(&self) -> u8 {
        if self.v >= 27 {
            self.v - 27
        } else {
            self.v
        }
    }
}

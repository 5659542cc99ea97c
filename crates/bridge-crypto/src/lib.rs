//! # Bridge Crypto Crate
//!
//! The cryptographic collaborators of the bridge:
//!
//! - **Keccak-256** one-shot hashing ([`keccak256`], [`keccak256_many`])
//! - **Canonical certificate encoding** ([`certificate_digest`]): the
//!   deterministic digest validators sign and the DAG is keyed by
//! - **Recoverable ECDSA** over secp256k1 ([`recover_address`],
//!   [`SignerKeypair`]) with Ethereum-style address derivation
//!
//! All operations are pure, bounded-time computations with no I/O.

pub mod ecdsa;
pub mod encoding;
pub mod errors;
pub mod hashing;

pub use ecdsa::{recover_address, SignerKeypair};
pub use encoding::certificate_digest;
pub use errors::CryptoError;
pub use hashing::{keccak256, keccak256_many};

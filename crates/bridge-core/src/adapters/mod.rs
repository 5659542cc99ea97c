//! Adapters: concrete implementations of the outbound ports.

pub mod ecdsa_recovery;
pub mod host_context;

pub use ecdsa_recovery::EcdsaRecovery;
pub use host_context::ManualHostHeight;

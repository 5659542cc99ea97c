//! # bridge-core
//!
//! Light-client bridge: a host chain tracks an independently-operated
//! subnet without running a subnet node. A permissioned, rotating committee
//! signs subnet headers; this module verifies quorum certificates, stores
//! admitted headers in a parent-linked DAG, and derives finality from
//! confirmation depth.
//!
//! ## Overview
//!
//! This crate provides:
//! - **Committee Registry**: height-keyed validator committees with
//!   admin-scheduled rotation
//! - **Certificate Verification**: signer recovery plus a strict
//!   two-thirds supermajority rule
//! - **Header DAG**: content-addressed storage with parent linkage and
//!   sibling-branch tracking
//! - **Depth Finality**: a header is irreversible once three further
//!   headers are built directly on top of it
//!
//! ## Architecture
//!
//! ```text
//! Relayer ──submit_header──→ BridgeService
//!                                │
//!                                ├── CommitteeRegistry ── committee_for(height)
//!                                ├── verify_certificate ── SignerRecovery port
//!                                ├── HeaderDag ── admit / children / ancestors
//!                                └── FinalityTracker ── pointer advance
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use bridge_core::{BridgeApi, BridgeConfig, BridgeService};
//! use bridge_core::adapters::{EcdsaRecovery, ManualHostHeight};
//!
//! let service = BridgeService::new(
//!     BridgeConfig::default(),
//!     admin,
//!     genesis_committee,
//!     genesis_header,
//!     recovery,
//!     host,
//! )?;
//!
//! let digest = service.submit_header(header, &signatures)?;
//! let finalized = service.confirmation_status(&digest)?;
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

pub use adapters::{EcdsaRecovery, ManualHostHeight};
pub use config::{BridgeConfig, DEFAULT_CONFIRMATION_DEPTH};
pub use domain::{
    has_quorum, verify_certificate, CommitteeRegistry, CommitteeSnapshot, FinalityTracker,
    HeaderDag, VerifiedCertificate,
};
pub use error::{BridgeError, BridgeResult};
pub use ports::inbound::BridgeApi;
pub use ports::outbound::{HostChainContext, SignerRecovery};
pub use service::BridgeService;

//! Domain logic: pure state machines with no locking, logging, or I/O.
//!
//! The service layer composes these under a single lock; everything in this
//! module is deterministic in its arguments.

pub mod certificate;
pub mod committee;
pub mod finality;
pub mod header_dag;

pub use certificate::{has_quorum, verify_certificate, VerifiedCertificate};
pub use committee::{CommitteeRegistry, CommitteeSnapshot};
pub use finality::FinalityTracker;
pub use header_dag::HeaderDag;

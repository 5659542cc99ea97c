//! # Bridge Metrics
//!
//! Prometheus metrics for monitoring admission and finality.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! bridge-core = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `bridge_headers_admitted_total` - Counter of admitted headers
//! - `bridge_headers_rejected_total` - Counter of rejected submissions (by reason)
//! - `bridge_headers_finalized_total` - Counter of finalized headers
//! - `bridge_finalized_height` - Gauge of the deepest finalized subnet height
//! - `bridge_committee_revisions_total` - Counter of scheduled committee revisions

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{
    register_counter_vec, register_gauge, register_int_counter, CounterVec, Gauge, IntCounter,
};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Total headers admitted into the DAG
    pub static ref HEADERS_ADMITTED: IntCounter = register_int_counter!(
        "bridge_headers_admitted_total",
        "Total number of headers admitted"
    )
    .expect("Failed to create HEADERS_ADMITTED metric");

    /// Total submissions rejected, labeled by reason
    pub static ref HEADERS_REJECTED: CounterVec = register_counter_vec!(
        "bridge_headers_rejected_total",
        "Total number of header submissions rejected",
        &["reason"]
    )
    .expect("Failed to create HEADERS_REJECTED metric");

    /// Total headers finalized
    pub static ref HEADERS_FINALIZED: IntCounter = register_int_counter!(
        "bridge_headers_finalized_total",
        "Total number of headers finalized"
    )
    .expect("Failed to create HEADERS_FINALIZED metric");

    /// Deepest finalized subnet height
    pub static ref FINALIZED_HEIGHT: Gauge = register_gauge!(
        "bridge_finalized_height",
        "Subnet height of the deepest finalized header"
    )
    .expect("Failed to create FINALIZED_HEIGHT metric");

    /// Total committee revisions scheduled
    pub static ref COMMITTEE_REVISIONS: IntCounter = register_int_counter!(
        "bridge_committee_revisions_total",
        "Total number of committee revisions scheduled"
    )
    .expect("Failed to create COMMITTEE_REVISIONS metric");
}

// =============================================================================
// METRIC RECORDING FUNCTIONS
// =============================================================================

/// Record a header admission
#[cfg(feature = "metrics")]
pub fn record_header_admitted() {
    HEADERS_ADMITTED.inc();
}

/// Record a rejected submission with reason
#[cfg(feature = "metrics")]
pub fn record_header_rejected(reason: &str) {
    HEADERS_REJECTED.with_label_values(&[reason]).inc();
}

/// Record newly finalized headers and the new finalized height
#[cfg(feature = "metrics")]
pub fn record_finalized(count: u64, finalized_height: u64) {
    HEADERS_FINALIZED.inc_by(count);
    FINALIZED_HEIGHT.set(finalized_height as f64);
}

/// Record a scheduled committee revision
#[cfg(feature = "metrics")]
pub fn record_committee_revision() {
    COMMITTEE_REVISIONS.inc();
}

// =============================================================================
// NO-OP IMPLEMENTATIONS (when metrics feature disabled)
// =============================================================================

#[cfg(not(feature = "metrics"))]
pub fn record_header_admitted() {}

#[cfg(not(feature = "metrics"))]
pub fn record_header_rejected(_reason: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_finalized(_count: u64, _finalized_height: u64) {}

#[cfg(not(feature = "metrics"))]
pub fn record_committee_revision() {}

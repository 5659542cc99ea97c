//! Host-height source for embeddings that tick the host height themselves.

use crate::ports::outbound::HostChainContext;
use std::sync::atomic::{AtomicU64, Ordering};

/// A [`HostChainContext`] backed by an atomic counter.
///
/// Embeddings outside a ledger environment advance this explicitly; each
/// admission records whatever height is current at that moment.
#[derive(Debug, Default)]
pub struct ManualHostHeight {
    height: AtomicU64,
}

impl ManualHostHeight {
    /// Start at height 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at a given height.
    pub fn starting_at(height: u64) -> Self {
        Self {
            height: AtomicU64::new(height),
        }
    }

    /// Set the current host height.
    pub fn set(&self, height: u64) {
        self.height.store(height, Ordering::SeqCst);
    }

    /// Advance by one block and return the new height.
    pub fn advance(&self) -> u64 {
        self.height.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl HostChainContext for ManualHostHeight {
    fn host_height(&self) -> u64 {
        self.height.load(Ordering::SeqCst)
    }
}

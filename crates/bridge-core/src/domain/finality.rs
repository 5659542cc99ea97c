//! # Depth-Based Finality
//!
//! A header is finalized once an unbroken parent chain of `depth` further
//! headers is built directly on top of it. The signed chain itself encodes
//! agreement; enough build-on-top is treated as proof nobody is forking
//! below that point. The finalized pointer only ever advances to a deeper
//! header, never to a shallower or sibling one.

use crate::domain::header_dag::HeaderDag;
use bridge_types::Digest;
use std::collections::HashSet;

/// Tracks the finalized subset of the DAG and the deepest finalized header.
#[derive(Clone, Debug)]
pub struct FinalityTracker {
    /// Digests of finalized headers. Ancestor-closed along parent chains.
    finalized: HashSet<Digest>,
    /// Deepest finalized digest.
    latest: Digest,
    /// Subnet height of the deepest finalized header.
    latest_number: u64,
}

impl FinalityTracker {
    /// Start from a genesis digest, finalized by construction.
    pub fn new(genesis: Digest) -> Self {
        let mut finalized = HashSet::new();
        finalized.insert(genesis);
        Self {
            finalized,
            latest: genesis,
            latest_number: 0,
        }
    }

    /// Re-evaluate confirmations along the chain that just grew.
    ///
    /// Walks upward from the admitted header: the ancestor `depth` links
    /// above it, and every ancestor beyond, is now buried deeply enough to
    /// finalize. The walk stops at the first already-finalized ancestor
    /// since the finalized set is ancestor-closed.
    ///
    /// Returns newly finalized digests, deepest first.
    pub fn on_header_admitted(
        &mut self,
        dag: &HeaderDag,
        new_digest: Digest,
        depth: u64,
    ) -> Vec<Digest> {
        let mut newly = Vec::new();
        let Some(mut current) = dag.ancestor_at_depth(&new_digest, depth) else {
            return newly;
        };

        while !self.finalized.contains(&current) {
            self.finalized.insert(current);
            newly.push(current);
            match dag.get(&current) {
                Ok(node) => current = node.parent(),
                Err(_) => break,
            }
        }

        if let Some(deepest) = newly.first() {
            if let Ok(node) = dag.get(deepest) {
                if node.number() > self.latest_number {
                    self.latest = *deepest;
                    self.latest_number = node.number();
                }
            }
        }

        newly
    }

    /// Whether a header is finalized.
    pub fn is_finalized(&self, digest: &Digest) -> bool {
        self.finalized.contains(digest)
    }

    /// Digest of the deepest finalized header.
    pub fn latest_finalized(&self) -> Digest {
        self.latest
    }

    /// Subnet height of the deepest finalized header.
    pub fn latest_finalized_number(&self) -> u64 {
        self.latest_number
    }
}

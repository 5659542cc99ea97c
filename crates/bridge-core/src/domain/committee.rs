//! # Committee Registry
//!
//! Height-keyed validator committees. Each entry takes effect at its key
//! height and stays in force until a later entry supersedes it, so resolving
//! the committee for a header is a predecessor search over a sorted map.

use crate::error::{BridgeError, BridgeResult};
use bridge_types::Address;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// An ordered set of unique validator identities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeSnapshot {
    members: Vec<Address>,
}

impl CommitteeSnapshot {
    /// Build a snapshot, preserving submission order.
    ///
    /// # Errors
    /// - [`BridgeError::EmptyCommittee`] if `members` is empty
    /// - [`BridgeError::DuplicateIdentity`] if any address repeats
    pub fn new(members: Vec<Address>) -> BridgeResult<Self> {
        if members.is_empty() {
            return Err(BridgeError::EmptyCommittee);
        }
        let mut seen = HashSet::with_capacity(members.len());
        for address in &members {
            if !seen.insert(*address) {
                return Err(BridgeError::DuplicateIdentity { address: *address });
            }
        }
        Ok(Self { members })
    }

    /// Whether the address is a member.
    pub fn contains(&self, address: &Address) -> bool {
        self.members.contains(address)
    }

    /// Committee size.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// A snapshot is never empty; kept for completeness.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in submission order.
    pub fn members(&self) -> &[Address] {
        &self.members
    }
}

/// Per-epoch committee storage keyed by the subnet height at which each
/// committee becomes effective.
#[derive(Clone, Debug, Default)]
pub struct CommitteeRegistry {
    epochs: BTreeMap<u64, CommitteeSnapshot>,
}

impl CommitteeRegistry {
    /// Create an empty, un-bootstrapped registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// One-time initialization: install the committee effective from
    /// height 0.
    ///
    /// # Errors
    /// - [`BridgeError::AlreadyInitialized`] if called twice
    /// - snapshot construction errors for empty/duplicate membership
    pub fn bootstrap(&mut self, genesis_committee: Vec<Address>) -> BridgeResult<()> {
        if !self.epochs.is_empty() {
            return Err(BridgeError::AlreadyInitialized);
        }
        let snapshot = CommitteeSnapshot::new(genesis_committee)?;
        self.epochs.insert(0, snapshot);
        Ok(())
    }

    /// Install a committee effective from `effective_height`.
    ///
    /// Last write wins per height. No ordering is enforced between
    /// `effective_height` and any current height; revisions may target past
    /// or future heights. Caller authorization happens upstream.
    pub fn schedule_revision(
        &mut self,
        committee: Vec<Address>,
        effective_height: u64,
    ) -> BridgeResult<()> {
        let snapshot = CommitteeSnapshot::new(committee)?;
        self.epochs.insert(effective_height, snapshot);
        Ok(())
    }

    /// Resolve the committee in force at `height`: the entry with the
    /// greatest key at or below it.
    pub fn committee_for(&self, height: u64) -> BridgeResult<&CommitteeSnapshot> {
        self.epochs
            .range(..=height)
            .next_back()
            .map(|(_, snapshot)| snapshot)
            .ok_or(BridgeError::NoCommittee { height })
    }

    /// Whether `bootstrap` has run.
    pub fn is_bootstrapped(&self) -> bool {
        !self.epochs.is_empty()
    }

    /// Number of scheduled epochs (including genesis).
    pub fn epoch_count(&self) -> usize {
        self.epochs.len()
    }
}

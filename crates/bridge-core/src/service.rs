//! Bridge Service - single-writer orchestration.
//!
//! Composes the committee registry, header DAG, and finality tracker behind
//! one lock. Every mutating operation verifies fully before the first state
//! write, so a failure at any step leaves prior state untouched.

use crate::config::BridgeConfig;
use crate::domain::{verify_certificate, CommitteeRegistry, FinalityTracker, HeaderDag};
use crate::error::{BridgeError, BridgeResult};
use crate::metrics;
use crate::ports::inbound::BridgeApi;
use crate::ports::outbound::{HostChainContext, SignerRecovery};
use bridge_types::{Address, Digest, RecoverableSignature, SubnetHeader};
use parking_lot::RwLock;
use std::sync::Arc;

/// The module's entire mutable state.
///
/// This is also the persisted layout for ledger embeddings: the
/// committee-registry table keyed by epoch height, the header table keyed by
/// digest, and the finalized-pointer scalar. The admin identity lives on the
/// service and never changes after construction.
struct BridgeState {
    /// Committee registry keyed by effective height.
    registry: CommitteeRegistry,
    /// Admitted headers.
    dag: HeaderDag,
    /// Finalized set and pointer.
    finality: FinalityTracker,
}

/// Light-client bridge service.
///
/// Mutations (`submit_header`, `schedule_revision`) serialize on the write
/// lock; reads are served concurrently against the last committed state.
pub struct BridgeService<R, H>
where
    R: SignerRecovery,
    H: HostChainContext,
{
    config: BridgeConfig,
    /// The single authorized identity for committee revisions. Not a
    /// consensus participant.
    admin: Address,
    recovery: Arc<R>,
    host: Arc<H>,
    state: RwLock<BridgeState>,
}

impl<R, H> BridgeService<R, H>
where
    R: SignerRecovery,
    H: HostChainContext,
{
    /// Bootstrap the bridge: install the genesis committee effective from
    /// height 0 and admit the genesis header, finalized by construction.
    ///
    /// # Errors
    /// - [`BridgeError::EmptyCommittee`] / [`BridgeError::DuplicateIdentity`]
    ///   for an invalid genesis committee
    pub fn new(
        config: BridgeConfig,
        admin: Address,
        genesis_committee: Vec<Address>,
        genesis_header: SubnetHeader,
        recovery: Arc<R>,
        host: Arc<H>,
    ) -> BridgeResult<Self> {
        let mut registry = CommitteeRegistry::new();
        registry.bootstrap(genesis_committee)?;

        let dag = HeaderDag::new(genesis_header);
        let finality = FinalityTracker::new(dag.genesis());

        tracing::info!(
            "[bridge] bootstrapped: genesis {:02x}{:02x}.., committee of {}",
            dag.genesis()[0],
            dag.genesis()[1],
            registry
                .committee_for(0)
                .map(|committee| committee.len())
                .unwrap_or(0),
        );

        Ok(Self {
            config,
            admin,
            recovery,
            host,
            state: RwLock::new(BridgeState {
                registry,
                dag,
                finality,
            }),
        })
    }

    /// The admin identity.
    pub fn admin(&self) -> Address {
        self.admin
    }

    /// Digest of the genesis header.
    pub fn genesis(&self) -> Digest {
        self.state.read().dag.genesis()
    }

    /// Number of admitted headers, genesis included.
    pub fn header_count(&self) -> usize {
        self.state.read().dag.len()
    }

    fn submit_header_inner(
        &self,
        header: SubnetHeader,
        signatures: &[RecoverableSignature],
    ) -> BridgeResult<Digest> {
        let mut guard = self.state.write();
        let state = &mut *guard;

        // Full verification precedes any write.
        let committee = state.registry.committee_for(header.number)?;
        let committee_size = committee.len();
        let certificate =
            verify_certificate(self.recovery.as_ref(), &header, signatures, committee)?;

        if state.dag.contains(&certificate.digest) {
            return Err(BridgeError::DuplicateHeader {
                digest: certificate.digest,
            });
        }
        if !state.dag.contains(&header.parent_digest) {
            return Err(BridgeError::UnknownParent {
                parent: header.parent_digest,
            });
        }

        // Tie-break: never admit a header whose chain forks below the
        // finalized pointer.
        let finalized = state.finality.latest_finalized();
        let finalized_number = state.finality.latest_finalized_number();
        if !state
            .dag
            .chain_passes_through(header.parent_digest, finalized, finalized_number)
        {
            return Err(BridgeError::ForksFinalizedChain { finalized_number });
        }

        let host_height = self.host.host_height();
        let number = header.number;
        let round_num = header.round_num;
        let digest = state.dag.admit(header, certificate.digest, host_height)?;

        tracing::info!(
            "[bridge] admitted header #{} round {} ({:02x}{:02x}..) with {}/{} signers at host height {}",
            number,
            round_num,
            digest[0],
            digest[1],
            certificate.signers.len(),
            committee_size,
            host_height,
        );
        metrics::record_header_admitted();

        let newly = state
            .finality
            .on_header_admitted(&state.dag, digest, self.config.confirmation_depth);
        if !newly.is_empty() {
            let latest = state.finality.latest_finalized();
            let latest_number = state.finality.latest_finalized_number();
            tracing::info!(
                "[bridge] finality advanced to #{} ({:02x}{:02x}..), {} newly finalized",
                latest_number,
                latest[0],
                latest[1],
                newly.len(),
            );
            metrics::record_finalized(newly.len() as u64, latest_number);
        }

        Ok(digest)
    }

    fn schedule_revision_inner(
        &self,
        caller: Address,
        committee: Vec<Address>,
        effective_height: u64,
    ) -> BridgeResult<()> {
        if caller != self.admin {
            return Err(BridgeError::Unauthorized { caller });
        }

        let committee_size = committee.len();
        self.state
            .write()
            .registry
            .schedule_revision(committee, effective_height)?;

        tracing::info!(
            "[bridge] committee revision scheduled: {} members effective from height {}",
            committee_size,
            effective_height,
        );
        metrics::record_committee_revision();
        Ok(())
    }
}

/// Metric label for a rejected submission.
fn rejection_reason(error: &BridgeError) -> &'static str {
    match error {
        BridgeError::Unauthorized { .. } => "unauthorized",
        BridgeError::AlreadyInitialized => "already_initialized",
        BridgeError::EmptyCommittee => "empty_committee",
        BridgeError::DuplicateIdentity { .. } => "duplicate_identity",
        BridgeError::NoCommittee { .. } => "no_committee",
        BridgeError::MalformedSignature { .. } => "malformed_signature",
        BridgeError::QuorumNotMet { .. } => "quorum_not_met",
        BridgeError::UnknownParent { .. } => "unknown_parent",
        BridgeError::DuplicateHeader { .. } => "duplicate_header",
        BridgeError::NonMonotonicHeight { .. } => "non_monotonic_height",
        BridgeError::ForksFinalizedChain { .. } => "forks_finalized_chain",
        BridgeError::NotFound { .. } => "not_found",
    }
}

impl<R, H> BridgeApi for BridgeService<R, H>
where
    R: SignerRecovery,
    H: HostChainContext,
{
    fn submit_header(
        &self,
        header: SubnetHeader,
        signatures: &[RecoverableSignature],
    ) -> BridgeResult<Digest> {
        let number = header.number;
        self.submit_header_inner(header, signatures).map_err(|error| {
            tracing::debug!("[bridge] rejected header #{}: {}", number, error);
            metrics::record_header_rejected(rejection_reason(&error));
            error
        })
    }

    fn schedule_revision(
        &self,
        caller: Address,
        committee: Vec<Address>,
        effective_height: u64,
    ) -> BridgeResult<()> {
        self.schedule_revision_inner(caller, committee, effective_height)
            .map_err(|error| {
                tracing::warn!("[bridge] revision rejected: {}", error);
                error
            })
    }

    fn get_header(&self, digest: &Digest) -> BridgeResult<SubnetHeader> {
        Ok(self.state.read().dag.get(digest)?.header.clone())
    }

    fn confirmation_status(&self, digest: &Digest) -> BridgeResult<bool> {
        let state = self.state.read();
        state.dag.get(digest)?;
        Ok(state.finality.is_finalized(digest))
    }

    fn latest_finalized(&self) -> Digest {
        self.state.read().finality.latest_finalized()
    }

    fn host_block_of(&self, digest: &Digest) -> BridgeResult<u64> {
        Ok(self.state.read().dag.get(digest)?.admitted_at_host_height)
    }

    fn committee_for(&self, height: u64) -> BridgeResult<Vec<Address>> {
        Ok(self
            .state
            .read()
            .registry
            .committee_for(height)?
            .members()
            .to_vec())
    }
}

//! Inbound port: the bridge API exposed to relayers and the host
//! environment.

use crate::error::BridgeResult;
use bridge_types::{Address, Digest, RecoverableSignature, SubnetHeader};

/// Operations the bridge exposes.
///
/// Header submission and all reads are permissionless; committee revision is
/// gated on the admin identity. Mutating operations are applied atomically
/// and serially; reads observe the last committed state.
pub trait BridgeApi {
    /// Submit a subnet header with its certificate signature set. Returns
    /// the header's certificate digest on admission.
    fn submit_header(
        &self,
        header: SubnetHeader,
        signatures: &[RecoverableSignature],
    ) -> BridgeResult<Digest>;

    /// Schedule a committee revision effective from `effective_height`.
    /// Admin only.
    fn schedule_revision(
        &self,
        caller: Address,
        committee: Vec<Address>,
        effective_height: u64,
    ) -> BridgeResult<()>;

    /// Fetch an admitted header.
    fn get_header(&self, digest: &Digest) -> BridgeResult<SubnetHeader>;

    /// Whether the header is finalized.
    fn confirmation_status(&self, digest: &Digest) -> BridgeResult<bool>;

    /// Digest of the deepest finalized header.
    fn latest_finalized(&self) -> Digest;

    /// Host chain height recorded when the header was admitted.
    fn host_block_of(&self, digest: &Digest) -> BridgeResult<u64>;

    /// Committee in force at a subnet height.
    fn committee_for(&self, height: u64) -> BridgeResult<Vec<Address>>;
}

//! # Header DAG
//!
//! Content-addressed store of admitted headers. Every node links to its
//! parent digest; sibling branches (equivocating proposals) are tracked as
//! distinct nodes under the same parent. Admission is the only write path,
//! so the chain-linkage invariants are enforced here and nowhere else.

use crate::error::{BridgeError, BridgeResult};
use bridge_crypto::certificate_digest;
use bridge_types::{Digest, HeaderNode, SubnetHeader};
use std::collections::HashMap;

/// The DAG of admitted headers, keyed by certificate digest.
#[derive(Clone, Debug)]
pub struct HeaderDag {
    /// Admitted nodes by digest.
    nodes: HashMap<Digest, HeaderNode>,
    /// Direct children by parent digest.
    children: HashMap<Digest, Vec<Digest>>,
    /// Digest of the genesis header.
    genesis: Digest,
}

impl HeaderDag {
    /// Create a DAG rooted at the genesis header, admitted at host height 0.
    pub fn new(genesis_header: SubnetHeader) -> Self {
        let digest = certificate_digest(&genesis_header);
        let mut nodes = HashMap::new();
        nodes.insert(digest, HeaderNode::new(genesis_header, digest, 0));
        Self {
            nodes,
            children: HashMap::new(),
            genesis: digest,
        }
    }

    /// Admit a verified header under its certificate digest.
    ///
    /// # Errors
    /// - [`BridgeError::DuplicateHeader`] if the digest is already admitted
    /// - [`BridgeError::UnknownParent`] if the parent was never admitted
    /// - [`BridgeError::NonMonotonicHeight`] if the height decreases along
    ///   the parent link
    pub fn admit(
        &mut self,
        header: SubnetHeader,
        digest: Digest,
        host_height: u64,
    ) -> BridgeResult<Digest> {
        if self.nodes.contains_key(&digest) {
            return Err(BridgeError::DuplicateHeader { digest });
        }
        let parent = header.parent_digest;
        let parent_number = match self.nodes.get(&parent) {
            Some(node) => node.number(),
            None => return Err(BridgeError::UnknownParent { parent }),
        };
        if header.number < parent_number {
            return Err(BridgeError::NonMonotonicHeight {
                parent_number,
                number: header.number,
            });
        }

        self.nodes
            .insert(digest, HeaderNode::new(header, digest, host_height));
        self.children.entry(parent).or_default().push(digest);
        Ok(digest)
    }

    /// Look up an admitted node.
    pub fn get(&self, digest: &Digest) -> BridgeResult<&HeaderNode> {
        self.nodes
            .get(digest)
            .ok_or(BridgeError::NotFound { digest: *digest })
    }

    /// Directly admitted children of a node.
    pub fn children_of(&self, digest: &Digest) -> &[Digest] {
        self.children
            .get(digest)
            .map(|children| children.as_slice())
            .unwrap_or(&[])
    }

    /// Whether a digest is admitted.
    pub fn contains(&self, digest: &Digest) -> bool {
        self.nodes.contains_key(digest)
    }

    /// Genesis digest.
    pub fn genesis(&self) -> Digest {
        self.genesis
    }

    /// Number of admitted nodes, genesis included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The DAG always holds at least the genesis node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ancestor exactly `depth` parent links above `digest`, if the walk
    /// stays inside the DAG.
    pub fn ancestor_at_depth(&self, digest: &Digest, depth: u64) -> Option<Digest> {
        let mut current = *digest;
        for _ in 0..depth {
            let node = self.nodes.get(&current)?;
            current = node.parent();
        }
        self.nodes.contains_key(&current).then_some(current)
    }

    /// Whether the parent chain starting at `from` passes through `target`.
    ///
    /// `target_number` bounds the walk: once the chain drops below that
    /// height it can no longer reach the target.
    pub fn chain_passes_through(
        &self,
        from: Digest,
        target: Digest,
        target_number: u64,
    ) -> bool {
        let mut current = from;
        loop {
            if current == target {
                return true;
            }
            let Some(node) = self.nodes.get(&current) else {
                return false;
            };
            if node.number() < target_number {
                return false;
            }
            current = node.parent();
        }
    }
}

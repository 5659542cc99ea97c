//! Finality scenarios: the confirmation-depth rule end to end, pointer
//! monotonicity, and fork handling.

#[cfg(test)]
mod tests {
    use crate::common::{compose_header, setup_bridge, TestCommittee};
    use bridge_core::{BridgeApi, BridgeError};
    use bridge_types::Digest;

    /// Submit a linear chain of headers, one per host block, returning the
    /// admitted digests in height order.
    fn submit_chain(
        bridge: &crate::common::TestBridge,
        host: &bridge_core::ManualHostHeight,
        committee: &TestCommittee,
        from: Digest,
        heights: std::ops::RangeInclusive<u64>,
    ) -> Vec<Digest> {
        let mut parent = from;
        let mut digests = Vec::new();
        for number in heights {
            host.advance();
            let header = compose_header(number, number - 1, parent);
            let digest = bridge
                .submit_header(header.clone(), &committee.sign(&header))
                .unwrap();
            digests.push(digest);
            parent = digest;
        }
        digests
    }

    #[test]
    fn test_confirm_a_received_block() {
        let committee = TestCommittee::new(1, 3);
        let (bridge, host) = setup_bridge(&committee, 0);

        let chain = submit_chain(&bridge, &host, &committee, bridge.genesis(), 1..=4);

        // Three headers on top finalize height 1 and only height 1.
        assert!(bridge.confirmation_status(&chain[0]).unwrap());
        assert_eq!(bridge.latest_finalized(), chain[0]);
        for digest in &chain[1..] {
            assert!(!bridge.confirmation_status(digest).unwrap());
        }

        let stored = bridge.get_header(&chain[0]).unwrap();
        assert_eq!(stored.number, 1);
        assert_eq!(stored.parent_digest, bridge.genesis());
    }

    #[test]
    fn test_pointer_never_regresses_across_admissions() {
        let committee = TestCommittee::new(1, 3);
        let (bridge, host) = setup_bridge(&committee, 0);

        let mut seen_depth = 0u64;
        let mut parent = bridge.genesis();
        for number in 1..=10u64 {
            host.advance();
            let header = compose_header(number, number - 1, parent);
            parent = bridge
                .submit_header(header.clone(), &committee.sign(&header))
                .unwrap();

            let finalized = bridge.latest_finalized();
            let depth = bridge.get_header(&finalized).unwrap().number;
            assert!(
                depth >= seen_depth,
                "finalized pointer regressed at {}",
                hex::encode(finalized)
            );
            seen_depth = depth;
        }
        assert_eq!(seen_depth, 7);
    }

    #[test]
    fn test_sibling_fork_above_pointer_is_tracked_not_finalized() {
        let committee = TestCommittee::new(1, 3);
        let (bridge, host) = setup_bridge(&committee, 0);

        // Two headers chained on genesis; nothing finalized yet.
        let chain = submit_chain(&bridge, &host, &committee, bridge.genesis(), 1..=2);

        // An equivocating sibling of height 1: same parent and height,
        // different round. Both proposals coexist as DAG nodes.
        let sibling = compose_header(1, 5, bridge.genesis());
        let sibling_digest = bridge
            .submit_header(sibling.clone(), &committee.sign(&sibling))
            .unwrap();

        // Only the built-upon branch finalizes.
        submit_chain(&bridge, &host, &committee, chain[1], 3..=4);
        assert!(bridge.confirmation_status(&chain[0]).unwrap());
        assert!(!bridge.confirmation_status(&sibling_digest).unwrap());
        assert_eq!(bridge.latest_finalized(), chain[0]);
    }

    #[test]
    fn test_extending_a_frozen_branch_is_rejected() {
        let committee = TestCommittee::new(1, 3);
        let (bridge, host) = setup_bridge(&committee, 0);

        // Sibling admitted while nothing is finalized.
        let sibling = compose_header(1, 5, bridge.genesis());
        let sibling_digest = bridge
            .submit_header(sibling.clone(), &committee.sign(&sibling))
            .unwrap();

        // The main branch reaches finality at height 1.
        let chain = submit_chain(&bridge, &host, &committee, bridge.genesis(), 1..=4);
        assert_eq!(bridge.latest_finalized(), chain[0]);

        // Building on the sibling now forks below the finalized pointer.
        let extension = compose_header(2, 6, sibling_digest);
        let result = bridge.submit_header(extension.clone(), &committee.sign(&extension));
        assert_eq!(
            result,
            Err(BridgeError::ForksFinalizedChain { finalized_number: 1 })
        );
    }

    #[test]
    fn test_end_to_end_scenario() {
        // Genesis committee {A,B,C}; h1 at height 1 signed by all three;
        // admission succeeds, h1 is readable and unfinalized; after h2..h4
        // chain on it, h1 is finalized and is the latest finalized block.
        let committee = TestCommittee::new(7, 3);
        let (bridge, host) = setup_bridge(&committee, 1000);

        let h1 = compose_header(1, 0, bridge.genesis());
        let d1 = bridge.submit_header(h1.clone(), &committee.sign(&h1)).unwrap();
        assert_eq!(bridge.get_header(&d1).unwrap().number, 1);
        assert!(!bridge.confirmation_status(&d1).unwrap());

        submit_chain(&bridge, &host, &committee, d1, 2..=4);

        assert!(bridge.confirmation_status(&d1).unwrap());
        assert_eq!(bridge.latest_finalized(), d1);
        assert_eq!(bridge.host_block_of(&d1).unwrap(), 1000);
    }

    #[test]
    fn test_finality_catches_up_over_gaps() {
        // A header admitted late still counts toward burying its ancestors:
        // finality is recomputed on every admission, not per height.
        let committee = TestCommittee::new(1, 3);
        let (bridge, host) = setup_bridge(&committee, 0);

        let chain = submit_chain(&bridge, &host, &committee, bridge.genesis(), 1..=7);
        // Heights 1..=4 are buried under three descendants each.
        for digest in &chain[..4] {
            assert!(bridge.confirmation_status(digest).unwrap());
        }
        for digest in &chain[4..] {
            assert!(!bridge.confirmation_status(digest).unwrap());
        }
        assert_eq!(bridge.latest_finalized(), chain[3]);
    }
}

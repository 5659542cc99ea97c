//! Header submission scenarios: certificate checking, rejection paths, and
//! the data-availability record.

#[cfg(test)]
mod tests {
    use crate::common::{compose_header, setup_bridge, TestCommittee};
    use bridge_core::{has_quorum, BridgeApi, BridgeError};
    use bridge_crypto::certificate_digest;

    #[test]
    fn test_receive_new_header() {
        let committee = TestCommittee::new(1, 3);
        let (bridge, _host) = setup_bridge(&committee, 77);

        let h1 = compose_header(1, 0, bridge.genesis());
        let d1 = bridge.submit_header(h1.clone(), &committee.sign(&h1)).unwrap();
        assert_eq!(d1, certificate_digest(&h1));

        let stored = bridge.get_header(&d1).unwrap();
        assert_eq!(stored.number, 1);
        assert_eq!(stored.round_num, 0);
        assert_eq!(stored.parent_digest, bridge.genesis());

        // One confirmation is not finality.
        assert!(!bridge.confirmation_status(&d1).unwrap());
        assert_eq!(bridge.latest_finalized(), bridge.genesis());
    }

    #[test]
    fn test_quorum_monotonicity_over_sizes() {
        // The service accepts exactly when distinct committee signers exceed
        // two thirds; sweep the boundary for several committee sizes.
        for size in [1usize, 2, 3, 4, 6, 7, 9] {
            let committee = TestCommittee::random(size);
            let (bridge, _host) = setup_bridge(&committee, 0);

            let header = compose_header(1, 0, bridge.genesis());
            let boundary = size * 2 / 3;

            let too_few = bridge.submit_header(
                header.clone(),
                &committee.sign_subset(&header, boundary),
            );
            assert!(
                matches!(too_few, Err(BridgeError::QuorumNotMet { .. })),
                "exactly two thirds must fail for committee of {size}"
            );
            assert!(!has_quorum(boundary, size));

            let enough = bridge.submit_header(
                header.clone(),
                &committee.sign_subset(&header, boundary + 1),
            );
            assert!(
                enough.is_ok(),
                "one signer above two thirds must pass for committee of {size}"
            );
        }
    }

    #[test]
    fn test_signatures_from_outsiders_rejected() {
        let committee = TestCommittee::new(1, 3);
        let outsiders = TestCommittee::new(9, 3);
        let (bridge, _host) = setup_bridge(&committee, 0);

        let header = compose_header(1, 0, bridge.genesis());
        let result = bridge.submit_header(header.clone(), &outsiders.sign(&header));
        assert!(matches!(
            result,
            Err(BridgeError::QuorumNotMet {
                have: 0,
                committee_size: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_garbage_signature_rejects_whole_submission() {
        let committee = TestCommittee::new(1, 3);
        let (bridge, _host) = setup_bridge(&committee, 0);

        let header = compose_header(1, 0, bridge.genesis());
        let mut signatures = committee.sign(&header);
        signatures[1].r = [0u8; 32];

        let result = bridge.submit_header(header, &signatures);
        assert!(matches!(
            result,
            Err(BridgeError::MalformedSignature { index: 1, .. })
        ));
        // Nothing was admitted.
        assert_eq!(bridge.header_count(), 1);
    }

    #[test]
    fn test_unknown_parent_requires_ancestor_first() {
        let committee = TestCommittee::new(1, 3);
        let (bridge, _host) = setup_bridge(&committee, 0);

        let h1 = compose_header(1, 0, bridge.genesis());
        let h2 = compose_header(2, 0, certificate_digest(&h1));

        // Child before parent: rejected, no state change.
        let early = bridge.submit_header(h2.clone(), &committee.sign(&h2));
        assert!(matches!(early, Err(BridgeError::UnknownParent { .. })));

        // Parent first, then the same child is accepted.
        bridge.submit_header(h1.clone(), &committee.sign(&h1)).unwrap();
        bridge.submit_header(h2.clone(), &committee.sign(&h2)).unwrap();
    }

    #[test]
    fn test_duplicate_submission_is_inert() {
        let committee = TestCommittee::new(1, 3);
        let (bridge, host) = setup_bridge(&committee, 10);

        let h1 = compose_header(1, 0, bridge.genesis());
        let signatures = committee.sign(&h1);
        let d1 = bridge.submit_header(h1.clone(), &signatures).unwrap();
        let count = bridge.header_count();
        let finalized = bridge.latest_finalized();

        // Resubmission at a later host height: rejected, and the original
        // admission record keeps its host height.
        host.set(50);
        let result = bridge.submit_header(h1, &signatures);
        assert_eq!(result, Err(BridgeError::DuplicateHeader { digest: d1 }));
        assert_eq!(bridge.header_count(), count);
        assert_eq!(bridge.latest_finalized(), finalized);
        assert_eq!(bridge.host_block_of(&d1).unwrap(), 10);
    }

    #[test]
    fn test_host_block_lookup() {
        // The admission record points consumers at the host block carrying
        // the submitting transaction.
        let committee = TestCommittee::new(1, 3);
        let (bridge, host) = setup_bridge(&committee, 500);

        let h1 = compose_header(1, 0, bridge.genesis());
        let d1 = bridge.submit_header(h1.clone(), &committee.sign(&h1)).unwrap();

        host.advance();
        let h2 = compose_header(2, 1, d1);
        let d2 = bridge.submit_header(h2.clone(), &committee.sign(&h2)).unwrap();

        assert_eq!(bridge.host_block_of(&d1).unwrap(), 500);
        assert_eq!(bridge.host_block_of(&d2).unwrap(), 501);
    }
}

//! # Ledger Flow Tests
//!
//! End-to-end flows over the service and its in-memory adapters:
//! deployment defaults, owner gating, every rejection code with its
//! no-mutation guarantee, and the id-keyed history.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tipjar_ledger::prelude::*;

    const OWNER: Address = [0xAA; 20];
    const SENDER: Address = [0x01; 20];
    const RECIPIENT: Address = [0x02; 20];

    /// Service over fresh in-memory adapters with shared clock and
    /// publisher handles, tracing initialized for failure output.
    fn deploy() -> (
        TipJarService<InMemoryLedgerStore, Arc<ManualClock>, Arc<RecordingPublisher>>,
        Arc<ManualClock>,
        Arc<RecordingPublisher>,
    ) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let clock = Arc::new(ManualClock::new(1_700_000_000));
        let publisher = Arc::new(RecordingPublisher::new());
        let service = TipJarService::deploy(
            OWNER,
            InMemoryLedgerStore::new(),
            clock.clone(),
            publisher.clone(),
        )
        .expect("deploy over empty store");
        (service, clock, publisher)
    }

    // =========================================================================
    // CONFIGURATION
    // =========================================================================

    #[test]
    fn test_deployment_seeds_default_min_tip() {
        let (service, _, _) = deploy();
        assert_eq!(service.get_min_tip().unwrap(), 10);
    }

    #[test]
    fn test_owner_updates_min_tip() {
        let (service, _, _) = deploy();
        service.set_min_tip(OWNER, 20).unwrap();
        assert_eq!(service.get_min_tip().unwrap(), 20);
    }

    #[test]
    fn test_non_owner_cannot_update_min_tip() {
        let (service, _, _) = deploy();
        let err = service.set_min_tip(SENDER, 50).unwrap_err();
        assert_eq!(err.code(), Some(101));
        // State unchanged.
        assert_eq!(service.get_min_tip().unwrap(), 10);
    }

    #[test]
    fn test_min_tip_has_no_upper_bound() {
        let (service, _, _) = deploy();
        service.set_min_tip(OWNER, u128::MAX).unwrap();
        assert_eq!(service.get_min_tip().unwrap(), u128::MAX);
    }

    // =========================================================================
    // VALIDATION CODES
    // =========================================================================

    #[test]
    fn test_tip_below_minimum_rejected() {
        let (service, _, _) = deploy();
        let err = service
            .send_tip(SENDER, RECIPIENT, "Thanks for your work!", 5, "content")
            .unwrap_err();
        assert_eq!(err.code(), Some(100));
    }

    #[test]
    fn test_tip_of_exactly_minimum_accepted() {
        let (service, _, _) = deploy();
        let id = service
            .send_tip(SENDER, RECIPIENT, "Thanks for your work!", 10, "content")
            .unwrap();
        assert_eq!(id, 0);
    }

    #[test]
    fn test_self_tip_rejected() {
        let (service, _, _) = deploy();
        let err = service
            .send_tip(SENDER, SENDER, "Thanks for your work!", 100, "content")
            .unwrap_err();
        assert_eq!(err.code(), Some(102));
    }

    #[test]
    fn test_underfunded_self_tip_reports_amount_code() {
        let (service, _, _) = deploy();
        let err = service
            .send_tip(SENDER, SENDER, "Thanks for your work!", 1, "content")
            .unwrap_err();
        assert_eq!(err.code(), Some(100));
    }

    #[test]
    fn test_empty_message_rejected() {
        let (service, _, _) = deploy();
        let err = service
            .send_tip(SENDER, RECIPIENT, "", 100, "content")
            .unwrap_err();
        assert_eq!(err.code(), Some(103));
    }

    #[test]
    fn test_oversized_message_rejected() {
        let (service, _, _) = deploy();
        let long = "x".repeat(MAX_MESSAGE_BYTES + 1);
        let err = service
            .send_tip(SENDER, RECIPIENT, &long, 100, "content")
            .unwrap_err();
        assert_eq!(err.code(), Some(105));
    }

    #[test]
    fn test_non_ascii_message_rejected() {
        let (service, _, _) = deploy();
        let err = service
            .send_tip(SENDER, RECIPIENT, "merci beaucoup ❤", 100, "content")
            .unwrap_err();
        assert_eq!(err.code(), Some(106));
    }

    #[test]
    fn test_invalid_category_rejected() {
        let (service, _, _) = deploy();
        let err = service
            .send_tip(
                SENDER,
                RECIPIENT,
                "Thanks for your work!",
                100,
                "invalid-category",
            )
            .unwrap_err();
        assert_eq!(err.code(), Some(104));
    }

    #[test]
    fn test_all_categories_accepted() {
        let (service, _, _) = deploy();
        for (position, label) in service.available_categories().into_iter().enumerate() {
            let id = service
                .send_tip(SENDER, RECIPIENT, "Thanks for your work!", 100, label)
                .unwrap();
            assert_eq!(id as usize, position);
        }
    }

    #[test]
    fn test_rejection_mutates_nothing() {
        let (service, _, _) = deploy();
        let err = service
            .send_tip(SENDER, RECIPIENT, "", 100, "content")
            .unwrap_err();
        assert_eq!(err.code(), Some(103));

        assert_eq!(service.get_tip_by_id(0).unwrap(), None);
        assert_eq!(
            service.get_category_stats(RECIPIENT, "content").unwrap(),
            None
        );
        assert_eq!(
            service.get_all_category_stats(RECIPIENT).unwrap(),
            vec![None; CATEGORY_COUNT]
        );
    }

    // =========================================================================
    // HISTORY
    // =========================================================================

    #[test]
    fn test_sequential_tips_get_dense_ids() {
        let (service, _, _) = deploy();
        let ids: Vec<TipId> = (0..4)
            .map(|n| {
                service
                    .send_tip(SENDER, RECIPIENT, "Thanks!", 100 + n as u128, "content")
                    .unwrap()
            })
            .collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert!(check_id_sequence(&ids));
    }

    #[test]
    fn test_rejected_tip_consumes_no_id() {
        let (service, _, _) = deploy();

        let _ = service.send_tip(SENDER, RECIPIENT, "too small", 1, "content");
        let _ = service.send_tip(SENDER, RECIPIENT, "", 100, "content");
        let _ = service.send_tip(SENDER, RECIPIENT, "bad label", 100, "tickets");

        // Three failures later, the first accepted tip still gets id 0.
        let id = service
            .send_tip(SENDER, RECIPIENT, "Thanks!", 100, "content")
            .unwrap();
        assert_eq!(id, 0);
    }

    #[test]
    fn test_history_stores_the_full_record() {
        let (service, clock, _) = deploy();

        service
            .send_tip(SENDER, RECIPIENT, "First tip", 100, "content")
            .unwrap();
        clock.advance(60);
        service
            .send_tip(SENDER, RECIPIENT, "Second tip", 200, "service")
            .unwrap();

        let first = service.get_tip_by_id(0).unwrap().unwrap();
        assert_eq!(first.sender, SENDER);
        assert_eq!(first.recipient, RECIPIENT);
        assert_eq!(first.message, "First tip");
        assert_eq!(first.amount, 100);
        assert_eq!(first.category, Category::Content);
        assert_eq!(first.timestamp, 1_700_000_000);

        let second = service.get_tip_by_id(1).unwrap().unwrap();
        assert_eq!(second.message, "Second tip");
        assert_eq!(second.category, Category::Service);
        assert_eq!(second.timestamp, 1_700_000_060);
    }

    #[test]
    fn test_unassigned_id_reads_absent() {
        let (service, _, _) = deploy();
        assert_eq!(service.get_tip_by_id(9999).unwrap(), None);
    }

    // =========================================================================
    // FULL SCENARIO
    // =========================================================================

    /// Deploy at the default minimum, raise it to 20, watch 15 bounce,
    /// then land a 20 and check every observable surface.
    #[test]
    fn test_raise_minimum_scenario() {
        let (service, _, _) = deploy();

        service.set_min_tip(OWNER, 20).unwrap();

        let err = service
            .send_tip(SENDER, RECIPIENT, "ok", 15, "content")
            .unwrap_err();
        assert_eq!(err.code(), Some(100));

        let id = service
            .send_tip(SENDER, RECIPIENT, "ok", 20, "content")
            .unwrap();
        assert_eq!(id, 0);

        assert_eq!(service.get_min_tip().unwrap(), 20);
        let stats = service
            .get_category_stats(RECIPIENT, "content")
            .unwrap()
            .unwrap();
        assert_eq!(stats.total_amount, 20);
        assert_eq!(stats.tip_count, 1);
    }
}

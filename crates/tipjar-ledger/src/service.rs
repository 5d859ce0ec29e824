//! # TipJar Service
//!
//! Orchestrates the ledger's validate-then-commit paths over the driven
//! ports and implements the caller-facing API.
//!
//! ## Operation flow
//!
//! 1. `send_tip` snapshots the config, runs the validation pipeline,
//!    and only then stages the tip, the counter advance, and the
//!    aggregate update into one atomic store commit.
//! 2. `set_min_tip` flows only through the owner check.
//! 3. Queries read the store directly and never mutate.
//!
//! Nothing is written before all checks pass, so there is no rollback
//! path anywhere. Events are published after the commit is durable;
//! a publish failure is logged and does not fail the operation.

use crate::adapters::publisher::LedgerEventPublisher;
use crate::domain::entities::{CategoryStats, LedgerConfig, Tip};
use crate::domain::errors::{StoreError, TipJarError};
use crate::domain::invariants::validate_tip;
use crate::domain::value_objects::{Address, Category, TipId, CATEGORY_COUNT};
use crate::events::{LedgerEvent, MinTipUpdatedPayload, TipRecordedPayload};
use crate::ports::inbound::TipJarApi;
use crate::ports::outbound::{ChainClock, LedgerStore};

use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, instrument, warn};

/// Counters for service observability.
///
/// Snapshot of how the service has been used; not part of ledger state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ServiceStats {
    /// Tips validated and committed.
    pub tips_recorded: u64,
    /// Send attempts rejected by the validation pipeline.
    pub tips_rejected: u64,
    /// Accepted minimum-tip updates.
    pub config_updates: u64,
    /// Minimum-tip updates rejected by the owner check.
    pub rejected_config_updates: u64,
}

/// The tip ledger service.
///
/// Generic over the store, clock, and publisher ports so tests can run
/// it over in-memory adapters and a settable clock.
pub struct TipJarService<S, C, P> {
    store: S,
    clock: C,
    publisher: P,
    tips_recorded: AtomicU64,
    tips_rejected: AtomicU64,
    config_updates: AtomicU64,
    rejected_config_updates: AtomicU64,
}

impl<S, C, P> TipJarService<S, C, P>
where
    S: LedgerStore,
    C: ChainClock,
    P: LedgerEventPublisher,
{
    /// Deploys the ledger over `store`.
    ///
    /// Seeds the configuration cell with `owner` and the default
    /// minimum when the store holds none. Over an already-seeded store
    /// the existing config wins and `owner` is ignored, so
    /// reconstruction cannot re-assign ownership.
    pub fn deploy(owner: Address, store: S, clock: C, publisher: P) -> Result<Self, TipJarError> {
        if store.load_config()?.is_none() {
            let config = LedgerConfig::new(owner);
            store.store_config(config)?;
            info!(owner = ?owner, min_tip = %config.min_tip, "ledger deployed");
        }
        Ok(Self {
            store,
            clock,
            publisher,
            tips_recorded: AtomicU64::new(0),
            tips_rejected: AtomicU64::new(0),
            config_updates: AtomicU64::new(0),
            rejected_config_updates: AtomicU64::new(0),
        })
    }

    /// Snapshot of the service counters.
    pub fn stats(&self) -> ServiceStats {
        ServiceStats {
            tips_recorded: self.tips_recorded.load(Ordering::Relaxed),
            tips_rejected: self.tips_rejected.load(Ordering::Relaxed),
            config_updates: self.config_updates.load(Ordering::Relaxed),
            rejected_config_updates: self.rejected_config_updates.load(Ordering::Relaxed),
        }
    }

    fn config(&self) -> Result<LedgerConfig, TipJarError> {
        Ok(self.store.load_config()?.ok_or(StoreError::ConfigMissing)?)
    }

    fn publish(&self, event: LedgerEvent) {
        if let Err(err) = self.publisher.publish(&event) {
            // The commit is already durable; the event is best-effort.
            warn!(error = %err, "event publish failed");
        }
    }
}

impl<S, C, P> TipJarApi for TipJarService<S, C, P>
where
    S: LedgerStore,
    C: ChainClock,
    P: LedgerEventPublisher,
{
    #[instrument(skip(self, message, amount), fields(amount = %amount))]
    fn send_tip(
        &self,
        caller: Address,
        recipient: Address,
        message: &str,
        amount: u128,
        category: &str,
    ) -> Result<TipId, TipJarError> {
        let config = self.config()?;
        let parsed = match validate_tip(caller, recipient, message, amount, category, config.min_tip)
        {
            Ok(parsed) => parsed,
            Err(err) => {
                self.tips_rejected.fetch_add(1, Ordering::Relaxed);
                debug!(code = ?err.code(), "tip rejected");
                return Err(err);
            }
        };

        let id = self.store.next_tip_id()?;
        let timestamp = self.clock.current_timestamp();
        let mut stats = self
            .store
            .category_stats(recipient, parsed)?
            .unwrap_or_default();
        stats.record(amount);

        let tip = Tip {
            id,
            sender: caller,
            recipient,
            message: message.to_string(),
            amount,
            category: parsed,
            timestamp,
        };
        self.store.commit_tip(tip, stats)?;
        self.tips_recorded.fetch_add(1, Ordering::Relaxed);
        info!(tip_id = id, category = %parsed, "tip recorded");

        self.publish(LedgerEvent::TipRecorded(TipRecordedPayload {
            tip_id: id,
            sender: caller,
            recipient,
            amount,
            category: parsed,
            timestamp,
        }));
        Ok(id)
    }

    #[instrument(skip(self, new_min_tip), fields(new_min_tip = %new_min_tip))]
    fn set_min_tip(&self, caller: Address, new_min_tip: u128) -> Result<(), TipJarError> {
        let mut config = self.config()?;
        if caller != config.owner {
            self.rejected_config_updates.fetch_add(1, Ordering::Relaxed);
            warn!(caller = ?caller, "minimum tip update rejected: not the owner");
            return Err(TipJarError::NotOwner { caller });
        }

        let previous = config.min_tip;
        config.min_tip = new_min_tip;
        self.store.store_config(config)?;
        self.config_updates.fetch_add(1, Ordering::Relaxed);
        info!(previous = %previous, "minimum tip updated");

        self.publish(LedgerEvent::MinTipUpdated(MinTipUpdatedPayload {
            previous_min_tip: previous,
            new_min_tip,
        }));
        Ok(())
    }

    fn get_min_tip(&self) -> Result<u128, TipJarError> {
        Ok(self.config()?.min_tip)
    }

    fn get_tip_by_id(&self, id: TipId) -> Result<Option<Tip>, TipJarError> {
        Ok(self.store.tip_by_id(id)?)
    }

    fn get_category_stats(
        &self,
        recipient: Address,
        category: &str,
    ) -> Result<Option<CategoryStats>, TipJarError> {
        // An unknown label reads as the empty cell it denotes.
        match Category::parse(category) {
            Some(parsed) => Ok(self.store.category_stats(recipient, parsed)?),
            None => Ok(None),
        }
    }

    fn get_all_category_stats(
        &self,
        recipient: Address,
    ) -> Result<Vec<Option<CategoryStats>>, TipJarError> {
        Category::ALL
            .iter()
            .map(|category| Ok(self.store.category_stats(recipient, *category)?))
            .collect()
    }

    fn available_categories(&self) -> [&'static str; CATEGORY_COUNT] {
        Category::labels()
    }
}

/// Creates a service over fresh in-memory adapters and a zeroed manual
/// clock. Test helper.
#[must_use]
pub fn create_test_service(
    owner: Address,
) -> TipJarService<
    crate::adapters::memory_store::InMemoryLedgerStore,
    crate::adapters::clock::ManualClock,
    crate::adapters::publisher::NoOpPublisher,
> {
    TipJarService::deploy(
        owner,
        crate::adapters::memory_store::InMemoryLedgerStore::new(),
        crate::adapters::clock::ManualClock::new(0),
        crate::adapters::publisher::NoOpPublisher,
    )
    .expect("in-memory deployment cannot fail")
}

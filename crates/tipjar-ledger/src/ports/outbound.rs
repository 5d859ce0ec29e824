//! Driven ports: the transactional substrate and the host clock.
//!
//! Adapters implement these to supply what the host environment owns:
//! durable cells with atomic commit, and block time.

use crate::domain::entities::{CategoryStats, LedgerConfig, Tip};
use crate::domain::errors::StoreError;
use crate::domain::value_objects::{Address, Category, Timestamp, TipId};
use std::sync::Arc;

/// Key-value substrate holding the ledger cells: the config singleton,
/// the tip-by-id map, the (recipient, category) aggregate map, and the
/// id counter.
///
/// `commit_tip` is the only operation that mutates tip state, and it
/// must apply its whole write set atomically: no reader may observe the
/// tip without its aggregate update or counter advance, or vice versa.
pub trait LedgerStore: Send + Sync {
    /// Reads the configuration cell. `None` before deployment seeds it.
    fn load_config(&self) -> Result<Option<LedgerConfig>, StoreError>;

    /// Replaces the configuration cell.
    fn store_config(&self, config: LedgerConfig) -> Result<(), StoreError>;

    /// The id the counter would assign to the next accepted tip.
    fn next_tip_id(&self) -> Result<TipId, StoreError>;

    /// Point lookup into the tip history.
    fn tip_by_id(&self, id: TipId) -> Result<Option<Tip>, StoreError>;

    /// Point lookup into the aggregate map.
    fn category_stats(
        &self,
        recipient: Address,
        category: Category,
    ) -> Result<Option<CategoryStats>, StoreError>;

    /// Applies one accepted tip as a single write set: stores the tip
    /// under `tip.id`, advances the counter to `tip.id + 1`, and
    /// replaces the (recipient, category) aggregate with `stats`.
    ///
    /// Rejects a staged id that does not equal the current counter with
    /// [`StoreError::CounterMismatch`], leaving every cell untouched. A
    /// stale or reordered commit can therefore never corrupt the
    /// history.
    fn commit_tip(&self, tip: Tip, stats: CategoryStats) -> Result<(), StoreError>;
}

impl<S: LedgerStore + ?Sized> LedgerStore for Arc<S> {
    fn load_config(&self) -> Result<Option<LedgerConfig>, StoreError> {
        (**self).load_config()
    }

    fn store_config(&self, config: LedgerConfig) -> Result<(), StoreError> {
        (**self).store_config(config)
    }

    fn next_tip_id(&self) -> Result<TipId, StoreError> {
        (**self).next_tip_id()
    }

    fn tip_by_id(&self, id: TipId) -> Result<Option<Tip>, StoreError> {
        (**self).tip_by_id(id)
    }

    fn category_stats(
        &self,
        recipient: Address,
        category: Category,
    ) -> Result<Option<CategoryStats>, StoreError> {
        (**self).category_stats(recipient, category)
    }

    fn commit_tip(&self, tip: Tip, stats: CategoryStats) -> Result<(), StoreError> {
        (**self).commit_tip(tip, stats)
    }
}

/// Host block-time source.
///
/// Values are unix seconds and non-decreasing across operations; the
/// host guarantees monotonicity, the ledger does not re-check it.
pub trait ChainClock: Send + Sync {
    /// The current block timestamp.
    fn current_timestamp(&self) -> Timestamp;
}

impl<C: ChainClock + ?Sized> ChainClock for Arc<C> {
    fn current_timestamp(&self) -> Timestamp {
        (**self).current_timestamp()
    }
}

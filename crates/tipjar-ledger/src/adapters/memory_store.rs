//! In-memory implementation of the ledger store.
//!
//! Backs tests and single-node runs. Every cell lives behind one lock,
//! so a commit is observed whole or not at all.

use crate::domain::entities::{CategoryStats, LedgerConfig, Tip};
use crate::domain::errors::StoreError;
use crate::domain::value_objects::{Address, Category, TipId};
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Debug, Default)]
struct LedgerCells {
    config: Option<LedgerConfig>,
    next_tip_id: TipId,
    tips: HashMap<TipId, Tip>,
    stats: HashMap<(Address, Category), CategoryStats>,
}

/// In-memory [`LedgerStore`].
///
/// [`LedgerStore`]: crate::ports::outbound::LedgerStore
pub struct InMemoryLedgerStore {
    cells: RwLock<LedgerCells>,
}

impl InMemoryLedgerStore {
    /// Creates an empty store with no config and the counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: RwLock::new(LedgerCells::default()),
        }
    }
}

impl Default for InMemoryLedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl crate::ports::outbound::LedgerStore for InMemoryLedgerStore {
    fn load_config(&self) -> Result<Option<LedgerConfig>, StoreError> {
        let cells = self.cells.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(cells.config)
    }

    fn store_config(&self, config: LedgerConfig) -> Result<(), StoreError> {
        let mut cells = self.cells.write().map_err(|_| StoreError::LockPoisoned)?;
        cells.config = Some(config);
        Ok(())
    }

    fn next_tip_id(&self) -> Result<TipId, StoreError> {
        let cells = self.cells.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(cells.next_tip_id)
    }

    fn tip_by_id(&self, id: TipId) -> Result<Option<Tip>, StoreError> {
        let cells = self.cells.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(cells.tips.get(&id).cloned())
    }

    fn category_stats(
        &self,
        recipient: Address,
        category: Category,
    ) -> Result<Option<CategoryStats>, StoreError> {
        let cells = self.cells.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(cells.stats.get(&(recipient, category)).copied())
    }

    fn commit_tip(&self, tip: Tip, stats: CategoryStats) -> Result<(), StoreError> {
        let mut cells = self.cells.write().map_err(|_| StoreError::LockPoisoned)?;
        if tip.id != cells.next_tip_id {
            return Err(StoreError::CounterMismatch {
                expected: cells.next_tip_id,
                actual: tip.id,
            });
        }
        cells.next_tip_id = tip.id + 1;
        cells.stats.insert((tip.recipient, tip.category), stats);
        cells.tips.insert(tip.id, tip);
        Ok(())
    }
}

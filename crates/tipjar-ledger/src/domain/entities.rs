//! Core entities of the tip ledger.
//!
//! A [`Tip`] is written once and never touched again; [`CategoryStats`]
//! cells only ever grow; [`LedgerConfig`] is the single owner-gated
//! configuration cell.

use crate::domain::value_objects::{Address, Category, Timestamp, TipId};
use serde::{Deserialize, Serialize};

/// Minimum tip amount seeded at deployment.
pub const DEFAULT_MIN_TIP: u128 = 10;

/// One recorded tip.
///
/// Created only through the validated send path, keyed by `id` in the
/// history, and immutable from then on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    /// History key, assigned from the ledger counter at commit.
    pub id: TipId,
    /// The account that sent the tip.
    pub sender: Address,
    /// The account the tip is for.
    pub recipient: Address,
    /// Non-empty ASCII message, at most [`MAX_MESSAGE_BYTES`] bytes.
    ///
    /// [`MAX_MESSAGE_BYTES`]: crate::domain::value_objects::MAX_MESSAGE_BYTES
    pub message: String,
    /// Tip amount; at least the `min_tip` in force when it was accepted.
    pub amount: u128,
    /// Purpose classification.
    pub category: Category,
    /// Host block time at acceptance.
    pub timestamp: Timestamp,
}

/// Aggregate over all tips to one (recipient, category) pair.
///
/// Created lazily by the first tip to the pair; both fields only
/// increase afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    /// Exact sum of every recorded amount.
    pub total_amount: u128,
    /// Number of recorded tips.
    pub tip_count: u64,
}

impl CategoryStats {
    /// Folds one accepted tip into the aggregate.
    ///
    /// # Panics
    ///
    /// Overflow of either field is an integrity violation, not an error
    /// path: the u128/u64 widths make it unreachable at realistic
    /// volume, and wrapping would silently break the sum/count
    /// invariant.
    pub fn record(&mut self, amount: u128) {
        self.total_amount = self
            .total_amount
            .checked_add(amount)
            .expect("category total overflow");
        self.tip_count = self
            .tip_count
            .checked_add(1)
            .expect("category tip count overflow");
    }
}

/// The ledger's configuration cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Fixed at deployment; the only identity allowed to change
    /// `min_tip`. Not transferable.
    pub owner: Address,
    /// Minimum accepted tip amount. No upper bound.
    pub min_tip: u128,
}

impl LedgerConfig {
    /// Deployment configuration: the given owner and the default
    /// minimum of [`DEFAULT_MIN_TIP`].
    #[must_use]
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            min_tip: DEFAULT_MIN_TIP,
        }
    }
}

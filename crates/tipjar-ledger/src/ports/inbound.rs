//! Driving port: the caller-facing surface of the tip ledger.
//!
//! Caller identity is an explicit argument on every mutating operation.
//! The host authenticates the caller and hands the address in; nothing
//! here reads identity from ambient state.

use crate::domain::entities::{CategoryStats, Tip};
use crate::domain::errors::TipJarError;
use crate::domain::value_objects::{Address, TipId, CATEGORY_COUNT};

/// Primary API for ledger operations.
///
/// Mutations follow validate-then-commit: a returned error always means
/// no state changed and no tip id was consumed. Queries never mutate.
pub trait TipJarApi: Send + Sync {
    // === Mutations ===

    /// Records a tip from `caller` to `recipient`.
    ///
    /// Runs the full validation pipeline against the minimum in force,
    /// then commits the tip record, the id counter advance, and the
    /// (recipient, category) aggregate as one atomic unit. Returns the
    /// id assigned to the new tip.
    fn send_tip(
        &self,
        caller: Address,
        recipient: Address,
        message: &str,
        amount: u128,
        category: &str,
    ) -> Result<TipId, TipJarError>;

    /// Replaces the minimum tip amount. Owner-only.
    fn set_min_tip(&self, caller: Address, new_min_tip: u128) -> Result<(), TipJarError>;

    // === Queries ===

    /// The minimum tip amount currently in force.
    fn get_min_tip(&self) -> Result<u128, TipJarError>;

    /// The tip stored under `id`, or `None` if that id was never
    /// assigned.
    fn get_tip_by_id(&self, id: TipId) -> Result<Option<Tip>, TipJarError>;

    /// Aggregate for one (recipient, category) pair.
    ///
    /// `None` when the pair has never received a tip. A label outside
    /// the fixed set also reads as `None`, exactly like the empty map
    /// cell it denotes; queries never reject input.
    fn get_category_stats(
        &self,
        recipient: Address,
        category: &str,
    ) -> Result<Option<CategoryStats>, TipJarError>;

    /// Aggregates for every category, in canonical order.
    ///
    /// Always exactly [`CATEGORY_COUNT`] entries regardless of how many
    /// categories the recipient has been tipped in.
    fn get_all_category_stats(
        &self,
        recipient: Address,
    ) -> Result<Vec<Option<CategoryStats>>, TipJarError>;

    /// The fixed category labels, in canonical order.
    fn available_categories(&self) -> [&'static str; CATEGORY_COUNT];
}

//! # Event Schema
//!
//! Payloads describing committed ledger state changes, published through
//! the [`LedgerEventPublisher`] adapter after the commit is durable.
//! Events describe what happened; they are never part of deciding it,
//! and a lost event never rolls an operation back.
//!
//! [`LedgerEventPublisher`]: crate::adapters::publisher::LedgerEventPublisher

use crate::domain::value_objects::{Address, Category, Timestamp, TipId};
use serde::{Deserialize, Serialize};

/// Published after a tip commits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipRecordedPayload {
    /// Id assigned to the new tip.
    pub tip_id: TipId,
    /// The tipping account.
    pub sender: Address,
    /// The tipped account.
    pub recipient: Address,
    /// Accepted amount.
    pub amount: u128,
    /// Parsed category.
    pub category: Category,
    /// Host block time at acceptance.
    pub timestamp: Timestamp,
}

/// Published after the minimum tip changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinTipUpdatedPayload {
    /// The minimum that was in force before.
    pub previous_min_tip: u128,
    /// The minimum in force from now on.
    pub new_min_tip: u128,
}

/// Every event the ledger emits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    /// A tip was validated and committed.
    TipRecorded(TipRecordedPayload),
    /// The owner replaced the minimum tip.
    MinTipUpdated(MinTipUpdatedPayload),
}

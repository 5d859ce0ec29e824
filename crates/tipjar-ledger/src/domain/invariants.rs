//! # Ledger Invariants
//!
//! The validation pipeline and the pure consistency checks behind the
//! ledger's guarantees. Everything here is side-effect free: callers run
//! these over snapshots and commit only afterwards.

use crate::domain::entities::CategoryStats;
use crate::domain::errors::TipJarError;
use crate::domain::value_objects::{Address, Category, TipId, MAX_MESSAGE_BYTES};

/// Validates a send-tip request against the current minimum.
///
/// Checks run in fixed order and the first failure wins; the order is
/// part of the caller contract because it decides which code a
/// multiply-invalid request reports:
///
/// 1. amount at or above the minimum
/// 2. sender and recipient differ
/// 3. message non-empty, ASCII, within capacity
/// 4. category label in the fixed set
///
/// A request violating both the amount floor and the self-tip rule
/// therefore reports the amount error. Returns the parsed category on
/// success so the commit path never re-parses.
pub fn validate_tip(
    sender: Address,
    recipient: Address,
    message: &str,
    amount: u128,
    category_label: &str,
    min_tip: u128,
) -> Result<Category, TipJarError> {
    if amount < min_tip {
        return Err(TipJarError::InsufficientAmount { amount, min_tip });
    }
    if sender == recipient {
        return Err(TipJarError::SelfTip { account: sender });
    }
    if message.is_empty() {
        return Err(TipJarError::EmptyMessage);
    }
    if !message.is_ascii() {
        return Err(TipJarError::MessageNotAscii);
    }
    if message.len() > MAX_MESSAGE_BYTES {
        return Err(TipJarError::MessageTooLong {
            length: message.len(),
            max: MAX_MESSAGE_BYTES,
        });
    }
    Category::parse(category_label).ok_or_else(|| TipJarError::InvalidCategory {
        label: category_label.to_string(),
    })
}

/// Aggregate consistency: a stats cell equals the exact sum and count of
/// the amounts folded into it, and an absent cell means no tips at all.
#[must_use]
pub fn check_stats_consistency(stats: Option<&CategoryStats>, amounts: &[u128]) -> bool {
    match stats {
        None => amounts.is_empty(),
        Some(s) => {
            let sum = amounts
                .iter()
                .try_fold(0u128, |acc, amount| acc.checked_add(*amount));
            s.tip_count as usize == amounts.len() && sum == Some(s.total_amount)
        }
    }
}

/// History identity: ids handed out in order are dense and zero-based.
#[must_use]
pub fn check_id_sequence(ids: &[TipId]) -> bool {
    ids.iter()
        .enumerate()
        .all(|(position, id)| *id == position as TipId)
}

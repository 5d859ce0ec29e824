//! Error types for the tip ledger.
//!
//! Two layers, kept apart on purpose: [`StoreError`] covers the
//! substrate the ledger runs on, [`TipJarError`] covers the ledger rules
//! callers can violate. Only the latter carry wire codes.

use crate::domain::value_objects::{Address, TipId};
use thiserror::Error;

/// Failures of the key-value substrate underneath the ledger.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A store lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    LockPoisoned,

    /// The configuration cell was read before deployment seeded it.
    #[error("ledger config missing")]
    ConfigMissing,

    /// A commit staged a tip id that does not match the counter.
    #[error("tip id mismatch: counter at {expected}, staged {actual}")]
    CounterMismatch {
        /// The id the counter would assign next.
        expected: TipId,
        /// The id the rejected commit carried.
        actual: TipId,
    },
}

/// Everything a ledger operation can fail with.
///
/// Rule violations are detected before any state write, so a returned
/// error always means nothing changed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TipJarError {
    /// Tip amount below the configured minimum.
    #[error("tip amount {amount} below minimum {min_tip}")]
    InsufficientAmount {
        /// The offered amount.
        amount: u128,
        /// The minimum in force at submission.
        min_tip: u128,
    },

    /// Caller is not the deployment owner.
    #[error("caller is not the owner")]
    NotOwner {
        /// The rejected caller.
        caller: Address,
    },

    /// Sender and recipient are the same account.
    #[error("sender and recipient are the same account")]
    SelfTip {
        /// The account on both ends.
        account: Address,
    },

    /// Tip message is empty.
    #[error("tip message is empty")]
    EmptyMessage,

    /// Category label outside the fixed set.
    #[error("invalid category: {label:?}")]
    InvalidCategory {
        /// The rejected label.
        label: String,
    },

    /// Tip message exceeds the host string capacity.
    #[error("tip message too long: {length} > {max} bytes")]
    MessageTooLong {
        /// Byte length of the rejected message.
        length: usize,
        /// The capacity bound.
        max: usize,
    },

    /// Tip message contains non-ASCII bytes.
    #[error("tip message contains non-ASCII bytes")]
    MessageNotAscii,

    /// Substrate failure underneath the operation.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl TipJarError {
    /// The numeric wire code for this error.
    ///
    /// Rule violations map to the stable code space callers dispatch
    /// on; substrate failures have no on-chain representation and
    /// return `None`.
    #[must_use]
    pub fn code(&self) -> Option<u32> {
        match self {
            Self::InsufficientAmount { .. } => Some(100),
            Self::NotOwner { .. } => Some(101),
            Self::SelfTip { .. } => Some(102),
            Self::EmptyMessage => Some(103),
            Self::InvalidCategory { .. } => Some(104),
            Self::MessageTooLong { .. } => Some(105),
            Self::MessageNotAscii => Some(106),
            Self::Store(_) => None,
        }
    }
}

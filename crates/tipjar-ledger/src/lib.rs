//! # tipjar-ledger
//!
//! Append-only tip ledger: validated tips between accounts, an
//! owner-gated minimum amount, a dense id-keyed history, and
//! per-(recipient, category) aggregates that stay consistent with every
//! accepted tip.
//!
//! ## Role in System
//!
//! The crate is the state-transition and query core only. The host
//! environment owns everything around it: it authenticates callers and
//! passes their address in, supplies block time through the clock port,
//! and schedules operations one at a time so each commits fully before
//! the next begins. Value transfer itself is the host's business; a
//! [`Tip`](domain::entities::Tip) records the transfer's metadata.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Validate before commit; errors mutate nothing | `service.rs` - `send_tip()` |
//! | Fixed rejection order, amount floor first | `domain/invariants.rs` - `validate_tip()` |
//! | Tip ids dense from zero; a rejected tip consumes none | `adapters/memory_store.rs` - `commit_tip()` counter check |
//! | Tip, counter, and aggregate commit as one write set | `ports/outbound.rs` - `LedgerStore::commit_tip` contract |
//! | Aggregates only grow; overflow is fatal, never wrapped | `domain/entities.rs` - `CategoryStats::record()` |
//! | Category set closed at seven, fixed order | `domain/value_objects.rs` - `Category::ALL` |
//!
//! ## Usage Example
//!
//! ```
//! use tipjar_ledger::prelude::*;
//!
//! let service = create_test_service([0xAA; 20]);
//!
//! let id = service
//!     .send_tip([0x01; 20], [0x02; 20], "Thanks for your work!", 100, "content")
//!     .unwrap();
//! assert_eq!(id, 0);
//!
//! let stats = service
//!     .get_category_stats([0x02; 20], "content")
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(stats.total_amount, 100);
//! assert_eq!(stats.tip_count, 1);
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod adapters;
pub mod domain;
pub mod events;
pub mod ports;
pub mod service;

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain entities
    pub use crate::domain::entities::{CategoryStats, LedgerConfig, Tip, DEFAULT_MIN_TIP};

    // Value objects
    pub use crate::domain::value_objects::{
        Address, Category, Timestamp, TipId, CATEGORY_COUNT, MAX_MESSAGE_BYTES,
    };

    // Invariants
    pub use crate::domain::invariants::{check_id_sequence, check_stats_consistency, validate_tip};

    // Errors
    pub use crate::domain::errors::{StoreError, TipJarError};

    // Ports
    pub use crate::ports::inbound::TipJarApi;
    pub use crate::ports::outbound::{ChainClock, LedgerStore};

    // Events
    pub use crate::events::{LedgerEvent, MinTipUpdatedPayload, TipRecordedPayload};

    // Adapters
    pub use crate::adapters::clock::{ManualClock, SystemClock};
    pub use crate::adapters::memory_store::InMemoryLedgerStore;
    pub use crate::adapters::publisher::{
        LedgerEventPublisher, NoOpPublisher, PublishError, RecordingPublisher,
    };

    // Service
    pub use crate::service::{create_test_service, ServiceStats, TipJarService};
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

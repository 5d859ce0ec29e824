//! # TipJar Test Suite
//!
//! Unified test crate for cross-component flows over the ledger service
//! and its in-memory adapters.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── ledger_flows.rs   # Config gating, validation codes, history
//!     └── category_stats.rs # Aggregates, fixed-shape queries, events
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p tipjar-tests
//!
//! # By area
//! cargo test -p tipjar-tests integration::ledger_flows
//! cargo test -p tipjar-tests integration::category_stats
//! ```

#![allow(dead_code)]

pub mod integration;

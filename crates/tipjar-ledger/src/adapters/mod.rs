//! Adapters: in-memory store, clocks, and event publishers.

pub mod clock;
pub mod memory_store;
pub mod publisher;

pub use clock::*;
pub use memory_store::*;
pub use publisher::*;

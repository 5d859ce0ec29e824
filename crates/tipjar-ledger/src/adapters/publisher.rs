//! Event publisher adapter for the tip ledger.
//!
//! Implementations connect to whatever event transport the host offers.
//! Publishing happens after the commit is durable and is best-effort: a
//! failed publish is logged by the service and never unwinds the
//! operation.

use crate::events::LedgerEvent;
use std::sync::{Arc, Mutex};

/// Publisher port for committed ledger events.
pub trait LedgerEventPublisher: Send + Sync {
    /// Hands one event to the transport.
    fn publish(&self, event: &LedgerEvent) -> Result<(), PublishError>;
}

impl<P: LedgerEventPublisher + ?Sized> LedgerEventPublisher for Arc<P> {
    fn publish(&self, event: &LedgerEvent) -> Result<(), PublishError> {
        (**self).publish(event)
    }
}

/// Error type for publish operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishError {
    /// The event transport is not connected.
    NotConnected,
    /// The event could not be serialized for the transport.
    SerializationError(String),
    /// Internal transport error.
    Internal(String),
}

impl std::fmt::Display for PublishError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotConnected => write!(f, "Event transport not connected"),
            Self::SerializationError(e) => write!(f, "Serialization error: {}", e),
            Self::Internal(e) => write!(f, "Internal error: {}", e),
        }
    }
}

impl std::error::Error for PublishError {}

/// No-op publisher for running without an event transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpPublisher;

impl LedgerEventPublisher for NoOpPublisher {
    fn publish(&self, _event: &LedgerEvent) -> Result<(), PublishError> {
        Ok(())
    }
}

/// Buffering publisher for tests: keeps every published event.
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<LedgerEvent>>,
}

impl RecordingPublisher {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clones the buffered events in publish order.
    #[must_use]
    pub fn events(&self) -> Vec<LedgerEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Drains the buffer, returning the events in publish order.
    pub fn take(&self) -> Vec<LedgerEvent> {
        self.events
            .lock()
            .map(|mut events| std::mem::take(&mut *events))
            .unwrap_or_default()
    }
}

impl LedgerEventPublisher for RecordingPublisher {
    fn publish(&self, event: &LedgerEvent) -> Result<(), PublishError> {
        let mut events = self
            .events
            .lock()
            .map_err(|_| PublishError::Internal("event buffer poisoned".to_string()))?;
        events.push(event.clone());
        Ok(())
    }
}

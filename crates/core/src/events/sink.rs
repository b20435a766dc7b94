//! Domain event sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::DomainEvent;
use crate::allocation::AllocationMapping;
use crate::executors::Executor;

/// Trait for receiving domain events.
///
/// Implementations hand the published state to the form-state layer.
/// The allocation store and executor roster emit through this trait after
/// every successful mutation, and never for a no-op.
///
/// # Design Rules
///
/// - `emit()` must be fast and non-blocking (no network calls, no disk writes)
/// - Observers must treat the published mapping as a read-only copy
/// - Failure to emit must not affect domain operations (best-effort)
pub trait DomainEventSink: Send + Sync {
    /// Emit a single domain event.
    fn emit(&self, event: DomainEvent);

    /// Emit multiple domain events.
    ///
    /// Default implementation calls `emit()` for each event.
    /// Implementations may override for batch optimization.
    fn emit_batch(&self, events: Vec<DomainEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// No-op implementation for tests or contexts that don't need events.
#[derive(Clone, Default)]
pub struct NoOpDomainEventSink;

impl DomainEventSink for NoOpDomainEventSink {
    fn emit(&self, _event: DomainEvent) {
        // Intentionally empty - events are discarded
    }
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockDomainEventSink {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MockDomainEventSink {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl DomainEventSink for MockDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Keeps the most recently published state, the way the form-state layer
/// holds its copy between mutations.
#[derive(Clone, Default)]
pub struct PublishedStateSink {
    mapping: Arc<Mutex<Option<AllocationMapping>>>,
    executors: Arc<Mutex<Option<Vec<Executor>>>>,
}

impl PublishedStateSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last published allocation mapping, if any.
    pub fn mapping(&self) -> Option<AllocationMapping> {
        self.mapping.lock().unwrap().clone()
    }

    /// Last published executor roster, if any.
    pub fn executors(&self) -> Option<Vec<Executor>> {
        self.executors.lock().unwrap().clone()
    }
}

impl DomainEventSink for PublishedStateSink {
    fn emit(&self, event: DomainEvent) {
        match event {
            DomainEvent::InheritorAdded { mapping, .. }
            | DomainEvent::RatioChanged { mapping, .. }
            | DomainEvent::InheritorRemoved { mapping, .. } => {
                *self.mapping.lock().unwrap() = Some(mapping);
            }
            DomainEvent::ExecutorsChanged { executors } => {
                *self.executors.lock().unwrap() = Some(executors);
            }
        }
    }
}

//! Change notifications pushed to store observers.

use crate::domain::NoteId;
use log::debug;

/// A change applied to a [`NoteStore`](super::NoteStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    NoteAdded(NoteId),
    NoteUpdated(NoteId),
    NoteDeleted(NoteId),
    TagAdded(String),
    TagRemoved(String),
    /// Any session preference changed value.
    PreferencesChanged,
}

/// Receives store changes synchronously, after each effective mutation.
///
/// Calls that leave the store unchanged produce no event.
pub trait StoreObserver {
    fn on_event(&mut self, event: &StoreEvent);
}

impl<F> StoreObserver for F
where
    F: FnMut(&StoreEvent),
{
    fn on_event(&mut self, event: &StoreEvent) {
        self(event)
    }
}

/// Observer that writes every event to the debug log.
#[derive(Debug, Default)]
pub struct LogObserver;

impl StoreObserver for LogObserver {
    fn on_event(&mut self, event: &StoreEvent) {
        debug!("store event: {:?}", event);
    }
}

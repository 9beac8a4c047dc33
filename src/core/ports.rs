// Ports define what the scheduler needs from a store, without implementing it.
//
// Purpose
// - Describe the event collection as a trait so the application layer codes against it.
//
// Boundaries
// - No input or output here. Adapters implement EventStore in the adapters layer.
// - Operations return structured results. Rendering is left to the shell.

use std::fmt;

use thiserror::Error;

use crate::core::event::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Search,
    Edit,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Operation::List => "No events scheduled.",
            Operation::Search => "Error: no events.",
            Operation::Edit => "No events to edit.",
            Operation::Delete => "No events to delete.",
        };
        f.write_str(message)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{operation}")]
    EmptyStore { operation: Operation },

    #[error("Event '{title}' not found.")]
    NotFound { title: String },
}

/// Replacement values for every field of an edited event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventChanges {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
}

impl From<EventChanges> for Event {
    fn from(changes: EventChanges) -> Self {
        Event {
            title: changes.title,
            description: changes.description,
            date: changes.date,
            time: changes.time,
        }
    }
}

/// Ordered event collection. Insertion order is the order of every read.
///
/// Edit and delete address the first event whose title equals the given one exactly.
pub trait EventStore {
    type Iter<'a>: Iterator<Item = &'a Event>
    where
        Self: 'a;

    fn add(&mut self, event: Event);

    /// Fails with `EmptyStore` when there is nothing to list.
    fn list(&self) -> Result<Self::Iter<'_>, StoreError>;

    /// Zero matches is `Ok` with an empty vector, not an error.
    fn search(&self, query: &str) -> Result<Vec<&Event>, StoreError>;

    fn edit(&mut self, title: &str, changes: EventChanges) -> Result<(), StoreError>;

    fn delete(&mut self, title: &str) -> Result<Event, StoreError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// In memory implementation of the EventStore port.
//
// Purpose
// - Hold the scheduler's events for the lifetime of the process.
//
// Responsibilities
// - Keep events in a Vec so insertion order is the iteration order.
// - Address edits and deletes to the first exact title match.

use std::slice;

use crate::core::event::Event;
use crate::core::ports::{EventChanges, EventStore, Operation, StoreError};
use crate::core::search::SearchQuery;

#[derive(Debug, Default, Clone)]
pub struct InMemoryEventStore {
    events: Vec<Event>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, title: &str, operation: Operation) -> Result<usize, StoreError> {
        if self.events.is_empty() {
            return Err(StoreError::EmptyStore { operation });
        }
        self.events
            .iter()
            .position(|event| event.title == title)
            .ok_or_else(|| StoreError::NotFound {
                title: title.to_string(),
            })
    }
}

impl EventStore for InMemoryEventStore {
    type Iter<'a> = slice::Iter<'a, Event>;

    fn add(&mut self, event: Event) {
        self.events.push(event);
    }

    fn list(&self) -> Result<Self::Iter<'_>, StoreError> {
        if self.events.is_empty() {
            return Err(StoreError::EmptyStore {
                operation: Operation::List,
            });
        }
        Ok(self.events.iter())
    }

    fn search(&self, query: &str) -> Result<Vec<&Event>, StoreError> {
        if self.events.is_empty() {
            return Err(StoreError::EmptyStore {
                operation: Operation::Search,
            });
        }
        let query = SearchQuery::parse(query);
        Ok(self
            .events
            .iter()
            .filter(|event| query.matches(event))
            .collect())
    }

    fn edit(&mut self, title: &str, changes: EventChanges) -> Result<(), StoreError> {
        let index = self.position(title, Operation::Edit)?;
        self.events[index] = changes.into();
        Ok(())
    }

    fn delete(&mut self, title: &str) -> Result<Event, StoreError> {
        let index = self.position(title, Operation::Delete)?;
        Ok(self.events.remove(index))
    }

    fn len(&self) -> usize {
        self.events.len()
    }
}

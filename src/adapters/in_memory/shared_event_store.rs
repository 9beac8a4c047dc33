// Shared handle around the in memory event store for concurrent hosts.
//
// Purpose
// - Let several tasks drive one scheduler without racing on the event list.
//
// Responsibilities
// - Take one exclusive lock per operation and release it before returning.
// - Hand out owned events so no borrow outlives the lock.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::adapters::in_memory::in_memory_event_store::InMemoryEventStore;
use crate::core::event::Event;
use crate::core::ports::{EventChanges, EventStore, StoreError};

#[derive(Debug, Default, Clone)]
pub struct SharedEventStore {
    inner: Arc<Mutex<InMemoryEventStore>>,
}

impl SharedEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(&self, event: Event) {
        self.inner.lock().await.add(event);
    }

    pub async fn list(&self) -> Result<Vec<Event>, StoreError> {
        let guard = self.inner.lock().await;
        Ok(guard.list()?.cloned().collect())
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Event>, StoreError> {
        let guard = self.inner.lock().await;
        Ok(guard.search(query)?.into_iter().cloned().collect())
    }

    pub async fn edit(&self, title: &str, changes: EventChanges) -> Result<(), StoreError> {
        self.inner.lock().await.edit(title, changes)
    }

    pub async fn delete(&self, title: &str) -> Result<Event, StoreError> {
        self.inner.lock().await.delete(title)
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }
}

// Scheduler command handler dispatches one command to the event store.
//
// Responsibilities
// - Run the store operation that matches the command.
// - Return a structured outcome or the store error. Never print.
// - Log each command through tracing.

use tracing::{debug, info};

use crate::application::command::SchedulerCommand;
use crate::core::event::Event;
use crate::core::ports::{EventStore, StoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added,
    Listed(Vec<Event>),
    Found { query: String, events: Vec<Event> },
    Edited { title: String },
    Deleted { title: String },
    Exit,
}

pub struct SchedulerHandler<TEventStore>
where
    TEventStore: EventStore,
{
    event_store: TEventStore,
}

impl<TEventStore> SchedulerHandler<TEventStore>
where
    TEventStore: EventStore,
{
    pub fn new(event_store: TEventStore) -> Self {
        Self { event_store }
    }

    pub fn event_store(&self) -> &TEventStore {
        &self.event_store
    }

    pub fn handle(&mut self, command: SchedulerCommand) -> Result<Outcome, StoreError> {
        let result = self.dispatch(command);
        if let Err(error) = &result {
            debug!(%error, events = self.event_store.len(), "command rejected");
        }
        result
    }

    fn dispatch(&mut self, command: SchedulerCommand) -> Result<Outcome, StoreError> {
        match command {
            SchedulerCommand::Add(event) => {
                info!(title = %event.title, date = %event.date, "adding event");
                self.event_store.add(event);
                Ok(Outcome::Added)
            }
            SchedulerCommand::List => {
                let events: Vec<Event> = self.event_store.list()?.cloned().collect();
                debug!(count = events.len(), "listed events");
                Ok(Outcome::Listed(events))
            }
            SchedulerCommand::Search { query } => {
                let events: Vec<Event> = self
                    .event_store
                    .search(&query)?
                    .into_iter()
                    .cloned()
                    .collect();
                debug!(%query, matches = events.len(), "searched events");
                Ok(Outcome::Found { query, events })
            }
            SchedulerCommand::Edit { title, changes } => {
                self.event_store.edit(&title, changes)?;
                info!(%title, "edited event");
                Ok(Outcome::Edited { title })
            }
            SchedulerCommand::Delete { title } => {
                self.event_store.delete(&title)?;
                info!(%title, "deleted event");
                Ok(Outcome::Deleted { title })
            }
            SchedulerCommand::Exit => Ok(Outcome::Exit),
        }
    }
}

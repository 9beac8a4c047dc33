// Commands accepted by the scheduler, one per menu entry.
//
// Responsibilities
// - Carry the answers collected by the shell to the command handler.
// - Stay independent of how they were collected.

use crate::core::event::Event;
use crate::core::ports::EventChanges;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerCommand {
    Add(Event),
    List,
    Delete { title: String },
    Search { query: String },
    Edit { title: String, changes: EventChanges },
    Exit,
}

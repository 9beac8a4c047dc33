// Text rendering of outcomes and errors for the interactive loop.

use crate::application::command_handler::Outcome;
use crate::core::event::Event;
use crate::core::ports::StoreError;

pub const LIST_HEADER: &str = "\nList of all events:\n";

pub fn render_event(event: &Event) -> String {
    format!(
        "Title: {}\nDescription: {}\nDate: {}\nTime: {}\n\n",
        event.title, event.description, event.date, event.time
    )
}

fn render_events(events: &[Event]) -> String {
    events.iter().map(render_event).collect()
}

pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Added => "Event added successfully.\n".to_string(),
        Outcome::Listed(events) => render_events(events),
        Outcome::Found { query, events } if events.is_empty() => {
            format!("No events found with keyword or date '{query}'.\n")
        }
        Outcome::Found { events, .. } => render_events(events),
        Outcome::Edited { .. } => "Event edited successfully.\n".to_string(),
        Outcome::Deleted { title } => format!("Event '{title}' deleted successfully.\n"),
        Outcome::Exit => "Exiting the event scheduler. Goodbye!\n".to_string(),
    }
}

pub fn render_error(error: &StoreError) -> String {
    format!("{error}\n")
}

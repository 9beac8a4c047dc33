// Numbered menu: choice parsing and the prompts collected for each command.

use std::str::FromStr;

use thiserror::Error;
use tokio::io::{self, AsyncBufRead, AsyncWrite};

use crate::application::command::SchedulerCommand;
use crate::core::event::Event;
use crate::core::ports::EventChanges;
use crate::shell::prompter::Prompter;

pub const OPTIONS: &str = "\nOptions:\n\
1. Add Event\n\
2. List Events\n\
3. Delete Event\n\
4. Search Events\n\
5. Edit Event\n\
6. Exit\n";

pub const CHOICE_PROMPT: &str = "Enter your choice (1/2/3/4/5/6): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Delete,
    Search,
    Edit,
    Exit,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid choice. Please enter a valid option.")]
pub struct InvalidChoice;

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::List),
            "3" => Ok(MenuChoice::Delete),
            "4" => Ok(MenuChoice::Search),
            "5" => Ok(MenuChoice::Edit),
            "6" => Ok(MenuChoice::Exit),
            _ => Err(InvalidChoice),
        }
    }
}

/// Ask the questions `choice` needs and build its command.
/// `None` when the input ends before every answer was given.
pub async fn collect_command<R, W>(
    choice: MenuChoice,
    prompter: &mut Prompter<R, W>,
) -> io::Result<Option<SchedulerCommand>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let command = match choice {
        MenuChoice::Add => {
            let Some(title) = prompter.ask("Enter event title: ").await? else {
                return Ok(None);
            };
            let Some(description) = prompter.ask("Enter event description: ").await? else {
                return Ok(None);
            };
            let Some(date) = prompter.ask("Enter event date (YYYY-MM-DD): ").await? else {
                return Ok(None);
            };
            let Some(time) = prompter.ask("Enter event time (HH:MM): ").await? else {
                return Ok(None);
            };
            SchedulerCommand::Add(Event::new(title, description, date, time))
        }
        MenuChoice::List => SchedulerCommand::List,
        MenuChoice::Delete => {
            let Some(title) = prompter
                .ask("Enter the title of the event to delete: ")
                .await?
            else {
                return Ok(None);
            };
            SchedulerCommand::Delete { title }
        }
        MenuChoice::Search => {
            let Some(query) = prompter
                .ask("Enter keyword or date (YYYY-MM-DD) to search events: ")
                .await?
            else {
                return Ok(None);
            };
            SchedulerCommand::Search { query }
        }
        MenuChoice::Edit => {
            let Some(title) = prompter
                .ask("Enter the title of the event to edit: ")
                .await?
            else {
                return Ok(None);
            };
            let Some(new_title) = prompter.ask("Enter new event title: ").await? else {
                return Ok(None);
            };
            let Some(new_description) = prompter.ask("Enter new event description: ").await?
            else {
                return Ok(None);
            };
            let Some(new_date) = prompter.ask("Enter new event date (YYYY-MM-DD): ").await?
            else {
                return Ok(None);
            };
            let Some(new_time) = prompter.ask("Enter new event time (HH:MM): ").await? else {
                return Ok(None);
            };
            SchedulerCommand::Edit {
                title,
                changes: EventChanges {
                    title: new_title,
                    description: new_description,
                    date: new_date,
                    time: new_time,
                },
            }
        }
        MenuChoice::Exit => SchedulerCommand::Exit,
    };
    Ok(Some(command))
}

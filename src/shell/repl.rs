// Interactive loop: menu, prompts, dispatch, render. Repeats until Exit or end of input.

use tokio::io::{self, AsyncBufRead, AsyncWrite};
use tracing::debug;

use crate::application::command::SchedulerCommand;
use crate::application::command_handler::{Outcome, SchedulerHandler};
use crate::core::ports::EventStore;
use crate::shell::menu::{CHOICE_PROMPT, MenuChoice, OPTIONS, collect_command};
use crate::shell::prompter::Prompter;
use crate::shell::render::{LIST_HEADER, render_error, render_outcome};

pub async fn run<TEventStore, R, W>(
    handler: &mut SchedulerHandler<TEventStore>,
    reader: R,
    writer: W,
) -> io::Result<W>
where
    TEventStore: EventStore,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut prompter = Prompter::new(reader, writer);
    loop {
        prompter.say(OPTIONS).await?;
        let Some(answer) = prompter.ask(CHOICE_PROMPT).await? else {
            debug!("input closed");
            break;
        };
        let choice = match answer.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(invalid) => {
                prompter.say(&format!("{invalid}\n")).await?;
                continue;
            }
        };
        let Some(command) = collect_command(choice, &mut prompter).await? else {
            debug!("input closed mid command");
            break;
        };
        if command == SchedulerCommand::List {
            prompter.say(LIST_HEADER).await?;
        }
        match handler.handle(command) {
            Ok(outcome) => {
                prompter.say(&render_outcome(&outcome)).await?;
                if outcome == Outcome::Exit {
                    break;
                }
            }
            Err(error) => prompter.say(&render_error(&error)).await?,
        }
    }
    Ok(prompter.into_writer())
}

#[cfg(test)]
mod repl_tests {
    use super::*;
    use crate::adapters::in_memory::in_memory_event_store::InMemoryEventStore;
    use rstest::{fixture, rstest};

    #[fixture]
    fn handler() -> SchedulerHandler<InMemoryEventStore> {
        SchedulerHandler::new(InMemoryEventStore::new())
    }

    async fn drive(handler: &mut SchedulerHandler<InMemoryEventStore>, input: &str) -> String {
        let output = run(handler, input.as_bytes(), Vec::new()).await.unwrap();
        String::from_utf8(output).unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_add_then_list_two_events(
        mut handler: SchedulerHandler<InMemoryEventStore>,
    ) {
        let input = "1\nTest Event 1\nDescription 1\n2024-01-31\n12:00\n\
                     1\nTest Event 2\nDescription 2\n2024-02-01\n14:00\n\
                     2\n6\n";
        let output = drive(&mut handler, input).await;
        assert_eq!(output.matches("Event added successfully.").count(), 2);
        let first = output.find("Title: Test Event 1").unwrap();
        let second = output.find("Title: Test Event 2").unwrap();
        assert!(first < second);
        assert!(output.contains("List of all events:"));
        assert!(output.ends_with("Exiting the event scheduler. Goodbye!\n"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_empty_store_messages_and_keep_going(
        mut handler: SchedulerHandler<InMemoryEventStore>,
    ) {
        let input = "2\n4\ntest\n3\nNothing\n5\nNothing\na\nb\nc\nd\n6\n";
        let output = drive(&mut handler, input).await;
        assert!(output.contains("No events scheduled."));
        assert!(output.contains("Error: no events."));
        assert!(output.contains("No events to delete."));
        assert!(output.contains("No events to edit."));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_an_invalid_choice(mut handler: SchedulerHandler<InMemoryEventStore>) {
        let output = drive(&mut handler, "9\n6\n").await;
        assert!(output.contains("Invalid choice. Please enter a valid option."));
        assert_eq!(output.matches("Options:").count(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_search_edit_and_delete(mut handler: SchedulerHandler<InMemoryEventStore>) {
        let input = "1\nDentist\nCheck-up\n2024-03-04\n08:15\n\
                     4\n2024-03-04\n\
                     4\nholiday\n\
                     5\nDentist\nDoctor\nAnnual\n2024-03-05\n09:30\n\
                     3\nDentist\n\
                     3\nDoctor\n\
                     6\n";
        let output = drive(&mut handler, input).await;
        assert!(output.contains("Title: Dentist\nDescription: Check-up\nDate: 2024-03-04\nTime: 08:15\n"));
        assert!(output.contains("No events found with keyword or date 'holiday'."));
        assert!(output.contains("Event edited successfully."));
        assert!(output.contains("Event 'Dentist' not found."));
        assert!(output.contains("Event 'Doctor' deleted successfully."));
        assert!(handler.event_store().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_going_after_a_line_of_invalid_utf8(
        mut handler: SchedulerHandler<InMemoryEventStore>,
    ) {
        let mut input = b"1\nA\nB\n2024-01-31\n12:00\n4\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b"2\n6\n");
        let output = run(&mut handler, input.as_slice(), Vec::new()).await.unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("No events found with keyword or date '\u{fffd}\u{fffd}'."));
        assert!(output.contains("List of all events:"));
        assert!(output.contains("Title: A\n"));
        assert!(output.ends_with("Exiting the event scheduler. Goodbye!\n"));
        assert_eq!(handler.event_store().len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_stop_at_end_of_input(mut handler: SchedulerHandler<InMemoryEventStore>) {
        let output = drive(&mut handler, "1\nHalf an event\n").await;
        assert!(!output.contains("Goodbye"));
        assert!(handler.event_store().is_empty());
    }
}

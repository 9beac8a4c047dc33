use tokio::io::BufReader;

use event_scheduler::adapters::in_memory::in_memory_event_store::InMemoryEventStore;
use event_scheduler::application::command_handler::SchedulerHandler;
use event_scheduler::core::ports::EventStore;
use event_scheduler::shell::config::Config;
use event_scheduler::shell::{repl, telemetry};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init(&config)?;

    let mut handler = SchedulerHandler::new(InMemoryEventStore::new());
    tracing::info!("event scheduler started");

    repl::run(
        &mut handler,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;

    tracing::info!(events = handler.event_store().len(), "event scheduler stopped");
    Ok(())
}

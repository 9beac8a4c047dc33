// Composition pieces for the interactive scheduler.
//
// Responsibilities
// - Read config from the environment and install logging.
// - Prompt for commands, hand them to the command handler, print the outcome.
//
// The binary entry point lives next to this file in main.rs.

pub mod config;
pub mod menu;
pub mod prompter;
pub mod render;
pub mod repl;
pub mod telemetry;

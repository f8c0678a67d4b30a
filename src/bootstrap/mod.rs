//! Process bootstrap: CLI parsing, config loading, logging and wiring.

pub mod cli;
pub mod config;
pub mod run;
pub mod tracing;

pub use cli::Cli;
pub use config::load_config;
pub use run::{execute, run, RunOutcome};

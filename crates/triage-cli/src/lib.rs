pub mod cli;
pub mod commands;
pub mod config;

pub use cli::*;
pub use commands::{CaseRecord, CommandStatus};
pub use config::{LoggingConfig, TriageConfig};

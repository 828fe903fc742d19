pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::TerminalHost, CliConfig};

pub use config::{EnvCredentials, SummariserConfig};
pub use core::{
    completion::CompletionClient,
    export::ExportBridge,
    orchestrator::{InvocationState, Orchestrator, SummaryPanel},
};
pub use utils::error::{ErrorKind, Result, SummaryError};

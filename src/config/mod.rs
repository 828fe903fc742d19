#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use toml_config::SummariserConfig;

use crate::core::CredentialProvider;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

/// Reads the bearer token from a process environment variable on every call.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var_name(&self) -> &str {
        &self.var
    }
}

impl CredentialProvider for EnvCredentials {
    fn credential(&self) -> Option<String> {
        std::env::var(&self.var)
            .ok()
            .filter(|value| !value.trim().is_empty())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "code-summariser")]
#[command(about = "Explain a code selection with a language model and export the summary")]
pub struct CliConfig {
    /// Source file the selection is taken from
    pub file: PathBuf,

    /// Selected line range, 1-based and inclusive (e.g. 10:42). Whole file when omitted.
    #[arg(long)]
    pub lines: Option<String>,

    /// TOML file overriding endpoint, model, temperature and panel settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Where the panel HTML is written
    #[arg(long, default_value = "summary-panel.html")]
    pub panel_out: PathBuf,

    /// Export the summary to this path without prompting
    #[arg(long, conflicts_with = "no_export")]
    pub export: Option<PathBuf>,

    /// Skip the export step
    #[arg(long)]
    pub no_export: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

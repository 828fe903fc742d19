use clap::Parser;
use code_summariser::utils::{logger, validation::Validate};
use code_summariser::{
    CliConfig, CompletionClient, EnvCredentials, Orchestrator, SummariserConfig, TerminalHost,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting code-summariser");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match &cli.config {
        Some(path) => SummariserConfig::from_file(path)?,
        None => SummariserConfig::default(),
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let host = Arc::new(TerminalHost::from_cli(&cli)?);
    let credentials = EnvCredentials::new(config.credential_env());
    let client = CompletionClient::new(config.clone(), credentials);
    let orchestrator = Orchestrator::new(client, Arc::clone(&host), &config);

    // failures are already reported to the user by the orchestrator
    let Ok(panel) = orchestrator.summarise_selection().await else {
        std::process::exit(2);
    };

    println!("{}", host.panel_path().display());

    if !cli.no_export {
        panel.export().await;
    }

    Ok(())
}

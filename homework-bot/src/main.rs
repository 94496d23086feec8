//! Binary for the homework status bot.

use anyhow::Result;
use clap::Parser;
use homework_bot::{
    log_file_from_env, run_bot, run_once, BotConfig, Cli, Commands, IterationOutcome,
};
use homework_core::init_tracing;
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&log_file_from_env())?;

    let config = match BotConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!(severity = "CRITICAL", error = %e, "Cannot start homework bot");
            return Err(e.into());
        }
    };

    let now = chrono::Utc::now().timestamp();
    match cli.command() {
        Commands::Run { cursor } => run_bot(config, cursor.start_timestamp(now)).await,
        Commands::Once { cursor } => match run_once(config, cursor.start_timestamp(now)).await? {
            IterationOutcome::Failed { error, .. } => Err(error.into()),
            _ => Ok(()),
        },
    }
}

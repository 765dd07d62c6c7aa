//! Binary for the origami bot.

use anyhow::Result;
use clap::Parser;
use origami_bot::{load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::from_filename("config.env").ok();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token, health_port } => {
            let config = load_config(token, health_port)?;
            run_bot(config).await
        }
    }
}

use anyhow::Result;
use clap::Parser;
use log::error;

use prompt_booster::{Cli, CommandHandler};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging - info by default, debug with --verbose, RUST_LOG wins
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut handler = match CommandHandler::new(cli.config) {
        Ok(h) => h,
        Err(e) => {
            error!("Failed to initialize prompt-booster: {e:#}");
            eprintln!("Error: Failed to initialize prompt-booster: {e:#}");
            std::process::exit(1);
        }
    };

    let command = cli.command.unwrap_or_default();
    match handler.handle_command(command).await {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            error!("Command failed: {e:#}");
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }

    Ok(())
}

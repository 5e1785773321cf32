//! ghsec - List GitHub Actions secrets from your terminal

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod output;
mod repo;
mod scope;

use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default());
    if cli.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    match cli.command {
        Commands::List { org } => {
            cli::list::run(org.as_deref(), cli.repo.as_deref(), cli.config.as_deref()).await
        }
        Commands::Version => {
            println!("ghsec version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

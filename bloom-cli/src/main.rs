use clap::Parser;

use crate::cli::Cli;
use crate::commands::Commands;

mod cli;
mod commands;
mod error;
mod util;

pub use error::AppError;
pub use util::{provide_config, provide_store, require_loaded, select_profile};

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Cli::parse();

    if let Err(e) = run(args).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: Cli) -> Result<(), AppError> {
    let config = provide_config(&args.config, &args.source)?;
    log::debug!("using source {}", config.source);

    match &args.command {
        Commands::List(list) => list.run(&config).await,
        Commands::Show(show) => show.run(&config).await,
        Commands::Export(export) => export.run(&config).await,
        Commands::Contact(contact) => contact.run(&config).await,
        Commands::Stats(stats) => stats.run(&config).await,
        Commands::Browse(browse) => browse.run(&config).await,
    }
}

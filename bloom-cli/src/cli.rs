use crate::commands::Commands;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(name = "bloom-cli")]
#[clap(about = "Browse, filter and export directory profiles", long_about = None)]
pub struct Cli {
    #[clap(long, short, global = true, help = "Path to a JSON config file")]
    pub config: Option<PathBuf>,
    #[clap(
        long,
        short,
        global = true,
        help = "Endpoint URL or local JSON file with the profiles"
    )]
    pub source: Option<String>,
    #[clap(subcommand)]
    pub command: Commands,
}

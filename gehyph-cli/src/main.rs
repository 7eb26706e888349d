//! `gehyph` command-line entry point

use anyhow::Result;
use clap::Parser;
use gehyph_cli::commands::Commands;

#[derive(Debug, Parser)]
#[command(
    name = "gehyph",
    version,
    about = "Hyphenate Georgian text with soft hyphens or custom markers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

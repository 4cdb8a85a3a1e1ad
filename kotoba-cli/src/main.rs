//! kotoba: discover new words in unsegmented text

use anyhow::Result;
use clap::Parser;
use kotoba_cli::commands::Commands;

/// Unsupervised new-word discovery from cohesion and boundary entropy
#[derive(Debug, Parser)]
#[command(name = "kotoba", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Discover(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::List { subcommand } => subcommand.execute(),
    }
}

//! Sdkshift CLI - switch the active version of installed SDKs and tools

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("sdkshift=debug")
    } else {
        EnvFilter::new("sdkshift=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    // Completions don't need the catalog or the store.
    if let Commands::Completions(args) = &cli.command {
        return commands::completions::execute(args);
    }

    let mut ctx = commands::AppContext::new(&cli)?;

    // Execute command
    match cli.command {
        Commands::Use(args) => commands::use_cmd::execute(&mut ctx, args),
        Commands::List => commands::list::execute(&ctx),
        Commands::Versions(args) => commands::versions::execute(&mut ctx, args),
        Commands::Current(args) => commands::current::execute(&mut ctx, args),
        Commands::Remove(args) => commands::remove::execute(&mut ctx, args),
        Commands::Completions(_) => unreachable!("handled above"),
    }
}

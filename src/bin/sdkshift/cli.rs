//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Sdkshift - switch the active version of installed SDKs and tools
#[derive(Parser)]
#[command(name = "sdkshift")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base directory holding the tool install tree
    #[arg(long, global = true, env = "SDKSHIFT_BASE")]
    pub base: Option<PathBuf>,

    /// Tool catalog file (defaults to <base>/tools.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Profile file backing the environment store
    /// (defaults to ~/.sdkshift/sdk.profile)
    #[arg(long, global = true, env = "SDKSHIFT_PROFILE")]
    pub profile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Activate a tool version
    Use(UseArgs),

    /// List all configured tools
    List,

    /// List installed versions of a tool
    Versions(VersionsArgs),

    /// Show the version a tool's current-link points at
    Current(CurrentArgs),

    /// Deactivate a tool
    Remove(RemoveArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct UseArgs {
    /// Tool name as configured in the catalog
    pub tool: String,

    /// Version directory to activate (defaults to the highest installed)
    pub version: Option<String>,
}

#[derive(Args)]
pub struct VersionsArgs {
    /// Tool name as configured in the catalog
    pub tool: String,
}

#[derive(Args)]
pub struct CurrentArgs {
    /// Tool name as configured in the catalog
    pub tool: String,
}

#[derive(Args)]
pub struct RemoveArgs {
    /// Tool name to deactivate
    pub tool: String,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

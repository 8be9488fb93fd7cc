//! Command implementations

pub mod completions;
pub mod current;
pub mod list;
pub mod remove;
pub mod use_cmd;
pub mod versions;

use std::path::PathBuf;

use anyhow::{Context, Result};

use sdkshift::util::diagnostic;
use sdkshift::{Platform, ProfileStore, Switcher, SwitchError, ToolRegistry};

use crate::cli::Cli;

/// Everything a command needs: the loaded catalog, the open store, and
/// the resolved paths.
pub struct AppContext {
    pub registry: ToolRegistry,
    pub store: ProfileStore,
    pub base: PathBuf,
    pub platform: Platform,
    backup_path: PathBuf,
}

impl AppContext {
    /// Resolve global flags and load catalog and store.
    pub fn new(cli: &Cli) -> Result<Self> {
        let platform = Platform::host()?;

        let base = match &cli.base {
            Some(base) => base.clone(),
            None => home_dir()?.join("sdk"),
        };

        let config = cli
            .config
            .clone()
            .unwrap_or_else(|| base.join("tools.toml"));
        let registry = ToolRegistry::load_or_empty(&config);

        let profile = match &cli.profile {
            Some(profile) => profile.clone(),
            None => home_dir()?.join(".sdkshift").join("sdk.profile"),
        };
        let store = ProfileStore::open(&profile)?;

        // The rollback snapshot lives next to the profile; stale ones
        // are overwritten on the next activation.
        let backup_path = profile.with_file_name("env_backup.json");

        Ok(AppContext {
            registry,
            store,
            base,
            platform,
            backup_path,
        })
    }

    /// Build the switching engine over this context.
    pub fn switcher(&mut self) -> Switcher<'_> {
        Switcher::new(&self.registry, &mut self.store, self.base.clone(), self.platform)
            .with_backup_path(self.backup_path.clone())
    }

    /// Print a domain error as a diagnostic and terminate.
    pub fn fail(&self, err: SwitchError) -> ! {
        diagnostic::emit(&err.to_diagnostic(&self.registry.names()), false);
        std::process::exit(1);
    }
}

fn home_dir() -> Result<PathBuf> {
    directories::BaseDirs::new()
        .map(|b| b.home_dir().to_path_buf())
        .context("cannot determine the home directory")
}

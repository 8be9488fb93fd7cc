//! Deactivation engine.
//!
//! Reverses activation: strips the tool's directory out of PATH and
//! removes the other declared variables. There is no persisted record of
//! activation; the effects are recomputed from the catalog and the
//! store, which is why PATH removal pattern-matches on the tool
//! directory instead of reading a log.

use crate::core::errors::SwitchError;
use crate::core::tool::ToolSpec;
use crate::ops::Switcher;
use crate::util::pathlist;

impl Switcher<'_> {
    /// Deactivate `tool`.
    ///
    /// Unknown tools are a no-op, not an error: deactivating something
    /// that was never configured has nothing to undo. The indirection
    /// symlink is deliberately left behind; version enumeration excludes
    /// it by name, so a dangling link is harmless.
    pub fn deactivate(&mut self, tool: &str) -> Result<(), SwitchError> {
        if !self.registry.contains(tool) {
            tracing::debug!("`{}` is not in the catalog, nothing to deactivate", tool);
            return Ok(());
        }
        let spec = self.registry.get(tool)?.clone();

        self.store.backup(self.backup_path())?;

        match self.apply_deactivation(&spec) {
            Ok(()) => Ok(()),
            Err(cause) => {
                let backup = self.backup_path().to_path_buf();
                if let Err(restore_err) = self.store.restore(&backup) {
                    tracing::error!("rollback after failed deactivation failed: {}", restore_err);
                }
                Err(cause)
            }
        }
    }

    fn apply_deactivation(&mut self, spec: &ToolSpec) -> Result<(), SwitchError> {
        let dir = self.tool_dir(spec);
        let needle = dir.to_string_lossy().into_owned();

        // The catalog decides how PATH is spelled for this tool
        // (`Path` on Windows catalogs); fall back to the canonical name.
        let path_var = spec
            .env_vars
            .iter()
            .find(|r| r.is_path_var())
            .map(|r| r.name.clone())
            .unwrap_or_else(|| "PATH".to_string());

        let current = self.store.get(&path_var)?.unwrap_or_default();
        let stripped =
            pathlist::strip_containing(&current, &needle, self.platform.path_separator());
        self.store.set(&path_var, &stripped)?;

        for rule in spec.env_vars.iter().filter(|r| !r.is_path_var()) {
            self.store.remove(&rule.name)?;
        }
        Ok(())
    }
}

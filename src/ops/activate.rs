//! Activation engine.
//!
//! Activating a tool points the indirection symlink at the chosen
//! version directory and applies each catalog rule to the environment
//! store. The store is snapshotted first; any failure after the
//! snapshot restores it and surfaces as [`SwitchError::Activation`].

use std::path::{Path, PathBuf};

use crate::core::errors::SwitchError;
use crate::core::tool::{EnvRule, RuleKind, ToolSpec};
use crate::ops::Switcher;
use crate::util::{fs, pathlist};

impl Switcher<'_> {
    /// Activate `version` of `tool`.
    ///
    /// `None` reuses whatever the indirection symlink already targets;
    /// the caller must guarantee the link exists in that case - the
    /// engine does not resolve "latest" itself.
    pub fn activate(&mut self, tool: &str, version: Option<&str>) -> Result<(), SwitchError> {
        let spec = self.registry.get(tool)?.clone();

        self.store.backup(self.backup_path())?;
        tracing::debug!(
            "activating {} {} (backup at {})",
            tool,
            version.unwrap_or("<current>"),
            self.backup_path().display()
        );

        match self.apply_activation(&spec, version) {
            Ok(()) => Ok(()),
            Err(cause) => {
                // Best-effort rollback; the original failure is the one
                // worth reporting.
                let backup = self.backup_path().to_path_buf();
                if let Err(restore_err) = self.store.restore(&backup) {
                    tracing::error!("rollback after failed activation failed: {}", restore_err);
                }
                Err(SwitchError::Activation {
                    tool: tool.to_string(),
                    source: Box::new(cause),
                })
            }
        }
    }

    fn apply_activation(
        &mut self,
        spec: &ToolSpec,
        version: Option<&str>,
    ) -> Result<(), SwitchError> {
        let dir = self.tool_dir(spec);
        let link_path = dir.join(self.platform.current_link_name());

        if let Some(version) = version {
            let target = dir.join(version);
            // Never replace or validate an existing link, even a stale
            // one: re-activation without a version change must not need
            // filesystem privilege it doesn't have.
            if !fs::is_symlink(&link_path) {
                fs::symlink_dir(&target, &link_path).map_err(|source| SwitchError::Symlink {
                    path: link_path.clone(),
                    source,
                })?;
            }
        }

        for rule in &spec.env_vars {
            self.apply_rule(rule, &link_path)?;
        }
        Ok(())
    }

    fn apply_rule(&mut self, rule: &EnvRule, link_path: &Path) -> Result<(), SwitchError> {
        let resolved = resolve_value(rule, link_path)?;

        if rule.is_path_var() {
            let current = self.store.get(&rule.name)?.unwrap_or_default();
            let merged = pathlist::push_unique(
                &current,
                &resolved.to_string_lossy(),
                self.platform.path_separator(),
            );
            self.store.set(&rule.name, &merged)?;
        } else {
            match rule.kind {
                RuleKind::Path => self.store.set(&rule.name, &resolved.to_string_lossy())?,
                RuleKind::Flag => self.store.set(&rule.name, &rule.value)?,
            }
        }
        Ok(())
    }
}

/// Resolve a rule's value against the indirection link path.
fn resolve_value(rule: &EnvRule, link_path: &Path) -> Result<PathBuf, SwitchError> {
    if rule.absolute {
        if rule.kind == RuleKind::Path
            && (rule.value.is_empty() || !Path::new(&rule.value).is_absolute())
        {
            return Err(SwitchError::InvalidRule {
                var: rule.name.clone(),
                value: rule.value.clone(),
            });
        }
        return Ok(PathBuf::from(&rule.value));
    }

    if rule.value.is_empty() {
        Ok(link_path.to_path_buf())
    } else {
        Ok(link_path.join(&rule.value))
    }
}

//! The activation, deactivation, and version-resolution engines.

pub mod activate;
pub mod deactivate;
pub mod versions;

use std::path::PathBuf;

use crate::core::platform::Platform;
use crate::core::registry::ToolRegistry;
use crate::core::tool::ToolSpec;
use crate::store::EnvStore;

pub use versions::pick_default;

/// The switching engine: resolves catalog entries against a base
/// directory and applies their effects to the environment store.
///
/// All filesystem and store calls are blocking and sequential; the only
/// scoped resource is the backup file, which is written before any
/// mutating step and safe to leave behind after success.
pub struct Switcher<'a> {
    registry: &'a ToolRegistry,
    store: &'a mut dyn EnvStore,
    base_dir: PathBuf,
    platform: Platform,
    backup_path: PathBuf,
}

impl<'a> Switcher<'a> {
    /// Create an engine over a loaded registry and an open store.
    pub fn new(
        registry: &'a ToolRegistry,
        store: &'a mut dyn EnvStore,
        base_dir: impl Into<PathBuf>,
        platform: Platform,
    ) -> Self {
        Switcher {
            registry,
            store,
            base_dir: base_dir.into(),
            platform,
            backup_path: std::env::temp_dir().join("sdkshift_env_backup.json"),
        }
    }

    /// Override where the rollback snapshot is written.
    pub fn with_backup_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.backup_path = path.into();
        self
    }

    pub fn registry(&self) -> &ToolRegistry {
        self.registry
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Resolved install directory for a tool (base dir + normalized
    /// catalog segment).
    pub(crate) fn tool_dir(&self, spec: &ToolSpec) -> PathBuf {
        self.base_dir.join(self.platform.normalize_dir(&spec.dir))
    }

    pub(crate) fn backup_path(&self) -> &std::path::Path {
        &self.backup_path
    }
}

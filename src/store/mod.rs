//! Persistent environment-variable store.
//!
//! The engines only depend on this capability set; each platform backend
//! supplies durable get/set/remove/list over the user's environment
//! namespace. Backup and restore have default implementations on top of
//! `list_all`/`set`, so backends only carry the storage-specific parts.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod profile;

pub use profile::ProfileStore;

/// Error from the environment store or its backup file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot {op} {}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed backup file {}", .path.display())]
    BackupFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Capability set over the OS's persistent environment-variable namespace.
pub trait EnvStore {
    /// Read one variable, `None` if unset.
    fn get(&self, name: &str) -> Result<Option<String>, StoreError>;

    /// Durably set one variable.
    fn set(&mut self, name: &str, value: &str) -> Result<(), StoreError>;

    /// Durably remove one variable. Removing an absent variable succeeds.
    fn remove(&mut self, name: &str) -> Result<(), StoreError>;

    /// Snapshot of every stored variable.
    fn list_all(&self) -> Result<BTreeMap<String, String>, StoreError>;

    /// Write every variable to `path` as one flat JSON object.
    ///
    /// A stale backup at the same path is overwritten.
    fn backup(&self, path: &Path) -> Result<(), StoreError> {
        let vars = self.list_all()?;
        let json = serde_json::to_string_pretty(&vars).map_err(|source| {
            StoreError::BackupFormat {
                path: path.to_path_buf(),
                source,
            }
        })?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                    op: "create backup directory for",
                    path: path.to_path_buf(),
                    source,
                })?;
            }
        }

        std::fs::write(path, json).map_err(|source| StoreError::Io {
            op: "write backup",
            path: path.to_path_buf(),
            source,
        })
    }

    /// Re-apply every variable found in the backup at `path`.
    ///
    /// Variables absent from the backup are left alone - restore never
    /// deletes. A missing backup file is a warning, not an error.
    fn restore(&mut self, path: &Path) -> Result<(), StoreError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!("backup file {} not found, nothing restored", path.display());
                return Ok(());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    op: "read backup",
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let vars: BTreeMap<String, String> =
            serde_json::from_str(&contents).map_err(|source| StoreError::BackupFormat {
                path: path.to_path_buf(),
                source,
            })?;

        for (name, value) in &vars {
            self.set(name, value)?;
        }
        Ok(())
    }
}

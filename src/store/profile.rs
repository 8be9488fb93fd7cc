//! Profile-file backed environment store.
//!
//! Persists variables as `export KEY="VALUE"` lines in a profile snippet
//! the user sources from their shell rc. The file is read once when the
//! store is opened and rewritten in full after every mutation; between
//! mutations the in-memory map is authoritative.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::store::{EnvStore, StoreError};

/// File-backed [`EnvStore`] implementation.
#[derive(Debug)]
pub struct ProfileStore {
    path: PathBuf,
    vars: BTreeMap<String, String>,
}

impl ProfileStore {
    /// Open a profile store, loading existing variables.
    ///
    /// A missing file is an empty store; the file is created on the
    /// first mutation.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let vars = match std::fs::read_to_string(&path) {
            Ok(contents) => parse_profile(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => {
                return Err(StoreError::Io {
                    op: "read profile",
                    path,
                    source,
                })
            }
        };
        Ok(ProfileStore { path, vars })
    }

    /// Location of the backing profile file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                    op: "create profile directory for",
                    path: self.path.clone(),
                    source,
                })?;
            }
        }

        let mut out = String::from("# Managed by sdkshift - do not edit by hand\n");
        for (name, value) in &self.vars {
            out.push_str(&format!("export {}=\"{}\"\n", name, escape(value)));
        }

        std::fs::write(&self.path, out).map_err(|source| StoreError::Io {
            op: "write profile",
            path: self.path.clone(),
            source,
        })
    }
}

impl EnvStore for ProfileStore {
    fn get(&self, name: &str) -> Result<Option<String>, StoreError> {
        Ok(self.vars.get(name).cloned())
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), StoreError> {
        self.vars.insert(name.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, name: &str) -> Result<(), StoreError> {
        if self.vars.remove(name).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn list_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        Ok(self.vars.clone())
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next) => out.push(next),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn parse_profile(contents: &str) -> BTreeMap<String, String> {
    let mut vars = BTreeMap::new();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let assignment = line.strip_prefix("export ").unwrap_or(line);
        let Some((name, raw_value)) = assignment.split_once('=') else {
            tracing::warn!("skipping unparseable profile line: {}", line);
            continue;
        };

        let raw_value = raw_value.trim();
        let value = raw_value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .map(unescape)
            .unwrap_or_else(|| raw_value.to_string());

        vars.insert(name.trim().to_string(), value);
    }

    vars
}

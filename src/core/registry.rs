//! Tool registry - the catalog of switchable tools.
//!
//! Loaded once from `tools.toml` at startup; the engines never re-read
//! the file. Each top-level table is one tool:
//!
//! ```toml
//! [Node]
//! env_vars = [{ name = "Path", value = "" }]
//!
//! [Java]
//! dir = "Java"
//! env_vars = ["JAVA_HOME", { name = "Path", value = "bin" }]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::errors::SwitchError;
use crate::core::tool::{RawTool, ToolSpec};

/// In-memory mapping from tool name to its validated spec.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, ToolSpec>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        ToolRegistry {
            tools: BTreeMap::new(),
        }
    }

    /// Parse a registry from catalog file contents.
    pub fn parse(contents: &str) -> Result<Self> {
        let raw: BTreeMap<String, RawTool> =
            toml::from_str(contents).context("failed to parse tool catalog")?;

        let tools = raw
            .into_iter()
            .map(|(name, raw_tool)| {
                let spec = ToolSpec::from_raw(&name, raw_tool);
                (name, spec)
            })
            .collect();

        Ok(ToolRegistry { tools })
    }

    /// Load a registry from a catalog file.
    ///
    /// A missing or malformed catalog degrades to an empty registry with
    /// a warning; listing and removal of unrelated state must still work,
    /// and every lookup then fails with `UnknownTool`.
    pub fn load_or_empty(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("no tool catalog at {}: {}", path.display(), e);
                return ToolRegistry::new();
            }
        };

        match ToolRegistry::parse(&contents) {
            Ok(registry) => {
                tracing::debug!(
                    "loaded {} tool(s) from {}",
                    registry.len(),
                    path.display()
                );
                registry
            }
            Err(e) => {
                tracing::warn!("ignoring malformed catalog {}: {:#}", path.display(), e);
                ToolRegistry::new()
            }
        }
    }

    /// Look up a tool by its case-sensitive name.
    pub fn get(&self, name: &str) -> Result<&ToolSpec, SwitchError> {
        self.tools
            .get(name)
            .ok_or_else(|| SwitchError::UnknownTool(name.to_string()))
    }

    /// Whether a tool is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// All registered tool names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

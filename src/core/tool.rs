//! Tool specifications and environment rules.
//!
//! A [`ToolSpec`] is the validated, in-memory form of one catalog entry.
//! Catalog rules come in two shapes - a bare variable name, or a table
//! with a value template - and are normalized into [`EnvRule`] once at
//! load time, never re-discriminated during activation.

use serde::{Deserialize, Serialize};

/// How a rule's value is interpreted during activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Resolved relative to the active version directory (or used as-is
    /// when `absolute` is set).
    #[default]
    Path,
    /// An opaque literal value, never path-resolved.
    Flag,
}

/// One environment-variable effect of activating a tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvRule {
    /// Target environment-variable name.
    pub name: String,
    /// Path suffix under the version directory; empty means the version
    /// directory itself. With `absolute`, a full path override.
    pub value: String,
    pub kind: RuleKind,
    /// The value is a complete absolute path; validated at activation
    /// time, not at load time.
    pub absolute: bool,
}

impl EnvRule {
    /// Whether this rule targets the PATH variable.
    ///
    /// The comparison is case-insensitive: Windows catalogs spell it
    /// `Path`, POSIX ones `PATH`.
    pub fn is_path_var(&self) -> bool {
        self.name.eq_ignore_ascii_case("PATH")
    }
}

/// Raw catalog shape of a rule, before normalization.
///
/// `env_vars = ["JAVA_HOME", { name = "Path", value = "bin" }]` mixes
/// both shapes in one list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawRule {
    /// Bare variable name: set to the resolved version directory verbatim.
    Named(String),
    /// Table with an explicit value template.
    Templated {
        name: String,
        #[serde(default)]
        value: String,
        #[serde(default)]
        kind: RuleKind,
        #[serde(default)]
        absolute: bool,
    },
}

impl RawRule {
    /// Normalize into the single in-memory rule shape.
    pub fn normalize(self) -> EnvRule {
        match self {
            RawRule::Named(name) => EnvRule {
                name,
                value: String::new(),
                kind: RuleKind::Path,
                absolute: false,
            },
            RawRule::Templated {
                name,
                value,
                kind,
                absolute,
            } => EnvRule {
                name,
                value,
                kind,
                absolute,
            },
        }
    }
}

/// Raw catalog shape of a tool entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTool {
    /// Directory segment under the base dir; defaults to the tool name.
    #[serde(default)]
    pub dir: Option<String>,
    #[serde(default)]
    pub env_vars: Vec<RawRule>,
}

/// A registered tool, constructed once at startup and immutable after.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    /// Unique, case-sensitive tool name.
    pub name: String,
    /// Directory segment under the base dir (forward slashes; normalized
    /// per platform at resolution time).
    pub dir: String,
    /// Ordered rules; order does not affect the outcome except that PATH
    /// is cumulative.
    pub env_vars: Vec<EnvRule>,
}

impl ToolSpec {
    /// Build a spec from its raw catalog entry.
    pub fn from_raw(name: &str, raw: RawTool) -> Self {
        ToolSpec {
            name: name.to_string(),
            dir: raw.dir.unwrap_or_else(|| name.to_string()),
            env_vars: raw.env_vars.into_iter().map(RawRule::normalize).collect(),
        }
    }
}

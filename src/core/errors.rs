//! Error taxonomy for the switching engines.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::store::StoreError;
use crate::util::diagnostic::Diagnostic;

/// Error raised by the catalog, resolver, and engines.
#[derive(Debug, Error)]
pub enum SwitchError {
    /// The tool name is not present in the catalog.
    #[error("unknown tool `{0}`")]
    UnknownTool(String),

    /// The host OS is not one of windows/linux/macos.
    #[error("unsupported platform `{0}`")]
    UnsupportedPlatform(String),

    /// A tool's install directory could not be enumerated.
    #[error("cannot read install directory {}", .path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An env rule declared `absolute` without a usable absolute value.
    #[error("rule for `{var}` is marked absolute but `{value}` is not a non-empty absolute path")]
    InvalidRule { var: String, value: String },

    /// Creating the indirection symlink failed.
    #[error("cannot create symlink {}", .path.display())]
    Symlink {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The persistent environment store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Activation failed after the backup snapshot; the store has been
    /// rolled back (best effort) before this is returned.
    #[error("failed to activate `{tool}`")]
    Activation {
        tool: String,
        #[source]
        source: Box<SwitchError>,
    },
}

impl SwitchError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self, known_tools: &[String]) -> Diagnostic {
        match self {
            SwitchError::UnknownTool(tool) => {
                let mut diag = Diagnostic::error(format!("unknown tool `{}`", tool));
                if known_tools.is_empty() {
                    diag = diag.with_context("the catalog is empty (missing or malformed tools.toml?)");
                } else {
                    diag = diag.with_context(format!("configured tools: {}", known_tools.join(", ")));
                }
                diag.with_suggestion("Run `sdkshift list` to see configured tools".to_string())
            }

            SwitchError::UnsupportedPlatform(os) => {
                Diagnostic::error(format!("unsupported platform `{}`", os))
                    .with_context("only windows, linux and macos are recognized")
            }

            SwitchError::DirectoryAccess { path, source } => {
                Diagnostic::error(format!("cannot read install directory {}", path.display()))
                    .with_context(source.to_string())
                    .with_suggestion("Check the `dir` entry in tools.toml and the --base path".to_string())
            }

            SwitchError::InvalidRule { var, value } => {
                Diagnostic::error(format!("invalid rule for `{}`", var))
                    .with_context(format!("`absolute = true` requires a non-empty absolute path, got `{}`", value))
            }

            SwitchError::Symlink { path, source } => {
                Diagnostic::error(format!("cannot create symlink {}", path.display()))
                    .with_context(source.to_string())
            }

            SwitchError::Store(err) => Diagnostic::error(err.to_string()),

            SwitchError::Activation { tool, source } => source
                .to_diagnostic(known_tools)
                .with_context(format!("while activating `{}`; environment restored from backup", tool)),
        }
    }
}

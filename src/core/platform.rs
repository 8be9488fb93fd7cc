//! Host platform detection.
//!
//! Version directories are tagged with a short OS prefix (`win_16.11.1`,
//! `lin_jdk-17`, ...) and the indirection symlink is named after the same
//! prefix (`win_current`). The engines take a `Platform` value rather than
//! compile-time cfg so tests can pin a platform regardless of the host.

use std::fmt;

use crate::core::errors::SwitchError;

/// Suffix of the indirection symlink name; also excludes the link itself
/// from version enumeration.
pub const CURRENT_SUFFIX: &str = "_current";

/// A recognized host operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
}

impl Platform {
    /// Detect the host platform.
    pub fn host() -> Result<Self, SwitchError> {
        match std::env::consts::OS {
            "windows" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            "macos" => Ok(Platform::MacOs),
            other => Err(SwitchError::UnsupportedPlatform(other.to_string())),
        }
    }

    /// Short tag used to filter version directories.
    pub fn prefix(&self) -> &'static str {
        match self {
            Platform::Windows => "win",
            Platform::Linux => "lin",
            Platform::MacOs => "mac",
        }
    }

    /// Name of the indirection symlink (`<prefix>_current`).
    pub fn current_link_name(&self) -> String {
        format!("{}{}", self.prefix(), CURRENT_SUFFIX)
    }

    /// Separator between entries of a PATH-style variable.
    pub fn path_separator(&self) -> char {
        match self {
            Platform::Windows => ';',
            _ => ':',
        }
    }

    /// Normalize a configured directory segment for this platform.
    ///
    /// Catalog files always use `/`; on Windows the segment is rewritten
    /// with backslashes before joining.
    pub fn normalize_dir(&self, dir: &str) -> String {
        match self {
            Platform::Windows => dir.replace('/', "\\"),
            _ => dir.to_string(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
        };
        write!(f, "{}", name)
    }
}

//! Version resolver.
//!
//! Versions are immediate subdirectories of a tool's install directory
//! whose names carry the host OS prefix; the indirection link is
//! excluded by its `_current` suffix. Enumeration order is whatever the
//! filesystem yields - callers wanting "latest" go through
//! [`pick_default`], which imposes the documented ordering.

use crate::core::errors::SwitchError;
use crate::core::platform::CURRENT_SUFFIX;
use crate::ops::Switcher;
use crate::util::fs;

impl Switcher<'_> {
    /// Enumerate installed versions of `tool`, in filesystem order.
    pub fn list_versions(&self, tool: &str) -> Result<Vec<String>, SwitchError> {
        let spec = self.registry.get(tool)?;
        let dir = self.tool_dir(spec);

        let entries = std::fs::read_dir(&dir).map_err(|source| SwitchError::DirectoryAccess {
            path: dir.clone(),
            source,
        })?;

        let prefix = self.platform.prefix();
        let mut versions = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| SwitchError::DirectoryAccess {
                path: dir.clone(),
                source,
            })?;
            // is_dir() follows symlinks, like the link itself would;
            // the name filter is what keeps it out.
            if !entry.path().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with(prefix) && !name.ends_with(CURRENT_SUFFIX) {
                versions.push(name);
            }
        }
        Ok(versions)
    }

    /// The version the indirection symlink currently targets, if any.
    pub fn current_version(&self, tool: &str) -> Result<Option<String>, SwitchError> {
        let spec = self.registry.get(tool)?;
        let link = self.tool_dir(spec).join(self.platform.current_link_name());

        Ok(fs::read_link(&link)
            .and_then(|target| target.file_name().map(|n| n.to_string_lossy().into_owned())))
    }
}

/// Default-version policy: lexicographically largest.
///
/// Filesystem enumeration order is unspecified, so the default cannot be
/// "last listed". Lexicographic order is stable and matches the common
/// zero-padded naming of version directories; it is not a semantic
/// version comparison.
pub fn pick_default(versions: &[String]) -> Option<String> {
    versions.iter().max().cloned()
}

//! Filesystem utilities.

use std::io;
use std::path::Path;

/// Whether `path` is a symbolic link (without following it).
pub fn is_symlink(path: &Path) -> bool {
    path.symlink_metadata()
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false)
}

/// Create a directory-mode symlink (platform-aware).
#[cfg(unix)]
pub fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

#[cfg(windows)]
pub fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(src, dst)
}

/// Resolve the target of a symlink, `None` if `path` is not a link.
pub fn read_link(path: &Path) -> Option<std::path::PathBuf> {
    std::fs::read_link(path).ok()
}

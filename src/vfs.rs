//! Filesystem access for the dump pipeline
//!
//! Every stage reads the installation through the [`Vfs`] trait, so
//! discovery and resolution logic can run against an in-memory tree in
//! tests. [`OsFs`] is the real implementation used by the binary.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Read-only filesystem capability.
pub trait Vfs {
    /// Whether `path` exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Read a file into a UTF-8 string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Immediate subdirectories of `dir`, sorted by path. Missing or
    /// unreadable directories yield an empty list.
    fn list_subdirs(&self, dir: &Path) -> Vec<PathBuf>;
}

/// [`Vfs`] implementation over the real filesystem.
///
/// Follows symlinks: composer regularly links path repositories into
/// `vendor/`, and those packages must be visible to discovery.
pub struct OsFs;

impl Vfs for OsFs {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn list_subdirs(&self, dir: &Path) -> Vec<PathBuf> {
        let mut subdirs: Vec<PathBuf> = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_dir())
            .map(walkdir::DirEntry::into_path)
            .collect();
        subdirs.sort();
        subdirs
    }
}

/// In-memory [`Vfs`] for unit tests. Directories are implied by the stored
/// file paths, so an "empty" directory needs a placeholder file.
#[cfg(test)]
pub struct MemFs {
    files: std::collections::BTreeMap<PathBuf, String>,
}

#[cfg(test)]
impl MemFs {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        let files = entries
            .iter()
            .map(|(path, content)| (PathBuf::from(path), (*content).to_string()))
            .collect();
        Self { files }
    }
}

#[cfg(test)]
impl Vfs for MemFs {
    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }

    fn list_subdirs(&self, dir: &Path) -> Vec<PathBuf> {
        let mut subdirs: Vec<PathBuf> = self
            .files
            .keys()
            .filter_map(|file| {
                let rest = file.strip_prefix(dir).ok()?;
                let first = rest.components().next()?;
                let child = dir.join(first);
                // The first component is a directory only when more path follows.
                if child == *file { None } else { Some(child) }
            })
            .collect();
        subdirs.sort();
        subdirs.dedup();
        subdirs
    }
}

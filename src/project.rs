//! Project root location
//!
//! A Magento installation is identified by its deployment configuration at
//! `app/etc/config.php`. The locator walks upward from the starting
//! directory until a directory carrying that file is found.

use std::path::{Path, PathBuf};

use crate::vfs::Vfs;

/// Deployment configuration path relative to the project root.
pub const CONFIG_MARKER: &str = "app/etc/config.php";

/// Find the project root by searching upward from `start`, inclusive.
pub fn find_root(fs: &dyn Vfs, start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if fs.is_file(&current.join(CONFIG_MARKER)) {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Path of the module registry file under `root`.
pub fn registry_path(root: &Path) -> PathBuf {
    root.join(CONFIG_MARKER)
}

//! Module registry reading
//!
//! Magento records every installed module and its activation flag in
//! `app/etc/config.php`:
//!
//! ```text
//! 'modules' => [
//!     'Magento_Store' => 1,
//!     'Vendor_Disabled' => 0,
//! ],
//! ```
//!
//! The file is machine generated, so the reader scans the `'modules'`
//! section line by line instead of evaluating PHP. Declaration order is
//! Magento's module load order and must be preserved.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{DumpError, Result};
use crate::project;
use crate::vfs::Vfs;

/// Activation flag value marking a module as enabled.
const ACTIVE: i64 = 1;

/// One `'Vendor_Module' => <flag>` entry, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleEntry {
    pub name: String,
    pub enabled: bool,
}

/// Ordered module registry from `app/etc/config.php`.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    entries: Vec<ModuleEntry>,
}

fn section_open_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"'modules'\s*=>\s*\[").expect("valid regex"))
}

fn entry_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*'([A-Za-z0-9_]+)'\s*=>\s*(-?\d+)\s*,?\s*$").expect("valid regex")
    })
}

fn section_close_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*\][,;]?\s*$").expect("valid regex"))
}

impl ModuleRegistry {
    /// Load the registry from `<root>/app/etc/config.php`.
    pub fn load(fs: &dyn Vfs, root: &Path) -> Result<Self> {
        let path = project::registry_path(root);
        let content = fs
            .read_to_string(&path)
            .map_err(|e| DumpError::RegistryReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Self::parse(&content, &path)
    }

    /// Parse registry content. `path` appears in diagnostics only.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let mut lines = content.lines();

        let mut after_open: Option<&str> = None;
        for line in lines.by_ref() {
            if let Some(found) = section_open_re().find(line) {
                after_open = Some(line[found.end()..].trim());
                break;
            }
        }

        // A config.php without a 'modules' section declares no modules.
        let Some(rest) = after_open else {
            return Ok(Self::default());
        };
        if rest.starts_with(']') {
            return Ok(Self::default());
        }
        if !rest.is_empty() {
            return Err(DumpError::RegistryParseFailed {
                path: path.display().to_string(),
                reason: format!("unexpected content after 'modules' opening bracket: {}", rest),
            });
        }

        let mut entries = Vec::new();
        for line in lines {
            if let Some(caps) = entry_re().captures(line) {
                let flag: i64 =
                    caps[2]
                        .parse()
                        .map_err(|_| DumpError::RegistryParseFailed {
                            path: path.display().to_string(),
                            reason: format!("module flag out of range: {}", line.trim()),
                        })?;
                entries.push(ModuleEntry {
                    name: caps[1].to_string(),
                    enabled: flag == ACTIVE,
                });
            } else if section_close_re().is_match(line) {
                return Ok(Self { entries });
            } else if !ignorable(line) {
                // Silently dropping a line here would silently drop a module
                // from the merge order.
                return Err(DumpError::RegistryParseFailed {
                    path: path.display().to_string(),
                    reason: format!("unrecognized line in 'modules' section: {}", line.trim()),
                });
            }
        }

        Err(DumpError::RegistryParseFailed {
            path: path.display().to_string(),
            reason: "unterminated 'modules' section".to_string(),
        })
    }

    /// All registry entries in declaration order.
    #[allow(dead_code)]
    pub fn entries(&self) -> &[ModuleEntry] {
        &self.entries
    }

    /// Names of enabled modules in declaration order.
    pub fn enabled_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.enabled)
            .map(|entry| entry.name.as_str())
            .collect()
    }
}

fn ignorable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with("//")
        || trimmed.starts_with('#')
        || trimmed.starts_with("/*")
        || trimmed.starts_with('*')
}

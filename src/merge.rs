//! Ordered manifest merge
//!
//! Enabled modules are visited in registry declaration order; each module's
//! manifest contributes its array elements in file order. Broken manifests
//! are skipped and recorded, never fatal: one module's bad data must not
//! disturb the contributions of the others.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use serde_json::Value;

use crate::vfs::Vfs;

/// Merge result: combined components plus the manifests that were skipped.
#[derive(Debug, Default)]
pub struct MergedComponents {
    pub components: Vec<Value>,
    pub skipped: Vec<SkippedFragment>,
}

/// A manifest that could not contribute, and why.
#[derive(Debug)]
pub struct SkippedFragment {
    pub path: PathBuf,
    pub reason: SkipReason,
}

#[derive(Debug)]
pub enum SkipReason {
    Unreadable(String),
    InvalidJson(String),
}

impl fmt::Display for SkippedFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            SkipReason::Unreadable(reason) => {
                write!(f, "Failed to read {}: {}", self.path.display(), reason)
            }
            SkipReason::InvalidJson(reason) => {
                write!(f, "Invalid JSON in {}: {}", self.path.display(), reason)
            }
        }
    }
}

/// Merge the manifests of `enabled` modules, in order.
///
/// Modules without a mapped manifest contribute nothing. Valid JSON that is
/// not an array also contributes nothing, silently: the warning channel is
/// reserved for unreadable or undecodable files.
pub fn merge_components(
    fs: &dyn Vfs,
    enabled: &[&str],
    fragments: &HashMap<String, PathBuf>,
) -> MergedComponents {
    let mut merged = MergedComponents::default();

    for name in enabled {
        let Some(path) = fragments.get(*name) else {
            continue;
        };

        let content = match fs.read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                merged.skipped.push(SkippedFragment {
                    path: path.clone(),
                    reason: SkipReason::Unreadable(e.to_string()),
                });
                continue;
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Array(elements)) => merged.components.extend(elements),
            Ok(_) => {}
            Err(e) => {
                merged.skipped.push(SkippedFragment {
                    path: path.clone(),
                    reason: SkipReason::InvalidJson(e.to_string()),
                });
            }
        }
    }

    merged
}

//! Component manifest discovery
//!
//! Modules contribute component definitions in `etc/hyva_cms/components.json`.
//! First-party modules keep the fixed `app/code/<Vendor>/<Module>` layout;
//! composer packages under `vendor/` stage their module at the package root,
//! under `src/`, or as several sub-modules one level down. No single
//! canonical location is assumed: every candidate that exists is discovered.

use std::path::{Path, PathBuf};

use crate::vfs::Vfs;

/// First-party module tree relative to the project root.
pub const APP_CODE_DIR: &str = "app/code";

/// Composer package tree relative to the project root.
pub const VENDOR_DIR: &str = "vendor";

/// Component manifest path relative to a module root.
pub const COMPONENTS_MANIFEST: &str = "etc/hyva_cms/components.json";

/// Staging subdirectory used by some composer packages.
pub const SRC_DIR: &str = "src";

/// Discover every component manifest under `root`, deduplicated, in
/// deterministic order: `app/code` before `vendor`, directories sorted.
pub fn discover_fragments(fs: &dyn Vfs, root: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for vendor in fs.list_subdirs(&root.join(APP_CODE_DIR)) {
        for module in fs.list_subdirs(&vendor) {
            push_if_manifest(fs, module.join(COMPONENTS_MANIFEST), &mut found);
        }
    }

    for vendor in fs.list_subdirs(&root.join(VENDOR_DIR)) {
        for package in fs.list_subdirs(&vendor) {
            for candidate in package_candidates(fs, &package) {
                push_if_manifest(fs, candidate, &mut found);
            }
        }
    }

    found
}

/// Candidate manifest locations inside one composer package: the package
/// root, its `src/` staging directory, and one sub-module level under each.
fn package_candidates(fs: &dyn Vfs, package: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![
        package.join(COMPONENTS_MANIFEST),
        package.join(SRC_DIR).join(COMPONENTS_MANIFEST),
    ];

    for subdir in fs.list_subdirs(package) {
        candidates.push(subdir.join(COMPONENTS_MANIFEST));
    }
    for subdir in fs.list_subdirs(&package.join(SRC_DIR)) {
        candidates.push(subdir.join(COMPONENTS_MANIFEST));
    }

    candidates
}

fn push_if_manifest(fs: &dyn Vfs, candidate: PathBuf, found: &mut Vec<PathBuf>) {
    if fs.is_file(&candidate) && !found.contains(&candidate) {
        found.push(candidate);
    }
}

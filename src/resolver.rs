//! Module name resolution for discovered manifests
//!
//! Each manifest belongs to the module rooted three directory levels above
//! it. The authoritative name is the `name` attribute of the module's
//! `etc/module.xml` declaration; first-party modules without a declaration
//! fall back to the `app/code/<Vendor>/<Module>` path convention.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::discovery::SRC_DIR;
use crate::vfs::Vfs;

/// Module declaration path relative to a module root.
pub const MODULE_DESCRIPTOR: &str = "etc/module.xml";

/// Parsed `module.xml` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    /// Declared module name; `None` when the attribute is missing or empty.
    pub name: Option<String>,
}

fn name_attr_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<module\s[^>]*?\bname\s*=\s*["']([^"']*)["']"#).expect("valid regex")
    })
}

fn app_code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^app/code/([^/]+)/([^/]+)/").expect("valid regex"))
}

impl ModuleDescriptor {
    /// Extract the declaration from `module.xml` content. Content without a
    /// usable `<module name="...">` attribute yields an empty descriptor.
    pub fn parse(content: &str) -> Self {
        let name = name_attr_re()
            .captures(content)
            .map(|caps| caps[1].to_string())
            .filter(|name| !name.is_empty());
        Self { name }
    }
}

/// Resolve the owning module name for one discovered manifest.
///
/// An existing declaration file is authoritative even when unusable: a
/// malformed `module.xml` yields `None` without consulting the path
/// fallback.
pub fn resolve_module_name(fs: &dyn Vfs, root: &Path, fragment: &Path) -> Option<String> {
    let module_root = module_root_of(fragment)?;

    let descriptor_paths = [
        module_root.join(MODULE_DESCRIPTOR),
        module_root.join(SRC_DIR).join(MODULE_DESCRIPTOR),
    ];
    for descriptor_path in &descriptor_paths {
        if fs.is_file(descriptor_path) {
            let content = fs.read_to_string(descriptor_path).ok()?;
            return ModuleDescriptor::parse(&content).name;
        }
    }

    infer_from_path(root, fragment)
}

/// The manifest's module root: three levels up, stepping once more out of a
/// `src/` staging directory.
fn module_root_of(fragment: &Path) -> Option<PathBuf> {
    let module_root = fragment.parent()?.parent()?.parent()?;
    if module_root.file_name().is_some_and(|name| name == SRC_DIR) {
        module_root.parent().map(Path::to_path_buf)
    } else {
        Some(module_root.to_path_buf())
    }
}

/// `app/code/<Vendor>/<Module>/...` implies the name `<Vendor>_<Module>`.
fn infer_from_path(root: &Path, fragment: &Path) -> Option<String> {
    let relative = fragment.strip_prefix(root).ok()?;
    let relative = relative.to_string_lossy().replace('\\', "/");
    app_code_re()
        .captures(&relative)
        .map(|caps| format!("{}_{}", &caps[1], &caps[2]))
}

/// Map discovered manifests to their owning modules.
///
/// Manifests without a resolvable owner are dropped silently. When two
/// manifests resolve to the same module name, the later discovery wins.
pub fn map_fragments(
    fs: &dyn Vfs,
    root: &Path,
    fragments: &[PathBuf],
) -> HashMap<String, PathBuf> {
    let mut by_module = HashMap::new();

    for fragment in fragments {
        if let Some(name) = resolve_module_name(fs, root, fragment) {
            by_module.insert(name, fragment.clone());
        }
    }

    by_module
}

//! Common test utilities for hyvadump integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway Magento project tree for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a project with an empty module registry
    pub fn new() -> Self {
        let project = Self::without_registry();
        project.write_registry(&[]);
        project
    }

    /// Create a bare directory carrying no registry marker
    pub fn without_registry() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file relative to the project root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Create a directory relative to the project root
    pub fn create_dir(&self, path: &str) -> PathBuf {
        let dir_path = self.path.join(path);
        std::fs::create_dir_all(&dir_path).expect("Failed to create directory");
        dir_path
    }

    /// (Re)write app/etc/config.php with the given module entries
    pub fn write_registry(&self, modules: &[(&str, i64)]) {
        let mut content = String::from("<?php\nreturn [\n    'modules' => [\n");
        for (name, flag) in modules {
            content.push_str(&format!("        '{}' => {},\n", name, flag));
        }
        content.push_str("    ],\n    'scopes' => [\n        'websites' => [],\n    ],\n];\n");
        self.write_file("app/etc/config.php", &content);
    }

    /// Create an app/code module with a manifest and, optionally, a
    /// module.xml declaration
    pub fn add_app_code_module(
        &self,
        vendor: &str,
        module: &str,
        manifest: &str,
        declared: Option<&str>,
    ) {
        let base = format!("app/code/{}/{}", vendor, module);
        self.write_file(&format!("{}/etc/hyva_cms/components.json", base), manifest);
        if let Some(name) = declared {
            self.write_file(&format!("{}/etc/module.xml", base), &descriptor_xml(name));
        }
    }

    /// Create a composer package with manifest and declaration at the
    /// package root
    pub fn add_vendor_module(&self, package: &str, declared: &str, manifest: &str) {
        let base = format!("vendor/{}", package);
        self.write_file(&format!("{}/etc/hyva_cms/components.json", base), manifest);
        self.write_file(&format!("{}/etc/module.xml", base), &descriptor_xml(declared));
    }

    /// Create a composer package staging its module under src/
    pub fn add_vendor_module_src(&self, package: &str, declared: &str, manifest: &str) {
        let base = format!("vendor/{}/src", package);
        self.write_file(&format!("{}/etc/hyva_cms/components.json", base), manifest);
        self.write_file(&format!("{}/etc/module.xml", base), &descriptor_xml(declared));
    }

    /// Create one sub-module inside a multi-module composer package
    pub fn add_vendor_submodule(&self, package: &str, module: &str, declared: &str, manifest: &str) {
        let base = format!("vendor/{}/{}", package, module);
        self.write_file(&format!("{}/etc/hyva_cms/components.json", base), manifest);
        self.write_file(&format!("{}/etc/module.xml", base), &descriptor_xml(declared));
    }

    /// Create one sub-module under a composer package's src/ directory
    pub fn add_vendor_src_submodule(
        &self,
        package: &str,
        module: &str,
        declared: &str,
        manifest: &str,
    ) {
        let base = format!("vendor/{}/src/{}", package, module);
        self.write_file(&format!("{}/etc/hyva_cms/components.json", base), manifest);
        self.write_file(&format!("{}/etc/module.xml", base), &descriptor_xml(declared));
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// A realistic module.xml declaration for `name`
pub fn descriptor_xml(name: &str) -> String {
    format!(
        r#"<?xml version="1.0"?>
<config xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
        xsi:noNamespaceSchemaLocation="urn:magento:framework:Module/etc/module.xsd">
    <module name="{}" setup_version="1.0.0"/>
</config>
"#,
        name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_creation_writes_registry() {
        let project = TestProject::new();
        assert!(project.path.join("app/etc/config.php").is_file());
    }

    #[test]
    fn test_project_registry_entries() {
        let project = TestProject::new();
        project.write_registry(&[("Acme_A", 1), ("Acme_B", 0)]);
        let content = std::fs::read_to_string(project.path.join("app/etc/config.php")).unwrap();
        assert!(content.contains("'Acme_A' => 1,"));
        assert!(content.contains("'Acme_B' => 0,"));
    }

    #[test]
    fn test_project_app_code_module_layout() {
        let project = TestProject::new();
        project.add_app_code_module("Acme", "Widget", "[]", Some("Acme_Widget"));
        assert!(
            project
                .path
                .join("app/code/Acme/Widget/etc/hyva_cms/components.json")
                .is_file()
        );
        assert!(
            project
                .path
                .join("app/code/Acme/Widget/etc/module.xml")
                .is_file()
        );
    }
}

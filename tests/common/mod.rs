#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the header-guard binary.
#[macro_export]
macro_rules! header_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("header-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".header-guard.toml", content);
    }

    /// A PHP file carrying the built-in header for `owner` and `year`.
    pub fn create_php_file(&self, relative_path: &str, owner: &str, year: &str) {
        self.create_file(relative_path, &php_source(owner, year));
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

pub fn php_source(owner: &str, year: &str) -> String {
    format!(
        "<?php\n/**\n * @author    Blue Acorn iCi <code@blueacornici.com>\n * @copyright {year} {owner}. All Rights Reserved.\n */\n\nnamespace Vendor\\Module;\n\nclass Example\n{{\n}}\n"
    )
}

/// Config with a short custom template and no gitignore handling.
pub const ACME_CONFIG: &str = r#"
[header]
code_owner = "Acme"
template = "<?php\n/**\n * (c) YYYY OWNER\n */\n"

[scanner]
extensions = ["php"]
exclude = []
gitignore = false
"#;

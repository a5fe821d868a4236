#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the source-indexer binary.
#[macro_export]
macro_rules! source_indexer {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("source-indexer"))
    };
}

/// Creates a temporary project directory for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a Maven-style module `core` with two main and one test file.
    pub fn maven_project() -> Self {
        let fixture = Self::new();
        fixture.create_file("core/src/main/java/Foo.java", "class Foo {}");
        fixture.create_file("core/src/main/java/Bar.java", "class Bar {}");
        fixture.create_file("core/src/test/java/FooTest.java", "class FooTest {}");
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn remove_file(&self, relative_path: &str) {
        fs::remove_file(self.dir.path().join(relative_path)).expect("Failed to remove file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.source-indexer.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".source-indexer.toml", content);
    }

    /// Path of the cache written with the default working directory.
    pub fn cache_path(&self) -> PathBuf {
        self.dir.path().join(".source-indexer/cache.json")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregator `root` over a Maven-style module `core`.
pub const MAVEN_CONFIG: &str = r#"
[[module]]
key = "root"
modules = ["core"]

[[module]]
key = "core"
base_dir = "core"
inclusions = ["src/main/**"]
test_inclusions = ["src/test/**"]
"#;

/// Main and test patterns that both accept `FooTest.java`.
pub const OVERLAPPING_CONFIG: &str = r#"
[[module]]
key = "core"
base_dir = "core"
inclusions = ["**/*.java"]
test_inclusions = ["**/*Test.java"]
"#;

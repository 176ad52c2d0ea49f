//! [`ModuleTree`] builder for modlink test scenarios.
//!
//! Lays out a modules root, manifest files, and per-module configs inside a
//! temp directory so unit and integration tests share one fixture shape.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary module tree with helper methods for test setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use modlink_test_utils::ModuleTree;
///
/// let tree = ModuleTree::new();
/// let alpha = tree.add_flat_module("alpha.core", "1.2.0");
/// tree.write_extensions(&alpha, &["before.common.targets"]);
/// let manifest = tree.write_flat_manifest(&[("alpha.core", "1.2.0")]);
/// assert!(manifest.is_file());
/// ```
pub struct ModuleTree {
    temp_dir: TempDir,
}

impl Default for ModuleTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleTree {
    /// Create a temp directory with an empty `modules` root.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("modules")).unwrap();
        Self { temp_dir }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The modules root all module folders live under.
    pub fn modules_root(&self) -> PathBuf {
        self.root().join("modules")
    }

    /// Conventional output path for the generated root descriptor.
    pub fn output_path(&self) -> PathBuf {
        self.root().join("out").join("modules.props")
    }

    /// Conventional directory for generated extension slot files.
    pub fn extensions_dir(&self) -> PathBuf {
        self.root().join("out").join("extensions")
    }

    /// Create a flat-layout module folder `<root>/<name>.<version>`.
    pub fn add_flat_module(&self, name: &str, version: &str) -> PathBuf {
        let dir = self.modules_root().join(format!("{name}.{version}"));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Create a nested-layout module folder `<root>/<name>/<version>`.
    pub fn add_nested_module(&self, name: &str, version: &str) -> PathBuf {
        let dir = self.modules_root().join(name).join(version);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Write `build/module.toml` inside `module_dir` declaring `names`.
    pub fn write_extensions(&self, module_dir: &Path, names: &[&str]) {
        let build_dir = module_dir.join("build");
        fs::create_dir_all(&build_dir).unwrap();

        let list = names
            .iter()
            .map(|n| format!("\"{}\"", n))
            .collect::<Vec<_>>()
            .join(", ");
        fs::write(
            build_dir.join("module.toml"),
            format!("extensions = [{list}]\n"),
        )
        .unwrap();
    }

    /// Write a `modules.toml` flat-list manifest at the tree root.
    pub fn write_flat_manifest(&self, entries: &[(&str, &str)]) -> PathBuf {
        let mut manifest = String::new();
        for (name, version) in entries {
            manifest.push_str(&format!(
                "[[module]]\nname = \"{name}\"\nversion = \"{version}\"\n\n"
            ));
        }
        let path = self.root().join("modules.toml");
        fs::write(&path, manifest).unwrap();
        path
    }

    /// Write a `deps.json` dependency-map manifest at the tree root.
    ///
    /// The JSON is built by hand so key order matches `entries` exactly;
    /// document order is what the parser under test must preserve.
    pub fn write_dependency_map(&self, entries: &[(&str, &str)]) -> PathBuf {
        let pairs = entries
            .iter()
            .map(|(name, version)| format!("    \"{name}\": \"{version}\""))
            .collect::<Vec<_>>()
            .join(",\n");
        let json = format!("{{\n  \"dependencies\": {{\n{pairs}\n  }}\n}}\n");
        let path = self.root().join("deps.json");
        fs::write(&path, json).unwrap();
        path
    }

    /// Write a `deps.lock.json` resolved-lock manifest at the tree root.
    pub fn write_lock_file(&self, entries: &[(&str, &str)]) -> PathBuf {
        let items = entries
            .iter()
            .map(|(name, version)| {
                format!("    {{ \"name\": \"{name}\", \"version\": \"{version}\" }}")
            })
            .collect::<Vec<_>>()
            .join(",\n");
        let json = format!("{{\n  \"version\": 1,\n  \"modules\": [\n{items}\n  ]\n}}\n");
        let path = self.root().join("deps.lock.json");
        fs::write(&path, json).unwrap();
        path
    }

    /// Assert that `path` (relative to the tree root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the tree root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            full_path.display(),
            content,
            file_content
        );
    }
}

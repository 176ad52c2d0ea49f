//! End-to-end tests driving the modlink binary against real module trees

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

use modlink_test_utils::ModuleTree;

/// Get a Command for the modlink binary
fn modlink_cmd() -> Command {
    Command::cargo_bin("modlink").expect("Failed to find modlink binary")
}

/// A `generate` invocation wired to the tree's conventional paths.
fn generate_cmd(tree: &ModuleTree, manifest: &Path) -> Command {
    let mut cmd = modlink_cmd();
    cmd.arg("generate")
        .arg("--modules-root")
        .arg(tree.modules_root())
        .arg("--manifest")
        .arg(manifest)
        .arg("--output")
        .arg(tree.output_path())
        .arg("--extensions-dir")
        .arg(tree.extensions_dir());
    cmd
}

// ============================================================================
// generate Command Tests
// ============================================================================

#[test]
fn test_generate_writes_descriptors() {
    let tree = ModuleTree::new();
    let alpha = tree.add_flat_module("alpha.core", "1.2.0");
    tree.add_flat_module("beta", "2.5.1");
    tree.write_extensions(&alpha, &["before.common.targets"]);
    let manifest = tree.write_flat_manifest(&[("alpha.core", "1.2.0"), ("beta", "2.5.1")]);

    generate_cmd(&tree, &manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated"))
        .stdout(predicate::str::contains("2 modules"));

    tree.assert_file_contains(
        "out/modules.props",
        "<Module_alpha_core>$(ModulesRoot)\\alpha.core.1.2.0</Module_alpha_core>",
    );
    tree.assert_file_exists("out/extensions/before.common.targets");
}

#[test]
fn test_generate_with_surrounding_imports() {
    let tree = ModuleTree::new();
    tree.add_flat_module("alpha", "1.0.0");
    let manifest = tree.write_flat_manifest(&[("alpha", "1.0.0")]);

    generate_cmd(&tree, &manifest)
        .arg("--import-before")
        .arg("$(Root)\\pre.props")
        .arg("--import-after")
        .arg("$(Root)\\post.props")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 imports"));

    tree.assert_file_contains(
        "out/modules.props",
        r#"Condition=" Exists('$(Root)\pre.props') ""#,
    );
    tree.assert_file_contains("out/modules.props", "$(Root)\\post.props");
}

#[test]
fn test_generate_with_explicit_format() {
    let tree = ModuleTree::new();
    tree.add_nested_module("alpha", "1.0.0");
    let manifest = tree.write_dependency_map(&[("alpha", "1.0.0")]);
    // Copy to a name that detection would not recognize.
    let renamed = tree.root().join("pinned.json");
    std::fs::copy(&manifest, &renamed).unwrap();

    generate_cmd(&tree, &renamed)
        .arg("--format")
        .arg("dependency-map")
        .assert()
        .success();

    tree.assert_file_contains(
        "out/modules.props",
        "<Module_alpha>$(ModulesRoot)\\alpha\\1.0.0</Module_alpha>",
    );
}

#[test]
fn test_generate_twice_leaves_identical_files() {
    let tree = ModuleTree::new();
    tree.add_flat_module("alpha", "1.0.0");
    let manifest = tree.write_flat_manifest(&[("alpha", "1.0.0")]);

    generate_cmd(&tree, &manifest).assert().success();
    let first = std::fs::read(tree.output_path()).unwrap();
    generate_cmd(&tree, &manifest).assert().success();
    assert_eq!(std::fs::read(tree.output_path()).unwrap(), first);
}

// ============================================================================
// list Command Tests
// ============================================================================

#[test]
fn test_list_shows_modules() {
    let tree = ModuleTree::new();
    let manifest = tree.write_dependency_map(&[("zeta", "3.0.0"), ("alpha.core", "1.2.0")]);

    let mut cmd = modlink_cmd();
    cmd.arg("list")
        .arg("--modules-root")
        .arg(tree.modules_root())
        .arg("--manifest")
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 module(s)"))
        .stdout(predicate::str::contains("zeta"))
        .stdout(predicate::str::contains("alpha.core"));
}

#[test]
fn test_list_json_output() {
    let tree = ModuleTree::new();
    let manifest = tree.write_lock_file(&[("alpha.core", "1.2.0"), ("beta", "2.5")]);

    let mut cmd = modlink_cmd();
    let assert = cmd
        .arg("list")
        .arg("--modules-root")
        .arg(tree.modules_root())
        .arg("--manifest")
        .arg(&manifest)
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let items: Vec<serde_json::Value> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "alpha.core");
    assert_eq!(items[0]["folder"], "alpha.core\\1.2.0");
    // Short versions are padded for comparison but printed as written.
    assert_eq!(items[1]["version"], "2.5");
    assert_eq!(items[1]["folder"], "beta\\2.5");
}

//! End-to-end generation flows through the library API.

use std::path::Path;

use modlink_core::manifest::{ManifestFormat, ParserRegistry};
use modlink_core::{Conventions, DescriptorGenerator, Error, GenerateSummary, ResolvedModule};
use modlink_test_utils::ModuleTree;

fn resolve(tree: &ModuleTree, manifest: &Path) -> Vec<ResolvedModule> {
    let format = ManifestFormat::from_path(manifest).expect("well-known manifest name");
    ParserRegistry::new()
        .get_parser(format)
        .modules(&tree.modules_root(), manifest)
        .unwrap()
}

fn generate_from(tree: &ModuleTree, manifest: &Path) -> GenerateSummary {
    DescriptorGenerator::new(resolve(tree, manifest), Conventions::default())
        .generate(&tree.output_path(), &tree.extensions_dir(), &[], &[])
        .unwrap()
}

// =============================================================================
// Per-format end-to-end flows
// =============================================================================

#[test]
fn test_flat_list_end_to_end() {
    let tree = ModuleTree::new();
    let alpha = tree.add_flat_module("alpha.core", "1.2.0");
    tree.add_flat_module("beta", "2.5.1");
    tree.write_extensions(&alpha, &["before.common.targets", "after.common.targets"]);
    let manifest = tree.write_flat_manifest(&[("alpha.core", "1.2.0"), ("beta", "2.5.1")]);

    let summary = generate_from(&tree, &manifest);

    assert_eq!(summary.modules, 2);
    assert_eq!(summary.properties, 2);
    assert_eq!(summary.imports, 2);
    assert_eq!(summary.extension_files, 2);

    tree.assert_file_contains(
        "out/modules.props",
        "<MSBuildAllProjects>$(MSBuildAllProjects);$(MSBuildThisFileFullPath)</MSBuildAllProjects>",
    );
    tree.assert_file_contains(
        "out/modules.props",
        "<Module_alpha_core>$(ModulesRoot)\\alpha.core.1.2.0</Module_alpha_core>",
    );
    tree.assert_file_contains(
        "out/modules.props",
        r#"<Import Project="$(ModulesRoot)\beta.2.5.1\build\module.props" Condition=" Exists('$(ModulesRoot)\beta.2.5.1\build\module.props') " />"#,
    );
    // Slot files import every module, including beta which declared nothing.
    tree.assert_file_contains(
        "out/extensions/before.common.targets",
        "$(ModulesRoot)\\beta.2.5.1\\before.common.targets",
    );
    tree.assert_file_contains(
        "out/extensions/after.common.targets",
        "$(ModulesRoot)\\alpha.core.1.2.0\\after.common.targets",
    );
}

#[test]
fn test_dependency_map_end_to_end() {
    let tree = ModuleTree::new();
    tree.add_nested_module("alpha.core", "1.2.0");
    tree.add_nested_module("beta", "2.5.1");
    let manifest = tree.write_dependency_map(&[("alpha.core", "1.2.0"), ("beta", "2.5.1")]);

    let summary = generate_from(&tree, &manifest);

    assert_eq!(summary.modules, 2);
    tree.assert_file_contains(
        "out/modules.props",
        "<Module_alpha_core>$(ModulesRoot)\\alpha.core\\1.2.0</Module_alpha_core>",
    );
    tree.assert_file_not_exists("out/extensions");
}

#[test]
fn test_lock_file_end_to_end() {
    let tree = ModuleTree::new();
    let beta = tree.add_nested_module("beta", "2.5.1");
    tree.write_extensions(&beta, &["hooks.targets"]);
    let manifest = tree.write_lock_file(&[("alpha.core", "1.2.0"), ("beta", "2.5.1")]);

    let summary = generate_from(&tree, &manifest);

    assert_eq!(summary.extension_files, 1);
    tree.assert_file_contains(
        "out/extensions/hooks.targets",
        r#"<Import Project="$(ModulesRoot)\alpha.core\1.2.0\hooks.targets" Condition=" Exists('$(ModulesRoot)\alpha.core\1.2.0\hooks.targets') " />"#,
    );
}

// =============================================================================
// Cross-format agreement
// =============================================================================

#[test]
fn test_map_and_lock_agree_on_identities() {
    let tree = ModuleTree::new();
    let entries = [("alpha.core", "1.2.0"), ("beta", "2.5.1"), ("zeta", "3.0")];
    let map = tree.write_dependency_map(&entries);
    let lock = tree.write_lock_file(&entries);

    let from_map = resolve(&tree, &map);
    let from_lock = resolve(&tree, &lock);

    assert_eq!(from_map.len(), from_lock.len());
    for (a, b) in from_map.iter().zip(&from_lock) {
        assert_eq!(a.identity(), b.identity());
        assert_eq!(a.folder(), b.folder());
    }
}

#[test]
fn test_flat_list_differs_only_in_folder_convention() {
    let tree = ModuleTree::new();
    let entries = [("alpha.core", "1.2.0"), ("beta", "2.5.1")];
    let flat = tree.write_flat_manifest(&entries);
    let map = tree.write_dependency_map(&entries);

    let from_flat = resolve(&tree, &flat);
    let from_map = resolve(&tree, &map);

    for (a, b) in from_flat.iter().zip(&from_map) {
        assert_eq!(a.identity(), b.identity());
        assert_ne!(a.folder(), b.folder());
    }
    assert_eq!(from_flat[0].folder(), "alpha.core.1.2.0");
    assert_eq!(from_map[0].folder(), "alpha.core\\1.2.0");
}

// =============================================================================
// Scale and idempotency
// =============================================================================

#[test]
fn test_many_extension_slots_from_one_module() {
    let tree = ModuleTree::new();
    let alpha = tree.add_flat_module("alpha", "1.0.0");
    let names: Vec<String> = (0..200).map(|i| format!("slot.{i:03}.targets")).collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
    tree.write_extensions(&alpha, &name_refs);
    let manifest = tree.write_flat_manifest(&[("alpha", "1.0.0")]);

    let summary = generate_from(&tree, &manifest);

    assert_eq!(summary.extension_files, 200);
    for name in ["slot.000.targets", "slot.100.targets", "slot.199.targets"] {
        let path = tree.extensions_dir().join(name);
        let xml = std::fs::read_to_string(&path).unwrap();
        assert_eq!(xml.matches("<Import Project=").count(), 1);
        assert!(xml.contains(&format!("$(ModulesRoot)\\alpha.1.0.0\\{name}")));
    }
}

#[test]
fn test_rerun_is_byte_identical() {
    let tree = ModuleTree::new();
    let alpha = tree.add_flat_module("alpha", "1.0.0");
    tree.write_extensions(&alpha, &["hooks.targets"]);
    let manifest = tree.write_flat_manifest(&[("alpha", "1.0.0"), ("alpha", "2.0.0")]);

    generate_from(&tree, &manifest);
    let root_first = std::fs::read(tree.output_path()).unwrap();
    let slot_first = std::fs::read(tree.extensions_dir().join("hooks.targets")).unwrap();

    generate_from(&tree, &manifest);
    assert_eq!(std::fs::read(tree.output_path()).unwrap(), root_first);
    assert_eq!(
        std::fs::read(tree.extensions_dir().join("hooks.targets")).unwrap(),
        slot_first
    );
}

// =============================================================================
// Failure paths
// =============================================================================

#[test]
fn test_missing_manifest_is_not_found() {
    let tree = ModuleTree::new();
    let missing = tree.root().join("modules.toml");
    let err = ParserRegistry::new()
        .get_parser(ManifestFormat::FlatList)
        .modules(&tree.modules_root(), &missing)
        .unwrap_err();
    assert!(matches!(err, Error::ManifestNotFound(_)));
}

#[test]
fn test_malformed_module_config_fails_whole_run() {
    let tree = ModuleTree::new();
    let alpha = tree.add_flat_module("alpha", "1.0.0");
    std::fs::create_dir_all(alpha.join("build")).unwrap();
    std::fs::write(alpha.join("build").join("module.toml"), "extensions = {").unwrap();
    let manifest = tree.write_flat_manifest(&[("alpha", "1.0.0")]);

    let modules = resolve(&tree, &manifest);
    let err = DescriptorGenerator::new(modules, Conventions::default())
        .generate(&tree.output_path(), &tree.extensions_dir(), &[], &[])
        .unwrap_err();

    assert!(matches!(err, Error::ModuleConfigParse { .. }));
    tree.assert_file_not_exists("out/modules.props");
}

//! Naming and layout conventions for generated descriptors.

use std::path::{Path, PathBuf};

/// Conventions applied during descriptor generation.
///
/// [`Default`] carries the MSBuild conventions below; every field can be
/// overridden, so the generation algorithm itself stays convention-free.
#[derive(Debug, Clone)]
pub struct Conventions {
    /// Prefix for per-module property names.
    pub property_name_prefix: String,
    /// Prefix for per-module property values, prepended to the folder text.
    pub property_value_prefix: String,
    /// Build file imported from each module folder, descriptor-text form.
    pub import_file: String,
    /// Per-module config file path relative to the module directory,
    /// `/`-separated.
    pub module_config_path: String,
    /// Name of the sentinel property emitted before any module property.
    pub sentinel_name: String,
    /// Value of the sentinel property.
    pub sentinel_value: String,
}

impl Conventions {
    pub const PROPERTY_NAME_PREFIX: &'static str = "Module_";
    pub const PROPERTY_VALUE_PREFIX: &'static str = "$(ModulesRoot)\\";
    pub const IMPORT_FILE: &'static str = "build\\module.props";
    pub const MODULE_CONFIG_PATH: &'static str = "build/module.toml";
    pub const SENTINEL_NAME: &'static str = "MSBuildAllProjects";
    pub const SENTINEL_VALUE: &'static str =
        "$(MSBuildAllProjects);$(MSBuildThisFileFullPath)";

    /// On-disk path of the per-module config file inside `module_dir`.
    pub fn module_config_file(&self, module_dir: &Path) -> PathBuf {
        let mut path = module_dir.to_path_buf();
        for part in self.module_config_path.split('/') {
            path.push(part);
        }
        path
    }
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            property_name_prefix: Self::PROPERTY_NAME_PREFIX.to_string(),
            property_value_prefix: Self::PROPERTY_VALUE_PREFIX.to_string(),
            import_file: Self::IMPORT_FILE.to_string(),
            module_config_path: Self::MODULE_CONFIG_PATH.to_string(),
            sentinel_name: Self::SENTINEL_NAME.to_string(),
            sentinel_value: Self::SENTINEL_VALUE.to_string(),
        }
    }
}

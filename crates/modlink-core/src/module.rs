//! Module identity and on-disk resolution.
//!
//! A manifest entry names a module; resolution pins it to a folder under the
//! modules root. Two layouts exist: flat (`<root>/<name>.<version>`, used by
//! the flat-list manifest) and nested (`<root>/<name>/<version>`, used by the
//! dependency-map and lock manifests). The folder text that ends up in
//! generated descriptors always uses `\` as separator so output is identical
//! across platforms; only [`ResolvedModule::dir`] uses native paths.

use std::path::{Path, PathBuf};

use crate::version::ModuleVersion;

/// A module name plus version, as declared in a manifest.
///
/// Names compare case-insensitively (ASCII); versions compare by semver
/// precedence. The original casing is preserved for display and paths.
#[derive(Debug, Clone)]
pub struct ModuleIdentity {
    name: String,
    version: ModuleVersion,
}

impl ModuleIdentity {
    /// Build an identity from manifest text, validating both parts.
    ///
    /// Module names are restricted to ASCII alphanumerics plus `.`, `_` and
    /// `-` because they become XML element names and quoted condition text.
    /// Errors carry a reason string; callers attach the manifest path.
    pub fn new(name: &str, version: &str) -> std::result::Result<Self, String> {
        let name = name.trim();
        validate_name(name)?;
        let version = ModuleVersion::parse(version)?;
        Ok(Self {
            name: name.to_string(),
            version,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &ModuleVersion {
        &self.version
    }

    /// Property name for this module: prefix plus the name with every `.`
    /// replaced by `_`, keeping it a valid XML element name.
    pub fn property_name(&self, prefix: &str) -> String {
        format!("{prefix}{}", self.name.replace('.', "_"))
    }
}

fn validate_name(name: &str) -> std::result::Result<(), String> {
    if name.is_empty() {
        return Err("empty module name".to_string());
    }
    let ok = name
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'));
    if !ok {
        return Err(format!(
            "invalid module name '{name}': only ASCII letters, digits, '.', '_' and '-' are allowed"
        ));
    }
    Ok(())
}

impl PartialEq for ModuleIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name) && self.version == other.version
    }
}

impl Eq for ModuleIdentity {}

impl PartialOrd for ModuleIdentity {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ModuleIdentity {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let left = self.name.bytes().map(|b| b.to_ascii_lowercase());
        let right = other.name.bytes().map(|b| b.to_ascii_lowercase());
        left.cmp(right).then_with(|| self.version.cmp(&other.version))
    }
}

impl std::fmt::Display for ModuleIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

/// A module pinned to its folder under the modules root.
///
/// `folder` is the descriptor-text form (relative to the root, `\`-separated
/// for nested layouts); `dir` is the native on-disk directory used for reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedModule {
    identity: ModuleIdentity,
    folder: String,
    dir: PathBuf,
}

impl ResolvedModule {
    /// Resolve with the flat layout: `<root>/<name>.<version>`.
    pub fn flat(identity: ModuleIdentity, modules_root: &Path) -> Self {
        let folder = format!("{}.{}", identity.name(), identity.version());
        let dir = modules_root.join(&folder);
        Self {
            identity,
            folder,
            dir,
        }
    }

    /// Resolve with the nested layout: `<root>/<name>/<version>`.
    pub fn nested(identity: ModuleIdentity, modules_root: &Path) -> Self {
        let folder = format!("{}\\{}", identity.name(), identity.version());
        let dir = modules_root
            .join(identity.name())
            .join(identity.version().as_str());
        Self {
            identity,
            folder,
            dir,
        }
    }

    pub fn identity(&self) -> &ModuleIdentity {
        &self.identity
    }

    pub fn name(&self) -> &str {
        self.identity.name()
    }

    pub fn version(&self) -> &ModuleVersion {
        self.identity.version()
    }

    /// Folder text relative to the modules root, as written into descriptors.
    pub fn folder(&self) -> &str {
        &self.folder
    }

    /// On-disk module directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

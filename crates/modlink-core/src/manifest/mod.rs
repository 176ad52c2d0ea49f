//! Manifest parsing for the three supported module manifest formats.
//!
//! Each format has its own parser behind the [`ManifestParser`] trait; all
//! three normalize into the same ordered [`ResolvedModule`] sequence, so the
//! generator never cares where a module list came from. Declaration order is
//! preserved because it is the import precedence order.

mod dependency_map;
mod flat_list;
mod lock_file;

pub use dependency_map::DependencyMapParser;
pub use flat_list::FlatListParser;
pub use lock_file::LockFileParser;

use std::path::Path;

use crate::error::{Error, Result};
use crate::module::ResolvedModule;

/// Trait for module manifest parsers.
///
/// Each parser handles one on-disk format and resolves every declared module
/// against the modules root, in declaration order. Parsers never mutate their
/// inputs and never deduplicate: the same logical module may appear more than
/// once and downstream consumers rely on the full sequence.
pub trait ManifestParser {
    /// Resolve the modules declared in `manifest_path`.
    ///
    /// Returns [`Error::ManifestNotFound`] when no file exists at the path
    /// and [`Error::ManifestParse`] when the contents are invalid.
    fn modules(&self, modules_root: &Path, manifest_path: &Path)
    -> Result<Vec<ResolvedModule>>;
}

/// The supported manifest formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    /// `modules.toml` flat list, flat folder layout.
    FlatList,
    /// `deps.json` dependency map, nested folder layout.
    DependencyMap,
    /// `deps.lock.json` resolved lock, nested folder layout.
    LockFile,
}

impl ManifestFormat {
    /// Detect the format from a manifest's well-known file name.
    ///
    /// Detection is by name only; file contents are never sniffed.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        match name {
            "modules.toml" => Some(Self::FlatList),
            "deps.json" => Some(Self::DependencyMap),
            "deps.lock.json" => Some(Self::LockFile),
            _ => None,
        }
    }

    /// Get the string representation of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FlatList => "flat-list",
            Self::DependencyMap => "dependency-map",
            Self::LockFile => "lock-file",
        }
    }
}

impl std::fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registry that selects the parser for a manifest format.
pub struct ParserRegistry {
    flat_list: FlatListParser,
    dependency_map: DependencyMapParser,
    lock_file: LockFileParser,
}

impl ParserRegistry {
    /// Create a new registry with all built-in parsers.
    pub fn new() -> Self {
        Self {
            flat_list: FlatListParser,
            dependency_map: DependencyMapParser,
            lock_file: LockFileParser,
        }
    }

    /// Get the parser for a manifest format.
    pub fn get_parser(&self, format: ManifestFormat) -> &dyn ManifestParser {
        match format {
            ManifestFormat::FlatList => &self.flat_list,
            ManifestFormat::DependencyMap => &self.dependency_map,
            ManifestFormat::LockFile => &self.lock_file,
        }
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a manifest file to a string, mapping absence to `ManifestNotFound`.
fn read_manifest(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(Error::ManifestNotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

//! Flat-list manifest parsing for `modules.toml` files.
//!
//! The flat-list manifest is a hand-written TOML file declaring one
//! `[[module]]` entry per installed module. Modules live directly under the
//! modules root in a single folder named `<name>.<version>`.
//!
//! # Example TOML
//!
//! ```toml
//! [[module]]
//! name = "alpha.core"
//! version = "1.2.0"
//!
//! [[module]]
//! name = "beta"
//! version = "2.5.1"
//! ```

use std::path::Path;

use serde::Deserialize;

use super::{ManifestParser, read_manifest};
use crate::error::{Error, Result};
use crate::module::{ModuleIdentity, ResolvedModule};

/// Parser for the `modules.toml` flat-list format.
pub struct FlatListParser;

#[derive(Debug, Deserialize)]
struct FlatListDoc {
    #[serde(default, rename = "module")]
    modules: Vec<FlatListEntry>,
}

#[derive(Debug, Deserialize)]
struct FlatListEntry {
    name: String,
    version: String,
}

impl ManifestParser for FlatListParser {
    fn modules(
        &self,
        modules_root: &Path,
        manifest_path: &Path,
    ) -> Result<Vec<ResolvedModule>> {
        let text = read_manifest(manifest_path)?;
        let doc: FlatListDoc = toml::from_str(&text)
            .map_err(|e| Error::manifest_parse(manifest_path, e.to_string()))?;

        doc.modules
            .iter()
            .map(|entry| {
                let identity = ModuleIdentity::new(&entry.name, &entry.version)
                    .map_err(|reason| Error::manifest_parse(manifest_path, reason))?;
                Ok(ResolvedModule::flat(identity, modules_root))
            })
            .collect()
    }
}

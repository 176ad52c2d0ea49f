//! Resolved-lock manifest parsing for `deps.lock.json` files.
//!
//! The lock file is tool-generated and fully pinned: it carries its own
//! module list, which may be a super- or sub-set of the dependency map it
//! was resolved from. `version` is the lock schema version; only version 1
//! is understood. Modules live under the nested layout
//! `<modulesRoot>/<name>/<version>`.
//!
//! # Example JSON
//!
//! ```json
//! {
//!   "version": 1,
//!   "modules": [
//!     { "name": "alpha.core", "version": "1.2.0" },
//!     { "name": "beta", "version": "2.5.1" }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::{ManifestParser, read_manifest};
use crate::error::{Error, Result};
use crate::module::{ModuleIdentity, ResolvedModule};

/// The lock schema version this parser understands.
const SUPPORTED_LOCK_VERSION: u32 = 1;

/// Parser for the `deps.lock.json` resolved-lock format.
pub struct LockFileParser;

#[derive(Debug, Deserialize)]
struct LockFileDoc {
    version: u32,
    #[serde(default)]
    modules: Vec<LockedModule>,
}

#[derive(Debug, Deserialize)]
struct LockedModule {
    name: String,
    version: String,
}

impl ManifestParser for LockFileParser {
    fn modules(
        &self,
        modules_root: &Path,
        manifest_path: &Path,
    ) -> Result<Vec<ResolvedModule>> {
        let text = read_manifest(manifest_path)?;
        let doc: LockFileDoc = serde_json::from_str(&text)
            .map_err(|e| Error::manifest_parse(manifest_path, e.to_string()))?;

        if doc.version != SUPPORTED_LOCK_VERSION {
            return Err(Error::manifest_parse(
                manifest_path,
                format!(
                    "unsupported lock schema version {} (expected {SUPPORTED_LOCK_VERSION})",
                    doc.version
                ),
            ));
        }

        doc.modules
            .iter()
            .map(|locked| {
                let identity = ModuleIdentity::new(&locked.name, &locked.version)
                    .map_err(|reason| Error::manifest_parse(manifest_path, reason))?;
                Ok(ResolvedModule::nested(identity, modules_root))
            })
            .collect()
    }
}

//! Dependency-map manifest parsing for `deps.json` files.
//!
//! The dependency map is a JSON object whose `dependencies` section maps
//! module name to version. Key order in the document is the declaration
//! order and is preserved; `serde_json` streams map entries in document
//! order, so a visitor collecting pairs is enough. Unknown top-level
//! sections are ignored. Modules live under the nested layout
//! `<modulesRoot>/<name>/<version>`.
//!
//! # Example JSON
//!
//! ```json
//! {
//!   "dependencies": {
//!     "alpha.core": "1.2.0",
//!     "beta": "2.5.1"
//!   }
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::{ManifestParser, read_manifest};
use crate::error::{Error, Result};
use crate::module::{ModuleIdentity, ResolvedModule};

/// Parser for the `deps.json` dependency-map format.
pub struct DependencyMapParser;

#[derive(Debug, Deserialize)]
struct DependencyMapDoc {
    /// Name/version pairs in document order. Absent section means no modules.
    #[serde(default, deserialize_with = "ordered_pairs")]
    dependencies: Vec<(String, String)>,
}

/// Helper function to deserialize a JSON map as ordered pairs.
fn ordered_pairs<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<(String, String)>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct PairVisitor;

    impl<'de> serde::de::Visitor<'de> for PairVisitor {
        type Value = Vec<(String, String)>;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a map of module name to version")
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: serde::de::MapAccess<'de>,
        {
            let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, String>()? {
                pairs.push(entry);
            }
            Ok(pairs)
        }
    }

    deserializer.deserialize_map(PairVisitor)
}

impl ManifestParser for DependencyMapParser {
    fn modules(
        &self,
        modules_root: &Path,
        manifest_path: &Path,
    ) -> Result<Vec<ResolvedModule>> {
        let text = read_manifest(manifest_path)?;
        let doc: DependencyMapDoc = serde_json::from_str(&text)
            .map_err(|e| Error::manifest_parse(manifest_path, e.to_string()))?;

        doc.dependencies
            .iter()
            .map(|(name, version)| {
                let identity = ModuleIdentity::new(name, version)
                    .map_err(|reason| Error::manifest_parse(manifest_path, reason))?;
                Ok(ResolvedModule::nested(identity, modules_root))
            })
            .collect()
    }
}

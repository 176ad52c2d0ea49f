//! Per-module extension slot declarations.
//!
//! A module opts into shared extension slots by listing slot file names in
//! its module config (`build/module.toml` by convention). Declaring a name
//! only controls which slot files get generated; every module is imported
//! by every generated slot file regardless of who declared it.
//!
//! # Example TOML
//!
//! ```toml
//! extensions = [
//!     "before.common.targets",
//!     "after.common.targets",
//! ]
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use crate::conventions::Conventions;
use crate::error::{Error, Result};
use crate::module::ResolvedModule;

/// Reader for per-module extension declarations.
pub struct ModuleConfigReader<'a> {
    conventions: &'a Conventions,
}

#[derive(Debug, Deserialize)]
struct ModuleConfigDoc {
    #[serde(default)]
    extensions: Vec<String>,
}

impl<'a> ModuleConfigReader<'a> {
    pub fn new(conventions: &'a Conventions) -> Self {
        Self { conventions }
    }

    /// Extension slot names requested by one module.
    ///
    /// An absent config file means the module requests nothing. Duplicate
    /// entries within one file are tolerated and deduplicated. A present but
    /// malformed file is a hard failure: generating from half-understood
    /// declarations would silently change build behavior.
    pub fn extensions(&self, module: &ResolvedModule) -> Result<BTreeSet<String>> {
        let path = self.conventions.module_config_file(module.dir());
        if !path.is_file() {
            return Ok(BTreeSet::new());
        }

        let text = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let doc: ModuleConfigDoc = toml::from_str(&text)
            .map_err(|e| Error::module_config_parse(&path, e.to_string()))?;

        let mut names = BTreeSet::new();
        for name in &doc.extensions {
            validate_slot_name(name)
                .map_err(|reason| Error::module_config_parse(&path, reason))?;
            names.insert(name.clone());
        }
        Ok(names)
    }

    /// Union of extension slot names across `modules`, lexicographic order.
    pub fn union(&self, modules: &[ResolvedModule]) -> Result<BTreeSet<String>> {
        let mut all = BTreeSet::new();
        for module in modules {
            all.extend(self.extensions(module)?);
        }
        Ok(all)
    }
}

/// Validate an extension slot name.
///
/// Slot names become file names under the extensions directory and literal
/// text inside import conditions, so the character set is restricted the
/// same way module names are, with `.`/`..` additionally rejected.
fn validate_slot_name(name: &str) -> std::result::Result<(), String> {
    if name.is_empty() {
        return Err("empty extension name".to_string());
    }
    if name == "." || name == ".." {
        return Err(format!("invalid extension name '{name}'"));
    }
    let ok = name
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'));
    if !ok {
        return Err(format!(
            "invalid extension name '{name}': only ASCII letters, digits, '.', '_' and '-' are allowed"
        ));
    }
    Ok(())
}

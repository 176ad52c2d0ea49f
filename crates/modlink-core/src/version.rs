//! Lenient module version parsing.
//!
//! Manifest authors write semver, but short forms are common in dependency
//! maps (`"1.0"`, `"2"`). Parsing pads missing components with `.0` for
//! comparison while keeping the original string intact: folder names on disk
//! are built from the version exactly as written.
//!
//! # Examples
//!
//! ```
//! use modlink_core::version::ModuleVersion;
//!
//! let v = ModuleVersion::parse("1.0").unwrap();
//! assert_eq!(v.as_str(), "1.0");
//! assert_eq!(v, ModuleVersion::parse("1.0.0").unwrap());
//! ```

/// A module version: semver for comparison, raw text for paths.
///
/// Equality and ordering follow semver precedence (pre-release labels
/// included), so `"1.0"` and `"1.0.0"` compare equal even though their
/// raw forms differ.
#[derive(Debug, Clone)]
pub struct ModuleVersion {
    semver: semver::Version,
    /// The version string exactly as written in the manifest.
    raw: String,
}

impl ModuleVersion {
    /// Parse a version string, padding missing minor/patch components.
    ///
    /// - `"1.2.3"` -> `1.2.3`
    /// - `"1.2"` -> `1.2.0`
    /// - `"2"` -> `2.0.0`
    /// - `"1.0-beta"` -> `1.0.0-beta`
    ///
    /// Four or more numeric components are rejected. Errors carry a reason
    /// string; callers attach the manifest path.
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err("empty version".to_string());
        }

        // Split off pre-release/build text so only the numeric core is padded.
        let core_end = raw.find(['-', '+']).unwrap_or(raw.len());
        let (core, rest) = raw.split_at(core_end);

        let parts = core.split('.').count();
        if parts > 3 {
            return Err(format!(
                "invalid version '{raw}': too many numeric components"
            ));
        }

        let padded = match parts {
            1 => format!("{core}.0.0{rest}"),
            2 => format!("{core}.0{rest}"),
            _ => raw.to_string(),
        };

        let semver = semver::Version::parse(&padded)
            .map_err(|e| format!("invalid version '{raw}': {e}"))?;

        Ok(Self {
            semver,
            raw: raw.to_string(),
        })
    }

    /// The version string exactly as written in the manifest.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The normalized semver form used for comparison.
    pub fn semver(&self) -> &semver::Version {
        &self.semver
    }
}

impl PartialEq for ModuleVersion {
    fn eq(&self, other: &Self) -> bool {
        self.semver == other.semver
    }
}

impl Eq for ModuleVersion {}

impl PartialOrd for ModuleVersion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ModuleVersion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.semver.cmp(&other.semver)
    }
}

impl std::fmt::Display for ModuleVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

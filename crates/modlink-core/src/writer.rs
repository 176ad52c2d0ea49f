//! Descriptor writing.

use std::fs;
use std::path::Path;

use crate::descriptor::Descriptor;
use crate::error::{Error, Result};

/// Writes rendered descriptors to disk.
///
/// Intermediate directories are created as needed and existing files are
/// overwritten unconditionally, so a re-run with identical inputs rewrites
/// identical bytes. Writes are plain, not atomic; callers own concurrency.
pub struct DescriptorWriter;

impl DescriptorWriter {
    /// Render `descriptor` and write it to `path`.
    pub fn write(&self, path: &Path, descriptor: &Descriptor) -> Result<()> {
        let xml = descriptor.render();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::output_write(path, e))?;
        }
        fs::write(path, xml.as_bytes()).map_err(|e| Error::output_write(path, e))?;
        tracing::debug!(path = ?path, bytes = xml.len(), "wrote descriptor");
        Ok(())
    }
}

//! DescriptorGenerator - main entry point for descriptor generation.
//!
//! Turns an ordered resolved module sequence into the root descriptor plus
//! one extension slot file per requested slot name.

use std::collections::HashMap;
use std::path::Path;

use crate::conventions::Conventions;
use crate::descriptor::{Descriptor, Import, Property};
use crate::error::Result;
use crate::extensions::ModuleConfigReader;
use crate::module::ResolvedModule;
use crate::writer::DescriptorWriter;

/// Counts reported by a successful generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Resolved module occurrences (duplicates included).
    pub modules: usize,
    /// Distinct module properties emitted (sentinel not counted).
    pub properties: usize,
    /// Imports in the root descriptor, leading and trailing included.
    pub imports: usize,
    /// Extension slot files written.
    pub extension_files: usize,
}

/// Main entry point for descriptor generation.
///
/// The generator:
/// 1. Collects extension slot names declared by the modules
/// 2. Builds and writes the root descriptor (properties + import chain)
/// 3. Writes one slot file per distinct extension name
pub struct DescriptorGenerator {
    modules: Vec<ResolvedModule>,
    conventions: Conventions,
    writer: DescriptorWriter,
}

impl DescriptorGenerator {
    /// Create a generator over an ordered module sequence.
    pub fn new(modules: Vec<ResolvedModule>, conventions: Conventions) -> Self {
        Self {
            modules,
            conventions,
            writer: DescriptorWriter,
        }
    }

    pub fn modules(&self) -> &[ResolvedModule] {
        &self.modules
    }

    /// Generate the root descriptor at `output_path` and slot files under
    /// `extensions_dir`.
    ///
    /// `imports_before` and `imports_after` are import project strings
    /// wrapped verbatim around the module import chain. Any failure aborts
    /// the run; files already written stay on disk (no rollback).
    pub fn generate(
        &self,
        output_path: &Path,
        extensions_dir: &Path,
        imports_before: &[String],
        imports_after: &[String],
    ) -> Result<GenerateSummary> {
        // Collect slot names up front: a malformed module config must abort
        // the run before any output file is written.
        let reader = ModuleConfigReader::new(&self.conventions);
        let slots = reader.union(&self.modules)?;

        let root = self.root_descriptor(imports_before, imports_after);
        self.writer.write(output_path, &root)?;

        for name in &slots {
            let slot = self.slot_descriptor(name);
            self.writer.write(&extensions_dir.join(name), &slot)?;
        }

        let summary = GenerateSummary {
            modules: self.modules.len(),
            properties: root.properties().len().saturating_sub(1),
            imports: root.imports().len(),
            extension_files: slots.len(),
        };
        tracing::info!(
            modules = summary.modules,
            properties = summary.properties,
            imports = summary.imports,
            extension_files = summary.extension_files,
            "generated descriptors"
        );
        Ok(summary)
    }

    /// The root descriptor: sentinel property, one property per distinct
    /// module name, then the guarded import chain.
    fn root_descriptor(
        &self,
        imports_before: &[String],
        imports_after: &[String],
    ) -> Descriptor {
        let mut descriptor = Descriptor::new();

        descriptor.push_property(Property::new(
            self.conventions.sentinel_name.as_str(),
            self.conventions.sentinel_value.as_str(),
        ));
        for property in self.module_properties() {
            descriptor.push_property(property);
        }

        for project in imports_before {
            descriptor.push_import(Import::guarded(project.as_str()));
        }
        for module in &self.modules {
            descriptor.push_import(Import::guarded(
                self.module_file(module, &self.conventions.import_file),
            ));
        }
        for project in imports_after {
            descriptor.push_import(Import::guarded(project.as_str()));
        }

        descriptor
    }

    /// One property per distinct case-insensitive module name: the value
    /// comes from the last occurrence in declaration order, the name casing
    /// and position from the first.
    fn module_properties(&self) -> Vec<Property> {
        let mut last_folder: HashMap<String, &str> = HashMap::new();
        for module in self.modules.iter().rev() {
            last_folder
                .entry(module.name().to_ascii_lowercase())
                .or_insert_with(|| module.folder());
        }

        let mut properties = Vec::new();
        for module in &self.modules {
            let key = module.name().to_ascii_lowercase();
            if let Some(folder) = last_folder.remove(&key) {
                properties.push(Property::new(
                    module
                        .identity()
                        .property_name(&self.conventions.property_name_prefix),
                    format!("{}{}", self.conventions.property_value_prefix, folder),
                ));
            }
        }
        properties
    }

    /// A slot descriptor: one guarded import per module occurrence, no
    /// properties. Every module gets a hook point whether or not it declared
    /// the slot name.
    fn slot_descriptor(&self, name: &str) -> Descriptor {
        let mut descriptor = Descriptor::new();
        for module in &self.modules {
            descriptor.push_import(Import::guarded(self.module_file(module, name)));
        }
        descriptor
    }

    /// Descriptor-text path of a file inside a module's folder.
    fn module_file(&self, module: &ResolvedModule, file: &str) -> String {
        format!(
            "{}{}\\{}",
            self.conventions.property_value_prefix,
            module.folder(),
            file
        )
    }
}

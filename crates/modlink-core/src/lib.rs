//! Module resolution and build descriptor generation for Modlink.
//!
//! This crate parses the three module manifest formats, reads per-module
//! extension declarations, and generates the root descriptor plus extension
//! slot files that wire resolved modules into a build.

pub mod conventions;
pub mod descriptor;
pub mod error;
pub mod extensions;
pub mod generator;
pub mod manifest;
pub mod module;
pub mod version;
pub mod writer;

pub use conventions::Conventions;
pub use descriptor::{Descriptor, Import, Property};
pub use error::{Error, Result};
pub use extensions::ModuleConfigReader;
pub use generator::{DescriptorGenerator, GenerateSummary};
pub use manifest::{
    DependencyMapParser, FlatListParser, LockFileParser, ManifestFormat, ManifestParser,
    ParserRegistry,
};
pub use module::{ModuleIdentity, ResolvedModule};
pub use version::ModuleVersion;
pub use writer::DescriptorWriter;

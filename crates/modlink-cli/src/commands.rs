//! Command implementations for modlink-cli

use std::path::Path;

use colored::Colorize;

use modlink_core::{
    Conventions, DescriptorGenerator, ManifestFormat, ParserRegistry, ResolvedModule,
};

use crate::error::{CliError, Result};

/// Resolve the manifest format: an explicit `--format` wins, otherwise the
/// manifest file name decides.
fn resolve_format(manifest: &Path, explicit: Option<ManifestFormat>) -> Result<ManifestFormat> {
    if let Some(format) = explicit {
        return Ok(format);
    }
    ManifestFormat::from_path(manifest).ok_or_else(|| {
        CliError::user(format!(
            "cannot detect manifest format from '{}'; pass --format",
            manifest.display()
        ))
    })
}

fn resolve_modules(
    modules_root: &Path,
    manifest: &Path,
    format: Option<ManifestFormat>,
) -> Result<Vec<ResolvedModule>> {
    let format = resolve_format(manifest, format)?;
    let registry = ParserRegistry::new();
    let modules = registry.get_parser(format).modules(modules_root, manifest)?;
    tracing::debug!(count = modules.len(), %format, "resolved modules");
    Ok(modules)
}

/// Run the generate command
pub fn run_generate(
    modules_root: &Path,
    manifest: &Path,
    format: Option<ManifestFormat>,
    output: &Path,
    extensions_dir: &Path,
    imports_before: &[String],
    imports_after: &[String],
) -> Result<()> {
    let modules = resolve_modules(modules_root, manifest, format)?;
    let generator = DescriptorGenerator::new(modules, Conventions::default());
    let summary = generator.generate(output, extensions_dir, imports_before, imports_after)?;

    println!(
        "{} Generated {} ({} modules, {} properties, {} imports, {} extension files)",
        "OK".green().bold(),
        output.display().to_string().cyan(),
        summary.modules,
        summary.properties,
        summary.imports,
        summary.extension_files,
    );
    Ok(())
}

/// Run the list command
pub fn run_list(
    modules_root: &Path,
    manifest: &Path,
    format: Option<ManifestFormat>,
    json: bool,
) -> Result<()> {
    let modules = resolve_modules(modules_root, manifest, format)?;

    if json {
        let items: Vec<serde_json::Value> = modules
            .iter()
            .map(|m| {
                serde_json::json!({
                    "name": m.name(),
                    "version": m.version().as_str(),
                    "folder": m.folder(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    println!(
        "{} {} module(s) in {}",
        "=>".blue().bold(),
        modules.len(),
        manifest.display()
    );
    for module in &modules {
        println!(
            "   {} {} {}",
            module.name().cyan(),
            module.version().as_str().dimmed(),
            module.folder()
        );
    }
    Ok(())
}

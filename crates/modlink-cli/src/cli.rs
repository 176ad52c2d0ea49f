//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use modlink_core::ManifestFormat;

/// Modlink - Generate build descriptors from installed module manifests
#[derive(Parser, Debug)]
#[command(name = "modlink")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate the root descriptor and extension slot files
    ///
    /// Resolves the manifest into an ordered module sequence, then writes
    /// the root descriptor and one slot file per extension name the modules
    /// declare.
    ///
    /// Examples:
    ///   modlink generate --modules-root mods --manifest modules.toml \
    ///       --output out/modules.props --extensions-dir out/extensions
    Generate {
        /// Directory the module folders live under
        #[arg(long)]
        modules_root: PathBuf,

        /// Path to the module manifest
        #[arg(long)]
        manifest: PathBuf,

        /// Manifest format (detected from the file name when omitted)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Path of the generated root descriptor
        #[arg(long)]
        output: PathBuf,

        /// Directory for generated extension slot files
        #[arg(long)]
        extensions_dir: PathBuf,

        /// Import to emit before the module import chain (repeatable)
        #[arg(long)]
        import_before: Vec<String>,

        /// Import to emit after the module import chain (repeatable)
        #[arg(long)]
        import_after: Vec<String>,
    },

    /// List the modules a manifest resolves to
    List {
        /// Directory the module folders live under
        #[arg(long)]
        modules_root: PathBuf,

        /// Path to the module manifest
        #[arg(long)]
        manifest: PathBuf,

        /// Manifest format (detected from the file name when omitted)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

/// Manifest format names accepted by `--format`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    /// modules.toml flat list
    FlatList,
    /// deps.json dependency map
    DependencyMap,
    /// deps.lock.json resolved lock
    LockFile,
}

impl From<FormatArg> for ManifestFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::FlatList => ManifestFormat::FlatList,
            FormatArg::DependencyMap => ManifestFormat::DependencyMap,
            FormatArg::LockFile => ManifestFormat::LockFile,
        }
    }
}

//! Modlink CLI
//!
//! The command-line interface for generating build descriptors from module
//! manifests.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            // No command provided - show help hint
            println!("{} Build descriptor generator", "modlink".green().bold());
            println!();
            println!("Run {} for available commands.", "modlink --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Generate {
            modules_root,
            manifest,
            format,
            output,
            extensions_dir,
            import_before,
            import_after,
        } => commands::run_generate(
            &modules_root,
            &manifest,
            format.map(Into::into),
            &output,
            &extensions_dir,
            &import_before,
            &import_after,
        ),
        Commands::List {
            modules_root,
            manifest,
            format,
            json,
        } => commands::run_list(&modules_root, &manifest, format.map(Into::into), json),
    }
}

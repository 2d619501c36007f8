use anyhow::Context;
use clap::Parser;
use splrename_core::{Config, OutputFormatter, VersionResult};
use std::process;

mod cli;
mod line_name;
mod progress;
mod rename;
mod reverse;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        if let Err(e) = std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
        {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }

    // Load config to get defaults
    let config = Config::load().unwrap_or_default();

    let result = match cli.command {
        Commands::Rename {
            spreadsheet,
            filename,
            seq_format,
            time_format,
            output,
            quiet,
        } => rename::handle_rename(
            &spreadsheet,
            &filename,
            seq_format.as_deref(),
            time_format.as_deref(),
            &config,
            output,
            quiet,
        ),

        Commands::RenameLn {
            spreadsheet,
            output,
            quiet,
        } => line_name::handle_rename_ln(&spreadsheet, output, quiet),

        Commands::Reverse {
            log,
            delete_log,
            output,
            quiet,
        } => reverse::handle_reverse(&log, delete_log, output, quiet),

        Commands::Version { output } => {
            let result = VersionResult {
                name: "splrename".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            };
            println!("{}", result.format(output.into()));
            Ok(())
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(2);
    }
}

//! Registro CLI - validate civil registry records.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Validate {
            file,
            section,
            format,
            now,
            json,
            permissive,
        } => commands::validate::run(file, section, format, now, json, permissive, cli.verbose),

        Commands::Normalize {
            file,
            section,
            format,
            now,
        } => commands::normalize::run(file, section, format, now, cli.verbose),

        Commands::Sections { section, json } => commands::sections::run(section, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "registro=debug,registro_cli=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

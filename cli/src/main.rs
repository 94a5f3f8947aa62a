//! sqlift CLI - main entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use sqlift_cli::commands;
use sqlift_cli::error::CliError;

/// sqlift - versioned SQL migrations for SQLite
#[derive(Parser, Debug)]
#[command(name = "sqlift")]
#[command(author, version, about = "Versioned SQL migration runner for SQLite", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
enum Command {
    /// Collect a directory of .sql files into a bundle.json
    Bundle {
        /// Migrations folder containing V<version>__<name>.sql files
        dir: PathBuf,
    },

    /// Apply pending migrations from a bundle to a database
    Migrate {
        /// Path to the SQLite database file
        #[arg(long, value_name = "PATH")]
        db: PathBuf,

        /// Bundle file, or a migrations directory containing bundle.json
        bundle: PathBuf,
    },

    /// Show applied vs pending migrations without executing anything
    Status {
        /// Path to the SQLite database file
        #[arg(long, value_name = "PATH")]
        db: PathBuf,

        /// Bundle file, or a migrations directory containing bundle.json
        bundle: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Bundle { dir } => commands::bundle::run(&dir),
        Command::Migrate { db, bundle } => commands::migrate::run(&db, &bundle),
        Command::Status { db, bundle } => commands::status::run(&db, &bundle),
    }
}

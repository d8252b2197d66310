//! mdtangle CLI - tangle literate markdown into source files

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mdtangle::commands::{self, OutputFormat};
use mdtangle::interface::Context;

#[derive(Parser)]
#[command(name = "mdtangle")]
#[command(author, version, about = "Tangle literate markdown into source files", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    directory: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Macro expansion passes over each document (overrides config file)
    #[arg(short, long, global = true)]
    passes: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the output files of markdown documents
    Tangle {
        /// Dry run - show what would be done without doing it
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Report format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Specific files to tangle (default: configured source patterns)
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// List the named blocks of a document
    Blocks {
        /// Document to inspect
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Determine working directory
    let base_dir = cli
        .directory
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let config = match cli.config {
        Some(ref path) => mdtangle::config::read_config_file(path),
        None => mdtangle::config::read_config(&base_dir),
    };
    let mut config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error reading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(passes) = cli.passes {
        config = config.with_passes(passes);
    }

    let ctx = Context::new(config, base_dir);

    let result = match cli.command {
        Commands::Tangle {
            dry_run,
            format,
            files,
        } => {
            let options = commands::TangleOptions {
                dry_run,
                format,
                files,
            };
            commands::tangle(&ctx, options).map(|run| run.is_success())
        }

        Commands::Blocks { file } => {
            let options = commands::BlocksOptions { file };
            commands::blocks(&ctx, options).map(|_| true)
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

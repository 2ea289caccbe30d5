use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use spm_analyzer::output::{self, OutputFormat};
use spm_analyzer::parser;

/// spm-analyzer - Swift package manifest analyzer
/// Extracts the package name, dependencies, products, and targets from a
/// Package.swift file without compiling it.
#[derive(Parser)]
#[command(name = "spm-analyzer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a Package.swift manifest
    Parse {
        /// Path to the Package.swift file
        path: String,
    },
}

fn run_parse(path: &str, format: OutputFormat) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest at {}", path))?;
    let analysis = parser::parse(&content)?;

    match format {
        OutputFormat::Json => println!("{}", analysis.to_canonical_json()?),
        OutputFormat::Text => print!("{}", output::render_text(&analysis)),
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let format = OutputFormat::from_str(&cli.format);

    let result = match cli.command {
        Commands::Parse { path } => run_parse(&path, format),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

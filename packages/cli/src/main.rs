mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{compile, tokens, CompileArgs, TokensArgs};
use tracing_subscriber::EnvFilter;

/// Swatch CLI - compile design-token themes to scoped CSS
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile theme files to stylesheets
    Compile(CompileArgs),

    /// Print a theme's flattened tokens as JSON
    Tokens(TokensArgs),
}

fn main() {
    // Logs go to stderr so `--stdout` output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| match cli.command {
            Command::Compile(args) => compile(args, &cwd),
            Command::Tokens(args) => tokens(args, &cwd),
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}

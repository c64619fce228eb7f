mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use rusty_enrol::types::{Language, LanguageError};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rusty-enrol")]
#[command(version, about = "Student registration form - fill in and check from the terminal", long_about = None)]
struct Cli {
    /// Configuration file (default: ./enrol.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the form, show every helper text and run the confirmation
    Check(CheckArgs),

    /// Print the active validation rules
    Rules,
}

#[derive(Args)]
pub struct CheckArgs {
    /// First name (also pre-fills the preferred name)
    #[arg(long)]
    first_name: Option<String>,

    /// Preferred name, if different from the first name
    #[arg(long)]
    preferred_name: Option<String>,

    #[arg(long)]
    last_name: Option<String>,

    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    password: Option<String>,

    /// Native language code: uk, ru, de or en
    #[arg(long, value_parser = parse_language)]
    native: Option<Language>,

    /// Preferred language code: uk, ru, de or en
    #[arg(long, value_parser = parse_language)]
    preferred: Option<Language>,

    /// Locale of the helper texts (overrides the config file)
    #[arg(short, long)]
    locale: Option<String>,

    /// Print the password instead of bullets
    #[arg(long)]
    show_password: bool,
}

fn parse_language(code: &str) -> Result<Language, LanguageError> {
    code.parse()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;

    // Execute command
    match cli.command {
        Commands::Check(args) => {
            commands::check::execute(args, config)?;
        }
        Commands::Rules => {
            commands::rules::execute(&config)?;
        }
    }

    Ok(())
}

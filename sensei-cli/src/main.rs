//! Sensei CLI - Command line interface for CodeSensei
//!
//! AI code review and explanation: paste a code block and a
//! description, get an automated review back from Gemini.

mod commands;

use clap::{Parser, Subcommand};
use sensei_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{ReviewArgs, SecretsArgs};

/// CodeSensei: AI code review and explanation
#[derive(Parser, Debug)]
#[command(name = "sensei")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Model to use (overrides config and env)
    #[arg(long, global = true, env = "SENSEI_MODEL")]
    model: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Review a code block against its description
    #[command(visible_alias = "r")]
    Review(ReviewArgs),

    /// Manage the secrets file
    Secrets(SecretsArgs),

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.model.clone())?;

    if cli.verbose {
        tracing::info!(
            model = %config.generation.model,
            endpoint = ?config.generation.endpoint,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("sensei {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Review(args)) => {
            args.execute(cli.verbose, &config).await?;
        }
        Some(Commands::Secrets(args)) => {
            args.execute()?;
        }
        Some(Commands::Config) => {
            println!("CodeSensei Configuration");
            println!("========================");
            println!();
            println!("Generation Settings:");
            println!("  model: {}", config.generation.model);
            println!(
                "  endpoint: {}",
                config.generation.endpoint.as_deref().unwrap_or("(default)")
            );
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            println!("CodeSensei - AI code review and explanation");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

//! Secrets command - Manage the secrets file

use clap::{Args, Subcommand};
use sensei_core::Secrets;

/// Arguments for the secrets command
#[derive(Args, Debug)]
pub struct SecretsArgs {
    #[command(subcommand)]
    pub command: SecretsCommand,
}

#[derive(Subcommand, Debug)]
pub enum SecretsCommand {
    /// Create a secrets file template with secure permissions
    Init,

    /// Show the secrets file path and whether a key is configured
    Status,
}

impl SecretsArgs {
    /// Execute the secrets command
    pub fn execute(&self) -> anyhow::Result<()> {
        match self.command {
            SecretsCommand::Init => {
                let path = Secrets::create_template()?;
                println!("Created secrets template at {}", path.display());
                println!("Edit the file and add your Gemini API key.");
            }
            SecretsCommand::Status => {
                match Secrets::default_secrets_path() {
                    Some(path) => {
                        println!("Secrets file: {}", path.display());
                        if path.exists() {
                            println!("  (exists)");
                        } else {
                            println!("  (not found - run: sensei secrets init)");
                        }
                    }
                    None => println!("Secrets file: (could not determine path)"),
                }

                let secrets = Secrets::load()?;
                if secrets.gemini_api_key().is_some() {
                    println!("Gemini API key: configured");
                } else {
                    println!("Gemini API key: not configured");
                }
            }
        }

        Ok(())
    }
}

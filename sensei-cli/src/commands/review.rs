//! Review command - Send a code block and description for review

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use sensei_core::{run_review, Config, Error, ReviewRequest, Secrets};
use sensei_gemini::GeminiClient;

/// Arguments for the review command
#[derive(Args, Debug)]
pub struct ReviewArgs {
    /// File containing the code block to review (reads stdin if omitted)
    pub code_file: Option<PathBuf>,

    /// Description of what the code is intended to do
    #[arg(short = 'm', long)]
    pub description: Option<String>,

    /// File containing the description (alternative to --description)
    #[arg(long, conflicts_with = "description")]
    pub description_file: Option<PathBuf>,
}

impl ReviewArgs {
    /// Execute the review command
    pub async fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let code = self.read_code()?;
        let description = self.read_description()?;

        let request = ReviewRequest::new(code, description);

        // Validation happens before the client is ever called; an
        // empty field is a user error, not a generation failure.
        request.validate()?;

        if verbose {
            tracing::info!(
                model = %config.generation.model,
                code_len = request.code.len(),
                "Starting review"
            );
        }

        let secrets = Secrets::load()?;
        let client = GeminiClient::from_config(config, &secrets);

        let outcome = run_review(&client, &request).await;
        println!("{}", format_outcome(outcome)?);

        Ok(())
    }

    fn read_code(&self) -> anyhow::Result<String> {
        match &self.code_file {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read code file {}", path.display())),
            None => {
                let mut code = String::new();
                std::io::stdin()
                    .read_to_string(&mut code)
                    .context("Failed to read code from stdin")?;
                Ok(code)
            }
        }
    }

    fn read_description(&self) -> anyhow::Result<String> {
        if let Some(ref description) = self.description {
            return Ok(description.clone());
        }

        if let Some(ref path) = self.description_file {
            return std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read description file {}", path.display()));
        }

        Ok(String::new())
    }
}

/// Render a review outcome for display
///
/// Review text and generation failures share one output channel: a
/// failure becomes plain text prefixed `Error: ` followed by the
/// error's description. Anything that is not a generation failure
/// (IO, config) propagates as a real error instead.
fn format_outcome(outcome: sensei_core::Result<String>) -> anyhow::Result<String> {
    match outcome {
        Ok(text) => Ok(text),
        Err(Error::Generate(e)) => Ok(format!("Error: {}", e)),
        Err(other) => Err(other.into()),
    }
}

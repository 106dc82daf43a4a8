//! Review request and prompt builder
//!
//! A review request holds the two inputs the user supplies: the code
//! block under review and a free-text description of what it should
//! do. Neither is validated as syntactically correct code; the only
//! requirement is that both are non-empty.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A single code review request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRequest {
    /// The code block to review, verbatim
    pub code: String,

    /// What the code is intended to do
    pub description: String,
}

impl ReviewRequest {
    /// Create a new review request
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }

    /// Check that both inputs are present
    ///
    /// Callers must validate before issuing any generation call; an
    /// empty field never reaches the backend.
    pub fn validate(&self) -> Result<()> {
        if self.code.trim().is_empty() || self.description.trim().is_empty() {
            return Err(Error::InvalidInput(
                "both a code block and a description are required".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the full prompt for the reviewer model
    ///
    /// Pure string assembly: the role instruction, both inputs
    /// verbatim, and the four fixed task directives.
    pub fn to_prompt(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str("You are an expert code reviewer.\n\n");

        prompt.push_str("PULL REQUEST DESCRIPTION:\n");
        prompt.push_str(&self.description);
        prompt.push_str("\n\n");

        prompt.push_str("CODE TO REVIEW:\n");
        prompt.push_str(&self.code);
        prompt.push_str("\n\n");

        prompt.push_str("TASKS:\n");
        prompt.push_str("1. Identify mistakes, bugs, or bad practices.\n");
        prompt.push_str("2. Suggest improvements.\n");
        prompt.push_str("3. Explain what the code does in simple English.\n");
        prompt.push_str("4. Give a final summary in bullet points.\n");

        prompt
    }
}

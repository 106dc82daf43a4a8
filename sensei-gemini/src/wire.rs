//! Wire types for the Gemini generateContent API
//!
//! Request: `{"contents": [{"parts": [{"text": "..."}]}]}`.
//! Response: candidates, each holding content parts; the reply text is
//! the first text part of the first candidate. Error replies carry an
//! `error` object with `code`, `message`, and a symbolic `status`.

use serde::{Deserialize, Serialize};

/// Request body for a generateContent call
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Build a single-turn request from one prompt string
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

/// One content block (a single user turn here)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One part of a content block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

/// Successful response body
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One generation candidate
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Extract the reply text: the first non-empty text part of the
    /// first candidate
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .find(|t| !t.is_empty())
            })
    }
}

/// Error response body
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiError,
}

/// The error object inside a non-success reply
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    /// Symbolic status, e.g. `PERMISSION_DENIED` or `RESOURCE_EXHAUSTED`
    #[serde(default)]
    pub status: String,
}

//! Text generation abstraction
//!
//! The generation backend is an explicitly constructed object passed
//! into the review runner rather than process-wide state, so tests can
//! substitute a scripted fake for the real Gemini client.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during a generation call
///
/// The backend's original message is preserved in each variant so the
/// failure class and its cause both survive to the display layer.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Transport-level failure (connection, DNS, TLS)
    #[error("Network error: {0}")]
    Network(String),

    /// The API rejected the credential
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The API reported quota or rate limits exhausted
    #[error("Quota exceeded: {0}")]
    Quota(String),

    /// The response could not be parsed or carried no text
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Any other non-success API reply
    #[error("API error: {0}")]
    Api(String),
}

/// Trait for text generation backends
///
/// One stateless call per invocation: a prompt in, the model's text
/// out. No caching, no conversation state across calls.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// The model identifier this generator sends on every call
    fn model(&self) -> &str;

    /// Generate text for a single prompt
    async fn generate(&self, prompt: &str) -> std::result::Result<String, GenerateError>;
}

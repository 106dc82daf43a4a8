//! Gemini API client

use async_trait::async_trait;
use sensei_core::{Config, GenerateError, Secrets, TextGenerator};
use tracing::{debug, info};
use url::Url;

use crate::wire::{ApiErrorBody, GenerateContentRequest, GenerateContentResponse};

/// Default base URL of the hosted generation endpoint
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Gemini generation client
///
/// Holds the credential and the fixed model identifier; every call is
/// an independent POST to `{endpoint}/v1beta/{model}:generateContent`.
/// The key is not validated at construction; an empty or invalid key
/// surfaces as an authentication error on the first call.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    /// Create a new client with an explicit key and model
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let client = Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        };

        info!(model = %client.model, "Created Gemini client");
        client
    }

    /// Create a client from loaded configuration and secrets
    ///
    /// Key is resolved from (in priority order):
    /// 1. GEMINI_API_KEY environment variable
    /// 2. ~/.config/sensei/secrets.toml
    pub fn from_config(config: &Config, secrets: &Secrets) -> Self {
        let mut client = Self::new(
            secrets.gemini_api_key().unwrap_or_default(),
            config.generation.model.clone(),
        );

        if let Some(ref endpoint) = config.generation.endpoint {
            client.endpoint = endpoint.trim_end_matches('/').to_string();
        }

        client
    }

    /// Override the endpoint base URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Build the generateContent URL for this client's model
    fn request_url(&self) -> Result<Url, GenerateError> {
        let raw = format!("{}/v1beta/{}:generateContent", self.endpoint, self.model);
        let mut url =
            Url::parse(&raw).map_err(|e| GenerateError::Api(format!("Invalid endpoint: {}", e)))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let url = self.request_url()?;
        let body = GenerateContentRequest::from_prompt(prompt);

        debug!(model = %self.model, prompt_len = prompt.len(), "Calling generateContent");

        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerateError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GenerateError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(classify_failure(status.as_u16(), &text));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| GenerateError::MalformedResponse(e.to_string()))?;

        match parsed.text() {
            Some(reply) => {
                debug!(response_len = reply.len(), "generateContent succeeded");
                Ok(reply.to_string())
            }
            None => Err(GenerateError::MalformedResponse(
                "response contained no text".to_string(),
            )),
        }
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

/// Classify a non-success API reply into the error taxonomy
///
/// Keys off the HTTP status first, then the symbolic status in the
/// error body. The API's message is preserved as context.
fn classify_failure(status: u16, body: &str) -> GenerateError {
    let (message, api_status) = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => (parsed.error.message, parsed.error.status),
        Err(_) => (format!("HTTP {}: {}", status, body), String::new()),
    };

    match status {
        401 | 403 => GenerateError::Auth(message),
        429 => GenerateError::Quota(message),
        _ => match api_status.as_str() {
            "UNAUTHENTICATED" | "PERMISSION_DENIED" => GenerateError::Auth(message),
            "RESOURCE_EXHAUSTED" => GenerateError::Quota(message),
            _ => GenerateError::Api(message),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_contains_model_and_key() {
        let client = GeminiClient::new("test-key", "models/gemini-2.0-flash");
        let url = client.request_url().unwrap();

        assert_eq!(
            url.path(),
            "/v1beta/models/gemini-2.0-flash:generateContent"
        );
        assert_eq!(url.query(), Some("key=test-key"));
    }

    #[test]
    fn test_request_url_is_input_independent() {
        // The model in the URL is the configured value, never derived
        // from the prompt
        let client = GeminiClient::new("k", "models/gemini-2.0-flash");
        let first = client.request_url().unwrap();
        let second = client.request_url().unwrap();
        assert_eq!(first, second);
        assert!(first.path().contains("models/gemini-2.0-flash"));
    }

    #[test]
    fn test_with_endpoint_strips_trailing_slash() {
        let client =
            GeminiClient::new("k", "models/gemini-2.0-flash").with_endpoint("http://localhost:9/");
        let url = client.request_url().unwrap();
        assert!(url
            .as_str()
            .starts_with("http://localhost:9/v1beta/models/gemini-2.0-flash:generateContent"));
    }

    #[test]
    fn test_from_config_uses_configured_model() {
        let mut config = Config::default();
        config.generation.model = "models/gemini-2.5-pro".to_string();
        let secrets = Secrets::default();

        std::env::remove_var("GEMINI_API_KEY");
        let client = GeminiClient::from_config(&config, &secrets);
        assert_eq!(client.model(), "models/gemini-2.5-pro");
        // Missing key is not an error at construction time
        assert!(client.api_key.is_empty());
    }

    #[test]
    fn test_classify_auth_by_status_code() {
        let body = r#"{"error":{"code":403,"message":"API key not valid","status":"PERMISSION_DENIED"}}"#;
        let err = classify_failure(403, body);
        match err {
            GenerateError::Auth(msg) => assert_eq!(msg, "API key not valid"),
            other => panic!("expected auth, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_quota_by_status_code() {
        let body = r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
        assert!(matches!(
            classify_failure(429, body),
            GenerateError::Quota(_)
        ));
    }

    #[test]
    fn test_classify_by_symbolic_status() {
        let body = r#"{"error":{"code":400,"message":"exhausted","status":"RESOURCE_EXHAUSTED"}}"#;
        assert!(matches!(
            classify_failure(400, body),
            GenerateError::Quota(_)
        ));

        let body = r#"{"error":{"code":400,"message":"no auth","status":"UNAUTHENTICATED"}}"#;
        assert!(matches!(classify_failure(400, body), GenerateError::Auth(_)));
    }

    #[test]
    fn test_classify_other_api_error() {
        let body = r#"{"error":{"code":400,"message":"Invalid argument","status":"INVALID_ARGUMENT"}}"#;
        match classify_failure(400, body) {
            GenerateError::Api(msg) => assert_eq!(msg, "Invalid argument"),
            other => panic!("expected api error, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_unparseable_body_keeps_raw_text() {
        let err = classify_failure(500, "<html>gateway timeout</html>");
        match err {
            GenerateError::Api(msg) => {
                assert!(msg.contains("HTTP 500"));
                assert!(msg.contains("gateway timeout"));
            }
            other => panic!("expected api error, got {:?}", other),
        }
    }

    #[test]
    fn test_debug_hides_api_key() {
        let client = GeminiClient::new("super-secret", "models/gemini-2.0-flash");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("models/gemini-2.0-flash"));
    }
}

//! Review runner
//!
//! Drives a single review: validate the request, build the prompt,
//! issue exactly one generation call. There is no caching and no
//! conversation state; re-running identical inputs issues a fresh
//! call each time.

use tracing::debug;

use crate::generator::TextGenerator;
use crate::review::ReviewRequest;
use crate::Result;

/// Run a review request against a generation backend
///
/// Validation happens before any network activity: a request with an
/// empty field returns `Error::InvalidInput` without touching the
/// generator. Backend failures surface as `Error::Generate` with the
/// typed failure class intact.
pub async fn run_review(generator: &dyn TextGenerator, request: &ReviewRequest) -> Result<String> {
    request.validate()?;

    let prompt = request.to_prompt();
    debug!(
        model = generator.model(),
        prompt_len = prompt.len(),
        "Sending review prompt"
    );

    let text = generator.generate(&prompt).await?;
    debug!(response_len = text.len(), "Received review");

    Ok(text)
}

use futures::future::BoxFuture;
use serde::Deserialize;
use thiserror::Error;

use crate::{config::AppConfig, state::session::GameMode};

/// Header carrying the API key on Gemini-style endpoints.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Error raised by the generative-text collaborator. Callers degrade to a
/// canned fallback string; these never reach a client as an HTTP error.
#[derive(Debug, Error)]
pub enum OracleError {
    /// No API key was configured; the oracle never goes to the network.
    #[error("oracle disabled: no API key configured")]
    Disabled,
    /// The HTTP exchange failed or timed out.
    #[error("oracle request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The endpoint answered without any usable candidate text.
    #[error("oracle returned no usable text")]
    EmptyResponse,
}

/// Opaque generative-text collaborator producing short advisory strings.
///
/// The engine never depends on this; a slow or failed call can only ever
/// delay garnish, not a turn submission.
pub trait TipOracle: Send + Sync {
    /// One advanced tip for the given practice discipline.
    fn training_tip(&self, mode: GameMode) -> BoxFuture<'_, Result<String, OracleError>>;
    /// Suggested route to finish from `remaining` points.
    fn checkout_advice(&self, remaining: u16) -> BoxFuture<'_, Result<String, OracleError>>;
}

/// HTTP implementation of [`TipOracle`] against a Gemini-style
/// `generateContent` endpoint.
pub struct GenerativeOracle {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GenerativeOracle {
    /// Build the oracle client from the runtime configuration. The request
    /// timeout bounds every call so background fetches cannot linger.
    pub fn from_config(config: &AppConfig) -> Result<Self, OracleError> {
        let client = reqwest::Client::builder()
            .timeout(config.oracle_timeout())
            .build()?;
        Ok(Self {
            client,
            base_url: config.oracle_base_url().trim_end_matches('/').to_string(),
            model: config.oracle_model().to_string(),
            api_key: config.api_key().map(str::to_string),
        })
    }

    async fn generate(&self, prompt: String) -> Result<String, OracleError> {
        let Some(api_key) = &self.api_key else {
            return Err(OracleError::Disabled);
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: GenerateContentResponse = response.json().await?;
        payload
            .candidates
            .into_iter()
            .flat_map(|candidate| candidate.content.parts)
            .find_map(|part| part.text)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(OracleError::EmptyResponse)
    }
}

impl TipOracle for GenerativeOracle {
    fn training_tip(&self, mode: GameMode) -> BoxFuture<'_, Result<String, OracleError>> {
        Box::pin(self.generate(training_prompt(mode)))
    }

    fn checkout_advice(&self, remaining: u16) -> BoxFuture<'_, Result<String, OracleError>> {
        Box::pin(self.generate(checkout_prompt(remaining)))
    }
}

fn training_prompt(mode: GameMode) -> String {
    format!(
        "Give me one specific, advanced tip for the darts training game \"{}\". \
         For \"Bob's 27\", focus on pressure management or doubles accuracy. \
         For \"Around the Clock\", focus on rhythm and board navigation. \
         Keep it under 30 words.",
        mode.title()
    )
}

fn checkout_prompt(remaining: u16) -> String {
    format!(
        "You are a professional darts coach. A player has {remaining} points remaining. \
         Suggest the optimal path to finish (checkout) in 3 darts or less if possible. \
         If a checkout isn't possible, suggest the best setup shot. \
         Format the response as a clear, bold path (e.g., **T20 - T19 - D12**). \
         Keep the explanation very brief (1-2 sentences)."
    )
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parsing_takes_the_first_text_part() {
        let raw = r#"{
            "candidates": [{
                "content": { "parts": [{ "text": "  Aim small, miss small.  " }] }
            }]
        }"#;
        let payload: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let text = payload
            .candidates
            .into_iter()
            .flat_map(|candidate| candidate.content.parts)
            .find_map(|part| part.text)
            .map(|text| text.trim().to_string())
            .unwrap();
        assert_eq!(text, "Aim small, miss small.");
    }

    #[test]
    fn empty_candidates_deserialize_cleanly() {
        let payload: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(payload.candidates.is_empty());
    }

    #[tokio::test]
    async fn missing_api_key_disables_the_oracle() {
        // `AppConfig::default()` never carries a key, so the oracle must
        // refuse before touching the network.
        let oracle = GenerativeOracle::from_config(&AppConfig::default()).unwrap();
        let err = oracle.training_tip(GameMode::Gauntlet).await.unwrap_err();
        assert!(matches!(err, OracleError::Disabled));
    }

    #[test]
    fn prompts_name_the_discipline() {
        let prompt = training_prompt(GameMode::Gauntlet);
        assert!(prompt.contains("Bob's 27"));
        let prompt = checkout_prompt(40);
        assert!(prompt.contains("40 points"));
    }
}

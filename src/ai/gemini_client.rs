// External dependencies
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use url::Url;

// Internal dependencies
use super::{ModelError, TextModel};
use crate::config::ModelConfig;

// ============================================================================
// Credential
// ============================================================================

/// Gemini API key. Never printed.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Reads the key from `var`, after loading any `.env` in the working directory.
    pub fn from_env(var: &str) -> Result<Self> {
        if dotenv::dotenv().is_ok() {
            debug!("Loaded .env file");
        }

        let key = std::env::var(var)
            .with_context(|| format!("Environment variable {var} is not set"))?;
        if key.trim().is_empty() {
            return Err(anyhow::anyhow!("Environment variable {var} is empty"));
        }

        Ok(Self(key))
    }

    fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

// ============================================================================
// Gemini API Structures
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

// ============================================================================
// Client Implementation
// ============================================================================

pub struct GeminiClient {
    client: Client,
    base_url: Url,
    model_name: String,
    api_key: ApiKey,
}

impl GeminiClient {
    /// Builds the client once; it is shared by every request afterwards.
    pub fn new(api_key: ApiKey, config: &ModelConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid Gemini base URL: {}", config.base_url))?;
        if base_url.cannot_be_a_base() {
            return Err(anyhow::anyhow!(
                "Gemini base URL cannot carry a path: {}",
                config.base_url
            ));
        }

        Ok(Self {
            client,
            base_url,
            model_name: config.model_name.clone(),
            api_key,
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Appends the generate path to the base URL, keeping any path prefix it has.
    fn generate_url(&self) -> Result<Url, ModelError> {
        let method = format!("{}:generateContent", self.model_name);

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ModelError::Other(format!("Invalid Gemini base URL: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(["v1beta", "models", method.as_str()]);

        Ok(url)
    }

    fn extract_text(response: GenerateContentResponse) -> Result<String, ModelError> {
        let block_reason = response.prompt_feedback.and_then(|f| f.block_reason);

        let Some(candidate) = response.candidates.into_iter().next() else {
            return Err(ModelError::EmptyResponse {
                reason: block_reason,
            });
        };

        let text: String = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if text.is_empty() {
            return Err(ModelError::EmptyResponse {
                reason: candidate.finish_reason.or(block_reason),
            });
        }

        Ok(text)
    }
}

#[async_trait]
impl TextModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        let url = self.generate_url()?;

        let request = GenerateContentRequest {
            contents: [Content {
                role: "user",
                parts: [RequestPart { text: prompt }],
            }],
        };

        debug!(
            "Sending request to Gemini model {}, prompt length: {}",
            self.model_name,
            prompt.len()
        );

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", self.api_key.expose())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            warn!("Gemini request failed with {status}");
            return Err(ModelError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| ModelError::MalformedResponse(e.to_string()))?;

        let text = Self::extract_text(parsed)?;
        debug!("Generated response length: {}", text.len());
        Ok(text)
    }
}

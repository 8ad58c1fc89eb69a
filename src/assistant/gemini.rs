use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{AiError, LanguageModel};
use crate::config::AiSettings;

/// Where the API key comes from. Environment lookups happen on every call.
#[derive(Debug, Clone)]
enum Credential {
    Env(String),
    Fixed(String),
}

impl Credential {
    fn resolve(&self) -> Result<String, AiError> {
        let (key, var) = match self {
            Credential::Env(var) => (std::env::var(var).unwrap_or_default(), var.as_str()),
            Credential::Fixed(key) => (key.clone(), "<configured key>"),
        };
        if key.trim().is_empty() {
            return Err(AiError::MissingCredential(var.to_string()));
        }
        Ok(key)
    }
}

/// Google Generative Language (`generateContent`) REST client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    credential: Credential,
}

impl GeminiClient {
    pub fn new(settings: &AiSettings) -> Result<Self, AiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            credential: Credential::Env(settings.api_key_var.clone()),
        })
    }

    /// Use a fixed key instead of reading the environment.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.credential = Credential::Fixed(key.into());
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl LanguageModel for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        system_instruction: Option<&str>,
    ) -> Result<String, AiError> {
        let api_key = self.credential.resolve()?;

        let request = GenerateRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: Some(prompt.to_string()) }],
            }],
            system_instruction: system_instruction.map(|text| Content {
                role: None,
                parts: vec![Part { text: Some(text.to_string()) }],
            }),
        };

        log::debug!(
            "Sending generateContent request (model: {}, prompt: {} chars)",
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| AiError::Malformed(e.to_string()))?;

        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AiError::EmptyResponse);
        }
        Ok(text)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

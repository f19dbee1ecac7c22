use std::time::Duration;

use reqwest::{Client, header};
use serde::{Deserialize, Serialize};

use crate::config::QuoteKind;
use crate::foundation::settings::Settings;
use crate::quote::{QuoteError, QuoteProvider, prompt_for};

const USER_AGENT: &str = concat!("dostdots/", env!("CARGO_PKG_VERSION"));

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug, Default)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug, Default)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate, trimmed.
    pub(crate) fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

/// Quote provider backed by the Gemini `generateContent` REST call.
#[derive(Clone, Debug)]
pub struct GeminiProvider {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiProvider {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Result<Self, QuoteError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::USER_AGENT, header::HeaderValue::from_static(USER_AGENT));
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(3))
            .default_headers(headers)
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, QuoteError> {
        Self::new(
            settings.quote_endpoint.clone(),
            settings.quote_model.clone(),
            settings.api_key.clone(),
        )
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

impl QuoteProvider for GeminiProvider {
    async fn generate(&self, kind: QuoteKind, tag: &str) -> Result<String, QuoteError> {
        let Some(key) = self.api_key.as_deref() else {
            return Err(QuoteError::MissingApiKey);
        };
        let prompt = prompt_for(kind, tag).ok_or(QuoteError::NoKind)?;

        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: &prompt }],
            }],
        };
        tracing::debug!(model = %self.model, kind = kind.as_str(), tag, "requesting quote");

        let resp = self
            .client
            .post(self.url())
            .header("x-goog-api-key", key)
            .json(&body)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(QuoteError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let parsed: GenerateResponse = resp.json().await?;
        parsed.text().ok_or(QuoteError::EmptyResponse)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/quote/gemini.rs"]
mod tests;

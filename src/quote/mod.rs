//! Quote provider collaborator.
//!
//! The render path never sees a quote failure: [`resolve_quote`] folds every error into one of
//! two fixed fallback strings.

pub(crate) mod gemini;

use std::future::Future;

pub use gemini::GeminiProvider;

use crate::config::QuoteKind;

/// Shown when no API key is configured.
pub const MISSING_KEY_FALLBACK: &str = "API Key Missing: Set API_KEY env var.";
/// Shown on any other provider failure.
pub const ERROR_FALLBACK: &str = "Error fetching inspiration. Stay focused.";

#[derive(thiserror::Error, Debug)]
pub enum QuoteError {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("nothing to generate for quote kind 'none'")]
    NoKind,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response contained no text")]
    EmptyResponse,
}

impl QuoteError {
    /// Fixed text substituted for this failure.
    pub fn fallback_text(&self) -> &'static str {
        match self {
            QuoteError::MissingApiKey => MISSING_KEY_FALLBACK,
            _ => ERROR_FALLBACK,
        }
    }
}

/// Generates a short inspirational text for a kind and a topic tag.
pub trait QuoteProvider: Send + Sync {
    fn generate(
        &self,
        kind: QuoteKind,
        tag: &str,
    ) -> impl Future<Output = Result<String, QuoteError>> + Send;
}

/// Prompt sent for `kind` about `tag`; `None` for [`QuoteKind::None`].
pub fn prompt_for(kind: QuoteKind, tag: &str) -> Option<String> {
    match kind {
        QuoteKind::None => None,
        QuoteKind::Quote => Some(format!(
            "Provide a short, minimalist motivational quote related to \"{tag}\" for a \
             developer/hacker. Max 12 words. No attribution needed."
        )),
        QuoteKind::Quran => Some(format!(
            "Provide a short, inspiring Quran Ayat (in English translation only) related to \
             \"{tag}\". Max 15 words. Include reference (Surah:Verse) at the end."
        )),
    }
}

/// Ask `provider` once; any failure becomes the matching fallback text.
///
/// Returns an empty string for [`QuoteKind::None`] without calling the provider.
pub async fn resolve_quote<P: QuoteProvider>(provider: &P, kind: QuoteKind, tag: &str) -> String {
    if kind == QuoteKind::None {
        return String::new();
    }
    match provider.generate(kind, tag).await {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => {
            tracing::warn!(kind = kind.as_str(), tag, "quote provider returned empty text");
            ERROR_FALLBACK.to_string()
        }
        Err(e) => {
            tracing::warn!(kind = kind.as_str(), tag, error = %e, "quote provider failed");
            e.fallback_text().to_string()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/quote/resolve.rs"]
mod tests;

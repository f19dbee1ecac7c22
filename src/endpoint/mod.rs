//! Headless render endpoint: turns a render URL into PNG bytes.
//!
//! [`RenderService::handle`] is transport-free so it can be driven directly; [`server`] puts a
//! minimal HTTP/1.1 listener in front of it.

pub(crate) mod server;

use chrono::NaiveDateTime;

pub use server::{
    HEAD_READ_TIMEOUT, read_request_target, read_request_target_within, serve, write_response,
};

use crate::config::{Configuration, decode_query, has_render_flag, query_of};
use crate::foundation::error::{DotsError, DotsResult};
use crate::foundation::settings::ExportSize;
use crate::quote::{QuoteProvider, resolve_quote};
use crate::render::{CpuBackend, FontFace, Profile, Viewport, render_png};

pub const CACHE_CONTROL: &str = "no-store, no-cache, must-revalidate, max-age=0";
pub const CONTENT_DISPOSITION: &str = "inline; filename=\"wallpaper.png\"";

/// Transport-independent HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderResponse {
    pub status: u16,
    pub headers: Vec<(&'static str, String)>,
    pub body: Vec<u8>,
}

impl RenderResponse {
    /// `200 image/png` with caching disabled and inline disposition.
    pub fn png(bytes: Vec<u8>) -> Self {
        Self {
            status: 200,
            headers: vec![
                ("Content-Type", "image/png".to_string()),
                ("Cache-Control", CACHE_CONTROL.to_string()),
                ("Pragma", "no-cache".to_string()),
                ("Expires", "0".to_string()),
                ("Content-Disposition", CONTENT_DISPOSITION.to_string()),
            ],
            body: bytes,
        }
    }

    pub fn text(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            headers: vec![("Content-Type", "text/plain; charset=utf-8".to_string())],
            body: message.into().into_bytes(),
        }
    }

    /// First header with `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// `true` when a decoded render request should ask the quote provider before drawing.
pub fn needs_quote(config: &Configuration) -> bool {
    config.wants_quote_fetch() && !config.quote_tag.trim().is_empty()
}

/// Render `config` at export resolution with the standalone profile.
pub fn render_export(
    config: &Configuration,
    export: ExportSize,
    font: Option<FontFace>,
    now: NaiveDateTime,
) -> DotsResult<Vec<u8>> {
    let mut backend = CpuBackend::new(font);
    render_png(
        &mut backend,
        config,
        Profile::Standalone,
        Viewport::export(export),
        now,
    )
}

/// Serves render URLs with one quote provider and one font.
pub struct RenderService<P> {
    provider: P,
    export: ExportSize,
    font: Option<FontFace>,
}

impl<P> std::fmt::Debug for RenderService<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderService")
            .field("export", &self.export)
            .field("font", &self.font)
            .finish_non_exhaustive()
    }
}

impl<P: QuoteProvider> RenderService<P> {
    pub fn new(provider: P, export: ExportSize, font: Option<FontFace>) -> Self {
        Self {
            provider,
            export,
            font,
        }
    }

    /// Decode a request target and fill in a fresh quote when one is wanted.
    ///
    /// Returns `None` when the render flag is missing.
    pub async fn prepare(&self, target: &str) -> Option<Configuration> {
        let query = query_of(target);
        if !has_render_flag(query) {
            return None;
        }
        let mut config = decode_query(query);
        if needs_quote(&config) {
            let tag = config.quote_tag.trim().to_string();
            config.quote_text = resolve_quote(&self.provider, config.quote_type, &tag).await;
        }
        Some(config)
    }

    /// Answer one request for `target` (path plus query) as of `now`.
    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, target: &str, now: NaiveDateTime) -> RenderResponse {
        let Some(config) = self.prepare(target).await else {
            return RenderResponse::text(400, "missing render=true query flag");
        };

        let export = self.export;
        let font = self.font.clone();
        let task = tokio::task::spawn_blocking(move || render_export(&config, export, font, now));
        let rendered = task
            .await
            .map_err(|e| DotsError::render(format!("render task failed: {e}")))
            .and_then(|r| r);

        match rendered {
            Ok(png) => {
                tracing::info!(bytes = png.len(), "rendered wallpaper");
                RenderResponse::png(png)
            }
            Err(e) => {
                tracing::error!(error = %e, "render failed");
                RenderResponse::text(500, "failed to render wallpaper")
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/endpoint/service.rs"]
mod tests;

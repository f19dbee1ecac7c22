use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;

use super::*;
use crate::config::QuoteKind;
use crate::quote::{ERROR_FALLBACK, MISSING_KEY_FALLBACK, QuoteError};
use crate::render::PNG_SIGNATURE;

struct Counting {
    reply: fn() -> Result<String, QuoteError>,
    calls: AtomicUsize,
}

impl Counting {
    fn new(reply: fn() -> Result<String, QuoteError>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
        }
    }
}

impl QuoteProvider for Counting {
    async fn generate(&self, _kind: QuoteKind, _tag: &str) -> Result<String, QuoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.reply)()
    }
}

fn small() -> ExportSize {
    ExportSize {
        width: 120,
        height: 260,
        scale: 2.0,
    }
}

fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("valid")
}

#[test]
fn needs_quote_requires_kind_tag_and_empty_text() {
    let mut c = Configuration {
        quote_type: QuoteKind::Quote,
        quote_tag: "focus".to_string(),
        ..Configuration::default()
    };
    assert!(needs_quote(&c));

    c.quote_text = "given".to_string();
    assert!(!needs_quote(&c));

    c.quote_text.clear();
    c.quote_tag = "  ".to_string();
    assert!(!needs_quote(&c));

    c.quote_tag = "focus".to_string();
    c.quote_type = QuoteKind::None;
    assert!(!needs_quote(&c));
}

#[tokio::test]
async fn prepare_fills_quote_from_provider() {
    let svc = RenderService::new(Counting::new(|| Ok(" Keep going. ".to_string())), small(), None);
    let config = svc
        .prepare("/?render=true&quoteType=quote&quoteTag=grit")
        .await
        .expect("flag present");
    assert_eq!(config.quote_text, "Keep going.");
    assert_eq!(svc.provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn prepare_keeps_supplied_text() {
    let svc = RenderService::new(Counting::new(|| Ok("other".to_string())), small(), None);
    let config = svc
        .prepare("/?render=true&quoteType=quote&quoteTag=grit&customQuoteText=Mine")
        .await
        .expect("flag present");
    assert_eq!(config.quote_text, "Mine");
    assert_eq!(svc.provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_flag_is_bad_request() {
    let svc = RenderService::new(Counting::new(|| Ok("x".to_string())), small(), None);
    assert!(svc.prepare("/?mode=LIFE").await.is_none());

    let resp = svc.handle("/?mode=LIFE", noon()).await;
    assert_eq!(resp.status, 400);
    assert_eq!(resp.header("content-type"), Some("text/plain; charset=utf-8"));
    assert_eq!(svc.provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn provider_failure_still_renders_png() {
    let svc = RenderService::new(
        Counting::new(|| Err(QuoteError::MissingApiKey)),
        small(),
        None,
    );
    let config = svc
        .prepare("/?render=true&mode=YEAR&quoteType=quote&quoteTag=focus")
        .await
        .expect("flag present");
    assert_eq!(config.quote_text, MISSING_KEY_FALLBACK);

    let resp = svc
        .handle("/?render=true&mode=YEAR&quoteType=quote&quoteTag=focus", noon())
        .await;
    assert_eq!(resp.status, 200);
    assert!(resp.body.starts_with(&PNG_SIGNATURE));
    assert_eq!(resp.header("Content-Type"), Some("image/png"));
    assert_eq!(resp.header("Cache-Control"), Some(CACHE_CONTROL));
    assert_eq!(resp.header("Pragma"), Some("no-cache"));
    assert_eq!(resp.header("Expires"), Some("0"));
    assert_eq!(resp.header("Content-Disposition"), Some(CONTENT_DISPOSITION));
}

#[tokio::test]
async fn generic_failure_uses_error_fallback() {
    let svc = RenderService::new(
        Counting::new(|| Err(QuoteError::EmptyResponse)),
        small(),
        None,
    );
    let config = svc
        .prepare("/?render=true&quoteType=quran&quoteTag=patience")
        .await
        .expect("flag present");
    assert_eq!(config.quote_text, ERROR_FALLBACK);
}

#[test]
fn render_export_matches_export_size() {
    let png = render_export(&Configuration::default(), small(), None, noon()).expect("render");
    assert!(png.starts_with(&PNG_SIGNATURE));
    let img = image::load_from_memory(&png).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (120, 260));
}

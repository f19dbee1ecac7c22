use url::form_urlencoded;

use crate::config::model::{Configuration, DEFAULT_BIRTH_DATE, DotShape, Mode, QuoteKind};

/// Query key of the flag that switches a URL into headless render mode.
pub const RENDER_FLAG: &str = "render";

/// Stable, ordered key set of an encoded [`Configuration`].
pub const KEYS: [&str; 8] = [
    "birthDate",
    "mode",
    "themeId",
    "shape",
    "quoteType",
    "quoteTag",
    "customQuoteText",
    "phoneModel",
];

/// Encode a configuration into ordered key/value pairs.
pub fn encode_pairs(config: &Configuration) -> Vec<(&'static str, String)> {
    vec![
        (KEYS[0], config.birth_date.clone()),
        (KEYS[1], config.mode.as_str().to_string()),
        (KEYS[2], config.theme_id.to_string()),
        (KEYS[3], config.shape.as_str().to_string()),
        (KEYS[4], config.quote_type.as_str().to_string()),
        (KEYS[5], config.quote_tag.clone()),
        (KEYS[6], config.quote_text.clone()),
        (KEYS[7], config.phone_model.clone()),
    ]
}

/// Encode a configuration as an `application/x-www-form-urlencoded` query (no leading `?`).
pub fn encode_query(config: &Configuration) -> String {
    let mut ser = form_urlencoded::Serializer::new(String::new());
    for (k, v) in encode_pairs(config) {
        ser.append_pair(k, &v);
    }
    ser.finish()
}

/// Rebuild a configuration from key/value pairs.
///
/// Total: missing, empty, unknown or malformed values fall back to their defaults. When a key
/// repeats, the first occurrence wins.
pub fn decode_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Configuration
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut slots: [Option<String>; 8] = Default::default();
    for (k, v) in pairs {
        if let Some(i) = KEYS.iter().position(|key| *key == k.as_ref())
            && slots[i].is_none()
        {
            slots[i] = Some(v.as_ref().to_string());
        }
    }
    let [birth, mode, theme, shape, quote_type, tag, text, phone] =
        slots.map(|s| s.filter(|v| !v.is_empty()));

    Configuration {
        birth_date: birth.unwrap_or_else(|| DEFAULT_BIRTH_DATE.to_string()),
        mode: mode.as_deref().and_then(Mode::parse).unwrap_or_default(),
        theme_id: theme
            .as_deref()
            .and_then(|v| v.trim().parse::<i64>().ok())
            .unwrap_or(0),
        shape: shape.as_deref().and_then(DotShape::parse).unwrap_or_default(),
        quote_type: quote_type
            .as_deref()
            .and_then(QuoteKind::parse)
            .unwrap_or_default(),
        quote_tag: tag.unwrap_or_default(),
        quote_text: text.unwrap_or_default(),
        phone_model: phone.unwrap_or_default(),
    }
}

/// Decode a query string, with or without its leading `?`.
pub fn decode_query(query: &str) -> Configuration {
    let q = query.strip_prefix('?').unwrap_or(query);
    decode_pairs(form_urlencoded::parse(q.as_bytes()))
}

/// Split a URL (or bare path) into its query component; returns `""` when there is none.
pub fn query_of(url_or_query: &str) -> &str {
    let without_fragment = url_or_query.split('#').next().unwrap_or_default();
    match without_fragment.split_once('?') {
        Some((_, q)) => q,
        None if without_fragment.contains('=') => without_fragment,
        None => "",
    }
}

/// `true` when the query carries `render=true`.
pub fn has_render_flag(query: &str) -> bool {
    let q = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(q.as_bytes())
        .find(|(k, _)| k == RENDER_FLAG)
        .is_some_and(|(_, v)| v == "true")
}

/// Build the shareable headless render URL for `config`.
///
/// With `daily` set the quote text is dropped so that every render fetches a fresh quote.
pub fn render_link(base: &str, config: &Configuration, daily: bool) -> String {
    let encoded = if daily {
        encode_query(&Configuration {
            quote_text: String::new(),
            ..config.clone()
        })
    } else {
        encode_query(config)
    };
    let sep = if base.contains('?') { '&' } else { '?' };
    format!("{base}{sep}{RENDER_FLAG}=true&{encoded}")
}

#[cfg(test)]
#[path = "../../tests/unit/config/codec.rs"]
mod tests;

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default model used for quote generation.
pub const DEFAULT_QUOTE_MODEL: &str = "gemini-3-flash-preview";
/// Default base URL of the generative-text API.
pub const DEFAULT_QUOTE_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Default persistence collaborator endpoint.
pub const DEFAULT_SAVE_CONFIG_URL: &str = "http://localhost:3001/api/user/save-config";

/// Export bitmap size in device pixels plus the device scale factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExportSize {
    /// Width in device pixels.
    pub width: u32,
    /// Height in device pixels.
    pub height: u32,
    /// Device pixels per layout pixel.
    pub scale: f64,
}

impl Default for ExportSize {
    fn default() -> Self {
        Self {
            width: 1179,
            height: 2556,
            scale: 2.0,
        }
    }
}

/// Process-level settings, read from the environment.
#[derive(Clone, Debug)]
pub struct Settings {
    pub api_key: Option<String>,
    pub quote_model: String,
    pub quote_endpoint: String,
    pub save_config_url: String,
    pub font_path: Option<PathBuf>,
    pub export: ExportSize,
    pub bind: SocketAddr,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            quote_model: DEFAULT_QUOTE_MODEL.to_string(),
            quote_endpoint: DEFAULT_QUOTE_ENDPOINT.to_string(),
            save_config_url: DEFAULT_SAVE_CONFIG_URL.to_string(),
            font_path: None,
            export: ExportSize::default(),
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
        }
    }
}

impl Settings {
    /// Read settings from `DOSTDOTS_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup; unset or unparsable values keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = get("DOSTDOTS_API_KEY").or_else(|| get("API_KEY"));

        let export = ExportSize {
            width: parse_or(
                get("DOSTDOTS_EXPORT_WIDTH"),
                "DOSTDOTS_EXPORT_WIDTH",
                defaults.export.width,
            )
            .max(1),
            height: parse_or(
                get("DOSTDOTS_EXPORT_HEIGHT"),
                "DOSTDOTS_EXPORT_HEIGHT",
                defaults.export.height,
            )
            .max(1),
            scale: Some(parse_or(
                get("DOSTDOTS_EXPORT_SCALE"),
                "DOSTDOTS_EXPORT_SCALE",
                defaults.export.scale,
            ))
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(defaults.export.scale),
        };

        Self {
            api_key,
            quote_model: get("DOSTDOTS_QUOTE_MODEL").unwrap_or(defaults.quote_model),
            quote_endpoint: get("DOSTDOTS_QUOTE_ENDPOINT").unwrap_or(defaults.quote_endpoint),
            save_config_url: get("DOSTDOTS_SAVE_CONFIG_URL").unwrap_or(defaults.save_config_url),
            font_path: get("DOSTDOTS_FONT").map(PathBuf::from),
            export,
            bind: parse_or(get("DOSTDOTS_BIND"), "DOSTDOTS_BIND", defaults.bind),
        }
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, key: &str, default: T) -> T {
    match raw {
        None => default,
        Some(v) => v.parse::<T>().unwrap_or_else(|_| {
            tracing::warn!(key, value = %v, "ignoring unparsable setting");
            default
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/settings.rs"]
mod tests;

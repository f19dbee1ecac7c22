//! The fixed, ordered theme catalog.
//!
//! Indices are a public contract: generated render links reference themes by position, so
//! entries may only ever be appended.

use crate::foundation::core::Rgba8;

/// Immutable four-color palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Display name, used by the persistence collaborator.
    pub name: &'static str,
    /// Page background.
    pub bg: Rgba8,
    /// Unfilled (future) marks.
    pub dots: Rgba8,
    /// Filled (past) marks, header and footer text, progress bar.
    pub accent: Rgba8,
    /// The current mark and the quote text.
    pub current: Rgba8,
}

const fn theme(name: &'static str, bg: &str, dots: &str, accent: &str, current: &str) -> Theme {
    Theme {
        name,
        bg: Rgba8::from_hex(bg),
        dots: Rgba8::from_hex(dots),
        accent: Rgba8::from_hex(accent),
        current: Rgba8::from_hex(current),
    }
}

pub static THEMES: [Theme; 18] = [
    theme("Paper White", "#ffffff", "#e5e7eb", "#525252", "#000000"),
    theme("Soft Mist", "#f3f4f6", "#d1d5db", "#6b7280", "#111827"),
    theme("Swiss Design", "#ffffff", "#f3f4f6", "#ef4444", "#b91c1c"),
    theme("OLED Midnight", "#000000", "#333333", "#a3a3a3", "#FFFFFF"),
    theme("Deep Space", "#0f172a", "#1e293b", "#38bdf8", "#0ea5e9"),
    theme("Hacker Green", "#0D1117", "#161B22", "#00FF41", "#ffffff"),
    theme("Coffee", "#4F200D", "#783214", "#FF9A00", "#fbbf24"),
    theme("Slate", "#1c1c1e", "#2c2c2e", "#8e8e93", "#e5e5ea"),
    theme("Obsidian Pro", "#0a0a0a", "#262626", "#737373", "#ffffff"),
    theme("Midnight Blue", "#020617", "#1e293b", "#3b82f6", "#60a5fa"),
    theme("Charcoal Minimal", "#18181b", "#27272a", "#71717a", "#fafafa"),
    theme("Concrete", "#d6d3d1", "#a8a29e", "#57534e", "#0c0a09"),
    theme("Clean Ceramic", "#fafaf9", "#e7e5e4", "#78716c", "#ea580c"),
    // Darker shade of the background for unfilled marks.
    theme("Teal Horizon", "#215E61", "#153F41", "#3BC1A8", "#ffffff"),
    theme("Baked Earth", "#D96F32", "#8a431d", "#F3E9DC", "#ffffff"),
    theme("Rouge", "#5A0E24", "#2e0511", "#BF124D", "#ffffff"),
    theme("Ultraviolet", "#540863", "#2b0333", "#E49BA6", "#ffffff"),
    theme("Matcha", "#31694E", "#193628", "#F0E491", "#ffffff"),
];

/// Resolve a theme index, falling back to theme 0 when out of range.
pub fn resolve(theme_id: i64) -> &'static Theme {
    usize::try_from(theme_id)
        .ok()
        .and_then(|i| THEMES.get(i))
        .unwrap_or(&THEMES[0])
}

#[cfg(test)]
#[path = "../../tests/unit/theme/catalog.rs"]
mod tests;

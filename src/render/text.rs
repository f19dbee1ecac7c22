use std::borrow::Cow;

use crate::foundation::error::{DotsError, DotsResult};

/// Advance of one monospace cell as a fraction of the font size.
pub const MONO_ADVANCE: f64 = 0.6;

/// Estimated width of `text` set in a monospace face at `size`.
pub fn estimate_width(text: &str, size: f64) -> f64 {
    text.chars().count() as f64 * size * MONO_ADVANCE
}

/// Greedy word wrap against a monospace advance estimate.
///
/// Breaking happens before any font is loaded so that the page layout is identical with or
/// without a font. Words longer than a line are split.
pub fn wrap_lines(text: &str, size: f64, max_width: f64) -> Vec<String> {
    let cell = size * MONO_ADVANCE;
    let max_chars = if cell > 0.0 && max_width.is_finite() {
        ((max_width / cell).floor() as usize).max(1)
    } else {
        usize::MAX
    };

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;
    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        while chars.len() > max_chars {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            let rest = chars.split_off(max_chars);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }
        if chars.is_empty() {
            continue;
        }
        let needed = if line_len == 0 {
            chars.len()
        } else {
            line_len + 1 + chars.len()
        };
        if needed > max_chars {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.extend(chars.iter());
        line_len += chars.len();
    }
    if line_len > 0 {
        lines.push(line);
    }
    lines
}

/// Brush carried through Parley layouts. Color is applied per line by the backend, so the brush
/// only has to satisfy Parley's bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrush;

/// Shapes single lines of text with one registered font family.
pub struct TextShaper {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    family: String,
}

impl std::fmt::Debug for TextShaper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextShaper")
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

impl TextShaper {
    /// Register `font_bytes` and remember its first family.
    pub fn new(font_bytes: &[u8]) -> DotsResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| DotsError::render("no font families registered from font bytes"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| DotsError::render("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family,
        })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    /// Lay out one unbroken line.
    pub fn line(
        &mut self,
        text: &str,
        size_px: f32,
        bold: bool,
    ) -> DotsResult<parley::Layout<TextBrush>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(DotsError::validation("text size must be finite and > 0"));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        if bold {
            builder.push_default(parley::style::StyleProperty::FontWeight(
                parley::style::FontWeight::BOLD,
            ));
        }

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;

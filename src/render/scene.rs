use crate::foundation::core::{Point, Rect, Rgba8};
use crate::marks::MarkDescriptor;

/// What a piece of text is, so backends and tests can find it without relying on order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextRole {
    Clock,
    Date,
    Quote,
    Passed,
    Left,
    Brand,
}

/// Horizontal anchoring of a text line relative to [`TextOp::x`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    Center,
    End,
}

/// One line of text. Lines are pre-broken; backends never wrap.
#[derive(Clone, Debug, PartialEq)]
pub struct TextOp {
    pub role: TextRole,
    pub text: String,
    /// Anchor x, interpreted through `align`.
    pub x: f64,
    /// Top of the line box.
    pub top: f64,
    pub size: f64,
    pub line_height: f64,
    pub align: TextAlign,
    pub color: Rgba8,
    pub bold: bool,
}

/// A single display-list entry, drawn in list order.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Rectangle fill with optional corner radius.
    Fill {
        rect: Rect,
        radius: f64,
        color: Rgba8,
    },
    /// One styled mark centered at `center`.
    Mark {
        center: Point,
        mark: MarkDescriptor,
    },
    Text(TextOp),
}

/// Backend-independent display list for one wallpaper, in layout pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub ops: Vec<DrawOp>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextOp> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(t) => Some(t),
            _ => None,
        })
    }

    /// Lines with the given role, top to bottom.
    pub fn texts_with(&self, role: TextRole) -> impl Iterator<Item = &TextOp> {
        self.texts().filter(move |t| t.role == role)
    }

    pub fn marks(&self) -> impl Iterator<Item = (Point, &MarkDescriptor)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Mark { center, mark } => Some((*center, mark)),
            _ => None,
        })
    }

    /// The quote block joined back into one string, without its surrounding quotes.
    pub fn quote_text(&self) -> Option<String> {
        let lines: Vec<&str> = self
            .texts_with(TextRole::Quote)
            .map(|t| t.text.as_str())
            .collect();
        if lines.is_empty() {
            return None;
        }
        let joined = lines.join(" ");
        Some(
            joined
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .unwrap_or(&joined)
                .to_string(),
        )
    }
}

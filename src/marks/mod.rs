//! Per-mark styling and the vector glyphs used by icon shapes.

pub(crate) mod glyphs;
pub(crate) mod style;

pub use glyphs::{GLYPH_BOX, glyph_path};
pub use style::{
    CURRENT_EMPHASIS, MarkCategory, MarkDescriptor, MarkPaint, categorize, style_mark,
};

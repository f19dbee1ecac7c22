use crate::config::{DotShape, ShapeFamily};
use crate::foundation::core::Rgba8;
use crate::render::profile::Profile;
use crate::stats::TimeStats;
use crate::theme::Theme;

/// Scale applied to the current geometric mark.
pub const CURRENT_EMPHASIS: f64 = 1.1;

/// Where a mark sits relative to "now".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkCategory {
    Past,
    Current,
    Future,
}

/// How the backend paints a mark.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarkPaint {
    /// Filled block; `corner_radius` is in layout pixels at the mark's final size.
    Solid { corner_radius: f64 },
    /// Stroked icon outline, optionally filled. Stroke width is in glyph units.
    Icon { filled: bool, stroke_width: f64 },
    /// Stroke-only glyph. Width is in glyph units.
    Stroke { width: f64 },
}

/// Fully resolved visual description of one mark.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkDescriptor {
    pub index: usize,
    pub category: MarkCategory,
    pub color: Rgba8,
    /// Edge length in layout pixels, emphasis included.
    pub size: f64,
    pub shape: DotShape,
    pub paint: MarkPaint,
    /// Blur radius of a soft halo in the mark's color, if any.
    pub glow: Option<f64>,
}

pub fn categorize(index: usize, passed: i64) -> MarkCategory {
    let i = i64::try_from(index).unwrap_or(i64::MAX);
    match i.cmp(&passed) {
        std::cmp::Ordering::Less => MarkCategory::Past,
        std::cmp::Ordering::Equal => MarkCategory::Current,
        std::cmp::Ordering::Greater => MarkCategory::Future,
    }
}

/// Style the mark at `index`. Pure: no randomness, no clock.
pub fn style_mark(
    index: usize,
    stats: &TimeStats,
    shape: DotShape,
    theme: &Theme,
    profile: Profile,
    base_size: f64,
) -> MarkDescriptor {
    let category = categorize(index, stats.passed);
    let color = match category {
        MarkCategory::Past => theme.accent,
        MarkCategory::Current => theme.current,
        MarkCategory::Future => theme.dots,
    };
    let current = category == MarkCategory::Current;

    let (size, paint, glow) = match shape.family() {
        ShapeFamily::Geometric => {
            let size = if current {
                base_size * CURRENT_EMPHASIS
            } else {
                base_size
            };
            let corner_radius = match shape {
                DotShape::Circle => size / 2.0,
                DotShape::Rounded => profile.metrics().rounded_corner,
                _ => 0.0,
            };
            let glow = if current { profile.metrics().current_glow } else { None };
            (size, MarkPaint::Solid { corner_radius }, glow)
        }
        ShapeFamily::Iconographic => (
            base_size,
            MarkPaint::Icon {
                filled: category != MarkCategory::Future,
                stroke_width: 2.0,
            },
            None,
        ),
        ShapeFamily::Glyph => (
            base_size,
            MarkPaint::Stroke {
                width: if current { 4.0 } else { 3.0 },
            },
            None,
        ),
    };

    MarkDescriptor {
        index,
        category,
        color,
        size,
        shape,
        paint,
        glow,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/marks/style.rs"]
mod tests;

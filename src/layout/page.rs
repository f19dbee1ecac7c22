use taffy::prelude::{AvailableSpace, NodeId, Rect as Edges, Size as TaffySize};
use taffy::style::{
    Dimension, Display, FlexDirection, LengthPercentage, LengthPercentageAuto, Style,
};

use crate::foundation::core::{Rect, Size};
use crate::foundation::error::{DotsError, DotsResult};
use crate::render::profile::Metrics;

/// Page regions in page coordinates, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageRegions {
    pub header: Rect,
    pub quote: Option<Rect>,
    /// Everything left between header (or quote) and footer.
    pub content: Rect,
    pub footer: Rect,
}

/// Clock line, gap, date line.
pub fn header_height(m: &Metrics) -> f64 {
    m.clock.line_height + m.date_gap + m.date.line_height
}

/// Stats row, progress bar and brand label, with their gaps.
pub fn footer_height(m: &Metrics) -> f64 {
    m.stats.line_height
        + m.stats_gap_below
        + m.bar_gap_above
        + m.bar_height
        + m.brand_gap_above
        + m.brand.line_height
}

fn px(v: f64) -> LengthPercentage {
    LengthPercentage::length(v.max(0.0) as f32)
}

fn margin(top: f64, right: f64, bottom: f64, left: f64) -> Edges<LengthPercentageAuto> {
    Edges {
        left: LengthPercentageAuto::length(left as f32),
        right: LengthPercentageAuto::length(right as f32),
        top: LengthPercentageAuto::length(top as f32),
        bottom: LengthPercentageAuto::length(bottom as f32),
    }
}

fn fixed_height(h: f64, margin: Edges<LengthPercentageAuto>) -> Style {
    Style {
        size: TaffySize {
            width: Dimension::auto(),
            height: Dimension::length(h.max(0.0) as f32),
        },
        flex_shrink: 0.0,
        margin,
        ..Style::default()
    }
}

/// Solve the padded page column for `canvas`.
///
/// `quote_lines` is the wrapped line count of the quote block, or `None` when no quote is
/// shown.
pub fn solve_page(
    canvas: Size,
    m: &Metrics,
    quote_lines: Option<usize>,
) -> DotsResult<PageRegions> {
    let mut tree: taffy::TaffyTree<()> = taffy::TaffyTree::new();
    let taffy_err = |e: taffy::TaffyError| DotsError::render(format!("page layout: {e}"));

    let header = tree
        .new_leaf(fixed_height(
            header_height(m),
            margin(m.header_margin_top, 0.0, m.header_margin_bottom, 0.0),
        ))
        .map_err(taffy_err)?;

    let quote = match quote_lines {
        Some(lines) => Some(
            tree.new_leaf(fixed_height(
                lines as f64 * m.quote.line_height,
                margin(m.quote_margin_y, m.quote_inset_x, m.quote_margin_y, m.quote_inset_x),
            ))
            .map_err(taffy_err)?,
        ),
        None => None,
    };

    let content = tree
        .new_leaf(Style {
            flex_grow: 1.0,
            flex_shrink: 1.0,
            flex_basis: Dimension::length(0.0),
            min_size: TaffySize {
                width: Dimension::auto(),
                height: Dimension::length(0.0),
            },
            ..Style::default()
        })
        .map_err(taffy_err)?;

    let footer = tree
        .new_leaf(fixed_height(
            footer_height(m),
            margin(0.0, 0.0, m.footer_margin_bottom, 0.0),
        ))
        .map_err(taffy_err)?;

    let children: Vec<NodeId> = [Some(header), quote, Some(content), Some(footer)]
        .into_iter()
        .flatten()
        .collect();

    let root = tree
        .new_with_children(
            Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                size: TaffySize {
                    width: Dimension::length(canvas.width as f32),
                    height: Dimension::length(canvas.height as f32),
                },
                padding: Edges {
                    left: px(m.padding),
                    right: px(m.padding),
                    top: px(m.padding),
                    bottom: px(m.padding),
                },
                ..Style::default()
            },
            &children,
        )
        .map_err(taffy_err)?;

    tree.compute_layout(
        root,
        TaffySize {
            width: AvailableSpace::Definite(canvas.width as f32),
            height: AvailableSpace::Definite(canvas.height as f32),
        },
    )
    .map_err(taffy_err)?;

    let rect_of = |node: NodeId| -> DotsResult<Rect> {
        let l = tree.layout(node).map_err(taffy_err)?;
        Ok(Rect::new(
            f64::from(l.location.x),
            f64::from(l.location.y),
            f64::from(l.location.x + l.size.width),
            f64::from(l.location.y + l.size.height),
        ))
    };

    Ok(PageRegions {
        header: rect_of(header)?,
        quote: quote.map(&rect_of).transpose()?,
        content: rect_of(content)?,
        footer: rect_of(footer)?,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/page.rs"]
mod tests;

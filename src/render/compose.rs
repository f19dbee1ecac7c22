use chrono::NaiveDateTime;

use crate::config::Configuration;
use crate::foundation::core::{Rect, Rgba8, Size};
use crate::foundation::error::DotsResult;
use crate::layout::{PageRegions, layout_marks, solve_page};
use crate::marks::style_mark;
use crate::render::profile::{Metrics, Profile};
use crate::render::scene::{DrawOp, Scene, TextAlign, TextOp, TextRole};
use crate::render::text::wrap_lines;
use crate::stats::{TimeStats, compute_stats};
use crate::theme::Theme;

/// Label drawn under the progress bar.
pub const BRAND_LABEL: &str = "dostdots";
/// Progress bar track.
pub const TRACK_COLOR: Rgba8 = Rgba8::rgb(0x1f, 0x29, 0x37);

const HEADER_OPACITY: f64 = 0.8;
const DATE_OPACITY: f64 = 0.6;
const QUOTE_OPACITY: f64 = 0.9;
const STATS_OPACITY: f64 = 0.9;
const BRAND_OPACITY: f64 = 0.4;

/// `HH:MM`, 24-hour.
pub fn clock_text(now: NaiveDateTime) -> String {
    now.format("%H:%M").to_string()
}

/// `WEEKDAY, MON D`, upper-cased.
pub fn date_text(now: NaiveDateTime) -> String {
    now.format("%A, %b %-d").to_string().to_uppercase()
}

/// Build the display list for one wallpaper.
///
/// Draw order is fixed: background, header, optional quote, marks, footer. Both profiles run
/// exactly this code; only `profile.metrics()` differs.
#[tracing::instrument(
    skip(config, theme, profile),
    fields(mode = config.mode.as_str(), profile = profile.name())
)]
pub fn compose_wallpaper(
    config: &Configuration,
    theme: &Theme,
    profile: Profile,
    canvas: Size,
    now: NaiveDateTime,
) -> DotsResult<Scene> {
    let m = profile.metrics();
    let stats = compute_stats(config, now);

    let quote_width = canvas.width - 2.0 * (m.padding + m.quote_inset_x);
    let quote_lines = if config.quote_text.trim().is_empty() {
        Vec::new()
    } else {
        wrap_lines(&format!("\"{}\"", config.quote_text.trim()), m.quote.size, quote_width)
    };
    let regions = solve_page(
        canvas,
        m,
        (!quote_lines.is_empty()).then_some(quote_lines.len()),
    )?;

    let mut scene = Scene::new(canvas.width, canvas.height);
    scene.push(DrawOp::Fill {
        rect: Rect::from_origin_size((0.0, 0.0), canvas),
        radius: 0.0,
        color: theme.bg,
    });

    push_header(&mut scene, &regions, m, theme, now);
    if let Some(region) = regions.quote {
        push_quote(&mut scene, region, &quote_lines, m, theme);
    }
    push_marks(&mut scene, &regions, config, &stats, theme, profile);
    push_footer(&mut scene, regions.footer, m, theme, &stats);

    tracing::debug!(ops = scene.ops.len(), passed = stats.passed, "composed wallpaper");
    Ok(scene)
}

fn push_header(
    scene: &mut Scene,
    regions: &PageRegions,
    m: &Metrics,
    theme: &Theme,
    now: NaiveDateTime,
) {
    let header = regions.header;
    let x = header.center().x;
    scene.push(DrawOp::Text(TextOp {
        role: TextRole::Clock,
        text: clock_text(now),
        x,
        top: header.y0,
        size: m.clock.size,
        line_height: m.clock.line_height,
        align: TextAlign::Center,
        color: theme.accent.with_opacity(HEADER_OPACITY),
        bold: false,
    }));
    scene.push(DrawOp::Text(TextOp {
        role: TextRole::Date,
        text: date_text(now),
        x,
        top: header.y0 + m.clock.line_height + m.date_gap,
        size: m.date.size,
        line_height: m.date.line_height,
        align: TextAlign::Center,
        color: theme.accent.with_opacity(HEADER_OPACITY * DATE_OPACITY),
        bold: false,
    }));
}

fn push_quote(scene: &mut Scene, region: Rect, lines: &[String], m: &Metrics, theme: &Theme) {
    let x = region.center().x;
    for (i, line) in lines.iter().enumerate() {
        scene.push(DrawOp::Text(TextOp {
            role: TextRole::Quote,
            text: line.clone(),
            x,
            top: region.y0 + i as f64 * m.quote.line_height,
            size: m.quote.size,
            line_height: m.quote.line_height,
            align: TextAlign::Center,
            color: theme.current.with_opacity(QUOTE_OPACITY),
            bold: true,
        }));
    }
}

fn push_marks(
    scene: &mut Scene,
    regions: &PageRegions,
    config: &Configuration,
    stats: &TimeStats,
    theme: &Theme,
    profile: Profile,
) {
    let layout = layout_marks(config.mode, stats.total, profile.metrics(), regions.content);
    for slot in &layout.slots {
        let mark = style_mark(slot.index, stats, config.shape, theme, profile, layout.mark_size);
        scene.push(DrawOp::Mark {
            center: slot.center,
            mark,
        });
    }
}

fn push_footer(scene: &mut Scene, footer: Rect, m: &Metrics, theme: &Theme, stats: &TimeStats) {
    let stats_color = theme.accent.with_opacity(STATS_OPACITY);
    scene.push(DrawOp::Text(TextOp {
        role: TextRole::Passed,
        text: format!("PASSED: {}", stats.passed),
        x: footer.x0 + m.stats_inset_x,
        top: footer.y0,
        size: m.stats.size,
        line_height: m.stats.line_height,
        align: TextAlign::Start,
        color: stats_color,
        bold: false,
    }));
    scene.push(DrawOp::Text(TextOp {
        role: TextRole::Left,
        text: format!("LEFT: {}", stats.remaining),
        x: footer.x1 - m.stats_inset_x,
        top: footer.y0,
        size: m.stats.size,
        line_height: m.stats.line_height,
        align: TextAlign::End,
        color: stats_color,
        bold: false,
    }));

    let bar_top = footer.y0 + m.stats.line_height + m.stats_gap_below + m.bar_gap_above;
    let track = Rect::new(footer.x0, bar_top, footer.x1, bar_top + m.bar_height);
    let radius = m.bar_height / 2.0;
    scene.push(DrawOp::Fill {
        rect: track,
        radius,
        color: TRACK_COLOR,
    });
    // Unclamped; ratios above 1 overflow the track.
    let filled = track.width() * stats.progress();
    if filled > 0.0 {
        scene.push(DrawOp::Fill {
            rect: Rect::new(track.x0, track.y0, track.x0 + filled, track.y1),
            radius,
            color: theme.accent,
        });
    }

    scene.push(DrawOp::Text(TextOp {
        role: TextRole::Brand,
        text: BRAND_LABEL.to_string(),
        x: footer.center().x,
        top: track.y1 + m.brand_gap_above,
        size: m.brand.size,
        line_height: m.brand.line_height,
        align: TextAlign::Center,
        color: theme.accent.with_opacity(BRAND_OPACITY),
        bold: false,
    }));
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;

use kurbo::{Affine, BezPath, PathEl, Point, Rect, RoundedRect, Shape, Vec2};

use crate::foundation::core::Rgba8;
use crate::foundation::error::{DotsError, DotsResult};
use crate::marks::{GLYPH_BOX, MarkDescriptor, MarkPaint, glyph_path};
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::render::fonts::FontFace;
use crate::render::profile::Viewport;
use crate::render::scene::{DrawOp, Scene, TextAlign, TextOp};
use crate::render::text::TextShaper;

const PATH_TOLERANCE: f64 = 0.1;
/// Concentric rings used to approximate a blurred halo.
const GLOW_RINGS: u32 = 5;
const GLOW_PEAK_ALPHA: f64 = 0.35;

struct TextFace {
    shaper: TextShaper,
    font: vello_cpu::peniko::FontData,
}

/// Software rasterizer built on `vello_cpu`. Text is drawn only when a font was supplied.
pub struct CpuBackend {
    text: Option<TextFace>,
}

impl std::fmt::Debug for CpuBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuBackend")
            .field("text", &self.text.as_ref().map(|t| t.shaper.family()))
            .finish()
    }
}

impl CpuBackend {
    pub fn new(font: Option<FontFace>) -> Self {
        let text = font.and_then(|face| match TextShaper::new(&face.bytes) {
            Ok(shaper) => {
                tracing::debug!(family = shaper.family(), "text enabled");
                Some(TextFace {
                    shaper,
                    font: vello_cpu::peniko::FontData::new(
                        vello_cpu::peniko::Blob::from(face.bytes.as_ref().clone()),
                        face.index,
                    ),
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, "font unusable; text will be skipped");
                None
            }
        });
        Self { text }
    }

    /// Backend that draws shapes only.
    pub fn without_text() -> Self {
        Self { text: None }
    }

    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(skip(self, scene), fields(ops = scene.ops.len()))]
    fn render_scene(&mut self, scene: &Scene, viewport: Viewport) -> DotsResult<FrameRGBA> {
        let (width, height) = viewport.pixel_size();
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| DotsError::render("frame width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| DotsError::render("frame height exceeds u16"))?;

        let base = Affine::scale(viewport.scale);
        let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
        for op in &scene.ops {
            draw_op(self, &mut ctx, op, base)?;
        }
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width,
            height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn draw_op(
    backend: &mut CpuBackend,
    ctx: &mut vello_cpu::RenderContext,
    op: &DrawOp,
    base: Affine,
) -> DotsResult<()> {
    match op {
        DrawOp::Fill {
            rect,
            radius,
            color,
        } => {
            ctx.set_transform(affine_to_cpu(base));
            set_color(ctx, *color);
            fill_rounded(ctx, *rect, *radius);
            Ok(())
        }
        DrawOp::Mark { center, mark } => {
            draw_mark(ctx, *center, mark, base);
            Ok(())
        }
        DrawOp::Text(t) => draw_text(backend, ctx, t, base),
    }
}

fn draw_mark(
    ctx: &mut vello_cpu::RenderContext,
    center: Point,
    mark: &MarkDescriptor,
    base: Affine,
) {
    let half = mark.size / 2.0;
    let cell = Rect::new(center.x - half, center.y - half, center.x + half, center.y + half);

    match mark.paint {
        MarkPaint::Solid { corner_radius } => {
            ctx.set_transform(affine_to_cpu(base));
            if let Some(blur) = mark.glow {
                draw_glow(ctx, cell, corner_radius, mark.color, blur);
            }
            set_color(ctx, mark.color);
            fill_rounded(ctx, cell, corner_radius);
        }
        MarkPaint::Icon {
            filled,
            stroke_width,
        } => {
            let Some(path) = glyph_path(mark.shape) else {
                return;
            };
            ctx.set_transform(affine_to_cpu(base * glyph_transform(cell)));
            set_color(ctx, mark.color);
            let cpu_path = bezpath_to_cpu(&path);
            if filled {
                ctx.fill_path(&cpu_path);
            }
            ctx.set_stroke(round_stroke(stroke_width));
            ctx.stroke_path(&cpu_path);
        }
        MarkPaint::Stroke { width } => {
            let Some(path) = glyph_path(mark.shape) else {
                return;
            };
            ctx.set_transform(affine_to_cpu(base * glyph_transform(cell)));
            set_color(ctx, mark.color);
            ctx.set_stroke(round_stroke(width));
            ctx.stroke_path(&bezpath_to_cpu(&path));
        }
    }
}

/// Map the glyph box onto `cell`.
fn glyph_transform(cell: Rect) -> Affine {
    Affine::translate(Vec2::new(cell.x0, cell.y0)) * Affine::scale(cell.width() / GLYPH_BOX)
}

/// Faint rings growing outward from the mark, fading with distance.
fn draw_glow(ctx: &mut vello_cpu::RenderContext, cell: Rect, radius: f64, color: Rgba8, blur: f64) {
    for k in (1..=GLOW_RINGS).rev() {
        let t = f64::from(k) / f64::from(GLOW_RINGS);
        let grow = blur * t;
        let alpha = GLOW_PEAK_ALPHA * (1.0 - t) + 0.05;
        set_color(ctx, color.with_opacity(alpha));
        fill_rounded(ctx, cell.inflate(grow, grow), radius + grow);
    }
}

fn draw_text(
    backend: &mut CpuBackend,
    ctx: &mut vello_cpu::RenderContext,
    t: &TextOp,
    base: Affine,
) -> DotsResult<()> {
    let Some(face) = backend.text.as_mut() else {
        return Ok(());
    };
    if t.text.is_empty() {
        return Ok(());
    }

    let layout = face.shaper.line(&t.text, t.size as f32, t.bold)?;
    let width = f64::from(layout.width());
    let x = match t.align {
        TextAlign::Start => t.x,
        TextAlign::Center => t.x - width / 2.0,
        TextAlign::End => t.x - width,
    };
    let y = t.top + (t.line_height - f64::from(layout.height())) / 2.0;

    ctx.set_transform(affine_to_cpu(base * Affine::translate(Vec2::new(x, y))));
    set_color(ctx, t.color);
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(&face.font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
    Ok(())
}

fn set_color(ctx: &mut vello_cpu::RenderContext, c: Rgba8) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
}

fn fill_rounded(ctx: &mut vello_cpu::RenderContext, rect: Rect, radius: f64) {
    if radius > 0.0 {
        let path = RoundedRect::from_rect(rect, radius).to_path(PATH_TOLERANCE);
        ctx.fill_path(&bezpath_to_cpu(&path));
    } else {
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(rect.x0, rect.y0, rect.x1, rect.y1));
    }
}

fn round_stroke(width: f64) -> vello_cpu::kurbo::Stroke {
    vello_cpu::kurbo::Stroke::new(width)
        .with_caps(vello_cpu::kurbo::Cap::Round)
        .with_join(vello_cpu::kurbo::Join::Round)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;

//! Render surface: composes a display list from a configuration and rasterizes it.
//!
//! [`compose_wallpaper`] is pure and shared by both presentation profiles. The resulting
//! [`Scene`] is the interactive surface; [`CpuBackend`] turns it into an export bitmap and
//! [`encode_png`] into file bytes.

pub(crate) mod backend;
pub(crate) mod compose;
pub(crate) mod cpu;
pub(crate) mod fonts;
pub(crate) mod png;
pub mod profile;
pub(crate) mod scene;
pub(crate) mod text;

pub use backend::{FrameRGBA, RenderBackend};
pub use compose::{BRAND_LABEL, TRACK_COLOR, clock_text, compose_wallpaper, date_text};
pub use cpu::CpuBackend;
pub use fonts::{FontFace, discover_system_font, load_font_file, resolve_font};
pub use png::{PNG_SIGNATURE, encode_png, unpremultiply_in_place};
pub use profile::{GridMetrics, Metrics, PREVIEW_CANVAS, Profile, TextMetrics, Viewport};
pub use scene::{DrawOp, Scene, TextAlign, TextOp, TextRole};
pub use text::{MONO_ADVANCE, TextShaper, estimate_width, wrap_lines};

use chrono::NaiveDateTime;

use crate::config::Configuration;
use crate::foundation::error::DotsResult;
use crate::theme;

/// Compose, rasterize and PNG-encode one wallpaper at `viewport`.
pub fn render_png(
    backend: &mut dyn RenderBackend,
    config: &Configuration,
    profile: Profile,
    viewport: Viewport,
    now: NaiveDateTime,
) -> DotsResult<Vec<u8>> {
    let theme = theme::resolve(config.theme_id);
    let scene = compose_wallpaper(config, theme, profile, viewport.size, now)?;
    let frame = backend.render_scene(&scene, viewport)?;
    encode_png(&frame)
}

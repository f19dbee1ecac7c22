//! Dostdots renders time-visualization wallpapers: a life in weeks, a year in days, or a
//! 75-day challenge, drawn as a grid of marks with a clock, an optional quote and progress.
//!
//! The pipeline is:
//!
//! - Decode a [`Configuration`] from a render URL
//! - Derive [`TimeStats`] for an injected instant
//! - Compose a [`Scene`] for a presentation [`Profile`]
//! - Rasterize with [`CpuBackend`] and encode PNG bytes
//!
//! [`RenderService`] wraps the pipeline as a headless endpoint.
#![forbid(unsafe_code)]

mod foundation;

pub mod app;
pub mod config;
pub mod endpoint;
pub mod layout;
pub mod marks;
pub mod persist;
pub mod quote;
pub mod render;
pub mod stats;
pub mod theme;

pub use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgba8, Size, Vec2};
pub use crate::foundation::error::{DotsError, DotsResult};
pub use crate::foundation::settings::{
    DEFAULT_QUOTE_ENDPOINT, DEFAULT_QUOTE_MODEL, DEFAULT_SAVE_CONFIG_URL, ExportSize, Settings,
};

pub use crate::app::AppState;
pub use crate::config::{Configuration, DotShape, Mode, QuoteKind};
pub use crate::endpoint::{RenderResponse, RenderService};
pub use crate::quote::{GeminiProvider, QuoteProvider};
pub use crate::render::{CpuBackend, FrameRGBA, Profile, RenderBackend, Scene, Viewport};
pub use crate::stats::TimeStats;
pub use crate::theme::Theme;

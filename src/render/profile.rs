use crate::foundation::core::Size;
use crate::foundation::settings::ExportSize;

/// Presentation profile. Both profiles share every layout rule and differ only in the size
/// constants of [`Metrics`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Profile {
    /// Interactive miniature inside the configurator's phone frame.
    Preview,
    /// Export-resolution wallpaper.
    Standalone,
}

/// Font size and line box height of one text role.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    pub size: f64,
    pub line_height: f64,
}

impl TextMetrics {
    const fn new(size: f64, line_height: f64) -> Self {
        Self { size, line_height }
    }
}

/// Spacing rules of one grid strategy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridMetrics {
    /// Mark edge length.
    pub mark: f64,
    /// Horizontal gap between neighbouring marks.
    pub col_gap: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    /// Horizontal gap after every group of columns (LIFE only).
    pub group_gap: f64,
    /// Vertical gap after every band of rows (LIFE only).
    pub band_gap: f64,
}

impl GridMetrics {
    const fn uniform(mark: f64, gap: f64) -> Self {
        Self {
            mark,
            col_gap: gap,
            row_gap: gap,
            group_gap: gap,
            band_gap: gap,
        }
    }
}

/// Size constants for one profile, in layout pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    pub padding: f64,
    pub header_margin_top: f64,
    pub header_margin_bottom: f64,
    pub clock: TextMetrics,
    pub date_gap: f64,
    pub date: TextMetrics,
    pub quote_margin_y: f64,
    pub quote_inset_x: f64,
    pub quote: TextMetrics,
    pub footer_margin_bottom: f64,
    pub stats: TextMetrics,
    pub stats_inset_x: f64,
    pub stats_gap_below: f64,
    pub bar_height: f64,
    pub bar_gap_above: f64,
    pub brand_gap_above: f64,
    pub brand: TextMetrics,
    pub life: GridMetrics,
    pub year: GridMetrics,
    pub hard75: GridMetrics,
    pub rounded_corner: f64,
    pub current_glow: Option<f64>,
}

const QUOTE_LEADING: f64 = 1.625;

const PREVIEW: Metrics = Metrics {
    padding: 24.0,
    header_margin_top: 32.0,
    header_margin_bottom: 0.0,
    clock: TextMetrics::new(36.0, 40.0),
    date_gap: 4.0,
    date: TextMetrics::new(12.0, 16.0),
    quote_margin_y: 24.0,
    quote_inset_x: 0.0,
    quote: TextMetrics::new(12.0, 12.0 * QUOTE_LEADING),
    footer_margin_bottom: 16.0,
    stats: TextMetrics::new(10.0, 15.0),
    stats_inset_x: 0.0,
    stats_gap_below: 0.0,
    bar_height: 4.0,
    bar_gap_above: 8.0,
    brand_gap_above: 8.0,
    brand: TextMetrics::new(9.0, 13.5),
    life: GridMetrics {
        mark: 3.0,
        col_gap: 0.5,
        row_gap: 1.0,
        group_gap: 2.0,
        band_gap: 12.0,
    },
    year: GridMetrics::uniform(7.5, 2.0),
    hard75: GridMetrics::uniform(10.0, 6.0),
    rounded_corner: 1.0,
    current_glow: None,
};

const STANDALONE: Metrics = Metrics {
    padding: 32.0,
    header_margin_top: 64.0,
    header_margin_bottom: 32.0,
    clock: TextMetrics::new(60.0, 60.0),
    date_gap: 4.0,
    date: TextMetrics::new(18.0, 28.0),
    quote_margin_y: 48.0,
    quote_inset_x: 32.0,
    quote: TextMetrics::new(20.0, 20.0 * QUOTE_LEADING),
    footer_margin_bottom: 64.0,
    stats: TextMetrics::new(14.0, 20.0),
    stats_inset_x: 16.0,
    stats_gap_below: 16.0,
    bar_height: 8.0,
    bar_gap_above: 0.0,
    brand_gap_above: 16.0,
    brand: TextMetrics::new(14.0, 20.0),
    life: GridMetrics {
        mark: 6.0,
        col_gap: 1.0,
        row_gap: 2.0,
        group_gap: 4.0,
        band_gap: 24.0,
    },
    year: GridMetrics::uniform(20.0, 8.0),
    hard75: GridMetrics::uniform(24.0, 16.0),
    rounded_corner: 1.0,
    current_glow: Some(10.0),
};

/// Interior of the configurator's phone frame (300 × 600 with an 8 px bezel).
pub const PREVIEW_CANVAS: Size = Size::new(284.0, 584.0);

impl Profile {
    pub fn metrics(self) -> &'static Metrics {
        match self {
            Profile::Preview => &PREVIEW,
            Profile::Standalone => &STANDALONE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Profile::Preview => "preview",
            Profile::Standalone => "standalone",
        }
    }
}

/// Logical page size plus the device scale used when rasterizing it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub size: Size,
    pub scale: f64,
}

impl Viewport {
    /// The configurator's phone-frame preview at 1:1.
    pub fn preview() -> Self {
        Self {
            size: PREVIEW_CANVAS,
            scale: 1.0,
        }
    }

    /// Export viewport: device pixels divided by the device scale.
    pub fn export(export: ExportSize) -> Self {
        let scale = if export.scale.is_finite() && export.scale > 0.0 {
            export.scale
        } else {
            1.0
        };
        Self {
            size: Size::new(
                f64::from(export.width) / scale,
                f64::from(export.height) / scale,
            ),
            scale,
        }
    }

    /// Output bitmap size in device pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.size.width * self.scale).round().max(1.0) as u32,
            (self.size.height * self.scale).round().max(1.0) as u32,
        )
    }
}

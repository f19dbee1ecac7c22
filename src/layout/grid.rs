use crate::config::Mode;
use crate::foundation::core::{Point, Rect, Size};
use crate::render::profile::{GridMetrics, Metrics};

/// Weeks per LIFE row.
pub const LIFE_COLUMNS: usize = 52;
/// Years in the LIFE grid.
pub const LIFE_ROWS: usize = 80;
/// Fixed column count of the YEAR grid.
pub const YEAR_COLUMNS: usize = 13;
/// Fixed column count of the HARD75 grid.
pub const HARD75_COLUMNS: usize = 5;

const LIFE_GROUP: usize = 4;
const LIFE_BAND: usize = 20;

/// Position of one mark in the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkSlot {
    /// Row-major index; also the mark index fed to the styler.
    pub index: usize,
    pub row: usize,
    pub col: usize,
    /// Center of the mark's cell, in page coordinates.
    pub center: Point,
}

/// Result of running a layout strategy over a content region.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkLayout {
    pub columns: usize,
    pub rows: usize,
    /// Uniform scale applied so the grid fits the region; never above 1.
    pub scale: f64,
    /// Mark edge length after scaling.
    pub mark_size: f64,
    /// Area actually covered by the grid, centered in the region.
    pub bounds: Rect,
    pub slots: Vec<MarkSlot>,
}

/// Offsets of consecutive tracks along one axis plus the total extent (no trailing gap).
struct Tracks {
    starts: Vec<f64>,
    cell: f64,
    extent: f64,
}

impl Tracks {
    fn new(count: usize, cell: f64, gap_after: impl Fn(usize) -> f64) -> Self {
        let mut starts = Vec::with_capacity(count);
        let mut cursor = 0.0;
        for i in 0..count {
            starts.push(cursor);
            cursor += cell;
            if i + 1 < count {
                cursor += gap_after(i);
            }
        }
        Self {
            starts,
            cell,
            extent: cursor,
        }
    }

    fn uniform(count: usize, cell: f64, gap: f64) -> Self {
        Self::new(count, cell, |_| gap)
    }
}

/// Place the marks for `mode` into `region`.
///
/// LIFE always yields the full 80 × 52 grid. YEAR and HARD75 place `total` marks row-major
/// into 13 and 5 columns. A grid larger than the region is scaled down uniformly and the
/// result is centered.
pub fn layout_marks(mode: Mode, total: i64, metrics: &Metrics, region: Rect) -> MarkLayout {
    let count = usize::try_from(total).unwrap_or(0);
    match mode {
        Mode::Life => life(&metrics.life, region),
        Mode::Year => stretched(count, YEAR_COLUMNS, &metrics.year, region),
        Mode::Hard75 => natural(count, HARD75_COLUMNS, &metrics.hard75, region),
    }
}

fn life(m: &GridMetrics, region: Rect) -> MarkLayout {
    let cols = Tracks::new(LIFE_COLUMNS, m.mark, |w| {
        if (w + 1) % LIFE_GROUP == 0 {
            m.group_gap
        } else {
            m.col_gap
        }
    });
    let rows = Tracks::new(LIFE_ROWS, m.mark, |y| {
        if (y + 1) % LIFE_BAND == 0 {
            m.band_gap
        } else {
            m.row_gap
        }
    });
    let scale = fit_scale(Size::new(cols.extent, rows.extent), region.size());
    place(LIFE_ROWS * LIFE_COLUMNS, LIFE_COLUMNS, &cols, &rows, m.mark, scale, region)
}

fn natural(count: usize, columns: usize, m: &GridMetrics, region: Rect) -> MarkLayout {
    let rows = count.div_ceil(columns);
    let col_tracks = Tracks::uniform(columns, m.mark, m.col_gap);
    let row_tracks = Tracks::uniform(rows, m.mark, m.row_gap);
    let scale = fit_scale(
        Size::new(col_tracks.extent, row_tracks.extent),
        region.size(),
    );
    place(count, columns, &col_tracks, &row_tracks, m.mark, scale, region)
}

/// Equal-width columns spanning the region; marks keep their size and sit centered in cells.
fn stretched(count: usize, columns: usize, m: &GridMetrics, region: Rect) -> MarkLayout {
    let rows = count.div_ceil(columns);
    let gaps = m.col_gap * columns.saturating_sub(1) as f64;
    let natural_w = m.mark * columns as f64 + gaps;
    let row_tracks = Tracks::uniform(rows, m.mark, m.row_gap);
    let scale = fit_scale(Size::new(natural_w, row_tracks.extent), region.size());

    // A collapsed region has scale 0; keep natural cells so positions stay finite.
    let target_w = if scale > 0.0 && region.width() > 0.0 {
        (region.width() / scale).max(natural_w)
    } else {
        natural_w
    };
    let cell_w = (target_w - gaps) / columns as f64;
    let col_tracks = Tracks::uniform(columns, cell_w, m.col_gap);
    place(count, columns, &col_tracks, &row_tracks, m.mark, scale, region)
}

fn fit_scale(natural: Size, available: Size) -> f64 {
    let sx = if natural.width > 0.0 {
        available.width.max(0.0) / natural.width
    } else {
        1.0
    };
    let sy = if natural.height > 0.0 {
        available.height.max(0.0) / natural.height
    } else {
        1.0
    };
    sx.min(sy).min(1.0)
}

fn place(
    count: usize,
    columns: usize,
    cols: &Tracks,
    rows: &Tracks,
    mark: f64,
    scale: f64,
    region: Rect,
) -> MarkLayout {
    let size = Size::new(cols.extent * scale, rows.extent * scale);
    let center = region.center();
    let origin = Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0);

    let slots = (0..count)
        .map(|index| {
            let (row, col) = (index / columns, index % columns);
            let x = cols.starts[col] + cols.cell / 2.0;
            let y = rows.starts[row] + rows.cell / 2.0;
            MarkSlot {
                index,
                row,
                col,
                center: Point::new(origin.x + x * scale, origin.y + y * scale),
            }
        })
        .collect();

    MarkLayout {
        columns,
        rows: rows.starts.len(),
        scale,
        mark_size: mark * scale,
        bounds: Rect::from_origin_size(origin, size),
        slots,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;

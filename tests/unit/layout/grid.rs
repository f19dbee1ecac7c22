use super::*;
use crate::render::profile::Profile;

fn roomy() -> Rect {
    Rect::new(0.0, 0.0, 2000.0, 4000.0)
}

#[test]
fn life_is_eighty_rows_of_fifty_two() {
    let m = Profile::Preview.metrics();
    let layout = layout_marks(Mode::Life, 4160, m, roomy());
    assert_eq!(layout.slots.len(), 4160);
    assert_eq!(layout.columns, 52);
    assert_eq!(layout.rows, 80);
    let last = layout.slots[4159];
    assert_eq!((last.row, last.col), (79, 51));
    assert_eq!(layout.slots[52].row, 1);
    assert_eq!(layout.slots[52].col, 0);
}

#[test]
fn life_inserts_group_gap_after_every_fourth_column() {
    let m = Profile::Standalone.metrics();
    let layout = layout_marks(Mode::Life, 4160, m, roomy());
    assert_eq!(layout.scale, 1.0);
    let dx = |a: usize, b: usize| layout.slots[b].center.x - layout.slots[a].center.x;
    assert!((dx(0, 1) - (m.life.mark + m.life.col_gap)).abs() < 1e-9);
    assert!((dx(3, 4) - (m.life.mark + m.life.group_gap)).abs() < 1e-9);
    assert!((dx(4, 5) - (m.life.mark + m.life.col_gap)).abs() < 1e-9);
}

#[test]
fn life_inserts_band_gap_after_every_twentieth_row() {
    let m = Profile::Preview.metrics();
    let layout = layout_marks(Mode::Life, 4160, m, roomy());
    let row_y = |r: usize| layout.slots[r * 52].center.y;
    assert!((row_y(1) - row_y(0) - (m.life.mark + m.life.row_gap)).abs() < 1e-9);
    assert!((row_y(20) - row_y(19) - (m.life.mark + m.life.band_gap)).abs() < 1e-9);
    assert!((row_y(60) - row_y(59) - (m.life.mark + m.life.band_gap)).abs() < 1e-9);
}

#[test]
fn life_natural_extent_has_no_trailing_gap() {
    let m = Profile::Preview.metrics();
    let layout = layout_marks(Mode::Life, 4160, m, roomy());
    // 52 marks, 12 group gaps, 39 column gaps.
    let expected_w = 52.0 * 3.0 + 12.0 * 2.0 + 39.0 * 0.5;
    // 80 marks, 3 band gaps, 76 row gaps.
    let expected_h = 80.0 * 3.0 + 3.0 * 12.0 + 76.0 * 1.0;
    assert!((layout.bounds.width() - expected_w).abs() < 1e-9);
    assert!((layout.bounds.height() - expected_h).abs() < 1e-9);
}

#[test]
fn year_uses_thirteen_columns_and_total_marks() {
    let m = Profile::Preview.metrics();
    let layout = layout_marks(Mode::Year, 365, m, Rect::new(24.0, 100.0, 260.0, 480.0));
    assert_eq!(layout.slots.len(), 365);
    assert_eq!(layout.columns, 13);
    assert_eq!(layout.rows, 29);
    assert!(layout.slots.iter().all(|s| s.col < 13));
}

#[test]
fn year_columns_stretch_to_region_width() {
    let m = Profile::Preview.metrics();
    let region = Rect::new(24.0, 100.0, 260.0, 480.0);
    let layout = layout_marks(Mode::Year, 365, m, region);
    assert_eq!(layout.scale, 1.0);
    assert!((layout.bounds.width() - region.width()).abs() < 1e-9);
    assert!((layout.mark_size - 7.5).abs() < 1e-12);
}

#[test]
fn hard75_is_five_columns_of_fifteen_rows() {
    let m = Profile::Standalone.metrics();
    let layout = layout_marks(Mode::Hard75, 75, m, roomy());
    assert_eq!(layout.slots.len(), 75);
    assert_eq!(layout.columns, 5);
    assert_eq!(layout.rows, 15);
    let expected_w = 5.0 * 24.0 + 4.0 * 16.0;
    assert!((layout.bounds.width() - expected_w).abs() < 1e-9);
}

#[test]
fn grid_is_centered_in_region() {
    let m = Profile::Preview.metrics();
    let region = Rect::new(10.0, 20.0, 310.0, 620.0);
    let layout = layout_marks(Mode::Hard75, 75, m, region);
    let c = layout.bounds.center();
    assert!((c.x - region.center().x).abs() < 1e-9);
    assert!((c.y - region.center().y).abs() < 1e-9);
}

#[test]
fn oversized_grid_scales_down_to_fit() {
    let m = Profile::Standalone.metrics();
    let region = Rect::new(0.0, 0.0, 200.0, 200.0);
    let layout = layout_marks(Mode::Life, 4160, m, region);
    assert!(layout.scale < 1.0);
    assert!(layout.bounds.width() <= region.width() + 1e-9);
    assert!(layout.bounds.height() <= region.height() + 1e-9);
    assert!((layout.mark_size - m.life.mark * layout.scale).abs() < 1e-12);
    assert!(
        layout
            .slots
            .iter()
            .all(|s| region.inflate(1e-6, 1e-6).contains(s.center))
    );
}

#[test]
fn small_grid_is_never_scaled_up() {
    let m = Profile::Preview.metrics();
    let layout = layout_marks(Mode::Hard75, 75, m, roomy());
    assert_eq!(layout.scale, 1.0);
    assert_eq!(layout.mark_size, 10.0);
}

#[test]
fn negative_total_yields_empty_grid() {
    let m = Profile::Preview.metrics();
    let layout = layout_marks(Mode::Year, -3, m, roomy());
    assert!(layout.slots.is_empty());
}

#[test]
fn collapsed_region_keeps_positions_finite() {
    let collapsed = [
        Rect::new(10.0, 300.0, 310.0, 300.0),
        Rect::new(40.0, 0.0, 40.0, 500.0),
        Rect::new(0.0, 0.0, 0.0, 0.0),
    ];
    for profile in [Profile::Preview, Profile::Standalone] {
        let m = profile.metrics();
        for mode in Mode::ALL {
            let total = match mode {
                Mode::Life => 4160,
                Mode::Year => 365,
                Mode::Hard75 => 75,
            };
            for region in collapsed {
                let layout = layout_marks(mode, total, m, region);
                assert!(!layout.slots.is_empty(), "{mode:?}");
                assert!(layout.mark_size.is_finite(), "{mode:?} {region:?}");
                let b = layout.bounds;
                assert!(
                    [b.x0, b.y0, b.x1, b.y1].iter().all(|v| v.is_finite()),
                    "{mode:?} {region:?} bounds {b:?}"
                );
                assert!(
                    layout
                        .slots
                        .iter()
                        .all(|s| s.center.x.is_finite() && s.center.y.is_finite()),
                    "{mode:?} {region:?}"
                );
            }
        }
    }
}

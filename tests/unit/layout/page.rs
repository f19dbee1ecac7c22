use super::*;
use crate::render::profile::{PREVIEW_CANVAS, Profile};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn preview_regions_without_quote() {
    let m = Profile::Preview.metrics();
    let r = solve_page(PREVIEW_CANVAS, m, None).expect("layout");

    assert!(r.quote.is_none());
    assert!(close(r.header.x0, 24.0));
    assert!(close(r.header.x1, 260.0));
    assert!(close(r.header.y0, 24.0 + 32.0));
    assert!(close(r.header.height(), 60.0));

    assert!(close(r.footer.y1, 584.0 - 24.0 - 16.0));
    assert!(close(r.footer.height(), footer_height(m)));

    assert!(close(r.content.y0, r.header.y1));
    assert!(close(r.content.y1, r.footer.y0));
    assert!(close(r.content.width(), 236.0));
}

#[test]
fn quote_block_takes_space_from_content() {
    let m = Profile::Standalone.metrics();
    let canvas = Size::new(589.5, 1278.0);
    let without = solve_page(canvas, m, None).expect("layout");
    let with = solve_page(canvas, m, Some(2)).expect("layout");

    let quote = with.quote.expect("quote region");
    assert!(close(quote.height(), 2.0 * m.quote.line_height));
    assert!(close(quote.x0, m.padding + m.quote_inset_x));
    assert!(close(quote.y0, with.header.y1 + m.quote_margin_y));
    assert!(close(with.content.y0, quote.y1 + m.quote_margin_y));

    let taken = without.content.height() - with.content.height();
    assert!(close(taken, 2.0 * m.quote.line_height + 2.0 * m.quote_margin_y));
}

#[test]
fn content_collapses_instead_of_going_negative() {
    let m = Profile::Standalone.metrics();
    let r = solve_page(Size::new(300.0, 200.0), m, Some(10)).expect("layout");
    assert!(r.content.height() >= 0.0);
}

#[test]
fn header_and_footer_heights_follow_metrics() {
    let m = Profile::Standalone.metrics();
    assert!(close(header_height(m), 60.0 + 4.0 + 28.0));
    assert!(close(footer_height(m), 20.0 + 16.0 + 0.0 + 8.0 + 16.0 + 20.0));
}

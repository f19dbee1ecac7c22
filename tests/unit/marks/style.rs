use super::*;
use crate::theme::THEMES;

fn stats(passed: i64) -> TimeStats {
    TimeStats {
        total: 365,
        passed,
        remaining: 365 - passed,
        unit: "Days",
    }
}

#[test]
fn category_follows_index_against_passed() {
    assert_eq!(categorize(0, 60), MarkCategory::Past);
    assert_eq!(categorize(59, 60), MarkCategory::Past);
    assert_eq!(categorize(60, 60), MarkCategory::Current);
    assert_eq!(categorize(61, 60), MarkCategory::Future);
    assert_eq!(categorize(0, 0), MarkCategory::Current);
    assert_eq!(categorize(0, -3), MarkCategory::Future);
}

#[test]
fn exactly_one_current_mark_when_in_range() {
    let s = stats(60);
    let currents = (0..365)
        .map(|i| style_mark(i, &s, DotShape::Square, &THEMES[0], Profile::Preview, 7.5))
        .filter(|m| m.category == MarkCategory::Current)
        .count();
    assert_eq!(currents, 1);

    let past_end = stats(400);
    assert!((0..365).all(|i| categorize(i, past_end.passed) == MarkCategory::Past));
}

#[test]
fn colors_come_from_the_theme() {
    let t = &THEMES[4];
    let s = stats(10);
    assert_eq!(style_mark(3, &s, DotShape::Circle, t, Profile::Preview, 3.0).color, t.accent);
    assert_eq!(style_mark(10, &s, DotShape::Circle, t, Profile::Preview, 3.0).color, t.current);
    assert_eq!(style_mark(11, &s, DotShape::Circle, t, Profile::Preview, 3.0).color, t.dots);
}

#[test]
fn current_geometric_mark_is_emphasized() {
    let s = stats(5);
    let t = &THEMES[0];
    let cur = style_mark(5, &s, DotShape::Square, t, Profile::Preview, 10.0);
    let other = style_mark(6, &s, DotShape::Square, t, Profile::Preview, 10.0);
    assert!((cur.size - 11.0).abs() < 1e-9);
    assert_eq!(other.size, 10.0);
    assert_eq!(cur.glow, None);

    let exported = style_mark(5, &s, DotShape::Square, t, Profile::Standalone, 10.0);
    assert_eq!(exported.glow, Some(10.0));
    assert_eq!(style_mark(4, &s, DotShape::Square, t, Profile::Standalone, 10.0).glow, None);
}

#[test]
fn corner_radius_depends_on_shape() {
    let s = stats(0);
    let t = &THEMES[0];
    let radius = |shape| match style_mark(3, &s, shape, t, Profile::Preview, 8.0).paint {
        MarkPaint::Solid { corner_radius } => corner_radius,
        other => panic!("unexpected paint {other:?}"),
    };
    assert_eq!(radius(DotShape::Square), 0.0);
    assert_eq!(radius(DotShape::Circle), 4.0);
    assert_eq!(radius(DotShape::Rounded), 1.0);
}

#[test]
fn icons_fill_until_now_and_outline_after() {
    let s = stats(2);
    let t = &THEMES[0];
    for shape in [DotShape::Star, DotShape::Fire] {
        let paint = |i| style_mark(i, &s, shape, t, Profile::Standalone, 24.0).paint;
        assert_eq!(paint(1), MarkPaint::Icon { filled: true, stroke_width: 2.0 });
        assert_eq!(paint(2), MarkPaint::Icon { filled: true, stroke_width: 2.0 });
        assert_eq!(paint(3), MarkPaint::Icon { filled: false, stroke_width: 2.0 });
        assert_eq!(style_mark(2, &s, shape, t, Profile::Standalone, 24.0).glow, None);
        assert_eq!(style_mark(2, &s, shape, t, Profile::Standalone, 24.0).size, 24.0);
    }
}

#[test]
fn glyph_strokes_thicken_for_current() {
    let s = stats(2);
    let t = &THEMES[0];
    for shape in [DotShape::Dollar, DotShape::Check, DotShape::Cross] {
        let paint = |i| style_mark(i, &s, shape, t, Profile::Preview, 10.0).paint;
        assert_eq!(paint(0), MarkPaint::Stroke { width: 3.0 });
        assert_eq!(paint(2), MarkPaint::Stroke { width: 4.0 });
        assert_eq!(paint(9), MarkPaint::Stroke { width: 3.0 });
    }
}

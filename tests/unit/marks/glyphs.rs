use kurbo::Shape;

use super::*;

#[test]
fn only_non_geometric_shapes_have_glyphs() {
    for shape in DotShape::ALL {
        let has_glyph = glyph_path(shape).is_some();
        let geometric = matches!(shape, DotShape::Square | DotShape::Circle | DotShape::Rounded);
        assert_eq!(has_glyph, !geometric, "{shape:?}");
    }
}

#[test]
fn glyphs_stay_inside_their_box() {
    for shape in [
        DotShape::Star,
        DotShape::Fire,
        DotShape::Dollar,
        DotShape::Check,
        DotShape::Cross,
    ] {
        let path = glyph_path(shape).unwrap();
        let bb = path.bounding_box();
        assert!(bb.width() > 8.0 && bb.height() > 8.0, "{shape:?} too small: {bb:?}");
        assert!(bb.x0 >= 0.0 && bb.y0 >= 0.0, "{shape:?} {bb:?}");
        assert!(bb.x1 <= GLYPH_BOX && bb.y1 <= GLYPH_BOX, "{shape:?} {bb:?}");
    }
}

#[test]
fn star_has_ten_vertices() {
    let star = glyph_path(DotShape::Star).unwrap();
    let line_tos = star
        .elements()
        .iter()
        .filter(|el| matches!(el, kurbo::PathEl::LineTo(_)))
        .count();
    assert_eq!(line_tos, 9);
}

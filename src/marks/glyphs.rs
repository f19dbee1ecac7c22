use std::f64::consts::{FRAC_PI_2, PI};

use kurbo::{Arc, BezPath, Point, Vec2};

use crate::config::DotShape;

/// Side length of the square glyph coordinate space.
pub const GLYPH_BOX: f64 = 24.0;

const ARC_TOLERANCE: f64 = 0.05;

/// Vector outline for icon and glyph shapes, in a `GLYPH_BOX`-sized box with a y-down axis.
///
/// Geometric shapes are drawn as plain blocks and have no glyph.
pub fn glyph_path(shape: DotShape) -> Option<BezPath> {
    match shape {
        DotShape::Square | DotShape::Circle | DotShape::Rounded => None,
        DotShape::Star => Some(star()),
        DotShape::Fire => Some(flame()),
        DotShape::Dollar => Some(dollar()),
        DotShape::Check => Some(check()),
        DotShape::Cross => Some(cross()),
    }
}

fn arc(center: (f64, f64), radius: f64, start_angle: f64, sweep_angle: f64) -> Arc {
    Arc {
        center: Point::new(center.0, center.1),
        radii: Vec2::new(radius, radius),
        start_angle,
        sweep_angle,
        x_rotation: 0.0,
    }
}

fn star() -> BezPath {
    let center = Point::new(12.0, 12.6);
    let (outer, inner) = (10.0, 4.2);
    let mut p = BezPath::new();
    for k in 0..10 {
        let r = if k % 2 == 0 { outer } else { inner };
        let angle = -FRAC_PI_2 + f64::from(k) * PI / 5.0;
        let pt = center + Vec2::new(r * angle.cos(), r * angle.sin());
        if k == 0 {
            p.move_to(pt);
        } else {
            p.line_to(pt);
        }
    }
    p.close_path();
    p
}

fn flame() -> BezPath {
    let mut p = BezPath::new();
    p.move_to((12.0, 2.5));
    p.curve_to((12.5, 5.0), (14.0, 7.4), (16.0, 9.0));
    p.curve_to((18.0, 10.6), (19.0, 12.5), (19.0, 14.5));
    // Bowl of the flame: lower half of a radius-7 circle, right to left.
    let bowl = arc((12.0, 14.5), 7.0, 0.0, PI);
    p.extend(bowl.append_iter(ARC_TOLERANCE));
    p.curve_to((5.0, 13.35), (5.43, 12.2), (6.0, 11.5));
    p.curve_to((6.0, 12.9), (7.1, 14.0), (8.5, 14.0));
    p.curve_to((9.9, 14.0), (11.0, 12.9), (11.0, 11.5));
    p.curve_to((11.0, 10.1), (10.5, 9.5), (10.0, 8.5));
    p.curve_to((8.9, 6.4), (9.8, 4.4), (12.0, 2.5));
    p.close_path();
    p
}

fn dollar() -> BezPath {
    let mut p = BezPath::new();
    p.move_to((12.0, 1.0));
    p.line_to((12.0, 23.0));

    // Upper bowl opens right, lower bowl opens left.
    p.move_to((17.0, 5.0));
    p.line_to((9.5, 5.0));
    let upper = arc((9.5, 8.5), 3.5, -FRAC_PI_2, -PI);
    p.extend(upper.append_iter(ARC_TOLERANCE));
    p.line_to((14.5, 12.0));
    let lower = arc((14.5, 15.5), 3.5, -FRAC_PI_2, PI);
    p.extend(lower.append_iter(ARC_TOLERANCE));
    p.line_to((6.0, 19.0));
    p
}

fn check() -> BezPath {
    let mut p = BezPath::new();
    p.move_to((20.0, 6.0));
    p.line_to((9.0, 17.0));
    p.line_to((4.0, 12.0));
    p
}

fn cross() -> BezPath {
    let mut p = BezPath::new();
    p.move_to((18.0, 6.0));
    p.line_to((6.0, 18.0));
    p.move_to((6.0, 6.0));
    p.line_to((18.0, 18.0));
    p
}

#[cfg(test)]
#[path = "../../tests/unit/marks/glyphs.rs"]
mod tests;

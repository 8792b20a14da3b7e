use std::f64::consts::{FRAC_PI_2, PI};

use crate::intersection::{contains, intersects};
use crate::shapes::{
    Arc, Circle, Ellipse, Line, Point, Polygon, Rectangle, Sector, Shape, Spline, Triangle,
};
use crate::vector::vec2;

fn l_shape() -> Shape {
    Shape::from(Polygon::new(vec![
        vec2(0.0, 0.0),
        vec2(4.0, 0.0),
        vec2(4.0, 1.0),
        vec2(1.0, 1.0),
        vec2(1.0, 4.0),
        vec2(0.0, 4.0),
    ]))
}

fn rect(x: f64, y: f64, hw: f64, hh: f64) -> Shape {
    Shape::from(Rectangle::new(vec2(x, y), vec2(hw, hh)))
}

fn circle(x: f64, y: f64, r: f64) -> Shape {
    Shape::from(Circle::new(vec2(x, y), r))
}

fn point(x: f64, y: f64) -> Shape {
    Shape::from(Point::from_coords(x, y))
}

fn sample_shapes() -> Vec<Shape> {
    vec![
        point(0.5, 0.5),
        Shape::from(Line::new(vec2(-1.0, 0.2), vec2(3.0, 0.8))),
        rect(1.0, 1.0, 1.0, 0.5),
        circle(0.0, 0.0, 1.2),
        Shape::from(Ellipse::new(vec2(2.5, 2.5), vec2(1.5, 0.7))),
        Shape::from(Triangle::new(vec2(0.0, 0.0), vec2(3.0, 0.0), vec2(0.0, 3.0))),
        Shape::from(Arc::new(vec2(0.0, 0.0), 2.0, 0.0, FRAC_PI_2)),
        l_shape(),
        Shape::from(Spline::new([
            vec2(-1.0, -1.0),
            vec2(0.0, 3.0),
            vec2(2.0, 3.0),
            vec2(3.0, -1.0),
        ])),
        Shape::from(Sector::new(vec2(1.0, 1.0), 1.5, PI, FRAC_PI_2)),
    ]
}

#[test]
fn test_intersects_is_symmetric() {
    let shapes = sample_shapes();
    for a in &shapes {
        for b in &shapes {
            assert_eq!(
                intersects(a, b),
                intersects(b, a),
                "{:?} vs {:?}",
                a.kind(),
                b.kind()
            );
        }
    }
}

#[test]
fn test_rectangles_touching_at_edge_intersect() {
    let a = rect(0.0, 0.0, 1.0, 1.0);

    assert!(intersects(&a, &rect(1.5, 0.0, 1.0, 1.0)));
    assert!(intersects(&a, &rect(2.0, 0.0, 1.0, 1.0)));
    assert!(!intersects(&a, &rect(2.5, 0.0, 1.0, 1.0)));
}

#[test]
fn test_rectangle_against_circle() {
    let a = rect(0.0, 0.0, 1.0, 1.0);

    assert!(intersects(&a, &circle(2.0, 0.0, 1.0)));
    assert!(intersects(&circle(2.0, 0.0, 1.0), &a));
    assert!(!intersects(&a, &circle(3.0, 0.0, 1.0)));
    // Near a corner the round edge matters
    assert!(!intersects(&a, &circle(1.8, 1.8, 1.0)));
}

#[test]
fn test_circles() {
    assert!(intersects(&circle(0.0, 0.0, 1.0), &circle(1.5, 0.0, 1.0)));
    assert!(!intersects(&circle(0.0, 0.0, 1.0), &circle(3.0, 0.0, 1.0)));
}

#[test]
fn test_concave_polygon_notch_is_outside() {
    let l = l_shape();

    assert!(intersects(&l, &point(0.5, 3.5)));
    assert!(!intersects(&l, &point(2.5, 2.5)));
    assert!(!intersects(&l, &circle(2.5, 2.5, 1.0)));
    assert!(intersects(&l, &circle(2.5, 2.5, 1.6)));
}

#[test]
fn test_triangle_against_circle_and_rectangle() {
    let triangle = Shape::from(Triangle::new(vec2(0.0, 0.0), vec2(4.0, 0.0), vec2(0.0, 4.0)));

    assert!(intersects(&triangle, &circle(3.0, 3.0, 1.5)));
    assert!(!intersects(&triangle, &circle(3.0, 3.0, 1.0)));
    assert!(intersects(&triangle, &rect(1.0, 1.0, 0.2, 0.2)));
    assert!(!intersects(&triangle, &rect(4.0, 4.0, 1.0, 1.0)));
}

#[test]
fn test_ellipse_against_straight_edged_shapes() {
    let ellipse = Shape::from(Ellipse::new(vec2(0.0, 0.0), vec2(2.0, 1.0)));

    assert!(intersects(&ellipse, &rect(2.5, 0.0, 0.6, 0.6)));
    assert!(!intersects(&ellipse, &rect(2.5, 0.0, 0.4, 0.4)));
    // Inside the bounding box but outside the curve
    assert!(!intersects(&ellipse, &rect(1.9, 0.9, 0.05, 0.05)));
    let triangle = Shape::from(Triangle::new(vec2(0.0, 1.5), vec2(1.0, 3.0), vec2(-1.0, 3.0)));
    assert!(!intersects(&ellipse, &triangle));
}

#[test]
fn test_ellipse_against_round_shapes_is_conservative() {
    let ellipse = Shape::from(Ellipse::new(vec2(0.0, 0.0), vec2(2.0, 1.0)));
    let overlapping = circle(0.5, 0.0, 1.0);

    assert!(!intersects(&ellipse, &overlapping));
    assert!(!intersects(&overlapping, &ellipse));
    assert!(!intersects(&ellipse, &ellipse.clone()));
}

#[test]
fn test_degenerate_ellipse_acts_as_segment() {
    let flat = Shape::from(Ellipse::new(vec2(0.0, 0.0), vec2(2.0, 0.0)));

    assert!(intersects(&flat, &rect(1.5, 0.0, 0.2, 0.2)));
    assert!(!intersects(&flat, &rect(1.5, 1.0, 0.2, 0.2)));
}

#[test]
fn test_arc_only_meets_inside_its_sweep() {
    let arc = Shape::from(Arc::new(vec2(0.0, 0.0), 1.0, 0.0, FRAC_PI_2));

    assert!(intersects(&arc, &Shape::from(Line::new(vec2(0.0, 0.0), vec2(2.0, 2.0)))));
    assert!(!intersects(&arc, &Shape::from(Line::new(vec2(0.0, 0.0), vec2(-2.0, -2.0)))));
    assert!(intersects(&arc, &circle(1.0, 1.0, 0.5)));
    assert!(!intersects(&arc, &circle(-1.0, -1.0, 0.5)));
    // A rectangle wholly inside the circle never reaches the arc
    assert!(!intersects(&arc, &rect(0.2, 0.2, 0.1, 0.1)));
    assert!(intersects(&arc, &rect(0.0, 1.0, 0.1, 0.1)));
}

#[test]
fn test_spline_against_line_and_circle() {
    let spline = Shape::from(Spline::new([
        vec2(0.0, 0.0),
        vec2(1.0, 2.0),
        vec2(2.0, 2.0),
        vec2(3.0, 0.0),
    ]));

    assert!(intersects(&spline, &Shape::from(Line::new(vec2(1.5, -1.0), vec2(1.5, 3.0)))));
    assert!(!intersects(&spline, &Shape::from(Line::new(vec2(-1.0, 5.0), vec2(4.0, 5.0)))));
    assert!(intersects(&spline, &circle(1.5, 1.5, 0.1)));
    assert!(!intersects(&spline, &circle(1.5, 0.5, 0.5)));
}

#[test]
fn test_sector_against_points_and_rectangles() {
    let sector = Shape::from(Sector::new(vec2(0.0, 0.0), 2.0, 0.0, FRAC_PI_2));

    assert!(intersects(&sector, &point(1.0, 1.0)));
    assert!(intersects(&sector, &point(0.0, 0.0)));
    assert!(!intersects(&sector, &point(-1.0, -1.0)));
    assert!(intersects(&sector, &rect(1.0, 1.0, 0.2, 0.2)));
    assert!(!intersects(&sector, &rect(-3.0, -3.0, 0.5, 0.5)));
    assert!(!intersects(&sector, &rect(-1.0, 1.0, 0.5, 0.5)));
}

#[test]
fn test_sectors() {
    let upper_right = Shape::from(Sector::new(vec2(0.0, 0.0), 2.0, 0.0, FRAC_PI_2));
    let facing = Shape::from(Sector::new(vec2(2.5, 2.5), 2.0, PI, FRAC_PI_2));
    let behind = Shape::from(Sector::new(vec2(-0.5, -0.5), 2.0, PI, FRAC_PI_2));

    assert!(intersects(&upper_right, &facing));
    assert!(!intersects(&upper_right, &behind));
}

#[test]
fn test_rectangle_contains_by_bounds() {
    let container = rect(0.0, 0.0, 2.0, 1.0);

    assert!(contains(&container, &circle(0.0, 0.0, 1.0)));
    assert!(!contains(&container, &circle(1.5, 0.0, 1.0)));
    assert!(contains(&container, &point(2.0, 1.0)));
    assert!(contains(&container, &Shape::from(Arc::new(vec2(0.0, 0.0), 1.0, 0.0, PI))));
}

#[test]
fn test_nothing_contains_an_empty_polygon() {
    let empty = Shape::from(Polygon::new(vec![]));

    assert!(!contains(&rect(0.0, 0.0, 1.0, 1.0), &empty));
    assert!(!contains(&circle(0.0, 0.0, 1.0), &empty));
    assert!(!contains(&l_shape(), &empty));
}

#[test]
fn test_circle_contains() {
    let container = circle(0.0, 0.0, 2.0);

    assert!(contains(&container, &rect(0.0, 0.0, 1.0, 1.0)));
    assert!(!contains(&container, &rect(0.0, 0.0, 1.5, 1.5)));
    assert!(contains(&container, &circle(0.5, 0.0, 1.5)));
    assert!(!contains(&container, &circle(1.0, 0.0, 1.5)));
    assert!(contains(&container, &Shape::from(Sector::new(vec2(0.0, 0.0), 2.0, 0.0, PI))));
}

#[test]
fn test_ellipse_contains() {
    let ellipse = Shape::from(Ellipse::new(vec2(0.0, 0.0), vec2(2.0, 1.0)));

    assert!(contains(&ellipse, &rect(0.0, 0.0, 1.0, 0.5)));
    assert!(!contains(&ellipse, &rect(0.0, 0.0, 1.9, 0.9)));
    assert!(!contains(&ellipse, &circle(0.0, 0.0, 0.1)));
}

#[test]
fn test_concave_polygon_contains() {
    let l = l_shape();
    let along_bottom = Shape::from(Line::new(vec2(0.5, 0.5), vec2(3.0, 0.5)));
    let across_notch = Shape::from(Line::new(vec2(0.5, 3.0), vec2(3.0, 0.5)));

    assert!(contains(&l, &along_bottom));
    assert!(!contains(&l, &across_notch));
    assert!(contains(&l, &rect(2.0, 0.5, 1.0, 0.25)));
    assert!(!contains(&l, &rect(1.0, 1.0, 0.5, 0.5)));
    assert!(contains(&l, &circle(0.5, 2.5, 0.4)));
    assert!(!contains(&l, &circle(0.5, 2.5, 0.6)));
}

#[test]
fn test_triangle_contains_triangle() {
    let outer = Shape::from(Triangle::new(vec2(0.0, 0.0), vec2(4.0, 0.0), vec2(0.0, 4.0)));
    let inner = Shape::from(Triangle::new(vec2(0.5, 0.5), vec2(2.0, 0.5), vec2(0.5, 2.0)));

    assert!(contains(&outer, &inner));
    assert!(!contains(&inner, &outer));
}

#[test]
fn test_sector_contains() {
    let sector = Shape::from(Sector::new(vec2(0.0, 0.0), 4.0, 0.0, FRAC_PI_2));

    assert!(contains(&sector, &circle(1.5, 1.5, 0.5)));
    assert!(!contains(&sector, &circle(0.3, 1.5, 0.5)));
    assert!(contains(&sector, &rect(1.5, 1.5, 0.5, 0.5)));
    assert!(!contains(&sector, &rect(0.0, 1.5, 0.5, 0.5)));
    assert!(contains(
        &sector,
        &Shape::from(Sector::new(vec2(0.0, 0.0), 2.0, 0.2, 0.5))
    ));
}

#[test]
fn test_lines_and_points_contain_little() {
    let line = Shape::from(Line::new(vec2(0.0, 0.0), vec2(10.0, 0.0)));

    assert!(contains(&line, &point(5.0, 0.0)));
    assert!(contains(&line, &line.clone()));
    assert!(!contains(&line, &Shape::from(Line::new(vec2(2.0, 0.0), vec2(4.0, 0.0)))));
    assert!(!contains(&line, &rect(5.0, 0.0, 0.0, 0.0)));

    assert!(contains(&point(1.0, 1.0), &point(1.0, 1.00001)));
    assert!(!contains(&point(1.0, 1.0), &circle(1.0, 1.0, 0.0)));
}

#[test]
fn test_curves_only_contain_points() {
    let arc = Shape::from(Arc::new(vec2(0.0, 0.0), 1.0, 0.0, PI));
    let spline = Shape::from(Spline::new([
        vec2(0.0, 0.0),
        vec2(1.0, 1.0),
        vec2(2.0, 1.0),
        vec2(3.0, 0.0),
    ]));

    assert!(contains(&arc, &point(0.0, 1.0)));
    assert!(!contains(&arc, &Shape::from(Line::new(vec2(1.0, 0.0), vec2(0.0, 1.0)))));
    assert!(contains(&spline, &point(3.0, 0.0)));
    assert!(!contains(&spline, &spline.clone()));
}

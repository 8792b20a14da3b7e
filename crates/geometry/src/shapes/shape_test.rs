use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_relative_eq;

use crate::color::Color;
use crate::curve::SPLINE_SEGMENTS;
use crate::draw::{DrawCommand, RecordingSurface};
use crate::shapes::{
    Arc, Circle, Ellipse, Line, Point, Polygon, Rectangle, Sector, Shape, ShapeKind, Spline,
    Triangle,
};
use crate::vector::{vec2, Vector2D};

fn l_shape() -> Polygon {
    Polygon::new(vec![
        vec2(0.0, 0.0),
        vec2(4.0, 0.0),
        vec2(4.0, 1.0),
        vec2(1.0, 1.0),
        vec2(1.0, 4.0),
        vec2(0.0, 4.0),
    ])
}

#[test]
fn test_kind_tags_each_variant() {
    assert_eq!(Shape::from(Point::from_coords(0.0, 0.0)).kind(), ShapeKind::Point);
    assert_eq!(Shape::from(Line::default()).kind(), ShapeKind::Line);
    assert_eq!(
        Shape::from(Sector::new(Vector2D::zeros(), 1.0, 0.0, PI)).kind(),
        ShapeKind::Sector
    );
}

#[test]
fn test_areas() {
    let rect = Shape::from(Rectangle::new(vec2(0.0, 0.0), vec2(2.0, 1.0)));
    let circle = Shape::from(Circle::new(vec2(0.0, 0.0), 1.0));
    let ellipse = Shape::from(Ellipse::new(vec2(0.0, 0.0), vec2(2.0, 1.0)));
    let triangle = Shape::from(Triangle::new(vec2(0.0, 0.0), vec2(4.0, 0.0), vec2(0.0, 4.0)));
    let sector = Shape::from(Sector::new(vec2(0.0, 0.0), 2.0, 0.0, FRAC_PI_2));
    let arc = Shape::from(Arc::new(vec2(0.0, 0.0), 2.0, 0.0, FRAC_PI_2));

    assert_relative_eq!(rect.area(), 8.0);
    assert_relative_eq!(circle.area(), PI);
    assert_relative_eq!(ellipse.area(), 2.0 * PI);
    assert_relative_eq!(triangle.area(), 8.0);
    assert_relative_eq!(Shape::from(l_shape()).area(), 7.0);
    assert_relative_eq!(sector.area(), PI);
    assert_eq!(arc.area(), 0.0);
    assert_eq!(Shape::from(Point::from_coords(1.0, 1.0)).area(), 0.0);
}

#[test]
fn test_full_circle_sector_area_is_capped() {
    let sector = Sector::new(vec2(0.0, 0.0), 1.0, 0.0, 3.0 * PI);

    assert!(sector.is_full_circle());
    assert_relative_eq!(sector.area(), PI);
}

#[test]
fn test_resizing_recomputes_area() {
    let mut circle = Shape::from(Circle::new(vec2(0.0, 0.0), 1.0));
    circle.set_half_width(2.0);
    assert_relative_eq!(circle.area(), 4.0 * PI);
    assert_eq!(circle.half_extents(), vec2(2.0, 2.0));

    let mut rect = Shape::from(Rectangle::new(vec2(0.0, 0.0), vec2(1.0, 1.0)));
    rect.set_half_height(3.0);
    assert_eq!(rect.half_extents(), vec2(1.0, 3.0));
    assert_relative_eq!(rect.area(), 12.0);

    let mut ellipse = Shape::from(Ellipse::new(vec2(0.0, 0.0), vec2(1.0, 1.0)));
    ellipse.set_half_extents(vec2(3.0, 2.0));
    assert_relative_eq!(ellipse.area(), 6.0 * PI);

    let mut sector = Shape::from(Sector::new(vec2(0.0, 0.0), 1.0, 0.0, PI));
    sector.set_half_extents(vec2(0.5, 2.0));
    assert_relative_eq!(sector.area(), 2.0 * PI);
}

#[test]
fn test_round_shapes_take_larger_extent_as_radius() {
    let mut circle = Circle::new(vec2(0.0, 0.0), 1.0);
    circle.set_half_extents(vec2(2.0, 5.0));

    assert_eq!(circle.radius(), 5.0);
}

#[test]
fn test_triangle_rescales_about_centroid() {
    let mut triangle = Triangle::new(vec2(0.0, 0.0), vec2(4.0, 0.0), vec2(0.0, 4.0));
    let centroid = triangle.position();
    assert_relative_eq!(centroid.x, 4.0 / 3.0);
    assert_relative_eq!(centroid.y, 4.0 / 3.0);
    assert_eq!(triangle.half_extents(), vec2(2.0, 2.0));

    triangle.set_half_extents(vec2(1.0, 1.0));

    assert_relative_eq!(triangle.half_extents().x, 1.0);
    assert_relative_eq!(triangle.half_extents().y, 1.0);
    assert_relative_eq!(triangle.area(), 2.0);
    assert_relative_eq!(triangle.position().x, centroid.x);
    assert_relative_eq!(triangle.position().y, centroid.y);
}

#[test]
fn test_set_position_translates_vertices() {
    let mut shape = Shape::from(Triangle::new(vec2(0.0, 0.0), vec2(3.0, 0.0), vec2(0.0, 3.0)));
    shape.set_position(vec2(10.0, 10.0));

    assert_relative_eq!(shape.x(), 10.0);
    assert_relative_eq!(shape.y(), 10.0);
    assert_relative_eq!(shape.area(), 4.5);
    let Shape::Triangle(triangle) = &shape else {
        panic!("variant changed");
    };
    assert_relative_eq!(triangle.vertices()[0].x, 9.0);
    assert_relative_eq!(triangle.vertices()[0].y, 9.0);
}

#[test]
fn test_set_x_and_set_y_keep_other_axis() {
    let mut shape = Shape::from(Rectangle::new(vec2(1.0, 2.0), vec2(1.0, 1.0)));
    shape.set_x(5.0);
    assert_eq!(shape.position(), vec2(5.0, 2.0));
    shape.set_y(-3.0);
    assert_eq!(shape.position(), vec2(5.0, -3.0));
}

#[test]
fn test_polygon_convexity() {
    let square = Polygon::new(vec![
        vec2(0.0, 0.0),
        vec2(2.0, 0.0),
        vec2(2.0, 2.0),
        vec2(0.0, 2.0),
    ]);

    assert!(square.is_convex());
    assert!(!l_shape().is_convex());
    assert_eq!(square.edges().len(), 4);
}

#[test]
fn test_distance_to_point_is_zero_inside_regions() {
    let rect = Shape::from(Rectangle::new(vec2(0.0, 0.0), vec2(1.0, 1.0)));
    let circle = Shape::from(Circle::new(vec2(0.0, 0.0), 1.0));
    let polygon = Shape::from(l_shape());

    assert_eq!(rect.distance_to_point(vec2(0.5, 0.5)), 0.0);
    assert_relative_eq!(rect.distance_to_point(vec2(4.0, 0.0)), 3.0);
    assert_relative_eq!(circle.distance_to_point(vec2(3.0, 0.0)), 2.0);
    assert_eq!(polygon.distance_to_point(vec2(0.5, 3.0)), 0.0);
    assert_relative_eq!(polygon.distance_to_point(vec2(3.0, 3.0)), 2.0);
}

#[test]
fn test_ellipse_distance_converges_on_axes() {
    let ellipse = Ellipse::new(vec2(0.0, 0.0), vec2(3.0, 1.0));

    assert_relative_eq!(ellipse.distance_to_point(vec2(0.0, 4.0)), 3.0, epsilon = 1e-6);
    assert_relative_eq!(ellipse.distance_to_point(vec2(5.0, 0.0)), 2.0, epsilon = 1e-6);
    assert_eq!(ellipse.distance_to_point(vec2(1.0, 0.5)), 0.0);
}

#[test]
fn test_arc_distance_and_endpoints() {
    let arc = Arc::new(vec2(0.0, 0.0), 2.0, 0.0, FRAC_PI_2);

    assert_relative_eq!(arc.start_point().x, 2.0);
    assert_relative_eq!(arc.end_point().y, 2.0);
    assert_relative_eq!(arc.arc_length(), PI);
    assert_relative_eq!(arc.distance_to_point(vec2(3.0, 3.0)), 18f64.sqrt() - 2.0);
    // Outside the sweep the nearest point is an endpoint
    assert_relative_eq!(arc.distance_to_point(vec2(2.0, -1.0)), 1.0);
    assert!(arc.contains_point(vec2(2.0_f64.sqrt(), 2.0_f64.sqrt())));
    assert!(!arc.contains_point(vec2(-2.0, 0.0)));
}

#[test]
fn test_sector_membership() {
    let sector = Sector::new(vec2(0.0, 0.0), 2.0, 0.0, FRAC_PI_2);

    assert!(sector.contains_point(vec2(1.0, 1.0)));
    assert!(sector.contains_point(vec2(0.0, 0.0)));
    assert!(sector.contains_point(vec2(1.0, 0.0)));
    assert!(!sector.contains_point(vec2(-1.0, -1.0)));
    assert!(!sector.contains_point(vec2(2.0, 2.0)));

    let clockwise = Sector::new(vec2(0.0, 0.0), 2.0, 0.0, -FRAC_PI_2);
    assert!(clockwise.contains_point(vec2(1.0, -1.0)));
    assert!(!clockwise.contains_point(vec2(1.0, 1.0)));
}

#[test]
fn test_spline_passes_through_end_control_points() {
    let spline = Spline::new([
        vec2(0.0, 0.0),
        vec2(1.0, 2.0),
        vec2(2.0, 2.0),
        vec2(3.0, 0.0),
    ]);

    assert_eq!(spline.points().len(), SPLINE_SEGMENTS + 1);
    assert!(spline.contains_point(vec2(0.0, 0.0)));
    assert!(spline.contains_point(vec2(3.0, 0.0)));
    assert!(!spline.contains_point(vec2(1.5, 0.0)));
    assert_relative_eq!(spline.position().x, 1.5);
    assert_relative_eq!(spline.position().y, 1.0);
}

#[test]
fn test_bounds() {
    let arc = Shape::from(Arc::new(vec2(0.0, 0.0), 1.0, 0.0, FRAC_PI_2));
    let (min, max) = arc.bounds();
    assert_relative_eq!(min.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(min.y, 0.0, epsilon = 1e-12);
    assert_relative_eq!(max.x, 1.0);
    assert_relative_eq!(max.y, 1.0);

    let line = Shape::from(Line::new(vec2(3.0, -1.0), vec2(-1.0, 2.0)));
    assert_eq!(line.bounds(), (vec2(-1.0, -1.0), vec2(3.0, 2.0)));

    let circle = Shape::from(Circle::new(vec2(1.0, 1.0), 2.0));
    assert_eq!(circle.bounds(), (vec2(-1.0, -1.0), vec2(3.0, 3.0)));
}

#[test]
fn test_center_distance() {
    let a = Shape::from(Circle::new(vec2(0.0, 0.0), 1.0));
    let b = Shape::from(Rectangle::new(vec2(3.0, 4.0), vec2(1.0, 1.0)));

    assert_relative_eq!(a.distance(&b), 5.0);
}

#[test]
fn test_color_round_trips_through_shape() {
    let mut shape = Shape::from(Circle::new(vec2(0.0, 0.0), 1.0));
    assert_eq!(shape.color(), Color::BLACK);

    let red = Color::rgb(255, 0, 0);
    shape.set_color(red);
    assert_eq!(shape.color(), red);
    assert_eq!(red.to_unit(), [1.0, 0.0, 0.0, 1.0]);
}

#[test]
fn test_draw_emits_matching_commands() {
    let mut surface = RecordingSurface::new();
    let shapes = [
        Shape::from(Point::from_coords(1.0, 1.0)),
        Shape::from(Rectangle::new(vec2(0.0, 0.0), vec2(1.0, 2.0))),
        Shape::from(Ellipse::new(vec2(0.0, 0.0), vec2(2.0, 1.0))),
        Shape::from(Arc::new(vec2(0.0, 0.0), 1.0, 0.0, PI)),
        Shape::from(l_shape()),
        Shape::from(Sector::new(vec2(0.0, 0.0), 1.0, 0.0, PI)),
    ];
    for shape in &shapes {
        shape.draw(&mut surface, Color::WHITE, true);
    }

    let commands = surface.commands();
    assert_eq!(commands.len(), shapes.len());
    assert_eq!(
        commands[0],
        DrawCommand::Point {
            at: vec2(1.0, 1.0),
            color: Color::WHITE
        }
    );
    assert_eq!(
        commands[1],
        DrawCommand::Rectangle {
            min: vec2(-1.0, -2.0),
            max: vec2(1.0, 2.0),
            color: Color::WHITE,
            filled: true,
        }
    );
    assert!(matches!(commands[2], DrawCommand::Ellipse { filled: true, .. }));
    assert!(matches!(commands[3], DrawCommand::Arc { radius, .. } if radius == 1.0));
    assert!(matches!(&commands[4], DrawCommand::Polygon { vertices, .. } if vertices.len() == 6));
    assert!(matches!(commands[5], DrawCommand::Sector { filled: true, .. }));

    surface.clear();
    assert!(surface.commands().is_empty());
}

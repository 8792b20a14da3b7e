use crate::color::Color;
use crate::curve::{flatten_bezier, polyline_distance, SPLINE_SEGMENTS};
use crate::draw::Surface;
use crate::segment::{bounding_box, mean};
use crate::shapes::rescale_points;
use crate::vector::{Vector2D, EPSILON};

/// Cubic Bézier curve over four control points
///
/// Queries run against a cached polyline of `SPLINE_SEGMENTS` segments,
/// rebuilt whenever a control point moves.
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    control_points: [Vector2D; 4],
    flattened: Vec<Vector2D>,
    position: Vector2D,
    half_extents: Vector2D,
    color: Color,
}

impl Spline {
    pub fn new(control_points: [Vector2D; 4]) -> Self {
        let mut spline = Self {
            control_points,
            flattened: Vec::new(),
            position: Vector2D::zeros(),
            half_extents: Vector2D::zeros(),
            color: Color::BLACK,
        };
        spline.recalculate();
        spline
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn control_points(&self) -> &[Vector2D; 4] {
        &self.control_points
    }

    /// Polyline approximation, endpoints included
    pub fn points(&self) -> &[Vector2D] {
        &self.flattened
    }

    pub fn position(&self) -> Vector2D {
        self.position
    }

    pub fn half_extents(&self) -> Vector2D {
        self.half_extents
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn area(&self) -> f64 {
        0.0
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_control_points(&mut self, control_points: [Vector2D; 4]) {
        self.control_points = control_points;
        self.recalculate();
    }

    pub fn set_position(&mut self, position: Vector2D) {
        let delta = position - self.position;
        self.control_points.iter_mut().for_each(|p| *p += delta);
        self.recalculate();
    }

    pub fn set_half_extents(&mut self, half_extents: Vector2D) {
        rescale_points(
            &mut self.control_points,
            self.position,
            self.half_extents,
            half_extents,
        );
        self.recalculate();
    }

    fn recalculate(&mut self) {
        self.flattened = flatten_bezier(&self.control_points, SPLINE_SEGMENTS);
        self.position = mean(&self.control_points);
        let (min, max) = bounding_box(&self.control_points);
        self.half_extents = (max - min) / 2.0;
    }

    pub fn contains_point(&self, point: Vector2D) -> bool {
        self.distance_to_point(point) <= EPSILON
    }

    pub fn distance_to_point(&self, point: Vector2D) -> f64 {
        polyline_distance(&self.flattened, point)
    }

    pub fn draw(&self, surface: &mut dyn Surface, color: Color) {
        surface.draw_spline(self.control_points, color);
    }
}

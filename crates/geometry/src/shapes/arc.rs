use crate::color::Color;
use crate::curve::{arc_distance, arc_endpoints, arc_extremes};
use crate::draw::Surface;
use crate::vector::{Vector2D, EPSILON};

/// Circular arc: a curve, not a region
///
/// `start` and `span` are radians; a negative span sweeps clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    position: Vector2D,
    radius: f64,
    start: f64,
    span: f64,
    color: Color,
}

impl Arc {
    pub fn new(position: Vector2D, radius: f64, start: f64, span: f64) -> Self {
        Self {
            position,
            radius: radius.abs(),
            start,
            span,
            color: Color::BLACK,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn position(&self) -> Vector2D {
        self.position
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn start_angle(&self) -> f64 {
        self.start
    }

    pub fn span(&self) -> f64 {
        self.span
    }

    pub fn half_extents(&self) -> Vector2D {
        Vector2D::new(self.radius, self.radius)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn area(&self) -> f64 {
        0.0
    }

    pub fn start_point(&self) -> Vector2D {
        arc_endpoints(self.position, self.radius, self.start, self.span)[0]
    }

    pub fn end_point(&self) -> Vector2D {
        arc_endpoints(self.position, self.radius, self.start, self.span)[1]
    }

    pub fn arc_length(&self) -> f64 {
        self.radius * self.span.abs()
    }

    /// `(center, radius, start, span)`, the form the curve helpers take
    pub fn params(&self) -> (Vector2D, f64, f64, f64) {
        (self.position, self.radius, self.start, self.span)
    }

    /// Endpoints and swept axis extremes
    pub fn extremes(&self) -> Vec<Vector2D> {
        arc_extremes(self.position, self.radius, self.start, self.span)
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_position(&mut self, position: Vector2D) {
        self.position = position;
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.abs();
    }

    pub fn set_angles(&mut self, start: f64, span: f64) {
        self.start = start;
        self.span = span;
    }

    pub fn set_half_extents(&mut self, half_extents: Vector2D) {
        self.set_radius(half_extents.x.abs().max(half_extents.y.abs()));
    }

    pub fn contains_point(&self, point: Vector2D) -> bool {
        self.distance_to_point(point) <= EPSILON
    }

    pub fn distance_to_point(&self, point: Vector2D) -> f64 {
        arc_distance(self.position, self.radius, self.start, self.span, point)
    }

    pub fn draw(&self, surface: &mut dyn Surface, color: Color) {
        surface.draw_arc(self.position, self.radius, self.start, self.span, color);
    }
}

use std::f64::consts::{PI, TAU};

use crate::color::Color;
use crate::curve::{angle_in_span, angle_of, arc_distance, arc_endpoints, arc_extremes};
use crate::draw::Surface;
use crate::segment::segment_distance;
use crate::vector::{Vector2D, EPSILON};

/// Pie slice: the region between two radii and the arc joining them
#[derive(Debug, Clone, PartialEq)]
pub struct Sector {
    position: Vector2D,
    radius: f64,
    start: f64,
    span: f64,
    color: Color,
    area: f64,
}

impl Sector {
    pub fn new(position: Vector2D, radius: f64, start: f64, span: f64) -> Self {
        let mut sector = Self {
            position,
            radius: radius.abs(),
            start,
            span,
            color: Color::BLACK,
            area: 0.0,
        };
        sector.calculate_area();
        sector
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
        self.area
    }

    /// `(center, radius, start, span)` of the bounding arc
    pub fn arc_params(&self) -> (Vector2D, f64, f64, f64) {
        (self.position, self.radius, self.start, self.span)
    }

    /// Arc endpoints, start first
    pub fn endpoints(&self) -> [Vector2D; 2] {
        arc_endpoints(self.position, self.radius, self.start, self.span)
    }

    /// The two straight edges, each running from the center outward
    pub fn radial_edges(&self) -> [(Vector2D, Vector2D); 2] {
        let [a, b] = self.endpoints();
        [(self.position, a), (self.position, b)]
    }

    /// Center plus the arc's endpoints and swept axis extremes
    pub fn extremes(&self) -> Vec<Vector2D> {
        let mut points = arc_extremes(self.position, self.radius, self.start, self.span);
        points.push(self.position);
        points
    }

    pub fn is_full_circle(&self) -> bool {
        self.span.abs() >= TAU
    }

    /// A sector is convex up to a half-disk
    pub fn is_convex(&self) -> bool {
        self.span.abs() <= PI || self.is_full_circle()
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_position(&mut self, position: Vector2D) {
        self.position = position;
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.abs();
        self.calculate_area();
    }

    pub fn set_angles(&mut self, start: f64, span: f64) {
        self.start = start;
        self.span = span;
        self.calculate_area();
    }

    pub fn set_half_extents(&mut self, half_extents: Vector2D) {
        self.set_radius(half_extents.x.abs().max(half_extents.y.abs()));
    }

    fn calculate_area(&mut self) {
        self.area = 0.5 * self.radius * self.radius * self.span.abs().min(TAU);
    }

    pub fn contains_point(&self, point: Vector2D) -> bool {
        let distance = (point - self.position).magnitude();
        if distance > self.radius {
            return false;
        }
        if distance <= EPSILON || self.is_full_circle() {
            return true;
        }
        angle_in_span(angle_of(self.position, point), self.start, self.span)
            || self
                .radial_edges()
                .iter()
                .any(|&(a, b)| segment_distance(a, b, point) <= EPSILON)
    }

    /// Zero inside the sector
    pub fn distance_to_point(&self, point: Vector2D) -> f64 {
        if self.contains_point(point) {
            return 0.0;
        }
        let to_arc = arc_distance(self.position, self.radius, self.start, self.span, point);
        self.radial_edges()
            .iter()
            .map(|&(a, b)| segment_distance(a, b, point))
            .fold(to_arc, f64::min)
    }

    pub fn draw(&self, surface: &mut dyn Surface, color: Color, filled: bool) {
        surface.draw_sector(
            self.position,
            self.radius,
            self.start,
            self.span,
            color,
            filled,
        );
    }
}

use crate::color::Color;
use crate::draw::Surface;
use crate::segment::{bounding_box, edges, mean, point_in_polygon, segment_distance, signed_area};
use crate::shapes::{rescale_points, Line};
use crate::vector::Vector2D;

/// Triangle given by three vertices
///
/// The position is the centroid and the half extents are half of the
/// bounding box, both recomputed whenever a vertex moves.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    vertices: [Vector2D; 3],
    position: Vector2D,
    half_extents: Vector2D,
    color: Color,
    area: f64,
}

impl Triangle {
    pub fn new(a: Vector2D, b: Vector2D, c: Vector2D) -> Self {
        let mut triangle = Self {
            vertices: [a, b, c],
            position: Vector2D::zeros(),
            half_extents: Vector2D::zeros(),
            color: Color::BLACK,
            area: 0.0,
        };
        triangle.recalculate();
        triangle
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn vertices(&self) -> &[Vector2D; 3] {
        &self.vertices
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
        self.area
    }

    pub fn line_ab(&self) -> Line {
        Line::new(self.vertices[0], self.vertices[1])
    }

    pub fn line_bc(&self) -> Line {
        Line::new(self.vertices[1], self.vertices[2])
    }

    pub fn line_ca(&self) -> Line {
        Line::new(self.vertices[2], self.vertices[0])
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_vertices(&mut self, a: Vector2D, b: Vector2D, c: Vector2D) {
        self.vertices = [a, b, c];
        self.recalculate();
    }

    /// Translates every vertex so the centroid lands on `position`
    pub fn set_position(&mut self, position: Vector2D) {
        let delta = position - self.position;
        self.vertices.iter_mut().for_each(|v| *v += delta);
        self.recalculate();
    }

    /// Scales the vertices about the centroid to the requested bounding half extents
    pub fn set_half_extents(&mut self, half_extents: Vector2D) {
        rescale_points(
            &mut self.vertices,
            self.position,
            self.half_extents,
            half_extents,
        );
        self.recalculate();
    }

    fn recalculate(&mut self) {
        self.position = mean(&self.vertices);
        let (min, max) = bounding_box(&self.vertices);
        self.half_extents = (max - min) / 2.0;
        self.area = signed_area(&self.vertices).abs();
    }

    pub fn contains_point(&self, point: Vector2D) -> bool {
        point_in_polygon(&self.vertices, point)
    }

    /// Zero inside the triangle
    pub fn distance_to_point(&self, point: Vector2D) -> f64 {
        if self.contains_point(point) {
            return 0.0;
        }
        edges(&self.vertices)
            .map(|(a, b)| segment_distance(a, b, point))
            .fold(f64::INFINITY, f64::min)
    }

    pub fn draw(&self, surface: &mut dyn Surface, color: Color, filled: bool) {
        surface.draw_triangle(self.vertices, color, filled);
    }
}

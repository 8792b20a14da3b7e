use crate::color::Color;
use crate::draw::Surface;
use crate::segment::{bounding_box, edges, mean, point_in_polygon, segment_distance, signed_area};
use crate::shapes::{rescale_points, Line};
use crate::vector::Vector2D;

/// Simple polygon over an ordered vertex ring
///
/// Concave rings are fine; self-intersecting rings give even-odd results.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vector2D>,
    position: Vector2D,
    half_extents: Vector2D,
    color: Color,
    area: f64,
}

impl Polygon {
    pub fn new(vertices: Vec<Vector2D>) -> Self {
        let mut polygon = Self {
            vertices,
            position: Vector2D::zeros(),
            half_extents: Vector2D::zeros(),
            color: Color::BLACK,
            area: 0.0,
        };
        polygon.recalculate();
        polygon
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn vertices(&self) -> &[Vector2D] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
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

    /// Edges as lines, closing back to the first vertex
    pub fn edges(&self) -> Vec<Line> {
        edges(&self.vertices)
            .map(|(a, b)| Line::new(a, b))
            .collect()
    }

    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        let mut sign = 0.0;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let c = self.vertices[(i + 2) % n];
            let turn = (b - a).perp(&(c - b));
            if turn != 0.0 {
                if sign != 0.0 && turn.signum() != sign {
                    return false;
                }
                sign = turn.signum();
            }
        }
        true
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_vertices(&mut self, vertices: Vec<Vector2D>) {
        self.vertices = vertices;
        self.recalculate();
    }

    /// Translates every vertex so the vertex mean lands on `position`
    pub fn set_position(&mut self, position: Vector2D) {
        let delta = position - self.position;
        self.vertices.iter_mut().for_each(|v| *v += delta);
        self.recalculate();
    }

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

    /// Zero inside the polygon
    pub fn distance_to_point(&self, point: Vector2D) -> f64 {
        if self.contains_point(point) {
            return 0.0;
        }
        edges(&self.vertices)
            .map(|(a, b)| segment_distance(a, b, point))
            .fold(f64::INFINITY, f64::min)
    }

    pub fn draw(&self, surface: &mut dyn Surface, color: Color, filled: bool) {
        surface.draw_polygon(&self.vertices, color, filled);
    }
}

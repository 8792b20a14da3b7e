use crate::color::Color;
use crate::draw::Surface;
use crate::vector::{Vector2D, EPSILON};

/// A single location
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    position: Vector2D,
    color: Color,
}

impl Point {
    pub fn new(position: Vector2D) -> Self {
        Self {
            position,
            color: Color::BLACK,
        }
    }

    pub fn from_coords(x: f64, y: f64) -> Self {
        Self::new(Vector2D::new(x, y))
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn position(&self) -> Vector2D {
        self.position
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_position(&mut self, position: Vector2D) {
        self.position = position;
    }

    pub fn distance_to_point(&self, point: Vector2D) -> f64 {
        (self.position - point).magnitude()
    }

    /// Two points coincide when they are within `EPSILON` of each other
    pub fn coincides_with(&self, point: Vector2D) -> bool {
        self.distance_to_point(point) <= EPSILON
    }

    pub fn draw(&self, surface: &mut dyn Surface, color: Color) {
        surface.draw_point(self.position, color);
    }
}

impl From<Vector2D> for Point {
    fn from(position: Vector2D) -> Self {
        Point::new(position)
    }
}

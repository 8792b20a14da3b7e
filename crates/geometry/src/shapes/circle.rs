use std::f64::consts::PI;

use crate::color::Color;
use crate::draw::Surface;
use crate::vector::Vector2D;

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    position: Vector2D,
    radius: f64,
    color: Color,
    area: f64,
}

impl Circle {
    pub fn new(position: Vector2D, radius: f64) -> Self {
        let mut circle = Self {
            position,
            radius: radius.abs(),
            color: Color::BLACK,
            area: 0.0,
        };
        circle.calculate_area();
        circle
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

    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
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

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
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

    /// A circle keeps equal extents, so the larger request wins
    pub fn set_half_extents(&mut self, half_extents: Vector2D) {
        self.set_radius(half_extents.x.abs().max(half_extents.y.abs()));
    }

    fn calculate_area(&mut self) {
        self.area = PI * self.radius * self.radius;
    }

    pub fn contains_point(&self, point: Vector2D) -> bool {
        (point - self.position).magnitude_squared() <= self.radius * self.radius
    }

    /// Zero inside the disk
    pub fn distance_to_point(&self, point: Vector2D) -> f64 {
        ((point - self.position).magnitude() - self.radius).max(0.0)
    }

    pub fn draw(&self, surface: &mut dyn Surface, color: Color, filled: bool) {
        surface.draw_circle(self.position, self.radius, color, filled);
    }
}

use std::f64::consts::{FRAC_1_SQRT_2, PI};

use crate::color::Color;
use crate::draw::Surface;
use crate::vector::{Vector2D, EPSILON};

/// Axis-aligned ellipse; the half extents are the two radii
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    position: Vector2D,
    radii: Vector2D,
    color: Color,
    area: f64,
}

impl Ellipse {
    pub fn new(position: Vector2D, radii: Vector2D) -> Self {
        let mut ellipse = Self {
            position,
            radii: radii.abs(),
            color: Color::BLACK,
            area: 0.0,
        };
        ellipse.calculate_area();
        ellipse
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn position(&self) -> Vector2D {
        self.position
    }

    pub fn half_extents(&self) -> Vector2D {
        self.radii
    }

    /// Horizontal radius
    pub fn radius_width(&self) -> f64 {
        self.radii.x
    }

    /// Vertical radius
    pub fn radius_height(&self) -> f64 {
        self.radii.y
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_position(&mut self, position: Vector2D) {
        self.position = position;
    }

    pub fn set_half_extents(&mut self, radii: Vector2D) {
        self.radii = radii.abs();
        self.calculate_area();
    }

    pub fn set_half_width(&mut self, radius: f64) {
        self.set_half_extents(Vector2D::new(radius, self.radii.y));
    }

    pub fn set_half_height(&mut self, radius: f64) {
        self.set_half_extents(Vector2D::new(self.radii.x, radius));
    }

    fn calculate_area(&mut self) {
        self.area = PI * self.radii.x * self.radii.y;
    }

    /// True when both radii are non-zero
    pub fn is_proper(&self) -> bool {
        self.radii.x > 0.0 && self.radii.y > 0.0
    }

    /// Maps a point into the space where this ellipse is the unit circle
    ///
    /// Axis scaling keeps lines straight and rectangles axis-aligned, which
    /// turns several ellipse queries into exact circle queries. Only valid
    /// when `is_proper`.
    pub fn to_unit_space(&self, point: Vector2D) -> Vector2D {
        (point - self.position).component_div(&self.radii)
    }

    pub fn contains_point(&self, point: Vector2D) -> bool {
        if !self.is_proper() {
            // Degenerate ellipse collapses to its longer axis
            let offset = point - self.position;
            return offset.x.abs() <= self.radii.x + EPSILON
                && offset.y.abs() <= self.radii.y + EPSILON;
        }
        self.to_unit_space(point).magnitude_squared() <= 1.0
    }

    /// Zero inside the ellipse
    pub fn distance_to_point(&self, point: Vector2D) -> f64 {
        if self.contains_point(point) {
            return 0.0;
        }
        (self.closest_boundary_point(point) - point).magnitude()
    }

    /// Nearest point on the outline, by fixed-point iteration on the
    /// evolute of the first quadrant
    pub fn closest_boundary_point(&self, point: Vector2D) -> Vector2D {
        let (a, b) = (self.radii.x, self.radii.y);
        let offset = point - self.position;
        if a == 0.0 || b == 0.0 {
            return self.position + Vector2D::new(offset.x.clamp(-a, a), offset.y.clamp(-b, b));
        }

        let (px, py) = (offset.x.abs(), offset.y.abs());
        let (mut tx, mut ty) = (FRAC_1_SQRT_2, FRAC_1_SQRT_2);

        for _ in 0..4 {
            let (x, y) = (a * tx, b * ty);
            let ex = (a * a - b * b) * tx.powi(3) / a;
            let ey = (b * b - a * a) * ty.powi(3) / b;
            let (rx, ry) = (x - ex, y - ey);
            let (qx, qy) = (px - ex, py - ey);
            let r = rx.hypot(ry);
            let q = qx.hypot(qy);
            if q == 0.0 {
                break;
            }
            tx = ((qx * r / q + ex) / a).clamp(0.0, 1.0);
            ty = ((qy * r / q + ey) / b).clamp(0.0, 1.0);
            let t = tx.hypot(ty);
            tx /= t;
            ty /= t;
        }

        self.position + Vector2D::new((a * tx).copysign(offset.x), (b * ty).copysign(offset.y))
    }

    pub fn draw(&self, surface: &mut dyn Surface, color: Color, filled: bool) {
        surface.draw_ellipse(self.position, self.radii, color, filled);
    }
}

use crate::color::Color;
use crate::draw::Surface;
use crate::shapes::Line;
use crate::vector::Vector2D;

/// Axis-aligned rectangle described by its center and half extents
///
/// `y` grows downward, so `top` is the smaller `y` bound.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    position: Vector2D,
    half_extents: Vector2D,
    color: Color,
    area: f64,
}

impl Rectangle {
    /// Negative half extents are taken by magnitude
    pub fn new(position: Vector2D, half_extents: Vector2D) -> Self {
        let mut rectangle = Self {
            position,
            half_extents: half_extents.abs(),
            color: Color::BLACK,
            area: 0.0,
        };
        rectangle.calculate_area();
        rectangle
    }

    /// Rectangle spanning two opposite corners
    pub fn from_corners(a: Vector2D, b: Vector2D) -> Self {
        Self::new((a + b) / 2.0, (b - a) / 2.0)
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn position(&self) -> Vector2D {
        self.position
    }

    pub fn half_extents(&self) -> Vector2D {
        self.half_extents
    }

    pub fn half_width(&self) -> f64 {
        self.half_extents.x
    }

    pub fn half_height(&self) -> f64 {
        self.half_extents.y
    }

    pub fn width(&self) -> f64 {
        self.half_extents.x * 2.0
    }

    pub fn height(&self) -> f64 {
        self.half_extents.y * 2.0
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn min(&self) -> Vector2D {
        self.position - self.half_extents
    }

    pub fn max(&self) -> Vector2D {
        self.position + self.half_extents
    }

    /// Corners in ring order: top-left, top-right, bottom-right, bottom-left
    pub fn corners(&self) -> [Vector2D; 4] {
        let (min, max) = (self.min(), self.max());
        [
            min,
            Vector2D::new(max.x, min.y),
            max,
            Vector2D::new(min.x, max.y),
        ]
    }

    pub fn top(&self) -> Line {
        let [tl, tr, _, _] = self.corners();
        Line::new(tl, tr)
    }

    pub fn right(&self) -> Line {
        let [_, tr, br, _] = self.corners();
        Line::new(tr, br)
    }

    pub fn bottom(&self) -> Line {
        let [_, _, br, bl] = self.corners();
        Line::new(br, bl)
    }

    pub fn left(&self) -> Line {
        let [tl, _, _, bl] = self.corners();
        Line::new(bl, tl)
    }

    pub fn edges(&self) -> [Line; 4] {
        [self.top(), self.left(), self.right(), self.bottom()]
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_position(&mut self, position: Vector2D) {
        self.position = position;
    }

    pub fn set_half_extents(&mut self, half_extents: Vector2D) {
        self.half_extents = half_extents.abs();
        self.calculate_area();
    }

    pub fn set_half_width(&mut self, half_width: f64) {
        self.set_half_extents(Vector2D::new(half_width, self.half_extents.y));
    }

    pub fn set_half_height(&mut self, half_height: f64) {
        self.set_half_extents(Vector2D::new(self.half_extents.x, half_height));
    }

    fn calculate_area(&mut self) {
        self.area = self.width() * self.height();
    }

    /// Inclusive of the border
    pub fn contains_point(&self, point: Vector2D) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Point of the rectangle nearest to `point`; `point` itself when inside
    pub fn clamp_point(&self, point: Vector2D) -> Vector2D {
        let (min, max) = (self.min(), self.max());
        Vector2D::new(point.x.clamp(min.x, max.x), point.y.clamp(min.y, max.y))
    }

    /// Zero inside the rectangle
    pub fn distance_to_point(&self, point: Vector2D) -> f64 {
        (self.clamp_point(point) - point).magnitude()
    }

    pub fn draw(&self, surface: &mut dyn Surface, color: Color, filled: bool) {
        surface.draw_rectangle(self.min(), self.max(), color, filled);
    }
}

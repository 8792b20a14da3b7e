//! Line segment
//!
//! A line is stored the same way as every other shape, as a center and a
//! half-extent vector; its endpoints are `position - half_extents` and
//! `position + half_extents`. The slope and squared length are derived from
//! those two fields and refreshed by every mutator.

use std::cmp::Ordering;

use crate::color::Color;
use crate::draw::Surface;
use crate::segment::{line_distance, segment_intersection, LineIntersection};
use crate::shapes::{Circle, Ellipse, Rectangle};
use crate::vector::{is_equal, Vector2D, VectorExt, EPSILON};

/// A line segment between two endpoints
///
/// # Examples
///
/// ```
/// use geometry::segment::LineIntersection;
/// use geometry::shapes::Line;
/// use geometry::vector::vec2;
///
/// let horizontal = Line::new(vec2(0.0, 0.0), vec2(10.0, 0.0));
/// let vertical = Line::new(vec2(5.0, -5.0), vec2(5.0, 5.0));
///
/// let (kind, at) = horizontal.intersection(&vertical);
/// assert_eq!(kind, LineIntersection::One);
/// assert_eq!(at, Some(vec2(5.0, 0.0)));
/// ```
#[derive(Debug, Clone)]
pub struct Line {
    position: Vector2D,
    half_extents: Vector2D,
    color: Color,
    slope: Vector2D,
    length_squared: f64,
}

impl Line {
    /// Creates a line from its two endpoints, with the default black stroke
    pub fn new(one: Vector2D, two: Vector2D) -> Self {
        let mut line = Self {
            position: (one + two) / 2.0,
            half_extents: (two - one) / 2.0,
            color: Color::BLACK,
            slope: Vector2D::zeros(),
            length_squared: 0.0,
        };
        line.recalculate();
        line
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Vector2D::new(x1, y1), Vector2D::new(x2, y2))
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn point_one(&self) -> Vector2D {
        self.position - self.half_extents
    }

    pub fn point_two(&self) -> Vector2D {
        self.position + self.half_extents
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

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Endpoint two minus endpoint one
    pub fn slope(&self) -> Vector2D {
        self.slope
    }

    pub fn length(&self) -> f64 {
        self.length_squared.sqrt()
    }

    pub fn length_squared(&self) -> f64 {
        self.length_squared
    }

    /// A line has no area
    pub fn area(&self) -> f64 {
        0.0
    }

    pub fn perpendicular_slope(&self) -> Vector2D {
        self.slope.perpendicular()
    }

    /// Unit normal of the direction from endpoint one to endpoint two
    pub fn normal(&self) -> Vector2D {
        self.slope.normal()
    }

    /// Measured on the unit direction, so short lines classify like long ones
    pub fn is_vertical(&self) -> bool {
        is_equal(self.slope.normalize_or_zero().x, 0.0)
    }

    pub fn is_horizontal(&self) -> bool {
        !self.is_vertical() && is_equal(self.slope.normalize_or_zero().y, 0.0)
    }

    /// Moves the line so its midpoint sits at `position`
    pub fn set_position(&mut self, position: Vector2D) {
        self.position = position;
        self.recalculate();
    }

    /// Replaces both endpoints
    pub fn set_points(&mut self, one: Vector2D, two: Vector2D) {
        self.position = (one + two) / 2.0;
        self.half_extents = (two - one) / 2.0;
        self.recalculate();
    }

    fn recalculate(&mut self) {
        self.slope = self.point_two() - self.point_one();
        self.length_squared = self.slope.magnitude_squared();
    }

    /// Classifies how this segment meets `other`
    ///
    /// Returns the intersection point when the result is `One`.
    pub fn intersection(&self, other: &Line) -> (LineIntersection, Option<Vector2D>) {
        segment_intersection(
            self.point_one(),
            self.point_two(),
            other.point_one(),
            other.point_two(),
        )
    }

    /// `One` and `Colinear` count as intersecting; `None` and `Parallel` do not
    pub fn intersects_line(&self, other: &Line) -> bool {
        self.intersection(other).0.is_hit()
    }

    /// Perpendicular distance from `point` to the infinite line through both endpoints
    ///
    /// The segment is not clamped: points beyond either endpoint measure
    /// against the extension of the line.
    pub fn distance_to_point(&self, point: Vector2D) -> f64 {
        line_distance(self.point_one(), self.point_two(), point)
    }

    pub fn contains_point(&self, point: Vector2D) -> bool {
        self.distance_to_point(point) <= EPSILON
    }

    pub fn contains_line(&self, other: &Line) -> bool {
        self == other
    }

    pub fn intersects_rectangle(&self, rectangle: &Rectangle) -> bool {
        let (one, two) = (self.point_one(), self.point_two());
        let (min, max) = (rectangle.min(), rectangle.max());

        let overlaps = |lo_a: f64, hi_a: f64, lo_b: f64, hi_b: f64| {
            lo_a.min(hi_a) <= hi_b && lo_a.max(hi_a) >= lo_b
        };

        if self.is_vertical() {
            return (min.x..=max.x).contains(&self.position.x)
                && overlaps(one.y, two.y, min.y, max.y);
        }
        if self.is_horizontal() {
            return (min.y..=max.y).contains(&self.position.y)
                && overlaps(one.x, two.x, min.x, max.x);
        }

        let strictly_inside =
            |p: Vector2D| p.x > min.x && p.x < max.x && p.y > min.y && p.y < max.y;
        if strictly_inside(one) || strictly_inside(two) {
            return true;
        }

        rectangle
            .edges()
            .iter()
            .any(|edge| self.intersects_line(edge))
    }

    /// True when either endpoint is strictly inside the circle, or the
    /// infinite line passes within the radius of its center
    pub fn intersects_circle(&self, circle: &Circle) -> bool {
        let r2 = circle.radius() * circle.radius();
        let center = circle.position();
        if (self.point_one() - center).magnitude_squared() < r2
            || (self.point_two() - center).magnitude_squared() < r2
        {
            return true;
        }
        self.distance_to_point(center) <= circle.radius()
    }

    pub fn intersects_ellipse(&self, ellipse: &Ellipse) -> bool {
        let distance = self.distance_to_point(ellipse.position());
        distance <= ellipse.radius_width() && distance <= ellipse.radius_height()
    }

    pub fn draw(&self, surface: &mut dyn Surface, color: Color) {
        surface.draw_line(self.point_one(), self.point_two(), color);
    }
}

impl Default for Line {
    fn default() -> Self {
        Line::new(Vector2D::zeros(), Vector2D::zeros())
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.half_extents == other.half_extents
    }
}

/// Distinct lines order by squared length. Distinct lines of equal length
/// are unordered.
impl PartialOrd for Line {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match self.length_squared.partial_cmp(&other.length_squared)? {
            Ordering::Equal => None,
            ordering => Some(ordering),
        }
    }
}

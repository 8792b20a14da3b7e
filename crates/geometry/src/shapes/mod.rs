//! Shape primitives
//!
//! `Shape` is a closed sum type over every primitive the engine knows about.
//! Each variant owns its own geometry and keeps its derived state (area,
//! centroid, cached slopes and polylines) current through its mutators; the
//! enum forwards the shared accessors and hands pairwise queries to the
//! dispatch tables in `intersection`.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::draw::Surface;
use crate::intersection;
use crate::segment::bounding_box;
use crate::vector::Vector2D;

pub mod arc;
pub mod circle;
pub mod ellipse;
pub mod line;
pub mod point;
pub mod polygon;
pub mod rectangle;
pub mod sector;
pub mod spline;
pub mod triangle;

#[cfg(test)]
mod shape_test;

pub use arc::Arc;
pub use circle::Circle;
pub use ellipse::Ellipse;
pub use line::Line;
pub use point::Point;
pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use sector::Sector;
pub use spline::Spline;
pub use triangle::Triangle;

/// Type tag for a shape variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    Point,
    Line,
    Rectangle,
    Circle,
    Ellipse,
    Triangle,
    Arc,
    Polygon,
    Spline,
    Sector,
}

/// Any 2D primitive
///
/// # Examples
///
/// ```
/// use geometry::shapes::{Circle, Rectangle, Shape};
/// use geometry::vector::vec2;
///
/// let crate_box = Shape::from(Rectangle::new(vec2(0.0, 0.0), vec2(2.0, 1.0)));
/// let ball = Shape::from(Circle::new(vec2(2.5, 0.0), 1.0));
///
/// assert!(crate_box.intersects(&ball));
/// assert!(!crate_box.contains(&ball));
/// assert_eq!(crate_box.area(), 8.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point),
    Line(Line),
    Rectangle(Rectangle),
    Circle(Circle),
    Ellipse(Ellipse),
    Triangle(Triangle),
    Arc(Arc),
    Polygon(Polygon),
    Spline(Spline),
    Sector(Sector),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Arc(_) => ShapeKind::Arc,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Spline(_) => ShapeKind::Spline,
            Shape::Sector(_) => ShapeKind::Sector,
        }
    }

    /// Center of the shape
    pub fn position(&self) -> Vector2D {
        match self {
            Shape::Point(s) => s.position(),
            Shape::Line(s) => s.position(),
            Shape::Rectangle(s) => s.position(),
            Shape::Circle(s) => s.position(),
            Shape::Ellipse(s) => s.position(),
            Shape::Triangle(s) => s.position(),
            Shape::Arc(s) => s.position(),
            Shape::Polygon(s) => s.position(),
            Shape::Spline(s) => s.position(),
            Shape::Sector(s) => s.position(),
        }
    }

    pub fn x(&self) -> f64 {
        self.position().x
    }

    pub fn y(&self) -> f64 {
        self.position().y
    }

    pub fn half_extents(&self) -> Vector2D {
        match self {
            Shape::Point(_) => Vector2D::zeros(),
            Shape::Line(s) => s.half_extents(),
            Shape::Rectangle(s) => s.half_extents(),
            Shape::Circle(s) => s.half_extents(),
            Shape::Ellipse(s) => s.half_extents(),
            Shape::Triangle(s) => s.half_extents(),
            Shape::Arc(s) => s.half_extents(),
            Shape::Polygon(s) => s.half_extents(),
            Shape::Spline(s) => s.half_extents(),
            Shape::Sector(s) => s.half_extents(),
        }
    }

    pub fn half_width(&self) -> f64 {
        self.half_extents().x
    }

    pub fn half_height(&self) -> f64 {
        self.half_extents().y
    }

    pub fn color(&self) -> Color {
        match self {
            Shape::Point(s) => s.color(),
            Shape::Line(s) => s.color(),
            Shape::Rectangle(s) => s.color(),
            Shape::Circle(s) => s.color(),
            Shape::Ellipse(s) => s.color(),
            Shape::Triangle(s) => s.color(),
            Shape::Arc(s) => s.color(),
            Shape::Polygon(s) => s.color(),
            Shape::Spline(s) => s.color(),
            Shape::Sector(s) => s.color(),
        }
    }

    /// Enclosed area; curves and points have none
    pub fn area(&self) -> f64 {
        match self {
            Shape::Point(_) => 0.0,
            Shape::Line(s) => s.area(),
            Shape::Rectangle(s) => s.area(),
            Shape::Circle(s) => s.area(),
            Shape::Ellipse(s) => s.area(),
            Shape::Triangle(s) => s.area(),
            Shape::Arc(s) => s.area(),
            Shape::Polygon(s) => s.area(),
            Shape::Spline(s) => s.area(),
            Shape::Sector(s) => s.area(),
        }
    }

    /// Axis-aligned bounds `(min, max)`
    pub fn bounds(&self) -> (Vector2D, Vector2D) {
        match self {
            Shape::Point(s) => (s.position(), s.position()),
            Shape::Line(s) => bounding_box(&[s.point_one(), s.point_two()]),
            Shape::Rectangle(s) => (s.min(), s.max()),
            Shape::Circle(s) => (
                s.position() - s.half_extents(),
                s.position() + s.half_extents(),
            ),
            Shape::Ellipse(s) => (
                s.position() - s.half_extents(),
                s.position() + s.half_extents(),
            ),
            Shape::Triangle(s) => bounding_box(s.vertices()),
            Shape::Arc(s) => bounding_box(&s.extremes()),
            Shape::Polygon(s) => bounding_box(s.vertices()),
            Shape::Spline(s) => bounding_box(s.points()),
            Shape::Sector(s) => bounding_box(&s.extremes()),
        }
    }

    pub fn set_color(&mut self, color: Color) {
        match self {
            Shape::Point(s) => s.set_color(color),
            Shape::Line(s) => s.set_color(color),
            Shape::Rectangle(s) => s.set_color(color),
            Shape::Circle(s) => s.set_color(color),
            Shape::Ellipse(s) => s.set_color(color),
            Shape::Triangle(s) => s.set_color(color),
            Shape::Arc(s) => s.set_color(color),
            Shape::Polygon(s) => s.set_color(color),
            Shape::Spline(s) => s.set_color(color),
            Shape::Sector(s) => s.set_color(color),
        }
    }

    /// Moves the shape so its center lands on `position`
    pub fn set_position(&mut self, position: Vector2D) {
        match self {
            Shape::Point(s) => s.set_position(position),
            Shape::Line(s) => s.set_position(position),
            Shape::Rectangle(s) => s.set_position(position),
            Shape::Circle(s) => s.set_position(position),
            Shape::Ellipse(s) => s.set_position(position),
            Shape::Triangle(s) => s.set_position(position),
            Shape::Arc(s) => s.set_position(position),
            Shape::Polygon(s) => s.set_position(position),
            Shape::Spline(s) => s.set_position(position),
            Shape::Sector(s) => s.set_position(position),
        }
    }

    pub fn set_x(&mut self, x: f64) {
        self.set_position(Vector2D::new(x, self.y()));
    }

    pub fn set_y(&mut self, y: f64) {
        self.set_position(Vector2D::new(self.x(), y));
    }

    /// Resizes the shape
    ///
    /// Points and lines ignore this: a line's extents follow from its
    /// endpoints only. Round shapes take the larger component as radius.
    pub fn set_half_extents(&mut self, half_extents: Vector2D) {
        match self {
            Shape::Point(_) | Shape::Line(_) => {}
            Shape::Rectangle(s) => s.set_half_extents(half_extents),
            Shape::Circle(s) => s.set_half_extents(half_extents),
            Shape::Ellipse(s) => s.set_half_extents(half_extents),
            Shape::Triangle(s) => s.set_half_extents(half_extents),
            Shape::Arc(s) => s.set_half_extents(half_extents),
            Shape::Polygon(s) => s.set_half_extents(half_extents),
            Shape::Spline(s) => s.set_half_extents(half_extents),
            Shape::Sector(s) => s.set_half_extents(half_extents),
        }
    }

    pub fn set_half_width(&mut self, half_width: f64) {
        match self {
            Shape::Point(_) | Shape::Line(_) => {}
            Shape::Circle(s) => s.set_radius(half_width),
            Shape::Arc(s) => s.set_radius(half_width),
            Shape::Sector(s) => s.set_radius(half_width),
            _ => {
                let current = self.half_extents();
                self.set_half_extents(Vector2D::new(half_width, current.y));
            }
        }
    }

    pub fn set_half_height(&mut self, half_height: f64) {
        match self {
            Shape::Point(_) | Shape::Line(_) => {}
            Shape::Circle(s) => s.set_radius(half_height),
            Shape::Arc(s) => s.set_radius(half_height),
            Shape::Sector(s) => s.set_radius(half_height),
            _ => {
                let current = self.half_extents();
                self.set_half_extents(Vector2D::new(current.x, half_height));
            }
        }
    }

    /// Distance from `point` to the shape
    ///
    /// Regions report zero for interior points. Lines measure against their
    /// infinite extension.
    pub fn distance_to_point(&self, point: Vector2D) -> f64 {
        match self {
            Shape::Point(s) => s.distance_to_point(point),
            Shape::Line(s) => s.distance_to_point(point),
            Shape::Rectangle(s) => s.distance_to_point(point),
            Shape::Circle(s) => s.distance_to_point(point),
            Shape::Ellipse(s) => s.distance_to_point(point),
            Shape::Triangle(s) => s.distance_to_point(point),
            Shape::Arc(s) => s.distance_to_point(point),
            Shape::Polygon(s) => s.distance_to_point(point),
            Shape::Spline(s) => s.distance_to_point(point),
            Shape::Sector(s) => s.distance_to_point(point),
        }
    }

    /// Center-to-center distance
    pub fn distance(&self, other: &Shape) -> f64 {
        (self.position() - other.position()).magnitude()
    }

    /// True when the two shapes share at least one point
    ///
    /// Pairs without a dedicated test answer `false`; see
    /// `intersection::intersects` for the table.
    pub fn intersects(&self, other: &Shape) -> bool {
        intersection::intersects(self, other)
    }

    /// True when `other` lies entirely within this shape
    ///
    /// Pairs without a dedicated test answer `false`.
    pub fn contains(&self, other: &Shape) -> bool {
        intersection::contains(self, other)
    }

    /// Emits the shape onto `surface`; curves ignore `filled`
    pub fn draw(&self, surface: &mut dyn Surface, color: Color, filled: bool) {
        match self {
            Shape::Point(s) => s.draw(surface, color),
            Shape::Line(s) => s.draw(surface, color),
            Shape::Rectangle(s) => s.draw(surface, color, filled),
            Shape::Circle(s) => s.draw(surface, color, filled),
            Shape::Ellipse(s) => s.draw(surface, color, filled),
            Shape::Triangle(s) => s.draw(surface, color, filled),
            Shape::Arc(s) => s.draw(surface, color),
            Shape::Polygon(s) => s.draw(surface, color, filled),
            Shape::Spline(s) => s.draw(surface, color),
            Shape::Sector(s) => s.draw(surface, color, filled),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Shape {
                fn from(shape: $variant) -> Self {
                    Shape::$variant(shape)
                }
            }
        )*
    };
}

impl_from_variant!(
    Point, Line, Rectangle, Circle, Ellipse, Triangle, Arc, Polygon, Spline, Sector,
);

/// Scales `points` about `pivot` so their bounding half extents go from
/// `from` to `to`. Flat axes stay untouched.
pub(crate) fn rescale_points(
    points: &mut [Vector2D],
    pivot: Vector2D,
    from: Vector2D,
    to: Vector2D,
) {
    let to = to.abs();
    let factor = |old: f64, new: f64| if old > 0.0 { new / old } else { 1.0 };
    let scale = Vector2D::new(factor(from.x, to.x), factor(from.y, to.y));
    points
        .iter_mut()
        .for_each(|p| *p = pivot + (*p - pivot).component_mul(&scale));
}

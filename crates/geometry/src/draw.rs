//! Drawing seam between shapes and a rendering backend
//!
//! Shapes never talk to a graphics library directly. They emit primitive
//! calls against a `Surface`, which a backend implements for whatever
//! destination it owns (a bitmap, a window, a vertex batch). The surface's
//! lifetime is managed entirely by the caller.

use crate::color::Color;
use crate::vector::Vector2D;

/// Destination that accepts primitive draw calls
///
/// Angles are in radians, measured with `atan2(y, x)`; `span` is signed.
pub trait Surface {
    fn draw_point(&mut self, at: Vector2D, color: Color);

    fn draw_line(&mut self, from: Vector2D, to: Vector2D, color: Color);

    fn draw_rectangle(&mut self, min: Vector2D, max: Vector2D, color: Color, filled: bool);

    fn draw_circle(&mut self, center: Vector2D, radius: f64, color: Color, filled: bool);

    fn draw_ellipse(&mut self, center: Vector2D, radii: Vector2D, color: Color, filled: bool);

    fn draw_triangle(&mut self, vertices: [Vector2D; 3], color: Color, filled: bool);

    fn draw_arc(&mut self, center: Vector2D, radius: f64, start: f64, span: f64, color: Color);

    fn draw_polygon(&mut self, vertices: &[Vector2D], color: Color, filled: bool);

    fn draw_spline(&mut self, control_points: [Vector2D; 4], color: Color);

    fn draw_sector(
        &mut self,
        center: Vector2D,
        radius: f64,
        start: f64,
        span: f64,
        color: Color,
        filled: bool,
    );
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Point {
        at: Vector2D,
        color: Color,
    },
    Line {
        from: Vector2D,
        to: Vector2D,
        color: Color,
    },
    Rectangle {
        min: Vector2D,
        max: Vector2D,
        color: Color,
        filled: bool,
    },
    Circle {
        center: Vector2D,
        radius: f64,
        color: Color,
        filled: bool,
    },
    Ellipse {
        center: Vector2D,
        radii: Vector2D,
        color: Color,
        filled: bool,
    },
    Triangle {
        vertices: [Vector2D; 3],
        color: Color,
        filled: bool,
    },
    Arc {
        center: Vector2D,
        radius: f64,
        start: f64,
        span: f64,
        color: Color,
    },
    Polygon {
        vertices: Vec<Vector2D>,
        color: Color,
        filled: bool,
    },
    Spline {
        control_points: [Vector2D; 4],
        color: Color,
    },
    Sector {
        center: Vector2D,
        radius: f64,
        start: f64,
        span: f64,
        color: Color,
        filled: bool,
    },
}

/// Surface that stores every call instead of rasterizing
///
/// Useful headless and in tests.
///
/// # Examples
///
/// ```
/// use geometry::color::Color;
/// use geometry::draw::{DrawCommand, RecordingSurface};
/// use geometry::shapes::{Circle, Shape};
/// use geometry::vector::vec2;
///
/// let mut surface = RecordingSurface::new();
/// let circle = Shape::from(Circle::new(vec2(1.0, 1.0), 2.0));
/// circle.draw(&mut surface, Color::WHITE, true);
///
/// assert_eq!(surface.commands().len(), 1);
/// assert!(matches!(surface.commands()[0], DrawCommand::Circle { filled: true, .. }));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn draw_point(&mut self, at: Vector2D, color: Color) {
        self.commands.push(DrawCommand::Point { at, color });
    }

    fn draw_line(&mut self, from: Vector2D, to: Vector2D, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn draw_rectangle(&mut self, min: Vector2D, max: Vector2D, color: Color, filled: bool) {
        self.commands.push(DrawCommand::Rectangle {
            min,
            max,
            color,
            filled,
        });
    }

    fn draw_circle(&mut self, center: Vector2D, radius: f64, color: Color, filled: bool) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            filled,
        });
    }

    fn draw_ellipse(&mut self, center: Vector2D, radii: Vector2D, color: Color, filled: bool) {
        self.commands.push(DrawCommand::Ellipse {
            center,
            radii,
            color,
            filled,
        });
    }

    fn draw_triangle(&mut self, vertices: [Vector2D; 3], color: Color, filled: bool) {
        self.commands.push(DrawCommand::Triangle {
            vertices,
            color,
            filled,
        });
    }

    fn draw_arc(&mut self, center: Vector2D, radius: f64, start: f64, span: f64, color: Color) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start,
            span,
            color,
        });
    }

    fn draw_polygon(&mut self, vertices: &[Vector2D], color: Color, filled: bool) {
        self.commands.push(DrawCommand::Polygon {
            vertices: vertices.to_vec(),
            color,
            filled,
        });
    }

    fn draw_spline(&mut self, control_points: [Vector2D; 4], color: Color) {
        self.commands.push(DrawCommand::Spline {
            control_points,
            color,
        });
    }

    fn draw_sector(
        &mut self,
        center: Vector2D,
        radius: f64,
        start: f64,
        span: f64,
        color: Color,
        filled: bool,
    ) {
        self.commands.push(DrawCommand::Sector {
            center,
            radius,
            start,
            span,
            color,
            filled,
        });
    }
}

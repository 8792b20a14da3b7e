//! 2D vector helpers
//!
//! Positions, extents and directions are all plain `nalgebra::Vector2<f64>`
//! values. `VectorExt` adds the handful of operations the shape queries lean
//! on that nalgebra either spells differently or treats as fallible.

use nalgebra::Vector2;

/// 2D point / vector value type used throughout the geometry crate
pub type Vector2D = Vector2<f64>;

/// Fixed tolerance for equality and containment tests
pub const EPSILON: f64 = 0.0001;

/// Returns true when `a` and `b` differ by no more than `EPSILON`
pub fn is_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}

/// Shorthand constructor
pub fn vec2(x: f64, y: f64) -> Vector2D {
    Vector2D::new(x, y)
}

/// Extra vector operations
///
/// # Examples
///
/// ```
/// use geometry::vector::{vec2, VectorExt};
///
/// let v = vec2(3.0, 4.0);
/// assert_eq!(v.length(), 5.0);
/// assert_eq!(vec2(0.0, 0.0).normalize_or_zero(), vec2(0.0, 0.0));
/// ```
pub trait VectorExt {
    /// Unit vector in the same direction, or the zero vector when the length is zero
    fn normalize_or_zero(&self) -> Vector2D;

    fn length(&self) -> f64;

    fn length_squared(&self) -> f64;

    fn distance_squared(&self, other: &Vector2D) -> f64;

    /// Projection of `self` onto `axis`
    ///
    /// A zero-length axis projects everything to the zero vector.
    fn projection(&self, axis: &Vector2D) -> Vector2D;

    /// Counter-clockwise perpendicular, `(-y, x)`
    fn perpendicular(&self) -> Vector2D;

    /// Unit-length perpendicular
    fn normal(&self) -> Vector2D;
}

impl VectorExt for Vector2D {
    fn normalize_or_zero(&self) -> Vector2D {
        self.try_normalize(0.0).unwrap_or_else(Vector2D::zeros)
    }

    fn length(&self) -> f64 {
        self.magnitude()
    }

    fn length_squared(&self) -> f64 {
        self.magnitude_squared()
    }

    fn distance_squared(&self, other: &Vector2D) -> f64 {
        (self - other).magnitude_squared()
    }

    fn projection(&self, axis: &Vector2D) -> Vector2D {
        let axis_len_sq = axis.magnitude_squared();
        if axis_len_sq == 0.0 {
            return Vector2D::zeros();
        }
        axis * (self.dot(axis) / axis_len_sq)
    }

    fn perpendicular(&self) -> Vector2D {
        Vector2D::new(-self.y, self.x)
    }

    fn normal(&self) -> Vector2D {
        self.perpendicular().normalize_or_zero()
    }
}

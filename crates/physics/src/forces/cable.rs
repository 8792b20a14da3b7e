//! Inextensible cable between two bodies
//!
//! The cable only resists stretching. While the bodies are closer than its
//! length it does nothing; once they drift farther apart it pushes both back
//! along the line joining them in a single correction, so a violation left
//! by a large step is resolved over one tick rather than iteratively.

use log::trace;
use nalgebra::Vector2;

use crate::bodies::BodySet;
use crate::body::BodyId;
use crate::forces::ForceGenerator;

/// One-sided distance constraint of fixed maximum length
///
/// # Examples
///
/// ```
/// use physics::bodies::BodySet;
/// use physics::forces::{CableForceGenerator, ForceGenerator};
/// use nalgebra::{Point2, Vector2};
///
/// let mut bodies = BodySet::new();
/// let a = bodies.add_body(1.0, Point2::new(0.0, 0.0), Vector2::zeros()).unwrap();
/// let b = bodies.add_body(1.0, Point2::new(10.0, 0.0), Vector2::zeros()).unwrap();
///
/// let mut cable = CableForceGenerator::new(5.0);
/// cable.attach_first_end_to(a);
/// cable.attach_second_end_to(b);
/// cable.update(&mut bodies, 0.016);
///
/// let (pa, pb) = (bodies.get(a).unwrap().position, bodies.get(b).unwrap().position);
/// assert!(((pb - pa).magnitude() - 5.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CableForceGenerator {
    first: Option<BodyId>,
    second: Option<BodyId>,
    length: f64,
}

impl CableForceGenerator {
    /// Creates an unattached cable; negative lengths clamp to zero
    pub fn new(length: f64) -> Self {
        Self {
            first: None,
            second: None,
            length: length.max(0.0),
        }
    }

    pub fn attach_first_end_to(&mut self, body: BodyId) {
        self.first = Some(body);
    }

    pub fn attach_second_end_to(&mut self, body: BodyId) {
        self.second = Some(body);
    }

    pub fn detach_first_end(&mut self) {
        self.first = None;
    }

    pub fn detach_second_end(&mut self) {
        self.second = None;
    }

    pub fn first_end(&self) -> Option<BodyId> {
        self.first
    }

    pub fn second_end(&self) -> Option<BodyId> {
        self.second
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn set_length(&mut self, length: f64) {
        self.length = length.max(0.0);
    }
}

/// Projection of `v` onto the unit vector `axis`
fn project_onto(v: Vector2<f64>, axis: Vector2<f64>) -> Vector2<f64> {
    axis * v.dot(&axis)
}

impl ForceGenerator for CableForceGenerator {
    fn update(&mut self, bodies: &mut BodySet, dt: f64) {
        if dt == 0.0 {
            trace!("cable: zero timestep, skipping");
            return;
        }
        if self.length == 0.0 {
            trace!("cable: zero length, skipping");
            return;
        }
        let (Some(first_id), Some(second_id)) = (self.first, self.second) else {
            trace!("cable: an end is unattached, skipping");
            return;
        };
        let (Some(first), Some(second)) =
            (bodies.get(first_id).copied(), bodies.get(second_id).copied())
        else {
            trace!("cable: an attached body is gone, skipping");
            return;
        };

        let square_distance = (first.position - second.position).magnitude_squared();
        let square_length = self.length * self.length;
        if square_distance <= square_length {
            return;
        }

        if !(first.mass > 0.0 && second.mass > 0.0) {
            trace!("cable: a body has non-positive mass, skipping");
            return;
        }
        let mass_sum = first.mass + second.mass;

        let distance = square_distance.sqrt();
        let first_to_second = (second.position - first.position) / distance;
        let second_to_first = -first_to_second;

        let first_impulse = project_onto(first.acceleration * first.mass, first_to_second);
        let second_impulse = project_onto(second.acceleration * second.mass, second_to_first);

        // The lighter body covers more of the excess
        let excess = distance - self.length;
        let first_shift = first_to_second * (excess * second.mass / mass_sum);
        let second_shift = second_to_first * (excess * first.mass / mass_sum);

        trace!(
            "cable: stretched by {excess:.6}, pulling bodies {} and {} together",
            first_id.0,
            second_id.0
        );

        if let Some(body) = bodies.get_mut(first_id) {
            body.apply_impulse(first_impulse);
            body.position += first_shift;
        }
        if let Some(body) = bodies.get_mut(second_id) {
            body.apply_impulse(second_impulse);
            body.position += second_shift;
        }
    }
}

use log::trace;
use nalgebra::Vector2;

use crate::bodies::BodySet;
use crate::body::BodyId;
use crate::forces::ForceGenerator;

/// Constant acceleration field, such as surface gravity
///
/// Applies to every body by default, or only to an explicit list of handles.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformGravity {
    acceleration: Vector2<f64>,
    targets: Option<Vec<BodyId>>,
}

impl UniformGravity {
    pub fn new(acceleration: Vector2<f64>) -> Self {
        Self {
            acceleration,
            targets: None,
        }
    }

    /// Restricts the field to `targets`
    pub fn for_bodies(acceleration: Vector2<f64>, targets: Vec<BodyId>) -> Self {
        Self {
            acceleration,
            targets: Some(targets),
        }
    }

    pub fn acceleration(&self) -> Vector2<f64> {
        self.acceleration
    }

    pub fn set_acceleration(&mut self, acceleration: Vector2<f64>) {
        self.acceleration = acceleration;
    }
}

impl ForceGenerator for UniformGravity {
    fn update(&mut self, bodies: &mut BodySet, dt: f64) {
        if dt <= 0.0 {
            trace!("gravity: non-positive timestep {dt}, skipping");
            return;
        }
        match &self.targets {
            None => bodies
                .iter_mut()
                .for_each(|body| body.acceleration += self.acceleration),
            Some(targets) => {
                for &id in targets {
                    match bodies.get_mut(id) {
                        Some(body) => body.acceleration += self.acceleration,
                        None => trace!("gravity: body {} is gone, skipping", id.0),
                    }
                }
            }
        }
    }
}

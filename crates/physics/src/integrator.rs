//! Time integration for rigid bodies
//!
//! Integrators consume the accelerations accumulated by force generators
//! during a tick, advance positions and velocities, then clear the
//! accumulators so the next tick starts from zero.

use serde::{Deserialize, Serialize};

use crate::bodies::BodySet;

/// A time integrator over a body arena
pub trait Integrator: Send + Sync {
    /// Advance every body by one timestep
    ///
    /// A zero `dt` leaves positions, velocities and accumulated
    /// accelerations untouched.
    ///
    /// # Arguments
    ///
    /// * `bodies` - Body arena (modified in place)
    /// * `dt` - Timestep in seconds
    fn step(&self, bodies: &mut BodySet, dt: f64);

    /// Advance by multiple timesteps
    ///
    /// # Arguments
    ///
    /// * `bodies` - Body arena (modified in place)
    /// * `dt` - Timestep in seconds
    /// * `n_steps` - Number of steps to take
    ///
    /// # Returns
    ///
    /// Elapsed time, `dt * n_steps`
    fn integrate(&self, bodies: &mut BodySet, dt: f64, n_steps: usize) -> f64 {
        for _ in 0..n_steps {
            self.step(bodies, dt);
        }
        dt * n_steps as f64
    }
}

/// Semi-implicit (symplectic) Euler integrator
///
/// Velocity is updated first and the new velocity moves the body:
///
/// 1. v(t + dt) = v(t) + a(t) * dt
/// 2. x(t + dt) = x(t) + v(t + dt) * dt
///
/// # Examples
///
/// ```
/// use physics::bodies::BodySet;
/// use physics::integrator::{Integrator, SemiImplicitEuler};
/// use nalgebra::{Point2, Vector2};
///
/// let mut bodies = BodySet::new();
/// let id = bodies.add_body(1.0, Point2::origin(), Vector2::zeros()).unwrap();
/// bodies.get_mut(id).unwrap().acceleration = Vector2::new(0.0, -10.0);
///
/// SemiImplicitEuler.step(&mut bodies, 0.1);
///
/// let body = bodies.get(id).unwrap();
/// assert!((body.velocity.y + 1.0).abs() < 1e-12);
/// assert!((body.position.y + 0.1).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SemiImplicitEuler;

impl Integrator for SemiImplicitEuler {
    fn step(&self, bodies: &mut BodySet, dt: f64) {
        if dt == 0.0 {
            return;
        }
        bodies.iter_mut().for_each(|body| {
            body.velocity += body.acceleration * dt;
            body.position += body.velocity * dt;
            body.clear_acceleration();
        });
    }
}

/// Explicit Euler integrator (1st order)
///
/// Moves each body with its old velocity before updating the velocity. It
/// gains energy over time and is mostly useful for comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euler;

impl Integrator for Euler {
    fn step(&self, bodies: &mut BodySet, dt: f64) {
        if dt == 0.0 {
            return;
        }
        bodies.iter_mut().for_each(|body| {
            body.position += body.velocity * dt;
            body.velocity += body.acceleration * dt;
            body.clear_acceleration();
        });
    }
}

/// Integrator selection for configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntegratorKind {
    #[default]
    SemiImplicitEuler,
    Euler,
}

impl IntegratorKind {
    /// Builds the integrator this kind names
    pub fn build(self) -> Box<dyn Integrator> {
        match self {
            Self::SemiImplicitEuler => Box::new(SemiImplicitEuler),
            Self::Euler => Box::new(Euler),
        }
    }
}

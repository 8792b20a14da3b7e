//! Simulation world tying bodies, force generators and an integrator together

use log::{debug, warn};
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::bodies::BodySet;
use crate::body::{BodyId, RigidBody};
use crate::error::{PhysicsError, PhysicsResult};
use crate::forces::{ForceGenerator, ForceRegistry, UniformGravity};
use crate::integrator::{Integrator, IntegratorKind};

fn default_gravity() -> [f64; 2] {
    [0.0, 0.0]
}

fn default_mass() -> f64 {
    1.0
}

/// Settings used to build a [`PhysicsWorld`]
///
/// Missing fields fall back to their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldConfig {
    /// Constant acceleration applied to every body
    #[serde(default = "default_gravity")]
    pub gravity: [f64; 2],
    #[serde(default)]
    pub integrator: IntegratorKind,
    /// Mass given to bodies added without one
    #[serde(default = "default_mass")]
    pub default_mass: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: default_gravity(),
            integrator: IntegratorKind::default(),
            default_mass: default_mass(),
        }
    }
}

/// Bodies, their force generators and the integrator that advances them
pub struct PhysicsWorld {
    bodies: BodySet,
    forces: ForceRegistry,
    integrator: Box<dyn Integrator>,
    time: f64,
    default_mass: f64,
}

impl PhysicsWorld {
    /// Creates an empty world with default settings
    pub fn new() -> Self {
        Self {
            bodies: BodySet::new(),
            forces: ForceRegistry::new(),
            integrator: IntegratorKind::default().build(),
            time: 0.0,
            default_mass: default_mass(),
        }
    }

    /// Builds a world from `config`
    ///
    /// A non-zero gravity registers a [`UniformGravity`] generator first, so
    /// generators added afterwards see its acceleration.
    ///
    /// # Examples
    ///
    /// ```
    /// use physics::world::{PhysicsWorld, WorldConfig};
    ///
    /// let config = WorldConfig {
    ///     gravity: [0.0, -9.8],
    ///     ..WorldConfig::default()
    /// };
    /// let world = PhysicsWorld::from_config(config).unwrap();
    /// assert_eq!(world.generator_count(), 1);
    ///
    /// let invalid = WorldConfig {
    ///     default_mass: 0.0,
    ///     ..WorldConfig::default()
    /// };
    /// assert!(PhysicsWorld::from_config(invalid).is_err());
    /// ```
    pub fn from_config(config: WorldConfig) -> PhysicsResult<Self> {
        if config.gravity.iter().any(|g| !g.is_finite()) {
            warn!("rejecting world config with gravity {:?}", config.gravity);
            return Err(PhysicsError::InvalidConfiguration {
                reason: format!("gravity must be finite, got {:?}", config.gravity),
            });
        }
        if !(config.default_mass.is_finite() && config.default_mass > 0.0) {
            warn!(
                "rejecting world config with default mass {}",
                config.default_mass
            );
            return Err(PhysicsError::InvalidConfiguration {
                reason: format!(
                    "default mass must be positive, got {}",
                    config.default_mass
                ),
            });
        }

        let mut world = Self {
            integrator: config.integrator.build(),
            default_mass: config.default_mass,
            ..Self::new()
        };
        let gravity = Vector2::from(config.gravity);
        if gravity != Vector2::zeros() {
            world.add_generator(UniformGravity::new(gravity));
        }
        debug!(
            "built world with {:?} integrator and gravity {:?}",
            config.integrator, config.gravity
        );
        Ok(world)
    }

    pub fn add_body(
        &mut self,
        mass: f64,
        position: Point2<f64>,
        velocity: Vector2<f64>,
    ) -> PhysicsResult<BodyId> {
        self.bodies.add_body(mass, position, velocity)
    }

    /// Adds a body carrying the configured default mass
    pub fn add_body_with_default_mass(
        &mut self,
        position: Point2<f64>,
        velocity: Vector2<f64>,
    ) -> PhysicsResult<BodyId> {
        self.bodies.add_body(self.default_mass, position, velocity)
    }

    pub fn remove_body(&mut self, id: BodyId) -> PhysicsResult<RigidBody> {
        self.bodies.remove_body(id)
    }

    pub fn body(&self, id: BodyId) -> Option<&RigidBody> {
        self.bodies.get(id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut RigidBody> {
        self.bodies.get_mut(id)
    }

    /// Registers a generator; generators run in registration order
    pub fn add_generator<G: ForceGenerator + 'static>(&mut self, generator: G) {
        self.forces.add(generator);
    }

    pub fn generator_count(&self) -> usize {
        self.forces.len()
    }

    /// Advances the world by `dt`
    ///
    /// Every generator runs once, the integrator then consumes the
    /// accumulated accelerations and the clock moves forward.
    pub fn step(&mut self, dt: f64) {
        self.forces.update_all(&mut self.bodies, dt);
        self.integrator.step(&mut self.bodies, dt);
        self.time += dt;
    }

    /// Takes `n_steps` steps of `dt`, returning the final time
    pub fn run(&mut self, dt: f64, n_steps: usize) -> f64 {
        for _ in 0..n_steps {
            self.step(dt);
        }
        self.time
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn default_mass(&self) -> f64 {
        self.default_mass
    }

    pub fn bodies(&self) -> &BodySet {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut BodySet {
        &mut self.bodies
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

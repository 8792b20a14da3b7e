//! Force generators
//!
//! A force generator runs once per physics tick, reads the kinematic state
//! of the bodies it is attached to and mutates it, either by accumulating
//! acceleration (a force) or by adjusting velocities and positions directly
//! (a constraint). Generators hold `BodyId` handles, never the bodies.

use log::debug;

use crate::bodies::BodySet;

pub mod cable;
pub mod gravity;


pub use cable::CableForceGenerator;
pub use gravity::UniformGravity;

/// A per-tick effect on a set of bodies
///
/// Implementations must treat `dt == 0` as "no effect" and must skip
/// silently when an attached handle no longer resolves.
///
/// # Examples
///
/// ```
/// use physics::bodies::BodySet;
/// use physics::forces::{ForceGenerator, UniformGravity};
/// use nalgebra::{Point2, Vector2};
///
/// let mut bodies = BodySet::new();
/// let id = bodies.add_body(1.0, Point2::new(0.0, 0.0), Vector2::zeros()).unwrap();
///
/// let mut gravity = UniformGravity::new(Vector2::new(0.0, -9.8));
/// gravity.update(&mut bodies, 0.016);
///
/// assert_eq!(bodies.get(id).unwrap().acceleration, Vector2::new(0.0, -9.8));
/// ```
pub trait ForceGenerator: Send + Sync {
    /// Apply this generator's effect for one tick
    ///
    /// # Arguments
    ///
    /// * `bodies` - Body arena (modified in place)
    /// * `dt` - Timestep in seconds
    fn update(&mut self, bodies: &mut BodySet, dt: f64);
}

/// Ordered collection of generators run back to back
///
/// # Examples
///
/// ```
/// use physics::forces::{CableForceGenerator, ForceRegistry, UniformGravity};
/// use nalgebra::Vector2;
///
/// let registry = ForceRegistry::new()
///     .with_generator(UniformGravity::new(Vector2::new(0.0, -9.8)))
///     .with_generator(CableForceGenerator::new(5.0));
///
/// assert_eq!(registry.len(), 2);
/// ```
#[derive(Default)]
pub struct ForceRegistry {
    generators: Vec<Box<dyn ForceGenerator>>,
}

impl ForceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of `add`
    pub fn with_generator<G: ForceGenerator + 'static>(mut self, generator: G) -> Self {
        self.add(generator);
        self
    }

    pub fn add<G: ForceGenerator + 'static>(&mut self, generator: G) {
        self.generators.push(Box::new(generator));
        debug!(
            "registered {} as force generator #{}",
            std::any::type_name::<G>(),
            self.generators.len()
        );
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    pub fn clear(&mut self) {
        self.generators.clear();
    }

    /// Runs every generator once, in registration order
    pub fn update_all(&mut self, bodies: &mut BodySet, dt: f64) {
        for generator in &mut self.generators {
            generator.update(bodies, dt);
        }
    }
}

impl ForceGenerator for ForceRegistry {
    fn update(&mut self, bodies: &mut BodySet, dt: f64) {
        self.update_all(bodies, dt);
    }
}

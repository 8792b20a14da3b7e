use log::{debug, warn};
use nalgebra::{Point2, Vector2};

use crate::body::{BodyId, RigidBody};
use crate::error::{PhysicsError, PhysicsResult};

/// Arena owning every body in a simulation
///
/// Handles are never reused: removing a body leaves every other handle valid
/// and makes lookups of the removed one return `None`.
#[derive(Debug, Clone, Default)]
pub struct BodySet {
    slots: Vec<Option<RigidBody>>,
    len: usize,
}

impl BodySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new body and returns its handle
    ///
    /// Fails with `InvalidMass` unless `mass` is positive and finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use physics::bodies::BodySet;
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let mut bodies = BodySet::new();
    /// let a = bodies.add_body(1.0, Point2::new(0.0, 0.0), Vector2::zeros()).unwrap();
    /// let b = bodies.add_body(2.0, Point2::new(5.0, 0.0), Vector2::zeros()).unwrap();
    ///
    /// assert_eq!(bodies.len(), 2);
    /// assert_eq!(bodies.get(b).map(|body| body.mass), Some(2.0));
    /// assert_ne!(a, b);
    /// assert!(bodies.add_body(0.0, Point2::origin(), Vector2::zeros()).is_err());
    /// ```
    pub fn add_body(
        &mut self,
        mass: f64,
        position: Point2<f64>,
        velocity: Vector2<f64>,
    ) -> PhysicsResult<BodyId> {
        self.insert(RigidBody::new(mass, position, velocity))
    }

    /// Takes ownership of `body`, overwriting its id with a fresh handle
    pub fn insert(&mut self, mut body: RigidBody) -> PhysicsResult<BodyId> {
        if !(body.mass.is_finite() && body.mass > 0.0) {
            warn!("rejecting body with mass {}", body.mass);
            return Err(PhysicsError::InvalidMass { mass: body.mass });
        }
        let id = BodyId(self.slots.len() as u32);
        body.id = id;
        self.slots.push(Some(body));
        self.len += 1;
        debug!("inserted body {} with mass {}", id.0, body.mass);
        Ok(id)
    }

    /// Removes a body, returning it
    ///
    /// Fails with `UnknownBody` when the handle was never issued or the body
    /// is already gone.
    pub fn remove_body(&mut self, id: BodyId) -> PhysicsResult<RigidBody> {
        let removed = self
            .slots
            .get_mut(id.0 as usize)
            .and_then(Option::take)
            .ok_or(PhysicsError::UnknownBody { id })?;
        self.len -= 1;
        debug!("removed body {}", id.0);
        Ok(removed)
    }

    pub fn get(&self, id: BodyId) -> Option<&RigidBody> {
        self.slots.get(id.0 as usize).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut RigidBody> {
        self.slots.get_mut(id.0 as usize).and_then(Option::as_mut)
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live bodies
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Live bodies in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &RigidBody> {
        self.slots.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut RigidBody> {
        self.slots.iter_mut().flatten()
    }

    pub fn ids(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.iter().map(|b| b.id)
    }

    pub fn total_mass(&self) -> f64 {
        self.iter().map(|b| b.mass).sum()
    }

    /// Sum of every body's momentum
    pub fn total_momentum(&self) -> Vector2<f64> {
        self.iter()
            .map(|b| b.momentum())
            .fold(Vector2::zeros(), |acc, p| acc + p)
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        self.iter().map(|b| b.kinetic_energy()).sum()
    }
}

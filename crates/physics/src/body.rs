use nalgebra::{Point2, Vector2};

/// Stable handle to a body in a `BodySet`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

/// Point mass moved by force generators and integrators
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidBody {
    pub id: BodyId,
    pub mass: f64,
    pub position: Point2<f64>,
    pub velocity: Vector2<f64>,
    /// Accumulated this tick; integrators clear it after each step
    pub acceleration: Vector2<f64>,
}

impl RigidBody {
    /// Creates a body with no accumulated acceleration
    ///
    /// The id is a placeholder until the body is inserted into a `BodySet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use physics::body::RigidBody;
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let mut body = RigidBody::new(2.0, Point2::new(0.0, 0.0), Vector2::zeros());
    /// body.apply_impulse(Vector2::new(4.0, 0.0));
    ///
    /// assert_eq!(body.velocity, Vector2::new(2.0, 0.0));
    /// ```
    pub fn new(mass: f64, position: Point2<f64>, velocity: Vector2<f64>) -> Self {
        Self {
            id: BodyId(0),
            mass,
            position,
            velocity,
            acceleration: Vector2::zeros(),
        }
    }

    /// Zero for massless bodies, which impulses and forces then leave untouched
    pub fn inverse_mass(&self) -> f64 {
        if self.mass > 0.0 {
            1.0 / self.mass
        } else {
            0.0
        }
    }

    /// Instantaneous change of momentum: `velocity += impulse / mass`
    pub fn apply_impulse(&mut self, impulse: Vector2<f64>) {
        self.velocity += impulse * self.inverse_mass();
    }

    /// Accumulates `force / mass` into this tick's acceleration
    pub fn apply_force(&mut self, force: Vector2<f64>) {
        self.acceleration += force * self.inverse_mass();
    }

    pub fn clear_acceleration(&mut self) {
        self.acceleration = Vector2::zeros();
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn distance_to(&self, other: &RigidBody) -> f64 {
        (self.position - other.position).magnitude()
    }
}

//! Point-mass rigid bodies driven by force generators
//!
//! Bodies live in a [`bodies::BodySet`] arena and are referred to by
//! [`body::BodyId`] handles. Each tick, [`forces::ForceGenerator`]s mutate
//! the bodies they are attached to and an [`integrator::Integrator`] moves
//! them. [`world::PhysicsWorld`] wires the pieces together.

pub mod bodies;
pub mod body;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod world;

#[cfg(test)]
mod integrator_test;
#[cfg(test)]
mod world_test;

pub use bodies::BodySet;
pub use body::{BodyId, RigidBody};
pub use error::{PhysicsError, PhysicsResult};
pub use forces::{CableForceGenerator, ForceGenerator, ForceRegistry, UniformGravity};
pub use integrator::{Euler, Integrator, IntegratorKind, SemiImplicitEuler};
pub use world::{PhysicsWorld, WorldConfig};

//! Errors for the few physics operations that can genuinely fail
//!
//! Force generators and the integrators never fail; they no-op on missing or
//! degenerate input. Errors only come from explicit requests against the body
//! arena and from building a world out of an invalid configuration.

use std::fmt;

use crate::body::BodyId;

#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// No live body carries this handle
    UnknownBody { id: BodyId },
    /// Bodies need a positive, finite mass
    InvalidMass { mass: f64 },
    /// A configuration value is out of range
    InvalidConfiguration { reason: String },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBody { id } => write!(f, "no body with id {}", id.0),
            Self::InvalidMass { mass } => {
                write!(f, "body mass must be positive and finite, got {mass}")
            }
            Self::InvalidConfiguration { reason } => {
                write!(f, "invalid configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for PhysicsError {}

pub type PhysicsResult<T> = Result<T, PhysicsError>;

//! Error types for physics operations.

use core::fmt;

/// Errors that can occur while building or driving a simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// A rope needs at least one interior particle.
    InvalidSegmentCount { count: usize },
    /// Grid dimensions must be at least 2x2, with at most `u32::MAX` particles.
    InvalidGridDimensions { width: usize, height: usize },
    /// Mass must be positive and finite.
    InvalidMass,
    /// Distance bounds must be finite with `0 <= min <= max`.
    InvalidDistance,
    /// A constraint must join two distinct particles.
    DegenerateConstraint { index: usize },
    /// Particle index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
    /// Only fixed particles can be positioned directly.
    ParticleNotFixed { index: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidSegmentCount { count } => {
                write!(f, "rope needs at least 1 segment (got {})", count)
            }
            PhysicsError::InvalidGridDimensions { width, height } => {
                write!(f, "grid must be at least 2x2 (got {}x{})", width, height)
            }
            PhysicsError::InvalidMass => write!(f, "mass must be positive and finite"),
            PhysicsError::InvalidDistance => {
                write!(f, "distance bounds must satisfy 0 <= min <= max")
            }
            PhysicsError::DegenerateConstraint { index } => {
                write!(f, "constraint joins particle {} to itself", index)
            }
            PhysicsError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::ParticleNotFixed { index } => {
                write!(f, "particle {} is not fixed", index)
            }
        }
    }
}

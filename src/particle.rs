//! Verlet particles with position-based dynamics.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec2;

/// A Verlet point mass. Velocity is implicit in `position - old_position`.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub position: Vec2<F>,
    pub old_position: Vec2<F>,
    /// Constant acceleration (gravity). The solver never changes it.
    pub acceleration: Vec2<F>,
    /// Relative weight against constraint corrections. Heavier particles move less.
    pub mass: F,
    /// Externally controlled: integration leaves `position` alone.
    pub fixed: bool,
}

impl<F: Float> Particle<F> {
    /// A free particle at rest with unit mass.
    pub fn new(position: Vec2<F>, acceleration: Vec2<F>) -> Self {
        Particle {
            position,
            old_position: position,
            acceleration,
            mass: F::one(),
            fixed: false,
        }
    }

    pub fn pinned(position: Vec2<F>, acceleration: Vec2<F>) -> Self {
        Particle { fixed: true, ..Particle::new(position, acceleration) }
    }

    /// Replace the mass. Rejects zero, negative and non-finite values.
    pub fn with_mass(mut self, mass: F) -> Result<Self, PhysicsError> {
        if !mass.is_finite() || mass <= F::zero() {
            return Err(PhysicsError::InvalidMass);
        }
        self.mass = mass;
        Ok(self)
    }

    /// Störmer-Verlet step: `x' = 2x - x_old + a*dt^2`.
    ///
    /// A fixed particle keeps its position and only resyncs `old_position`, so it
    /// starts from rest if it is ever released.
    pub fn integrate(&mut self, dt: F) {
        if self.fixed {
            self.old_position = self.position;
            return;
        }
        let previous = self.position;
        self.position = self.position * F::two() - self.old_position + self.acceleration * (dt * dt);
        self.old_position = previous;
    }

    /// Displacement over the last step.
    pub fn velocity_raw(&self) -> Vec2<F> {
        self.position - self.old_position
    }

    pub fn pin(&mut self) {
        self.fixed = true;
        self.old_position = self.position;
    }

    pub fn unpin(&mut self) {
        self.fixed = false;
    }

    /// Teleport a fixed particle. Free particles are left untouched.
    pub fn move_to(&mut self, position: Vec2<F>) -> bool {
        if self.fixed {
            self.position = position;
        }
        self.fixed
    }
}

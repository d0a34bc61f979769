//! Per-frame input for dragging pinned particles.
//!
//! The solver never reads an input device. A front end picks a fixed particle, turns
//! the cursor into a [`DragTarget`] each frame, and hands it to the simulation.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;

/// Where a picked fixed particle should be pulled this frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragTarget<F: Float> {
    pub particle: usize,
    pub target: Vec2<F>,
}

impl<F: Float> DragTarget<F> {
    pub fn new(particle: usize, target: Vec2<F>) -> Self {
        DragTarget { particle, target }
    }

    /// `pos += (target - pos) * smoothing` on the picked particle.
    pub fn apply(&self, particles: &mut [Particle<F>], smoothing: F) -> Result<(), PhysicsError> {
        let p = fixed_particle_mut(particles, self.particle)?;
        let eased = p.position + (self.target - p.position) * smoothing;
        p.move_to(eased);
        Ok(())
    }
}

/// A particle held by the cursor, remembering where on it the cursor grabbed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Grab<F: Float> {
    pub particle: usize,
    pub offset: Vec2<F>,
}

impl<F: Float> Grab<F> {
    /// Start holding `index`. The offset keeps the particle from jumping onto the cursor.
    pub fn begin(particles: &[Particle<F>], index: usize, cursor: Vec2<F>) -> Result<Self, PhysicsError> {
        let count = particles.len();
        let p = particles
            .get(index)
            .ok_or(PhysicsError::ParticleOutOfBounds { index, count })?;
        if !p.fixed {
            return Err(PhysicsError::ParticleNotFixed { index });
        }
        Ok(Grab { particle: index, offset: p.position - cursor })
    }

    pub fn target(&self, cursor: Vec2<F>) -> DragTarget<F> {
        DragTarget::new(self.particle, cursor + self.offset)
    }
}

/// Nearest fixed particle strictly within `radius` of `point`.
pub fn pick_fixed<F: Float>(particles: &[Particle<F>], point: Vec2<F>, radius: F) -> Option<usize> {
    nearest_fixed_by(particles, radius, |p| p.distance(point))
}

/// Nearest fixed particle by an arbitrary distance measure, strictly within `radius`.
pub(crate) fn nearest_fixed_by<F: Float>(
    particles: &[Particle<F>],
    radius: F,
    mut distance: impl FnMut(Vec2<F>) -> F,
) -> Option<usize> {
    let mut nearest: Option<(usize, F)> = None;
    for (i, p) in particles.iter().enumerate() {
        if !p.fixed {
            continue;
        }
        let d = distance(p.position);
        if d < radius && nearest.map_or(true, |(_, best)| d < best) {
            nearest = Some((i, d));
        }
    }
    nearest.map(|(i, _)| i)
}

pub fn set_fixed_position<F: Float>(
    particles: &mut [Particle<F>],
    index: usize,
    position: Vec2<F>,
) -> Result<(), PhysicsError> {
    fixed_particle_mut(particles, index)?.move_to(position);
    Ok(())
}

fn fixed_particle_mut<F: Float>(
    particles: &mut [Particle<F>],
    index: usize,
) -> Result<&mut Particle<F>, PhysicsError> {
    let count = particles.len();
    let p = particles
        .get_mut(index)
        .ok_or(PhysicsError::ParticleOutOfBounds { index, count })?;
    if !p.fixed {
        return Err(PhysicsError::ParticleNotFixed { index });
    }
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors() -> [Particle<f32>; 3] {
        [
            Particle::pinned(Vec2::new(0.0, 0.0), Vec2::zero()),
            Particle::new(Vec2::new(0.1, 0.0), Vec2::zero()),
            Particle::pinned(Vec2::new(1.0, 0.0), Vec2::zero()),
        ]
    }

    #[test]
    fn drag_eases_a_quarter_of_the_way() {
        let mut particles = anchors();
        DragTarget::new(2, Vec2::new(1.0, 4.0)).apply(&mut particles, 0.25).unwrap();
        assert_eq!(particles[2].position, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn drag_rejects_free_and_missing_particles() {
        let mut particles = anchors();
        let target = Vec2::new(5.0, 5.0);
        assert_eq!(
            DragTarget::new(1, target).apply(&mut particles, 0.25),
            Err(PhysicsError::ParticleNotFixed { index: 1 })
        );
        assert_eq!(
            DragTarget::new(9, target).apply(&mut particles, 0.25),
            Err(PhysicsError::ParticleOutOfBounds { index: 9, count: 3 })
        );
    }

    #[test]
    fn pick_skips_free_particles() {
        let particles = anchors();
        // The free particle at 0.1 is closest but cannot be picked.
        assert_eq!(pick_fixed(&particles, Vec2::new(0.12, 0.0), 0.5), Some(0));
        assert_eq!(pick_fixed(&particles, Vec2::new(0.9, 0.0), 0.5), Some(2));
        assert_eq!(pick_fixed(&particles, Vec2::new(0.5, 0.0), 0.5), None);
    }

    #[test]
    fn grab_keeps_cursor_offset() {
        let particles = anchors();
        let grab = Grab::begin(&particles, 2, Vec2::new(0.75, 0.0)).unwrap();
        let drag = grab.target(Vec2::new(1.75, 1.0));
        assert_eq!(drag.particle, 2);
        assert!((drag.target.x - 2.0).abs() < 1e-6);
        assert!((drag.target.y - 1.0).abs() < 1e-6);
    }
}

//! Verlet rope: a pinned chain with long-range bending links.

use crate::config::{RopeConfig, SolverConfig};
use crate::constraint::DistanceConstraint;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::simulation::Simulation;
use crate::solver::ConstraintSolver;
use crate::vec::Vec2;

/// A rope of `count + 2` particles hanging from particle 0.
///
/// Every particle is linked to up to `bend_reach` predecessors. Each link only caps
/// extension (`min_dist = 0`, `max_dist = rest * hops`), so the rope can go slack and
/// bend but never stretch past its natural arc length.
#[derive(Clone, Debug)]
pub struct Rope<F: Float> {
    solver: ConstraintSolver<F>,
    rest_length: F,
}

impl<F: Float> Rope<F> {
    /// Lay out `count + 2` particles from `start` to `end` and pin the first one.
    ///
    /// `count` is the number of interior particles and must be at least 1.
    pub fn new(
        start: Vec2<F>,
        end: Vec2<F>,
        count: usize,
        config: &RopeConfig<F>,
    ) -> Result<Self, PhysicsError> {
        if count < 1 {
            return Err(PhysicsError::InvalidSegmentCount { count });
        }

        let total = count + 2;
        let segments = F::from_usize(count + 1);
        let step = (end - start) / segments;
        let rest_length = end.distance(start) / segments;
        let reach = config.bend_reach.max(1);

        let links: usize = (1..=reach).map(|j| total.saturating_sub(j)).sum();
        let mut solver = ConstraintSolver::with_capacity(total, links);

        for i in 0..total {
            let pos = start + step * F::from_usize(i);
            let particle = Particle::new(pos, config.gravity).with_mass(config.particle_mass)?;
            solver.add_particle(particle);
        }

        // Hop-major: all direct neighbours first, then 2-hop links, and so on.
        for j in 1..=reach {
            let max_dist = rest_length * F::from_usize(j);
            for i in j..total {
                solver.add_constraint(DistanceConstraint::slack(i, i - j, max_dist)?)?;
            }
        }

        if let Some(anchor) = solver.particle_mut(0) {
            anchor.pin();
        }

        log::debug!(
            "rope: {} particles, {} constraints, bend reach {}",
            solver.particle_count(),
            solver.constraint_count(),
            reach
        );

        Ok(Rope { solver, rest_length })
    }

    /// Distance between neighbouring particles in the unstretched rope.
    pub fn rest_length(&self) -> F {
        self.rest_length
    }

    /// Unstretched length from the anchor to the free end.
    pub fn natural_length(&self) -> F {
        self.rest_length * F::from_usize(self.len() - 1)
    }

    /// Sum of the current segment lengths.
    pub fn span_length(&self) -> F {
        self.solver
            .particles()
            .windows(2)
            .map(|w| w[0].position.distance(w[1].position))
            .fold(F::zero(), |acc, d| acc + d)
    }

    /// Position of the free end.
    pub fn end(&self) -> Vec2<F> {
        let particles = self.solver.particles();
        particles[particles.len() - 1].position
    }

    pub fn pin(&mut self, index: usize) -> Result<(), PhysicsError> {
        let count = self.len();
        self.solver
            .particle_mut(index)
            .ok_or(PhysicsError::ParticleOutOfBounds { index, count })?
            .pin();
        Ok(())
    }

    pub fn unpin(&mut self, index: usize) -> Result<(), PhysicsError> {
        let count = self.len();
        self.solver
            .particle_mut(index)
            .ok_or(PhysicsError::ParticleOutOfBounds { index, count })?
            .unpin();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.solver.particle_count()
    }

    pub fn is_empty(&self) -> bool {
        self.solver.particle_count() == 0
    }

    pub fn constraint_count(&self) -> usize {
        self.solver.constraint_count()
    }

    pub fn particle(&self, index: usize) -> Option<&Particle<F>> {
        self.solver.particle(index)
    }

    pub fn solver(&self) -> &ConstraintSolver<F> {
        &self.solver
    }
}

impl<F: Float> Simulation<F> for Rope<F> {
    fn step<O: StepObserver>(&mut self, dt: F, config: &SolverConfig<F>, observer: &mut O) {
        self.solver.step(dt, config, observer);
    }

    fn particles(&self) -> &[Particle<F>] {
        self.solver.particles()
    }

    fn particles_mut(&mut self) -> &mut [Particle<F>] {
        self.solver.particles_mut()
    }
}

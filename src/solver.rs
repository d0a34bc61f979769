//! Iterative constraint solver for Verlet particle systems.

use crate::config::SolverConfig;
use crate::constraint::Constraint;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::simulation::Simulation;
use alloc::vec::Vec as AllocVec;

/// Particle arena plus an ordered constraint list.
///
/// Constraints refer to particles by index. Particles are only ever appended, so an
/// index stays valid for the solver's lifetime. Relaxation is Gauss-Seidel: every pass
/// applies the constraints in insertion order, and that order shapes convergence.
#[derive(Clone, Debug, Default)]
pub struct ConstraintSolver<F: Float> {
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<Constraint<F>>,
}

impl<F: Float> ConstraintSolver<F> {
    pub fn new() -> Self {
        ConstraintSolver {
            particles: AllocVec::new(),
            constraints: AllocVec::new(),
        }
    }

    pub fn with_capacity(particles: usize, constraints: usize) -> Self {
        ConstraintSolver {
            particles: AllocVec::with_capacity(particles),
            constraints: AllocVec::with_capacity(constraints),
        }
    }

    pub fn add_particle(&mut self, particle: Particle<F>) -> usize {
        let idx = self.particles.len();
        self.particles.push(particle);
        idx
    }

    /// Append a constraint. Both endpoints must already exist.
    pub fn add_constraint(&mut self, constraint: impl Into<Constraint<F>>) -> Result<(), PhysicsError> {
        let constraint = constraint.into();
        let count = self.particles.len();
        let (a, b) = constraint.endpoints();
        for index in [a, b] {
            if index >= count {
                return Err(PhysicsError::ParticleOutOfBounds { index, count });
            }
        }
        self.constraints.push(constraint);
        Ok(())
    }

    /// Integrate every particle once, then run `config.iterations` relaxation passes.
    pub fn step<O: StepObserver>(
        &mut self,
        dt: F,
        config: &SolverConfig<F>,
        observer: &mut O,
    ) {
        for p in self.particles.iter_mut() {
            p.integrate(dt);
        }
        observer.on_integrate();

        for i in 0..config.iterations {
            self.relax();
            observer.on_constraint_iteration(i);
        }

        observer.on_step_complete();
    }

    /// A single pass over every constraint.
    pub fn relax(&mut self) {
        for constraint in self.constraints.iter() {
            constraint.solve(&mut self.particles);
        }
    }

    /// Largest remaining violation across all constraints.
    pub fn max_violation(&self) -> F {
        self.constraints
            .iter()
            .map(|c| c.link().violation(&self.particles))
            .fold(F::zero(), |acc, v| acc.max(v))
    }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn particles_mut(&mut self) -> &mut [Particle<F>] { &mut self.particles }
    pub fn constraints(&self) -> &[Constraint<F>] { &self.constraints }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }
    pub fn particle(&self, index: usize) -> Option<&Particle<F>> { self.particles.get(index) }
    pub fn particle_mut(&mut self, index: usize) -> Option<&mut Particle<F>> { self.particles.get_mut(index) }
}

impl<F: Float> Simulation<F> for ConstraintSolver<F> {
    fn step<O: StepObserver>(&mut self, dt: F, config: &SolverConfig<F>, observer: &mut O) {
        ConstraintSolver::step(self, dt, config, observer);
    }

    fn particles(&self) -> &[Particle<F>] {
        &self.particles
    }

    fn particles_mut(&mut self) -> &mut [Particle<F>] {
        &mut self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::DistanceConstraint;
    use crate::observer::StepCounter;
    use crate::vec::Vec2;

    #[test]
    fn rejects_constraint_to_missing_particle() {
        let mut solver: ConstraintSolver<f32> = ConstraintSolver::new();
        solver.add_particle(Particle::new(Vec2::zero(), Vec2::zero()));
        let err = solver.add_constraint(DistanceConstraint::rigid(0, 1, 1.0).unwrap());
        assert_eq!(err, Err(PhysicsError::ParticleOutOfBounds { index: 1, count: 1 }));
        assert_eq!(solver.constraint_count(), 0);
    }

    #[test]
    fn step_reports_every_pass() {
        let mut solver: ConstraintSolver<f32> = ConstraintSolver::new();
        solver.add_particle(Particle::new(Vec2::zero(), Vec2::zero()));
        let config = SolverConfig::new().with_iterations(7);
        let mut counter = StepCounter::default();
        solver.step(1.0 / 60.0, &config, &mut counter);
        assert_eq!(counter, StepCounter { integrations: 1, iterations: 7, steps: 1 });
    }
}

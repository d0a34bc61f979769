//! The interface every simulated topology exposes to drivers and renderers.

use crate::config::SolverConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::interaction::{self, DragTarget};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A particle network that can be stepped and read back.
///
/// Renderers only need `positions` (or `particles`); input layers only need the
/// fixed-particle accessors and `drag`. Nothing here touches a clock or an input device.
pub trait Simulation<F: Float> {
    /// Advance by exactly `dt`. Callers should go through `FixedTimestep` so `dt`
    /// stays small and constant.
    fn step<O: StepObserver>(&mut self, dt: F, config: &SolverConfig<F>, observer: &mut O);

    fn particles(&self) -> &[Particle<F>];

    fn particles_mut(&mut self) -> &mut [Particle<F>];

    fn update(&mut self, dt: F, config: &SolverConfig<F>) {
        self.step(dt, config, &mut NoOpStepObserver);
    }

    /// Snapshot of every particle position, in index order.
    fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles().iter().map(|p| p.position).collect()
    }

    fn fixed_indices(&self) -> AllocVec<usize> {
        self.particles()
            .iter()
            .enumerate()
            .filter(|(_, p)| p.fixed)
            .map(|(i, _)| i)
            .collect()
    }

    /// Place a fixed particle directly.
    fn set_fixed_position(&mut self, index: usize, position: Vec2<F>) -> Result<(), PhysicsError> {
        interaction::set_fixed_position(self.particles_mut(), index, position)
    }

    /// Ease a fixed particle toward a drag target.
    fn drag(&mut self, target: &DragTarget<F>, smoothing: F) -> Result<(), PhysicsError> {
        target.apply(self.particles_mut(), smoothing)
    }
}

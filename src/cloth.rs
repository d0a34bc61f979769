//! Verlet cloth: a rectangular grid hung from its two top corners.

use crate::config::{ClothConfig, SolverConfig};
use crate::constraint::{DistanceConstraint, TensionConstraint};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::simulation::Simulation;
use crate::solver::ConstraintSolver;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A cloth mesh built from a `width x height` grid of Verlet particles.
#[derive(Clone, Debug)]
pub struct Cloth<F: Float> {
    solver: ConstraintSolver<F>,
    width: usize,
    height: usize,
    size: Vec2<F>,
}

impl<F: Float> Cloth<F> {
    /// Create a cloth whose top-left corner sits at `start` and which spans `size`.
    ///
    /// Rows run downward (negative y), columns run along positive x.
    /// Particle at (col, row) has index `row * width + col`.
    ///
    /// Constraints, in the order they are relaxed:
    /// - Structural: per particle, the right then the lower neighbour (rigid)
    /// - Top edge: every pair in row 0, rigid at their column distance
    /// - Tension (optional): the two pinned corners, capped at their initial distance
    ///
    /// Fails with `InvalidGridDimensions` below 2x2, or when `width * height` does not
    /// fit the `u32` indices of [`triangle_indices`](Self::triangle_indices).
    pub fn new(
        start: Vec2<F>,
        size: Vec2<F>,
        width: usize,
        height: usize,
        config: &ClothConfig<F>,
    ) -> Result<Self, PhysicsError> {
        if width < 2 || height < 2 {
            return Err(PhysicsError::InvalidGridDimensions { width, height });
        }
        // Mesh indices are u32.
        let fits_u32 = width.checked_mul(height).map_or(false, |n| u32::try_from(n).is_ok());
        if !fits_u32 {
            return Err(PhysicsError::InvalidGridDimensions { width, height });
        }

        let col_step = Vec2::new(size.x / F::from_usize(width - 1), F::zero());
        let row_step = Vec2::new(F::zero(), size.y / F::from_usize(height - 1));
        let col_len = col_step.length();
        let row_len = row_step.length();

        let structural = (width - 1) * height + width * (height - 1);
        let edge = width.saturating_mul(width - 1) / 2;
        let mut solver = ConstraintSolver::with_capacity(width * height, structural + edge + 1);

        for row in 0..height {
            let mass = if row == 0 { config.edge_mass } else { config.particle_mass };
            for col in 0..width {
                let pos = start - row_step * F::from_usize(row) + col_step * F::from_usize(col);
                solver.add_particle(Particle::new(pos, config.gravity).with_mass(mass)?);
            }
        }

        for row in 0..height {
            for col in 0..width {
                let i = row * width + col;
                if col + 1 < width {
                    solver.add_constraint(DistanceConstraint::rigid(i, i + 1, col_len)?)?;
                }
                if row + 1 < height {
                    solver.add_constraint(DistanceConstraint::rigid(i, i + width, row_len)?)?;
                }
            }
        }

        for j in 1..width {
            let length = col_len * F::from_usize(j);
            for i in j..width {
                solver.add_constraint(DistanceConstraint::rigid(i, i - j, length)?)?;
            }
        }

        let corner = width - 1;
        for index in [0, corner] {
            if let Some(p) = solver.particle_mut(index) {
                p.pin();
            }
        }

        if config.tension {
            let particles = solver.particles();
            let span = particles[0].position.distance(particles[corner].position);
            solver.add_constraint(TensionConstraint::new(0, corner, span)?)?;
        }

        log::debug!(
            "cloth: {}x{} grid, {} particles, {} constraints",
            width,
            height,
            solver.particle_count(),
            solver.constraint_count()
        );

        Ok(Cloth { solver, width, height, size })
    }

    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.width + col
    }

    pub fn position_at(&self, col: usize, row: usize) -> Option<Vec2<F>> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.solver.particle(self.index(col, row)).map(|p| p.position)
    }

    pub fn pin(&mut self, col: usize, row: usize) -> Result<(), PhysicsError> {
        self.grid_particle_mut(col, row)?.pin();
        Ok(())
    }

    pub fn unpin(&mut self, col: usize, row: usize) -> Result<(), PhysicsError> {
        self.grid_particle_mut(col, row)?.unpin();
        Ok(())
    }

    fn grid_particle_mut(&mut self, col: usize, row: usize) -> Result<&mut Particle<F>, PhysicsError> {
        let (index, count) = (self.index(col, row), self.particle_count());
        if col >= self.width || index >= count {
            return Err(PhysicsError::ParticleOutOfBounds { index, count });
        }
        Ok(&mut self.solver.particles_mut()[index])
    }

    /// Two triangles per grid cell, indexing the row-major particle array.
    ///
    /// The topology never changes after construction, so renderers can cache this.
    /// Every index fits in `u32`; `new` rejects larger grids.
    pub fn triangle_indices(&self) -> AllocVec<u32> {
        let (w, h) = (self.width, self.height);
        let mut indices = AllocVec::with_capacity(6 * (w - 1) * (h - 1));
        for row in 0..h - 1 {
            for col in 0..w - 1 {
                let v = (row * w + col) as u32;
                let below = v + w as u32;
                indices.extend_from_slice(&[v, below, below + 1, v, v + 1, below + 1]);
            }
        }
        indices
    }

    /// Texture coordinates per particle: `u` along columns, `v` from 1 at the top row to 0.
    pub fn uv_coordinates(&self) -> AllocVec<Vec2<F>> {
        let cols = F::from_usize(self.width - 1);
        let rows = F::from_usize(self.height - 1);
        let mut uvs = AllocVec::with_capacity(self.width * self.height);
        for row in 0..self.height {
            for col in 0..self.width {
                uvs.push(Vec2::new(
                    F::from_usize(col) / cols,
                    F::one() - F::from_usize(row) / rows,
                ));
            }
        }
        uvs
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn size(&self) -> Vec2<F> { self.size }
    pub fn particle_count(&self) -> usize { self.solver.particle_count() }
    pub fn constraint_count(&self) -> usize { self.solver.constraint_count() }
    pub fn solver(&self) -> &ConstraintSolver<F> { &self.solver }
}

impl<F: Float> Simulation<F> for Cloth<F> {
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

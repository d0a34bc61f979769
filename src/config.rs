//! Configuration types for the solver and the topology builders.

use crate::float::Float;
use crate::vec::Vec2;

/// Configuration for the constraint solver and the fixed-step driver.
///
/// # Builder Pattern
/// ```
/// use drape::config::SolverConfig;
///
/// let config: SolverConfig<f32> = SolverConfig::new()
///     .with_iterations(30)
///     .with_fixed_dt(1.0 / 120.0)
///     .with_max_frame_time(0.25)
///     .with_drag_smoothing(0.25);
/// assert_eq!(config.iterations, 30);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig<F: Float> {
    /// Relaxation passes over every constraint per step. Default: 30.
    pub iterations: usize,
    /// Sub-step handed to the integrator by `FixedTimestep`. Default: 1/60 s.
    pub fixed_dt: F,
    /// Upper bound on the frame time fed into the accumulator. Default: 0.25 s.
    pub max_frame_time: F,
    /// Fraction of the remaining distance a dragged particle covers per frame. Default: 0.25.
    pub drag_smoothing: F,
}

impl<F: Float> SolverConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SolverConfig {
            iterations: 30,
            fixed_dt: F::one() / F::from_f32(60.0),
            max_frame_time: F::from_f32(0.25),
            drag_smoothing: F::from_f32(0.25),
        }
    }

    /// Set the number of relaxation passes.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the fixed sub-step. Non-positive values are ignored.
    pub fn with_fixed_dt(mut self, fixed_dt: F) -> Self {
        if fixed_dt > F::zero() && fixed_dt.is_finite() {
            self.fixed_dt = fixed_dt;
        }
        self
    }

    /// Set the stall clamp for a single frame.
    pub fn with_max_frame_time(mut self, max_frame_time: F) -> Self {
        self.max_frame_time = max_frame_time.max(F::zero());
        self
    }

    /// Set the drag easing factor, clamped to [0, 1].
    pub fn with_drag_smoothing(mut self, smoothing: F) -> Self {
        self.drag_smoothing = smoothing.clamp(F::zero(), F::one());
        self
    }
}

impl<F: Float> Default for SolverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for building a rope.
#[derive(Clone, Debug, PartialEq)]
pub struct RopeConfig<F: Float> {
    /// Constant acceleration given to every particle. Default: (0, -29.81).
    pub gravity: Vec2<F>,
    pub particle_mass: F,
    /// How many predecessors each particle is linked to. 1 gives a plain chain. Default: 10.
    pub bend_reach: usize,
}

impl<F: Float> RopeConfig<F> {
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_particle_mass(mut self, mass: F) -> Self {
        self.particle_mass = mass;
        self
    }

    pub fn with_bend_reach(mut self, reach: usize) -> Self {
        self.bend_reach = reach.max(1);
        self
    }
}

impl<F: Float> Default for RopeConfig<F> {
    fn default() -> Self {
        RopeConfig {
            gravity: Vec2::new(F::zero(), F::from_f32(-29.81)),
            particle_mass: F::one(),
            bend_reach: 10,
        }
    }
}

/// Configuration for building a cloth.
#[derive(Clone, Debug, PartialEq)]
pub struct ClothConfig<F: Float> {
    /// Constant acceleration given to every particle. Default: (0, -15.81).
    pub gravity: Vec2<F>,
    pub particle_mass: F,
    /// Mass of the top row, which stiffens the hanging edge. Default: 100.
    pub edge_mass: F,
    /// Link the two pinned corners with a tension constraint. Default: true.
    pub tension: bool,
}

impl<F: Float> ClothConfig<F> {
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_particle_mass(mut self, mass: F) -> Self {
        self.particle_mass = mass;
        self
    }

    pub fn with_edge_mass(mut self, mass: F) -> Self {
        self.edge_mass = mass;
        self
    }

    pub fn with_tension(mut self, tension: bool) -> Self {
        self.tension = tension;
        self
    }
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        ClothConfig {
            gravity: Vec2::new(F::zero(), F::from_f32(-15.81)),
            particle_mass: F::one(),
            edge_mass: F::from_f32(100.0),
            tension: true,
        }
    }
}

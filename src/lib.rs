//! Verlet ropes and cloth for games and visualizations.
//!
//! `drape` simulates 1D (rope) and 2D (cloth) particle networks with Verlet integration
//! and iterative distance-constraint relaxation. It produces particle positions each
//! frame; turning them into geometry is up to the renderer.
//!
//! # Features
//!
//! - **Verlet integration**: Position-based dynamics with implicit velocity
//! - **Mass-weighted relaxation**: Min/max distance constraints, Gauss-Seidel order
//! - **Ropes & cloth**: [`Rope`] with bending links, [`Cloth`] with a stiff pinned edge
//! - **Fixed stepping**: [`FixedTimestep`] keeps the integrator on a constant `dt`
//! - **Dragging**: Ease pinned particles toward an external target via [`DragTarget`]
//! - **Observable**: Monitor physics steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use drape::{Cloth, ClothConfig, FixedTimestep, NoOpStepObserver, Simulation, SolverConfig, Vec2};
//!
//! let mut cloth = Cloth::new(Vec2::new(-0.5f32, 0.5), Vec2::new(1.0, 1.0), 8, 8, &ClothConfig::default())?;
//! let config = SolverConfig::new();
//! let mut clock = FixedTimestep::new(&config);
//! clock.advance(&mut cloth, 1.0 / 30.0, &config, &mut NoOpStepObserver);
//! assert_eq!(cloth.positions().len(), 64);
//! # Ok::<(), drape::PhysicsError>(())
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod solver;
pub mod simulation;
pub mod rope;
pub mod cloth;
pub mod timestep;
pub mod interaction;
pub mod viewport;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::Particle;
pub use constraint::{Constraint, DistanceConstraint, TensionConstraint};
pub use solver::ConstraintSolver;
pub use simulation::Simulation;
pub use rope::Rope;
pub use cloth::Cloth;
pub use timestep::FixedTimestep;
pub use interaction::{pick_fixed, DragTarget, Grab};
pub use viewport::Viewport;
pub use config::{ClothConfig, RopeConfig, SolverConfig};
pub use observer::{LogObserver, NoOpStepObserver, StepCounter, StepObserver};
pub use error::PhysicsError;

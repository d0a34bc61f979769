//! Fixed-step accumulator that decouples simulation stability from frame rate.

use crate::config::SolverConfig;
use crate::float::Float;
use crate::interaction::DragTarget;
use crate::observer::StepObserver;
use crate::simulation::Simulation;

/// Feeds wall-clock frame time to a simulation in constant `fixed_dt` slices.
///
/// Frame time is clamped to `max_frame_time` before it is banked, so a stall does not
/// turn into a burst of catch-up steps. Leftover time carries into the next frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedTimestep<F: Float> {
    accumulator: F,
    fixed_dt: F,
    max_frame_time: F,
}

impl<F: Float> FixedTimestep<F> {
    pub fn new(config: &SolverConfig<F>) -> Self {
        FixedTimestep {
            accumulator: F::zero(),
            fixed_dt: config.fixed_dt,
            max_frame_time: config.max_frame_time,
        }
    }

    /// Bank `frame_time` and run as many fixed steps as it covers.
    ///
    /// Returns the number of steps taken.
    pub fn advance<S, O>(
        &mut self,
        sim: &mut S,
        frame_time: F,
        config: &SolverConfig<F>,
        observer: &mut O,
    ) -> usize
    where
        S: Simulation<F>,
        O: StepObserver,
    {
        let clamped = frame_time.clamp(F::zero(), self.max_frame_time);
        if frame_time > self.max_frame_time {
            log::warn!(
                "frame took {:?}s, simulating only {:?}s",
                frame_time,
                self.max_frame_time
            );
        }
        self.accumulator = self.accumulator + clamped;

        let mut steps = 0;
        while self.accumulator >= self.fixed_dt {
            sim.step(self.fixed_dt, config, observer);
            self.accumulator = self.accumulator - self.fixed_dt;
            steps += 1;
        }
        steps
    }

    /// Like [`advance`](Self::advance), easing a dragged particle first.
    ///
    /// The drag is applied once per frame, not once per sub-step.
    pub fn advance_with_drag<S, O>(
        &mut self,
        sim: &mut S,
        frame_time: F,
        drag: Option<&DragTarget<F>>,
        config: &SolverConfig<F>,
        observer: &mut O,
    ) -> usize
    where
        S: Simulation<F>,
        O: StepObserver,
    {
        if let Some(target) = drag {
            if let Err(e) = sim.drag(target, config.drag_smoothing) {
                log::debug!("ignoring drag input: {}", e);
            }
        }
        self.advance(sim, frame_time, config, observer)
    }

    /// Time banked but not yet simulated.
    pub fn accumulator(&self) -> F {
        self.accumulator
    }

    /// Fraction of a step left in the accumulator, for render interpolation.
    pub fn alpha(&self) -> F {
        self.accumulator / self.fixed_dt
    }

    pub fn fixed_dt(&self) -> F {
        self.fixed_dt
    }

    pub fn reset(&mut self) {
        self.accumulator = F::zero();
    }
}

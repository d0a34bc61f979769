//! Hooks into the solver's step loop.

/// Receives an event at each stage of `ConstraintSolver::step`.
///
/// Every method defaults to doing nothing, so implementors only override the
/// stages they care about.
pub trait StepObserver {
    /// All particles have been moved by one Verlet step.
    fn on_integrate(&mut self) {}

    /// One relaxation pass over the constraint list has finished.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Integration and every relaxation pass are done.
    fn on_step_complete(&mut self) {}
}

/// Ignores every event.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Forwards every event to the `log` facade at trace level.
pub struct LogObserver {
    step: u64,
}

impl LogObserver {
    pub fn new() -> Self {
        LogObserver { step: 0 }
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl StepObserver for LogObserver {
    fn on_integrate(&mut self) {
        log::trace!("step {}: integrated", self.step);
    }

    fn on_constraint_iteration(&mut self, iteration: usize) {
        log::trace!("step {}: relaxation pass {}", self.step, iteration);
    }

    fn on_step_complete(&mut self) {
        log::trace!("step {}: complete", self.step);
        self.step += 1;
    }
}

/// Counts events. Handy in tests and for cheap profiling.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepCounter {
    pub integrations: usize,
    pub iterations: usize,
    pub steps: usize,
}

impl StepObserver for StepCounter {
    fn on_integrate(&mut self) {
        self.integrations += 1;
    }

    fn on_constraint_iteration(&mut self, _iteration: usize) {
        self.iterations += 1;
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}

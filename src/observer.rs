//! Step observer trait for monitoring simulation progress.

/// Trait for observing simulation step phases.
///
/// Implement this trait to monitor solver progress (e.g., for
/// debugging, visualization, or performance profiling). All methods
/// have default no-op implementations.
pub trait StepObserver {
    /// Called after every particle has been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called after the link relaxation pass.
    fn on_relax(&mut self) {}

    /// Called when a step is fully complete (after the boundary pass).
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

//! PhysicalSystem trait for pluggable dynamical models.

use ps_core::State;

use crate::error::SimResult;

/// A first-order model `dx/dt = f(x, t)`.
///
/// Implementations must be pure: the same `(state, t)` always yields the same
/// derivative, the input is never mutated, and there is no hidden time cursor,
/// so integrators may evaluate any `t` in any order.
///
/// The returned derivative has the same dimensionality as `state`. A system
/// handed a state of the wrong size reports
/// [`SimError::DimensionMismatch`](crate::SimError::DimensionMismatch) rather
/// than guessing.
pub trait PhysicalSystem: Send + Sync {
    /// Number of state components this system expects.
    fn dimension(&self) -> usize;

    /// Compute the time derivative of `state` at time `t`.
    fn derivatives(&self, state: &State, t: f64) -> SimResult<State>;
}

impl<S: PhysicalSystem + ?Sized> PhysicalSystem for &S {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn derivatives(&self, state: &State, t: f64) -> SimResult<State> {
        (**self).derivatives(state, t)
    }
}

impl<S: PhysicalSystem + ?Sized> PhysicalSystem for Box<S> {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn derivatives(&self, state: &State, t: f64) -> SimResult<State> {
        (**self).derivatives(state, t)
    }
}

//! Post-step hooks applied to the live state before it is recorded.

use ps_core::State;

/// Hook run after every completed step, before the snapshot is taken.
///
/// The observer may rewrite the live state (for example to wrap angles into
/// `[-π, π]`); whatever it leaves behind is what the next step starts from.
/// Closures of the form `FnMut(&mut State, f64)` implement this trait.
pub trait StepObserver {
    fn observe(&mut self, state: &mut State, t: f64);
}

impl<F> StepObserver for F
where
    F: FnMut(&mut State, f64),
{
    fn observe(&mut self, state: &mut State, t: f64) {
        self(state, t)
    }
}

/// Observer that leaves the state untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoObserver;

impl StepObserver for NoObserver {
    fn observe(&mut self, _state: &mut State, _t: f64) {}
}

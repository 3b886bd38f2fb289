//! Angle wraparound policy.

use std::f64::consts::{PI, TAU};

use ps_core::State;
use ps_sim::StepObserver;

/// Map an angle into `[-π, π]`.
///
/// Angles already in range are returned untouched, so wrapping is idempotent
/// and a pendulum that never swings over the top is never modified. Non-finite
/// input passes through unchanged.
pub fn wrap_angle(theta: f64) -> f64 {
    if (-PI..=PI).contains(&theta) || !theta.is_finite() {
        return theta;
    }
    (theta + PI).rem_euclid(TAU) - PI
}

/// Unsigned angular separation of `a` and `b`, in `[0, π]`.
///
/// Two angles either side of the `±π` seam are close, not `2π` apart.
pub fn angular_difference(a: f64, b: f64) -> f64 {
    wrap_angle(a - b).abs()
}

/// Step observer that wraps angles in the live state after every step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AngleWrap {
    /// Wrap every position-like (even) component.
    Positions,
    /// Wrap a single component.
    Component(usize),
}

impl AngleWrap {
    /// Apply the policy to `state` in place.
    ///
    /// # Panics
    ///
    /// `Component(i)` panics when `i` is outside the state.
    pub fn apply(&self, state: &mut State) {
        match *self {
            AngleWrap::Positions => {
                for theta in state.values_mut().iter_mut().step_by(2) {
                    *theta = wrap_angle(*theta);
                }
            }
            AngleWrap::Component(i) => state[i] = wrap_angle(state[i]),
        }
    }
}

impl StepObserver for AngleWrap {
    fn observe(&mut self, state: &mut State, _t: f64) {
        self.apply(state);
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn wrapped_angle_is_in_range_and_equivalent(theta in -1.0e4_f64..1.0e4) {
            let w = wrap_angle(theta);
            prop_assert!((-PI..=PI).contains(&w));
            // Same direction on the circle.
            prop_assert!((w.sin() - theta.sin()).abs() < 1e-9);
            prop_assert!((w.cos() - theta.cos()).abs() < 1e-9);
        }

        #[test]
        fn difference_is_symmetric_and_bounded(a in -50.0_f64..50.0, b in -50.0_f64..50.0) {
            let d = angular_difference(a, b);
            prop_assert!((0.0..=PI).contains(&d));
            prop_assert!((d - angular_difference(b, a)).abs() < 1e-12);
        }
    }
}

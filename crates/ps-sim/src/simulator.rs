//! Simulation driver over a half-open time window.

use ps_core::State;
use tracing::{debug, trace};

use crate::error::{SimError, SimResult, ensure_dimension, ensure_time_advanced};
use crate::integrator::Integrator;
use crate::model::PhysicalSystem;
use crate::observer::{NoObserver, StepObserver};
use crate::sim::SimRecord;

/// Composes one physical system and one integrator with a fixed step size.
///
/// The simulator owns nothing between runs: every call to [`Simulator::run`]
/// clones the initial state into a private working buffer, steps it in place,
/// and records a fresh copy after each step. The caller's initial state is
/// never modified and the same simulator can be run any number of times.
#[derive(Clone, Debug)]
pub struct Simulator<S, I> {
    system: S,
    integrator: I,
    dt: f64,
}

impl<S, I> Simulator<S, I>
where
    S: PhysicalSystem,
    I: Integrator,
{
    /// Create a simulator. `dt` must be finite and positive.
    pub fn new(system: S, integrator: I, dt: f64) -> SimResult<Self> {
        let dt = ps_core::ensure_positive(dt, "dt must be positive and finite")?;
        Ok(Self {
            system,
            integrator,
            dt,
        })
    }

    pub fn system(&self) -> &S {
        &self.system
    }

    pub fn integrator(&self) -> &I {
        &self.integrator
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Integrate from `t0` while `t < tf`, returning the state after each step.
    ///
    /// The initial state itself is not part of the result. A window with
    /// `t0 >= tf` yields an empty trajectory. The number of points is
    /// `ceil((tf - t0) / dt)` up to one step of floating-point drift.
    ///
    /// # Errors
    ///
    /// Fails if the initial state does not match the system's dimension, or if
    /// the integrator rejects the state layout or a derivative.
    pub fn run(&self, initial: &State, t0: f64, tf: f64) -> SimResult<Vec<State>> {
        self.run_observed(initial, t0, tf, NoObserver)
    }

    /// Like [`Simulator::run`], but hands the live state to `observer` after
    /// each step, before the snapshot is recorded.
    pub fn run_observed<O: StepObserver>(
        &self,
        initial: &State,
        t0: f64,
        tf: f64,
        mut observer: O,
    ) -> SimResult<Vec<State>> {
        let mut trajectory = Vec::new();
        self.drive(initial, t0, tf, |state, t| {
            observer.observe(state, t);
            trace!(t, "recorded point");
            trajectory.push(state.clone());
        })?;
        Ok(trajectory)
    }

    /// Like [`Simulator::run`], also recording the time reached by each step.
    ///
    /// `record.t[i]` is the time at which `record.x[i]` was reached, so
    /// consumers need not reconstruct `t0 + i * dt` themselves.
    pub fn run_recorded(&self, initial: &State, t0: f64, tf: f64) -> SimResult<SimRecord> {
        self.run_recorded_observed(initial, t0, tf, NoObserver)
    }

    pub fn run_recorded_observed<O: StepObserver>(
        &self,
        initial: &State,
        t0: f64,
        tf: f64,
        mut observer: O,
    ) -> SimResult<SimRecord> {
        let mut record = SimRecord::default();
        self.drive(initial, t0, tf, |state, t| {
            observer.observe(state, t);
            record.push(t, state.clone());
        })?;
        Ok(record)
    }

    /// Core loop shared by every `run*` flavor.
    fn drive<F>(&self, initial: &State, t0: f64, tf: f64, mut on_step: F) -> SimResult<usize>
    where
        F: FnMut(&mut State, f64),
    {
        if !t0.is_finite() || !tf.is_finite() {
            return Err(SimError::InvalidArg {
                what: "time window bounds must be finite",
            });
        }
        if t0 >= tf {
            debug!(t0, tf, "empty time window, nothing to integrate");
            return Ok(0);
        }
        ensure_dimension("initial state", self.system.dimension(), initial.len())?;

        debug!(
            integrator = self.integrator.name(),
            dim = initial.len(),
            t0,
            tf,
            dt = self.dt,
            "starting run"
        );

        let mut state = initial.clone();
        let mut t = t0;
        let mut steps = 0_usize;
        while t < tf {
            let before = t;
            self.integrator
                .step(&self.system, &mut state, &mut t, self.dt)?;
            ensure_time_advanced(before, t)?;
            steps += 1;
            on_step(&mut state, t);
        }

        debug!(steps, t_final = t, "run finished");
        Ok(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrator::{EulerCromer, ForwardEuler};

    /// Particle drifting at unit speed: state (x, v) with zero acceleration.
    struct Drift;

    impl PhysicalSystem for Drift {
        fn dimension(&self) -> usize {
            2
        }

        fn derivatives(&self, state: &State, _t: f64) -> SimResult<State> {
            Ok(State::from([state[1], 0.0]))
        }
    }

    #[test]
    fn new_rejects_bad_dt() {
        assert!(Simulator::new(Drift, EulerCromer, 0.0).is_err());
        assert!(Simulator::new(Drift, EulerCromer, -0.1).is_err());
        assert!(Simulator::new(Drift, EulerCromer, f64::NAN).is_err());
    }

    #[test]
    fn run_records_each_step_after_stepping() {
        let sim = Simulator::new(Drift, EulerCromer, 0.25).unwrap();
        let traj = sim.run(&State::from([0.0, 1.0]), 0.0, 1.0).unwrap();

        assert_eq!(traj.len(), 4);
        assert_eq!(traj[0].values(), &[0.25, 1.0]);
        assert_eq!(traj[3].values(), &[1.0, 1.0]);
    }

    #[test]
    fn empty_window_returns_nothing() {
        let sim = Simulator::new(Drift, EulerCromer, 0.1).unwrap();
        let initial = State::from([0.5, 1.0]);

        assert!(sim.run(&initial, 1.0, 1.0).unwrap().is_empty());
        assert!(sim.run(&initial, 2.0, 1.0).unwrap().is_empty());
        assert_eq!(initial.values(), &[0.5, 1.0]);
    }

    #[test]
    fn snapshots_are_independent() {
        let sim = Simulator::new(Drift, ForwardEuler, 0.5).unwrap();
        let traj = sim.run(&State::from([0.0, 2.0]), 0.0, 2.0).unwrap();

        let positions: Vec<f64> = traj.iter().map(|s| s[0]).collect();
        assert_eq!(positions, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn wrong_initial_dimension_is_rejected() {
        let sim = Simulator::new(Drift, EulerCromer, 0.1).unwrap();
        let err = sim.run(&State::from([0.0]), 0.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            SimError::DimensionMismatch {
                what: "initial state",
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn observer_edits_are_recorded_and_carried_forward() {
        let sim = Simulator::new(Drift, EulerCromer, 1.0).unwrap();
        let traj = sim
            .run_observed(&State::from([0.0, 1.0]), 0.0, 3.0, |s: &mut State, _t: f64| {
                if s[0] >= 2.0 {
                    s[0] -= 2.0;
                }
            })
            .unwrap();

        let positions: Vec<f64> = traj.iter().map(|s| s[0]).collect();
        assert_eq!(positions, vec![1.0, 0.0, 1.0]);
    }

    #[test]
    fn run_recorded_keeps_times_aligned() {
        let sim = Simulator::new(Drift, EulerCromer, 0.5).unwrap();
        let record = sim.run_recorded(&State::from([0.0, 1.0]), 1.0, 3.0).unwrap();

        assert_eq!(record.t, vec![1.5, 2.0, 2.5, 3.0]);
        assert_eq!(record.x.len(), record.t.len());
        assert_eq!(record.x[1].values(), &[1.0, 1.0]);
    }

    #[test]
    fn non_finite_window_is_rejected() {
        let sim = Simulator::new(Drift, EulerCromer, 0.5).unwrap();
        assert!(sim.run(&State::from([0.0, 1.0]), f64::NAN, 1.0).is_err());
        assert!(sim.run(&State::from([0.0, 1.0]), 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn dt_below_float_spacing_is_rejected() {
        // At 2^53 the spacing between floats is 2, so adding 1.0 is lost.
        let t0 = 2.0_f64.powi(53);
        let sim = Simulator::new(Drift, EulerCromer, 1.0).unwrap();
        let initial = State::from([0.0, 1.0]);

        assert_eq!(
            sim.run(&initial, t0, t0 + 4.0),
            Err(SimError::InvalidArg {
                what: "dt too small to advance time",
            })
        );
        assert!(sim.run_recorded(&initial, t0, t0 + 4.0).is_err());
    }
}

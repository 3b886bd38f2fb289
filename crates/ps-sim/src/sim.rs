//! Options-driven simulation runner and result recording.

use ps_core::State;
use tracing::{debug, warn};

use crate::error::{SimError, SimResult, ensure_dimension, ensure_time_advanced};
use crate::integrator::{EulerCromer, ForwardEuler, Integrator, RK4};
use crate::model::PhysicalSystem;
use crate::observer::{NoObserver, StepObserver};

/// Integrator selection for simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntegratorType {
    /// Semi-implicit Euler (default, 1 derivative call per step, needs
    /// interleaved position/velocity pairs).
    #[default]
    EulerCromer,
    /// Forward Euler (1st-order, any layout).
    ForwardEuler,
    /// 4th-order Runge-Kutta (4 derivative calls per step, any layout).
    RK4,
}

/// Options for simulation runs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimOptions {
    /// Fixed time step (seconds)
    pub dt: f64,
    /// Start time (seconds)
    pub t0: f64,
    /// Final simulation time (seconds)
    pub t_end: f64,
    /// Maximum number of steps (safety limit)
    pub max_steps: usize,
    /// Record every N-th step (decimation)
    pub record_every: usize,
    /// Integrator type (default: Euler-Cromer)
    pub integrator: IntegratorType,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            dt: 0.04,
            t0: 0.0,
            t_end: 200.0,
            max_steps: 1_000_000,
            record_every: 1,
            integrator: IntegratorType::default(),
        }
    }
}

impl SimOptions {
    /// Check the options before any stepping happens.
    pub fn validate(&self) -> SimResult<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimError::InvalidArg {
                what: "dt must be positive and finite",
            });
        }
        if !(self.t0.is_finite() && self.t_end.is_finite()) {
            return Err(SimError::InvalidArg {
                what: "time window bounds must be finite",
            });
        }
        if self.max_steps == 0 {
            return Err(SimError::InvalidArg {
                what: "max_steps must be positive",
            });
        }
        if self.record_every == 0 {
            return Err(SimError::InvalidArg {
                what: "record_every must be positive",
            });
        }
        Ok(())
    }
}

/// Record of simulation results.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimRecord {
    /// Time points (seconds)
    pub t: Vec<f64>,
    /// State snapshots
    pub x: Vec<State>,
}

impl SimRecord {
    pub fn push(&mut self, t: f64, x: State) {
        self.t.push(t);
        self.x.push(x);
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn last(&self) -> Option<(f64, &State)> {
        Some((*self.t.last()?, self.x.last()?))
    }

    /// Iterate `(t, state)` pairs in time order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &State)> {
        self.t.iter().copied().zip(self.x.iter())
    }

    /// One state component as a time series, e.g. `component(0)` for θ.
    ///
    /// # Errors
    ///
    /// Fails if any recorded state is shorter than `index + 1`.
    pub fn component(&self, index: usize) -> SimResult<Vec<f64>> {
        self.x
            .iter()
            .map(|s| s.try_get(index).map_err(SimError::from))
            .collect()
    }
}

/// Run a transient simulation as configured by `opts`.
///
/// Unlike [`Simulator::run`](crate::Simulator::run) the record starts with
/// the initial state at `opts.t0`, honors `record_every` decimation (the final
/// state is always recorded), and stops early at `max_steps`.
pub fn run_sim<S>(system: &S, initial: &State, opts: &SimOptions) -> SimResult<SimRecord>
where
    S: PhysicalSystem + ?Sized,
{
    run_sim_observed(system, initial, opts, NoObserver)
}

/// [`run_sim`] with a post-step observer applied to the live state.
pub fn run_sim_observed<S, O>(
    system: &S,
    initial: &State,
    opts: &SimOptions,
    observer: O,
) -> SimResult<SimRecord>
where
    S: PhysicalSystem + ?Sized,
    O: StepObserver,
{
    opts.validate()?;
    ensure_dimension("initial state", system.dimension(), initial.len())?;

    match opts.integrator {
        IntegratorType::EulerCromer => run_with(&EulerCromer, system, initial, opts, observer),
        IntegratorType::ForwardEuler => run_with(&ForwardEuler, system, initial, opts, observer),
        IntegratorType::RK4 => run_with(&RK4, system, initial, opts, observer),
    }
}

fn run_with<I, S, O>(
    integrator: &I,
    system: &S,
    initial: &State,
    opts: &SimOptions,
    mut observer: O,
) -> SimResult<SimRecord>
where
    I: Integrator,
    S: PhysicalSystem + ?Sized,
    O: StepObserver,
{
    debug!(
        integrator = integrator.name(),
        dt = opts.dt,
        t0 = opts.t0,
        t_end = opts.t_end,
        record_every = opts.record_every,
        "starting run"
    );

    let mut t = opts.t0;
    let mut x = initial.clone();

    let mut record = SimRecord::default();
    record.push(t, x.clone());

    let mut step = 0;
    while t < opts.t_end && step < opts.max_steps {
        let before = t;
        integrator.step(system, &mut x, &mut t, opts.dt)?;
        ensure_time_advanced(before, t)?;
        observer.observe(&mut x, t);
        step += 1;

        // Record if decimation matches
        if step % opts.record_every == 0 {
            record.push(t, x.clone());
        }
    }

    // Always record final state
    if step % opts.record_every != 0 {
        record.push(t, x);
    }

    if t < opts.t_end {
        warn!(
            max_steps = opts.max_steps,
            t_reached = t,
            t_end = opts.t_end,
            "step limit reached before end time"
        );
    }
    debug!(steps = step, recorded = record.len(), "run finished");

    Ok(record)
}

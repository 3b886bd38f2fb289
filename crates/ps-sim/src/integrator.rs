//! Fixed-step time integrators.

use ps_core::State;

use crate::error::{SimError, SimResult, ensure_dimension};
use crate::model::PhysicalSystem;

/// Trait for one-step integration rules.
///
/// `step` advances `state` and `t` in place by exactly one step of size `dt`.
/// The dimensionality of `state` is never changed. If the system misbehaves
/// (wrong derivative size) the step fails before `state` or `t` is touched.
pub trait Integrator: Send + Sync {
    /// Human-readable scheme name.
    fn name(&self) -> &'static str;

    /// Advance state by one time step using the physical system.
    fn step<S: PhysicalSystem + ?Sized>(
        &self,
        system: &S,
        state: &mut State,
        t: &mut f64,
        dt: f64,
    ) -> SimResult<()>;
}

/// Evaluate the system and check the derivative has the state's shape.
fn checked_derivatives<S: PhysicalSystem + ?Sized>(
    system: &S,
    state: &State,
    t: f64,
) -> SimResult<State> {
    let d = system.derivatives(state, t)?;
    ensure_dimension("derivative", state.len(), d.len())?;
    Ok(d)
}

/// Semi-implicit ("Euler-Cromer") Euler for interleaved (position, velocity)
/// pairs.
///
/// ```text
///   v_{n+1} = v_n + a(x_n, t_n) * dt     (every odd index)
///   x_{n+1} = x_n + v_{n+1} * dt         (every even index, updated velocity)
///   t_{n+1} = t_n + dt
/// ```
///
/// Calls `derivatives` once per step. Because positions use the freshly
/// updated velocity, oscillatory systems keep a bounded energy error instead
/// of the steady growth forward Euler shows.
///
/// The state must have even dimensionality; anything else is rejected with
/// [`SimError::Layout`].
#[derive(Clone, Copy, Debug, Default)]
pub struct EulerCromer;

impl Integrator for EulerCromer {
    fn name(&self) -> &'static str {
        "Euler-Cromer"
    }

    fn step<S: PhysicalSystem + ?Sized>(
        &self,
        system: &S,
        state: &mut State,
        t: &mut f64,
        dt: f64,
    ) -> SimResult<()> {
        if state.len() % 2 != 0 {
            return Err(SimError::Layout {
                integrator: "Euler-Cromer",
                what: "state must be interleaved (position, velocity) pairs",
            });
        }

        let d = checked_derivatives(system, state, *t)?;
        let x = state.values_mut();
        let dx = d.values();

        // Velocities first...
        for i in (1..x.len()).step_by(2) {
            x[i] += dx[i] * dt;
        }
        // ...then positions from the updated velocities.
        for i in (0..x.len()).step_by(2) {
            x[i] += x[i + 1] * dt;
        }

        *t += dt;
        Ok(())
    }
}

/// Forward Euler (explicit, 1st order).
/// Calls `derivatives` once per step and accepts any layout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn name(&self) -> &'static str {
        "forward Euler"
    }

    fn step<S: PhysicalSystem + ?Sized>(
        &self,
        system: &S,
        state: &mut State,
        t: &mut f64,
        dt: f64,
    ) -> SimResult<()> {
        let d = checked_derivatives(system, state, *t)?;
        for (x, dx) in state.values_mut().iter_mut().zip(d.iter()) {
            *x += dx * dt;
        }
        *t += dt;
        Ok(())
    }
}

/// Classical RK4 (Runge-Kutta 4th order) integrator.
#[derive(Clone, Copy, Debug, Default)]
pub struct RK4;

/// `x + h * k`, component-wise.
fn offset(x: &State, k: &State, h: f64) -> State {
    x.iter().zip(k.iter()).map(|(x, k)| x + h * k).collect::<Vec<_>>().into()
}

impl Integrator for RK4 {
    fn name(&self) -> &'static str {
        "RK4"
    }

    fn step<S: PhysicalSystem + ?Sized>(
        &self,
        system: &S,
        state: &mut State,
        t: &mut f64,
        dt: f64,
    ) -> SimResult<()> {
        let t0 = *t;

        let k1 = checked_derivatives(system, state, t0)?;

        let x2 = offset(state, &k1, 0.5 * dt);
        let k2 = checked_derivatives(system, &x2, t0 + 0.5 * dt)?;

        let x3 = offset(state, &k2, 0.5 * dt);
        let k3 = checked_derivatives(system, &x3, t0 + 0.5 * dt)?;

        let x4 = offset(state, &k3, dt);
        let k4 = checked_derivatives(system, &x4, t0 + dt)?;

        // x_new = x + (dt/6) * (k1 + 2*k2 + 2*k3 + k4)
        for (i, x) in state.values_mut().iter_mut().enumerate() {
            *x += dt / 6.0 * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]);
        }

        *t = t0 + dt;
        Ok(())
    }
}

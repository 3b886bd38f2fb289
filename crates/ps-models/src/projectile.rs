//! Frictionless projectile in a uniform gravity field.

use ps_core::State;
use ps_core::units::Accel;
use ps_sim::error::ensure_dimension;
use ps_sim::{PhysicalSystem, SimResult};
use uom::si::acceleration::meter_per_second_squared;

use crate::error::{ModelResult, check_finite};

/// Point mass with state `(x, vx, y, vy)`: two interleaved
/// (position, velocity) pairs, so it runs under every integrator.
///
/// ```text
///   d/dt (x, vx, y, vy) = (vx, 0, vy, -g)
/// ```
///
/// The model does not stop at the ground; callers decide what `y < 0` means.
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    g: f64,
}

impl Projectile {
    pub fn new(g: f64) -> ModelResult<Self> {
        Ok(Self {
            g: check_finite(g, "g")?,
        })
    }

    pub fn from_quantity(g: Accel) -> ModelResult<Self> {
        Self::new(g.get::<meter_per_second_squared>())
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    /// Initial state for a launch from the origin at `speed` (m/s) and
    /// `angle` (rad above the horizontal).
    pub fn launch(speed: f64, angle: f64) -> State {
        let (sin, cos) = angle.sin_cos();
        State::from([0.0, speed * cos, 0.0, speed * sin])
    }

    /// Analytic horizontal range on flat ground: `v²·sin(2α)/g`.
    pub fn range(&self, speed: f64, angle: f64) -> f64 {
        speed * speed * (2.0 * angle).sin() / self.g
    }

    /// Analytic apex height: `v²·sin²α/(2g)`.
    pub fn max_height(&self, speed: f64, angle: f64) -> f64 {
        let vy = speed * angle.sin();
        vy * vy / (2.0 * self.g)
    }

    /// Analytic time until the projectile returns to `y = 0`.
    pub fn flight_time(&self, speed: f64, angle: f64) -> f64 {
        2.0 * speed * angle.sin() / self.g
    }
}

impl PhysicalSystem for Projectile {
    fn dimension(&self) -> usize {
        4
    }

    fn derivatives(&self, state: &State, _t: f64) -> SimResult<State> {
        ensure_dimension("projectile state", 4, state.len())?;
        Ok(State::from([state[1], 0.0, state[3], -self.g]))
    }
}

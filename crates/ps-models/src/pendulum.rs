//! Nonlinear, damped, driven pendulum.

use std::f64::consts::TAU;

use ps_core::State;
use ps_core::units::{Accel, AngularAccel, AngularVelocity, Frequency, Length};
use ps_sim::error::ensure_dimension;
use ps_sim::{PhysicalSystem, SimResult};
use uom::si::acceleration::meter_per_second_squared;
use uom::si::angular_acceleration::radian_per_second_squared;
use uom::si::angular_velocity::radian_per_second;
use uom::si::frequency::hertz;
use uom::si::length::meter;

use crate::error::{ModelError, ModelResult, check_finite};

/// Physical constants of a [`Pendulum`].
///
/// `Default` gives the textbook chaotic configuration:
/// `g = 9.8`, `l = 9.8`, `q = 0.5`, `F_D = 1.2`, `Ω_D = 2/3`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendulumParams {
    /// Gravitational acceleration (m/s²)
    pub g: f64,
    /// Pendulum length (m), must be positive
    pub l: f64,
    /// Linear damping coefficient (1/s)
    pub q: f64,
    /// Driving-force amplitude `F_D` (rad/s²)
    pub drive_amplitude: f64,
    /// Driving angular frequency `Ω_D` (rad/s)
    pub drive_frequency: f64,
}

impl Default for PendulumParams {
    fn default() -> Self {
        Self {
            g: 9.8,
            l: 9.8,
            q: 0.5,
            drive_amplitude: 1.2,
            drive_frequency: 2.0 / 3.0,
        }
    }
}

impl PendulumParams {
    /// Undamped, undriven pendulum with the given `g` and `l`.
    pub fn free(g: f64, l: f64) -> Self {
        Self {
            g,
            l,
            q: 0.0,
            drive_amplitude: 0.0,
            drive_frequency: 0.0,
        }
    }
}

/// Pendulum with state `(θ, ω)`:
///
/// ```text
///   dθ/dt = ω
///   dω/dt = -(g/l)·sin θ - q·ω + F_D·sin(Ω_D·t)
/// ```
///
/// No small-angle linearization is applied. θ is left unwrapped; callers that
/// want it kept in `[-π, π]` apply that policy after each step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pendulum {
    params: PendulumParams,
}

impl Pendulum {
    /// Create a pendulum, validating all parameters are finite and `l > 0`.
    pub fn new(params: PendulumParams) -> ModelResult<Self> {
        check_finite(params.g, "g")?;
        check_finite(params.l, "l")?;
        check_finite(params.q, "q")?;
        check_finite(params.drive_amplitude, "drive_amplitude")?;
        check_finite(params.drive_frequency, "drive_frequency")?;
        if params.l <= 0.0 {
            return Err(ModelError::NonPhysical {
                what: "pendulum length must be positive",
            });
        }
        Ok(Self { params })
    }

    /// Create a pendulum from SI quantities.
    pub fn from_quantities(
        g: Accel,
        l: Length,
        q: Frequency,
        drive_amplitude: AngularAccel,
        drive_frequency: AngularVelocity,
    ) -> ModelResult<Self> {
        Self::new(PendulumParams {
            g: g.get::<meter_per_second_squared>(),
            l: l.get::<meter>(),
            q: q.get::<hertz>(),
            drive_amplitude: drive_amplitude.get::<radian_per_second_squared>(),
            drive_frequency: drive_frequency.get::<radian_per_second>(),
        })
    }

    pub fn params(&self) -> &PendulumParams {
        &self.params
    }

    /// Same pendulum with a different drive amplitude.
    pub fn with_drive(&self, drive_amplitude: f64) -> ModelResult<Self> {
        Self::new(PendulumParams {
            drive_amplitude,
            ..self.params
        })
    }

    /// `g/l`, the squared small-angle natural frequency.
    pub fn stiffness(&self) -> f64 {
        self.params.g / self.params.l
    }

    /// Small-angle natural frequency `sqrt(g/l)` (rad/s).
    pub fn natural_frequency(&self) -> f64 {
        self.stiffness().sqrt()
    }

    /// Period of the external drive `2π/Ω_D`, or `None` when undriven.
    pub fn drive_period(&self) -> Option<f64> {
        if self.params.drive_frequency == 0.0 {
            None
        } else {
            Some(TAU / self.params.drive_frequency.abs())
        }
    }

    /// Mechanical energy per unit `m·l²`: `½ω² - (g/l)·cos θ`.
    ///
    /// # Panics
    ///
    /// Panics if `state` has fewer than two components.
    pub fn energy(&self, state: &State) -> f64 {
        let (theta, omega) = (state[0], state[1]);
        0.5 * omega * omega - self.stiffness() * theta.cos()
    }
}

impl PhysicalSystem for Pendulum {
    fn dimension(&self) -> usize {
        2
    }

    fn derivatives(&self, state: &State, t: f64) -> SimResult<State> {
        ensure_dimension("pendulum state", 2, state.len())?;
        let PendulumParams {
            q,
            drive_amplitude,
            drive_frequency,
            ..
        } = self.params;
        let (theta, omega) = (state[0], state[1]);

        let dtheta = omega;
        let domega = -self.stiffness() * theta.sin() - q * omega
            + drive_amplitude * (drive_frequency * t).sin();

        Ok(State::from([dtheta, domega]))
    }
}

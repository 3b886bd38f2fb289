//! Scenario schema definitions.

use ps_models::PendulumParams;
use ps_sim::{IntegratorType, SimOptions};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    pub system: SystemDef,
    pub initial_state: Vec<f64>,
    #[serde(default)]
    pub run: RunDef,
    /// Keep every position component in `[-π, π]` after each step.
    #[serde(default)]
    pub wrap_angles: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum SystemDef {
    Pendulum(PendulumParams),
    Projectile { g: f64 },
}

impl SystemDef {
    /// Number of state components the system expects.
    pub fn dimension(&self) -> usize {
        match self {
            SystemDef::Pendulum(_) => 2,
            SystemDef::Projectile { .. } => 4,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SystemDef::Pendulum(_) => "Pendulum",
            SystemDef::Projectile { .. } => "Projectile",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunDef {
    pub dt: f64,
    #[serde(default)]
    pub t0: f64,
    pub t_end: f64,
    #[serde(default)]
    pub integrator: IntegratorType,
    #[serde(default = "default_record_every")]
    pub record_every: usize,
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
}

fn default_record_every() -> usize {
    1
}

fn default_max_steps() -> usize {
    1_000_000
}

impl Default for RunDef {
    fn default() -> Self {
        let opts = SimOptions::default();
        Self {
            dt: opts.dt,
            t0: opts.t0,
            t_end: opts.t_end,
            integrator: opts.integrator,
            record_every: opts.record_every,
            max_steps: opts.max_steps,
        }
    }
}

impl RunDef {
    pub fn to_options(&self) -> SimOptions {
        SimOptions {
            dt: self.dt,
            t0: self.t0,
            t_end: self.t_end,
            max_steps: self.max_steps,
            record_every: self.record_every,
            integrator: self.integrator,
        }
    }
}

//! ps-models: physical systems for phasestep.
//!
//! Provides:
//! - Nonlinear, damped, driven pendulum (`Pendulum`)
//! - Frictionless projectile (`Projectile`)
//!
//! Every model implements `ps_sim::PhysicalSystem` and is immutable after
//! construction, so one instance can back any number of simulations.
//!
//! # Example
//!
//! ```
//! use ps_models::{Pendulum, PendulumParams};
//! use ps_sim::{EulerCromer, Simulator, State};
//!
//! let pendulum = Pendulum::new(PendulumParams {
//!     drive_amplitude: 0.5,
//!     ..PendulumParams::default()
//! })
//! .unwrap();
//!
//! let sim = Simulator::new(pendulum, EulerCromer, 0.04).unwrap();
//! let trajectory = sim.run(&State::from([0.2, 0.0]), 0.0, 10.0).unwrap();
//! // ~10 s / 0.04 s, give or take one step of time drift.
//! assert!(trajectory.len().abs_diff(250) <= 1);
//! ```

pub mod error;
pub mod pendulum;
pub mod projectile;

// Re-exports
pub use error::{ModelError, ModelResult};
pub use pendulum::{Pendulum, PendulumParams};
pub use projectile::Projectile;

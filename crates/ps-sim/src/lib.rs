//! Fixed-step time integration for phasestep.
//!
//! Provides:
//! - `PhysicalSystem`: pluggable state -> derivative models
//! - `Integrator`: one-step rules (Euler-Cromer, forward Euler, RK4)
//! - `Simulator`: drives an integrator over a half-open time window
//! - `run_sim`: options-driven runner with decimation and a step limit

pub mod error;
pub mod integrator;
pub mod model;
pub mod observer;
pub mod sim;
pub mod simulator;

// Re-exports for public API
pub use error::{SimError, SimResult};
pub use integrator::{EulerCromer, ForwardEuler, Integrator, RK4};
pub use model::PhysicalSystem;
pub use observer::{NoObserver, StepObserver};
pub use ps_core::State;
pub use sim::{IntegratorType, SimOptions, SimRecord, run_sim, run_sim_observed};
pub use simulator::Simulator;

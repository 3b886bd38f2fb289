//! ps-core: shared foundation for phasestep.
//!
//! Contains:
//! - state (the phase-space vector every system and integrator agrees on)
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod state;
pub mod units;

pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use state::State;

//! ps-analysis: post-processing of trajectories.
//!
//! Everything here runs after (or alongside, via a step observer) a
//! simulation and never changes how the core integrates:
//! - angle wrapping into `[-π, π]` and angular differences
//! - divergence between two runs (sensitivity to initial conditions)
//! - energy series and drift summaries
//! - Poincaré sections sampled once per drive period
//! - parallel parameter sweeps

pub mod angle;
pub mod divergence;
pub mod energy;
pub mod error;
pub mod poincare;
pub mod sweep;

pub use angle::{AngleWrap, angular_difference, wrap_angle};
pub use divergence::{DivergenceSummary, divergence, first_exceeding};
pub use energy::{EnergyDrift, energy_series};
pub use error::{AnalysisError, AnalysisResult};
pub use poincare::poincare_section;
pub use sweep::sweep;

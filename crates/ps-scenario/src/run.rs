//! Turning a validated scenario into a simulation run.

use ps_analysis::AngleWrap;
use ps_core::State;
use ps_models::{Pendulum, Projectile};
use ps_sim::{PhysicalSystem, SimRecord, run_sim, run_sim_observed};
use tracing::{info, warn};

use crate::schema::{Scenario, SystemDef};
use crate::validate::validate_scenario;
use crate::ScenarioResult;

/// Instantiate the model a scenario describes.
pub fn build_system(def: &SystemDef) -> ScenarioResult<Box<dyn PhysicalSystem>> {
    let system: Box<dyn PhysicalSystem> = match def {
        SystemDef::Pendulum(params) => Box::new(Pendulum::new(*params)?),
        SystemDef::Projectile { g } => Box::new(Projectile::new(*g)?),
    };
    Ok(system)
}

/// Validate, build, and run a scenario.
///
/// The record starts with the initial state at `run.t0`. With `wrap_angles`
/// set, every even component is wrapped into `[-π, π]` after each step.
pub fn run_scenario(scenario: &Scenario) -> ScenarioResult<SimRecord> {
    validate_scenario(scenario)?;

    let system = build_system(&scenario.system)?;
    let initial = State::from(scenario.initial_state.clone());
    let opts = scenario.run.to_options();

    if scenario.wrap_angles && matches!(scenario.system, SystemDef::Projectile { .. }) {
        warn!(
            scenario = %scenario.name,
            "wrap_angles on a projectile treats positions as angles"
        );
    }

    info!(
        scenario = %scenario.name,
        system = scenario.system.kind(),
        integrator = ?opts.integrator,
        "running scenario"
    );

    let record = if scenario.wrap_angles {
        run_sim_observed(system.as_ref(), &initial, &opts, AngleWrap::Positions)?
    } else {
        run_sim(system.as_ref(), &initial, &opts)?
    };
    Ok(record)
}

//! Scenario validation logic.

use crate::schema::{RunDef, Scenario, SystemDef};

/// Newest scenario format this crate reads and writes.
pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Initial state has {actual} components but {system} expects {expected}")]
    DimensionMismatch {
        system: String,
        expected: usize,
        actual: usize,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version == 0 || scenario.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    validate_system(&scenario.system)?;

    let expected = scenario.system.dimension();
    if scenario.initial_state.len() != expected {
        return Err(ValidationError::DimensionMismatch {
            system: scenario.system.kind().to_string(),
            expected,
            actual: scenario.initial_state.len(),
        });
    }
    for (i, value) in scenario.initial_state.iter().enumerate() {
        validate_finite(&format!("initial_state[{i}]"), *value)?;
    }

    validate_run(&scenario.run)
}

fn validate_system(system: &SystemDef) -> Result<(), ValidationError> {
    match system {
        SystemDef::Pendulum(p) => {
            validate_finite("system.g", p.g)?;
            validate_positive_finite("system.l", p.l)?;
            validate_finite("system.q", p.q)?;
            validate_finite("system.drive_amplitude", p.drive_amplitude)?;
            validate_finite("system.drive_frequency", p.drive_frequency)?;
        }
        SystemDef::Projectile { g } => validate_finite("system.g", *g)?,
    }
    Ok(())
}

fn validate_run(run: &RunDef) -> Result<(), ValidationError> {
    validate_positive_finite("run.dt", run.dt)?;
    validate_finite("run.t0", run.t0)?;
    validate_finite("run.t_end", run.t_end)?;
    if run.record_every == 0 {
        return Err(ValidationError::InvalidValue {
            field: "run.record_every".to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    if run.max_steps == 0 {
        return Err(ValidationError::InvalidValue {
            field: "run.max_steps".to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}

fn validate_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be finite".to_string(),
        });
    }
    Ok(())
}

fn validate_positive_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be positive and finite".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ps_models::PendulumParams;

    fn pendulum_scenario() -> Scenario {
        Scenario {
            version: LATEST_VERSION,
            name: "test".to_string(),
            system: SystemDef::Pendulum(PendulumParams::default()),
            initial_state: vec![0.2, 0.0],
            run: RunDef::default(),
            wrap_angles: true,
        }
    }

    #[test]
    fn default_pendulum_is_valid() {
        validate_scenario(&pendulum_scenario()).unwrap();
    }

    #[test]
    fn rejects_unknown_versions() {
        for version in [0, LATEST_VERSION + 1] {
            let scenario = Scenario {
                version,
                ..pendulum_scenario()
            };
            assert_eq!(
                validate_scenario(&scenario),
                Err(ValidationError::UnsupportedVersion { version })
            );
        }
    }

    #[test]
    fn rejects_wrong_dimension() {
        let scenario = Scenario {
            system: SystemDef::Projectile { g: 9.81 },
            ..pendulum_scenario()
        };
        assert_eq!(
            validate_scenario(&scenario),
            Err(ValidationError::DimensionMismatch {
                system: "Projectile".to_string(),
                expected: 4,
                actual: 2,
            })
        );
    }

    #[test]
    fn rejects_non_positive_length() {
        let scenario = Scenario {
            system: SystemDef::Pendulum(PendulumParams {
                l: 0.0,
                ..PendulumParams::default()
            }),
            ..pendulum_scenario()
        };
        match validate_scenario(&scenario) {
            Err(ValidationError::InvalidValue { field, .. }) => assert_eq!(field, "system.l"),
            other => panic!("expected invalid length, got {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_run_options() {
        let mut scenario = pendulum_scenario();
        scenario.run.dt = -0.1;
        assert!(validate_scenario(&scenario).is_err());

        let mut scenario = pendulum_scenario();
        scenario.run.record_every = 0;
        assert!(validate_scenario(&scenario).is_err());

        let mut scenario = pendulum_scenario();
        scenario.initial_state[1] = f64::NAN;
        match validate_scenario(&scenario) {
            Err(ValidationError::InvalidValue { field, .. }) => {
                assert_eq!(field, "initial_state[1]")
            }
            other => panic!("expected invalid initial state, got {other:?}"),
        }
    }
}

use ps_models::PendulumParams;
use ps_scenario::schema::*;
use ps_scenario::{
    LATEST_VERSION, ScenarioError, load_json, load_record_json, load_yaml, run_scenario,
    save_json, save_record_json, save_yaml,
};
use ps_sim::IntegratorType;
use std::path::PathBuf;

/// Scratch file unique to this test process.
fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("ps_scenario_{}_{name}", std::process::id()))
}

fn short_pendulum() -> Scenario {
    Scenario {
        version: LATEST_VERSION,
        name: "short pendulum".to_string(),
        system: SystemDef::Pendulum(PendulumParams::default()),
        initial_state: vec![0.2, 0.0],
        run: RunDef {
            dt: 0.04,
            t0: 0.0,
            t_end: 4.0,
            integrator: IntegratorType::RK4,
            record_every: 5,
            max_steps: 10_000,
        },
        wrap_angles: true,
    }
}

#[test]
fn roundtrip_yaml() {
    let scenario = short_pendulum();
    let path = temp_path("roundtrip.yaml");

    save_yaml(&path, &scenario).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn roundtrip_json_projectile() {
    let scenario = Scenario {
        name: "thrown".to_string(),
        system: SystemDef::Projectile { g: 9.81 },
        initial_state: vec![0.0, 3.0, 1.5, 4.0],
        wrap_angles: false,
        ..short_pendulum()
    };
    let path = temp_path("roundtrip.json");

    save_json(&path, &scenario).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn invalid_scenario_is_not_saved() {
    let scenario = Scenario {
        initial_state: vec![0.2, 0.0, 0.0],
        ..short_pendulum()
    };
    let path = temp_path("invalid.yaml");

    let err = save_yaml(&path, &scenario).unwrap_err();
    assert!(matches!(err, ScenarioError::Validation(_)));
}

#[test]
fn malformed_yaml_is_reported() {
    let path = temp_path("malformed.yaml");
    std::fs::write(&path, "version: 1\nname: broken\nsystem:\n  type: Spring\n").unwrap();

    assert!(matches!(load_yaml(&path), Err(ScenarioError::Yaml(_))));
}

#[test]
fn record_roundtrip_json() {
    let record = run_scenario(&short_pendulum()).unwrap();
    let path = temp_path("record.json");

    save_record_json(&path, &record).unwrap();
    let loaded = load_record_json(&path).unwrap();

    assert_eq!(record.len(), loaded.len());
    for ((ta, xa), (tb, xb)) in record.iter().zip(loaded.iter()) {
        assert!(ps_core::nearly_equal(ta, tb, ps_core::Tolerances::default()));
        for (a, b) in xa.iter().zip(xb.iter()) {
            assert!((a - b).abs() <= 1e-12 * a.abs().max(1.0));
        }
    }
}

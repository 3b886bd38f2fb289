//! Sensitivity to initial conditions of the driven pendulum.

use ps_analysis::{
    AngleWrap, AnalysisError, DivergenceSummary, EnergyDrift, divergence, energy_series,
    poincare_section, sweep,
};
use ps_models::{Pendulum, PendulumParams};
use ps_sim::{EulerCromer, Simulator, State};

const DT: f64 = 0.04;
const T_END: f64 = 200.0;

fn wrapped_run(pendulum: &Pendulum, theta0: f64) -> Vec<State> {
    Simulator::new(pendulum, EulerCromer, DT)
        .unwrap()
        .run_observed(&State::from([theta0, 0.0]), 0.0, T_END, AngleWrap::Positions)
        .unwrap()
}

fn max_separation(drive_amplitude: f64) -> Result<f64, AnalysisError> {
    let pendulum = Pendulum::default()
        .with_drive(drive_amplitude)
        .map_err(ps_sim::SimError::from)?;
    let a = wrapped_run(&pendulum, 0.2);
    let b = wrapped_run(&pendulum, 0.2001);
    assert!((a.len() as f64 - T_END / DT).abs() <= 1.0);

    let series = divergence(&a, &b, 0)?;
    Ok(DivergenceSummary::from_series(&series)
        .map(|s| s.max)
        .unwrap_or(0.0))
}

#[test]
fn chaotic_drive_amplifies_tiny_offsets() {
    let max = max_separation(1.2).unwrap();
    assert!(max > 0.5, "chaotic regime only separated by {max}");
}

#[test]
fn periodic_drive_keeps_runs_together() {
    let max = max_separation(0.5).unwrap();
    assert!(max < 1e-3, "periodic regime separated by {max}");
}

#[test]
fn wrapped_angles_stay_in_range() {
    let traj = wrapped_run(&Pendulum::default(), 0.2);
    let pi = std::f64::consts::PI;
    assert!(traj.iter().all(|s| (-pi..=pi).contains(&s[0])));
    // The chaotic pendulum goes over the top, so wrapping actually fired.
    assert!(traj.iter().any(|s| s[0].abs() > 3.0));
}

#[test]
fn sweep_over_drive_preserves_order() {
    let maxima = sweep(&[0.5, 1.2, 0.5], |&fd| max_separation(fd)).unwrap();
    assert_eq!(maxima.len(), 3);
    assert!(maxima[0] < 1e-3);
    assert!(maxima[1] > 0.5);
    assert_eq!(maxima[0], maxima[2]);
}

fn section_spread(drive_amplitude: f64) -> f64 {
    let pendulum = Pendulum::default().with_drive(drive_amplitude).unwrap();
    let period = pendulum.drive_period().unwrap();
    let record = Simulator::new(&pendulum, EulerCromer, DT)
        .unwrap()
        .run_recorded_observed(&State::from([0.2, 0.0]), 0.0, T_END, AngleWrap::Positions)
        .unwrap();

    let section = poincare_section(&record, period).unwrap();
    assert_eq!(section.len(), 21);

    let thetas = section.component(0).unwrap();
    let (lo, hi) = thetas[11..]
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    hi - lo
}

#[test]
fn poincare_section_separates_regimes() {
    assert!(section_spread(0.5) < 0.05);
    assert!(section_spread(1.2) > 1.0);
}

#[test]
fn undriven_energy_is_nearly_conserved() {
    let pendulum = Pendulum::new(PendulumParams::free(9.8, 9.8)).unwrap();
    let traj = Simulator::new(&pendulum, EulerCromer, DT)
        .unwrap()
        .run(&State::from([0.2, 0.0]), 0.0, 20.0)
        .unwrap();

    let energies = energy_series(&traj, |s| pendulum.energy(s));
    let drift = EnergyDrift::from_series(&energies).unwrap();
    assert!(drift.spread() < 2e-3);
    assert!(drift.net_change.abs() < 2e-3);
}

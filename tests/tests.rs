use approx::assert_relative_eq;

use twobody::simulation::error::{ConfigError, IntegrationError, ZeroSeparation};
use twobody::simulation::forces::NewtonianGravity;
use twobody::simulation::integrator::{integrate, verlet_step};
use twobody::simulation::params::Parameters;
use twobody::simulation::states::{Body, NVec2, System};
use twobody::{BodyConfig, ParametersConfig, Scenario, ScenarioConfig};

/// Build a simple two-body System separated along the x-axis
pub fn two_body_system(dist: f64, m1: f64, m2: f64) -> System {
    let primary = Body {
        x: NVec2::new(-dist / 2.0, 0.0),
        v: NVec2::new(0.0, 0.0),
        m: m1,
        radius: 0.0,
    };
    let secondary = Body {
        x: NVec2::new(dist / 2.0, 0.0),
        v: NVec2::new(0.0, 0.0),
        m: m2,
        radius: 0.0,
    };
    System {
        primary,
        secondary,
        t: 0.0,
    }
}

/// Default physics parameters for tests
pub fn test_params() -> Parameters {
    Parameters {
        g: 0.1,
        dt: 0.001,
        t_max: 1.0,
    }
}

/// The Earth-Moon reference system: Earth at rest at the origin,
/// Moon at mean distance with tangential velocity
pub fn earth_moon_system() -> System {
    System {
        primary: Body {
            x: NVec2::new(0.0, 0.0),
            v: NVec2::new(0.0, 0.0),
            m: 5.972e24,
            radius: 6.371e6,
        },
        secondary: Body {
            x: NVec2::new(3.844e8, 0.0),
            v: NVec2::new(0.0, 1022.0),
            m: 7.348e22,
            radius: 1.737e6,
        },
        t: 0.0,
    }
}

/// Reference scenario parameters: 30-minute steps over 27 days
pub fn earth_moon_params() -> Parameters {
    Parameters {
        g: 6.67430e-11,
        dt: 1800.0,
        t_max: 2332800.0,
    }
}

/// A ScenarioConfig matching the bundled earth_moon.yaml
pub fn earth_moon_config() -> ScenarioConfig {
    ScenarioConfig {
        parameters: ParametersConfig {
            g: 6.67430e-11,
            dt: 1800.0,
            t_max: 2332800.0,
        },
        bodies: vec![
            BodyConfig {
                x: [0.0, 0.0],
                v: [0.0, 0.0],
                m: 5.972e24,
                radius: 6.371e6,
            },
            BodyConfig {
                x: [3.844e8, 0.0],
                v: [0.0, 1022.0],
                m: 7.348e22,
                radius: 1.737e6,
            },
        ],
        playback: None,
    }
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_newton_third_law() {
    let sys = two_body_system(1.0, 2.0, 3.0);
    let gravity = NewtonianGravity { g: 0.1 };

    let (a1, a2) = gravity.acceleration_pair(&sys).unwrap();

    let net = a1 * sys.primary.m + a2 * sys.secondary.m;

    assert!(net.norm() < 1e-12, "Net force not zero: {:?}", net);
}

#[test]
fn gravity_points_toward_other_body() {
    let sys = two_body_system(2.0, 1.0, 1.0);
    let gravity = NewtonianGravity { g: 0.1 };

    let (a1, a2) = gravity.acceleration_pair(&sys).unwrap();

    let dx = sys.separation();

    // Primary is pulled along +dx (toward the secondary), secondary along -dx
    assert!(dx.norm() > 0.0);
    assert!(a1.dot(&dx) > 0.0, "Primary not pulled toward secondary");
    assert!(a2.dot(&dx) < 0.0, "Secondary not pulled toward primary");
}

#[test]
fn gravity_inverse_square_law() {
    let sys_r = two_body_system(1.0, 1.0, 1.0);
    let sys_2r = two_body_system(2.0, 1.0, 1.0);
    let gravity = NewtonianGravity { g: 0.1 };

    let (a_r, _) = gravity.acceleration_pair(&sys_r).unwrap();
    let (a_2r, _) = gravity.acceleration_pair(&sys_2r).unwrap();

    let ratio = a_r.norm() / a_2r.norm();

    assert!((ratio - 4.0).abs() < 1e-9, "Expected ~4x, got {}", ratio);
}

#[test]
fn gravity_zero_separation_is_error() {
    let sys = two_body_system(0.0, 1.0, 1.0);
    let gravity = NewtonianGravity { g: 0.1 };

    // Must surface a distinct error, never a non-finite acceleration
    assert_eq!(gravity.acceleration_pair(&sys), Err(ZeroSeparation));
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn history_seeded_from_initial_positions() {
    let mut sys = earth_moon_system();
    let params = earth_moon_params();
    let gravity = NewtonianGravity { g: params.g };

    let history = integrate(&mut sys, &gravity, &params).unwrap();

    assert_eq!(history.len(), 1296);
    assert_eq!(history.primary[0], NVec2::new(0.0, 0.0));
    assert_eq!(history.secondary[0], NVec2::new(3.844e8, 0.0));
}

#[test]
fn first_step_displacement_matches_initial_velocity() {
    let mut sys = earth_moon_system();
    let params = earth_moon_params();
    let gravity = NewtonianGravity { g: params.g };

    let history = integrate(&mut sys, &gravity, &params).unwrap();

    // One 1800 s step at 1022 m/s, plus a small gravitational correction;
    // must land within 1% of v * dt
    let displacement = (history.secondary[1] - history.secondary[0]).norm();
    assert_relative_eq!(displacement, 1022.0 * 1800.0, max_relative = 0.01);
}

#[test]
fn momentum_conserved_over_full_run() {
    let mut sys = earth_moon_system();
    let params = earth_moon_params();
    let gravity = NewtonianGravity { g: params.g };

    let p0 = sys.momentum();
    integrate(&mut sys, &gravity, &params).unwrap();
    let p1 = sys.momentum();

    // Pairwise equal-and-opposite forces conserve momentum up to rounding
    let drift = (p1 - p0).norm() / p0.norm();
    assert!(drift < 1e-10, "Momentum drift too large: {}", drift);
}

#[test]
fn integration_is_deterministic() {
    let params = earth_moon_params();
    let gravity = NewtonianGravity { g: params.g };

    let mut sys_a = earth_moon_system();
    let mut sys_b = earth_moon_system();

    let run_a = integrate(&mut sys_a, &gravity, &params).unwrap();
    let run_b = integrate(&mut sys_b, &gravity, &params).unwrap();

    // Bit-identical, not merely close
    assert_eq!(run_a.primary, run_b.primary);
    assert_eq!(run_a.secondary, run_b.secondary);
}

#[test]
fn forward_then_backward_returns_to_start() {
    let mut sys = earth_moon_system();
    let gravity = NewtonianGravity { g: 6.67430e-11 };
    let dt = 1800.0;
    let n = 100;

    let x1_start = sys.primary.x;
    let x2_start = sys.secondary.x;

    for _ in 0..n {
        verlet_step(&mut sys, &gravity, dt).unwrap();
    }

    // Negate velocities and integrate the same number of steps; a
    // time-reversible scheme retraces the trajectory
    sys.primary.v = -sys.primary.v;
    sys.secondary.v = -sys.secondary.v;

    for _ in 0..n {
        verlet_step(&mut sys, &gravity, dt).unwrap();
    }

    let err1 = (sys.primary.x - x1_start).norm();
    let err2 = (sys.secondary.x - x2_start).norm();
    assert!(err1 < 100.0, "Primary off by {} m after reversal", err1);
    assert!(err2 < 100.0, "Secondary off by {} m after reversal", err2);
}

#[test]
fn zero_step_count_keeps_initial_condition_only() {
    let mut sys = earth_moon_system();
    // t_max shorter than one step: floor(t_max / dt) == 0
    let params = Parameters {
        g: 6.67430e-11,
        dt: 1800.0,
        t_max: 900.0,
    };
    let gravity = NewtonianGravity { g: params.g };

    let history = integrate(&mut sys, &gravity, &params).unwrap();

    assert_eq!(history.len(), 1);
    assert_eq!(history.primary[0], NVec2::new(0.0, 0.0));
    assert_eq!(history.secondary[0], NVec2::new(3.844e8, 0.0));
}

#[test]
fn collision_mid_run_is_a_distinct_error() {
    // Head-on approach at high closing speed with a step tuned to land
    // the bodies exactly on top of each other after one drift
    let mut sys = two_body_system(2.0, 1.0, 1.0);
    sys.primary.v = NVec2::new(1.0, 0.0);
    sys.secondary.v = NVec2::new(-1.0, 0.0);

    // G = 0 so the drift is purely ballistic and the overlap is exact
    let gravity = NewtonianGravity { g: 0.0 };
    let params = Parameters {
        g: 0.0,
        dt: 1.0,
        t_max: 10.0,
    };

    let err = integrate(&mut sys, &gravity, &params).unwrap_err();
    assert!(matches!(err, IntegrationError::BodiesCollided { step: 1, .. }));
}

// ==================================================================================
// Scenario validation tests
// ==================================================================================

#[test]
fn valid_scenario_builds() {
    let scenario = Scenario::build_scenario(earth_moon_config()).unwrap();
    assert_eq!(scenario.parameters.step_count(), 1296);

    let history = scenario.integrate().unwrap();
    assert_eq!(history.len(), 1296);
}

#[test]
fn non_positive_mass_is_rejected() {
    let mut cfg = earth_moon_config();
    cfg.bodies[0].m = -1.0;

    let err = Scenario::build_scenario(cfg).unwrap_err();
    assert_eq!(err, ConfigError::NonPositiveMass(-1.0));
}

#[test]
fn non_positive_time_step_is_rejected() {
    let mut cfg = earth_moon_config();
    cfg.parameters.dt = 0.0;

    let err = Scenario::build_scenario(cfg).unwrap_err();
    assert_eq!(err, ConfigError::NonPositiveTimeStep(0.0));
}

#[test]
fn non_positive_duration_is_rejected() {
    let mut cfg = earth_moon_config();
    cfg.parameters.t_max = -5.0;

    let err = Scenario::build_scenario(cfg).unwrap_err();
    assert_eq!(err, ConfigError::NonPositiveDuration(-5.0));
}

#[test]
fn coincident_initial_positions_are_rejected() {
    let mut cfg = earth_moon_config();
    cfg.bodies[1].x = cfg.bodies[0].x;

    let err = Scenario::build_scenario(cfg).unwrap_err();
    assert_eq!(err, ConfigError::CoincidentBodies);
}

#[test]
fn wrong_body_count_is_rejected() {
    let mut cfg = earth_moon_config();
    cfg.bodies.pop();

    let err = Scenario::build_scenario(cfg).unwrap_err();
    assert_eq!(err, ConfigError::BodyCountMismatch(1));
}

// ==================================================================================
// Orbit-quality tests
// ==================================================================================

#[test]
fn moon_stays_near_orbital_distance_over_a_month() {
    let mut sys = earth_moon_system();
    let params = earth_moon_params();
    let gravity = NewtonianGravity { g: params.g };

    let history = integrate(&mut sys, &gravity, &params).unwrap();

    // The real orbit is mildly eccentric; over one period the separation
    // should stay within ~20% of the mean distance, not drift or spiral
    for i in 0..history.len() {
        let sep = (history.secondary[i] - history.primary[i]).norm();
        assert!(
            (sep - 3.844e8).abs() / 3.844e8 < 0.2,
            "Separation {} m at step {} left the orbital band",
            sep,
            i
        );
    }
}

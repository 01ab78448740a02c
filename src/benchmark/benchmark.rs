use std::time::Instant;

use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::integrate;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

// Earth-Moon reference values, same as scenarios/earth_moon.yaml
const G: f64 = 6.67430e-11;
const M_EARTH: f64 = 5.972e24;
const M_MOON: f64 = 7.348e22;
const R: f64 = 3.844e8;
const V_MOON: f64 = 1022.0;
const DT: f64 = 1800.0;

/// Build the reference Earth-Moon system
fn make_system() -> System {
    System {
        primary: Body {
            x: NVec2::new(0.0, 0.0),
            v: NVec2::new(0.0, 0.0),
            m: M_EARTH,
            radius: 6.371e6,
        },
        secondary: Body {
            x: NVec2::new(R, 0.0),
            v: NVec2::new(0.0, V_MOON),
            m: M_MOON,
            radius: 1.737e6,
        },
        t: 0.0,
    }
}

/// Benchmark the full integrate() for a range of step counts
/// Paste output directly into a spreadsheet to graph
pub fn bench_verlet() {
    let gravity = NewtonianGravity { g: G };

    println!("steps,total_ms,ns_per_step");

    for steps in [1_000, 10_000, 100_000, 1_000_000] {
        let params = Parameters {
            g: G,
            dt: DT,
            t_max: DT * steps as f64,
        };

        // Warm up
        let mut sys = make_system();
        let _ = integrate(&mut sys, &gravity, &params);

        let mut sys = make_system();
        let t0 = Instant::now();
        let history = integrate(&mut sys, &gravity, &params).expect("benchmark run failed");
        let elapsed = t0.elapsed();

        let total_ms = elapsed.as_secs_f64() * 1000.0;
        let ns_per_step = elapsed.as_nanos() as f64 / history.len() as f64;

        println!("{},{:.3},{:.1}", steps, total_ms, ns_per_step);
    }
}

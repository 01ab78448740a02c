//! Fixed-step velocity-Verlet integrator for the two-body system
//!
//! Provides a single in-place step (`verlet_step`) and the full run
//! (`integrate`) that records both bodies' positions into a
//! `TrajectoryHistory`. Verlet is symplectic and time-reversible, so the
//! energy error stays bounded over many orbits at a fixed step size;
//! that is what keeps a looping animation from visibly spiraling.

use crate::simulation::error::{IntegrationError, ZeroSeparation};
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::params::Parameters;
use crate::simulation::states::System;
use crate::simulation::trajectory::TrajectoryHistory;

/// Advance the system by one step of velocity-Verlet, in place
/// Uses two force evaluations per step and updates positions, velocities,
/// and `sys.t` based on `dt`
pub fn verlet_step(
    sys: &mut System,
    gravity: &NewtonianGravity,
    dt: f64,
) -> Result<(), ZeroSeparation> {
    let half_dt = 0.5 * dt; // half step dt/2, half update for verlet

    // a_n from x_n at time t_n
    let (a1, a2) = gravity.acceleration_pair(sys)?;

    // Kick: v_n+1/2 = v_n + (dt/2) * a_n
    sys.primary.v += half_dt * a1;
    sys.secondary.v += half_dt * a2;

    // Drift: x_n+1 = x_n + dt * v_n+1/2
    sys.primary.x += dt * sys.primary.v;
    sys.secondary.x += dt * sys.secondary.v;

    // Increment the system time by one full step
    sys.t += dt;

    // a_n+1 from x_n+1 at time t_n+1
    let (a1_new, a2_new) = gravity.acceleration_pair(sys)?;

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) * a_n+1
    sys.primary.v += half_dt * a1_new;
    sys.secondary.v += half_dt * a2_new;

    Ok(())
}

/// Run the full integration and collect the position history
///
/// Index 0 of the history is seeded directly from the initial positions;
/// steps 1..step_count each advance the system once and record the new
/// positions. Velocity is running state inside `sys` and is not retained.
/// The loop is strictly sequential: step `i` depends on step `i-1`.
///
/// A mid-run zero separation indicates a collision the model does not
/// support and aborts the run as [`IntegrationError::BodiesCollided`].
pub fn integrate(
    sys: &mut System,
    gravity: &NewtonianGravity,
    params: &Parameters,
) -> Result<TrajectoryHistory, IntegrationError> {
    let steps = params.step_count();
    let mut history = TrajectoryHistory::with_initial(sys.primary.x, sys.secondary.x, steps);

    // steps == 0 is degenerate but allowed: no stepping, initial condition only
    for i in 1..steps {
        verlet_step(sys, gravity, params.dt)
            .map_err(|source| IntegrationError::BodiesCollided { step: i, source })?;
        history.push(sys.primary.x, sys.secondary.x);
    }

    Ok(history)
}

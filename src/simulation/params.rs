//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the runtime settings:
//! - gravitational constant `G`,
//! - fixed integration step size `dt`,
//! - total simulated duration `t_max`
//!
//! The step count is derived, not stored: `floor(t_max / dt)`.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64, // gravitational constant, m^3 kg^-1 s^-2
    pub dt: f64, // fixed time step, seconds
    pub t_max: f64, // total simulated duration, seconds
}

impl Parameters {
    /// Number of integration steps, `floor(t_max / dt)`
    /// A value of 0 is degenerate but allowed: the history then holds
    /// only the initial condition
    pub fn step_count(&self) -> usize {
        (self.t_max / self.dt).floor() as usize
    }
}

//! Core state types for the two-body simulation.
//!
//! Defines the body/system structs:
//! - `Body` using `NVec2` (2d position/velocity, mass, display radius)
//! - `System` holding exactly a primary and a secondary body plus time `t`
//!
//! The system always contains two bodies for the lifetime of a run; the
//! primary is conventionally the larger mass (e.g. Earth) and the secondary
//! the smaller one (e.g. Moon).

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position, meters
    pub v: NVec2, // velocity, m/s
    pub m: f64, // mass, kg
    pub radius: f64, // body radius, meters (marker scaling in the viewer only)
}

#[derive(Debug, Clone)]
pub struct System {
    pub primary: Body, // the larger mass
    pub secondary: Body, // the smaller mass
    pub t: f64, // simulation time, seconds
}

impl System {
    /// Separation vector from primary to secondary at the current time
    pub fn separation(&self) -> NVec2 {
        self.secondary.x - self.primary.x
    }

    /// Total linear momentum m1*v1 + m2*v2
    /// Conserved by the physics, so it doubles as an integration diagnostic
    pub fn momentum(&self) -> NVec2 {
        self.primary.m * self.primary.v + self.secondary.m * self.secondary.v
    }
}

//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! two-body scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body (exactly two)
//! - [`PlaybackConfig`]   – optional viewer playback settings
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The bundled Earth–Moon scenario, matching these types:
//!
//! ```yaml
//! parameters:
//!   G: 6.67430e-11          # gravitational constant, m^3 kg^-1 s^-2
//!   dt: 1800.0              # fixed step size, seconds (30 minutes)
//!   t_max: 2332800.0        # total duration, seconds (27 days)
//!
//! bodies:
//!   - x: [ 0.0, 0.0 ]       # Earth at the origin
//!     v: [ 0.0, 0.0 ]
//!     m: 5.972e24
//!     radius: 6.371e6
//!   - x: [ 3.844e8, 0.0 ]   # Moon at mean Earth-Moon distance
//!     v: [ 0.0, 1022.0 ]
//!     m: 7.348e22
//!     radius: 1.737e6
//!
//! playback:
//!   steps_per_frame: 1
//!   trail: true
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation, validating it in the process.

use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(rename = "G")]
    pub g: f64,   // gravitational constant
    pub dt: f64,  // fixed time step size, seconds
    pub t_max: f64, // total simulated duration, seconds
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: [f64; 2], // initial position vector, meters
    pub v: [f64; 2], // initial velocity vector, m/s
    pub m: f64,      // mass, kg
    pub radius: f64, // body radius, meters, used only for marker scaling in the viewer
}

/// Optional viewer playback settings
#[derive(Deserialize, Debug)]
pub struct PlaybackConfig {
    pub steps_per_frame: Option<usize>, // history indices advanced per rendered frame
    pub trail: Option<bool>, // draw the orbit trail behind each body
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // initial state of the two bodies, primary first
    pub playback: Option<PlaybackConfig>, // viewer settings, defaults applied if absent
}

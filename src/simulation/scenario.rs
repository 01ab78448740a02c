//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with both bodies at t = 0)
//! - the gravity model (`NewtonianGravity`)
//! - playback settings for the viewer
//!
//! All input validation happens here, before any stepping: bad scenarios
//! fail fast with a [`ConfigError`] instead of producing garbage
//! trajectories.

use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::error::{ConfigError, IntegrationError};
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::integrate;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};
use crate::simulation::trajectory::TrajectoryHistory;

/// Viewer playback settings carried alongside the physics
/// (consumed by the visualization layer only)
#[derive(Debug, Clone)]
pub struct Playback {
    pub steps_per_frame: usize, // history indices advanced per rendered frame
    pub trail: bool, // draw the orbit trail behind each body
}

/// Bevy resource representing a fully-initialized two-body scenario
///
/// This is the runtime bundle constructed from a [`ScenarioConfig`]: it
/// contains the parameters, the initial system state, and the gravity
/// model. In Bevy terms it is inserted as a `Resource` and read by the
/// playback and overlay systems.
#[derive(Debug, Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub gravity: NewtonianGravity,
    pub playback: Playback,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        // Exactly two bodies: the YAML surface is a list, so the two-body
        // constraint is enforced here rather than in the type system
        if cfg.bodies.len() != 2 {
            return Err(ConfigError::BodyCountMismatch(cfg.bodies.len()));
        }

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let primary = build_body(&cfg.bodies[0])?;
        let secondary = build_body(&cfg.bodies[1])?;

        // Coincident starts make the acceleration undefined from step one
        if primary.x == secondary.x {
            return Err(ConfigError::CoincidentBodies);
        }

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        if p_cfg.dt <= 0.0 {
            return Err(ConfigError::NonPositiveTimeStep(p_cfg.dt));
        }
        if p_cfg.t_max <= 0.0 {
            return Err(ConfigError::NonPositiveDuration(p_cfg.t_max));
        }
        let parameters = Parameters {
            g: p_cfg.g,
            dt: p_cfg.dt,
            t_max: p_cfg.t_max,
        };

        let gravity = NewtonianGravity { g: parameters.g };

        // Initial system state: both bodies at t = 0
        let system = System {
            primary,
            secondary,
            t: 0.0,
        };

        let playback = match cfg.playback {
            Some(pb) => Playback {
                steps_per_frame: pb.steps_per_frame.unwrap_or(1).max(1),
                trail: pb.trail.unwrap_or(true),
            },
            None => Playback {
                steps_per_frame: 1,
                trail: true,
            },
        };

        Ok(Self {
            parameters,
            system,
            gravity,
            playback,
        })
    }

    /// Run the integration from the stored initial state
    /// The scenario itself is untouched; each call starts from t = 0,
    /// which also makes repeated runs trivially comparable
    pub fn integrate(&self) -> Result<TrajectoryHistory, IntegrationError> {
        let mut sys = self.system.clone();
        integrate(&mut sys, &self.gravity, &self.parameters)
    }
}

fn build_body(bc: &BodyConfig) -> Result<Body, ConfigError> {
    if bc.m <= 0.0 {
        return Err(ConfigError::NonPositiveMass(bc.m));
    }
    Ok(Body {
        x: NVec2::new(bc.x[0], bc.x[1]),
        v: NVec2::new(bc.v[0], bc.v[1]),
        m: bc.m,
        radius: bc.radius,
    })
}

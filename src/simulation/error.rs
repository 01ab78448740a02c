//! Error taxonomy for the simulation core
//!
//! Two distinct failure families:
//! - [`ConfigError`] – invalid scenario input, detected before any stepping
//! - [`IntegrationError`] – the run itself failed (bodies collided mid-run)
//!
//! Accumulated floating-point drift is not an error; fixed-step explicit
//! integration accepts it by construction.

use thiserror::Error;

/// Invalid scenario configuration, rejected before the first step
/// Fatal and not retried: the caller must supply corrected parameters
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("body mass must be positive, got {0}")]
    NonPositiveMass(f64),

    #[error("time step must be positive, got {0}")]
    NonPositiveTimeStep(f64),

    #[error("total duration must be positive, got {0}")]
    NonPositiveDuration(f64),

    #[error("initial positions coincide; separation must be non-zero")]
    CoincidentBodies,

    #[error("scenario must define exactly 2 bodies, got {0}")]
    BodyCountMismatch(usize),
}

/// The separation between the two bodies is exactly zero, so the
/// acceleration 1/d^3 term is undefined
/// Surfaced as an error rather than letting a non-finite value through
#[derive(Debug, Error, PartialEq)]
#[error("bodies at zero separation; acceleration undefined")]
pub struct ZeroSeparation;

/// A failure during the integration loop itself
/// Distinct from [`ConfigError`]: the input was valid but the trajectory
/// reached a state the model does not support
#[derive(Debug, Error, PartialEq)]
pub enum IntegrationError {
    #[error("bodies collided at step {step}: {source}")]
    BodiesCollided {
        step: usize,
        source: ZeroSeparation,
    },
}

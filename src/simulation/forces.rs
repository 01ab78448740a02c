//! Gravitational acceleration for the two-body system
//!
//! Direct Newtonian gravity between the primary and secondary body.
//! No softening: the model fixes the exact 1/d^3 law, and a zero
//! separation is surfaced as [`ZeroSeparation`] instead of being smoothed.

use crate::simulation::error::ZeroSeparation;
use crate::simulation::states::{NVec2, System};

/// Newtonian point-mass gravity between the two bodies
/// Pure function of the system state; no side effects
#[derive(Debug)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl NewtonianGravity {
    /// Compute the acceleration pair `(a1, a2)` at the current positions
    ///
    /// Errors with [`ZeroSeparation`] if the bodies coincide; the division
    /// by `d^3` is undefined there and must never leak NaN/inf into the
    /// trajectory.
    pub fn acceleration_pair(&self, sys: &System) -> Result<(NVec2, NVec2), ZeroSeparation> {
        // r is the displacement vector from primary to secondary.
        // The primary feels a pull along +r, the secondary along -r.
        let r = sys.secondary.x - sys.primary.x;

        // Squared separation distance |r|^2
        let r2 = r.dot(&r);
        if r2 == 0.0 {
            return Err(ZeroSeparation);
        }

        // 1 / |r|^3, the distance factor in the Newtonian acceleration:
        //   a = G * m * r / |r|^3
        let inv_r = r2.sqrt().recip();
        let inv_r3 = inv_r * inv_r * inv_r;

        // coef = G / |r|^3
        let coef = self.g * inv_r3;

        // Newton's third law as an acceleration pair:
        //   a1 = +G * m2 * r / |r|^3   (primary pulled toward secondary)
        //   a2 = -G * m1 * r / |r|^3   (secondary pulled toward primary)
        // Equal and opposite once weighted by the respective masses.
        let a1 = coef * sys.secondary.m * r;
        let a2 = -coef * sys.primary.m * r;

        Ok((a1, a2))
    }
}

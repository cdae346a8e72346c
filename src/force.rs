//! Force fields sampled against particles during integration.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;

/// A pure force contribution evaluated at a particle's current state.
///
/// Fields carry only the data they need and capture no ambient state,
/// so integration stays deterministic and testable without a window.
#[derive(Copy, Clone, Debug)]
pub enum ForceField<F: Float> {
    /// The same acceleration everywhere (gravity, steady wind).
    Uniform(Vec2<F>),
    /// Arbitrary pure function of the particle (drag, turbulence).
    Custom(fn(&Particle<F>) -> Vec2<F>),
}

impl<F: Float> ForceField<F> {
    pub fn eval(&self, particle: &Particle<F>) -> Vec2<F> {
        match self {
            ForceField::Uniform(accel) => *accel,
            ForceField::Custom(f) => f(particle),
        }
    }
}

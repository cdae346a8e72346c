//! Error types for checked simulation construction.

use core::fmt;

/// Errors from checked construction of simulation contents.
///
/// Runtime stepping never fails; degenerate numerics resolve to
/// defined fallback values instead.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A link endpoint index does not name an existing particle.
    ParticleOutOfBounds { index: usize, count: usize },
    /// A link's endpoints refer to the same particle.
    DegenerateLink,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            SimError::DegenerateLink => {
                write!(f, "link endpoints must be distinct particles")
            }
        }
    }
}

//! Configuration types for mesh construction.

use crate::float::Float;

/// Configuration for a cloth mesh grid.
///
/// # Builder Pattern
/// ```
/// use clothy::config::MeshConfig;
///
/// let config: MeshConfig<f32> = MeshConfig::new()
///     .with_dimensions(8, 8)
///     .with_spacing(50.0)
///     .with_particle_radius(10.0);
/// ```
pub struct MeshConfig<F: Float> {
    /// Number of columns. Default: 8.
    pub cols: usize,
    /// Number of rows. Default: 8.
    pub rows: usize,
    /// Distance between neighboring particles; structural links rest
    /// at this length. Default: 50.0.
    pub spacing: F,
    /// Radius of every particle, used by the boundary clamp and by
    /// renderers. Default: 10.0.
    pub particle_radius: F,
}

impl<F: Float> MeshConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        MeshConfig {
            cols: 8,
            rows: 8,
            spacing: F::from_f32(50.0),
            particle_radius: F::from_f32(10.0),
        }
    }

    /// Set the grid dimensions.
    pub fn with_dimensions(mut self, cols: usize, rows: usize) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    /// Set the distance between neighboring particles.
    pub fn with_spacing(mut self, spacing: F) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the particle radius.
    pub fn with_particle_radius(mut self, radius: F) -> Self {
        self.particle_radius = radius;
        self
    }
}

impl<F: Float> Default for MeshConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

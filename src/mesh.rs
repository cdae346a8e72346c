//! Cloth mesh builder: a particle grid with structural links.

use crate::config::MeshConfig;
use crate::constraint::Link;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A rectangular particle grid plus the links connecting neighbors.
///
/// Construction output only; hand it to
/// [`Simulation::from_mesh`](crate::Simulation::from_mesh) to
/// simulate. Particle at (col, row) has index `row * cols + col`.
pub struct Mesh<F: Float> {
    pub particles: AllocVec<Particle<F>>,
    pub links: AllocVec<Link<F>>,
    cols: usize,
    rows: usize,
}

impl<F: Float> Mesh<F> {
    /// Build a grid starting at `origin`, extending in positive X
    /// (columns) and positive Y (rows).
    ///
    /// Row 0 is pinned. Links are appended in cell-scan order, each
    /// cell contributing its rightward link before its downward one,
    /// with rest lengths captured from the initial positions (so a
    /// uniform grid rests at exactly the spacing). Deterministic for
    /// a given origin and config.
    pub fn grid(origin: Vec2<F>, config: &MeshConfig<F>) -> Self {
        let cols = config.cols;
        let rows = config.rows;
        let mut particles = AllocVec::with_capacity(cols * rows);

        for row in 0..rows {
            for col in 0..cols {
                let x = origin.x + F::from_f32(col as f32) * config.spacing;
                let y = origin.y + F::from_f32(row as f32) * config.spacing;
                let pos = Vec2::new(x, y);
                if row == 0 {
                    particles.push(Particle::pinned(pos, config.particle_radius));
                } else {
                    particles.push(Particle::new(pos, config.particle_radius));
                }
            }
        }

        let mut links = AllocVec::new();
        for row in 0..rows {
            for col in 0..cols {
                let i = row * cols + col;
                if col + 1 < cols {
                    links.push(Link::from_particles(i, i + 1, &particles));
                }
                if row + 1 < rows {
                    links.push(Link::from_particles(i, i + cols, &particles));
                }
            }
        }

        Mesh { particles, links, cols, rows }
    }

    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    pub fn cols(&self) -> usize { self.cols }
    pub fn rows(&self) -> usize { self.rows }
}

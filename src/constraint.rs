//! Distance links between particles and the viewport boundary clamp.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;

/// A distance constraint between two particles in an arena.
///
/// Links store indices, not references; the owning simulation keeps
/// every particle alive for as long as any link refers to it.
#[derive(Clone, Debug)]
pub struct Link<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
}

impl<F: Float> Link<F> {
    pub fn new(a: usize, b: usize, rest_length: F) -> Self {
        Link { a, b, rest_length }
    }

    /// Build a link whose rest length is the current distance between
    /// the two particles.
    pub fn from_particles(a: usize, b: usize, particles: &[Particle<F>]) -> Self {
        let rest_length = particles[a].pos.distance(particles[b].pos);
        Link { a, b, rest_length }
    }

    /// One relaxation pass toward the rest length.
    ///
    /// Moves each unpinned endpoint by half the length error. Not
    /// iterated to convergence within a call; stiffness comes from
    /// repeating the pass over many frames. Coincident endpoints
    /// produce no correction (the normalized delta is zero).
    pub fn relax(&self, particles: &mut [Particle<F>]) {
        let delta = particles[self.b].pos - particles[self.a].pos;
        let dist = delta.length();
        let error = dist - self.rest_length;
        let correction = delta.normalize().scale(error * F::half());

        if !particles[self.a].pinned {
            particles[self.a].pos = particles[self.a].pos + correction;
        }
        if !particles[self.b].pinned {
            particles[self.b].pos = particles[self.b].pos - correction;
        }
    }

    /// Current endpoint positions, for rendering and hit testing.
    pub fn endpoints(&self, particles: &[Particle<F>]) -> (Vec2<F>, Vec2<F>) {
        (particles[self.a].pos, particles[self.b].pos)
    }

    /// Whether `point` lies within `radius` of the link's segment.
    ///
    /// Pure geometry over the current endpoint positions; the driver
    /// translates pointer coordinates into simulation space first.
    pub fn hit_test(&self, particles: &[Particle<F>], point: Vec2<F>, radius: F) -> bool {
        let (a, b) = self.endpoints(particles);
        let ab = b - a;
        let len_sq = ab.length_sq();
        let t = if len_sq == F::zero() {
            F::zero()
        } else {
            ((point - a).dot(ab) / len_sq).clamp(F::zero(), F::one())
        };
        let closest = a + ab.scale(t);
        point.distance_sq(closest) <= radius * radius
    }
}

/// Rectangular region particles are kept inside.
#[derive(Copy, Clone, Debug)]
pub struct Boundary<F: Float> {
    pub min: Vec2<F>,
    pub max: Vec2<F>,
}

impl<F: Float> Boundary<F> {
    pub fn new(min: Vec2<F>, max: Vec2<F>) -> Self {
        Boundary { min, max }
    }

    /// Clamp a particle's center so its circle stays inside the region.
    ///
    /// Applies to pinned particles too — pinning blocks integration
    /// and relaxation writes, not the boundary. The region must be at
    /// least `2 * radius` wide per axis or the clamp bounds invert;
    /// that is the caller's contract and is not validated here.
    pub fn clamp(&self, p: &mut Particle<F>) {
        p.pos.x = p.pos.x.clamp(self.min.x + p.radius, self.max.x - p.radius);
        p.pos.y = p.pos.y.clamp(self.min.y + p.radius, self.max.y - p.radius);
    }
}

//! The simulation aggregate: particles, links, forces, and boundary.

use crate::config::MeshConfig;
use crate::constraint::{Boundary, Link};
use crate::error::SimError;
use crate::float::Float;
use crate::force::ForceField;
use crate::mesh::Mesh;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A particle-and-link simulation advanced in discrete fixed steps.
///
/// Owns every collection the solver touches; [`Simulation::step`] is
/// the only entry point that advances time. Particles are never
/// destroyed during a run — only links are removable.
pub struct Simulation<F: Float> {
    particles: AllocVec<Particle<F>>,
    links: AllocVec<Link<F>>,
    forces: AllocVec<ForceField<F>>,
    boundary: Option<Boundary<F>>,
}

impl<F: Float> Simulation<F> {
    pub fn new() -> Self {
        Simulation {
            particles: AllocVec::new(),
            links: AllocVec::new(),
            forces: AllocVec::new(),
            boundary: None,
        }
    }

    /// Take ownership of a built mesh's particles and links.
    pub fn from_mesh(mesh: Mesh<F>) -> Self {
        Simulation {
            particles: mesh.particles,
            links: mesh.links,
            forces: AllocVec::new(),
            boundary: None,
        }
    }

    /// Convenience: a cloth grid simulation in one call.
    pub fn cloth(origin: Vec2<F>, config: &MeshConfig<F>) -> Self {
        Self::from_mesh(Mesh::grid(origin, config))
    }

    pub fn add_particle(&mut self, particle: Particle<F>) -> usize {
        let idx = self.particles.len();
        self.particles.push(particle);
        idx
    }

    /// Link two existing particles at their current distance.
    pub fn add_link(&mut self, a: usize, b: usize) -> Result<usize, SimError> {
        let count = self.particles.len();
        for index in [a, b] {
            if index >= count {
                return Err(SimError::ParticleOutOfBounds { index, count });
            }
        }
        if a == b {
            return Err(SimError::DegenerateLink);
        }
        let idx = self.links.len();
        self.links.push(Link::from_particles(a, b, &self.particles));
        Ok(idx)
    }

    pub fn add_force(&mut self, field: ForceField<F>) {
        self.forces.push(field);
    }

    pub fn set_boundary(&mut self, boundary: Boundary<F>) {
        self.boundary = Some(boundary);
    }

    pub fn clear_boundary(&mut self) {
        self.boundary = None;
    }

    /// Advance one step: integrate every particle, relax every active
    /// link once in insertion order, then clamp to the boundary.
    ///
    /// Each phase observes the positions the previous one produced
    /// within the same call.
    pub fn step<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        for p in self.particles.iter_mut() {
            p.integrate(&self.forces, dt);
        }
        observer.on_integrate();

        for link in self.links.iter() {
            link.relax(&mut self.particles);
        }
        observer.on_relax();

        if let Some(boundary) = &self.boundary {
            for p in self.particles.iter_mut() {
                boundary.clamp(p);
            }
        }
        observer.on_step_complete();
    }

    /// Remove every link whose current endpoints satisfy `predicate`.
    ///
    /// Two-phase: a read-only marking pass over the links, then one
    /// retain applying the marks, so removal never interleaves with
    /// endpoint reads. Insertion order of survivors is preserved.
    /// Returns the number of links removed.
    pub fn cut_links<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(Vec2<F>, Vec2<F>) -> bool,
    {
        let particles = &self.particles;
        let doomed: AllocVec<bool> = self
            .links
            .iter()
            .map(|link| {
                let (a, b) = link.endpoints(particles);
                predicate(a, b)
            })
            .collect();
        self.retain_unmarked(&doomed)
    }

    /// Remove every link whose segment passes within `radius` of
    /// `point` — the pointer-cut interaction.
    pub fn cut_at(&mut self, point: Vec2<F>, radius: F) -> usize {
        let particles = &self.particles;
        let doomed: AllocVec<bool> = self
            .links
            .iter()
            .map(|link| link.hit_test(particles, point, radius))
            .collect();
        self.retain_unmarked(&doomed)
    }

    /// Remove every link attached to the given particle. The particle
    /// itself stays in the arena.
    pub fn detach_particle(&mut self, index: usize) -> usize {
        let before = self.links.len();
        self.links.retain(|link| link.a != index && link.b != index);
        before - self.links.len()
    }

    fn retain_unmarked(&mut self, doomed: &[bool]) -> usize {
        let removed = doomed.iter().filter(|&&d| d).count();
        let mut i = 0;
        self.links.retain(|_| {
            let keep = !doomed[i];
            i += 1;
            keep
        });
        removed
    }

    pub fn particles(&self) -> &[Particle<F>] {
        &self.particles
    }

    pub fn links(&self) -> &[Link<F>] {
        &self.links
    }

    pub fn particle(&self, index: usize) -> &Particle<F> {
        &self.particles[index]
    }

    pub fn particle_mut(&mut self, index: usize) -> &mut Particle<F> {
        &mut self.particles[index]
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Current particle positions, in arena order.
    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    /// Current link endpoint pairs, in link order.
    pub fn segments(&self) -> AllocVec<(Vec2<F>, Vec2<F>)> {
        self.links
            .iter()
            .map(|link| link.endpoints(&self.particles))
            .collect()
    }
}

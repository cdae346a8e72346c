//! Verlet particles with position-based dynamics.

use crate::float::Float;
use crate::force::ForceField;
use crate::vec::Vec2;

/// A Verlet particle — position-based dynamics with implicit velocity.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub radius: F,
    pub pinned: bool,
}

impl<F: Float> Particle<F> {
    pub fn new(pos: Vec2<F>, radius: F) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            radius,
            pinned: false,
        }
    }

    pub fn pinned(pos: Vec2<F>, radius: F) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            radius,
            pinned: true,
        }
    }

    /// Advance one Verlet step under the given force fields.
    ///
    /// Each field is evaluated exactly once against the current state;
    /// the contributions, scaled by `dt`, are added on top of the
    /// implicit velocity `pos - prev_pos`. Pinned particles do not move.
    pub fn integrate(&mut self, forces: &[ForceField<F>], dt: F) {
        if self.pinned {
            return;
        }
        let mut total_force = Vec2::zero();
        for field in forces {
            total_force = total_force + field.eval(self).scale(dt);
        }
        let new_pos = self.pos + (self.pos - self.prev_pos) + total_force;
        self.prev_pos = self.pos;
        self.pos = new_pos;
    }

    /// Implicit velocity: displacement accumulated over the last step.
    pub fn velocity(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    pub fn pin(&mut self) {
        self.pinned = true;
        self.prev_pos = self.pos;
    }

    pub fn unpin(&mut self) {
        self.pinned = false;
    }

    /// Reposition a pinned anchor. Free particles are driven by
    /// integration and are left untouched.
    pub fn move_to(&mut self, pos: Vec2<F>) {
        if self.pinned {
            self.prev_pos = self.pos;
            self.pos = pos;
        }
    }
}

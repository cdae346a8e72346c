use clothy::{Boundary, ForceField, MeshConfig, NoOpStepObserver, Simulation, Vec2};
use wasm_bindgen::prelude::*;

// ---- Cloth Demo ----

/// The reference scene: a cloth grid pinned along its top row,
/// falling under gravity inside an 800x600 viewport, cut with the
/// pointer. The host canvas draws circles at `positions()` and lines
/// along `segments()` each frame.
#[wasm_bindgen]
pub struct ClothDemo {
    sim: Simulation<f32>,
    cols: usize,
    rows: usize,
}

#[wasm_bindgen]
impl ClothDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(cols: usize, rows: usize, spacing: f32) -> Self {
        let config = MeshConfig::new()
            .with_dimensions(cols, rows)
            .with_spacing(spacing)
            .with_particle_radius(10.0);
        let mut sim = Simulation::cloth(Vec2::new(300.0f32, 100.0), &config);
        sim.add_force(ForceField::Uniform(Vec2::new(0.0, 1.0)));
        sim.set_boundary(Boundary::new(
            Vec2::new(0.0f32, 0.0),
            Vec2::new(800.0, 600.0),
        ));

        ClothDemo { sim, cols, rows }
    }

    pub fn update(&mut self, dt: f32) {
        self.sim.step(dt, &mut NoOpStepObserver);
    }

    /// Cut every link within `radius` of the pointer.
    pub fn cut(&mut self, x: f32, y: f32, radius: f32) -> usize {
        self.sim.cut_at(Vec2::new(x, y), radius)
    }

    /// Drag a pinned top-row anchor to the pointer.
    pub fn drag_pin(&mut self, col: usize, x: f32, y: f32) {
        if col < self.cols {
            self.sim.particle_mut(col).move_to(Vec2::new(x, y));
        }
    }

    /// Returns flat [x0, y0, x1, y1, ...] particle positions.
    pub fn positions(&self) -> Vec<f32> {
        let pos = self.sim.positions();
        let mut out = Vec::with_capacity(pos.len() * 2);
        for p in &pos {
            out.push(p.x);
            out.push(p.y);
        }
        out
    }

    /// Returns flat [ax, ay, bx, by, ...] link endpoint pairs.
    pub fn segments(&self) -> Vec<f32> {
        let segs = self.sim.segments();
        let mut out = Vec::with_capacity(segs.len() * 4);
        for (a, b) in &segs {
            out.push(a.x);
            out.push(a.y);
            out.push(b.x);
            out.push(b.y);
        }
        out
    }

    pub fn particle_radius(&self) -> f32 {
        self.sim.particles().first().map_or(0.0, |p| p.radius)
    }

    pub fn particle_count(&self) -> usize {
        self.sim.particle_count()
    }

    pub fn link_count(&self) -> usize {
        self.sim.link_count()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
}

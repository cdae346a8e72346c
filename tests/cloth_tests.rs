use clothy::{
    Boundary, ForceField, MeshConfig, NoOpStepObserver, Particle, SimError, Simulation,
    StepObserver, Vec2,
};

const DT: f32 = 1.0 / 120.0;

/// The reference scene: an 8x8 cloth pinned along its top row,
/// falling under gravity inside an 800x600 viewport.
fn reference_cloth() -> Simulation<f32> {
    let config = MeshConfig::new()
        .with_dimensions(8, 8)
        .with_spacing(50.0)
        .with_particle_radius(10.0);
    let mut sim = Simulation::cloth(Vec2::new(300.0, 100.0), &config);
    sim.add_force(ForceField::Uniform(Vec2::new(0.0, 1.0)));
    sim.set_boundary(Boundary::new(Vec2::new(0.0, 0.0), Vec2::new(800.0, 600.0)));
    sim
}

#[test]
fn top_row_stays_while_cloth_drapes() {
    let mut sim = reference_cloth();
    let top: Vec<Vec2<f32>> = sim.particles()[..8].iter().map(|p| p.pos).collect();
    let bottom_before: Vec<f32> = sim.particles()[56..].iter().map(|p| p.pos.y).collect();

    for _ in 0..240 {
        sim.step(DT, &mut NoOpStepObserver);
    }

    for (p, init) in sim.particles()[..8].iter().zip(&top) {
        assert_eq!(p.pos, *init, "pinned top row must not move");
    }
    for (p, init) in sim.particles()[56..].iter().zip(&bottom_before) {
        assert!(
            p.pos.y > *init,
            "bottom row should sag below its initial y = {}",
            init,
        );
    }
}

#[test]
fn boundary_clamp_pulls_particle_inside() {
    let mut p: Particle<f32> = Particle::new(Vec2::new(-5.0, 700.0), 10.0);
    let region = Boundary::new(Vec2::new(0.0, 0.0), Vec2::new(800.0, 600.0));
    region.clamp(&mut p);
    assert_eq!(p.pos, Vec2::new(10.0, 590.0));
}

#[test]
fn boundary_clamps_pinned_particles_too() {
    let mut sim: Simulation<f32> = Simulation::new();
    let idx = sim.add_particle(Particle::pinned(Vec2::new(-20.0, 50.0), 10.0));
    sim.set_boundary(Boundary::new(Vec2::new(0.0, 0.0), Vec2::new(800.0, 600.0)));

    sim.step(DT, &mut NoOpStepObserver);

    assert_eq!(sim.particle(idx).pos, Vec2::new(10.0, 50.0));
}

#[test]
fn pointer_cut_removes_only_nearby_links() {
    let mut sim = reference_cloth();
    let before = sim.link_count();

    // Midpoint of the horizontal link between (col 0, row 1) and
    // (col 1, row 1); every other segment is at least 25 away.
    let removed = sim.cut_at(Vec2::new(325.0, 150.0), 5.0);

    assert_eq!(removed, 1);
    assert_eq!(sim.link_count(), before - 1);
    assert!(sim.links().iter().all(|l| (l.a, l.b) != (8, 9)));
}

#[test]
fn cut_links_takes_an_arbitrary_predicate() {
    let mut sim = reference_cloth();
    // Only the vertical links between rows 4 and 5 cross y = 325.
    let removed = sim.cut_links(|a, b| (a.y < 325.0) != (b.y < 325.0));
    assert_eq!(removed, 8);
}

#[test]
fn detach_particle_drops_all_its_links() {
    let mut sim = reference_cloth();
    let center = 3 * 8 + 3;
    let removed = sim.detach_particle(center);
    assert_eq!(removed, 4);
    assert!(sim.links().iter().all(|l| l.a != center && l.b != center));
}

#[test]
fn cut_link_trajectories_match_never_linked_baseline() {
    let gravity = ForceField::Uniform(Vec2::new(0.0, 1.0));

    let mut with_cut: Simulation<f32> = Simulation::new();
    let a = with_cut.add_particle(Particle::pinned(Vec2::new(0.0, 0.0), 10.0));
    let b = with_cut.add_particle(Particle::new(Vec2::new(50.0, 0.0), 10.0));
    with_cut.add_link(a, b).unwrap();
    with_cut.add_force(gravity);

    let mut baseline: Simulation<f32> = Simulation::new();
    baseline.add_particle(Particle::pinned(Vec2::new(0.0, 0.0), 10.0));
    baseline.add_particle(Particle::new(Vec2::new(50.0, 0.0), 10.0));
    baseline.add_force(gravity);

    let removed = with_cut.cut_at(Vec2::new(25.0, 0.0), 1.0);
    assert_eq!(removed, 1);
    assert_eq!(with_cut.link_count(), 0);

    for _ in 0..60 {
        with_cut.step(DT, &mut NoOpStepObserver);
        baseline.step(DT, &mut NoOpStepObserver);
        for (p, q) in with_cut.particles().iter().zip(baseline.particles()) {
            assert_eq!(p.pos, q.pos);
            assert_eq!(p.prev_pos, q.prev_pos);
        }
    }
}

#[test]
fn add_link_rejects_bad_endpoints() {
    let mut sim: Simulation<f32> = Simulation::new();
    let a = sim.add_particle(Particle::new(Vec2::new(0.0, 0.0), 10.0));
    let b = sim.add_particle(Particle::new(Vec2::new(3.0, 4.0), 10.0));

    assert_eq!(
        sim.add_link(a, 7),
        Err(SimError::ParticleOutOfBounds { index: 7, count: 2 }),
    );
    assert_eq!(sim.add_link(a, a), Err(SimError::DegenerateLink));

    let idx = sim.add_link(a, b).unwrap();
    assert_eq!(idx, 0);
    assert!((sim.links()[0].rest_length - 5.0).abs() < 1e-6);
}

#[test]
fn dragged_anchor_stays_where_it_is_put() {
    let mut sim = reference_cloth();
    sim.particle_mut(0).move_to(Vec2::new(200.0, 120.0));
    for _ in 0..30 {
        sim.step(DT, &mut NoOpStepObserver);
    }
    assert_eq!(sim.particle(0).pos, Vec2::new(200.0, 120.0));
}

#[derive(Default)]
struct CountingObserver {
    integrates: usize,
    relaxes: usize,
    completes: usize,
}

impl StepObserver for CountingObserver {
    fn on_integrate(&mut self) {
        self.integrates += 1;
    }
    fn on_relax(&mut self) {
        self.relaxes += 1;
    }
    fn on_step_complete(&mut self) {
        self.completes += 1;
    }
}

#[test]
fn observer_sees_each_phase_once_per_step() {
    let mut sim = reference_cloth();
    let mut obs = CountingObserver::default();
    for _ in 0..3 {
        sim.step(DT, &mut obs);
    }
    assert_eq!((obs.integrates, obs.relaxes, obs.completes), (3, 3, 3));
}

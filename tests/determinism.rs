use clothy::{Boundary, ForceField, MeshConfig, NoOpStepObserver, Simulation, Vec2};

#[test]
fn cloth_runs_are_bitwise_identical() {
    let results: Vec<Vec<Vec2<f32>>> = (0..5)
        .map(|_| {
            let config = MeshConfig::new()
                .with_dimensions(8, 8)
                .with_spacing(50.0)
                .with_particle_radius(10.0);
            let mut sim: Simulation<f32> = Simulation::cloth(Vec2::new(300.0, 100.0), &config);
            sim.add_force(ForceField::Uniform(Vec2::new(0.0, 1.0)));
            sim.set_boundary(Boundary::new(Vec2::new(0.0, 0.0), Vec2::new(800.0, 600.0)));

            for frame in 0..120 {
                if frame == 60 {
                    sim.cut_at(Vec2::new(325.0, 150.0), 5.0);
                }
                sim.step(1.0 / 120.0, &mut NoOpStepObserver);
            }
            sim.positions()
        })
        .collect();

    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }
}

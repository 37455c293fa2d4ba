use ragdoll_engine::{RecordingSurface, World, WorldCore};

#[test]
fn perf_smoke_step() {
    let mut world = World::new(800, 600);
    world.enable_perf_metrics(true);
    world.key_down("ArrowRight");
    world.step();
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.particles_integrated(), 6);
    assert_eq!(world.frame(), 1);
}

#[test]
fn facade_reads_match_the_core() {
    let mut world = World::new(800, 600);
    for _ in 0..30 {
        world.step();
    }
    let positions = world.positions();
    assert_eq!(positions.len(), 2 * world.particle_count());
    for i in 0..world.particle_count() {
        assert_eq!(world.particle_x(i), positions[2 * i]);
        assert_eq!(world.particle_y(i), positions[2 * i + 1]);
    }
    assert!(world.particle_x(99).is_nan());
    assert_eq!(world.joint_endpoints().len(), 2 * world.joint_count());
}

#[test]
fn figure_falls_under_gravity() {
    let mut world = World::new(800, 600);
    let torso_y = world.particle_y(world.controlled());
    for _ in 0..60 {
        world.step();
    }
    assert!(world.particle_y(world.controlled()) > torso_y);
}

#[test]
fn a_minute_of_frames_stays_finite() {
    let mut world = WorldCore::new(800, 600);
    let mut surface = RecordingSurface::new(800.0, 600.0);
    let keys = ["ArrowLeft", "ArrowUp", "ArrowRight", "ArrowDown"];
    for i in 0..3600 {
        if i % 7 == 0 {
            world.handle_key(keys[(i / 7) % keys.len()]);
        }
        surface.reset();
        world.tick(&mut surface).unwrap();
    }
    assert_eq!(world.frame(), 3600);
    assert!(world.positions().iter().all(|v| v.is_finite()));
}

use springnet::{
    frame_walls, resolve_collisions, NoOpStepObserver, Particle, Seed, SimConfig, SpringNetwork,
    Vec2, Vec3, Vec,
};

#[test]
fn bounce_reflects_with_restitution() {
    let config: SimConfig<Vec2<f32>> = SimConfig::new()
        .with_radius(0.02)
        .with_epsilon(1e-4)
        .with_restitution(0.9);
    let speed = 2.0;
    let mut particles = [Particle::new(Vec2::new(0.0, -0.99))];
    particles[0].vel = Vec2::new(0.25, -speed);

    let hits = resolve_collisions(&mut particles, 1.0, &config, &mut NoOpStepObserver);
    assert_eq!(hits, 1);

    let p = &particles[0];
    assert!((p.vel.y - 0.9 * speed).abs() < 1e-6, "normal velocity {}", p.vel.y);
    assert_eq!(p.vel.x, 0.25, "tangential velocity must be untouched");
    let bottom = frame_walls::<Vec2<f32>>(1.0)[2];
    assert!((bottom.signed_distance(p.pos) - (0.02 + 1e-4)).abs() < 1e-6);
}

#[test]
fn walls_widen_with_aspect() {
    let config: SimConfig<Vec2<f32>> = SimConfig::new();
    let mut particles = [Particle::new(Vec2::new(1.5, 0.0))];
    let hits = resolve_collisions(&mut particles, 2.0, &config, &mut NoOpStepObserver);
    assert_eq!(hits, 0);
    assert_eq!(particles[0].pos.x, 1.5);

    resolve_collisions(&mut particles, 1.0, &config, &mut NoOpStepObserver);
    assert!(particles[0].pos.x < 1.0);
}

#[test]
fn corner_resolves_each_wall_in_turn() {
    let config: SimConfig<Vec2<f32>> = SimConfig::new();
    let mut particles = [Particle::new(Vec2::new(-1.2, -1.3))];
    particles[0].vel = Vec2::new(-1.0, -1.0);
    let hits = resolve_collisions(&mut particles, 1.0, &config, &mut NoOpStepObserver);
    assert_eq!(hits, 2);
    assert!(particles[0].vel.x > 0.0 && particles[0].vel.y > 0.0);
}

#[test]
fn no_particle_ends_inside_a_wall() {
    let mut net: SpringNetwork<Vec3<f32>> = SpringNetwork::from_seed(&Seed::triangle()).unwrap();
    net.add_particle(Vec3::new(-0.5, 0.8, 0.0)).unwrap();
    net.attach(3, 0).unwrap();
    net.set_velocity(1, Vec3::new(6.0, -3.0, 0.0)).unwrap();
    net.set_velocity(3, Vec3::new(-5.0, 4.0, 0.0)).unwrap();

    let config = SimConfig::new().with_sub_steps(2);
    let aspect = 1.25;
    let tolerance = 1e-5;
    for frame in 0..600 {
        net.step(1.0 / 30.0, aspect, &config, &mut NoOpStepObserver).unwrap();
        for wall in frame_walls::<Vec3<f32>>(aspect).iter() {
            for (i, p) in net.particles().iter().enumerate() {
                let d = wall.signed_distance(p.pos);
                assert!(
                    d >= config.radius - tolerance,
                    "frame {}: particle {} at {:?} is {} from the {:?} wall",
                    frame, i, p.pos, d, wall.side,
                );
                assert!(p.pos.is_finite());
            }
        }
    }
}

use springnet::{
    Integrator, NoOpStepObserver, PhysicsError, Seed, SimConfig, SpringNetwork, StepObserver,
    StepReport, Vec, Vec3, WallSide,
};

fn triangle() -> SpringNetwork<Vec3<f32>> {
    SpringNetwork::from_seed(&Seed::triangle()).unwrap()
}

#[test]
fn constrained_particles_are_bit_identical() {
    let mut net = triangle();
    // One anchor inside the frame and one parked outside it.
    net.add_particle(Vec3::new(5.0, 5.0, 0.0)).unwrap();
    net.attach(3, 1).unwrap();
    net.constrain(2).unwrap();
    net.constrain(3).unwrap();
    net.set_velocity(3, Vec3::new(0.1, 0.2, 0.3)).unwrap();

    let anchors = [net.particle(2).clone(), net.particle(3).clone()];
    for method in [Integrator::ExplicitEuler, Integrator::SemiImplicitEuler, Integrator::Midpoint] {
        let config = SimConfig::new().with_method(method).with_damped_spring(true).with_sub_steps(3);
        for _ in 0..120 {
            net.step(1.0 / 30.0, 1.0, &config, &mut NoOpStepObserver).unwrap();
        }
    }

    assert_eq!(net.particle(2), &anchors[0]);
    assert_eq!(net.particle(3), &anchors[1]);
    assert!(net.particle(0).pos != Vec3::new(0.0, 0.4, 0.0), "free particle should have moved");
}

#[test]
fn sub_steps_change_the_trajectory_but_stay_finite() {
    let run = |sub_steps: usize| {
        let mut net = triangle();
        net.set_stiffness_scale(10.0).unwrap();
        let config = SimConfig::new().with_sub_steps(sub_steps);
        net.step(1.0 / 30.0, 1.0, &config, &mut NoOpStepObserver).unwrap();
        net.positions()
    };

    let coarse = run(1);
    let fine = run(4);
    assert_ne!(coarse, fine);
    assert!(coarse.iter().chain(fine.iter()).all(|p| p.is_finite()));
}

#[test]
fn damping_never_adds_kinetic_energy() {
    let mut net: SpringNetwork<Vec3<f32>> = SpringNetwork::new();
    let starts = [
        (Vec3::new(0.0, 0.0, 0.0), Vec3::new(3.0, 1.0, 0.0)),
        (Vec3::new(0.5, -0.5, 0.0), Vec3::new(-2.0, -4.0, 0.0)),
        (Vec3::new(-0.6, 0.6, 0.0), Vec3::new(0.0, 5.0, 0.0)),
    ];
    for (i, &(pos, vel)) in starts.iter().enumerate() {
        net.add_particle(pos).unwrap();
        net.set_velocity(i, vel).unwrap();
    }

    let config = SimConfig::new()
        .without_gravity()
        .with_point_damping(true)
        .with_damping(0.01)
        .with_restitution(0.8)
        .with_sub_steps(2);

    let initial = net.kinetic_energy(config.mass);
    let mut previous = initial;
    for step in 0..300 {
        net.step(1.0 / 30.0, 1.0, &config, &mut NoOpStepObserver).unwrap();
        let energy = net.kinetic_energy(config.mass);
        assert!(
            energy <= previous * (1.0 + 1e-6),
            "step {}: kinetic energy rose from {} to {}",
            step, previous, energy,
        );
        previous = energy;
    }
    assert!(previous < 0.5 * initial, "damping should have drained energy: {} -> {}", initial, previous);
}

#[test]
fn zero_length_spring_is_reported_not_propagated() {
    let mut net: SpringNetwork<Vec3<f32>> = SpringNetwork::new();
    net.add_particle(Vec3::new(0.0, 0.0, 0.0)).unwrap();
    net.add_particle(Vec3::new(0.2, 0.0, 0.0)).unwrap();
    net.add_spring(0, 1).unwrap();
    net.move_particle(1, Vec3::new(0.0, 0.0, 0.0)).unwrap();

    let config = SimConfig::new().with_sub_steps(3);
    let report = net.step(1.0 / 30.0, 1.0, &config, &mut NoOpStepObserver).unwrap();

    assert_eq!(report.degenerate_springs, vec![0]);
    assert_eq!(report.check(), Err(PhysicsError::NumericalDegeneracy { spring: 0 }));
    assert!(net.positions().iter().all(|p| p.is_finite()));
    assert!(net.velocities().iter().all(|v| v.is_finite()));
}

#[test]
fn invalid_config_leaves_state_untouched() {
    let mut net = triangle();
    let before = net.positions();
    let config = SimConfig::new().with_restitution(1.5);
    let result = net.step(1.0 / 30.0, 1.0, &config, &mut NoOpStepObserver);
    assert_eq!(result, Err(PhysicsError::InvalidRestitution));
    assert_eq!(net.positions(), before);
}

#[test]
fn bad_time_step_leaves_state_untouched() {
    let mut net = triangle();
    let before = net.positions();
    let config = SimConfig::new();
    for dt in [f32::NAN, f32::INFINITY, -1.0 / 30.0] {
        let result = net.step(dt, 1.0, &config, &mut NoOpStepObserver);
        assert_eq!(result, Err(PhysicsError::InvalidTimeStep), "dt = {dt}");
    }
    assert_eq!(net.positions(), before);
    assert!(net.step(0.0, 1.0, &config, &mut NoOpStepObserver).is_ok());
}

#[test]
fn bad_aspect_leaves_state_untouched() {
    let mut net = triangle();
    let before = net.positions();
    let config = SimConfig::new();
    for aspect in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        let result = net.step(1.0 / 30.0, aspect, &config, &mut NoOpStepObserver);
        assert_eq!(result, Err(PhysicsError::InvalidAspect), "aspect = {aspect}");
        assert_eq!(net.settle(aspect, &config, &mut NoOpStepObserver), Err(PhysicsError::InvalidAspect));
    }
    assert_eq!(net.positions(), before);
}

#[test]
fn non_finite_gravity_never_reaches_positions() {
    let mut net = triangle();
    let before = net.positions();
    let config = SimConfig::new().with_gravity(Vec3::new(f32::NAN, 0.0, 0.0));
    let result = net.step(1.0 / 30.0, 1.0, &config, &mut NoOpStepObserver);
    assert_eq!(result, Err(PhysicsError::InvalidGravity));
    assert_eq!(net.positions(), before);
    assert!(net.positions().iter().all(|p| p.is_finite()));
}

#[derive(Default)]
struct Tally {
    sub_steps: usize,
    forces: usize,
    integrations: usize,
    floor_hits: usize,
    completed: Option<StepReport>,
}

impl StepObserver for Tally {
    fn on_sub_step(&mut self, _index: usize) { self.sub_steps += 1; }
    fn on_forces(&mut self) { self.forces += 1; }
    fn on_integrate(&mut self) { self.integrations += 1; }
    fn on_collision(&mut self, _particle: usize, wall: WallSide) {
        if wall == WallSide::Bottom {
            self.floor_hits += 1;
        }
    }
    fn on_step_complete(&mut self, report: &StepReport) { self.completed = Some(report.clone()); }
}

#[test]
fn observer_sees_every_sub_step() {
    let mut net: SpringNetwork<Vec3<f32>> = SpringNetwork::new();
    net.add_particle(Vec3::new(0.0, -0.99, 0.0)).unwrap();
    net.set_velocity(0, Vec3::new(0.0, -1.0, 0.0)).unwrap();

    let config = SimConfig::new().with_sub_steps(5);
    let mut tally = Tally::default();
    let report = net.step(1.0 / 30.0, 1.0, &config, &mut tally).unwrap();

    assert_eq!(tally.sub_steps, 5);
    assert_eq!(tally.forces, 5);
    assert_eq!(tally.integrations, 5);
    assert!(tally.floor_hits >= 1);
    assert_eq!(report.collisions, tally.floor_hits);
    assert_eq!(tally.completed, Some(report));
}

use approx::assert_relative_eq;
use nalgebra::{Point2, Vector2};

use crate::error::PhysicsError;
use crate::forces::CableForceGenerator;
use crate::integrator::IntegratorKind;
use crate::world::{PhysicsWorld, WorldConfig};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_default_config() {
    let config = WorldConfig::default();

    assert_eq!(config.gravity, [0.0, 0.0]);
    assert_eq!(config.integrator, IntegratorKind::SemiImplicitEuler);
    assert_eq!(config.default_mass, 1.0);
}

#[test]
fn test_zero_gravity_registers_no_generator() {
    let world = PhysicsWorld::from_config(WorldConfig::default()).unwrap();

    assert_eq!(world.generator_count(), 0);
    assert_eq!(world.time(), 0.0);
    assert!(world.bodies().is_empty());
}

#[test]
fn test_invalid_configs_are_rejected() {
    let bad_gravity = WorldConfig {
        gravity: [f64::NAN, 0.0],
        ..WorldConfig::default()
    };
    assert!(matches!(
        PhysicsWorld::from_config(bad_gravity),
        Err(PhysicsError::InvalidConfiguration { .. })
    ));

    for mass in [0.0, -1.0, f64::INFINITY] {
        let bad_mass = WorldConfig {
            default_mass: mass,
            ..WorldConfig::default()
        };
        assert!(PhysicsWorld::from_config(bad_mass).is_err());
    }
}

#[test]
fn test_default_mass_applies_to_new_bodies() {
    let config = WorldConfig {
        default_mass: 2.5,
        ..WorldConfig::default()
    };
    let mut world = PhysicsWorld::from_config(config).unwrap();

    let id = world.add_body_with_default_mass(Point2::origin(), Vector2::zeros()).unwrap();

    assert_eq!(world.default_mass(), 2.5);
    assert_eq!(world.body(id).unwrap().mass, 2.5);
}

#[test]
fn test_step_applies_gravity_and_advances_time() {
    let config = WorldConfig {
        gravity: [0.0, -10.0],
        ..WorldConfig::default()
    };
    let mut world = PhysicsWorld::from_config(config).unwrap();
    let id = world.add_body(1.0, Point2::new(0.0, 0.0), Vector2::zeros()).unwrap();

    world.step(0.1);

    let body = world.body(id).unwrap();
    assert_relative_eq!(body.velocity.y, -1.0);
    assert_relative_eq!(body.position.y, -0.1);
    assert_eq!(body.acceleration, Vector2::zeros());
    assert_relative_eq!(world.time(), 0.1);
}

#[test]
fn test_zero_step_leaves_world_unchanged() {
    let config = WorldConfig {
        gravity: [0.0, -10.0],
        ..WorldConfig::default()
    };
    let mut world = PhysicsWorld::from_config(config).unwrap();
    let id = world.add_body(1.0, Point2::new(3.0, 4.0), Vector2::new(1.0, 0.0)).unwrap();
    let before = *world.body(id).unwrap();

    world.step(0.0);

    assert_eq!(*world.body(id).unwrap(), before);
    assert_eq!(world.time(), 0.0);
}

#[test]
fn test_run_returns_final_time() {
    let mut world = PhysicsWorld::new();
    let id = world.add_body(1.0, Point2::origin(), Vector2::new(1.0, 0.0)).unwrap();

    let time = world.run(0.5, 4);

    assert_relative_eq!(time, 2.0);
    assert_relative_eq!(world.body(id).unwrap().position.x, 2.0);
}

#[test]
fn test_removing_attached_body_stops_cable() {
    let mut world = PhysicsWorld::new();
    let a = world.add_body(1.0, Point2::new(0.0, 0.0), Vector2::zeros()).unwrap();
    let b = world.add_body(1.0, Point2::new(10.0, 0.0), Vector2::zeros()).unwrap();
    let mut cable = CableForceGenerator::new(5.0);
    cable.attach_first_end_to(a);
    cable.attach_second_end_to(b);
    world.add_generator(cable);

    world.remove_body(b).unwrap();
    world.step(0.1);

    assert_eq!(world.body(a).unwrap().position, Point2::new(0.0, 0.0));
    assert_eq!(
        world.remove_body(b),
        Err(PhysicsError::UnknownBody { id: b })
    );
}

#[test]
fn test_world_can_move_across_threads() {
    assert_send_sync::<PhysicsWorld>();

    let mut world = PhysicsWorld::new();
    let id = world.add_body(1.0, Point2::origin(), Vector2::new(1.0, 0.0)).unwrap();
    let world = std::thread::spawn(move || {
        world.step(1.0);
        world
    })
    .join()
    .unwrap();

    assert_relative_eq!(world.body(id).unwrap().position.x, 1.0);
}

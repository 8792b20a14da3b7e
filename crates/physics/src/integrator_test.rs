use approx::assert_relative_eq;
use nalgebra::{Point2, Vector2};

use crate::bodies::BodySet;
use crate::body::BodyId;
use crate::integrator::{Euler, Integrator, IntegratorKind, SemiImplicitEuler};

fn falling_body() -> (BodySet, BodyId) {
    let mut bodies = BodySet::new();
    let id = bodies.add_body(1.0, Point2::new(0.0, 10.0), Vector2::new(1.0, 0.0)).unwrap();
    bodies.get_mut(id).unwrap().acceleration = Vector2::new(0.0, -10.0);
    (bodies, id)
}

#[test]
fn test_semi_implicit_euler_uses_updated_velocity() {
    let (mut bodies, id) = falling_body();

    SemiImplicitEuler.step(&mut bodies, 0.5);

    let body = bodies.get(id).unwrap();
    assert_relative_eq!(body.velocity.y, -5.0);
    assert_relative_eq!(body.position.x, 0.5);
    assert_relative_eq!(body.position.y, 7.5);
}

#[test]
fn test_euler_uses_previous_velocity() {
    let (mut bodies, id) = falling_body();

    Euler.step(&mut bodies, 0.5);

    let body = bodies.get(id).unwrap();
    assert_relative_eq!(body.velocity.y, -5.0);
    assert_relative_eq!(body.position.x, 0.5);
    assert_relative_eq!(body.position.y, 10.0);
}

#[test]
fn test_step_clears_accelerations() {
    let (mut bodies, id) = falling_body();

    SemiImplicitEuler.step(&mut bodies, 0.1);
    assert_eq!(bodies.get(id).unwrap().acceleration, Vector2::zeros());

    let (mut bodies, id) = falling_body();
    Euler.step(&mut bodies, 0.1);
    assert_eq!(bodies.get(id).unwrap().acceleration, Vector2::zeros());
}

#[test]
fn test_zero_timestep_changes_nothing() {
    let (mut bodies, id) = falling_body();
    let before = *bodies.get(id).unwrap();

    SemiImplicitEuler.step(&mut bodies, 0.0);
    Euler.step(&mut bodies, 0.0);

    assert_eq!(*bodies.get(id).unwrap(), before);
}

#[test]
fn test_integrate_returns_elapsed_time() {
    let mut bodies = BodySet::new();
    let id = bodies.add_body(1.0, Point2::origin(), Vector2::new(2.0, 0.0)).unwrap();

    let elapsed = SemiImplicitEuler.integrate(&mut bodies, 0.25, 8);

    assert_relative_eq!(elapsed, 2.0);
    assert_relative_eq!(bodies.get(id).unwrap().position.x, 4.0);
}

#[test]
fn test_kind_defaults_to_semi_implicit_euler() {
    assert_eq!(IntegratorKind::default(), IntegratorKind::SemiImplicitEuler);

    let (mut bodies, id) = falling_body();
    IntegratorKind::Euler.build().step(&mut bodies, 0.5);
    assert_relative_eq!(bodies.get(id).unwrap().position.y, 10.0);
}

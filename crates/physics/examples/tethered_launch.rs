//! Tethered launch example
//!
//! Fires a light body away from a heavy anchor it is tied to with a cable
//! and prints how the cable holds it at its length.
//!
//! Run with: cargo run --package physics --example tethered_launch

use env_logger::Env;
use log::info;
use nalgebra::{Point2, Vector2};
use physics::{CableForceGenerator, PhysicsWorld, WorldConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    println!("Cable Constraint Demo: Tethered Launch\n");
    println!("{}", "=".repeat(60));

    let mut world = PhysicsWorld::from_config(WorldConfig::default())?;

    let anchor = world.add_body(1.0e6, Point2::new(0.0, 0.0), Vector2::zeros())?;
    let bob = world.add_body(1.0, Point2::new(0.5, 0.0), Vector2::new(4.0, 3.0))?;

    let length = 2.0;
    let mut cable = CableForceGenerator::new(length);
    cable.attach_first_end_to(anchor);
    cable.attach_second_end_to(bob);
    world.add_generator(cable);

    let dt = 1.0 / 60.0;
    let n_steps = 120;
    info!("simulating {n_steps} steps of {dt:.4} s with a {length} m cable");

    println!("\n{:>6} {:>10} {:>10} {:>10}", "step", "x", "y", "distance");
    for step in 0..=n_steps {
        if step % 10 == 0 {
            let a = world.bodies().get(anchor).map(|b| b.position);
            let b = world.bodies().get(bob).map(|b| b.position);
            if let (Some(a), Some(b)) = (a, b) {
                println!(
                    "{:>6} {:>10.4} {:>10.4} {:>10.4}",
                    step,
                    b.x,
                    b.y,
                    (b - a).magnitude()
                );
            }
        }
        world.step(dt);
    }

    println!("\nSimulated {:.3} s", world.time());
    Ok(())
}

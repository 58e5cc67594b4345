#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure command interpreter that maps a single command onto a candidate pose.
//!
//! The interpreter never looks at obstacles. Collision checks are composed on
//! top of it by the simulation system so each concern can be tested alone.

use mars_rover_core::{Command, Rover};
use mars_rover_world::Planet;

/// Computes the pose the rover would reach by executing `command`.
#[must_use]
pub fn next_pose(planet: &Planet, rover: Rover, command: Command) -> Rover {
    match command {
        Command::TurnRight => rover.with_direction(rover.direction().turn_right()),
        Command::TurnLeft => rover.with_direction(rover.direction().turn_left()),
        Command::MoveForward => {
            let delta = rover.direction().delta();
            rover.with_position(rover.position().step(delta, planet.size()))
        }
        Command::MoveBackward => {
            let delta = rover.direction().opposite().delta();
            rover.with_position(rover.position().step(delta, planet.size()))
        }
    }
}

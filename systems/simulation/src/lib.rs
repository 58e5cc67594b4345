#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic simulation system that folds commands over the rover's pose.
//!
//! The fold halts on the first blocked move and reports the last safe pose
//! together with the obstacle that refused the move. No command after a
//! collision is ever applied.

use mars_rover_core::{Command, Event, Obstacle, Outcome, Rover};
use mars_rover_system_interpreter::next_pose;
use mars_rover_world::{query, Planet};
use tracing::debug;

/// Result of executing a single command against the planet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The command was applied and the rover reached the contained pose.
    Advanced(Rover),
    /// The candidate cell is occupied; the rover stays where it was.
    Blocked(Obstacle),
}

/// Executes one command, checking obstacles only for movement commands.
#[must_use]
pub fn step(planet: &Planet, rover: Rover, command: Command) -> Step {
    let candidate = next_pose(planet, rover, command);
    if command.is_movement() {
        if let Some(obstacle) = query::obstacle_at(planet, candidate.position()) {
            return Step::Blocked(obstacle);
        }
    }

    Step::Advanced(candidate)
}

/// Runs the command sequence from `initial` and reports the terminal outcome.
#[must_use]
pub fn run(planet: &Planet, initial: Rover, commands: &[Command]) -> Outcome {
    let mut current = initial;
    for &command in commands {
        match step(planet, current, command) {
            Step::Advanced(next) => current = next,
            Step::Blocked(obstacle) => {
                return Outcome::ObstacleHit {
                    rover: current,
                    obstacle,
                }
            }
        }
    }

    Outcome::Completed { rover: current }
}

/// Runs the command sequence like [`run`] while recording one event per command.
///
/// Events are appended to `out` in command order. A blocked move appends a
/// single [`Event::ObstacleEncountered`] and ends the run.
pub fn run_logged(
    planet: &Planet,
    initial: Rover,
    commands: &[Command],
    out: &mut Vec<Event>,
) -> Outcome {
    let mut current = initial;
    for (index, &command) in commands.iter().enumerate() {
        match step(planet, current, command) {
            Step::Advanced(next) => {
                let event = transition_event(command, current, next);
                debug!(index, ?command, ?event, "command applied");
                out.push(event);
                current = next;
            }
            Step::Blocked(obstacle) => {
                debug!(index, ?command, ?obstacle, "move blocked");
                out.push(Event::ObstacleEncountered {
                    rover: current,
                    obstacle,
                });
                return Outcome::ObstacleHit {
                    rover: current,
                    obstacle,
                };
            }
        }
    }

    Outcome::Completed { rover: current }
}

fn transition_event(command: Command, from: Rover, to: Rover) -> Event {
    if command.is_movement() {
        Event::RoverMoved {
            from: from.position(),
            to: to.position(),
        }
    } else {
        Event::RoverTurned {
            from: from.direction(),
            to: to.direction(),
        }
    }
}

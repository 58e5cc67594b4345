//! Mission orchestration: read inputs, run the simulation, report the outcome.

use std::io;

use anyhow::Result as AnyResult;
use mars_rover_core::{Command, Obstacle, Outcome, Rover};
use mars_rover_system_simulation::run_logged;
use mars_rover_text::ParseError;
use mars_rover_world::{validate_landing, LandingError, Planet};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Failures that prevent a mission from reaching the simulation.
#[derive(Debug, Error)]
pub(crate) enum MissionError {
    /// An input could not be read.
    #[error("could not read {origin}: {source}")]
    Io {
        /// Human readable name of the input, such as a file path.
        origin: String,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// An input was read but could not be decoded.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The rover cannot start on the planet.
    #[error(transparent)]
    Landing(#[from] LandingError),
}

/// Supplies the planet the mission runs on.
pub(crate) trait PlanetSource {
    /// Reads and decodes the planet definition.
    fn read_planet(&mut self) -> Result<Planet, MissionError>;
}

/// Supplies the rover's landing pose.
pub(crate) trait RoverSource {
    /// Reads and decodes the rover definition.
    fn read_rover(&mut self) -> Result<Rover, MissionError>;
}

/// Supplies the commands sent to the rover.
pub(crate) trait CommandSource {
    /// Reads and decodes the full command sequence.
    fn read_commands(&mut self) -> Result<Vec<Command>, MissionError>;
}

/// Consumes the terminal state of a mission.
pub(crate) trait ReportSink {
    /// Reports a run that executed every command.
    fn sequence_completed(&mut self, rover: &Rover) -> AnyResult<()>;

    /// Reports a run halted by an obstacle, carrying the last safe pose.
    fn obstacle_detected(&mut self, rover: &Rover, obstacle: &Obstacle) -> AnyResult<()>;

    /// Reports a mission that never reached the simulation.
    fn mission_failed(&mut self, error: &MissionError) -> AnyResult<()>;
}

/// Runs a mission end to end.
///
/// Inputs are read in order (planet, rover, commands) and reading stops at
/// the first failure, which is handed to the sink. Returns the outcome when
/// the simulation ran, `None` when the mission failed before it. Errors are
/// reserved for sink failures.
pub(crate) fn run_mission<P, R, C, S>(
    planet_source: &mut P,
    rover_source: &mut R,
    command_source: &mut C,
    sink: &mut S,
) -> AnyResult<Option<Outcome>>
where
    P: PlanetSource + ?Sized,
    R: RoverSource + ?Sized,
    C: CommandSource + ?Sized,
    S: ReportSink + ?Sized,
{
    let prepared = prepare(planet_source, rover_source, command_source);
    let (planet, rover, commands) = match prepared {
        Ok(inputs) => inputs,
        Err(error) => {
            warn!(%error, "mission failed");
            sink.mission_failed(&error)?;
            return Ok(None);
        }
    };

    let mut events = Vec::with_capacity(commands.len());
    let outcome = run_logged(&planet, rover, &commands, &mut events);
    debug!(
        commands = commands.len(),
        applied = events.len(),
        "simulation finished"
    );

    match outcome {
        Outcome::Completed { rover } => {
            info!(?rover, "command sequence completed");
            sink.sequence_completed(&rover)?;
        }
        Outcome::ObstacleHit { rover, obstacle } => {
            info!(?rover, ?obstacle, "obstacle detected");
            sink.obstacle_detected(&rover, &obstacle)?;
        }
    }

    Ok(Some(outcome))
}

fn prepare<P, R, C>(
    planet_source: &mut P,
    rover_source: &mut R,
    command_source: &mut C,
) -> Result<(Planet, Rover, Vec<Command>), MissionError>
where
    P: PlanetSource + ?Sized,
    R: RoverSource + ?Sized,
    C: CommandSource + ?Sized,
{
    let planet = planet_source.read_planet()?;
    let rover = rover_source.read_rover()?;
    validate_landing(&planet, rover)?;
    let commands = command_source.read_commands()?;
    Ok((planet, rover, commands))
}

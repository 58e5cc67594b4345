#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Plain-text codecs for Mars Rover adapters.
//!
//! Planet files hold a `"<width>x<height>"` line followed by one `"<x>,<y>"`
//! obstacle per line. Rover files hold an `"<x>,<y>"` line followed by a
//! single-letter direction. Command strings are runs of `F`, `B`, `R` and `L`.
//! Outcomes render as `"x:y:DIR"` or, when an obstacle halted the run,
//! `"O:x:y:DIR"` using the last safe pose.

use mars_rover_core::{Command, Direction, Obstacle, Outcome, Position, Rover, Size};
use mars_rover_world::{Planet, PlanetError};
use thiserror::Error;

/// Marker prefixed to reports of runs halted by an obstacle.
pub const OBSTACLE_MARKER: &str = "O";
/// Delimiter separating the fields of a rendered report.
const REPORT_DELIMITER: char = ':';
/// Delimiter separating the columns of a coordinate pair.
const COORDINATE_DELIMITER: char = ',';

/// Errors raised while decoding planet, rover or command text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The planet text did not contain a size line.
    #[error("planet definition is missing the size line")]
    MissingSize,
    /// The size line could not be parsed as `"<width>x<height>"`.
    #[error("could not parse planet size '{0}'")]
    InvalidSize(String),
    /// The size line described a grid with a zero dimension.
    #[error("planet size '{0}' must be at least 1x1")]
    ZeroSize(String),
    /// A coordinate line could not be parsed as `"<x>,<y>"`.
    #[error("could not parse coordinates '{0}'")]
    InvalidCoordinates(String),
    /// The rover text did not contain a position line.
    #[error("rover definition is missing the position line")]
    MissingPosition,
    /// The rover text did not contain a direction line.
    #[error("rover definition is missing the direction line")]
    MissingDirection,
    /// The direction line was not one of `N`, `E`, `S` or `W`.
    #[error("unknown direction '{0}'")]
    InvalidDirection(String),
    /// The rover text continued past the direction line.
    #[error("unexpected trailing input '{0}'")]
    TrailingInput(String),
    /// The command text contained a character outside `F`, `B`, `R` and `L`.
    #[error("unknown command '{token}' at position {index}")]
    InvalidCommand {
        /// Offending character.
        token: char,
        /// Zero-based character index within the command text.
        index: usize,
    },
    /// The decoded planet violated a planet invariant.
    #[error(transparent)]
    Planet(#[from] PlanetError),
}

/// Parses a `"<width>x<height>"` size descriptor.
pub fn parse_size(text: &str) -> Result<Size, ParseError> {
    let trimmed = text.trim();
    let (width, height) = trimmed
        .split_once(['x', 'X'])
        .ok_or_else(|| ParseError::InvalidSize(trimmed.to_owned()))?;

    let width = width
        .trim()
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidSize(trimmed.to_owned()))?;
    let height = height
        .trim()
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidSize(trimmed.to_owned()))?;

    Size::from_dimensions(width, height).ok_or_else(|| ParseError::ZeroSize(trimmed.to_owned()))
}

/// Parses an `"<x>,<y>"` coordinate pair.
pub fn parse_position(text: &str) -> Result<Position, ParseError> {
    let trimmed = text.trim();
    let (x, y) = trimmed
        .split_once(COORDINATE_DELIMITER)
        .ok_or_else(|| ParseError::InvalidCoordinates(trimmed.to_owned()))?;

    let x = x
        .trim()
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidCoordinates(trimmed.to_owned()))?;
    let y = y
        .trim()
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidCoordinates(trimmed.to_owned()))?;

    Ok(Position::new(x, y))
}

/// Parses a single-letter direction code, ignoring case.
pub fn parse_direction(text: &str) -> Result<Direction, ParseError> {
    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    let direction = match (chars.next(), chars.next()) {
        (Some(code), None) => match code.to_ascii_uppercase() {
            'N' => Some(Direction::North),
            'E' => Some(Direction::East),
            'S' => Some(Direction::South),
            'W' => Some(Direction::West),
            _ => None,
        },
        _ => None,
    };

    direction.ok_or_else(|| ParseError::InvalidDirection(trimmed.to_owned()))
}

/// Parses a single command character, ignoring case.
#[must_use]
pub fn parse_command(token: char) -> Option<Command> {
    match token.to_ascii_uppercase() {
        'F' => Some(Command::MoveForward),
        'B' => Some(Command::MoveBackward),
        'R' => Some(Command::TurnRight),
        'L' => Some(Command::TurnLeft),
        _ => None,
    }
}

/// Parses a command string, skipping ASCII whitespace between commands.
pub fn parse_commands(text: &str) -> Result<Vec<Command>, ParseError> {
    text.chars()
        .enumerate()
        .filter(|(_, token)| !token.is_ascii_whitespace())
        .map(|(index, token)| {
            parse_command(token).ok_or(ParseError::InvalidCommand { token, index })
        })
        .collect()
}

/// Parses a planet definition: a size line followed by obstacle lines.
pub fn parse_planet(text: &str) -> Result<Planet, ParseError> {
    let mut lines = significant_lines(text);
    let size = parse_size(lines.next().ok_or(ParseError::MissingSize)?)?;
    let obstacles = lines
        .map(|line| parse_position(line).map(Obstacle::at))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Planet::new(size, obstacles)?)
}

/// Parses a rover definition: a position line followed by a direction line.
pub fn parse_rover(text: &str) -> Result<Rover, ParseError> {
    let mut lines = significant_lines(text);
    let position = parse_position(lines.next().ok_or(ParseError::MissingPosition)?)?;
    let direction = parse_direction(lines.next().ok_or(ParseError::MissingDirection)?)?;

    if let Some(extra) = lines.next() {
        return Err(ParseError::TrailingInput(extra.to_owned()));
    }

    Ok(Rover::new(position, direction))
}

fn significant_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Renders a pose as `"x:y:DIR"`.
#[must_use]
pub fn render_complete(rover: &Rover) -> String {
    let position = rover.position();
    format!(
        "{x}{REPORT_DELIMITER}{y}{REPORT_DELIMITER}{dir}",
        x = position.x(),
        y = position.y(),
        dir = rover.direction().code(),
    )
}

/// Renders the last safe pose of a halted run as `"O:x:y:DIR"`.
#[must_use]
pub fn render_obstacle(rover: &Rover) -> String {
    format!("{OBSTACLE_MARKER}{REPORT_DELIMITER}{}", render_complete(rover))
}

/// Renders the terminal outcome of a run.
#[must_use]
pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Completed { rover } => render_complete(rover),
        Outcome::ObstacleHit { rover, .. } => render_obstacle(rover),
    }
}

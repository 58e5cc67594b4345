#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Mars Rover engine.
//!
//! This crate defines the value types that flow between adapters, the planet
//! definition, and the pure systems. Adapters decode [`Command`] sequences and
//! an initial [`Rover`], systems fold those commands over the rover's pose, and
//! the engine answers with exactly one [`Outcome`]. Every type here is an
//! immutable value; transitions always produce a new value instead of mutating
//! an existing one.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Cardinal facings available to the rover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Facing toward increasing `y` coordinates.
    #[serde(rename = "N")]
    North,
    /// Facing toward increasing `x` coordinates.
    #[serde(rename = "E")]
    East,
    /// Facing toward decreasing `y` coordinates.
    #[serde(rename = "S")]
    South,
    /// Facing toward decreasing `x` coordinates.
    #[serde(rename = "W")]
    West,
}

impl Direction {
    /// All facings in clockwise order starting from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Rotates the facing a quarter turn clockwise.
    #[must_use]
    pub const fn turn_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Rotates the facing a quarter turn counter-clockwise.
    #[must_use]
    pub const fn turn_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Facing rotated by half a turn.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Unit step taken when moving one cell along the facing.
    #[must_use]
    pub const fn delta(self) -> Delta {
        match self {
            Self::North => Delta::new(0, 1),
            Self::South => Delta::new(0, -1),
            Self::East => Delta::new(1, 0),
            Self::West => Delta::new(-1, 0),
        }
    }

    /// Single-letter code used by the text formats.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }
}

/// Signed offset applied to a [`Position`] by a single move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Delta {
    dx: i64,
    dy: i64,
}

impl Delta {
    /// Creates a new offset.
    #[must_use]
    pub const fn new(dx: i64, dy: i64) -> Self {
        Self { dx, dy }
    }

    /// Offset applied along the `x` axis.
    #[must_use]
    pub const fn dx(&self) -> i64 {
        self.dx
    }

    /// Offset applied along the `y` axis.
    #[must_use]
    pub const fn dy(&self) -> i64 {
        self.dy
    }
}

/// Extent of the toroidal planet grid measured in whole cells.
///
/// Both dimensions are non-zero so wrap-around is always defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    width: NonZeroU32,
    height: NonZeroU32,
}

impl Size {
    /// Creates a new size from non-zero dimensions.
    #[must_use]
    pub const fn new(width: NonZeroU32, height: NonZeroU32) -> Self {
        Self { width, height }
    }

    /// Creates a size from raw dimensions, rejecting zero on either axis.
    #[must_use]
    pub const fn from_dimensions(width: u32, height: u32) -> Option<Self> {
        match (NonZeroU32::new(width), NonZeroU32::new(height)) {
            (Some(width), Some(height)) => Some(Self { width, height }),
            _ => None,
        }
    }

    /// Number of columns on the grid.
    #[must_use]
    pub const fn width(&self) -> NonZeroU32 {
        self.width
    }

    /// Number of rows on the grid.
    #[must_use]
    pub const fn height(&self) -> NonZeroU32 {
        self.height
    }

    /// Reports whether the position lies inside the grid.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.x < self.width.get() && position.y < self.height.get()
    }
}

/// Location of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    x: u32,
    y: u32,
}

impl Position {
    /// Creates a new grid position.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Zero-based column of the position.
    #[must_use]
    pub const fn x(&self) -> u32 {
        self.x
    }

    /// Zero-based row of the position.
    #[must_use]
    pub const fn y(&self) -> u32 {
        self.y
    }

    /// Applies the offset and wraps both axes onto the grid described by `size`.
    #[must_use]
    pub fn step(self, delta: Delta, size: Size) -> Self {
        Self {
            x: wrap(i64::from(self.x), size.width(), delta.dx()),
            y: wrap(i64::from(self.y), size.height(), delta.dy()),
        }
    }
}

/// Wraps `value + delta` into `[0, limit)` using a true mathematical modulo.
///
/// The sum is widened before reducing so neither negative intermediates nor
/// extreme inputs can escape the range.
#[must_use]
pub fn wrap(value: i64, limit: NonZeroU32, delta: i64) -> u32 {
    let limit = i128::from(limit.get());
    let wrapped = (i128::from(value) + i128::from(delta)).rem_euclid(limit);
    // rem_euclid with a positive modulus always lands in [0, limit).
    u32::try_from(wrapped).unwrap_or(0)
}

/// Grid cell that blocks rover movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Obstacle {
    position: Position,
}

impl Obstacle {
    /// Creates an obstacle occupying the provided position.
    #[must_use]
    pub const fn at(position: Position) -> Self {
        Self { position }
    }

    /// Cell occupied by the obstacle.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }
}

/// Point-in-time pose of the rover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rover {
    position: Position,
    direction: Direction,
}

impl Rover {
    /// Creates a rover standing on `position` and facing `direction`.
    #[must_use]
    pub const fn new(position: Position, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Cell currently occupied by the rover.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Facing of the rover.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns a copy of the rover standing on `position`.
    #[must_use]
    pub const fn with_position(self, position: Position) -> Self {
        Self { position, ..self }
    }

    /// Returns a copy of the rover facing `direction`.
    #[must_use]
    pub const fn with_direction(self, direction: Direction) -> Self {
        Self { direction, ..self }
    }
}

/// Instructions the rover understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Rotate a quarter turn clockwise in place.
    TurnRight,
    /// Rotate a quarter turn counter-clockwise in place.
    TurnLeft,
    /// Move one cell along the current facing.
    MoveForward,
    /// Move one cell against the current facing without turning around.
    MoveBackward,
}

impl Command {
    /// Reports whether executing the command changes the rover's position.
    #[must_use]
    pub const fn is_movement(self) -> bool {
        match self {
            Self::MoveForward | Self::MoveBackward => true,
            Self::TurnRight | Self::TurnLeft => false,
        }
    }
}

/// Terminal result of running a command sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Every command executed without collision.
    Completed {
        /// Pose after the final command.
        rover: Rover,
    },
    /// A move was refused because an obstacle occupied the destination.
    ObstacleHit {
        /// Last safe pose, taken before the blocked move.
        rover: Rover,
        /// Obstacle that refused the move.
        obstacle: Obstacle,
    },
}

impl Outcome {
    /// Pose the outcome reports, regardless of whether the run completed.
    #[must_use]
    pub const fn rover(&self) -> Rover {
        match self {
            Self::Completed { rover } | Self::ObstacleHit { rover, .. } => *rover,
        }
    }

    /// Obstacle that halted the run, if any.
    #[must_use]
    pub const fn obstacle(&self) -> Option<Obstacle> {
        match self {
            Self::Completed { .. } => None,
            Self::ObstacleHit { obstacle, .. } => Some(*obstacle),
        }
    }
}

/// Records emitted while the simulation folds over a command sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// The rover rotated in place.
    RoverTurned {
        /// Facing before the turn.
        from: Direction,
        /// Facing after the turn.
        to: Direction,
    },
    /// The rover moved to a free cell.
    RoverMoved {
        /// Cell occupied before the move.
        from: Position,
        /// Cell occupied after the move.
        to: Position,
    },
    /// A move was refused and the simulation halted.
    ObstacleEncountered {
        /// Last safe pose.
        rover: Rover,
        /// Obstacle occupying the candidate cell.
        obstacle: Obstacle,
    },
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::{wrap, Command, Delta, Direction, Obstacle, Outcome, Position, Rover, Size};
    use proptest::prelude::*;

    fn limit(value: u32) -> NonZeroU32 {
        NonZeroU32::new(value).expect("non-zero limit")
    }

    #[test]
    fn four_right_turns_restore_facing() {
        for direction in Direction::ALL {
            let turned = direction
                .turn_right()
                .turn_right()
                .turn_right()
                .turn_right();
            assert_eq!(turned, direction);
        }
    }

    #[test]
    fn four_left_turns_restore_facing() {
        for direction in Direction::ALL {
            let turned = direction.turn_left().turn_left().turn_left().turn_left();
            assert_eq!(turned, direction);
        }
    }

    #[test]
    fn right_and_left_turns_are_inverses() {
        for direction in Direction::ALL {
            assert_eq!(direction.turn_right().turn_left(), direction);
            assert_eq!(direction.turn_left().turn_right(), direction);
        }
    }

    #[test]
    fn opposite_is_an_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn opposite_matches_two_right_turns() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite(), direction.turn_right().turn_right());
        }
    }

    #[test]
    fn deltas_point_along_facing() {
        assert_eq!(Direction::North.delta(), Delta::new(0, 1));
        assert_eq!(Direction::South.delta(), Delta::new(0, -1));
        assert_eq!(Direction::East.delta(), Delta::new(1, 0));
        assert_eq!(Direction::West.delta(), Delta::new(-1, 0));
    }

    #[test]
    fn wrap_handles_negative_intermediates() {
        assert_eq!(wrap(0, limit(5), -1), 4);
        assert_eq!(wrap(4, limit(5), 1), 0);
        assert_eq!(wrap(-7, limit(5), 0), 3);
        assert_eq!(wrap(2, limit(5), 0), 2);
    }

    #[test]
    fn wrap_on_single_cell_always_returns_zero() {
        assert_eq!(wrap(0, limit(1), 1), 0);
        assert_eq!(wrap(0, limit(1), -1), 0);
    }

    #[test]
    fn step_wraps_both_axes() {
        let size = Size::from_dimensions(5, 4).expect("valid size");
        let corner = Position::new(0, 0);
        assert_eq!(
            corner.step(Direction::West.delta(), size),
            Position::new(4, 0)
        );
        assert_eq!(
            corner.step(Direction::South.delta(), size),
            Position::new(0, 3)
        );
        assert_eq!(
            Position::new(4, 3).step(Direction::North.delta(), size),
            Position::new(4, 0)
        );
    }

    #[test]
    fn size_rejects_zero_dimensions() {
        assert!(Size::from_dimensions(0, 4).is_none());
        assert!(Size::from_dimensions(5, 0).is_none());
        assert!(Size::from_dimensions(1, 1).is_some());
    }

    #[test]
    fn size_contains_only_cells_inside_grid() {
        let size = Size::from_dimensions(5, 4).expect("valid size");
        assert!(size.contains(Position::new(0, 0)));
        assert!(size.contains(Position::new(4, 3)));
        assert!(!size.contains(Position::new(5, 0)));
        assert!(!size.contains(Position::new(0, 4)));
    }

    #[test]
    fn only_moves_are_movement_commands() {
        assert!(Command::MoveForward.is_movement());
        assert!(Command::MoveBackward.is_movement());
        assert!(!Command::TurnLeft.is_movement());
        assert!(!Command::TurnRight.is_movement());
    }

    #[test]
    fn obstacle_hit_serializes_with_tag() {
        let outcome = Outcome::ObstacleHit {
            rover: Rover::new(Position::new(1, 0), Direction::East),
            obstacle: Obstacle::at(Position::new(2, 0)),
        };
        let json = serde_json::to_value(outcome).expect("serialize outcome");
        assert_eq!(json["outcome"], "obstacle_hit");
        assert_eq!(json["rover"]["direction"], "E");
        assert_eq!(json["obstacle"]["position"]["x"], 2);
    }

    proptest! {
        #[test]
        fn wrap_always_lands_on_grid(
            value in any::<i64>(),
            bound in 1u32..=u32::MAX,
            delta in any::<i64>(),
        ) {
            let wrapped = wrap(value, limit(bound), delta);
            prop_assert!(wrapped < bound);
        }

        #[test]
        fn wrap_agrees_with_unit_steps(value in 0u32..64, bound in 1u32..64) {
            let value = value % bound;
            let forward = wrap(i64::from(value), limit(bound), 1);
            let back = wrap(i64::from(forward), limit(bound), -1);
            prop_assert_eq!(back, value);
        }
    }
}

#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative planet definition for the Mars Rover engine.
//!
//! A [`Planet`] is assembled once from adapter input and is read-only for the
//! lifetime of a simulation run. Systems inspect it exclusively through the
//! [`query`] module.

use mars_rover_core::{Obstacle, Position, Rover, Size};
use thiserror::Error;

/// Reasons a planet definition may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlanetError {
    /// An obstacle lies outside the grid described by the planet size.
    #[error("obstacle at {x},{y} lies outside the {width}x{height} grid")]
    ObstacleOutOfBounds {
        /// Column of the offending obstacle.
        x: u32,
        /// Row of the offending obstacle.
        y: u32,
        /// Width of the grid.
        width: u32,
        /// Height of the grid.
        height: u32,
    },
}

/// Reasons a rover cannot be deployed onto a planet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LandingError {
    /// The rover's position lies outside the grid.
    #[error("rover at {x},{y} lies outside the {width}x{height} grid")]
    OutOfBounds {
        /// Column of the rover.
        x: u32,
        /// Row of the rover.
        y: u32,
        /// Width of the grid.
        width: u32,
        /// Height of the grid.
        height: u32,
    },
    /// The rover's position is occupied by an obstacle.
    #[error("rover at {x},{y} sits on an obstacle")]
    OnObstacle {
        /// Column of the rover.
        x: u32,
        /// Row of the rover.
        y: u32,
    },
}

/// Toroidal grid populated with obstacles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Planet {
    size: Size,
    obstacles: Vec<Obstacle>,
}

impl Planet {
    /// Creates a planet, rejecting obstacles that fall outside the grid.
    ///
    /// Obstacles keep their input order. Duplicates are retained as-is.
    pub fn new(size: Size, obstacles: Vec<Obstacle>) -> Result<Self, PlanetError> {
        if let Some(stray) = obstacles
            .iter()
            .find(|obstacle| !size.contains(obstacle.position()))
        {
            return Err(PlanetError::ObstacleOutOfBounds {
                x: stray.position().x(),
                y: stray.position().y(),
                width: size.width().get(),
                height: size.height().get(),
            });
        }

        Ok(Self { size, obstacles })
    }

    /// Creates an obstacle-free planet.
    #[must_use]
    pub const fn barren(size: Size) -> Self {
        Self {
            size,
            obstacles: Vec::new(),
        }
    }

    /// Extent of the planet grid.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Obstacles in the order they were supplied.
    #[must_use]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Reports whether the position lies on the planet grid.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        self.size.contains(position)
    }
}

/// Checks that the rover can start its mission on the planet.
pub fn validate_landing(planet: &Planet, rover: Rover) -> Result<(), LandingError> {
    let position = rover.position();
    if !planet.contains(position) {
        return Err(LandingError::OutOfBounds {
            x: position.x(),
            y: position.y(),
            width: planet.size().width().get(),
            height: planet.size().height().get(),
        });
    }

    if query::obstacle_at(planet, position).is_some() {
        return Err(LandingError::OnObstacle {
            x: position.x(),
            y: position.y(),
        });
    }

    Ok(())
}

/// Query functions that provide read-only access to the planet.
pub mod query {
    use super::Planet;
    use mars_rover_core::{Obstacle, Position};

    /// Returns the obstacle occupying `position`, if any.
    ///
    /// When duplicates exist the first one in planet order is reported.
    #[must_use]
    pub fn obstacle_at(planet: &Planet, position: Position) -> Option<Obstacle> {
        planet
            .obstacles
            .iter()
            .copied()
            .find(|obstacle| obstacle.position() == position)
    }

    /// Reports whether `position` is free of obstacles.
    #[must_use]
    pub fn is_clear(planet: &Planet, position: Position) -> bool {
        obstacle_at(planet, position).is_none()
    }
}

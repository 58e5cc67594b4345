use mars_rover_core::{Command, Direction, Position, Rover, Size};
use mars_rover_system_interpreter::next_pose;
use mars_rover_world::Planet;
use proptest::prelude::*;

fn planet(width: u32, height: u32) -> Planet {
    Planet::barren(Size::from_dimensions(width, height).expect("valid size"))
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

#[test]
fn turns_keep_position() {
    let planet = planet(5, 4);
    let rover = Rover::new(Position::new(2, 3), Direction::North);

    let right = next_pose(&planet, rover, Command::TurnRight);
    assert_eq!(right, Rover::new(Position::new(2, 3), Direction::East));

    let left = next_pose(&planet, rover, Command::TurnLeft);
    assert_eq!(left, Rover::new(Position::new(2, 3), Direction::West));
}

#[test]
fn forward_moves_along_facing() {
    let planet = planet(5, 4);
    let origin = Position::new(2, 1);
    let expectations = [
        (Direction::North, Position::new(2, 2)),
        (Direction::East, Position::new(3, 1)),
        (Direction::South, Position::new(2, 0)),
        (Direction::West, Position::new(1, 1)),
    ];

    for (direction, expected) in expectations {
        let rover = Rover::new(origin, direction);
        let moved = next_pose(&planet, rover, Command::MoveForward);
        assert_eq!(
            moved,
            Rover::new(expected, direction),
            "forward while facing {direction:?}"
        );
    }
}

#[test]
fn backward_translates_without_turning_around() {
    let planet = planet(5, 4);
    let rover = Rover::new(Position::new(2, 1), Direction::East);

    let moved = next_pose(&planet, rover, Command::MoveBackward);

    assert_eq!(moved, Rover::new(Position::new(1, 1), Direction::East));
}

#[test]
fn moves_wrap_around_every_edge() {
    let planet = planet(5, 4);

    let east_edge = Rover::new(Position::new(4, 0), Direction::East);
    assert_eq!(
        next_pose(&planet, east_edge, Command::MoveForward).position(),
        Position::new(0, 0)
    );

    let west_edge = Rover::new(Position::new(0, 2), Direction::East);
    assert_eq!(
        next_pose(&planet, west_edge, Command::MoveBackward).position(),
        Position::new(4, 2)
    );

    let north_edge = Rover::new(Position::new(1, 3), Direction::North);
    assert_eq!(
        next_pose(&planet, north_edge, Command::MoveForward).position(),
        Position::new(1, 0)
    );

    let south_edge = Rover::new(Position::new(1, 0), Direction::North);
    assert_eq!(
        next_pose(&planet, south_edge, Command::MoveBackward).position(),
        Position::new(1, 3)
    );
}

#[test]
fn single_cell_planet_wraps_onto_itself() {
    let planet = planet(1, 1);
    let rover = Rover::new(Position::new(0, 0), Direction::North);

    assert_eq!(next_pose(&planet, rover, Command::MoveForward), rover);
    assert_eq!(next_pose(&planet, rover, Command::MoveBackward), rover);
}

proptest! {
    #[test]
    fn forward_then_backward_returns_to_start(
        width in 1u32..32,
        height in 1u32..32,
        x in 0u32..32,
        y in 0u32..32,
        facing in direction(),
    ) {
        let planet = planet(width, height);
        let rover = Rover::new(Position::new(x % width, y % height), facing);

        let moved = next_pose(&planet, rover, Command::MoveForward);
        let back = next_pose(&planet, moved, Command::MoveBackward);

        prop_assert_eq!(back, rover);
    }

    #[test]
    fn candidates_stay_on_the_grid(
        width in 1u32..32,
        height in 1u32..32,
        x in 0u32..32,
        y in 0u32..32,
        facing in direction(),
        command in prop::sample::select(vec![
            Command::TurnRight,
            Command::TurnLeft,
            Command::MoveForward,
            Command::MoveBackward,
        ]),
    ) {
        let planet = planet(width, height);
        let rover = Rover::new(Position::new(x % width, y % height), facing);

        let candidate = next_pose(&planet, rover, command);

        prop_assert!(planet.contains(candidate.position()));
    }
}

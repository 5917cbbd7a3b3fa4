//! This module applies parsed commands to the robot, folding every guard
//! violation into an [`Outcome`] instead of an error so the caller can keep
//! consuming input.

use crate::robot::Robot;
use crate::types::{Command, IgnoreReason, Outcome};

/// Executes a single command against the robot.
///
/// Dispatch is a plain `match` over the closed [`Command`] enum. A rejected
/// command never raises; it comes back as [`Outcome::Ignored`] with the
/// reason, and the robot is left exactly as it was. `EXIT` yields
/// [`Outcome::ExitRequested`] whether or not the robot is placed.
pub fn execute(command: &Command, robot: &mut Robot) -> Outcome {
    match command {
        Command::Place { position, direction } => applied(robot.place(*position, *direction)),
        Command::Move => applied(robot.advance()),
        Command::Left => applied(robot.turn_left()),
        Command::Right => applied(robot.turn_right()),
        Command::Report => match robot.report() {
            Ok(report) => Outcome::Reported(report),
            Err(reason) => Outcome::Ignored(reason),
        },
        Command::Exit => Outcome::ExitRequested,
    }
}

/// Folds the result of a guarded mutation into an outcome.
fn applied(result: Result<(), IgnoreReason>) -> Outcome {
    match result {
        Ok(()) => Outcome::StateChanged,
        Err(reason) => Outcome::Ignored(reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Table;
    use crate::types::{Direction, Position, Report};

    fn robot() -> Robot {
        Robot::new(Table::default())
    }

    fn place(x: i32, y: i32, direction: Direction) -> Command {
        Command::Place {
            position: Position::new(x, y),
            direction,
        }
    }

    #[test]
    fn test_place_changes_state() {
        let mut robot = robot();

        let outcome = execute(&place(0, 0, Direction::North), &mut robot);

        assert_eq!(outcome, Outcome::StateChanged);
        assert!(robot.is_placed());
    }

    #[test]
    fn test_place_off_table_is_ignored() {
        let mut robot = robot();

        let outcome = execute(&place(0, 5, Direction::North), &mut robot);

        assert_eq!(outcome, Outcome::Ignored(IgnoreReason::OutOfBounds));
        assert!(!robot.is_placed());
    }

    #[test]
    fn test_commands_before_place_are_ignored() {
        let mut robot = robot();

        for command in [Command::Move, Command::Left, Command::Right, Command::Report] {
            let outcome = execute(&command, &mut robot);
            assert_eq!(outcome, Outcome::Ignored(IgnoreReason::NotPlaced));
        }
        assert!(!robot.is_placed());
    }

    #[test]
    fn test_move_at_boundary_is_ignored() {
        let mut robot = robot();
        execute(&place(4, 4, Direction::East), &mut robot);

        let outcome = execute(&Command::Move, &mut robot);

        assert_eq!(outcome, Outcome::Ignored(IgnoreReason::BoundaryReached));
        assert_eq!(robot.pose().unwrap().position, Position::new(4, 4));
    }

    #[test]
    fn test_report_returns_pose_without_side_effects() {
        let mut robot = robot();
        execute(&place(2, 2, Direction::South), &mut robot);

        let outcome = execute(&Command::Report, &mut robot);

        assert_eq!(
            outcome,
            Outcome::Reported(Report {
                position: Position::new(2, 2),
                direction: Direction::South,
            })
        );
        assert_eq!(robot.pose().unwrap().position, Position::new(2, 2));
    }

    #[test]
    fn test_exit_requested_even_before_place() {
        let mut robot = robot();

        assert_eq!(execute(&Command::Exit, &mut robot), Outcome::ExitRequested);
    }

    #[test]
    fn test_walk_to_north_east_corner() {
        let mut robot = robot();
        execute(&place(1, 2, Direction::East), &mut robot);
        execute(&Command::Move, &mut robot);
        execute(&Command::Move, &mut robot);
        execute(&Command::Left, &mut robot);
        execute(&Command::Move, &mut robot);

        let outcome = execute(&Command::Report, &mut robot);

        assert_eq!(
            outcome,
            Outcome::Reported(Report {
                position: Position::new(3, 3),
                direction: Direction::North,
            })
        );
    }
}

//! This module defines the core data structures and types used throughout the robot
//! simulator, including directions, positions, parsed commands, execution outcomes,
//! and error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::Rule;

/// The default table width, in cells.
pub const DEFAULT_TABLE_WIDTH: i32 = 5;
/// The default table height, in cells.
pub const DEFAULT_TABLE_HEIGHT: i32 = 5;

/// Represents the four compass directions the robot can face.
///
/// Variants are ordered clockwise so that rotation is a pure function of the
/// current variant, with no state held anywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Towards increasing `y`.
    North,
    /// Towards increasing `x`.
    East,
    /// Towards decreasing `y`.
    South,
    /// Towards decreasing `x`.
    West,
}

impl Direction {
    /// All directions in clockwise order, starting at north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Returns the direction after a 90 degree counter-clockwise rotation.
    pub fn left(self) -> Direction {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// Returns the direction after a 90 degree clockwise rotation.
    pub fn right(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Returns the `(dx, dy)` of a single step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    /// Returns the canonical upper-case name used in commands and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::East => "EAST",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = RobotError;

    /// Parses a direction name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NORTH" => Ok(Direction::North),
            "EAST" => Ok(Direction::East),
            "SOUTH" => Ok(Direction::South),
            "WEST" => Ok(Direction::West),
            other => Err(RobotError::Validation(format!(
                "Unknown direction: {other}"
            ))),
        }
    }
}

/// A grid coordinate. `(0, 0)` is the south-west corner of the table.
///
/// Coordinates are signed so that any `PLACE` argument can be represented;
/// whether a position is actually on the table is decided by
/// [`Table::contains`](crate::table::Table::contains).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Distance from the west edge.
    pub x: i32,
    /// Distance from the south edge.
    pub y: i32,
}

impl Position {
    /// Creates a position from its coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position shifted by `(dx, dy)`, leaving `self` untouched.
    pub fn moved_by(self, (dx, dy): (i32, i32)) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Represents a single parsed instruction, one variant per command keyword.
///
/// The set of commands is closed: dispatch is a `match`, and adding a command
/// means adding a variant plus its grammar rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `PLACE x,y,DIRECTION` - put the robot on the table.
    Place {
        position: Position,
        direction: Direction,
    },
    /// `MOVE` - advance one cell in the facing direction.
    Move,
    /// `LEFT` - rotate 90 degrees counter-clockwise.
    Left,
    /// `RIGHT` - rotate 90 degrees clockwise.
    Right,
    /// `REPORT` - announce the current pose.
    Report,
    /// `EXIT` (or `QUIT`, `BYE`) - stop reading commands.
    Exit,
}

/// The pose announced by a successful `REPORT`.
///
/// Serializes flat, so the JSON rendering is `{"x":..,"y":..,"direction":".."}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Where the robot stands.
    #[serde(flatten)]
    pub position: Position,
    /// Which way it faces.
    pub direction: Direction,
}

impl fmt::Display for Report {
    /// Formats the report in the canonical `x,y,DIRECTION` form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.position, self.direction)
    }
}

/// Represents why a well-formed command was ignored instead of applied.
///
/// Every variant is recoverable: the robot is left exactly as it was, and the
/// session keeps consuming input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The command requires a placed robot and no `PLACE` has succeeded yet.
    NotPlaced,
    /// The `PLACE` target lies outside the table.
    OutOfBounds,
    /// The move would carry the robot over the table edge.
    BoundaryReached,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            IgnoreReason::NotPlaced => "robot has not been placed",
            IgnoreReason::OutOfBounds => "target position is off the table",
            IgnoreReason::BoundaryReached => "move would leave the table",
        };
        f.write_str(msg)
    }
}

/// Represents the outcome of applying a single command to the robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The robot's pose changed.
    StateChanged,
    /// A report was produced; nothing changed.
    Reported(Report),
    /// The command was a no-op, for the given reason.
    Ignored(IgnoreReason),
    /// The command asked the session to stop.
    ExitRequested,
}

/// Represents various errors that can occur during simulator operations.
///
/// Parse and validation errors are recoverable at the session level; stream
/// errors are fatal because no further commands can be read or answered.
#[derive(Debug, Error)]
pub enum RobotError {
    /// Indicates that an input line is not a well-formed command.
    #[error("Command parsing error: {0}")]
    Parse(#[from] Box<pest::error::Error<Rule>>),
    /// Indicates an invalid configuration or token value.
    #[error("Validation error: {0}")]
    Validation(String),
    /// Indicates an error related to file system operations, such as reading a script.
    #[error("File error: {0}")]
    File(String),
    /// Indicates that the input stream or the report sink failed mid-run.
    #[error("Stream error: {0}")]
    Stream(#[from] std::io::Error),
}

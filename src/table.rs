//! The table the robot moves on: a rectangular grid of valid positions,
//! fixed for the lifetime of a simulation.

use serde::{Deserialize, Serialize};

use crate::types::{Position, RobotError, DEFAULT_TABLE_HEIGHT, DEFAULT_TABLE_WIDTH};

/// Represents a `width` x `height` grid of cells.
///
/// Valid `x` coordinates are `0..width` and valid `y` coordinates are
/// `0..height`, with `(0, 0)` in the south-west corner. The table itself
/// holds no robot state; it only answers membership queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    width: i32,
    height: i32,
}

impl Table {
    /// Creates a table with the given dimensions.
    ///
    /// Both dimensions must be at least 1; a zero or negative dimension
    /// would leave no cell to place the robot on.
    pub fn new(width: i32, height: i32) -> Result<Table, RobotError> {
        if width < 1 || height < 1 {
            return Err(RobotError::Validation(format!(
                "Table dimensions must be positive, got {width}x{height}"
            )));
        }

        Ok(Table { width, height })
    }

    /// Returns the table width, in cells.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Returns the table height, in cells.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Checks whether `position` lies on the table.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0 && position.x < self.width && position.y >= 0 && position.y < self.height
    }
}

impl Default for Table {
    /// Returns the classic 5x5 table.
    fn default() -> Self {
        Table {
            width: DEFAULT_TABLE_WIDTH,
            height: DEFAULT_TABLE_HEIGHT,
        }
    }
}

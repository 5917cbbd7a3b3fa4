//! The robot itself: an optional pose on a table, mutated only through
//! guarded operations that keep the pose on the table at all times.

use serde::{Deserialize, Serialize};

use crate::table::Table;
use crate::types::{Direction, IgnoreReason, Position, Report};

/// Where the robot stands and which way it faces.
///
/// A pose only exists once the robot has been placed, so "position and
/// direction are defined if and only if the robot is on the table" holds by
/// construction rather than by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    /// The cell the robot occupies.
    pub position: Position,
    /// The direction the robot faces.
    pub direction: Direction,
}

/// Represents the robot: the single mutable entity of the simulation.
///
/// A robot starts off the table and can only get onto it through
/// [`Robot::place`]. Once placed it stays placed; failed operations leave
/// the pose exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Robot {
    table: Table,
    pose: Option<Pose>,
}

impl Robot {
    /// Creates an unplaced robot bound to `table` for its lifetime.
    pub fn new(table: Table) -> Self {
        Robot { table, pose: None }
    }

    /// Returns the table this robot moves on.
    pub fn table(&self) -> Table {
        self.table
    }

    /// Checks whether a `PLACE` has succeeded yet.
    pub fn is_placed(&self) -> bool {
        self.pose.is_some()
    }

    /// Returns the current pose, or `None` while the robot is off the table.
    pub fn pose(&self) -> Option<Pose> {
        self.pose
    }

    /// Puts the robot at `position` facing `direction`.
    ///
    /// Fails with [`IgnoreReason::OutOfBounds`] when the target is off the
    /// table. The previous pose, placed or not, survives a failed place, so
    /// a valid robot is never knocked off the table by a bad `PLACE`.
    pub fn place(&mut self, position: Position, direction: Direction) -> Result<(), IgnoreReason> {
        if !self.table.contains(position) {
            return Err(IgnoreReason::OutOfBounds);
        }

        self.pose = Some(Pose {
            position,
            direction,
        });

        Ok(())
    }

    /// Advances one cell in the facing direction.
    ///
    /// Fails with [`IgnoreReason::NotPlaced`] before the first successful
    /// place, and with [`IgnoreReason::BoundaryReached`] when the next cell
    /// is off the table.
    pub fn advance(&mut self) -> Result<(), IgnoreReason> {
        let pose = self.pose.as_mut().ok_or(IgnoreReason::NotPlaced)?;
        let next = pose.position.moved_by(pose.direction.delta());

        if !self.table.contains(next) {
            return Err(IgnoreReason::BoundaryReached);
        }

        pose.position = next;
        Ok(())
    }

    /// Rotates 90 degrees counter-clockwise without changing position.
    pub fn turn_left(&mut self) -> Result<(), IgnoreReason> {
        let pose = self.pose.as_mut().ok_or(IgnoreReason::NotPlaced)?;
        pose.direction = pose.direction.left();
        Ok(())
    }

    /// Rotates 90 degrees clockwise without changing position.
    pub fn turn_right(&mut self) -> Result<(), IgnoreReason> {
        let pose = self.pose.as_mut().ok_or(IgnoreReason::NotPlaced)?;
        pose.direction = pose.direction.right();
        Ok(())
    }

    /// Reads the current pose without mutating anything.
    pub fn report(&self) -> Result<Report, IgnoreReason> {
        let pose = self.pose.ok_or(IgnoreReason::NotPlaced)?;

        Ok(Report {
            position: pose.position,
            direction: pose.direction,
        })
    }
}

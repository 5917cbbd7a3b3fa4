//! This module defines the `Session` struct, which drives a robot from a stream of
//! text lines: parse each line, execute it, forward reports to a sink, and stop on
//! an exit command or the end of the stream.

use std::io;

use tracing::{debug, trace};

use crate::parser;
use crate::processor;
use crate::robot::Robot;
use crate::table::Table;
use crate::types::{Outcome, Report, RobotError};

/// Represents one simulation run: a single robot bound to a single table,
/// fed commands line by line.
///
/// The session owns the robot outright. Inputs arrive through
/// [`Session::run`] (a whole stream) or [`Session::process_line`] (one line
/// at a time, for callers that prompt between lines).
pub struct Session {
    robot: Robot,
}

/// Represents what became of a single input line.
#[derive(Debug)]
pub enum LineOutcome {
    /// The line was empty after trimming and was skipped.
    Blank,
    /// The line was not a well-formed command and was discarded.
    Rejected(RobotError),
    /// The line parsed and was executed.
    Executed(Outcome),
}

/// Represents how a finished run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// An exit command stopped the run; remaining input was never read.
    Exit,
    /// The input stream ran out of lines.
    EndOfInput,
    /// The input stream was interrupted mid-read.
    Interrupted,
}

/// Counters describing a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of lines consumed, including blank and rejected ones.
    pub lines_read: usize,
    /// Number of reports forwarded to the sink.
    pub reports_emitted: usize,
    /// How the run ended.
    pub termination: Termination,
}

impl Session {
    /// Creates a session with an unplaced robot on the given table.
    pub fn new(table: Table) -> Self {
        Session {
            robot: Robot::new(table),
        }
    }

    /// Returns the robot this session drives.
    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    /// Parses and executes one line.
    ///
    /// A parse failure comes back inside [`LineOutcome::Rejected`] rather
    /// than as an `Err`: the session discards malformed lines and carries
    /// on, and the caller decides whether to surface them.
    pub fn process_line(&mut self, line: &str) -> LineOutcome {
        match parser::parse(line) {
            Ok(None) => LineOutcome::Blank,
            Ok(Some(command)) => {
                let outcome = processor::execute(&command, &mut self.robot);
                trace!(?command, ?outcome, "executed command");
                if let Outcome::Ignored(reason) = outcome {
                    debug!(%reason, "command ignored");
                }
                LineOutcome::Executed(outcome)
            }
            Err(error) => {
                debug!(%error, "line discarded");
                LineOutcome::Rejected(error)
            }
        }
    }

    /// Runs the session over a stream of lines, forwarding every report to
    /// `sink` in input order.
    ///
    /// Lines after an exit command are never read. An
    /// [`io::ErrorKind::Interrupted`] read ends the run gracefully, like an
    /// exit; any other read failure, and any sink failure, is fatal and
    /// surfaces as [`RobotError::Stream`].
    pub fn run<I, S>(&mut self, lines: I, mut sink: S) -> Result<RunSummary, RobotError>
    where
        I: IntoIterator<Item = io::Result<String>>,
        S: FnMut(&Report) -> io::Result<()>,
    {
        let mut lines_read = 0;
        let mut reports_emitted = 0;

        for line in lines {
            let line = match line {
                Ok(line) => line,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                    debug!(lines_read, "input interrupted, stopping");
                    return Ok(RunSummary {
                        lines_read,
                        reports_emitted,
                        termination: Termination::Interrupted,
                    });
                }
                Err(e) => return Err(RobotError::Stream(e)),
            };

            lines_read += 1;
            match self.process_line(&line) {
                LineOutcome::Executed(Outcome::Reported(report)) => {
                    sink(&report).map_err(RobotError::Stream)?;
                    reports_emitted += 1;
                }
                LineOutcome::Executed(Outcome::ExitRequested) => {
                    debug!(lines_read, "exit requested");
                    return Ok(RunSummary {
                        lines_read,
                        reports_emitted,
                        termination: Termination::Exit,
                    });
                }
                _ => {}
            }
        }

        Ok(RunSummary {
            lines_read,
            reports_emitted,
            termination: Termination::EndOfInput,
        })
    }
}

impl Default for Session {
    /// Creates a session on the default 5x5 table.
    fn default() -> Self {
        Session::new(Table::default())
    }
}

//! This crate provides the core logic for a toy robot simulator.
//! It includes modules for parsing the line-oriented command language, tracking the
//! robot's pose on a bounded table, running whole command streams, and rendering
//! reports. Prompts, flags, and output destinations belong to the platform
//! crates built on top.

pub mod format;
pub mod loader;
pub mod parser;
pub mod processor;
pub mod robot;
pub mod scripts;
pub mod session;
pub mod table;
pub mod types;

/// Re-exports the `Rule` enum from the parser module, used by the `pest` grammar.
pub use crate::parser::Rule;
/// Re-exports the `ReportFormat` enum from the format module.
pub use format::ReportFormat;
/// Re-exports the `ScriptLoader` struct from the loader module.
pub use loader::ScriptLoader;
/// Re-exports the `parse` function from the parser module.
pub use parser::parse;
/// Re-exports the `execute` function from the processor module.
pub use processor::execute;
/// Re-exports the `Robot` and `Pose` structs from the robot module.
pub use robot::{Pose, Robot};
/// Re-exports `DemoLibrary` and `ScriptInfo` from the scripts module.
pub use scripts::{DemoLibrary, ScriptInfo};
/// Re-exports the session driver and its result types from the session module.
pub use session::{LineOutcome, RunSummary, Session, Termination};
/// Re-exports the `Table` struct from the table module.
pub use table::Table;
/// Re-exports various types related to commands and their execution from the types module.
pub use types::{
    Command, Direction, IgnoreReason, Outcome, Position, Report, RobotError,
    DEFAULT_TABLE_HEIGHT, DEFAULT_TABLE_WIDTH,
};

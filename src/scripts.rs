//! Built-in demo scripts, embedded at compile time so the simulator can be
//! tried without writing a script first.

use crate::types::RobotError;

/// A named command script shipped with the simulator.
#[derive(Debug, Clone, Copy)]
pub struct ScriptInfo {
    /// The name used to select the script.
    pub name: &'static str,
    /// A one-line description for listings.
    pub summary: &'static str,
    /// The raw script text.
    pub source: &'static str,
}

// Default embedded scripts
static DEMO_SCRIPTS: [ScriptInfo; 4] = [
    ScriptInfo {
        name: "first-steps",
        summary: "Place the robot, move once, report",
        source: include_str!("../demos/first-steps.rover"),
    },
    ScriptInfo {
        name: "about-face",
        summary: "Rotations in both directions cancel out",
        source: include_str!("../demos/about-face.rover"),
    },
    ScriptInfo {
        name: "edge-guard",
        summary: "Moves over the table edge are ignored",
        source: include_str!("../demos/edge-guard.rover"),
    },
    ScriptInfo {
        name: "grand-tour",
        summary: "A longer walk with re-placement and an exit",
        source: include_str!("../demos/grand-tour.rover"),
    },
];

pub struct DemoLibrary;

impl DemoLibrary {
    /// List all embedded demo scripts
    pub fn list() -> &'static [ScriptInfo] {
        &DEMO_SCRIPTS
    }

    /// Get a demo script by its name
    pub fn get(name: &str) -> Result<&'static ScriptInfo, RobotError> {
        DEMO_SCRIPTS
            .iter()
            .find(|script| script.name == name)
            .ok_or_else(|| RobotError::Validation(format!("Demo script '{}' not found", name)))
    }

    /// List all demo script names
    pub fn names() -> Vec<&'static str> {
        DEMO_SCRIPTS.iter().map(|script| script.name).collect()
    }
}

//! This module provides the `ScriptLoader` struct, responsible for turning command
//! sources such as script files or standard input into the line streams a
//! [`Session`](crate::session::Session) consumes.

use crate::types::RobotError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// `ScriptLoader` is a utility struct for opening command scripts.
///
/// Every method yields lines lazily so that arbitrarily long inputs are
/// never buffered whole; a script is read exactly as far as the session
/// consumes it.
pub struct ScriptLoader;

impl ScriptLoader {
    /// Opens a command script at the specified file path.
    ///
    /// Only the open itself is eager. Read failures past this point travel
    /// through the returned iterator as `io::Error` items, where the
    /// session decides whether they are fatal.
    ///
    /// # Arguments
    ///
    /// * `path` - A reference to the `Path` of the script to open.
    ///
    /// # Returns
    ///
    /// * `Ok(lines)` if the file could be opened.
    /// * `Err(RobotError::File)` if it could not.
    pub fn open(path: &Path) -> Result<impl Iterator<Item = io::Result<String>>, RobotError> {
        let file = File::open(path).map_err(|e| {
            RobotError::File(format!("Failed to open script {}: {}", path.display(), e))
        })?;

        Ok(BufReader::new(file).lines())
    }

    /// Returns the lines of an in-memory script.
    ///
    /// Useful for embedded demo scripts and for tests. The stream is
    /// infallible; every item is `Ok`.
    pub fn from_string(content: &str) -> impl Iterator<Item = io::Result<String>> + '_ {
        content.lines().map(|line| Ok(line.to_string()))
    }

    /// Returns lines read live from standard input.
    pub fn stdin() -> impl Iterator<Item = io::Result<String>> {
        io::stdin().lines()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_open_reads_script_lines() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("walk.rover");

        let script = "PLACE 0,0,NORTH\nMOVE\nREPORT\n";

        let mut file = File::create(&file_path).unwrap();
        file.write_all(script.as_bytes()).unwrap();

        let lines: Vec<String> = ScriptLoader::open(&file_path)
            .unwrap()
            .map(|line| line.unwrap())
            .collect();

        assert_eq!(lines, vec!["PLACE 0,0,NORTH", "MOVE", "REPORT"]);
    }

    #[test]
    fn test_open_missing_script() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("does-not-exist.rover");

        let result = ScriptLoader::open(&file_path);

        assert!(result.is_err());
        let error = result.err().unwrap();
        assert!(matches!(error, RobotError::File(_)));
        assert!(error.to_string().contains("does-not-exist.rover"));
    }

    #[test]
    fn test_from_string_yields_every_line() {
        let lines: Vec<String> = ScriptLoader::from_string("MOVE\n\nREPORT")
            .map(|line| line.unwrap())
            .collect();

        assert_eq!(lines, vec!["MOVE", "", "REPORT"]);
    }
}

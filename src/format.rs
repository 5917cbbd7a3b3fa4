//! This module renders reports for the output sink. The core hands out a
//! structured [`Report`]; everything about its textual shape lives here so
//! platforms can pick a rendering without touching the engine.

use std::str::FromStr;

use crate::types::{Report, RobotError};

/// Represents the available renderings for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// The canonical `x,y,DIRECTION` line.
    #[default]
    Text,
    /// One JSON object per report.
    Json,
    /// One comma-separated record per report.
    Csv,
    /// One `<report>` element per report.
    Xml,
}

impl ReportFormat {
    /// Renders a single report in this format, without a trailing newline.
    pub fn render(&self, report: &Report) -> String {
        match self {
            // A single pose record happens to read the same in text and CSV.
            ReportFormat::Text | ReportFormat::Csv => report.to_string(),
            ReportFormat::Json => {
                serde_json::to_string(report).unwrap_or_else(|_| report.to_string())
            }
            ReportFormat::Xml => format!(
                "<report><x>{}</x><y>{}</y><direction>{}</direction></report>",
                report.position.x, report.position.y, report.direction
            ),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = RobotError;

    /// Parses a format name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            "xml" => Ok(ReportFormat::Xml),
            other => Err(RobotError::Validation(format!(
                "Unknown report format: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, Position};

    fn report() -> Report {
        Report {
            position: Position::new(0, 1),
            direction: Direction::North,
        }
    }

    #[test]
    fn test_text_rendering() {
        assert_eq!(ReportFormat::Text.render(&report()), "0,1,NORTH");
    }

    #[test]
    fn test_json_rendering() {
        assert_eq!(
            ReportFormat::Json.render(&report()),
            r#"{"x":0,"y":1,"direction":"NORTH"}"#
        );
    }

    #[test]
    fn test_csv_rendering() {
        assert_eq!(ReportFormat::Csv.render(&report()), "0,1,NORTH");
    }

    #[test]
    fn test_xml_rendering() {
        assert_eq!(
            ReportFormat::Xml.render(&report()),
            "<report><x>0</x><y>1</y><direction>NORTH</direction></report>"
        );
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("text".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!(" csv ".parse::<ReportFormat>().unwrap(), ReportFormat::Csv);
        assert_eq!("xml".parse::<ReportFormat>().unwrap(), ReportFormat::Xml);
        assert!("yaml".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_default_format_is_text() {
        assert_eq!(ReportFormat::default(), ReportFormat::Text);
    }
}

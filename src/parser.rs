//! This module provides the parser for the robot command language, utilizing the `pest`
//! crate. It defines functions to turn a single input line into a [`Command`].

use crate::types::{Command, Direction, Position, RobotError};
use pest::{
    error::{Error, ErrorVariant},
    iterators::Pair,
    Parser as PestParser, Span,
};
use pest_derive::Parser as PestParser;

/// Derives a `PestParser` for the command grammar defined in `grammar.pest`.
#[derive(PestParser)]
#[grammar = "grammar.pest"]
pub struct CommandParser;

/// Parses a single input line into a command.
///
/// This is the only entry point for parsing. It trims the line, parses it
/// with the `CommandParser`, and extracts the matched command variant.
/// Keywords are matched case-insensitively and extra spaces between fields
/// are accepted.
///
/// # Arguments
///
/// * `line` - One line of input, without its trailing newline.
///
/// # Returns
///
/// * `Ok(Some(Command))` if the line is a well-formed command.
/// * `Ok(None)` if the line is empty after trimming.
/// * `Err(RobotError::Parse)` for anything else. A malformed line never
///   yields a partially-built command.
pub fn parse(line: &str) -> Result<Option<Command>, RobotError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let root = CommandParser::parse(Rule::line, line)
        .map_err(|e| RobotError::Parse(e.into()))?
        .next()
        .unwrap();

    // `command` is silent, so the matched alternative sits directly under `line`.
    let pair = root.into_inner().next().unwrap();
    let command = match pair.as_rule() {
        Rule::place => parse_place(pair)?,
        Rule::move_op => Command::Move,
        Rule::left_op => Command::Left,
        Rule::right_op => Command::Right,
        Rule::report_op => Command::Report,
        Rule::exit_op => Command::Exit,
        rule => unreachable!("unexpected rule {rule:?} under line"),
    };

    Ok(Some(command))
}

/// Parses the arguments of a `PLACE` command from a `Pair<Rule::place>`.
///
/// The grammar guarantees exactly two integers and one direction, so the
/// only failures left here are values the types cannot hold.
fn parse_place(pair: Pair<Rule>) -> Result<Command, RobotError> {
    let mut x: Option<i32> = None;
    let mut y: Option<i32> = None;
    let mut direction: Option<Direction> = None;

    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::integer => {
                let value = parse_coordinate(&p)?;
                if x.is_none() {
                    x = Some(value);
                } else {
                    y = Some(value);
                }
            }
            Rule::direction => direction = Some(parse_direction(&p)?),
            _ => {} // Skip the keyword token
        }
    }

    Ok(Command::Place {
        position: Position::new(x.unwrap(), y.unwrap()),
        direction: direction.unwrap(),
    })
}

/// Parses one coordinate from a `Pair<Rule::integer>`.
///
/// The grammar only admits digit runs with an optional sign, so the single
/// remaining failure is a value that does not fit in an `i32`. Whether the
/// coordinate is on the table is not decided here.
fn parse_coordinate(pair: &Pair<Rule>) -> Result<i32, RobotError> {
    pair.as_str().parse::<i32>().map_err(|_| {
        parse_error(
            &format!("Coordinate out of range: {}", pair.as_str()),
            pair.as_span(),
        )
    })
}

/// Parses a direction name from a `Pair<Rule::direction>`.
fn parse_direction(pair: &Pair<Rule>) -> Result<Direction, RobotError> {
    pair.as_str().parse::<Direction>().map_err(|_| {
        parse_error(
            &format!("Unsupported direction: {}", pair.as_str()),
            pair.as_span(),
        )
    })
}

/// Creates a `RobotError::Parse` from a message and a `Span`.
fn parse_error(msg: &str, span: Span) -> RobotError {
    RobotError::Parse(Box::new(Error::new_from_span(
        ErrorVariant::CustomError {
            message: msg.to_string(),
        },
        span,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_place() {
        let result = parse("PLACE 1,2,EAST");

        assert_eq!(
            result.unwrap(),
            Some(Command::Place {
                position: Position::new(1, 2),
                direction: Direction::East,
            })
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            parse("place 0,0,north").unwrap(),
            Some(Command::Place {
                position: Position::new(0, 0),
                direction: Direction::North,
            })
        );
        assert_eq!(parse("move").unwrap(), Some(Command::Move));
        assert_eq!(parse("Report").unwrap(), Some(Command::Report));
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        assert_eq!(
            parse("  PLACE 0 , 4 ,  SOUTH  ").unwrap(),
            Some(Command::Place {
                position: Position::new(0, 4),
                direction: Direction::South,
            })
        );
        assert_eq!(parse("\tMOVE ").unwrap(), Some(Command::Move));
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse("MOVE").unwrap(), Some(Command::Move));
        assert_eq!(parse("LEFT").unwrap(), Some(Command::Left));
        assert_eq!(parse("RIGHT").unwrap(), Some(Command::Right));
        assert_eq!(parse("REPORT").unwrap(), Some(Command::Report));
    }

    #[test]
    fn test_parse_exit_aliases() {
        assert_eq!(parse("EXIT").unwrap(), Some(Command::Exit));
        assert_eq!(parse("QUIT").unwrap(), Some(Command::Exit));
        assert_eq!(parse("BYE").unwrap(), Some(Command::Exit));
        assert_eq!(parse("quit").unwrap(), Some(Command::Exit));
    }

    #[test]
    fn test_parse_blank_lines_are_skipped() {
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("   ").unwrap(), None);
        assert_eq!(parse("\t").unwrap(), None);
    }

    #[test]
    fn test_parse_accepts_signed_coordinates() {
        // Range checking belongs to execution, not parsing.
        let result = parse("PLACE -1,+2,NORTH");

        assert_eq!(
            result.unwrap(),
            Some(Command::Place {
                position: Position::new(-1, 2),
                direction: Direction::North,
            })
        );
    }

    #[test]
    fn test_parse_rejects_missing_arguments() {
        assert!(parse("PLACE").is_err());
        assert!(parse("PLACE 1,2").is_err());
        assert!(parse("PLACE 1,,NORTH").is_err());
        assert!(parse("PLACE ,1,2,NORTH").is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_arguments() {
        assert!(parse("PLACE x,y,NORTH").is_err());
        assert!(parse("PLACE 1,2,UP").is_err());
        assert!(parse("PLACE 1,2,NORTHEAST").is_err());
        assert!(parse("PLACE 1 2 NORTH").is_err());
        assert!(parse("PLACE 1.5,2,NORTH").is_err());
    }

    #[test]
    fn test_parse_rejects_glued_keyword() {
        assert!(parse("PLACE1,2,NORTH").is_err());
        assert!(parse("MOVEMENT").is_err());
        assert!(parse("LEFTY").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_commands() {
        assert!(parse("JUMP").is_err());
        assert!(parse("PLACE_IT 1,2,NORTH").is_err());
        assert!(parse("hello world").is_err());
    }

    #[test]
    fn test_parse_rejects_trailing_garbage() {
        assert!(parse("MOVE 1").is_err());
        assert!(parse("REPORT now").is_err());
        assert!(parse("PLACE 1,2,NORTH extra").is_err());
    }

    #[test]
    fn test_parse_coordinate_out_of_range() {
        let result = parse("PLACE 99999999999,0,NORTH");

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(matches!(error, RobotError::Parse(_)));
        assert!(error.to_string().contains("Coordinate out of range"));
    }

    #[test]
    fn test_parse_error_is_parse_variant() {
        let error = parse("PLACE 1,2").unwrap_err();
        assert!(matches!(error, RobotError::Parse(_)));
    }
}

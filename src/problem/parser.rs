//! Problem file parser.
//!
//! # Format
//!
//! ```text
//! loadNumber pickup dropoff
//! 1 (-9.1,-48.8) (-116.2,-14.7)
//! 2 (22.3,-1.5) (51.1,3.8)
//! ```
//!
//! The first line is a header and is ignored. Each following line holds a
//! load id, a pickup point and a dropoff point separated by whitespace.
//! Points are `x,y` pairs; surrounding parentheses are optional. A blank line
//! ends the load list.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::models::{Load, Point};

/// How malformed records are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Malformed records and duplicate ids are errors.
    #[default]
    Strict,
    /// Unparsable coordinates read as `0.0`, records with too few fields or
    /// a point without two coordinates are skipped, and duplicate ids are
    /// kept (the later one wins when a solution is built). Each coercion is
    /// logged as a warning.
    Lenient,
}

/// Errors raised while reading a problem.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read problem file: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected `<id> <pickup> <dropoff>`, found {found} field(s)")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: invalid point `{token}`")]
    InvalidPoint { line: usize, token: String },

    #[error("line {line}: invalid coordinate `{token}`")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: duplicate load id `{id}`")]
    DuplicateId { line: usize, id: String },
}

/// Reads and parses a problem file.
pub fn load_problem_file(path: impl AsRef<Path>, mode: ParseMode) -> Result<Vec<Load>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_problem(&content, mode)
}

/// Parses the text of a problem file into loads, in file order.
///
/// # Examples
///
/// ```
/// use u_dispatch::problem::{parse_problem, ParseMode};
///
/// let text = "loadNumber pickup dropoff\n1 (0,0) (3,4)\n2 1.5,2 -3,4\n";
/// let loads = parse_problem(text, ParseMode::Strict).unwrap();
/// assert_eq!(loads.len(), 2);
/// assert_eq!(loads[1].pickup().x, 1.5);
///
/// assert!(parse_problem("header\n1 (0,0) (x,4)\n", ParseMode::Strict).is_err());
/// let lenient = parse_problem("header\n1 (0,0) (x,4)\n", ParseMode::Lenient).unwrap();
/// assert_eq!(lenient[0].dropoff().x, 0.0);
/// ```
pub fn parse_problem(text: &str, mode: ParseMode) -> Result<Vec<Load>, ParseError> {
    let mut loads = Vec::new();
    let mut ids: HashSet<&str> = HashSet::new();

    for (idx, raw) in text.lines().enumerate().skip(1) {
        let line = idx + 1;
        let record = raw.trim();
        if record.is_empty() {
            break;
        }

        let fields: Vec<&str> = record.split_whitespace().collect();
        let well_formed = match mode {
            ParseMode::Strict => fields.len() == 3,
            ParseMode::Lenient => fields.len() >= 3,
        };
        if !well_formed {
            match mode {
                ParseMode::Strict => {
                    return Err(ParseError::FieldCount {
                        line,
                        found: fields.len(),
                    })
                }
                ParseMode::Lenient => {
                    warn!(line, record, "skipping record with too few fields");
                    continue;
                }
            }
        }

        let id = fields[0];
        let (Some(pickup), Some(dropoff)) = (
            parse_point(fields[1], line, mode)?,
            parse_point(fields[2], line, mode)?,
        ) else {
            continue;
        };

        if !ids.insert(id) {
            match mode {
                ParseMode::Strict => {
                    return Err(ParseError::DuplicateId {
                        line,
                        id: id.to_string(),
                    })
                }
                ParseMode::Lenient => warn!(line, id, "duplicate load id"),
            }
        }

        loads.push(Load::new(id, pickup, dropoff));
    }

    Ok(loads)
}

/// Parses an `(x,y)` token.
///
/// Returns `Ok(None)` when a lenient parse decides to skip the record.
fn parse_point(token: &str, line: usize, mode: ParseMode) -> Result<Option<Point>, ParseError> {
    let inner = token.trim_start_matches('(').trim_end_matches(')');
    let parts: Vec<&str> = inner.split(',').collect();

    if parts.len() != 2 {
        return match mode {
            ParseMode::Strict => Err(ParseError::InvalidPoint {
                line,
                token: token.to_string(),
            }),
            ParseMode::Lenient if parts.len() > 2 => {
                warn!(line, token, "ignoring extra coordinates");
                Ok(Some(Point::new(
                    parse_coordinate(parts[0], line, mode)?,
                    parse_coordinate(parts[1], line, mode)?,
                )))
            }
            ParseMode::Lenient => {
                warn!(line, token, "skipping record with incomplete point");
                Ok(None)
            }
        };
    }

    Ok(Some(Point::new(
        parse_coordinate(parts[0], line, mode)?,
        parse_coordinate(parts[1], line, mode)?,
    )))
}

fn parse_coordinate(token: &str, line: usize, mode: ParseMode) -> Result<f64, ParseError> {
    match token.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => match mode {
            ParseMode::Strict => Err(ParseError::InvalidNumber {
                line,
                token: token.to_string(),
            }),
            ParseMode::Lenient => {
                warn!(line, token, "unparsable coordinate read as 0.0");
                Ok(0.0)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "loadNumber pickup dropoff
1 (-50.1,80.0) (90.1,12.2)
2 (-24.5,-19.2) (98.5,1.8)
3 (0.3,8.9) (40.9,55.0)
";

    #[test]
    fn test_parse_sample() {
        let loads = parse_problem(SAMPLE, ParseMode::Strict).expect("valid");
        assert_eq!(loads.len(), 3);
        assert_eq!(loads[0].id(), "1");
        assert_eq!(loads[0].pickup(), Point::new(-50.1, 80.0));
        assert_eq!(loads[2].dropoff(), Point::new(40.9, 55.0));
    }

    #[test]
    fn test_parse_header_only() {
        assert!(parse_problem("loadNumber pickup dropoff\n", ParseMode::Strict)
            .expect("valid")
            .is_empty());
        assert!(parse_problem("", ParseMode::Strict).expect("valid").is_empty());
    }

    #[test]
    fn test_parse_blank_line_terminates() {
        let text = "h\n1 (0,0) (1,1)\n\n2 (0,0) (1,1)\n";
        let loads = parse_problem(text, ParseMode::Strict).expect("valid");
        assert_eq!(loads.len(), 1);
    }

    #[test]
    fn test_parse_windows_line_endings() {
        let text = "h\r\n1 (0,0) (1,1)\r\n2 (2,2) (3,3)\r\n";
        let loads = parse_problem(text, ParseMode::Strict).expect("valid");
        assert_eq!(loads.len(), 2);
    }

    #[test]
    fn test_parse_without_parentheses() {
        let loads = parse_problem("h\nx 1,2 3,4\n", ParseMode::Strict).expect("valid");
        assert_eq!(loads[0].pickup(), Point::new(1.0, 2.0));
        assert_eq!(loads[0].dropoff(), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_parse_strict_field_count() {
        let err = parse_problem("h\n1 (0,0)\n", ParseMode::Strict).unwrap_err();
        assert!(matches!(err, ParseError::FieldCount { line: 2, found: 2 }));
    }

    #[test]
    fn test_parse_strict_invalid_point() {
        let err = parse_problem("h\n1 (0,0) (5)\n", ParseMode::Strict).unwrap_err();
        assert!(matches!(err, ParseError::InvalidPoint { line: 2, .. }));
    }

    #[test]
    fn test_parse_strict_invalid_number() {
        let err = parse_problem("h\n1 (0,0) (a,1)\n", ParseMode::Strict).unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { line: 2, .. }));
        let err = parse_problem("h\n1 (0,0) (inf,1)\n", ParseMode::Strict).unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { .. }));
    }

    #[test]
    fn test_parse_strict_duplicate() {
        let err = parse_problem("h\n1 (0,0) (1,1)\n1 (2,2) (3,3)\n", ParseMode::Strict).unwrap_err();
        assert!(matches!(err, ParseError::DuplicateId { line: 3, .. }));
        assert_eq!(err.to_string(), "line 3: duplicate load id `1`");
    }

    #[test]
    fn test_parse_lenient_coerces() {
        let text = "h\n1 (a,2) (3,b)\n2 (0,0)\n3 (5) (1,1)\n4 (1,1) (2,2)\n4 (3,3) (4,4)\n";
        let loads = parse_problem(text, ParseMode::Lenient).expect("lenient never fails");
        let ids: Vec<&str> = loads.iter().map(|l| l.id()).collect();
        assert_eq!(ids, vec!["1", "4", "4"]);
        assert_eq!(loads[0].pickup(), Point::new(0.0, 2.0));
        assert_eq!(loads[0].dropoff(), Point::new(3.0, 0.0));
    }

    #[test]
    fn test_load_problem_file_missing() {
        let err = load_problem_file("/nonexistent/problem.txt", ParseMode::Strict).unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }
}

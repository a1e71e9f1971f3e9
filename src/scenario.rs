//! Line-based scenario scripts.
//!
//! A scenario is a plain text file with one request per line:
//!
//! ```text
//! # size entrance plate start
//! entry S A P01 2022-08-31T01:00
//! entry L B P02 2022-08-31T01:30
//! # plate end
//! exit P01 2022-08-31T06:00
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. Keywords are
//! case-insensitive.

use thiserror::Error;

use crate::domain::entities::{Entrance, SizeClass};
use crate::domain::{EntryReceipt, EntryRequest, ExitReceipt, ExitRequest, Facility, ParkingError};
use crate::utils::timestamp::parse_timestamp;

/// A scenario line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct ScenarioError {
    pub line: usize,
    pub message: String,
}

impl ScenarioError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Entry(EntryRequest),
    Exit(ExitRequest),
}

/// A parsed command with its 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub line: usize,
    pub command: Command,
}

/// Result of replaying one step.
#[derive(Debug)]
pub enum Outcome {
    Parked(EntryReceipt),
    Left(ExitReceipt),
    Rejected(ParkingError),
}

impl Outcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }
}

/// Parses a whole scenario, stopping at the first malformed line.
///
/// # Errors
///
/// Returns [`ScenarioError`] with the offending line number when a line has
/// an unknown keyword, the wrong number of fields, or a value that does not
/// parse.
pub fn parse(source: &str) -> Result<Vec<Step>, ScenarioError> {
    source
        .lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let text = raw.trim();
            if text.is_empty() || text.starts_with('#') {
                None
            } else {
                Some(parse_line(idx + 1, text))
            }
        })
        .collect()
}

fn parse_line(line: usize, text: &str) -> Result<Step, ScenarioError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let keyword = fields[0].to_ascii_lowercase();

    let command = match (keyword.as_str(), &fields[1..]) {
        ("entry", [size, entrance, plate, start]) => Command::Entry(EntryRequest {
            car_size: size
                .parse::<SizeClass>()
                .map_err(|e| ScenarioError::new(line, e.to_string()))?,
            entrance: entrance
                .parse::<Entrance>()
                .map_err(|e| ScenarioError::new(line, e.to_string()))?,
            plate_number: plate.to_string(),
            start: parse_timestamp(start).map_err(|e| ScenarioError::new(line, e.to_string()))?,
        }),
        ("exit", [plate, end]) => Command::Exit(ExitRequest {
            plate_number: plate.to_string(),
            end: parse_timestamp(end).map_err(|e| ScenarioError::new(line, e.to_string()))?,
        }),
        ("entry", _) => {
            return Err(ScenarioError::new(
                line,
                "expected: entry <SIZE> <ENTRANCE> <PLATE> <START>",
            ));
        }
        ("exit", _) => return Err(ScenarioError::new(line, "expected: exit <PLATE> <END>")),
        (other, _) => {
            return Err(ScenarioError::new(
                line,
                format!("unknown command '{other}', expected 'entry' or 'exit'"),
            ));
        }
    };

    Ok(Step { line, command })
}

/// Applies one step to the facility.
pub fn apply(facility: &mut Facility, step: &Step) -> Outcome {
    let result = match &step.command {
        Command::Entry(request) => facility.submit_entry(request.clone()).map(Outcome::Parked),
        Command::Exit(request) => facility.submit_exit(request.clone()).map(Outcome::Left),
    };

    result.unwrap_or_else(Outcome::Rejected)
}

/// Replays every step in order. Rejected steps leave the facility unchanged
/// and do not stop the run.
pub fn replay(facility: &mut Facility, steps: &[Step]) -> Vec<Outcome> {
    steps.iter().map(|step| apply(facility, step)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = "\
# morning
entry S A P01 2022-08-31T01:00

entry l b P02 2022-08-31T01:30
EXIT P01 2022-08-31T06:00
exit P09 2022-08-31T06:00
";

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let steps = parse(SCRIPT).unwrap();

        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].line, 2);
        assert_eq!(steps[1].line, 4);

        match &steps[1].command {
            Command::Entry(request) => {
                assert_eq!(request.car_size, SizeClass::Large);
                assert_eq!(request.entrance, Entrance::B);
            }
            other => panic!("expected entry, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_reports_line_numbers() {
        let err = parse("entry S A P01 2022-08-31T01:00\nentry S A\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.to_string().starts_with("line 2:"));

        let err = parse("\n\npark S A P01 2022-08-31T01:00").unwrap_err();
        assert_eq!(err.line, 3);
        assert!(err.message.contains("unknown command 'park'"));

        let err = parse("entry XL A P01 2022-08-31T01:00").unwrap_err();
        assert!(err.message.contains("car size"));

        let err = parse("exit P01 noon").unwrap_err();
        assert!(err.message.contains("timestamp"));
    }

    #[test]
    fn test_replay_continues_after_rejection() {
        let steps = parse(SCRIPT).unwrap();
        let mut facility = Facility::default();

        let outcomes = replay(&mut facility, &steps);

        assert!(matches!(outcomes[0], Outcome::Parked(_)));
        assert!(matches!(outcomes[1], Outcome::Parked(_)));
        match &outcomes[2] {
            Outcome::Left(receipt) => assert_eq!(receipt.transaction.payment, 80),
            other => panic!("expected exit, got {other:?}"),
        }
        assert!(matches!(
            outcomes[3],
            Outcome::Rejected(ParkingError::VehicleNotFound)
        ));

        assert_eq!(facility.occupancy().vacant, 1);
        assert_eq!(facility.transactions().len(), 2);
    }
}

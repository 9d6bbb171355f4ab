//! Parsing of player input lines.

use derive_more::{Display, Error};
use qubic_core::Position;
use tracing::instrument;

/// A request typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current player's mark.
    Place(Position),
    /// Take back the last history entry.
    Undo,
    /// Pass the turn.
    Skip,
    /// List open threats.
    Threats,
    /// List the move history.
    History,
    /// Show the board after `k` real moves, or step through the whole game.
    Replay(Option<usize>),
    /// Start a new game.
    Reset,
    /// Show the command list.
    Help,
    /// Leave the session.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    /// Blank line.
    #[display("Empty input")]
    Empty,
    /// Unrecognised word.
    #[display("Unknown command '{_0}' (type 'help')")]
    Unknown(#[error(not(source))] String),
    /// A coordinate that is not a number in 0..4.
    #[display("Coordinates must be three numbers in 0..4, got '{_0}'")]
    BadCoordinates(#[error(not(source))] String),
    /// `replay` followed by something other than a count.
    #[display("Replay takes a move count, got '{_0}'")]
    BadReplayCount(#[error(not(source))] String),
}

/// Commands and a one-line description, for `help`.
pub const HELP: &[(&str, &str)] = &[
    ("x y z", "place a mark (each 0-3; commas also accepted)"),
    ("undo", "take back the last move or skip"),
    ("skip", "pass the turn"),
    ("threats", "list lines one mark from completion"),
    ("history", "list recorded moves"),
    ("replay [k]", "show the board after k moves, or step through all"),
    ("reset", "start a new game"),
    ("help", "show this list"),
    ("quit", "leave"),
];

/// Parses one input line.
#[instrument]
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let input = input.trim();
    let mut words = input.split_whitespace();
    let Some(head) = words.next() else {
        return Err(ParseError::Empty);
    };

    match head.to_lowercase().as_str() {
        "undo" | "u" => Ok(Command::Undo),
        "skip" | "s" => Ok(Command::Skip),
        "threats" | "t" => Ok(Command::Threats),
        "history" | "h" => Ok(Command::History),
        "reset" => Ok(Command::Reset),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        "replay" | "r" => match words.next() {
            None => Ok(Command::Replay(None)),
            Some(n) => n
                .parse()
                .map(|k| Command::Replay(Some(k)))
                .map_err(|_| ParseError::BadReplayCount(n.to_string())),
        },
        _ if head.starts_with(|c: char| c.is_ascii_digit()) => parse_position(input),
        other => Err(ParseError::Unknown(other.to_string())),
    }
}

fn parse_position(input: &str) -> Result<Command, ParseError> {
    let bad = || ParseError::BadCoordinates(input.to_string());
    let coords: Vec<u8> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u8>().map_err(|_| bad()))
        .collect::<Result<_, _>>()?;
    let &[x, y, z] = coords.as_slice() else {
        return Err(bad());
    };
    Position::new(x, y, z).map(Command::Place).map_err(|_| bad())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position_forms() {
        let want = Command::Place(Position::new(1, 2, 3).unwrap());
        assert_eq!(parse_command("1 2 3"), Ok(want));
        assert_eq!(parse_command(" 1,2,3 "), Ok(want));
        assert_eq!(parse_command("1, 2, 3"), Ok(want));
    }

    #[test]
    fn test_parse_rejects_bad_coordinates() {
        assert!(matches!(parse_command("1 2 4"), Err(ParseError::BadCoordinates(_))));
        assert!(matches!(parse_command("1 2"), Err(ParseError::BadCoordinates(_))));
        assert!(matches!(parse_command("1 2 x"), Err(ParseError::BadCoordinates(_))));
    }

    #[test]
    fn test_parse_words() {
        assert_eq!(parse_command("UNDO"), Ok(Command::Undo));
        assert_eq!(parse_command("replay"), Ok(Command::Replay(None)));
        assert_eq!(parse_command("replay 5"), Ok(Command::Replay(Some(5))));
        assert!(matches!(parse_command("replay x"), Err(ParseError::BadReplayCount(_))));
        assert_eq!(parse_command(""), Err(ParseError::Empty));
        assert!(matches!(parse_command("fly"), Err(ParseError::Unknown(_))));
    }
}

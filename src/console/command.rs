use std::fmt;

use crate::board::{Square, SquareError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select(Square),
    Move(Square, Square),
    Moves(Square),
    Board,
    History,
    Captured,
    Status,
    NewGame,
    Help,
    Quit,
}

/// Error type for console command parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// First word is not a known command or square
    Unknown { input: String },
    /// Command given too few arguments
    MissingArgument { command: &'static str },
    /// Argument is not a square
    BadSquare { argument: String, error: SquareError },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown { input } => {
                write!(f, "Unknown command '{input}' (type 'help')")
            }
            CommandError::MissingArgument { command } => {
                write!(f, "'{command}' needs a square")
            }
            CommandError::BadSquare { argument, error } => {
                write!(f, "Bad square '{argument}': {error}")
            }
        }
    }
}

impl std::error::Error for CommandError {}

fn square_arg(parts: &[&str], index: usize, command: &'static str) -> Result<Square, CommandError> {
    let argument = parts
        .get(index)
        .ok_or(CommandError::MissingArgument { command })?;
    argument.parse().map_err(|error| CommandError::BadSquare {
        argument: (*argument).to_string(),
        error,
    })
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    let cmd = match parts[0].to_ascii_lowercase().as_str() {
        "select" | "s" => Command::Select(square_arg(&parts, 1, "select")?),
        "move" | "m" => Command::Move(square_arg(&parts, 1, "move")?, square_arg(&parts, 2, "move")?),
        "moves" => Command::Moves(square_arg(&parts, 1, "moves")?),
        "board" | "b" => Command::Board,
        "history" => Command::History,
        "captured" => Command::Captured,
        "status" => Command::Status,
        "new" => Command::NewGame,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        word => match word.parse::<Square>() {
            Ok(square) => Command::Select(square),
            Err(_) => {
                return Err(CommandError::Unknown {
                    input: trimmed.to_string(),
                })
            }
        },
    };

    Ok(Some(cmd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("  "), Ok(None));
        assert_eq!(parse_command("e2"), Ok(Some(Command::Select(Square(6, 4)))));
        assert_eq!(
            parse_command("select E7"),
            Ok(Some(Command::Select(Square(1, 4))))
        );
        assert_eq!(
            parse_command("move e2 e4"),
            Ok(Some(Command::Move(Square(6, 4), Square(4, 4))))
        );
        assert_eq!(parse_command("moves g1"), Ok(Some(Command::Moves(Square(7, 6)))));
        assert_eq!(parse_command("new"), Ok(Some(Command::NewGame)));
        assert_eq!(parse_command("QUIT"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_command("castle"),
            Err(CommandError::Unknown {
                input: "castle".to_string()
            })
        );
        assert_eq!(
            parse_command("move e2"),
            Err(CommandError::MissingArgument { command: "move" })
        );
        assert!(matches!(
            parse_command("select z9"),
            Err(CommandError::BadSquare { .. })
        ));
    }
}

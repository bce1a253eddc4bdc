//! Parsing of console commands

use crate::Move;

/// A line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Move),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("expected row,col but got {0:?}")]
    Malformed(String),
}

/// Parse `row,col` or `exit`/`quit`
///
/// Numbers are not range-checked here; the game rejects cells off the board.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let input = line.trim().to_lowercase();
    if input == "exit" || input == "quit" {
        return Ok(Command::Quit);
    }

    let malformed = || InputError::Malformed(input.clone());
    let (row, col) = input.split_once(',').ok_or_else(malformed)?;
    let row = row.trim().parse().map_err(|_| malformed())?;
    let col = col.trim().parse().map_err(|_| malformed())?;
    Ok(Command::Move(Move::new(row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_command("4,5"), Ok(Command::Move(Move::new(4, 5))));
        assert_eq!(parse_command("  12 , 3 \n"), Ok(Command::Move(Move::new(12, 3))));
        assert_eq!(parse_command("-1,1"), Ok(Command::Move(Move::new(-1, 1))));
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(parse_command("exit"), Ok(Command::Quit));
        assert_eq!(parse_command("  EXIT\n"), Ok(Command::Quit));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_malformed() {
        for line in ["", "4", "4,", ",5", "a,b", "4,5,6", "4 5", "99999999999,1"] {
            assert!(
                matches!(parse_command(line), Err(InputError::Malformed(_))),
                "{line:?} should be rejected"
            );
        }
    }
}

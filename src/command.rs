//! Start-menu command validation.

use alloc::vec::Vec;
use core::fmt;

use crate::player::PlayerKind;

const FUNCTIONAL_COMMANDS: [&str; 2] = ["start", "exit"];

/// A validated menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `start <x> <o>`: play one game.
    Start { x: PlayerKind, o: PlayerKind },
    /// `exit`: leave the menu.
    Exit,
}

/// Why a command line was refused. Both variants print the same generic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Nothing on the line was a known word.
    InvalidCommandFormat,
    /// Known words in the wrong number or order.
    BadParameters,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Bad parameters!")
    }
}

impl core::error::Error for CommandError {}

fn is_supported(token: &str) -> bool {
    FUNCTIONAL_COMMANDS.contains(&token) || PlayerKind::from_name(token).is_some()
}

impl Command {
    /// Validate a raw line. The line is split on single spaces and unknown words
    /// are dropped before the remaining words are counted, so `start easy foo`
    /// fails for having two words rather than for containing `foo`.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let tokens: Vec<&str> = line.split(' ').filter(|t| is_supported(t)).collect();

        match tokens.as_slice() {
            [] => Err(CommandError::InvalidCommandFormat),
            ["exit"] => Ok(Command::Exit),
            ["start", x, o] => match (PlayerKind::from_name(x), PlayerKind::from_name(o)) {
                (Some(x), Some(o)) => Ok(Command::Start { x, o }),
                _ => Err(CommandError::BadParameters),
            },
            _ => Err(CommandError::BadParameters),
        }
    }
}

//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, Command, Coordinate, GameLoop, GameState, HeuristicBot, MoveError, OptimalBot, Player,
    PlayerKind, RandomBot, SilentReporter, Symbol, TurnReporter,
};

#[cfg(feature = "std")]
pub use crate::{create_player, ConsoleReporter, HumanPlayer, Menu, MenuOutcome, SharedInput};

use alloc::format;
use alloc::string::String;

use crate::core::{ai, Board, Coordinate, MoveError, Symbol};
use rand::rngs::SmallRng;

use super::Player;

/// Apply a bot's chosen cell. A refusal here means the bot picked badly, which is
/// reported as an internal failure rather than a user error.
fn play(board: &Board, choice: Option<&Coordinate>, symbol: Symbol) -> Result<Board, MoveError> {
    let coord = choice.ok_or(MoveError::NoMovesAvailable)?;
    log::debug!("bot {} picks {}", symbol, coord);
    board
        .apply_move(coord, symbol)
        .map_err(|_| MoveError::BotMoveRejected)
}

fn level_message(level: &str) -> String {
    format!("Making move level \"{}\"", level)
}

/// "easy": uniformly random empty cell.
pub struct RandomBot {
    symbol: Symbol,
}

impl RandomBot {
    pub fn new(symbol: Symbol) -> Self {
        Self { symbol }
    }
}

impl Player for RandomBot {
    fn symbol(&self) -> Symbol {
        self.symbol
    }

    fn move_message(&self) -> String {
        level_message("easy")
    }

    fn decide(&mut self, rng: &mut SmallRng, board: &Board) -> Result<Board, MoveError> {
        play(board, ai::random_move(board, rng), self.symbol)
    }
}

/// "medium": takes a winning cell, else blocks, else plays randomly.
pub struct HeuristicBot {
    symbol: Symbol,
}

impl HeuristicBot {
    pub fn new(symbol: Symbol) -> Self {
        Self { symbol }
    }
}

impl Player for HeuristicBot {
    fn symbol(&self) -> Symbol {
        self.symbol
    }

    fn move_message(&self) -> String {
        level_message("medium")
    }

    fn decide(&mut self, rng: &mut SmallRng, board: &Board) -> Result<Board, MoveError> {
        play(board, ai::heuristic_move(board, self.symbol, rng), self.symbol)
    }
}

/// "hard": full game-tree search. Never loses.
pub struct OptimalBot {
    symbol: Symbol,
}

impl OptimalBot {
    pub fn new(symbol: Symbol) -> Self {
        Self { symbol }
    }
}

impl Player for OptimalBot {
    fn symbol(&self) -> Symbol {
        self.symbol
    }

    fn move_message(&self) -> String {
        level_message("hard")
    }

    fn decide(&mut self, rng: &mut SmallRng, board: &Board) -> Result<Board, MoveError> {
        play(board, ai::optimal_move(board, self.symbol, rng), self.symbol)
    }
}

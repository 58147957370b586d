use alloc::boxed::Box;

use crate::{
    core::{
        board::Board,
        common::{GameState, MoveError, Symbol},
    },
    player::Player,
};
use rand::rngs::SmallRng;

/// Observer for turn events so the loop itself never touches stdout.
pub trait TurnReporter {
    /// Called before `player` is asked for a move.
    fn turn_started(&mut self, _player: &dyn Player) {}

    /// Called after a move was accepted.
    fn move_applied(&mut self, _board: &Board, _move_count: usize) {}

    /// Called when a recoverable error sends the player back for another try.
    fn move_rejected(&mut self, _error: &MoveError) {}
}

/// [`TurnReporter`] that reports nothing.
pub struct SilentReporter;

impl TurnReporter for SilentReporter {}

/// Alternates two players on one board until the game ends.
pub struct GameLoop {
    x_player: Box<dyn Player>,
    o_player: Box<dyn Player>,
    board: Board,
    move_count: usize,
}

impl GameLoop {
    /// New game on the empty board. X moves first.
    pub fn new(x_player: Box<dyn Player>, o_player: Box<dyn Player>) -> Self {
        Self::from_board(Board::empty(), x_player, o_player)
    }

    /// Resume from `board`; the side to move follows from the symbol counts.
    pub fn from_board(board: Board, x_player: Box<dyn Player>, o_player: Box<dyn Player>) -> Self {
        Self {
            x_player,
            o_player,
            board,
            move_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves accepted so far by this loop.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Play until the board is terminal and return its state.
    ///
    /// Recoverable errors (bad input, occupied cell) are reported and the same
    /// player moves again. Any other error ends the game and is returned.
    pub fn run<T: TurnReporter + ?Sized>(
        &mut self,
        rng: &mut SmallRng,
        reporter: &mut T,
    ) -> Result<GameState, MoveError> {
        log::info!("game started from {:?}", self.board.to_cells());
        loop {
            let state = self.board.state();
            if state.is_terminal() {
                log::info!("game over after {} moves: {}", self.move_count, state);
                return Ok(state);
            }
            if state == GameState::Unknown {
                log::error!("board {:?} could not be classified", self.board.to_cells());
                return Ok(state);
            }

            let symbol = self.board.next_symbol();
            let player = match symbol {
                Symbol::X => self.x_player.as_mut(),
                Symbol::O => self.o_player.as_mut(),
            };
            reporter.turn_started(player);

            match player.decide(rng, &self.board) {
                Ok(next) => {
                    self.board = next;
                    self.move_count += 1;
                    log::debug!("{} moved: {:?}", symbol, self.board.to_cells());
                    reporter.move_applied(&self.board, self.move_count);
                }
                Err(e) if e.is_recoverable() => {
                    log::warn!("{} move rejected: {}", symbol, e);
                    reporter.move_rejected(&e);
                }
                Err(e) => {
                    log::error!("{} could not move: {}", symbol, e);
                    return Err(e);
                }
            }
        }
    }
}

#![cfg(feature = "std")]

use std::io::{self, Write};

use crate::{
    core::{Board, GameState, MoveError, TurnReporter},
    player::Player,
};

/// Writes the game as it happens: turn banners, boards and rejected moves.
///
/// The [`TurnReporter`] hooks cannot fail, so the first write error is kept
/// and handed back by [`ConsoleReporter::take_error`] once the game returns.
pub struct ConsoleReporter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Print the board a game starts from.
    pub fn show_board(&mut self, board: &Board) {
        let result = writeln!(self.out, "{}", board);
        self.record(result);
    }

    /// Print the final state name.
    pub fn show_result(&mut self, state: GameState) {
        let result = writeln!(self.out, "{}", state).and_then(|_| self.out.flush());
        self.record(result);
    }

    /// The first write error seen since the last call, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            if self.error.is_none() {
                log::warn!("console output failed: {}", e);
                self.error = Some(e);
            }
        }
    }
}

impl<W: Write> TurnReporter for ConsoleReporter<W> {
    fn turn_started(&mut self, player: &dyn Player) {
        let result = writeln!(self.out, "{}", player.move_message()).and_then(|_| self.out.flush());
        self.record(result);
    }

    fn move_applied(&mut self, board: &Board, _move_count: usize) {
        let result = writeln!(self.out, "{}", board);
        self.record(result);
    }

    fn move_rejected(&mut self, error: &MoveError) {
        let result = writeln!(self.out, "{}", error);
        self.record(result);
    }
}

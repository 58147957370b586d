#![cfg(feature = "std")]

use std::cell::RefCell;
use std::io::{self, BufRead};
use std::rc::Rc;
use std::string::String;

use crate::core::{Board, MoveError, Symbol};
use rand::rngs::SmallRng;

use super::Player;

/// Where typed lines come from: stdin in the binary, a script in tests.
pub trait LineSource {
    /// Next line without its line ending, or `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// One input source shared by the menu and every human player in a game.
pub type SharedInput = Rc<RefCell<dyn LineSource>>;

fn read_trimmed(buf: String, read: usize) -> Option<String> {
    if read == 0 {
        return None;
    }
    Some(buf.trim_end_matches(['\r', '\n']).to_string())
}

impl LineSource for io::Stdin {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        let read = self.read_line(&mut buf)?;
        Ok(read_trimmed(buf, read))
    }
}

impl<T: AsRef<[u8]>> LineSource for io::Cursor<T> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        let read = self.read_line(&mut buf)?;
        Ok(read_trimmed(buf, read))
    }
}

/// Shared stdin, ready to hand to the menu and to human players.
pub fn stdin_input() -> SharedInput {
    Rc::new(RefCell::new(io::stdin()))
}

/// Shared scripted input, one move or command per line.
pub fn scripted_input(script: &str) -> SharedInput {
    Rc::new(RefCell::new(io::Cursor::new(script.as_bytes().to_vec())))
}

/// A person typing `column row` coordinates.
pub struct HumanPlayer {
    symbol: Symbol,
    input: SharedInput,
}

impl HumanPlayer {
    pub fn new(symbol: Symbol, input: SharedInput) -> Self {
        Self { symbol, input }
    }
}

impl Player for HumanPlayer {
    fn symbol(&self) -> Symbol {
        self.symbol
    }

    fn move_message(&self) -> String {
        "Enter the coordinates: ".to_string()
    }

    fn decide(&mut self, _rng: &mut SmallRng, board: &Board) -> Result<Board, MoveError> {
        let line = match self.input.borrow_mut().next_line() {
            Ok(Some(line)) => line,
            Ok(None) => return Err(MoveError::InputClosed),
            Err(e) => {
                log::error!("reading move for {}: {}", self.symbol, e);
                return Err(MoveError::InputClosed);
            }
        };
        board.apply_input(line.trim(), self.symbol)
    }
}

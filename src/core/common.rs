//! Common types for tic-tac-toe: cell contents, symbols, game states and errors.

use core::fmt;

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// Parse the textual form used by `Board::from_cells`.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            ' ' => Some(Cell::Empty),
            'X' => Some(Cell::X),
            'O' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A mark a player puts on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Symbol::X => Cell::X,
            Symbol::O => Cell::O,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::X => f.write_str("X"),
            Symbol::O => f.write_str("O"),
        }
    }
}

/// Which symbols complete a line. `Both` can only come from a corrupt board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    None,
    X,
    O,
    Both,
}

impl Winner {
    /// Whether `symbol` satisfies the win predicate, counting a double win for both.
    pub fn includes(self, symbol: Symbol) -> bool {
        matches!(
            (self, symbol),
            (Winner::Both, _) | (Winner::X, Symbol::X) | (Winner::O, Symbol::O)
        )
    }
}

/// Classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    InProgress,
    Draw,
    XWins,
    OWins,
    /// Symbol counts or lines that legal alternating play cannot produce.
    Impossible,
    /// Fallback of the classifier. Seeing it means a case was missed.
    Unknown,
}

impl GameState {
    /// Draw, a win, or an impossible board all end the game.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameState::Draw | GameState::XWins | GameState::OWins | GameState::Impossible
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            GameState::InProgress => "Game not finished",
            GameState::Draw => "Draw",
            GameState::XWins => "X wins",
            GameState::OWins => "O wins",
            GameState::Impossible => "Impossible",
            GameState::Unknown => "Unknown",
        }
    }

    /// The state in which `symbol` has won.
    pub fn win_for(symbol: Symbol) -> Self {
        match symbol {
            Symbol::X => GameState::XWins,
            Symbol::O => GameState::OWins,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors building a board from raw cell text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Cell text did not have exactly nine characters.
    InvalidLength(usize),
    /// A character other than ' ', 'X' or 'O'.
    InvalidSymbol(char),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidLength(len) => {
                write!(f, "Board needs exactly 9 cells, got {}", len)
            }
            BoardError::InvalidSymbol(ch) => write!(f, "Unsupported cell symbol {:?}", ch),
        }
    }
}

impl core::error::Error for BoardError {}

/// Errors produced while making a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Input was not two integers.
    InvalidCoordinate,
    /// Integers outside `1..=3`.
    OutOfRange,
    /// Target cell already holds a symbol.
    CellOccupied,
    /// A bot was asked to move on a full board.
    NoMovesAvailable,
    /// A bot picked a move the board refused.
    BotMoveRejected,
    /// The human player's input source is exhausted.
    InputClosed,
}

impl MoveError {
    /// Recoverable errors re-prompt the same player; the rest end the game.
    pub fn is_recoverable(self) -> bool {
        matches!(
            self,
            MoveError::InvalidCoordinate | MoveError::OutOfRange | MoveError::CellOccupied
        )
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidCoordinate => write!(f, "You should enter numbers!"),
            MoveError::OutOfRange => write!(f, "Coordinates should be from 1 to 3!"),
            MoveError::CellOccupied => write!(f, "This cell is occupied! Choose another one!"),
            MoveError::NoMovesAvailable => write!(f, "No moves left on the board"),
            MoveError::BotMoveRejected => write!(f, "Something went wrong with bot player"),
            MoveError::InputClosed => write!(f, "Input closed before a move was entered"),
        }
    }
}

impl core::error::Error for MoveError {}

//! Immutable board snapshot with derived moves, winner and state.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::core::common::{BoardError, Cell, GameState, MoveError, Symbol, Winner};
use crate::core::config::{GRID_SIZE, LINES, NUM_CELLS};
use crate::core::coordinate::Coordinate;

/// A 3x3 grid. Applying a move returns a new board; a board never changes after
/// construction, so everything derived from the cells is computed once up front.
#[derive(Clone)]
pub struct Board {
    cells: [Cell; NUM_CELLS],
    possible_moves: Vec<Coordinate>,
    winner: Winner,
    state: GameState,
}

impl Board {
    /// The board every game starts from.
    pub fn empty() -> Self {
        Self::from_array([Cell::Empty; NUM_CELLS])
    }

    /// Build a board from nine characters over `' '`, `'X'` and `'O'`, read row by
    /// row from the top-left.
    pub fn from_cells(text: &str) -> Result<Self, BoardError> {
        let len = text.chars().count();
        if len != NUM_CELLS {
            return Err(BoardError::InvalidLength(len));
        }
        let mut cells = [Cell::Empty; NUM_CELLS];
        for (slot, ch) in cells.iter_mut().zip(text.chars()) {
            *slot = Cell::from_char(ch).ok_or(BoardError::InvalidSymbol(ch))?;
        }
        Ok(Self::from_array(cells))
    }

    pub(crate) fn from_array(cells: [Cell; NUM_CELLS]) -> Self {
        let possible_moves = (0..NUM_CELLS)
            .filter(|&i| cells[i].is_empty())
            .map(Coordinate::from_index)
            .collect();
        let winner = match (has_line(&cells, Symbol::X), has_line(&cells, Symbol::O)) {
            (true, true) => Winner::Both,
            (true, false) => Winner::X,
            (false, true) => Winner::O,
            (false, false) => Winner::None,
        };
        let mut board = Board {
            cells,
            possible_moves,
            winner,
            state: GameState::Unknown,
        };
        board.state = board.classify();
        board
    }

    /// Raw cell contents in flat index order.
    pub fn cells(&self) -> &[Cell; NUM_CELLS] {
        &self.cells
    }

    /// Coordinates of every empty cell, in flat index order.
    pub fn possible_moves(&self) -> &[Coordinate] {
        &self.possible_moves
    }

    pub fn winner(&self) -> Winner {
        self.winner
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Number of cells holding `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        let target = symbol.to_cell();
        self.cells.iter().filter(|&&c| c == target).count()
    }

    /// Symbol whose turn it is under alternating play starting with X.
    pub fn next_symbol(&self) -> Symbol {
        if self.count(Symbol::X) <= self.count(Symbol::O) {
            Symbol::X
        } else {
            Symbol::O
        }
    }

    /// Place `symbol` at `coordinate`, returning the resulting board.
    pub fn apply_move(&self, coordinate: &Coordinate, symbol: Symbol) -> Result<Board, MoveError> {
        let index = coordinate.index().ok_or(MoveError::OutOfRange)?;
        if !self.cells[index].is_empty() {
            return Err(MoveError::CellOccupied);
        }
        let mut cells = self.cells;
        cells[index] = symbol.to_cell();
        Ok(Board::from_array(cells))
    }

    /// Parse `text` as a coordinate and apply it.
    pub fn apply_input(&self, text: &str, symbol: Symbol) -> Result<Board, MoveError> {
        let coordinate = Coordinate::parse(text)?;
        self.apply_move(&coordinate, symbol)
    }

    /// Fixed text block: a rule of nine dashes, three `| a b c |` rows, a rule.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(60);
        out.push_str("---------\n");
        for row in self.cells.chunks(GRID_SIZE) {
            out.push('|');
            for cell in row {
                out.push(' ');
                out.push(cell.to_char());
            }
            out.push_str(" |\n");
        }
        out.push_str("---------");
        out
    }

    /// Row-major cell text, the inverse of [`Board::from_cells`].
    pub fn to_cells(&self) -> String {
        self.cells.iter().map(|c| c.to_char()).collect()
    }

    fn classify(&self) -> GameState {
        let x = self.count(Symbol::X);
        let o = self.count(Symbol::O);
        let full = self.possible_moves.is_empty();

        if x.abs_diff(o) > 1 || self.winner == Winner::Both {
            GameState::Impossible
        } else if self.winner.includes(Symbol::X) {
            GameState::XWins
        } else if self.winner.includes(Symbol::O) {
            GameState::OWins
        } else if full {
            GameState::Draw
        } else if !full {
            GameState::InProgress
        } else {
            GameState::Unknown
        }
    }
}

/// Win predicate: some row, column or diagonal holds only `symbol`.
pub(crate) fn has_line(cells: &[Cell; NUM_CELLS], symbol: Symbol) -> bool {
    let target = symbol.to_cell();
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| cells[i] == target))
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Board {}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("cells", &self.to_cells())
            .field("state", &self.state)
            .finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

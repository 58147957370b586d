/// Width and height of the grid.
pub const GRID_SIZE: usize = 3;
/// Number of cells on the board.
pub const NUM_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Nine spaces: the board every game starts from.
pub const EMPTY_CELLS: &str = "         ";

/// The eight winning lines as flat indices: rows, then columns, then diagonals.
pub const LINES: [[usize; GRID_SIZE]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Flat index for a 1-indexed `(column, row)` pair, where rows count up from the
/// bottom of the grid. Pairs outside `1..=3` have no mapping.
pub const fn cell_index(column: i32, row: i32) -> Option<usize> {
    if column < 1 || column > GRID_SIZE as i32 || row < 1 || row > GRID_SIZE as i32 {
        return None;
    }
    let r = GRID_SIZE - row as usize;
    let c = column as usize - 1;
    Some(r * GRID_SIZE + c)
}

/// Inverse of [`cell_index`].
pub const fn cell_position(index: usize) -> (i32, i32) {
    let column = (index % GRID_SIZE) as i32 + 1;
    let row = (GRID_SIZE - index / GRID_SIZE) as i32;
    (column, row)
}

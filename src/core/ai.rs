// Move selection for the computer players.
// Every function is pure given the rng, so seeded runs are reproducible.

use alloc::vec::Vec;

use crate::core::{
    board::{has_line, Board},
    common::{Cell, Symbol},
    config::NUM_CELLS,
    coordinate::Coordinate,
};
use rand::Rng;

/// Score of a win found one ply deep. Deeper wins score lower so the search
/// prefers quick wins and late losses; it must exceed the number of cells.
const WIN_SCORE: i32 = 10;
const INFINITY: i32 = 100;

/// Uniformly random empty cell, or `None` on a full board.
pub fn random_move<'a, R: Rng + ?Sized>(board: &'a Board, rng: &mut R) -> Option<&'a Coordinate> {
    let moves = board.possible_moves();
    if moves.is_empty() {
        return None;
    }
    Some(&moves[rng.random_range(0..moves.len())])
}

/// First empty cell, in flat index order, that completes a line for `symbol`.
pub fn winning_move(board: &Board, symbol: Symbol) -> Option<&Coordinate> {
    board.possible_moves().iter().find(|coord| {
        coord.index().is_some_and(|index| {
            let mut cells = *board.cells();
            cells[index] = symbol.to_cell();
            has_line(&cells, symbol)
        })
    })
}

/// Win if possible, otherwise block the opponent's win, otherwise play randomly.
pub fn heuristic_move<'a, R: Rng + ?Sized>(
    board: &'a Board,
    symbol: Symbol,
    rng: &mut R,
) -> Option<&'a Coordinate> {
    winning_move(board, symbol)
        .or_else(|| winning_move(board, symbol.opponent()))
        .or_else(|| random_move(board, rng))
}

/// Negamax score of every empty cell for `symbol`, in flat index order.
/// Positive scores are forced wins, zero a draw with best play.
pub fn score_moves(board: &Board, symbol: Symbol) -> Vec<(Coordinate, i32)> {
    let mut scored = Vec::with_capacity(board.possible_moves().len());
    for coord in board.possible_moves() {
        let Some(index) = coord.index() else { continue };
        let mut cells = *board.cells();
        cells[index] = symbol.to_cell();
        let score = -negamax(&mut cells, symbol.opponent(), 1, -INFINITY, INFINITY);
        scored.push((coord.clone(), score));
    }
    scored
}

/// A best-scoring cell for `symbol`; ties are broken uniformly at random.
pub fn optimal_move<'a, R: Rng + ?Sized>(
    board: &'a Board,
    symbol: Symbol,
    rng: &mut R,
) -> Option<&'a Coordinate> {
    let scored = score_moves(board, symbol);
    let best = scored.iter().map(|&(_, score)| score).max()?;
    let candidates: Vec<&Coordinate> = board
        .possible_moves()
        .iter()
        .filter(|coord| scored.iter().any(|(c, score)| *score == best && c == *coord))
        .collect();
    Some(candidates[rng.random_range(0..candidates.len())])
}

/// Value of `cells` for the side to move, searched with alpha-beta pruning.
fn negamax(
    cells: &mut [Cell; NUM_CELLS],
    to_move: Symbol,
    depth: i32,
    mut alpha: i32,
    beta: i32,
) -> i32 {
    // only the side that just moved can have completed a line
    if has_line(cells, to_move.opponent()) {
        return -(WIN_SCORE - depth);
    }
    if cells.iter().all(|c| !c.is_empty()) {
        return 0;
    }

    let mut best = -INFINITY;
    for i in 0..NUM_CELLS {
        if !cells[i].is_empty() {
            continue;
        }
        cells[i] = to_move.to_cell();
        let score = -negamax(cells, to_move.opponent(), depth + 1, -beta, -alpha);
        cells[i] = Cell::Empty;

        best = best.max(score);
        alpha = alpha.max(best);
        if alpha >= beta {
            break;
        }
    }
    best
}

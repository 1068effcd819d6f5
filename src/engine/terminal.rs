//! Terminal-state detection
//!
//! A board with an empty cell always admits a move, so the adjacency scan
//! only runs on full boards: columns are checked as rows of the transpose.

use crate::board::Board;

/// True when no legal move remains
///
/// A board is terminal when every cell is occupied and no two equal tiles
/// are adjacent in any row or column.
pub fn is_terminal(board: &Board) -> bool {
    if board.has_empty() {
        return false;
    }
    !has_adjacent_pair(board) && !has_adjacent_pair(&board.transposed())
}

/// Whether any row holds two equal neighboring tiles
fn has_adjacent_pair(board: &Board) -> bool {
    board
        .rows()
        .iter()
        .any(|row| row.windows(2).any(|pair| matches!(pair, [a, b] if a == b)))
}

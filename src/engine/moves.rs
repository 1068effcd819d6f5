//! Whole-board moves
//!
//! [`shift`] is the deterministic half of a move: orient, slide every row,
//! orient back, sum the row scores. [`apply_move`] is the full turn a
//! collaborator requests: shift, reject no-ops, spawn a tile, and report
//! whether the resulting board is terminal.

use crate::board::grid::SIZE;
use crate::board::{Board, Direction};
use crate::engine::slide::slide_row_left;
use crate::engine::spawn::{RandomSource, spawn_tile};
use crate::engine::terminal::is_terminal;

/// Engine output for one applied direction
///
/// Created fresh per call; the engine retains nothing. `score` is the delta
/// earned by merges in this move only, and collaborators must check
/// `changed` before committing score or turn state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveResult {
    /// The board after slide, merge, and spawn
    pub board: Board,
    /// Sum of all tile values created by merges in this move
    pub score: u32,
    /// Whether the slide changed the board; `false` marks a rejected no-op
    pub changed: bool,
    /// Whether no further move is possible on the resulting board
    pub terminal: bool,
}

/// Slide and merge the whole board in one direction, without spawning
///
/// Returns the slid board and the score delta. Deterministic and
/// side-effect-free; [`apply_move`] builds the full turn on top of this, and
/// search-style collaborators can call it directly to expand positions.
pub fn shift(board: Board, direction: Direction) -> (Board, u32) {
    let orientation = direction.orientation();

    let mut oriented = board;
    if orientation.transpose {
        oriented = oriented.transposed();
    }
    if orientation.reverse_rows {
        oriented = oriented.reversed_rows();
    }

    let mut rows = [[0; SIZE]; SIZE];
    let mut score = 0;
    for (slot, row) in rows.iter_mut().zip(oriented.rows()) {
        let slid = slide_row_left(*row);
        *slot = slid.row;
        score += slid.score;
    }

    let mut result = Board::from_rows_raw(rows);
    if orientation.reverse_rows {
        result = result.reversed_rows();
    }
    if orientation.transpose {
        result = result.transposed();
    }

    (result, score)
}

/// Apply one move: slide, validate, spawn, and check for the end of the game
///
/// A move that leaves the board unchanged while an empty cell exists is a
/// rejected no-op: the input board comes back untouched with `changed` set
/// to `false` and no tile spawned. Any other move is accepted; if the slid
/// board has room, exactly one tile (2 or 4, even odds) spawns in a
/// uniformly chosen empty cell before the terminal check.
pub fn apply_move<R: RandomSource + ?Sized>(
    board: Board,
    direction: Direction,
    rng: &mut R,
) -> MoveResult {
    let (candidate, score) = shift(board, direction);
    let changed = candidate != board;

    if !changed && board.has_empty() {
        return MoveResult {
            board,
            score: 0,
            changed: false,
            terminal: false,
        };
    }

    let mut next = candidate;
    if next.has_empty() {
        spawn_tile(&mut next, rng);
    }

    MoveResult {
        board: next,
        score,
        changed,
        terminal: is_terminal(&next),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: [[u32; SIZE]; SIZE]) -> Board {
        match Board::from_rows(rows) {
            Ok(board) => board,
            Err(_) => unreachable!("test boards are valid"),
        }
    }

    /// Replays a fixed script of picks, for exact spawn placement
    struct Scripted {
        picks: Vec<usize>,
        cursor: usize,
    }

    impl Scripted {
        fn new(picks: &[usize]) -> Self {
            Self {
                picks: picks.to_vec(),
                cursor: 0,
            }
        }
    }

    impl RandomSource for Scripted {
        fn choose(&mut self, candidates: usize) -> usize {
            let pick = self.picks.get(self.cursor).copied().unwrap_or(0);
            self.cursor += 1;
            pick.min(candidates.saturating_sub(1))
        }
    }

    fn mixed_board() -> Board {
        board([
            [2, 2, 0, 0],
            [0, 4, 4, 0],
            [2, 0, 2, 0],
            [8, 8, 8, 8],
        ])
    }

    #[test]
    fn test_shift_left() {
        let (slid, score) = shift(mixed_board(), Direction::Left);
        assert_eq!(
            slid,
            board([
                [4, 0, 0, 0],
                [8, 0, 0, 0],
                [4, 0, 0, 0],
                [16, 16, 0, 0],
            ])
        );
        assert_eq!(score, 4 + 8 + 4 + 32);
    }

    #[test]
    fn test_shift_right() {
        let (slid, score) = shift(mixed_board(), Direction::Right);
        assert_eq!(
            slid,
            board([
                [0, 0, 0, 4],
                [0, 0, 0, 8],
                [0, 0, 0, 4],
                [0, 0, 16, 16],
            ])
        );
        assert_eq!(score, 48);
    }

    fn columnar_board() -> Board {
        board([
            [2, 0, 2, 8],
            [2, 4, 0, 8],
            [0, 4, 2, 8],
            [0, 0, 0, 8],
        ])
    }

    #[test]
    fn test_shift_up() {
        let (slid, score) = shift(columnar_board(), Direction::Up);
        assert_eq!(
            slid,
            board([
                [4, 8, 4, 16],
                [0, 0, 0, 16],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ])
        );
        assert_eq!(score, 48);
    }

    #[test]
    fn test_shift_down() {
        let (slid, score) = shift(columnar_board(), Direction::Down);
        assert_eq!(
            slid,
            board([
                [0, 0, 0, 0],
                [0, 0, 0, 0],
                [0, 0, 0, 16],
                [4, 8, 4, 16],
            ])
        );
        assert_eq!(score, 48);
    }

    #[test]
    fn test_right_is_left_on_reversed_rows() {
        for candidate in [mixed_board(), columnar_board()] {
            let (direct, direct_score) = shift(candidate, Direction::Right);
            let (via_left, via_score) = shift(candidate.reversed_rows(), Direction::Left);
            assert_eq!(direct, via_left.reversed_rows());
            assert_eq!(direct_score, via_score);
        }
    }

    #[test]
    fn test_up_is_left_on_transpose() {
        for candidate in [mixed_board(), columnar_board()] {
            let (direct, direct_score) = shift(candidate, Direction::Up);
            let (via_left, via_score) = shift(candidate.transposed(), Direction::Left);
            assert_eq!(direct, via_left.transposed());
            assert_eq!(direct_score, via_score);
        }
    }

    #[test]
    fn test_down_is_right_on_transpose() {
        for candidate in [mixed_board(), columnar_board()] {
            let (direct, direct_score) = shift(candidate, Direction::Down);
            let (via_right, via_score) = shift(candidate.transposed(), Direction::Right);
            assert_eq!(direct, via_right.transposed());
            assert_eq!(direct_score, via_score);
        }
    }

    #[test]
    fn test_noop_move_is_rejected_without_spawn() {
        let packed = board([
            [2, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let mut rng = Scripted::new(&[0, 0]);
        let result = apply_move(packed, Direction::Left, &mut rng);

        assert!(!result.changed);
        assert_eq!(result.board, packed);
        assert_eq!(result.score, 0);
        assert!(!result.terminal);
        // No pick was consumed: nothing spawned
        assert_eq!(rng.cursor, 0);
    }

    #[test]
    fn test_accepted_move_spawns_exactly_one_tile() {
        let start = board([
            [2, 2, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        // First empty cell after the slide is (0, 1); value pick 1 is a 4
        let mut rng = Scripted::new(&[0, 1]);
        let result = apply_move(start, Direction::Left, &mut rng);

        assert!(result.changed);
        assert_eq!(result.score, 4);
        assert!(!result.terminal);
        assert_eq!(
            result.board,
            board([
                [4, 4, 0, 0],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ])
        );
    }

    #[test]
    fn test_full_board_merge_is_accepted_and_spawns() {
        let full = board([
            [2, 2, 4, 8],
            [16, 32, 64, 128],
            [256, 512, 1024, 2048],
            [4, 8, 16, 32],
        ]);
        // The merge frees a cell at (0, 3); spawn a 2 there
        let mut rng = Scripted::new(&[0, 0]);
        let result = apply_move(full, Direction::Left, &mut rng);

        assert!(result.changed);
        assert_eq!(result.score, 4);
        assert_eq!(
            result.board,
            board([
                [4, 4, 8, 2],
                [16, 32, 64, 128],
                [256, 512, 1024, 2048],
                [4, 8, 16, 32],
            ])
        );
        assert!(!result.terminal);
    }

    #[test]
    fn test_full_unchanged_board_reports_terminal() {
        // No direction can change this board; the move is not a rejection
        // (no empty cell exists), and the terminal flag is evaluated.
        let stuck = board([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        let mut rng = Scripted::new(&[]);
        let result = apply_move(stuck, Direction::Left, &mut rng);

        assert!(!result.changed);
        assert_eq!(result.board, stuck);
        assert_eq!(result.score, 0);
        assert!(result.terminal);
    }

    #[test]
    fn test_last_move_can_end_the_game() {
        let nearly_stuck = board([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [2, 4, 2, 0],
        ]);
        // The bottom row slides right, freeing (3, 0); spawning a 4 there
        // completes an alternating grid with no adjacent pairs.
        let mut rng = Scripted::new(&[0, 1]);
        let result = apply_move(nearly_stuck, Direction::Right, &mut rng);

        assert!(result.changed);
        assert_eq!(result.score, 0);
        assert_eq!(
            result.board,
            board([
                [2, 4, 2, 4],
                [4, 2, 4, 2],
                [2, 4, 2, 4],
                [4, 2, 4, 2],
            ])
        );
        assert!(result.terminal);
    }
}

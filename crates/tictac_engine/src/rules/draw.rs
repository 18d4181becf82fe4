//! Full-board detection.

use crate::{Grid, Square};
use tracing::instrument;

/// Checks if the board is full (no square is empty).
///
/// A full board with no winning line is a tie.
#[instrument(skip(board))]
pub fn board_full(board: &Grid<Square>) -> bool {
    board.iter().all(|s| !s.is_empty())
}
